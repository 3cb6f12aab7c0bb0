//! Shared HTTP client setup.

use std::time::Duration;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("kvcreds/", env!("CARGO_PKG_VERSION"));

/// Build a blocking HTTP agent.
///
/// Non-2xx statuses are returned as responses rather than errors so callers
/// can map them to store-specific errors.
pub fn agent(timeout: Duration) -> ureq::Agent {
    let config = ureq::Agent::config_builder()
        .timeout_global(Some(timeout))
        .http_status_as_error(false)
        .build();
    config.into()
}

/// Pull a readable message out of an error body.
///
/// Understands Key Vault (`{"error":{"code","message"}}`) and OAuth2
/// (`{"error","error_description"}`) shapes; anything else is returned
/// trimmed.
pub fn describe_error_body(body: &str) -> String {
    let parsed: serde_json::Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(_) => return body.trim().to_string(),
    };

    match parsed.get("error") {
        Some(serde_json::Value::Object(err)) => {
            let code = err.get("code").and_then(|c| c.as_str()).unwrap_or("Error");
            let message = err.get("message").and_then(|m| m.as_str()).unwrap_or("");
            format!("{}: {}", code, message)
        }
        Some(serde_json::Value::String(code)) => {
            match parsed.get("error_description").and_then(|d| d.as_str()) {
                Some(description) => format!("{}: {}", code, description),
                None => code.clone(),
            }
        }
        _ => body.trim().to_string(),
    }
}
