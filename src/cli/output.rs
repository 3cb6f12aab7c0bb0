//! Terminal output for a sync run.
//!
//! Results go to stdout. Warnings, errors and hints go to stderr so the
//! summary can be piped on its own. Styling follows `console`'s terminal
//! detection; `NO_COLOR` turns it off everywhere.

use console::{style, Term};
use std::fmt::Display;
use std::path::Path;

use crate::core::summary::Summary;

/// Apply `NO_COLOR` before anything is printed.
pub fn init() {
    if std::env::var_os("NO_COLOR").is_some() {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }
}

/// `vault https://kv.vault.azure.net`
pub fn vault(url: &str) {
    println!("{} {}", style("vault").dim(), style(url).bold());
}

/// Start the `connecting to Key Vault... ` line; [`connected`] ends it.
pub fn connecting() {
    let _ = Term::stdout().write_str("connecting to Key Vault... ");
}

pub fn connected(ok: bool) {
    if ok {
        println!("{}", style("ok").green());
    } else {
        println!("{}", style("failed").red());
    }
}

/// `⚠ could not process secret 'bad': invalid secret name format: bad`
pub fn skipped(identifier: &str, reason: &impl Display) {
    warn(&format!("could not process secret '{}': {}", identifier, reason));
}

pub fn warn(msg: &str) {
    eprintln!("{} {}", style("⚠").yellow().for_stderr(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().for_stderr(), msg);
}

pub fn hint(msg: &str) {
    eprintln!("{}", style(format!("→ {}", msg)).cyan().for_stderr());
}

/// `✓ generated config/credentials.yml with 3 credential entries`
pub fn generated(path: &Path, count: usize) {
    println!(
        "{} generated {} with {} credential entries",
        style("✓").green(),
        style(path.display()).cyan(),
        count
    );
}

/// Print the end-of-run report:
///
/// ```text
/// Summary
///   downloaded  3 credential entries
///   generated   config/credentials.yml
///
/// Credentials by organization
///   bge: login, payments
///   comed: outages
/// ```
pub fn summary(summary: &Summary, path: &Path) {
    println!();
    println!("{}", style("Summary").bold());
    println!(
        "  {}  {} credential entries",
        style("downloaded").dim(),
        summary.total
    );
    println!("  {}   {}", style("generated").dim(), path.display());

    println!();
    println!("{}", style("Credentials by organization").bold());
    for org in &summary.organizations {
        println!("  {}: {}", org.organization, org.categories.join(", "));
    }
}
