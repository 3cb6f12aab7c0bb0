//! Tests for pulling a vault into the credentials file.

use crate::support::*;

#[test]
fn test_sync_writes_default_output_file() {
    let t = Test::new();
    let vault = MockVault::start(standard_secrets());

    let output = t.sync(&vault);
    assert_success(&output);

    assert_eq!(t.read_output(), STANDARD_CREDENTIALS_YAML);
    assert_stdout_contains(&output, "with 4 credential entries");
}

#[test]
fn test_sync_reads_url_from_environment() {
    let t = Test::new();
    let vault = MockVault::start(standard_secrets());

    let output = t
        .cmd()
        .env("KEYVAULT_URL", vault.url())
        .env("KEYVAULT_ACCESS_TOKEN", TEST_TOKEN)
        .output()
        .unwrap();
    assert_success(&output);

    assert!(t.default_output().exists());
}

#[test]
fn test_sync_flag_overrides_environment_url() {
    let t = Test::new();
    let vault = MockVault::start(standard_secrets());

    let output = t
        .vault_cmd(&vault)
        .env("KEYVAULT_URL", "https://wrong.invalid")
        .output()
        .unwrap();
    assert_success(&output);
}

#[test]
fn test_sync_custom_output_file_creates_directories() {
    let t = Test::new();
    let vault = MockVault::start(standard_secrets());

    let output = t.sync_with(&vault, &["--output-file", "out/nested/creds.yml"]);
    assert_success(&output);

    assert_eq!(t.read("out/nested/creds.yml"), STANDARD_CREDENTIALS_YAML);
    assert!(!t.default_output().exists());
}

#[test]
fn test_sync_skips_unparseable_name_with_warning() {
    let t = Test::new();
    let vault = MockVault::start(vec![
        MockSecret::plain("acme-billing-qa", "pw"),
        MockSecret::plain("bad", "pw"),
    ]);

    let output = t.sync(&vault);
    assert_success(&output);

    assert_stderr_contains(&output, "could not process secret 'bad'");
    let yaml = t.read_output();
    assert_eq!(yaml.matches("- organization:").count(), 1);
    assert!(yaml.contains("testName: qa"));
}

#[test]
fn test_sync_skips_denied_secret() {
    let t = Test::new();
    let vault = MockVault::start(vec![
        MockSecret::failing("acme-locked", 403),
        MockSecret::plain("acme-login", "pw"),
    ]);

    let output = t.sync(&vault);
    assert_success(&output);

    assert_stderr_contains(&output, "access denied to secret: acme-locked");
    let yaml = t.read_output();
    assert!(yaml.contains("testCategory: login"));
    assert!(!yaml.contains("locked"));
}

#[test]
fn test_sync_follows_pagination() {
    let t = Test::new();
    let secrets: Vec<MockSecret> = (0..7)
        .map(|i| MockSecret::plain(&format!("org{}-login", i), "pw"))
        .collect();
    let vault = MockVault::start(secrets);

    let output = t.sync(&vault);
    assert_success(&output);

    let yaml = t.read_output();
    assert_eq!(yaml.matches("- organization:").count(), 7);
    assert!(yaml.contains("organization: org6"));
}

#[test]
fn test_sync_omits_default_test_name() {
    let t = Test::new();
    let vault = MockVault::start(vec![MockSecret::plain("bge-outages-default", "pw")]);

    let output = t.sync(&vault);
    assert_success(&output);

    assert!(!t.read_output().contains("testName"));
}

#[test]
fn test_sync_username_tag() {
    let t = Test::new();
    let vault = MockVault::start(vec![
        MockSecret::tagged("acme-billing", "pw", &[("Username", "qa1")]),
        MockSecret::plain("acme-login", "pw"),
    ]);

    let output = t.sync(&vault);
    assert_success(&output);

    let yaml = t.read_output();
    assert!(yaml.contains("username: qa1"));
    assert!(yaml.contains("username: user_acme_login"));
}

#[test]
fn test_sync_empty_vault_exits_zero_without_file() {
    let t = Test::new();
    let vault = MockVault::empty();

    let output = t.sync(&vault);
    assert_success(&output);

    assert_stderr_contains(&output, "no credentials found");
    assert!(!t.default_output().exists());
    assert!(!t.dir.path().join("config").exists());
}

#[test]
fn test_sync_all_secrets_skipped_keeps_existing_file() {
    let t = Test::new();
    std::fs::create_dir_all(t.dir.path().join("config")).unwrap();
    std::fs::write(t.default_output(), "- previous\n").unwrap();
    let vault = MockVault::start(vec![MockSecret::plain("bad", "pw")]);

    let output = t.sync(&vault);
    assert_success(&output);

    assert_eq!(t.read_output(), "- previous\n");
}

#[test]
fn test_sync_twice_is_byte_identical() {
    let t = Test::new();
    let vault = MockVault::start(standard_secrets());

    assert_success(&t.sync(&vault));
    let first = std::fs::read(t.default_output()).unwrap();

    assert_success(&t.sync(&vault));
    let second = std::fs::read(t.default_output()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_sync_prints_summary_by_organization() {
    let t = Test::new();
    let vault = MockVault::start(standard_secrets());

    let output = t.sync(&vault);
    assert_success(&output);

    assert_stdout_contains(&output, "Summary");
    assert_stdout_contains(&output, "4 credential entries");
    assert_stdout_contains(&output, "Credentials by organization");
    assert_stdout_contains(&output, "bge: login, outages, payments");
    assert_stdout_contains(&output, "comed: payments");
}

#[test]
fn test_sync_summary_layout() {
    let t = Test::new();
    let vault = MockVault::start(standard_secrets());

    let output = t.sync(&vault);
    assert_success(&output);

    let expected = "\
Summary
  downloaded  4 credential entries
  generated   config/credentials.yml

Credentials by organization
  bge: login, outages, payments
  comed: payments
";
    assert!(
        stdout(&output).ends_with(expected),
        "unexpected summary:\n{}",
        stdout(&output)
    );
}

#[test]
fn test_sync_never_prints_secret_values() {
    let t = Test::new();
    let vault = MockVault::start(standard_secrets());

    let output = t.sync(&vault);
    assert_success(&output);

    let out = stdout(&output) + &stderr(&output);
    assert!(!out.contains("bge-login-pw"));
    assert!(!out.contains(TEST_TOKEN));
}
