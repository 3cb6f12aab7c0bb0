//! Command helper methods for Test.

use super::fixtures::TEST_TOKEN;
use super::mock_vault::MockVault;
use super::Test;
use assert_cmd::Command;
use std::process::Output;

/// Variables that would otherwise leak a developer's setup into the run.
const SCRUBBED_ENV: &[&str] = &[
    "KEYVAULT_URL",
    "KEYVAULT_ACCESS_TOKEN",
    "AZURE_TENANT_ID",
    "AZURE_CLIENT_ID",
    "AZURE_CLIENT_SECRET",
    "AZURE_AUTHORITY_HOST",
    "KVCREDS_LOG",
];

impl Test {
    /// Create a kvcreds command with a clean environment.
    ///
    /// Returns a Command configured with:
    /// - Current directory set to the test working directory
    /// - PATH pointing at an empty directory
    /// - Credential variables removed and colors disabled
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("kvcreds").expect("failed to find kvcreds binary");
        for var in SCRUBBED_ENV {
            cmd.env_remove(var);
        }
        cmd.env("PATH", self.bin.path());
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Command pointed at `vault` with a valid token.
    pub fn vault_cmd(&self, vault: &MockVault) -> Command {
        let mut cmd = self.cmd();
        cmd.args(["--keyvault-url", &vault.url()]);
        cmd.env("KEYVAULT_ACCESS_TOKEN", TEST_TOKEN);
        cmd
    }

    /// Shortcut for a default sync against `vault`.
    pub fn sync(&self, vault: &MockVault) -> Output {
        self.vault_cmd(vault)
            .output()
            .expect("failed to run kvcreds")
    }

    /// Sync against `vault` with extra arguments.
    pub fn sync_with(&self, vault: &MockVault, args: &[&str]) -> Output {
        self.vault_cmd(vault)
            .args(args)
            .output()
            .expect("failed to run kvcreds")
    }
}
