//! Command-line arguments.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use kbhub_auth::{Argon2Verifier, AuthConfig, CredentialVerifier, PlaintextVerifier};
use kbhub_core::models::account::Role;
use kbhub_core::models::directory::UserStatus;
use kbhub_store::{StaticAccountRepository, StoreError};

#[derive(Debug, Parser)]
#[command(name = "kbhub", version, about = "K-Beauty Hub back office")]
pub struct Cli {
    /// File holding the persisted session slot.
    #[arg(long, env = "KBHUB_STATE_FILE", default_value = ".kbhub/state.json")]
    pub state_file: PathBuf,

    /// JSON account table to use instead of the seeded accounts.
    #[arg(long, env = "KBHUB_ACCOUNTS_FILE")]
    pub accounts_file: Option<PathBuf>,

    /// How stored credentials are checked.
    #[arg(long, env = "KBHUB_VERIFIER", value_enum, default_value_t = VerifierKind::Plaintext)]
    pub verifier: VerifierKind,

    /// Pepper prepended to secrets before Argon2id verification.
    #[arg(long, env = "KBHUB_PEPPER", hide_env_values = true)]
    pub pepper: Option<String>,

    /// Simulated latency of the credential lookup, in milliseconds.
    #[arg(long, env = "KBHUB_LOGIN_LATENCY_MS", default_value_t = 500)]
    pub login_latency_ms: u64,

    /// Give up on a login after this many milliseconds.
    #[arg(long, env = "KBHUB_LOGIN_TIMEOUT_MS")]
    pub login_timeout_ms: Option<u64>,

    /// Emit logs as JSON.
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VerifierKind {
    /// Exact match; only for the seeded mock accounts.
    Plaintext,
    /// Argon2id PHC hashes, optionally peppered.
    Argon2,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in and persist the session.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "KBHUB_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Sign out and clear the persisted session.
    Logout,
    /// Show the signed-in account.
    Whoami,
    /// List the navigation entries the current session may open.
    Menu,
    /// Browse the user directory.
    Users(UserArgs),
    /// Show the store settings, optionally applying edits first.
    Settings(SettingsArgs),
}

#[derive(Debug, Args)]
pub struct UserArgs {
    /// Case-insensitive match on name or email.
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long)]
    pub role: Option<Role>,
    #[arg(long)]
    pub status: Option<UserStatus>,
}

#[derive(Debug, Args)]
pub struct SettingsArgs {
    #[arg(long)]
    pub store_name: Option<String>,
    #[arg(long)]
    pub contact_email: Option<String>,
    #[arg(long)]
    pub currency: Option<String>,
    #[arg(long)]
    pub timezone: Option<String>,
    #[arg(long)]
    pub order_emails: Option<bool>,
    #[arg(long)]
    pub low_stock_alerts: Option<bool>,
    #[arg(long)]
    pub weekly_report: Option<bool>,
}

impl Cli {
    pub fn auth_config(&self) -> AuthConfig {
        AuthConfig {
            login_latency: Duration::from_millis(self.login_latency_ms),
            login_timeout: self.login_timeout_ms.map(Duration::from_millis),
            pepper: self.pepper.clone(),
            ..Default::default()
        }
    }

    pub fn credential_verifier(&self, config: &AuthConfig) -> Box<dyn CredentialVerifier> {
        match self.verifier {
            VerifierKind::Plaintext => Box::new(PlaintextVerifier),
            VerifierKind::Argon2 => Box::new(Argon2Verifier::from_config(config)),
        }
    }

    pub fn accounts(&self) -> Result<StaticAccountRepository, StoreError> {
        match &self.accounts_file {
            Some(path) => StaticAccountRepository::from_file(path),
            None => Ok(StaticAccountRepository::seeded()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_plaintext_without_pepper() {
        let cli = Cli::try_parse_from(["kbhub", "whoami"]).unwrap();
        assert_eq!(cli.verifier, VerifierKind::Plaintext);
        assert_eq!(cli.auth_config().pepper, None);
        assert!(cli.accounts_file.is_none());

        let config = cli.auth_config();
        let verifier = cli.credential_verifier(&config);
        assert!(verifier.verify("admin123", "admin123").unwrap());
    }

    #[test]
    fn argon2_and_pepper_reach_the_verifier() {
        let cli = Cli::try_parse_from([
            "kbhub",
            "--verifier",
            "argon2",
            "--pepper",
            "pepper!",
            "--accounts-file",
            "accounts.json",
            "menu",
        ])
        .unwrap();
        assert_eq!(cli.verifier, VerifierKind::Argon2);

        let config = cli.auth_config();
        assert_eq!(config.pepper.as_deref(), Some("pepper!"));

        // A plaintext stored value is not a PHC hash, so only the Argon2
        // verifier rejects it as uninterpretable.
        let verifier = cli.credential_verifier(&config);
        assert!(verifier.verify("admin123", "admin123").is_err());
        assert_eq!(cli.accounts_file, Some(PathBuf::from("accounts.json")));
    }

    #[test]
    fn unknown_verifier_is_rejected() {
        assert!(Cli::try_parse_from(["kbhub", "--verifier", "md5", "whoami"]).is_err());
    }
}
