//! K-Beauty Hub console: a terminal front-end over the session manager.
//!
//! Each invocation restores the persisted session, runs one command and
//! exits. Routing decisions (what to show when signed out or denied)
//! live here, never in the auth crate.

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use kbhub_auth::{CredentialVerifier, SessionManager, default_menu, ensure_access};
use kbhub_core::models::directory::UserFilter;
use kbhub_core::models::permission::Requirement;
use kbhub_core::models::settings::{StoreSettings, UpdateSettings};
use kbhub_core::repository::DirectoryRepository;
use kbhub_store::{FileStore, SeededDirectory, StaticAccountRepository};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, SettingsArgs, UserArgs};

type Manager = SessionManager<StaticAccountRepository, Box<dyn CredentialVerifier>, FileStore>;

fn init_tracing(json: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("kbhub=info"))
        .context("invalid log filter")?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json)?;
    tracing::debug!(state_file = %cli.state_file.display(), "Starting console");

    let config = cli.auth_config();
    let accounts = cli.accounts().context("failed to load account table")?;
    let verifier = cli.credential_verifier(&config);
    let mut manager: Manager =
        SessionManager::new(accounts, verifier, FileStore::new(&cli.state_file), config);
    manager.restore().await;

    match cli.command {
        Command::Login { email, password } => login(&mut manager, &email, &password).await,
        Command::Logout => {
            manager.logout();
            println!("Signed out.");
            Ok(())
        }
        Command::Whoami => whoami(&manager),
        Command::Menu => menu(&manager),
        Command::Users(args) => users(&manager, args).await,
        Command::Settings(args) => settings(&manager, args),
    }
}

async fn login(manager: &mut Manager, email: &str, password: &str) -> Result<()> {
    match manager.login(email, password).await {
        Ok(account) => {
            println!("Welcome, {} ({}).", account.display_name, account.role);
            menu(manager)
        }
        Err(kbhub_auth::AuthError::InvalidCredentials) => {
            bail!("Invalid email or password.")
        }
        Err(e) => Err(e).context("login failed"),
    }
}

fn whoami(manager: &Manager) -> Result<()> {
    let Some(session) = manager.current() else {
        println!("Not signed in. Run `kbhub login`.");
        return Ok(());
    };
    let account = &session.account;
    println!("{} <{}>", account.display_name, account.email);
    println!("  role:        {}", account.role);
    println!("  permissions: {}", account.permissions);
    println!("  signed in:   {}", session.issued_at.to_rfc3339());
    Ok(())
}

fn menu(manager: &Manager) -> Result<()> {
    if manager.current().is_none() {
        println!("Not signed in. Run `kbhub login`.");
        return Ok(());
    }
    let entries = default_menu();
    for entry in manager.visible_entries(&entries) {
        println!("{:<10} {}", entry.label, entry.path);
    }
    Ok(())
}

async fn users(manager: &Manager, args: UserArgs) -> Result<()> {
    ensure_access(manager.current(), &Requirement::section("users"), "users")?;

    let directory = SeededDirectory::seeded()?;
    let all = directory.list().await?;
    let filter = UserFilter {
        search: args.search,
        role: args.role,
        status: args.status,
    };
    let shown = filter.apply(&all);
    for user in &shown {
        println!(
            "{:>3}  {:<16} {:<28} {:<8} {:<9} {}",
            user.id,
            user.name,
            user.email,
            user.role,
            user.status,
            user.joined_at
        );
    }
    println!("{} of {} users", shown.len(), all.len());
    Ok(())
}

fn settings(manager: &Manager, args: SettingsArgs) -> Result<()> {
    ensure_access(manager.current(), &Requirement::section("settings"), "settings")?;

    let mut settings = StoreSettings::default();
    settings.apply(UpdateSettings {
        store_name: args.store_name,
        contact_email: args.contact_email,
        currency: args.currency,
        timezone: args.timezone,
        order_emails: args.order_emails,
        low_stock_alerts: args.low_stock_alerts,
        weekly_report: args.weekly_report,
    })?;
    println!("{}", serde_json::to_string_pretty(&settings)?);
    Ok(())
}
