use anyhow::{Context, Result};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bank_account::{fatal_guard, maybe_exit, Account, FixedRate};

fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    // `--help` ends the process here
    if args.len() > 1 {
        maybe_exit(&args[1]);
    }

    match args.get(1).map(String::as_str) {
        Some("guard") => {
            let message = args.get(2).map(String::as_str).unwrap_or("guard requested");
            fatal_guard(true, message);
        }
        None | Some("statement") => run_statement()?,
        Some(other) => {
            anyhow::bail!("unknown command: {other} (try --help)");
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout stays machine-readable
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bank_account=warn,bank_tool=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Account settings for the statement run, read from the environment
#[derive(Debug, Clone, PartialEq)]
struct ToolConfig {
    /// `BANK_ACCOUNT_ID`; a UUID is generated when unset
    account_id: Option<String>,

    /// `BANK_OWNER`
    owner: String,

    /// `BANK_OPENING_BALANCE`
    opening_balance: f64,

    /// `BANK_MONTHLY_RATE`
    monthly_rate: f64,
}

impl Default for ToolConfig {
    fn default() -> Self {
        ToolConfig {
            account_id: None,
            owner: "Alice".to_string(),
            opening_balance: 1000.0,
            monthly_rate: 0.0125,
        }
    }
}

impl ToolConfig {
    fn from_env() -> Result<Self> {
        let mut config = ToolConfig::default();

        if let Ok(id) = env::var("BANK_ACCOUNT_ID") {
            config.account_id = Some(id);
        }
        if let Ok(owner) = env::var("BANK_OWNER") {
            config.owner = owner;
        }
        if let Ok(raw) = env::var("BANK_OPENING_BALANCE") {
            config.opening_balance = raw
                .parse()
                .with_context(|| format!("BANK_OPENING_BALANCE is not a number: {raw:?}"))?;
        }
        if let Ok(raw) = env::var("BANK_MONTHLY_RATE") {
            config.monthly_rate = raw
                .parse()
                .with_context(|| format!("BANK_MONTHLY_RATE is not a number: {raw:?}"))?;
        }

        Ok(config)
    }
}

// ============================================================================
// STATEMENT
// ============================================================================

/// Open the configured account, apply one month of interest, print JSON
fn run_statement() -> Result<()> {
    let config = ToolConfig::from_env()?;

    let mut account = match &config.account_id {
        Some(id) => Account::new(id.clone(), config.owner.clone(), config.opening_balance),
        None => Account::open(config.owner.clone(), config.opening_balance),
    }
    .context("Failed to open account")?;

    account
        .apply_monthly_interest(&FixedRate(config.monthly_rate))
        .context("Failed to apply monthly interest")?;

    let statement = account.statement()?;
    tracing::info!(
        account_id = %statement.id,
        balance = statement.balance,
        monthly_fee = statement.monthly_fee,
        "statement ready"
    );

    println!("{}", serde_json::to_string_pretty(&statement)?);

    Ok(())
}
