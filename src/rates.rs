// 📈 Rate Providers - where monthly interest rates come from
// The account asks a provider once per interest run; it never owns one.

use anyhow::{Context as AnyhowContext, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// RATE PROVIDER CAPABILITY
// ============================================================================

/// Supplies the monthly interest rate for an account.
///
/// Rates are fractions: `0.0125` means 1.25% per month. Implementations are
/// free to return a negative rate; rejecting it is the account's job.
pub trait RateProvider {
    fn monthly_rate(&self, account_id: &str) -> f64;
}

/// Closures work as providers, which keeps test doubles short
impl<F> RateProvider for F
where
    F: Fn(&str) -> f64,
{
    fn monthly_rate(&self, account_id: &str) -> f64 {
        self(account_id)
    }
}

// ============================================================================
// FIXED RATE
// ============================================================================

/// Same rate for every account
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedRate(pub f64);

impl RateProvider for FixedRate {
    fn monthly_rate(&self, _account_id: &str) -> f64 {
        self.0
    }
}

// ============================================================================
// RATE TABLE
// ============================================================================

/// Per-account rates with a fallback for accounts not listed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    /// Rate used when the account id has no entry
    #[serde(default)]
    pub default_rate: f64,

    /// Account id → monthly rate
    #[serde(default)]
    pub rates: HashMap<String, f64>,
}

impl RateTable {
    /// Create an empty table that answers `default_rate` for everyone
    pub fn new(default_rate: f64) -> Self {
        RateTable {
            default_rate,
            rates: HashMap::new(),
        }
    }

    /// Parse a table from JSON text
    ///
    /// Example: `{"default_rate": 0.01, "rates": {"A1": 0.0125}}`
    pub fn from_json(json: &str) -> Result<Self> {
        let table: RateTable =
            serde_json::from_str(json).context("Failed to parse rate table JSON")?;
        Ok(table)
    }

    /// Set (or replace) the rate for one account
    pub fn set_rate(&mut self, account_id: impl Into<String>, rate: f64) {
        self.rates.insert(account_id.into(), rate);
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl RateProvider for RateTable {
    fn monthly_rate(&self, account_id: &str) -> f64 {
        self.rates
            .get(account_id)
            .copied()
            .unwrap_or(self.default_rate)
    }
}

// ============================================================================
// TESTS
// ============================================================================
