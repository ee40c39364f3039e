// 💳 Account Entity - identity, owner, balance
//
// The id and owner never change after construction; the balance moves
// through deposit, withdraw and interest. Every operation checks its own
// preconditions before touching the balance, so a rejected call is a no-op.

use crate::error::{Result, Violation};
use crate::fees::{FeeSchedule, FeeTier};
use crate::rates::RateProvider;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, warn};

// ============================================================================
// ACCOUNT ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    /// Identifier, set at construction. Not checked for uniqueness.
    id: String,

    /// Display name, non-empty at construction
    owner: String,

    /// Current balance
    balance: f64,
}

impl Account {
    /// Create an account with an opening balance
    ///
    /// Fails when `owner` is empty or `initial_balance` is negative.
    pub fn new(
        id: impl Into<String>,
        owner: impl Into<String>,
        initial_balance: f64,
    ) -> Result<Self> {
        let id = id.into();
        let owner = owner.into();

        if owner.is_empty() {
            warn!(account_id = %id, "rejected account: owner empty");
            return Err(Violation::EmptyOwner.into());
        }
        if initial_balance < 0.0 {
            warn!(account_id = %id, initial_balance, "rejected account: negative initial balance");
            return Err(Violation::NegativeInitialBalance.into());
        }

        debug!(account_id = %id, owner = %owner, initial_balance, "account created");

        Ok(Account {
            id,
            owner,
            balance: initial_balance,
        })
    }

    /// Create an account with a zero balance
    pub fn with_owner(id: impl Into<String>, owner: impl Into<String>) -> Result<Self> {
        Self::new(id, owner, 0.0)
    }

    /// Create an account with a freshly generated UUID as its id
    pub fn open(owner: impl Into<String>, initial_balance: f64) -> Result<Self> {
        Self::new(uuid::Uuid::new_v4().to_string(), owner, initial_balance)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Add a positive amount to the balance. No upper bound.
    pub fn deposit(&mut self, amount: f64) -> Result<()> {
        if amount <= 0.0 {
            warn!(account_id = %self.id, amount, "rejected deposit: amount <= 0");
            return Err(Violation::NonPositiveDeposit.into());
        }

        self.balance += amount;
        debug!(account_id = %self.id, amount, balance = self.balance, "deposit applied");
        Ok(())
    }

    /// Take a positive amount out of the balance, never more than it holds
    pub fn withdraw(&mut self, amount: f64) -> Result<()> {
        if amount <= 0.0 {
            warn!(account_id = %self.id, amount, "rejected withdrawal: amount <= 0");
            return Err(Violation::NonPositiveWithdrawal.into());
        }
        if amount > self.balance {
            warn!(
                account_id = %self.id,
                amount,
                balance = self.balance,
                "rejected withdrawal: insufficient funds"
            );
            return Err(Violation::InsufficientFunds.into());
        }

        self.balance -= amount;
        debug!(account_id = %self.id, amount, balance = self.balance, "withdrawal applied");
        Ok(())
    }

    /// Grow the balance by one month of interest
    ///
    /// The provider is asked exactly once. A negative rate is rejected and
    /// the balance stays as it was.
    pub fn apply_monthly_interest<P>(&mut self, provider: &P) -> Result<()>
    where
        P: RateProvider + ?Sized,
    {
        let rate = provider.monthly_rate(&self.id);
        if rate < 0.0 {
            warn!(account_id = %self.id, rate, "rejected interest: rate < 0");
            return Err(Violation::NegativeRate.into());
        }

        self.balance += self.balance * rate;
        debug!(account_id = %self.id, rate, balance = self.balance, "interest applied");
        Ok(())
    }

    /// Monthly fee for a balance under the standard schedule
    ///
    /// - `[0, 1000)` → 5.0
    /// - `[1000, 5000)` → 2.5
    /// - `5000` and up → 0.0
    pub fn monthly_fee_for(balance: f64) -> Result<f64> {
        FeeSchedule::default().fee_for(balance)
    }

    /// Monthly fee for this account's current balance
    pub fn monthly_fee(&self) -> Result<f64> {
        Self::monthly_fee_for(self.balance)
    }

    /// Snapshot of the account for display
    pub fn statement(&self) -> Result<AccountStatement> {
        let tier = FeeTier::for_balance(self.balance)?;

        Ok(AccountStatement {
            id: self.id.clone(),
            owner: self.owner.clone(),
            balance: self.balance,
            fee_tier: tier,
            monthly_fee: tier.fee(),
            generated_at: Utc::now(),
        })
    }
}

// ============================================================================
// ACCOUNT STATEMENT
// ============================================================================

/// Point-in-time view of an account, serialized by the CLI
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountStatement {
    pub id: String,
    pub owner: String,
    pub balance: f64,
    pub fee_tier: FeeTier,
    pub monthly_fee: f64,
    pub generated_at: DateTime<Utc>,
}

// ============================================================================
// TESTS
// ============================================================================
