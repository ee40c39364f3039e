// ⚠️ Account Errors - one kind, many reasons
// Every precondition violation surfaces as InvalidArgument; the Violation
// says which rule was broken.

use thiserror::Error;

// ============================================================================
// VIOLATION
// ============================================================================

/// The specific precondition an operation rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Owner name was empty at construction
    EmptyOwner,

    /// Opening balance was below zero
    NegativeInitialBalance,

    /// Deposit amount was zero or negative
    NonPositiveDeposit,

    /// Withdrawal amount was zero or negative
    NonPositiveWithdrawal,

    /// Withdrawal amount exceeded the balance
    InsufficientFunds,

    /// Rate provider returned a negative monthly rate
    NegativeRate,

    /// Fee lookup was asked about a negative balance
    NegativeFeeBalance,
}

impl Violation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Violation::EmptyOwner => "owner empty",
            Violation::NegativeInitialBalance => "negative initial balance",
            Violation::NonPositiveDeposit => "deposit <= 0",
            Violation::NonPositiveWithdrawal => "withdraw <= 0",
            Violation::InsufficientFunds => "insufficient funds",
            Violation::NegativeRate => "rate < 0",
            Violation::NegativeFeeBalance => "negative balance for fee lookup",
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ACCOUNT ERROR
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error("invalid argument: {0}")]
    InvalidArgument(Violation),
}

impl AccountError {
    /// Which rule was broken
    pub fn violation(&self) -> Violation {
        match self {
            AccountError::InvalidArgument(v) => *v,
        }
    }
}

impl From<Violation> for AccountError {
    fn from(v: Violation) -> Self {
        AccountError::InvalidArgument(v)
    }
}

pub type Result<T> = std::result::Result<T, AccountError>;
