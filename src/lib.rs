// Bank Account - Core Library
// Exposes the account model and its companion utilities for the CLI and tests

pub mod error;
pub mod entities;
pub mod fees;
pub mod rates;
pub mod checks;
pub mod process;

// Re-export commonly used types
pub use error::{AccountError, Result, Violation};
pub use entities::{Account, AccountStatement};
pub use fees::{FeeSchedule, FeeTier};
pub use rates::{FixedRate, RateProvider, RateTable};
pub use checks::{check_iban_shape, in_closed_range, looks_like_iban, IbanShapeError};
pub use process::{fatal_guard, maybe_exit, HELP_EXIT_CODE, USAGE};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
