// Entity Models
// An account keeps its identity; only its balance changes.

pub mod account;

pub use account::{Account, AccountStatement};
