//! Bank error types.

use moneta_shared::Currency;
use thiserror::Error;

/// Exchange-rate errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    /// Rate is zero or negative.
    #[error("Invalid rate {rate} for {from} -> {to}: rates must be positive")]
    InvalidRate {
        /// Source currency.
        from: Currency,
        /// Target currency.
        to: Currency,
        /// Rejected rate.
        rate: i64,
    },

    /// No rate registered for the pair (strict reduction only).
    #[error("No exchange rate registered for {from} -> {to}")]
    MissingRate {
        /// Source currency.
        from: Currency,
        /// Target currency.
        to: Currency,
    },
}
