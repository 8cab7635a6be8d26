//! The bank: owns the rate table and reduces expressions against it.
//!
//! The bank does not inspect expression shapes. It hands itself to the
//! expression as a [`RateSource`] and each variant reduces itself.

use moneta_shared::Currency;
use moneta_shared::config::RateConfig;
use tracing::debug;

use super::{BankError, ExchangeRateTable, Pair, RateSource};
use crate::expression::{Expression, Money};

/// Evaluator for money expressions.
///
/// # Example
///
/// ```
/// use moneta_core::{Bank, Money};
///
/// let mut bank = Bank::new();
/// bank.add_rate("CHF", "USD", 2).unwrap();
///
/// let sum = Money::dollar(5).plus(Money::franc(10));
/// assert_eq!(bank.reduce(&sum, "USD"), Money::dollar(10));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Bank {
    rates: ExchangeRateTable,
}

impl Bank {
    /// Creates a bank with no rates.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bank from configured rates.
    ///
    /// Later entries for the same pair overwrite earlier ones.
    pub fn from_rates(rates: &[RateConfig]) -> Result<Self, BankError> {
        let mut bank = Self::new();
        for entry in rates {
            bank.add_rate(entry.from.as_str(), entry.to.as_str(), entry.rate)?;
        }
        Ok(bank)
    }

    /// Registers the directed rate `from -> to`, replacing any previous one.
    ///
    /// A rate of `r` means `r` units of `from` make one unit of `to`.
    /// Identity pairs are accepted but not stored; their rate is always 1.
    ///
    /// # Errors
    ///
    /// Returns `BankError::InvalidRate` if `rate` is zero or negative.
    pub fn add_rate(
        &mut self,
        from: impl Into<Currency>,
        to: impl Into<Currency>,
        rate: i64,
    ) -> Result<(), BankError> {
        let pair = Pair::new(from, to);
        if rate <= 0 {
            return Err(BankError::InvalidRate {
                from: pair.from,
                to: pair.to,
                rate,
            });
        }

        debug!(%pair, rate, "registering exchange rate");
        if let Some(previous) = self.rates.insert(pair, rate) {
            debug!(previous, "replaced existing rate");
        }
        Ok(())
    }

    /// Directed rate for `from -> to`; 1 when both are the same currency.
    #[must_use]
    pub fn rate(&self, from: impl Into<Currency>, to: impl Into<Currency>) -> Option<i64> {
        self.rates.get(&from.into(), &to.into())
    }

    /// Reduces `source` to one amount in `to`.
    ///
    /// Pairs with no registered rate convert at 1.
    #[must_use]
    pub fn reduce(&self, source: &Expression, to: impl Into<Currency>) -> Money {
        let to = to.into();
        let result = source.reduce(self, &to);
        debug!(target_currency = %to, %result, "reduced expression");
        result
    }

    /// Reduces `source` to `to`, failing on the first missing rate.
    pub fn try_reduce(
        &self,
        source: &Expression,
        to: impl Into<Currency>,
    ) -> Result<Money, BankError> {
        let to = to.into();
        let result = source.try_reduce(self, &to)?;
        debug!(target_currency = %to, %result, "reduced expression");
        Ok(result)
    }

    /// The underlying rate table.
    #[must_use]
    pub const fn rates(&self) -> &ExchangeRateTable {
        &self.rates
    }
}

impl RateSource for Bank {
    fn rate(&self, from: &Currency, to: &Currency) -> Option<i64> {
        self.rates.get(from, to)
    }
}
