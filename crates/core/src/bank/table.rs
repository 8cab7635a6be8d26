//! Directed exchange-rate storage.

use std::collections::HashMap;

use moneta_shared::Currency;

use super::{Pair, RateSource};

/// Rates keyed by ordered [`Pair`].
///
/// Identity pairs are never stored; [`ExchangeRateTable::get`] answers 1 for
/// them regardless of contents. Validation of the rate value is the caller's
/// job, see [`super::Bank::add_rate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExchangeRateTable {
    rates: HashMap<Pair, i64>,
}

impl ExchangeRateTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `rate` for `pair`, returning the rate it replaced.
    ///
    /// Identity pairs are ignored and return `None`.
    pub(crate) fn insert(&mut self, pair: Pair, rate: i64) -> Option<i64> {
        if pair.is_identity() {
            return None;
        }
        self.rates.insert(pair, rate)
    }

    /// Directed rate for `from -> to`; 1 for identical currencies.
    #[must_use]
    pub fn get(&self, from: &Currency, to: &Currency) -> Option<i64> {
        if from == to {
            return Some(1);
        }
        self.rates.get(&Pair::new(from, to)).copied()
    }

    /// Iterates stored entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&Pair, i64)> {
        self.rates.iter().map(|(pair, rate)| (pair, *rate))
    }

    /// Number of stored (non-identity) rates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// True when no rate is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl RateSource for ExchangeRateTable {
    fn rate(&self, from: &Currency, to: &Currency) -> Option<i64> {
        self.get(from, to)
    }
}
