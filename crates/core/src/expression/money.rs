//! Scalar money value.

use std::fmt;

use moneta_shared::Currency;
use serde::{Deserialize, Serialize};

use super::{Expression, Sum};
use crate::bank::source::{self, RateSource};
use crate::bank::BankError;

/// An integer amount in one currency.
///
/// Immutable once built; `times` and `reduce` return new values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: i64,
    currency: Currency,
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub fn new(amount: i64, currency: impl Into<Currency>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// US dollars.
    #[must_use]
    pub fn dollar(amount: i64) -> Self {
        Self::new(amount, "USD")
    }

    /// Swiss francs.
    #[must_use]
    pub fn franc(amount: i64) -> Self {
        Self::new(amount, "CHF")
    }

    /// Returns the amount.
    #[must_use]
    pub const fn amount(&self) -> i64 {
        self.amount
    }

    /// Returns the currency.
    #[must_use]
    pub const fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Scales the amount. Saturates at the `i64` bounds.
    #[must_use]
    pub fn times(&self, multiplier: i64) -> Expression {
        Expression::Money(Self::new(
            self.amount.saturating_mul(multiplier),
            self.currency.clone(),
        ))
    }

    /// Builds `self + addend` without evaluating it.
    ///
    /// The result is always a [`Sum`], even when both sides share a currency.
    #[must_use]
    pub fn plus(&self, addend: impl Into<Expression>) -> Expression {
        Expression::Sum(Sum::new(self.clone(), addend))
    }

    /// Converts this value into `to`.
    ///
    /// The amount is divided by the `currency -> to` rate, truncating toward
    /// zero. An unregistered pair is treated as rate 1 and the amount is
    /// relabelled unchanged; see [`Money::try_reduce`] for the strict form.
    #[must_use]
    pub fn reduce<R: RateSource + ?Sized>(&self, rates: &R, to: &Currency) -> Money {
        source::infallible(self.evaluate(to, &source::lenient(rates)))
    }

    /// Like [`Money::reduce`] but fails when no rate is registered.
    pub fn try_reduce<R: RateSource + ?Sized>(
        &self,
        rates: &R,
        to: &Currency,
    ) -> Result<Money, BankError> {
        self.evaluate(to, &source::strict(rates))
    }

    pub(crate) fn evaluate<E, F>(&self, to: &Currency, lookup: &F) -> Result<Money, E>
    where
        F: Fn(&Currency, &Currency) -> Result<i64, E>,
    {
        let rate = lookup(&self.currency, to)?;
        Ok(Money::new(self.amount / rate, to.clone()))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
