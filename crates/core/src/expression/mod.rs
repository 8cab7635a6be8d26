//! Money expressions.
//!
//! An [`Expression`] is either a scalar [`Money`] or a deferred [`Sum`] of two
//! expressions. Trees are built bottom-up with `plus` and `times` (or `+` and
//! `*`) and never mutated; reduction against a [`RateSource`] collapses a tree
//! into one `Money` in the requested currency.

pub mod money;
pub mod sum;

#[cfg(test)]
mod props;

use std::ops::{Add, Mul};

use moneta_shared::Currency;

use crate::bank::BankError;
use crate::bank::source::{self, RateSource};

pub use money::Money;
pub use sum::Sum;

/// A value reducible to a single [`Money`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    /// A concrete amount.
    Money(Money),
    /// Addition deferred until reduction.
    Sum(Sum),
}

impl Expression {
    /// Builds `self + addend`. Always yields [`Expression::Sum`].
    #[must_use]
    pub fn plus(&self, addend: impl Into<Expression>) -> Expression {
        match self {
            Self::Money(money) => money.plus(addend),
            Self::Sum(sum) => sum.plus(addend),
        }
    }

    /// Scales every leaf amount by `multiplier`.
    #[must_use]
    pub fn times(&self, multiplier: i64) -> Expression {
        match self {
            Self::Money(money) => money.times(multiplier),
            Self::Sum(sum) => sum.times(multiplier),
        }
    }

    /// Collapses the tree into one amount in `to`.
    ///
    /// Missing rates fall back to 1. Each leaf is converted on its own, so
    /// truncation happens per leaf before amounts are added.
    #[must_use]
    pub fn reduce<R: RateSource + ?Sized>(&self, rates: &R, to: &Currency) -> Money {
        source::infallible(self.evaluate(to, &source::lenient(rates)))
    }

    /// Like [`Expression::reduce`] but fails on the first missing rate.
    pub fn try_reduce<R: RateSource + ?Sized>(
        &self,
        rates: &R,
        to: &Currency,
    ) -> Result<Money, BankError> {
        self.evaluate(to, &source::strict(rates))
    }

    /// Returns the scalar, if this is one.
    #[must_use]
    pub const fn as_money(&self) -> Option<&Money> {
        match self {
            Self::Money(money) => Some(money),
            Self::Sum(_) => None,
        }
    }

    /// Returns the composite, if this is one.
    #[must_use]
    pub const fn as_sum(&self) -> Option<&Sum> {
        match self {
            Self::Sum(sum) => Some(sum),
            Self::Money(_) => None,
        }
    }

    /// Number of `Money` leaves in the tree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Money(_) => 1,
            Self::Sum(sum) => sum.augend().leaf_count() + sum.addend().leaf_count(),
        }
    }

    pub(crate) fn evaluate<E, F>(&self, to: &Currency, lookup: &F) -> Result<Money, E>
    where
        F: Fn(&Currency, &Currency) -> Result<i64, E>,
    {
        match self {
            Self::Money(money) => money.evaluate(to, lookup),
            Self::Sum(sum) => sum.evaluate(to, lookup),
        }
    }
}

impl From<Money> for Expression {
    fn from(money: Money) -> Self {
        Self::Money(money)
    }
}

impl From<Sum> for Expression {
    fn from(sum: Sum) -> Self {
        Self::Sum(sum)
    }
}

impl<T: Into<Expression>> Add<T> for Money {
    type Output = Expression;

    fn add(self, addend: T) -> Expression {
        Expression::Sum(Sum::new(self, addend))
    }
}

impl<T: Into<Expression>> Add<T> for Expression {
    type Output = Expression;

    fn add(self, addend: T) -> Expression {
        Expression::Sum(Sum::new(self, addend))
    }
}

impl Mul<i64> for Money {
    type Output = Expression;

    fn mul(self, multiplier: i64) -> Expression {
        self.times(multiplier)
    }
}

impl Mul<i64> for Expression {
    type Output = Expression;

    fn mul(self, multiplier: i64) -> Expression {
        self.times(multiplier)
    }
}
