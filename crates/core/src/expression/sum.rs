//! Deferred addition of two expressions.

use std::sync::Arc;

use moneta_shared::Currency;

use super::{Expression, Money};
use crate::bank::BankError;
use crate::bank::source::{self, RateSource};

/// `augend + addend`, with no currency chosen until reduction.
///
/// Children sit behind `Arc`, so cloning a `Sum` or nesting it in a larger
/// expression shares the subtrees instead of copying them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sum {
    augend: Arc<Expression>,
    addend: Arc<Expression>,
}

impl Sum {
    /// Creates a new sum.
    #[must_use]
    pub fn new(augend: impl Into<Expression>, addend: impl Into<Expression>) -> Self {
        Self::from_shared(Arc::new(augend.into()), Arc::new(addend.into()))
    }

    /// Creates a sum over subtrees that are already shared.
    #[must_use]
    pub const fn from_shared(augend: Arc<Expression>, addend: Arc<Expression>) -> Self {
        Self { augend, addend }
    }

    /// Left operand.
    #[must_use]
    pub fn augend(&self) -> &Expression {
        &self.augend
    }

    /// Right operand.
    #[must_use]
    pub fn addend(&self) -> &Expression {
        &self.addend
    }

    /// Distributes `multiplier` over both children, keeping the tree shape.
    #[must_use]
    pub fn times(&self, multiplier: i64) -> Expression {
        Expression::Sum(Self::new(
            self.augend.times(multiplier),
            self.addend.times(multiplier),
        ))
    }

    /// Nests this sum as the augend of a new one.
    #[must_use]
    pub fn plus(&self, addend: impl Into<Expression>) -> Expression {
        Expression::Sum(Self::new(self.clone(), addend))
    }

    /// Reduces both children to `to` and adds the amounts.
    #[must_use]
    pub fn reduce<R: RateSource + ?Sized>(&self, rates: &R, to: &Currency) -> Money {
        source::infallible(self.evaluate(to, &source::lenient(rates)))
    }

    /// Like [`Sum::reduce`] but fails on the first missing rate.
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
        let augend = self.augend.evaluate(to, lookup)?;
        let addend = self.addend.evaluate(to, lookup)?;
        Ok(Money::new(
            augend.amount().saturating_add(addend.amount()),
            to.clone(),
        ))
    }
}
