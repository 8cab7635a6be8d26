//! Property-based tests for expression reduction.
//!
//! - Identity reduction and same-currency addition
//! - Directed cross-currency conversion with truncation
//! - `times` distributing over sums, `plus` associating under reduction

use moneta_shared::Currency;
use proptest::prelude::*;

use super::{Expression, Money, Sum};
use crate::bank::Bank;

const CURRENCIES: &[&str] = &["USD", "CHF", "EUR", "IDR"];

/// Bank with a few one-way rates; everything else is unregistered.
fn bank() -> Bank {
    let mut bank = Bank::new();
    bank.add_rate("CHF", "USD", 2).unwrap();
    bank.add_rate("EUR", "USD", 3).unwrap();
    bank.add_rate("USD", "IDR", 1).unwrap();
    bank.add_rate("IDR", "USD", 15_000).unwrap();
    bank
}

/// Strategy to generate amounts (-1,000,000 to 1,000,000).
fn amount() -> impl Strategy<Value = i64> {
    -1_000_000i64..1_000_000
}

/// Strategy to generate positive rates (1 to 10,000).
fn positive_rate() -> impl Strategy<Value = i64> {
    1i64..10_000
}

/// Strategy to generate multipliers, zero and negatives included.
fn multiplier() -> impl Strategy<Value = i64> {
    -100i64..100
}

fn currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(CURRENCIES.to_vec()).prop_map(Currency::from)
}

fn money() -> impl Strategy<Value = Money> {
    (amount(), currency()).prop_map(|(amount, currency)| Money::new(amount, currency))
}

/// Strategy to generate trees of up to 16 leaves.
fn expression() -> impl Strategy<Value = Expression> {
    money()
        .prop_map(Expression::from)
        .prop_recursive(4, 16, 2, |inner| {
            (inner.clone(), inner).prop_map(|(augend, addend)| augend.plus(addend))
        })
}

fn leaves(expression: &Expression) -> Vec<Money> {
    match expression {
        Expression::Money(money) => vec![money.clone()],
        Expression::Sum(sum) => {
            let mut out = leaves(sum.augend());
            out.extend(leaves(sum.addend()));
            out
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Reducing money to its own currency returns it unchanged.
    #[test]
    fn prop_identity_reduction(money in money()) {
        let reduced = money.reduce(&bank(), money.currency());
        prop_assert_eq!(reduced, money);
    }

    /// Same-currency addition adds amounts.
    #[test]
    fn prop_same_currency_addition(a in amount(), b in amount()) {
        let sum = Money::dollar(a).plus(Money::dollar(b));
        prop_assert_eq!(bank().reduce(&sum, "USD"), Money::dollar(a + b));
    }

    /// Cross-currency reduction divides by the registered rate.
    #[test]
    fn prop_cross_currency_divides(a in amount(), rate in positive_rate()) {
        let mut bank = Bank::new();
        bank.add_rate("CHF", "USD", rate).unwrap();
        let reduced = bank.reduce(&Money::franc(a).into(), "USD");
        prop_assert_eq!(reduced, Money::dollar(a / rate));
    }

    /// A rate in one direction says nothing about the other.
    #[test]
    fn prop_rates_are_directional(a in amount(), rate in positive_rate()) {
        let mut bank = Bank::new();
        bank.add_rate("CHF", "USD", rate).unwrap();
        prop_assert_eq!(bank.rate("USD", "CHF"), None);
        // falls back to 1 in the unregistered direction
        prop_assert_eq!(bank.reduce(&Money::dollar(a).into(), "CHF"), Money::franc(a));
    }

    /// Equality is by amount and currency.
    #[test]
    fn prop_equality_is_currency_sensitive(a in amount()) {
        prop_assert_eq!(Money::dollar(a), Money::new(a, "USD"));
        prop_assert_ne!(Money::dollar(a), Money::franc(a));
    }

    /// `times` on a sum matches scaling each child first.
    #[test]
    fn prop_times_distributes_over_sum(
        a in expression(),
        b in expression(),
        k in multiplier(),
        target in currency(),
    ) {
        let bank = bank();
        let scaled_sum = Sum::new(a.clone(), b.clone()).times(k);
        let sum_of_scaled = Sum::new(a.times(k), b.times(k));
        prop_assert_eq!(
            scaled_sum.reduce(&bank, &target),
            sum_of_scaled.reduce(&bank, &target)
        );
    }

    /// Grouping of `plus` does not change the reduced amount.
    #[test]
    fn prop_plus_associates_under_reduction(
        a in expression(),
        b in expression(),
        c in expression(),
        target in currency(),
    ) {
        let bank = bank();
        let left = a.plus(b.clone()).plus(c.clone());
        let right = a.plus(b.plus(c));
        prop_assert_eq!(left.reduce(&bank, &target), right.reduce(&bank, &target));
    }

    /// A tree reduces to the sum of its leaves reduced one by one.
    #[test]
    fn prop_reduction_is_leafwise(tree in expression(), target in currency()) {
        let bank = bank();
        let expected: i64 = leaves(&tree)
            .iter()
            .map(|leaf| leaf.reduce(&bank, &target).amount())
            .sum();
        let reduced = tree.reduce(&bank, &target);
        prop_assert_eq!(reduced.amount(), expected);
        prop_assert_eq!(reduced.currency(), &target);
    }

    /// `times` keeps the number of leaves.
    #[test]
    fn prop_times_preserves_shape(tree in expression(), k in multiplier()) {
        prop_assert_eq!(tree.times(k).leaf_count(), tree.leaf_count());
    }

    /// Strict and lenient reduction agree whenever every rate is present.
    #[test]
    fn prop_try_reduce_agrees_when_rates_exist(a in amount(), b in amount()) {
        let bank = bank();
        let sum = Money::franc(a).plus(Money::new(b, "EUR"));
        prop_assert_eq!(bank.try_reduce(&sum, "USD"), Ok(bank.reduce(&sum, "USD")));
    }
}
