//! Rate lookup capability handed to expressions during reduction.

use std::convert::Infallible;

use moneta_shared::Currency;
use tracing::warn;

use super::BankError;

/// Anything that can answer "how many `from` make one `to`".
///
/// Implementations return `Some(1)` for `from == to` and `None` for pairs they
/// know nothing about. Returned rates must be positive; reduction treats a
/// zero or negative answer the same as `None`.
pub trait RateSource {
    /// Directed rate for `from -> to`.
    fn rate(&self, from: &Currency, to: &Currency) -> Option<i64>;
}

impl<T: RateSource + ?Sized> RateSource for &T {
    fn rate(&self, from: &Currency, to: &Currency) -> Option<i64> {
        (**self).rate(from, to)
    }
}

fn usable<R: RateSource + ?Sized>(rates: &R, from: &Currency, to: &Currency) -> Option<i64> {
    rates.rate(from, to).filter(|rate| *rate > 0)
}

/// Lookup that falls back to rate 1 when nothing usable is registered.
pub(crate) fn lenient<R: RateSource + ?Sized>(
    rates: &R,
) -> impl Fn(&Currency, &Currency) -> Result<i64, Infallible> + '_ {
    move |from, to| {
        Ok(usable(rates, from, to).unwrap_or_else(|| {
            warn!(%from, %to, "no exchange rate registered, using 1");
            1
        }))
    }
}

/// Lookup that reports a missing rate instead of guessing.
pub(crate) fn strict<R: RateSource + ?Sized>(
    rates: &R,
) -> impl Fn(&Currency, &Currency) -> Result<i64, BankError> + '_ {
    move |from, to| {
        usable(rates, from, to).ok_or_else(|| BankError::MissingRate {
            from: from.clone(),
            to: to.clone(),
        })
    }
}

pub(crate) fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
