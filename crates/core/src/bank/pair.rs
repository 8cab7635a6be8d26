//! Ordered currency pair.

use std::fmt;

use moneta_shared::Currency;
use serde::{Deserialize, Serialize};

/// Key of the rate table: converting `from` into `to`.
///
/// Order matters, `Pair(CHF, USD)` and `Pair(USD, CHF)` are different keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pair {
    /// Source currency.
    pub from: Currency,
    /// Target currency.
    pub to: Currency,
}

impl Pair {
    /// Creates a new pair.
    #[must_use]
    pub fn new(from: impl Into<Currency>, to: impl Into<Currency>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// True when both sides are the same currency.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.from == self.to
    }

    /// The pair in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
        }
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
