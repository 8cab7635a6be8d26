//! Money expressions for Moneta.
//!
//! This crate contains pure value calculations with ZERO I/O dependencies.
//! Amounts in different currencies are combined into expression trees and
//! reduced to one currency through a table of directed exchange rates.
//!
//! # Modules
//!
//! - `expression` - `Money`, `Sum`, and the `Expression` tree
//! - `bank` - Exchange-rate table and the `Bank` evaluator

pub mod bank;
pub mod expression;

pub use bank::{Bank, BankError, ExchangeRateTable, Pair, RateSource};
pub use expression::{Expression, Money, Sum};
pub use moneta_shared::Currency;
