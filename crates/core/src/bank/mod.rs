//! Exchange rates and the evaluator that reduces expressions with them.

pub mod error;
pub mod pair;
pub mod service;
pub mod source;
pub mod table;

pub use error::BankError;
pub use pair::Pair;
pub use service::Bank;
pub use source::RateSource;
pub use table::ExchangeRateTable;
