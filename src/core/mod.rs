//! Core business logic abstractions

pub mod config;
pub mod convert;
pub mod log;
pub mod rate;

// Re-export main types for cleaner imports
pub use convert::Conversion;
pub use rate::{ExchangeQuote, QuoteBook, QuoteSource, RateProvider, Rates};
