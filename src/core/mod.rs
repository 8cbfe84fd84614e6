//! Core price history abstractions

pub mod config;
pub mod history;
pub mod ledger;
pub mod log;
pub mod price;
pub mod quote;
pub mod service;

// Re-export main types for cleaner imports
pub use history::{PriceSummary, Snapshot, TokenPriceHistory};
pub use ledger::{CurrencyIndex, PriceLedger};
pub use price::{PriceFeed, PriceRecord};
pub use quote::TokenQuote;
pub use service::{FetchError, PriceHistoryService};
