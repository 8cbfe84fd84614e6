//! Price records and the feed abstraction

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single price observation for one currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub currency: String,
    pub date: DateTime<Utc>,
    pub price: f64,
}

impl PriceRecord {
    pub fn new(currency: &str, date: DateTime<Utc>, price: f64) -> Self {
        Self {
            currency: currency.to_string(),
            date,
            price,
        }
    }
}

/// Source of the flat list of price observations.
#[async_trait]
pub trait PriceFeed: Send + Sync {
    async fn fetch_prices(&self) -> Result<Vec<PriceRecord>>;
}
