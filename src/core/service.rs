//! Owns the current price snapshot and replaces it on refresh.

use crate::core::history::{Snapshot, TokenPriceHistory};
use crate::core::price::PriceFeed;
use chrono::Utc;
use std::sync::{Arc, PoisonError, RwLock};
use thiserror::Error;
use tracing::{debug, error, info};

/// Raised when the feed cannot deliver a new ledger. The cause is logged.
#[derive(Debug, Error)]
#[error("Failed to fetch price history data")]
pub struct FetchError;

pub struct PriceHistoryService<F: PriceFeed> {
    feed: F,
    current: RwLock<Arc<Snapshot>>,
}

impl<F: PriceFeed> PriceHistoryService<F> {
    pub fn new(feed: F) -> Self {
        Self {
            feed,
            current: RwLock::new(Arc::new(Snapshot::default())),
        }
    }

    /// Fetches a new ledger and swaps in the snapshot built from it. On
    /// failure the previous snapshot stays in place.
    pub async fn refresh(&self) -> Result<Arc<Snapshot>, FetchError> {
        let records = self.feed.fetch_prices().await.map_err(|e| {
            error!(error = %e, "Error fetching price history");
            FetchError
        })?;

        debug!(records = records.len(), "Building price snapshot");
        let snapshot = Arc::new(Snapshot::build(records, Utc::now()));
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Arc::clone(&snapshot);

        info!(
            records = snapshot.ledger().len(),
            currencies = snapshot.index().len(),
            "Price history refreshed"
        );
        Ok(snapshot)
    }

    /// The snapshot readers should query. Cheap to call, holds no lock.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn get_all_currencies(&self) -> Vec<String> {
        self.snapshot().get_all_currencies()
    }

    pub fn get_token_price_history(&self, currency: &str) -> Option<TokenPriceHistory> {
        self.snapshot().get_token_price_history(currency)
    }

    pub fn search_currencies(&self, query: &str) -> Vec<String> {
        self.snapshot().search_currencies(query)
    }

    pub fn get_top_currencies(&self, limit: usize) -> Vec<TokenPriceHistory> {
        self.snapshot().get_top_currencies(limit)
    }
}
