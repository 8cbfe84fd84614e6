//! Point-in-time price history and the queries answered from it.

use crate::core::ledger::{CurrencyIndex, PriceLedger};
use crate::core::price::PriceRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Derived view of one currency's price series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenPriceHistory {
    pub currency: String,
    /// Oldest first.
    pub records: Vec<PriceRecord>,
    pub latest_price: f64,
    /// Latest minus the oldest price held, not a calendar-aligned window.
    pub price_change_24h: f64,
    pub price_change_percent_24h: f64,
}

impl TokenPriceHistory {
    pub fn lowest_price(&self) -> Option<f64> {
        self.records.iter().map(|r| r.price).reduce(f64::min)
    }

    pub fn highest_price(&self) -> Option<f64> {
        self.records.iter().map(|r| r.price).reduce(f64::max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceSummary {
    pub latest_price: f64,
    pub change_percent: f64,
}

/// An immutable ledger together with the index derived from it.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    ledger: PriceLedger,
    index: CurrencyIndex,
    fetched_at: Option<DateTime<Utc>>,
}

impl Snapshot {
    pub fn build(records: Vec<PriceRecord>, fetched_at: DateTime<Utc>) -> Self {
        let ledger = PriceLedger::new(records);
        let index = CurrencyIndex::build(&ledger);
        Self {
            ledger,
            index,
            fetched_at: Some(fetched_at),
        }
    }

    pub fn ledger(&self) -> &PriceLedger {
        &self.ledger
    }

    pub fn index(&self) -> &CurrencyIndex {
        &self.index
    }

    /// `None` until the first successful fetch.
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn get_all_currencies(&self) -> Vec<String> {
        self.index.currencies().map(str::to_string).collect()
    }

    pub fn get_token_price_history(&self, currency: &str) -> Option<TokenPriceHistory> {
        let positions = self.index.bucket(currency)?;
        let newest_first: Vec<&PriceRecord> = positions
            .iter()
            .filter_map(|p| self.ledger.get(*p))
            .collect();

        let latest_price = newest_first.first()?.price;
        let earliest_price = newest_first.last()?.price;

        let price_change_24h = latest_price - earliest_price;
        let price_change_percent_24h = if earliest_price != 0.0 {
            (price_change_24h / earliest_price) * 100.0
        } else {
            0.0
        };

        Some(TokenPriceHistory {
            currency: currency.to_string(),
            records: newest_first.into_iter().rev().cloned().collect(),
            latest_price,
            price_change_24h,
            price_change_percent_24h,
        })
    }

    pub fn search_currencies(&self, query: &str) -> Vec<String> {
        if query.is_empty() {
            return self.get_all_currencies();
        }

        let needle = query.to_lowercase();
        self.index
            .currencies()
            .filter(|c| c.to_lowercase().contains(&needle))
            .map(str::to_string)
            .collect()
    }

    /// Histories for the first `limit` currencies in alphabetical order,
    /// ranked by latest price. Currencies past the alphabetical cut are never
    /// considered, whatever their price.
    pub fn get_top_currencies(&self, limit: usize) -> Vec<TokenPriceHistory> {
        let mut top: Vec<TokenPriceHistory> = self
            .index
            .currencies()
            .take(limit)
            .filter_map(|c| self.get_token_price_history(c))
            .collect();
        top.sort_by(|a, b| b.latest_price.total_cmp(&a.latest_price));
        top
    }

    pub fn get_price_summary(&self) -> BTreeMap<String, PriceSummary> {
        self.index
            .currencies()
            .filter_map(|c| self.get_token_price_history(c))
            .filter(|h| h.latest_price != 0.0)
            .map(|h| {
                (
                    h.currency,
                    PriceSummary {
                        latest_price: h.latest_price,
                        change_percent: h.price_change_percent_24h,
                    },
                )
            })
            .collect()
    }
}
