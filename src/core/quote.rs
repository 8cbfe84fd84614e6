//! Latest-price lookups used for swap quotes.

use crate::core::history::Snapshot;
use serde::Serialize;
use std::collections::BTreeMap;

const TOKEN_ICONS_BASE: &str = "https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenQuote {
    pub symbol: String,
    pub price: f64,
}

pub fn token_icon_url(symbol: &str) -> String {
    format!("{}/{}.svg", TOKEN_ICONS_BASE, symbol.to_uppercase())
}

impl Snapshot {
    /// Most recent price per currency.
    pub fn latest_prices(&self) -> BTreeMap<String, f64> {
        self.index()
            .currencies()
            .filter_map(|c| self.latest_price(c).map(|p| (c.to_string(), p)))
            .collect()
    }

    fn latest_price(&self, symbol: &str) -> Option<f64> {
        let position = self.index().bucket(symbol)?.first()?;
        self.ledger().get(*position).map(|r| r.price)
    }

    /// A zero price counts as no price.
    pub fn token_price(&self, symbol: &str) -> Option<f64> {
        self.latest_price(symbol).filter(|p| *p != 0.0)
    }

    pub fn is_token_supported(&self, symbol: &str) -> bool {
        self.index().bucket(symbol).is_some()
    }

    /// Tokens with their latest price, ordered by symbol.
    pub fn available_tokens(&self) -> Vec<TokenQuote> {
        self.latest_prices()
            .into_iter()
            .map(|(symbol, price)| TokenQuote { symbol, price })
            .collect()
    }

    /// Units of `to` received for one unit of `from`.
    pub fn exchange_rate(&self, from: &str, to: &str) -> Option<f64> {
        let from_price = self.token_price(from)?;
        let to_price = self.token_price(to)?;
        Some(from_price / to_price)
    }

    pub fn usd_value(&self, symbol: &str, amount: &str) -> Option<f64> {
        let price = self.token_price(symbol)?;
        let amount: f64 = amount.trim().parse().ok()?;
        if !amount.is_finite() {
            return None;
        }
        Some(amount * price)
    }
}
