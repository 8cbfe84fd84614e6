use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::core::config::SwitcheoProviderConfig;
use crate::core::price::{PriceFeed, PriceRecord};
use crate::providers::util::with_retry;

/// Reads the flat `prices.json` list published by Switcheo.
pub struct SwitcheoFeed {
    base_url: String,
    client: reqwest::Client,
    retries: usize,
    retry_delay_ms: u64,
}

impl SwitcheoFeed {
    pub fn new(config: &SwitcheoProviderConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("pricehist/0.1")
            .timeout(config.timeout())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(SwitcheoFeed {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            retries: config.retries,
            retry_delay_ms: config.retry_delay_ms,
        })
    }
}

/// Keeps the entries that carry a currency, an RFC 3339 date and a finite
/// price. Anything else is dropped with a warning.
fn validate_records(values: Vec<Value>) -> Vec<PriceRecord> {
    let total = values.len();
    let records: Vec<PriceRecord> = values
        .into_iter()
        .enumerate()
        .filter_map(|(i, value)| match serde_json::from_value::<PriceRecord>(value) {
            Ok(record) if record.currency.trim().is_empty() => {
                warn!(position = i, "Dropping price record with empty currency");
                None
            }
            Ok(record) if !record.price.is_finite() => {
                warn!(position = i, currency = %record.currency, "Dropping price record with non-finite price");
                None
            }
            Ok(record) => Some(record),
            Err(e) => {
                warn!(position = i, error = %e, "Dropping malformed price record");
                None
            }
        })
        .collect();

    if records.len() < total {
        warn!(
            kept = records.len(),
            dropped = total - records.len(),
            "Quarantined malformed price records"
        );
    }
    records
}

#[async_trait]
impl PriceFeed for SwitcheoFeed {
    #[instrument(name = "SwitcheoPriceFetch", skip(self), fields(base_url = %self.base_url))]
    async fn fetch_prices(&self) -> Result<Vec<PriceRecord>> {
        let url = format!("{}/prices.json", self.base_url);
        debug!("Requesting price history from {}", url);

        let response = with_retry(
            || async {
                self.client
                    .get(&url)
                    .send()
                    .await
                    .and_then(reqwest::Response::error_for_status)
            },
            self.retries,
            self.retry_delay_ms,
        )
        .await
        .with_context(|| format!("Request failed for URL: {url}"))?;

        let text = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {url}"))?;

        let values: Vec<Value> = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse price feed response from {url}"))?;

        let records = validate_records(values);
        debug!(records = records.len(), "Received price history");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn feed_for(server: &MockServer) -> SwitcheoFeed {
        SwitcheoFeed::new(&SwitcheoProviderConfig {
            base_url: server.uri(),
            timeout_secs: 5,
            retries: 0,
            retry_delay_ms: 1,
        })
        .unwrap()
    }

    async fn create_mock_server(status: u16, body: &str) -> MockServer {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/prices.json"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&mock_server)
            .await;
        mock_server
    }

    #[tokio::test]
    async fn test_successful_fetch() {
        let body = r#"[
            {"currency": "BLUR", "date": "2023-08-29T07:10:40.000Z", "price": 0.20811525423728813},
            {"currency": "bNEO", "date": "2023-08-29T07:10:50.000Z", "price": 7.1282679}
        ]"#;
        let mock_server = create_mock_server(200, body).await;

        let records = feed_for(&mock_server).fetch_prices().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].currency, "BLUR");
        assert_eq!(records[1].price, 7.1282679);
        assert_eq!(
            records[1].date.to_rfc3339(),
            "2023-08-29T07:10:50+00:00"
        );
    }

    #[tokio::test]
    async fn test_malformed_records_are_dropped() {
        let body = r#"[
            {"currency": "ETH", "date": "2023-08-29T07:10:52.000Z", "price": 1645.93},
            {"currency": "ETH", "date": "2023-08-29T07:10:52.000Z"},
            {"currency": "", "date": "2023-08-29T07:10:52.000Z", "price": 1.0},
            {"currency": "ATOM", "date": "yesterday", "price": 7.18},
            {"currency": "USDC", "date": "2023-08-29T07:10:30.000Z", "price": 1}
        ]"#;
        let mock_server = create_mock_server(200, body).await;

        let records = feed_for(&mock_server).fetch_prices().await.unwrap();
        let currencies: Vec<&str> = records.iter().map(|r| r.currency.as_str()).collect();
        assert_eq!(currencies, vec!["ETH", "USDC"]);
        assert_eq!(records[1].price, 1.0);
    }

    #[tokio::test]
    async fn test_server_error_fails() {
        let mock_server = create_mock_server(500, "").await;
        let result = feed_for(&mock_server).fetch_prices().await;
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Request failed for URL")
        );
    }

    #[tokio::test]
    async fn test_non_array_body_fails() {
        let mock_server = create_mock_server(200, r#"{"prices": []}"#).await;
        let result = feed_for(&mock_server).fetch_prices().await;
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to parse price feed response")
        );
    }

    #[tokio::test]
    async fn test_retries_transient_failures() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/prices.json"))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/prices.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"[{"currency": "SWTH", "date": "2023-08-29T07:10:40.000Z", "price": 0.004}]"#,
            ))
            .mount(&mock_server)
            .await;

        let feed = SwitcheoFeed::new(&SwitcheoProviderConfig {
            base_url: mock_server.uri(),
            timeout_secs: 5,
            retries: 1,
            retry_delay_ms: 1,
        })
        .unwrap();

        let records = feed.fetch_prices().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].currency, "SWTH");
    }
}
