//! Raw price ledger and the per-currency index built over it.

use crate::core::price::PriceRecord;
use std::collections::BTreeMap;

/// Insertion-ordered records from one successful fetch.
#[derive(Debug, Clone, Default)]
pub struct PriceLedger {
    records: Vec<PriceRecord>,
}

impl PriceLedger {
    pub fn new(records: Vec<PriceRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    pub fn get(&self, position: usize) -> Option<&PriceRecord> {
        self.records.get(position)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Maps each currency to the ledger positions of its records, newest first.
///
/// Every ledger position lands in exactly one bucket, the one named by the
/// record's `currency`. Records sharing a date keep their ledger order.
#[derive(Debug, Clone, Default)]
pub struct CurrencyIndex {
    buckets: BTreeMap<String, Vec<usize>>,
}

impl CurrencyIndex {
    pub fn build(ledger: &PriceLedger) -> Self {
        let mut buckets: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (position, record) in ledger.records().iter().enumerate() {
            buckets
                .entry(record.currency.clone())
                .or_default()
                .push(position);
        }

        // sort_by is stable, so equal dates keep ledger order
        for positions in buckets.values_mut() {
            positions.sort_by(|a, b| {
                let (a, b) = (&ledger.records()[*a], &ledger.records()[*b]);
                b.date.cmp(&a.date)
            });
        }

        Self { buckets }
    }

    /// Currency symbols in lexicographic order.
    pub fn currencies(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }

    /// Ledger positions for `currency`, newest first.
    pub fn bucket(&self, currency: &str) -> Option<&[usize]> {
        self.buckets.get(currency).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).single().unwrap()
    }

    fn sample_ledger() -> PriceLedger {
        PriceLedger::new(vec![
            PriceRecord::new("ETH", at(100), 1600.0),
            PriceRecord::new("BTC", at(300), 26000.0),
            PriceRecord::new("ETH", at(300), 1650.0),
            PriceRecord::new("BTC", at(100), 25000.0),
            PriceRecord::new("USDC", at(200), 1.0),
            PriceRecord::new("BTC", at(200), 25500.0),
        ])
    }

    #[test]
    fn test_buckets_partition_ledger() {
        let ledger = sample_ledger();
        let index = CurrencyIndex::build(&ledger);

        let mut seen: Vec<usize> = Vec::new();
        for currency in index.currencies() {
            for position in index.bucket(currency).unwrap() {
                assert_eq!(ledger.get(*position).unwrap().currency, currency);
                seen.push(*position);
            }
        }
        seen.sort();
        assert_eq!(seen, (0..ledger.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_buckets_sorted_newest_first() {
        let ledger = sample_ledger();
        let index = CurrencyIndex::build(&ledger);

        let btc: Vec<f64> = index
            .bucket("BTC")
            .unwrap()
            .iter()
            .map(|p| ledger.get(*p).unwrap().price)
            .collect();
        assert_eq!(btc, vec![26000.0, 25500.0, 25000.0]);
        assert_eq!(
            index.currencies().collect::<Vec<_>>(),
            vec!["BTC", "ETH", "USDC"]
        );
    }

    #[test]
    fn test_equal_dates_keep_ledger_order() {
        let ledger = PriceLedger::new(vec![
            PriceRecord::new("ATOM", at(50), 7.0),
            PriceRecord::new("ATOM", at(100), 8.0),
            PriceRecord::new("ATOM", at(100), 9.0),
        ]);
        let index = CurrencyIndex::build(&ledger);

        assert_eq!(index.bucket("ATOM").unwrap(), &[1, 2, 0]);
    }

    #[test]
    fn test_empty_ledger() {
        let index = CurrencyIndex::build(&PriceLedger::default());
        assert!(index.is_empty());
        assert!(index.bucket("BTC").is_none());
    }
}
