//! All-share index.

use super::stock::Stock;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndexValue {
    /// The stock has no recorded trades.
    NoTrades,
    GeometricMean(f64),
}

impl IndexValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            IndexValue::NoTrades => None,
            IndexValue::GeometricMean(v) => Some(*v),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexEntry {
    pub symbol: String,
    pub value: IndexValue,
}

/// Snapshot of every stock's geometric-mean trade price, in input order.
/// Nothing is cached: each call reads the current histories.
pub fn all_share_index(stocks: &[Stock]) -> Vec<IndexEntry> {
    stocks
        .iter()
        .map(|stock| IndexEntry {
            symbol: stock.symbol().to_string(),
            value: stock
                .geometric_mean()
                .map_or(IndexValue::NoTrades, IndexValue::GeometricMean),
        })
        .collect()
}
