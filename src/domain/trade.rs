//! Trade record.

use chrono::{DateTime, Utc};
use std::fmt;

/// Direction of a trade. Recorded but not consumed by any metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Buy,
    Sell,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "B"),
            Side::Sell => write!(f, "S"),
        }
    }
}

/// A single recorded transaction against a stock.
///
/// Immutable once built: there are no setters, and the timestamp is stamped
/// exactly once at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Trade {
    id: u32,
    timestamp: DateTime<Utc>,
    shares: i64,
    price: i64,
    side: Side,
}

impl Trade {
    /// Build a trade stamped with the current wall-clock instant.
    pub fn new(id: u32, shares: i64, side: Side, price: i64) -> Self {
        Self::at(id, shares, side, price, Utc::now())
    }

    /// Build a trade with an explicit creation instant.
    pub fn at(id: u32, shares: i64, side: Side, price: i64, timestamp: DateTime<Utc>) -> Self {
        Trade {
            id,
            timestamp,
            shares,
            price,
            side,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn shares(&self) -> i64 {
        self.shares
    }

    pub fn price(&self) -> i64 {
        self.price
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn is_sell(&self) -> bool {
        self.side == Side::Sell
    }
}
