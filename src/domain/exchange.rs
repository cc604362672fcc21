//! Registry of the stocks traded in a session.
//!
//! The set of stocks is fixed at construction. Each stock owns its own trade
//! history; the exchange only hands out positional access and forwards trade
//! submissions.

use std::collections::HashSet;

use super::error::GbceError;
use super::index::{all_share_index, IndexEntry};
use super::seed::StockSeed;
use super::stock::Stock;
use super::trade::Trade;
use super::trade_input::TradeInputError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("no stock at position {position} (have {count})")]
    NoSuchStock { position: usize, count: usize },

    #[error("trade rejected with {} error(s)", .0.len())]
    Rejected(Vec<TradeInputError>),
}

#[derive(Debug, Clone, Default)]
pub struct Exchange {
    stocks: Vec<Stock>,
}

impl Exchange {
    /// Symbols are unique ignoring ASCII case, matching [`Exchange::find`].
    pub fn from_seeds(seeds: &[StockSeed]) -> Result<Self, GbceError> {
        let mut seen = HashSet::new();
        for seed in seeds {
            if !seen.insert(seed.symbol.to_ascii_uppercase()) {
                return Err(GbceError::DuplicateSymbol(seed.symbol.clone()));
            }
        }
        let stocks: Vec<Stock> = seeds.iter().map(StockSeed::build).collect();
        tracing::debug!(stocks = stocks.len(), "exchange loaded");
        Ok(Exchange { stocks })
    }

    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }

    /// Symbols in registry order.
    pub fn symbols(&self) -> Vec<&str> {
        self.stocks.iter().map(Stock::symbol).collect()
    }

    pub fn stocks(&self) -> &[Stock] {
        &self.stocks
    }

    pub fn get(&self, position: usize) -> Option<&Stock> {
        self.stocks.get(position)
    }

    pub fn get_mut(&mut self, position: usize) -> Option<&mut Stock> {
        self.stocks.get_mut(position)
    }

    pub fn find(&self, symbol: &str) -> Option<&Stock> {
        self.stocks
            .iter()
            .find(|s| s.symbol().eq_ignore_ascii_case(symbol))
    }

    pub fn all_share_index(&self) -> Vec<IndexEntry> {
        all_share_index(&self.stocks)
    }

    pub fn submit_trade(
        &mut self,
        position: usize,
        shares: &str,
        price: &str,
        side: &str,
    ) -> Result<Trade, SubmitError> {
        let count = self.stocks.len();
        let stock = self
            .stocks
            .get_mut(position)
            .ok_or(SubmitError::NoSuchStock { position, count })?;
        stock
            .submit_trade(shares, price, side)
            .map_err(SubmitError::Rejected)
    }
}
