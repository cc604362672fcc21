//! Stocks and their derived metrics.

use chrono::{DateTime, TimeDelta, Utc};

use super::trade::{Side, Trade};
use super::trade_input::{validate_trade_input, TradeInputError};

/// The two stock variants. Only the dividend-yield formula differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockKind {
    Common,
    /// `fixed_dividend` is a whole-number percentage, not a fraction.
    Preferred { fixed_dividend: i64 },
}

impl StockKind {
    pub fn label(&self) -> &'static str {
        match self {
            StockKind::Common => "Common",
            StockKind::Preferred { .. } => "Preferred",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stock {
    symbol: String,
    kind: StockKind,
    last_dividend: i64,
    par_value: i64,
    trades: Vec<Trade>,
}

impl Stock {
    pub fn new(
        symbol: impl Into<String>,
        kind: StockKind,
        last_dividend: i64,
        par_value: i64,
    ) -> Self {
        Stock {
            symbol: symbol.into(),
            kind,
            last_dividend,
            par_value,
            trades: Vec::new(),
        }
    }

    pub fn common(symbol: impl Into<String>, last_dividend: i64, par_value: i64) -> Self {
        Self::new(symbol, StockKind::Common, last_dividend, par_value)
    }

    pub fn preferred(
        symbol: impl Into<String>,
        last_dividend: i64,
        fixed_dividend: i64,
        par_value: i64,
    ) -> Self {
        Self::new(
            symbol,
            StockKind::Preferred { fixed_dividend },
            last_dividend,
            par_value,
        )
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn kind(&self) -> StockKind {
        self.kind
    }

    pub fn last_dividend(&self) -> i64 {
        self.last_dividend
    }

    pub fn par_value(&self) -> i64 {
        self.par_value
    }

    pub fn fixed_dividend(&self) -> Option<i64> {
        match self.kind {
            StockKind::Common => None,
            StockKind::Preferred { fixed_dividend } => Some(fixed_dividend),
        }
    }

    /// Trade history in insertion (chronological) order.
    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    /// Price of the most recent trade, or 0 when there are none.
    ///
    /// Zero means "no data": it is never a valid divisor.
    pub fn ticker_price(&self) -> i64 {
        self.trades.last().map(Trade::price).unwrap_or(0)
    }

    /// Common: `last_dividend / price`.
    /// Preferred: `fixed_dividend * par_value / price`.
    pub fn dividend_yield(&self) -> f64 {
        let numerator = match self.kind {
            StockKind::Common => self.last_dividend,
            StockKind::Preferred { fixed_dividend } => {
                fixed_dividend.saturating_mul(self.par_value)
            }
        };
        ratio(numerator, self.ticker_price())
    }

    /// `price / last_dividend`.
    pub fn pe_ratio(&self) -> f64 {
        ratio(self.ticker_price(), self.last_dividend)
    }

    /// Volume-weighted price of the trades made within `window` of now.
    pub fn volume_weighted_price(&self, window: TimeDelta) -> i64 {
        self.volume_weighted_price_at(Utc::now(), window)
    }

    /// `sum(price * shares) / sum(shares)` over trades with
    /// `now - timestamp <= window`, truncated toward zero. 0 when no shares
    /// qualify.
    ///
    /// Sums are exact in `i128`. If a sum leaves that range the quotient is
    /// computed in `f64` instead and saturates at the `i64` bounds.
    pub fn volume_weighted_price_at(&self, now: DateTime<Utc>, window: TimeDelta) -> i64 {
        let in_window = |t: &&Trade| now.signed_duration_since(t.timestamp()) <= window;
        let exact = self
            .trades
            .iter()
            .filter(in_window)
            .try_fold((0i128, 0i128), |(weighted, shares), t| {
                let term = i128::from(t.price()) * i128::from(t.shares());
                Some((
                    weighted.checked_add(term)?,
                    shares.checked_add(i128::from(t.shares()))?,
                ))
            });

        match exact {
            Some((_, 0)) => 0,
            Some((weighted, shares)) => {
                let quotient = weighted / shares;
                i64::try_from(quotient).unwrap_or(if quotient < 0 { i64::MIN } else { i64::MAX })
            }
            None => {
                let (weighted, shares) = self
                    .trades
                    .iter()
                    .filter(in_window)
                    .fold((0.0f64, 0.0f64), |(weighted, shares), t| {
                        (
                            weighted + t.price() as f64 * t.shares() as f64,
                            shares + t.shares() as f64,
                        )
                    });
                // `as` saturates at the i64 bounds.
                (weighted / shares).trunc() as i64
            }
        }
    }

    /// Geometric mean of every recorded trade price; `None` when the history
    /// is empty.
    ///
    /// A negative price has no real logarithm, so a history containing one
    /// yields `Some(NaN)`. [`Stock::submit_trade`] never records such a
    /// price; only direct [`Stock::record_trade`] callers can.
    pub fn geometric_mean(&self) -> Option<f64> {
        if self.trades.is_empty() {
            return None;
        }
        // Summing logs keeps long histories from overflowing the product.
        let log_sum: f64 = self.trades.iter().map(|t| (t.price() as f64).ln()).sum();
        Some((log_sum / self.trades.len() as f64).exp())
    }

    /// Append a trade stamped now. Its id is the history length + 1.
    ///
    /// No validation is applied. Negative values are stored as given and
    /// make [`Stock::geometric_mean`] `NaN`.
    pub fn record_trade(&mut self, shares: i64, price: i64, side: Side) -> &Trade {
        self.record_trade_at(shares, price, side, Utc::now())
    }

    pub fn record_trade_at(
        &mut self,
        shares: i64,
        price: i64,
        side: Side,
        timestamp: DateTime<Utc>,
    ) -> &Trade {
        let id = self.next_trade_id();
        self.trades.push(Trade::at(id, shares, side, price, timestamp));
        tracing::debug!(
            symbol = %self.symbol,
            trade_id = id,
            shares,
            price,
            %side,
            "trade recorded"
        );
        &self.trades[self.trades.len() - 1]
    }

    /// Validate raw input and record exactly one trade, or none when any
    /// field is rejected.
    pub fn submit_trade(
        &mut self,
        shares: &str,
        price: &str,
        side: &str,
    ) -> Result<Trade, Vec<TradeInputError>> {
        match validate_trade_input(shares, price, side) {
            Ok(req) => Ok(self.record_trade(req.shares, req.price, req.side).clone()),
            Err(errors) => {
                tracing::info!(symbol = %self.symbol, errors = errors.len(), "trade rejected");
                Err(errors)
            }
        }
    }

    fn next_trade_id(&self) -> u32 {
        u32::try_from(self.trades.len()).map_or(u32::MAX, |n| n.saturating_add(1))
    }
}

fn ratio(numerator: i64, denominator: i64) -> f64 {
    if numerator == 0 || denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
