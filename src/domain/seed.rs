//! Static stock definitions loaded at startup.

use super::stock::{Stock, StockKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockSeed {
    pub symbol: String,
    pub kind: StockKind,
    pub last_dividend: i64,
    pub par_value: i64,
}

impl StockSeed {
    pub fn common(symbol: &str, last_dividend: i64, par_value: i64) -> Self {
        StockSeed {
            symbol: symbol.to_string(),
            kind: StockKind::Common,
            last_dividend,
            par_value,
        }
    }

    pub fn preferred(
        symbol: &str,
        last_dividend: i64,
        fixed_dividend: i64,
        par_value: i64,
    ) -> Self {
        StockSeed {
            symbol: symbol.to_string(),
            kind: StockKind::Preferred { fixed_dividend },
            last_dividend,
            par_value,
        }
    }

    pub fn build(&self) -> Stock {
        Stock::new(self.symbol.clone(), self.kind, self.last_dividend, self.par_value)
    }
}

/// The GBCE sample data set.
pub fn reference_seeds() -> Vec<StockSeed> {
    vec![
        StockSeed::common("TEA", 0, 100),
        StockSeed::common("POP", 8, 100),
        StockSeed::common("ALE", 23, 60),
        StockSeed::preferred("GIN", 8, 2, 100),
        StockSeed::common("JOE", 13, 250),
    ]
}
