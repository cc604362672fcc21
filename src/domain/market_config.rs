//! Market configuration: ticker window and stock definitions.
//!
//! Built from any [`ConfigPort`]. Without a `stocks` list the reference seed
//! set is used, so a config file may carry nothing but overrides.

use chrono::TimeDelta;
use std::collections::HashSet;

use crate::domain::error::GbceError;
use crate::domain::seed::{reference_seeds, StockSeed};
use crate::domain::stock::StockKind;
use crate::ports::config_port::ConfigPort;

pub const DEFAULT_TICKER_WINDOW_SECS: i64 = 900;

#[derive(Debug, Clone, PartialEq)]
pub struct MarketConfig {
    /// Trailing window for the volume-weighted stock price.
    pub ticker_window: TimeDelta,
    pub seeds: Vec<StockSeed>,
}

impl Default for MarketConfig {
    fn default() -> Self {
        MarketConfig {
            ticker_window: TimeDelta::seconds(DEFAULT_TICKER_WINDOW_SECS),
            seeds: reference_seeds(),
        }
    }
}

pub fn build_market_config(config: &dyn ConfigPort) -> Result<MarketConfig, GbceError> {
    let ticker_window = parse_ticker_window(config)?;
    let seeds = match config.get_string("market", "stocks") {
        Some(list) => parse_symbols(&list)?
            .iter()
            .map(|symbol| parse_stock(config, symbol))
            .collect::<Result<Vec<_>, _>>()?,
        None => reference_seeds(),
    };
    Ok(MarketConfig {
        ticker_window,
        seeds,
    })
}

/// Comma-separated, trimmed and upper-cased. Empty tokens and repeats are
/// rejected.
pub fn parse_symbols(input: &str) -> Result<Vec<String>, GbceError> {
    let mut symbols = Vec::new();
    let mut seen = HashSet::new();

    for token in input.split(',') {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(invalid("market", "stocks", "empty token in stock list"));
        }
        if !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(invalid(
                "market",
                "stocks",
                &format!("symbol '{trimmed}' must be alphanumeric"),
            ));
        }
        let symbol = trimmed.to_uppercase();
        if !seen.insert(symbol.clone()) {
            return Err(GbceError::DuplicateSymbol(symbol));
        }
        symbols.push(symbol);
    }

    Ok(symbols)
}

fn parse_ticker_window(config: &dyn ConfigPort) -> Result<TimeDelta, GbceError> {
    let Some(raw) = config.get_string("market", "ticker_window_secs") else {
        return Ok(TimeDelta::seconds(DEFAULT_TICKER_WINDOW_SECS));
    };
    let secs = raw
        .parse::<i64>()
        .ok()
        .filter(|s| *s > 0)
        .ok_or_else(|| invalid("market", "ticker_window_secs", "must be a positive integer"))?;
    TimeDelta::try_seconds(secs)
        .ok_or_else(|| invalid("market", "ticker_window_secs", "window is too large"))
}

fn parse_stock(config: &dyn ConfigPort, symbol: &str) -> Result<StockSeed, GbceError> {
    let section = format!("stock.{symbol}");
    if !config.has_section(&section) {
        return Err(GbceError::ConfigMissing {
            section,
            key: "type".into(),
        });
    }

    let last_dividend = required_non_negative(config, &section, "last_dividend")?;
    let par_value = required_non_negative(config, &section, "par_value")?;
    let kind = match required(config, &section, "type")?.to_lowercase().as_str() {
        "common" => StockKind::Common,
        "preferred" => StockKind::Preferred {
            fixed_dividend: required_non_negative(config, &section, "fixed_dividend")?,
        },
        other => {
            return Err(invalid(
                &section,
                "type",
                &format!("unknown stock type '{other}' (expected common or preferred)"),
            ));
        }
    };

    Ok(StockSeed {
        symbol: symbol.to_string(),
        kind,
        last_dividend,
        par_value,
    })
}

fn required(config: &dyn ConfigPort, section: &str, key: &str) -> Result<String, GbceError> {
    config
        .get_string(section, key)
        .ok_or_else(|| GbceError::ConfigMissing {
            section: section.to_string(),
            key: key.to_string(),
        })
}

fn required_non_negative(
    config: &dyn ConfigPort,
    section: &str,
    key: &str,
) -> Result<i64, GbceError> {
    let raw = required(config, section, key)?;
    match raw.parse::<i64>() {
        Ok(value) if value >= 0 => Ok(value),
        Ok(_) => Err(invalid(section, key, "must be non-negative")),
        Err(_) => Err(invalid(section, key, &format!("'{raw}' is not an integer"))),
    }
}

fn invalid(section: &str, key: &str, reason: &str) -> GbceError {
    GbceError::ConfigInvalid {
        section: section.to_string(),
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// In-memory config with case-insensitive lookups.
    struct MapConfig {
        entries: HashMap<String, HashMap<String, String>>,
    }

    impl MapConfig {
        fn new(pairs: &[(&str, &str, &str)]) -> Self {
            let mut entries: HashMap<String, HashMap<String, String>> = HashMap::new();
            for (section, key, value) in pairs {
                entries
                    .entry(section.to_lowercase())
                    .or_default()
                    .insert(key.to_lowercase(), value.to_string());
            }
            MapConfig { entries }
        }
    }

    impl ConfigPort for MapConfig {
        fn get_string(&self, section: &str, key: &str) -> Option<String> {
            self.entries
                .get(&section.to_lowercase())
                .and_then(|s| s.get(&key.to_lowercase()))
                .cloned()
        }

        fn has_section(&self, section: &str) -> bool {
            self.entries.contains_key(&section.to_lowercase())
        }

        fn section_keys(&self, section: &str) -> Vec<String> {
            self.entries
                .get(&section.to_lowercase())
                .map(|s| s.keys().cloned().collect())
                .unwrap_or_default()
        }
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = build_market_config(&MapConfig::new(&[])).unwrap();
        assert_eq!(config, MarketConfig::default());
        assert_eq!(config.ticker_window, TimeDelta::seconds(900));
        assert_eq!(config.seeds.len(), 5);
    }

    #[test]
    fn custom_window() {
        let cfg = MapConfig::new(&[("market", "ticker_window_secs", "60")]);
        let config = build_market_config(&cfg).unwrap();
        assert_eq!(config.ticker_window, TimeDelta::seconds(60));
    }

    #[test]
    fn window_must_be_positive() {
        for raw in ["0", "-5", "abc"] {
            let cfg = MapConfig::new(&[("market", "ticker_window_secs", raw)]);
            let err = build_market_config(&cfg).unwrap_err();
            assert!(
                matches!(
                    err,
                    GbceError::ConfigInvalid { ref key, .. } if key == "ticker_window_secs"
                ),
                "{raw}: {err}"
            );
        }
    }

    #[test]
    fn explicit_stocks() {
        let cfg = MapConfig::new(&[
            ("market", "stocks", "gin, tea"),
            ("stock.GIN", "type", "Preferred"),
            ("stock.GIN", "last_dividend", "8"),
            ("stock.GIN", "fixed_dividend", "2"),
            ("stock.GIN", "par_value", "100"),
            ("stock.TEA", "type", "common"),
            ("stock.TEA", "last_dividend", "0"),
            ("stock.TEA", "par_value", "100"),
        ]);
        let config = build_market_config(&cfg).unwrap();
        assert_eq!(
            config.seeds,
            vec![
                StockSeed::preferred("GIN", 8, 2, 100),
                StockSeed::common("TEA", 0, 100),
            ]
        );
    }

    #[test]
    fn missing_stock_section() {
        let cfg = MapConfig::new(&[("market", "stocks", "XYZ")]);
        let err = build_market_config(&cfg).unwrap_err();
        assert!(matches!(err, GbceError::ConfigMissing { section, .. } if section == "stock.XYZ"));
    }

    #[test]
    fn preferred_requires_fixed_dividend() {
        let cfg = MapConfig::new(&[
            ("market", "stocks", "GIN"),
            ("stock.GIN", "type", "preferred"),
            ("stock.GIN", "last_dividend", "8"),
            ("stock.GIN", "par_value", "100"),
        ]);
        let err = build_market_config(&cfg).unwrap_err();
        assert!(matches!(err, GbceError::ConfigMissing { key, .. } if key == "fixed_dividend"));
    }

    #[test]
    fn negative_par_value_rejected() {
        let cfg = MapConfig::new(&[
            ("market", "stocks", "TEA"),
            ("stock.TEA", "type", "common"),
            ("stock.TEA", "last_dividend", "0"),
            ("stock.TEA", "par_value", "-1"),
        ]);
        let err = build_market_config(&cfg).unwrap_err();
        assert!(matches!(err, GbceError::ConfigInvalid { key, .. } if key == "par_value"));
    }

    #[test]
    fn unknown_type_rejected() {
        let cfg = MapConfig::new(&[
            ("market", "stocks", "TEA"),
            ("stock.TEA", "type", "bond"),
            ("stock.TEA", "last_dividend", "0"),
            ("stock.TEA", "par_value", "100"),
        ]);
        let err = build_market_config(&cfg).unwrap_err();
        assert!(matches!(err, GbceError::ConfigInvalid { key, .. } if key == "type"));
    }

    #[test]
    fn parse_symbols_normalises() {
        assert_eq!(parse_symbols(" tea,Pop ,ALE").unwrap(), vec!["TEA", "POP", "ALE"]);
    }

    #[test]
    fn parse_symbols_errors() {
        assert!(matches!(
            parse_symbols("TEA,,POP").unwrap_err(),
            GbceError::ConfigInvalid { .. }
        ));
        assert!(matches!(
            parse_symbols("TEA,T-A").unwrap_err(),
            GbceError::ConfigInvalid { .. }
        ));
        assert!(matches!(
            parse_symbols("TEA,tea").unwrap_err(),
            GbceError::DuplicateSymbol(s) if s == "TEA"
        ));
    }
}
