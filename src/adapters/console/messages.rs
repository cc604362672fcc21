//! Console text templates.
//!
//! Every user-facing line is looked up by key and rendered by replacing
//! `{name}` placeholders. Built-in English defaults can be overridden from
//! the `[text]` config section.

use std::collections::HashMap;

use crate::domain::trade_input::{TradeField, TradeInputError};
use crate::ports::config_port::ConfigPort;

const DEFAULTS: &[(&str, &str)] = &[
    ("welcome.title", "=== GBCE Super Simple Stocks ==="),
    ("welcome.option.1", "1.- Calculate dividend yield"),
    ("welcome.option.2", "2.- Calculate P/E ratio"),
    ("welcome.option.3", "3.- Record a trade"),
    ("welcome.option.4", "4.- Calculate volume weighted stock price"),
    ("welcome.option.5", "5.- Show GBCE All Share Index"),
    ("welcome.option.6", "6.- Exit"),
    ("welcome.prompt", "Select an option:"),
    ("option.error.numbers", "Only numbers are allowed."),
    ("option.error.notavailable", "The selected option is not available."),
    ("stock.select.title", "Select a stock:"),
    ("stock.select.entry", "{position}.- {symbol}"),
    ("stock.select.return", "{position}.- Return"),
    ("dividend.yield", "Dividend yield for {symbol}: {value}"),
    ("pe.ratio", "P/E ratio for {symbol}: {value}"),
    ("stock.price", "Volume weighted stock price for {symbol}: {value}"),
    ("trade.insert.title", "Record a trade for {symbol}"),
    ("trade.insert.shares", "Number of shares:"),
    ("trade.insert.price", "Price:"),
    ("trade.insert.side", "Buy or sell (B/S):"),
    ("trade.insert.ok", "Trade {id} recorded for {symbol}."),
    ("trade.insert.haserrors", "The trade was not recorded ({count} error(s)):"),
    ("trade.error.notvalidinput", "  {field}: '{value}' is not valid input"),
    ("trade.error.negative", "  {field}: negative values are not allowed"),
    ("field.shares", "Shares"),
    ("field.price", "Price"),
    ("field.side", "Buy/Sell"),
    ("allshare.title", "GBCE All Share Index"),
    ("allshare.entry", "{symbol}\t{value}"),
    ("allshare.notrades", "No trades"),
    ("close.ok", "Goodbye."),
    ("close.error", "An unexpected error occurred. Closing."),
];

#[derive(Debug, Clone)]
pub struct Messages {
    templates: HashMap<String, String>,
}

impl Default for Messages {
    fn default() -> Self {
        Messages {
            templates: DEFAULTS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl Messages {
    /// Defaults overlaid with the `[text]` section. Unknown keys are ignored.
    pub fn from_config(config: &dyn ConfigPort) -> Self {
        let mut messages = Self::default();
        for key in config.section_keys("text") {
            if !messages.templates.contains_key(&key) {
                tracing::warn!(key = %key, "ignoring unknown [text] key");
                continue;
            }
            if let Some(template) = config.get_string("text", &key) {
                messages.templates.insert(key, template);
            }
        }
        messages
    }

    /// The raw template, or the key itself when there is none.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.templates.get(key).map_or(key, String::as_str)
    }

    pub fn render(&self, key: &str, args: &[(&str, &str)]) -> String {
        args.iter()
            .fold(self.get(key).to_string(), |text, (name, value)| {
                text.replace(&format!("{{{name}}}"), value)
            })
    }

    pub fn trade_error(&self, err: &TradeInputError) -> String {
        let field = self.field_name(err.field());
        match err {
            TradeInputError::NotValidInput { raw, .. } => self.render(
                "trade.error.notvalidinput",
                &[("field", field), ("value", raw.as_str())],
            ),
            TradeInputError::Negative { .. } => {
                self.render("trade.error.negative", &[("field", field)])
            }
        }
    }

    fn field_name(&self, field: TradeField) -> &str {
        match field {
            TradeField::Shares => self.get("field.shares"),
            TradeField::Price => self.get("field.price"),
            TradeField::Side => self.get("field.side"),
        }
    }
}
