//! Interactive text menu over an [`Exchange`].
//!
//! Input and output are generic so a whole session can be driven from a
//! script. Per-iteration state lives in [`Session`].

pub mod messages;

use chrono::TimeDelta;
use std::io::{BufRead, Write};

use crate::domain::error::GbceError;
use crate::domain::exchange::{Exchange, SubmitError};
use crate::domain::index::IndexValue;
use messages::Messages;

const MENU_OPTIONS: i64 = 6;

/// Messages carried from one menu iteration to the next.
#[derive(Debug, Default)]
pub struct Session {
    pub last_error: Option<String>,
    /// Shown once on the next welcome screen, then cleared.
    pub result: Option<String>,
}

/// Read-only figures shown for a single stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Metric {
    DividendYield,
    PeRatio,
    StockPrice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    Metric(Metric),
    RecordTrade,
    AllShareIndex,
    Exit,
}

impl MenuOption {
    fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(MenuOption::Metric(Metric::DividendYield)),
            2 => Some(MenuOption::Metric(Metric::PeRatio)),
            3 => Some(MenuOption::RecordTrade),
            4 => Some(MenuOption::Metric(Metric::StockPrice)),
            5 => Some(MenuOption::AllShareIndex),
            6 => Some(MenuOption::Exit),
            _ => None,
        }
    }
}

enum Selection {
    Stock(usize),
    Return,
}

pub struct Console<'a, R, W> {
    exchange: &'a mut Exchange,
    messages: &'a Messages,
    ticker_window: TimeDelta,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(
        exchange: &'a mut Exchange,
        messages: &'a Messages,
        ticker_window: TimeDelta,
        input: R,
        output: W,
    ) -> Self {
        Console {
            exchange,
            messages,
            ticker_window,
            input,
            output,
        }
    }

    /// Run until the exit option is chosen or input ends.
    pub fn run(&mut self) -> Result<(), GbceError> {
        let mut session = Session::default();
        loop {
            self.show_welcome(&mut session)?;
            let Some(line) = self.read_line()? else {
                return self.close();
            };

            let option = match check_option(self.messages, &line, 1, MENU_OPTIONS) {
                Ok(n) => {
                    session.last_error = None;
                    MenuOption::from_number(n)
                }
                Err(message) => {
                    session.last_error = Some(message);
                    continue;
                }
            };

            match option {
                Some(MenuOption::Exit) | None => return self.close(),
                Some(MenuOption::AllShareIndex) => {
                    session.result = Some(self.render_index());
                }
                Some(MenuOption::Metric(metric)) => {
                    let Some(selection) = self.select_stock()? else {
                        return self.close();
                    };
                    if let Selection::Stock(position) = selection {
                        session.result = Some(self.show_metric(metric, position));
                    }
                }
                Some(MenuOption::RecordTrade) => {
                    let Some(selection) = self.select_stock()? else {
                        return self.close();
                    };
                    let Selection::Stock(position) = selection else {
                        continue;
                    };
                    match self.record_trade(position)? {
                        Some(message) => session.result = Some(message),
                        None => return self.close(),
                    }
                }
            }
        }
    }

    fn show_metric(&self, metric: Metric, position: usize) -> String {
        let Some(stock) = self.exchange.get(position) else {
            return self.messages.get("option.error.notavailable").to_string();
        };
        let (key, value) = match metric {
            Metric::DividendYield => {
                ("dividend.yield", format!("{:.4}", stock.dividend_yield()))
            }
            Metric::PeRatio => ("pe.ratio", format!("{:.2}", stock.pe_ratio())),
            Metric::StockPrice => (
                "stock.price",
                stock.volume_weighted_price(self.ticker_window).to_string(),
            ),
        };
        self.messages
            .render(key, &[("symbol", stock.symbol()), ("value", value.as_str())])
    }

    /// `None` means input ended before all three fields were read.
    fn record_trade(&mut self, position: usize) -> Result<Option<String>, GbceError> {
        let Some(symbol) = self.exchange.get(position).map(|s| s.symbol().to_string()) else {
            return Ok(Some(self.messages.get("option.error.notavailable").to_string()));
        };
        let title = self
            .messages
            .render("trade.insert.title", &[("symbol", symbol.as_str())]);
        writeln!(self.output, "{title}")?;

        let Some(shares) = self.prompt("trade.insert.shares")? else {
            return Ok(None);
        };
        let Some(price) = self.prompt("trade.insert.price")? else {
            return Ok(None);
        };
        let Some(side) = self.prompt("trade.insert.side")? else {
            return Ok(None);
        };

        let message = match self.exchange.submit_trade(position, &shares, &price, &side) {
            Ok(trade) => {
                let id = trade.id().to_string();
                self.messages.render(
                    "trade.insert.ok",
                    &[("id", id.as_str()), ("symbol", symbol.as_str())],
                )
            }
            Err(SubmitError::Rejected(errors)) => {
                let count = errors.len().to_string();
                let mut lines = vec![
                    self.messages
                        .render("trade.insert.haserrors", &[("count", count.as_str())]),
                ];
                lines.extend(errors.iter().map(|e| self.messages.trade_error(e)));
                lines.join("\n")
            }
            Err(SubmitError::NoSuchStock { .. }) => {
                self.messages.get("option.error.notavailable").to_string()
            }
        };
        Ok(Some(message))
    }

    /// `None` on end of input.
    fn select_stock(&mut self) -> Result<Option<Selection>, GbceError> {
        let count = self.exchange.len();
        let mut error: Option<String> = None;
        loop {
            writeln!(self.output, "{}", self.messages.get("stock.select.title"))?;
            for (position, symbol) in self.exchange.symbols().iter().enumerate() {
                let position = position.to_string();
                let entry = self.messages.render(
                    "stock.select.entry",
                    &[("position", position.as_str()), ("symbol", *symbol)],
                );
                writeln!(self.output, "{entry}")?;
            }
            if let Some(message) = error.take() {
                writeln!(self.output, "\n{message}")?;
            }
            let last = count.to_string();
            let back = self
                .messages
                .render("stock.select.return", &[("position", last.as_str())]);
            writeln!(self.output, "\n{back}")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match check_option(self.messages, &line, 0, count as i64) {
                Ok(n) if (n as usize) < count => return Ok(Some(Selection::Stock(n as usize))),
                Ok(_) => return Ok(Some(Selection::Return)),
                Err(message) => error = Some(message),
            }
        }
    }

    fn render_index(&self) -> String {
        let mut lines = vec![self.messages.get("allshare.title").to_string()];
        for entry in self.exchange.all_share_index() {
            let value = match entry.value {
                IndexValue::NoTrades => self.messages.get("allshare.notrades").to_string(),
                IndexValue::GeometricMean(v) => format!("{v:.4}"),
            };
            lines.push(self.messages.render(
                "allshare.entry",
                &[("symbol", entry.symbol.as_str()), ("value", value.as_str())],
            ));
        }
        lines.join("\n")
    }

    fn show_welcome(&mut self, session: &mut Session) -> Result<(), GbceError> {
        writeln!(self.output, "{}", self.messages.get("welcome.title"))?;
        for n in 1..=MENU_OPTIONS {
            writeln!(self.output, "{}", self.messages.get(&format!("welcome.option.{n}")))?;
        }
        if let Some(error) = &session.last_error {
            writeln!(self.output, "{error}\n")?;
        }
        if let Some(result) = session.result.take() {
            writeln!(self.output, "{result}\n")?;
        }
        writeln!(self.output, "{}", self.messages.get("welcome.prompt"))?;
        self.output.flush()?;
        Ok(())
    }

    fn prompt(&mut self, key: &str) -> Result<Option<String>, GbceError> {
        writeln!(self.output, "{}", self.messages.get(key))?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<Option<String>, GbceError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn close(&mut self) -> Result<(), GbceError> {
        writeln!(self.output, "{}", self.messages.get("close.ok"))?;
        self.output.flush()?;
        Ok(())
    }
}

/// Parse a menu choice and check it lies in `min..=max`.
fn check_option(messages: &Messages, input: &str, min: i64, max: i64) -> Result<i64, String> {
    let value = input
        .trim()
        .parse::<i64>()
        .map_err(|_| messages.get("option.error.numbers").to_string())?;
    if value < min || value > max {
        return Err(messages.get("option.error.notavailable").to_string());
    }
    Ok(value)
}
