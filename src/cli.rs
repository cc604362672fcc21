//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::console::messages::Messages;
use crate::adapters::console::Console;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::error::GbceError;
use crate::domain::exchange::Exchange;
use crate::domain::market_config::{build_market_config, MarketConfig};
use crate::domain::stock::StockKind;

#[derive(Parser, Debug)]
#[command(
    name = "gbce",
    about = "Super simple stocks: dividend yield, P/E, VWAP and the all-share index"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the interactive menu
    Menu {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// List the configured stocks
    Symbols {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Validate a market configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Menu { config } => run_menu(config.as_ref()),
        Command::Symbols { config } => run_symbols(config.as_ref()),
        Command::Validate { config } => run_validate(&config),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, GbceError> {
    FileConfigAdapter::from_file(path).map_err(|e| GbceError::ConfigParse {
        file: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Market setup and console text for a run. Without a path the built-in
/// defaults apply.
pub fn load_market(path: Option<&PathBuf>) -> Result<(MarketConfig, Messages), GbceError> {
    match path {
        Some(path) => {
            let adapter = load_config(path)?;
            let market = build_market_config(&adapter)?;
            Ok((market, Messages::from_config(&adapter)))
        }
        None => Ok((MarketConfig::default(), Messages::default())),
    }
}

fn run_menu(config_path: Option<&PathBuf>) -> ExitCode {
    let (market, messages) = match load_market(config_path) {
        Ok(loaded) => loaded,
        Err(e) => return report(&e),
    };
    let mut exchange = match Exchange::from_seeds(&market.seeds) {
        Ok(x) => x,
        Err(e) => return report(&e),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(
        &mut exchange,
        &messages,
        market.ticker_window,
        stdin.lock(),
        stdout.lock(),
    );
    match console.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", messages.get("close.error"));
            report(&e)
        }
    }
}

fn run_symbols(config_path: Option<&PathBuf>) -> ExitCode {
    let market = match load_market(config_path) {
        Ok((market, _)) => market,
        Err(e) => return report(&e),
    };
    let exchange = match Exchange::from_seeds(&market.seeds) {
        Ok(x) => x,
        Err(e) => return report(&e),
    };

    for line in symbol_lines(&exchange) {
        println!("{line}");
    }
    ExitCode::SUCCESS
}

/// `SYMBOL\tType\tlast_dividend\tpar_value[\tfixed_dividend]` per stock.
pub fn symbol_lines(exchange: &Exchange) -> Vec<String> {
    exchange
        .stocks()
        .iter()
        .map(|stock| {
            let mut line = format!(
                "{}\t{}\t{}\t{}",
                stock.symbol(),
                stock.kind().label(),
                stock.last_dividend(),
                stock.par_value()
            );
            if let StockKind::Preferred { fixed_dividend } = stock.kind() {
                line.push_str(&format!("\t{fixed_dividend}"));
            }
            line
        })
        .collect()
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    eprintln!("Validating config: {}", config_path.display());
    let market = match load_market(Some(config_path)) {
        Ok((market, _)) => market,
        Err(e) => return report(&e),
    };
    if let Err(e) = Exchange::from_seeds(&market.seeds) {
        return report(&e);
    }

    eprintln!(
        "Config is valid: {} stocks, ticker window {}s",
        market.seeds.len(),
        market.ticker_window.num_seconds()
    );
    ExitCode::SUCCESS
}

fn report(err: &GbceError) -> ExitCode {
    eprintln!("error: {err}");
    err.into()
}
