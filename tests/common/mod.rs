#![allow(dead_code)]

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use gbce::adapters::console::messages::Messages;
use gbce::adapters::console::Console;
use gbce::domain::exchange::Exchange;
use gbce::domain::seed::reference_seeds;
use std::io::{Cursor, Write};

pub const TICKER_WINDOW_SECS: i64 = 900;

pub fn ticker_window() -> TimeDelta {
    TimeDelta::seconds(TICKER_WINDOW_SECS)
}

pub fn reference_exchange() -> Exchange {
    Exchange::from_seeds(&reference_seeds()).unwrap()
}

/// Fixed reference instant for window tests.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 3, 12, 0, 0).unwrap()
}

pub fn secs_ago(secs: i64) -> DateTime<Utc> {
    now() - TimeDelta::seconds(secs)
}

/// Drive a console session from `script` and return everything it printed.
pub fn run_console(exchange: &mut Exchange, messages: &Messages, script: &str) -> String {
    let mut output = Vec::new();
    Console::new(
        exchange,
        messages,
        ticker_window(),
        Cursor::new(script.as_bytes().to_vec()),
        &mut output,
    )
    .run()
    .unwrap();
    String::from_utf8(output).unwrap()
}

pub fn write_temp_ini(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
