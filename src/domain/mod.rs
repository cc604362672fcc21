//! Core domain types and logic.

pub mod trade;
pub mod trade_input;
pub mod stock;
pub mod index;
pub mod seed;
pub mod exchange;
pub mod market_config;
pub mod error;
