//! gbce — super simple stocks for the Global Beverage Corporation Exchange.
//!
//! Hexagonal architecture: stock metrics and the trade registry in
//! [`domain`], port traits in [`ports`], concrete implementations in
//! [`adapters`], command dispatch in [`cli`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
