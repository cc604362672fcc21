//! Concrete adapter implementations for ports.

pub mod console;
pub mod file_config_adapter;
