//! Command-line interface: argument parsing, table display, interactive menu

pub mod commands;
pub mod display;
pub mod menu;

pub use commands::{Cli, Commands};
