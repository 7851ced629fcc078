//! Command-line harness for the bridgepanel popup controller.
//!
//! Drives a real [`PopupController`](bridgepanel_gui::PopupController)
//! against scripted background replies and prints what the popup would show.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dev-dependencies used only by integration tests
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tokio_test as _;

// Used by the binary only
use anyhow as _;
use dotenvy as _;
use tracing_subscriber as _;

pub mod adapters;
pub mod commands;
pub mod config;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod scenario;

// Re-export primary types for convenient access
pub use commands::Commands;
pub use config::panel_config;
pub use error::CliError;
pub use parser::Cli;
