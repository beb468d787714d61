//! fob-parts CLI - compose bundler configuration from a parts manifest.
//!
//! - [`cli`] - Argument definitions
//! - [`commands`] - `compose`, `targets` and `check`
//! - [`error`] - CLI errors and miette conversion
//! - [`logger`] - tracing subscriber setup

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
