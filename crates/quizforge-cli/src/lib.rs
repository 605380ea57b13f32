//! Quizforge CLI library.
//!
//! Configuration loading, command execution, logging setup and output
//! formatting for the `quizforge` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
