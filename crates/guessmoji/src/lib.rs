//! # GuessMoji Host Library
//!
//! Shared infrastructure for running GuessMoji outside the browser:
//! - **error**: Common error type with context
//! - **tracing**: Logging setup (stderr, so stdout stays machine readable)
//! - **config**: Environment overrides for the filter configuration
//! - **command**: JSON command runner behind the `guessmoji-suggest` binary
//!
//! ## Usage
//!
//! ```rust,ignore
//! use guessmoji::command::{run_command, Command};
//! use guessmoji::config::filter_config_from_env;
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod tracing;

pub use command::{run_command, Command, Response};
pub use error::{Error, Result};
