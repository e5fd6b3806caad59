//! Application configuration.
//!
//! Constants and command-line options shared across the crate.

mod constants;
mod types;

pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
