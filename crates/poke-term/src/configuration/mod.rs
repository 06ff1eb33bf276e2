//! Configuration management for the terminal interface.
//!
//! Holds the API location, page size and logging settings, seeded from defaults
//! and overridden by command-line flags.

mod config;

pub use config::*;
