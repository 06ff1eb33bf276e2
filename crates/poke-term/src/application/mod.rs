//! Application layer driving the terminal interface.
//!
//! Holds the command-line definition and the main UI loop. It connects terminal
//! input and fetch results to the domain state.

pub mod cli;
pub mod ui;
