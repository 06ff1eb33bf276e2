//! Core domain logic for the catalog browser.
//!
//! Models and services here are independent of the terminal backend and of the
//! HTTP client that feeds them.

pub mod models;
pub mod services;
