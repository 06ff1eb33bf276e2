//! Infrastructure layer providing external integrations.

pub mod clients;
