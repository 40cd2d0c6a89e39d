//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`market`] - Builders for raw and canonical markets.
//! - [`fixtures`] - JSON and TOML documents shared by I/O, config and CLI tests.

pub mod fixtures;
pub mod market;
