//! Marketcanon - canonical identifiers for free-text betting markets.
//!
//! Raw markets arrive with a free-text name (`"1st half - total"`), an event
//! id and outcome labels such as `"Over 2.5"` or `"Team A +1.5"`. This crate
//! resolves them against a fixed dictionary of market types and produces
//! canonical markets carrying numeric type codes, a specifier map and
//! deterministic UIDs.
//!
//! # Modules
//!
//! - [`domain`] - The pure core: normalizer, registry, UID scheme, converter,
//!   validators and batch conversion
//! - [`config`] - Configuration loading from TOML files
//! - [`error`] - Error types for the crate
//! - [`io`] - JSON input/output and path resolution
//! - [`cli`] - Command-line surface used by the `marketcanon` binary
//!
//! # Example
//!
//! ```
//! use marketcanon::domain::{MarketConverter, RawMarket, RawOutcome};
//! use rust_decimal_macros::dec;
//!
//! let raw = RawMarket::new(
//!     "Total",
//!     "123456",
//!     vec![
//!         RawOutcome::new("over 2.5", dec!(1.85)),
//!         RawOutcome::new("under 2.5", dec!(1.95)),
//!     ],
//! );
//!
//! let market = MarketConverter::default().convert(&raw).unwrap();
//! assert_eq!(market.market_uid().as_str(), "123456_18_2.5");
//! assert_eq!(market.outcome_type_codes(), vec![12, 13]);
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod io;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
