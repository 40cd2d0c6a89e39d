//! Market canonicalization core.
//!
//! Pure functions and immutable data only; nothing here touches the
//! filesystem. The [`registry`] table is built once and shared read-only.

pub mod batch;
pub mod converter;
pub mod error;
pub mod market;
pub mod normalize;
pub mod registry;
pub mod uid;
pub mod validate;

// Conversion
pub use batch::{convert_all, convert_all_validated, BatchFailure, BatchReport};
pub use converter::{MarketConverter, SpecifierDefaults};

// Records and identifiers
pub use market::{CanonicalMarket, CanonicalOutcome, RawMarket, RawOutcome, Specifiers};
pub use uid::{MarketUid, OutcomeUid};

// Registry
pub use registry::{MarketTypeDefinition, MarketTypeRegistry, SpecifierKind};

// Validation
pub use validate::{validate_canonical, validate_raw, ValidationPolicy, ValidationRule};

pub use error::{ConversionError, DomainError, IdentifierFormatError, UidKind, ValidationError};
