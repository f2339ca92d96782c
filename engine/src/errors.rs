//! Engine error types
//!
//! Two error families cross the engine boundary:
//! - [`InvalidInputError`]: the bidder table or capacity figure cannot
//!   produce a well-defined allocation
//! - [`ConfigurationError`]: currency formatting was requested without a
//!   usable locale/region
//!
//! The engine never returns partial results: an allocation run either fully
//! succeeds or yields one of these errors for the UI collaborator to present.

use thiserror::Error;

/// Input validation failures for an allocation run
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidInputError {
    #[error("bidder set is empty")]
    EmptyBidderSet,

    #[error("sum of quotes is zero; proportional weights are undefined")]
    ZeroQuoteSum,

    #[error("rank weights are undefined for {bidders} bidder(s)")]
    DegenerateWeightSum { bidders: usize },

    #[error("total capacity must be non-negative, got {capacity}")]
    NegativeCapacity { capacity: f64 },
}

/// Missing or unsupported locale configuration for currency formatting
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("no region configured for currency formatting")]
    MissingLocale,

    #[error("unsupported region '{region}' for currency formatting")]
    UnsupportedRegion { region: String },
}

/// Top-level engine error
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}
