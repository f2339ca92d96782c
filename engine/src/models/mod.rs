//! Domain models for the allocation engine

pub mod bid;
pub mod report;

// Re-exports
pub use bid::{blank_quote_table, BidQuote, MAX_BIDDERS};
pub use report::{AllocationReport, AllocationRow, WeightingScheme};
