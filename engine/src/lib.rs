//! Tender Capacity Allocation - Rust Engine
//!
//! Deterministic allocation engine for the tender capacity calculator: takes
//! an ordered bidder/quote table and a total capacity figure, returns a
//! weighted allocation report ready for tabular display and CSV export.
//!
//! # Architecture
//!
//! - **models**: Domain types (BidQuote, AllocationReport, WeightingScheme)
//! - **allocation**: The two weighting schemes (quote-proportional, rank-based)
//! - **currency**: Injected localized currency formatting
//! - **export**: CSV/JSON rendering of reports
//! - **errors**: Input and configuration error types
//!
//! # Critical Invariants
//!
//! 1. Every allocation run is a pure computation - no shared mutable state
//! 2. Weights sum to ~1.0 and allocations to ~total capacity (display rounding
//!    is the only tolerance)
//! 3. An allocation either fully succeeds or returns an error - no partial
//!    reports
//! 4. FFI boundary is minimal and safe

// Module declarations
pub mod allocation;
pub mod currency;
pub mod errors;
pub mod export;
pub mod models;

// Re-exports for convenience
pub use allocation::{allocate_by_rank, allocate_proportional, run_allocation, sort_by_quote};
pub use currency::{CurrencyFormatter, Grouping};
pub use errors::{ConfigurationError, EngineError, InvalidInputError};
pub use export::{report_to_csv, report_to_json};
pub use models::{
    bid::{blank_quote_table, BidQuote, MAX_BIDDERS},
    report::{AllocationReport, AllocationRow, WeightingScheme},
};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn tender_allocation_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::engine::allocate_proportional, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::engine::allocate_by_rank, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::engine::blank_quote_table, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::engine::report_csv, m)?)?;
    Ok(())
}
