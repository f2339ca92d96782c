//! Python FFI boundary (feature `pyo3`)
//!
//! The web UI calls the engine through these functions. The boundary is
//! minimal: bidder tables cross as lists of `(label, quote)` tuples, reports
//! come back as plain dicts, and engine errors surface as `ValueError`.

pub mod engine;

pub use engine::{allocate_by_rank, allocate_proportional, blank_quote_table, report_csv};
