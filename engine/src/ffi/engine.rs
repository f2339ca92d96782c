//! PyO3 wrappers for the allocation engine
//!
//! # Example (from Python)
//!
//! ```python
//! from tender_allocation_core_rs import allocate_proportional
//!
//! report = allocate_proportional([("Bidder #1", 10.0), ("Bidder #2", 20.0)], 10_000)
//! for row in report["rows"]:
//!     print(row["bidder_id"], row["allocated_capacity"])
//! print(report["total_allocated"])
//! ```

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::allocation;
use crate::currency::CurrencyFormatter;
use crate::export::report_to_csv;
use crate::models::{AllocationReport, BidQuote, WeightingScheme};

fn value_error(msg: impl std::fmt::Display) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(msg.to_string())
}

fn rows_from_pairs(bidders: Vec<(String, f64)>) -> Vec<BidQuote> {
    bidders
        .into_iter()
        .map(|(bidder_id, quote)| BidQuote::new(bidder_id, quote))
        .collect()
}

/// Convert a report to the dict shape the UI renders
fn report_to_py(py: Python<'_>, report: &AllocationReport) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("run_id", &report.run_id)?;
    dict.set_item("scheme", report.scheme.label())?;
    dict.set_item("total_allocated", report.total_allocated)?;
    dict.set_item("total_contract_value", report.total_contract_value.as_deref())?;

    let rows = PyList::empty_bound(py);
    for row in &report.rows {
        let d = PyDict::new_bound(py);
        d.set_item("bidder_id", &row.bidder_id)?;
        d.set_item("quote", row.quote)?;
        d.set_item("weight", row.weight)?;
        d.set_item("allocated_capacity", row.allocated_capacity)?;
        d.set_item("rank", row.rank)?;
        d.set_item("contract_value", row.contract_value.as_deref())?;
        rows.append(d)?;
    }
    dict.set_item("rows", rows)?;

    Ok(dict.into())
}

/// Quote-proportional allocation.
///
/// Raises `ValueError` for an empty bidder list, negative capacity, or an
/// all-zero quote column.
#[pyfunction]
pub fn allocate_proportional(
    py: Python<'_>,
    bidders: Vec<(String, f64)>,
    total_capacity: f64,
) -> PyResult<Py<PyDict>> {
    let rows = rows_from_pairs(bidders);
    let report =
        allocation::allocate_proportional(&rows, total_capacity).map_err(value_error)?;
    report_to_py(py, &report)
}

/// Rank-based allocation with contract values.
///
/// Rows are stable-sorted ascending by quote before ranking, matching the
/// entry grid's sort. Raises `ValueError` for invalid input or an
/// unsupported `region`.
#[pyfunction]
#[pyo3(signature = (bidders, total_capacity, region = "en_IN"))]
pub fn allocate_by_rank(
    py: Python<'_>,
    bidders: Vec<(String, f64)>,
    total_capacity: f64,
    region: &str,
) -> PyResult<Py<PyDict>> {
    let formatter = CurrencyFormatter::for_region(region).map_err(value_error)?;
    let mut rows = rows_from_pairs(bidders);
    allocation::sort_by_quote(&mut rows);
    let report =
        allocation::allocate_by_rank(&rows, total_capacity, &formatter).map_err(value_error)?;
    report_to_py(py, &report)
}

/// Blank entry table for the UI grid: `n_bidders` rows of
/// `("Bidder #i", 0.0)`.
#[pyfunction]
pub fn blank_quote_table(n_bidders: usize) -> Vec<(String, f64)> {
    crate::models::blank_quote_table(n_bidders)
        .into_iter()
        .map(|b| (b.bidder_id, b.quote))
        .collect()
}

/// Run a scheme and render the result CSV (the download button's payload).
///
/// `scheme` is `"proportional"` or `"rank"`; `region` is required for the
/// rank scheme.
#[pyfunction]
#[pyo3(signature = (scheme, bidders, total_capacity, region = None))]
pub fn report_csv(
    scheme: &str,
    bidders: Vec<(String, f64)>,
    total_capacity: f64,
    region: Option<&str>,
) -> PyResult<String> {
    let scheme = WeightingScheme::from_label(scheme)
        .ok_or_else(|| value_error(format!("unknown scheme '{}'", scheme)))?;

    let mut rows = rows_from_pairs(bidders);
    let report = match scheme {
        WeightingScheme::QuoteProportional => {
            allocation::run_allocation(scheme, &rows, total_capacity, None)
        }
        WeightingScheme::RankBased => {
            let formatter = match region {
                Some(r) => Some(CurrencyFormatter::for_region(r).map_err(value_error)?),
                None => None,
            };
            allocation::sort_by_quote(&mut rows);
            allocation::run_allocation(scheme, &rows, total_capacity, formatter.as_ref())
        }
    }
    .map_err(value_error)?;

    Ok(report_to_csv(&report))
}
