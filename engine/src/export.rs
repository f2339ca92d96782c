//! Report rendering for the UI collaborator
//!
//! CSV is the download format: header row, one data row per bidder, a blank
//! separator row, then a `Total Allocated` row. Column layout follows the
//! scheme — the rank scheme adds `Rank` and `Contract Value`. JSON carries
//! the same report for programmatic consumers.

use crate::models::{AllocationReport, AllocationRow, WeightingScheme};

/// Render a report as CSV text (RFC 4180 style quoting).
///
/// # Example
/// ```
/// use tender_allocation_core_rs::{allocate_proportional, report_to_csv, BidQuote};
///
/// let rows = vec![BidQuote::new("A", 1.0), BidQuote::new("B", 3.0)];
/// let report = allocate_proportional(&rows, 100.0).unwrap();
/// let csv = report_to_csv(&report);
/// assert!(csv.starts_with("Bidder,Quote,Weights,Allocation\n"));
/// assert!(csv.contains("Total Allocated"));
/// ```
pub fn report_to_csv(report: &AllocationReport) -> String {
    let rank_scheme = report.scheme == WeightingScheme::RankBased;
    let columns = if rank_scheme { 6 } else { 4 };

    let mut out = String::new();

    // Header
    if rank_scheme {
        out.push_str("Bidder,Quote,Weights,Allocation,Rank,Contract Value\n");
    } else {
        out.push_str("Bidder,Quote,Weights,Allocation\n");
    }

    // Data rows
    for row in &report.rows {
        out.push_str(&data_row(row, rank_scheme));
        out.push('\n');
    }

    // Blank separator row, then totals
    out.push_str(&",".repeat(columns - 1));
    out.push('\n');
    out.push_str(&totals_row(report, rank_scheme));
    out.push('\n');

    out
}

/// Render a report as pretty-printed JSON.
pub fn report_to_json(report: &AllocationReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

fn data_row(row: &AllocationRow, rank_scheme: bool) -> String {
    let bidder = csv_field(&row.bidder_id);
    if rank_scheme {
        format!(
            "{},{},{:.3},{:.0},{},{}",
            bidder,
            row.quote,
            row.weight,
            row.allocated_capacity,
            row.rank.map(|r| r.to_string()).unwrap_or_default(),
            csv_field(row.contract_value.as_deref().unwrap_or("")),
        )
    } else {
        format!(
            "{},{},{:.3},{:.0}",
            bidder, row.quote, row.weight, row.allocated_capacity
        )
    }
}

fn totals_row(report: &AllocationReport, rank_scheme: bool) -> String {
    if rank_scheme {
        format!(
            "Total Allocated,,,{:.0},,{}",
            report.total_allocated,
            csv_field(report.total_contract_value.as_deref().unwrap_or("")),
        )
    } else {
        format!("Total Allocated,,,{:.0}", report.total_allocated)
    }
}

/// Quote a field when it contains a separator, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
