//! Quote-proportional allocator
//!
//! Allocates capacity proportional to quote value, with the reference
//! system's reverse-order weighting: the raw weight vector is the quote
//! column *reversed*, so output row `i` keeps bidder `i`'s identity and
//! quote but takes the weight computed from the quote at mirrored position
//! `N-1-i`. The last-entered bidder therefore receives the first-entered
//! bidder's share. This is preserved reference behavior, not a derivable
//! business rule — callers relying on it must not "correct" the order.

use super::{round_to, validate_input, WEIGHT_DECIMALS};
use crate::errors::InvalidInputError;
use crate::models::{AllocationReport, AllocationRow, BidQuote, WeightingScheme};

/// Allocate `total_capacity` across `rows` proportional to quote value.
///
/// Output rows are in input order; weights follow the reversed-quote
/// computation described in the module docs. Weights are rounded to 3
/// decimals and allocations to whole units; the report's `total_allocated`
/// is the exact sum of the rounded allocations.
///
/// # Errors
///
/// - [`InvalidInputError::EmptyBidderSet`] for zero rows
/// - [`InvalidInputError::NegativeCapacity`] for negative capacity
/// - [`InvalidInputError::ZeroQuoteSum`] when the quote sum is zero (the
///   reference divides by zero here; the engine reports it instead)
///
/// # Example
/// ```
/// use tender_allocation_core_rs::{allocate_proportional, BidQuote};
///
/// let rows = vec![
///     BidQuote::new("Bidder #1", 10.0),
///     BidQuote::new("Bidder #2", 20.0),
///     BidQuote::new("Bidder #3", 30.0),
/// ];
/// let report = allocate_proportional(&rows, 100.0).unwrap();
///
/// // Reverse-order weighting: row 1 carries the weight of quote 30.
/// assert_eq!(report.rows[0].weight, 0.5);
/// assert_eq!(report.rows[0].allocated_capacity, 50.0);
/// assert_eq!(report.total_allocated, 100.0);
/// ```
pub fn allocate_proportional(
    rows: &[BidQuote],
    total_capacity: f64,
) -> Result<AllocationReport, InvalidInputError> {
    validate_input(rows, total_capacity)?;

    let quote_sum: f64 = rows.iter().map(|r| r.quote).sum();
    if quote_sum == 0.0 {
        return Err(InvalidInputError::ZeroQuoteSum);
    }

    let n = rows.len();
    let result_rows = rows
        .iter()
        .enumerate()
        .map(|(i, bid)| {
            // Reversal quirk: weight comes from the mirrored position.
            let raw_weight = rows[n - 1 - i].quote;
            let weight = raw_weight / quote_sum;
            let allocated = weight * total_capacity;
            AllocationRow {
                bidder_id: bid.bidder_id.clone(),
                quote: bid.quote,
                weight: round_to(weight, WEIGHT_DECIMALS),
                allocated_capacity: round_to(allocated, 0),
                rank: None,
                contract_value: None,
            }
        })
        .collect();

    Ok(AllocationReport::new(
        WeightingScheme::QuoteProportional,
        result_rows,
    ))
}
