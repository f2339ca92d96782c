//! Rank-based allocator
//!
//! Weights bidders by descending rank: with ranks 1..N assigned in input
//! order and `total_rank = 1 + 2 + ... + N`, bidder `i` contributes
//! `total_rank - rank[i]`, so rank 1 (the lowest quote) takes the largest
//! share. Each bidder additionally gets a contract value: the lowest quote
//! times that bidder's (unrounded) allocated capacity, rendered as localized
//! currency.
//!
//! The caller pre-sorts rows ascending by quote before calling — the engine
//! assigns ranks purely by position. [`sort_by_quote`] provides the stable
//! sort (ties keep original input order); silent reordering would change
//! financial outcomes, so the sort contract is part of the API.

use super::{round_to, validate_input, WEIGHT_DECIMALS};
use crate::currency::CurrencyFormatter;
use crate::errors::InvalidInputError;
use crate::models::{AllocationReport, AllocationRow, BidQuote, WeightingScheme};

/// Stable ascending sort by quote; ties keep original input order.
pub fn sort_by_quote(rows: &mut [BidQuote]) {
    rows.sort_by(|a, b| {
        a.quote
            .partial_cmp(&b.quote)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Allocate `total_capacity` across `rows` by descending-rank weighting.
///
/// `rows` must already be sorted ascending by quote (rank 1 = lowest quote);
/// see [`sort_by_quote`]. Weights are rounded to 3 decimals and allocations
/// to whole units. Contract values are computed from the unrounded
/// allocations; the totals row's contract value is the sum of the unrounded
/// amounts, formatted once.
///
/// # Errors
///
/// - [`InvalidInputError::EmptyBidderSet`] for zero rows
/// - [`InvalidInputError::NegativeCapacity`] for negative capacity
/// - [`InvalidInputError::DegenerateWeightSum`] for a single bidder, where
///   the contribution sum is zero and the weights are undefined (the
///   reference divides 0/0 here)
///
/// # Example
/// ```
/// use tender_allocation_core_rs::{allocate_by_rank, BidQuote, CurrencyFormatter};
///
/// let rows = vec![
///     BidQuote::new("Bidder #1", 5.0),
///     BidQuote::new("Bidder #2", 10.0),
///     BidQuote::new("Bidder #3", 15.0),
/// ];
/// let inr = CurrencyFormatter::for_region("en_IN").unwrap();
/// let report = allocate_by_rank(&rows, 100.0, &inr).unwrap();
///
/// assert_eq!(report.rows[0].rank, Some(1));
/// assert_eq!(report.rows[0].weight, 0.417);
/// assert_eq!(report.total_contract_value.as_deref(), Some("₹500.00"));
/// ```
pub fn allocate_by_rank(
    rows: &[BidQuote],
    total_capacity: f64,
    formatter: &CurrencyFormatter,
) -> Result<AllocationReport, InvalidInputError> {
    validate_input(rows, total_capacity)?;

    let n = rows.len();
    // total_rank = N(N+1)/2; contribution sum = (N-1) * total_rank.
    let total_rank = (n * (n + 1) / 2) as f64;
    let contribution_sum = (n as f64 - 1.0) * total_rank;
    if contribution_sum <= 0.0 {
        return Err(InvalidInputError::DegenerateWeightSum { bidders: n });
    }

    // Rank 1 is the lowest quote; caller guarantees ascending order.
    let lowest_quote = rows[0].quote;

    let mut contract_sum = 0.0;
    let result_rows = rows
        .iter()
        .enumerate()
        .map(|(i, bid)| {
            let rank = (i + 1) as u32;
            let contribution = total_rank - rank as f64;
            let weight = contribution / contribution_sum;
            let allocated = weight * total_capacity;
            let contract = lowest_quote * allocated;
            contract_sum += contract;
            AllocationRow {
                bidder_id: bid.bidder_id.clone(),
                quote: bid.quote,
                weight: round_to(weight, WEIGHT_DECIMALS),
                allocated_capacity: round_to(allocated, 0),
                rank: Some(rank),
                contract_value: Some(formatter.format(contract)),
            }
        })
        .collect();

    let mut report = AllocationReport::new(WeightingScheme::RankBased, result_rows);
    report.total_contract_value = Some(formatter.format(contract_sum));
    Ok(report)
}
