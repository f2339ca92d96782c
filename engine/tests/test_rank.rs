//! Rank-Based Allocator Tests
//!
//! Covers rank assignment, descending-rank weighting, contract values,
//! the stable pre-sort contract, and degenerate inputs.

use tender_allocation_core_rs::{
    allocate_by_rank, run_allocation, sort_by_quote, BidQuote, ConfigurationError,
    CurrencyFormatter, EngineError, InvalidInputError, WeightingScheme,
};

fn inr() -> CurrencyFormatter {
    CurrencyFormatter::for_region("en_IN").unwrap()
}

fn bids(quotes: &[f64]) -> Vec<BidQuote> {
    quotes
        .iter()
        .enumerate()
        .map(|(i, &q)| BidQuote::new(format!("Bidder #{}", i + 1), q))
        .collect()
}

#[test]
fn test_three_bidder_reference_case() {
    // Pre-sorted ascending: ranks [1,2,3], total_rank 6, contributions
    // [5,4,3] / 12.
    let report = allocate_by_rank(&bids(&[5.0, 10.0, 15.0]), 100.0, &inr()).unwrap();

    let ranks: Vec<u32> = report.rows.iter().map(|r| r.rank.unwrap()).collect();
    assert_eq!(ranks, vec![1, 2, 3]);

    let weights: Vec<f64> = report.rows.iter().map(|r| r.weight).collect();
    assert_eq!(weights, vec![0.417, 0.333, 0.25]);

    let allocs: Vec<f64> = report.rows.iter().map(|r| r.allocated_capacity).collect();
    assert_eq!(allocs, vec![42.0, 33.0, 25.0]);
    assert_eq!(report.total_allocated, 100.0);

    // Contract value = lowest quote (5) × unrounded allocation.
    let contracts: Vec<&str> = report
        .rows
        .iter()
        .map(|r| r.contract_value.as_deref().unwrap())
        .collect();
    assert_eq!(contracts, vec!["₹208.33", "₹166.67", "₹125.00"]);
    assert_eq!(report.total_contract_value.as_deref(), Some("₹500.00"));
    assert_eq!(report.scheme, WeightingScheme::RankBased);
}

#[test]
fn test_lowest_quote_gets_largest_share() {
    let report = allocate_by_rank(&bids(&[2.0, 4.0, 6.0, 8.0]), 1_000.0, &inr()).unwrap();
    let allocs: Vec<f64> = report.rows.iter().map(|r| r.allocated_capacity).collect();
    for pair in allocs.windows(2) {
        assert!(pair[0] > pair[1], "allocations must descend with rank");
    }
}

#[test]
fn test_pre_sort_is_stable_on_ties() {
    let mut rows = vec![
        BidQuote::new("late-cheap", 3.0),
        BidQuote::new("tied-a", 7.0),
        BidQuote::new("tied-b", 7.0),
    ];
    sort_by_quote(&mut rows);

    let ids: Vec<&str> = rows.iter().map(|r| r.bidder_id.as_str()).collect();
    assert_eq!(ids, vec!["late-cheap", "tied-a", "tied-b"]);

    // Tied quotes keep input order, so tied-a outranks tied-b.
    let report = allocate_by_rank(&rows, 100.0, &inr()).unwrap();
    assert_eq!(report.rows[1].bidder_id, "tied-a");
    assert_eq!(report.rows[1].rank, Some(2));
    assert_eq!(report.rows[2].bidder_id, "tied-b");
    assert_eq!(report.rows[2].rank, Some(3));
}

#[test]
fn test_single_bidder_is_degenerate() {
    let err = allocate_by_rank(&bids(&[5.0]), 100.0, &inr()).unwrap_err();
    assert_eq!(err, InvalidInputError::DegenerateWeightSum { bidders: 1 });
}

#[test]
fn test_empty_bidder_set_is_invalid_input() {
    let err = allocate_by_rank(&[], 100.0, &inr()).unwrap_err();
    assert_eq!(err, InvalidInputError::EmptyBidderSet);
}

#[test]
fn test_negative_capacity_is_invalid_input() {
    let err = allocate_by_rank(&bids(&[5.0, 10.0]), -0.5, &inr()).unwrap_err();
    assert!(matches!(err, InvalidInputError::NegativeCapacity { .. }));
}

#[test]
fn test_dispatch_requires_formatter() {
    let rows = bids(&[5.0, 10.0]);
    let err = run_allocation(WeightingScheme::RankBased, &rows, 100.0, None).unwrap_err();
    assert_eq!(
        err,
        EngineError::Configuration(ConfigurationError::MissingLocale)
    );
}

#[test]
fn test_dispatch_with_formatter_matches_direct_call() {
    let rows = bids(&[5.0, 10.0, 15.0]);
    let formatter = inr();
    let direct = allocate_by_rank(&rows, 100.0, &formatter).unwrap();
    let dispatched =
        run_allocation(WeightingScheme::RankBased, &rows, 100.0, Some(&formatter)).unwrap();
    assert_eq!(direct.rows, dispatched.rows);
    assert_eq!(direct.total_contract_value, dispatched.total_contract_value);
}

#[test]
fn test_idempotent_recomputation() {
    let rows = bids(&[1.0, 2.0, 3.0, 4.0]);
    let a = allocate_by_rank(&rows, 500.0, &inr()).unwrap();
    let b = allocate_by_rank(&rows, 500.0, &inr()).unwrap();
    assert_eq!(a.rows, b.rows);
    assert_eq!(a.total_contract_value, b.total_contract_value);
    assert_ne!(a.run_id, b.run_id);
}

#[test]
fn test_region_selects_currency_convention() {
    let usd = CurrencyFormatter::for_region("en_US").unwrap();
    let report = allocate_by_rank(&bids(&[5.0, 10.0, 15.0]), 100.0, &usd).unwrap();
    assert_eq!(
        report.rows[0].contract_value.as_deref(),
        Some("$208.33")
    );
    assert_eq!(report.total_contract_value.as_deref(), Some("$500.00"));
}
