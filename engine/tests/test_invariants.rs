//! Allocation Invariant Tests (property-based)
//!
//! For any valid bidder table: weights sum to ~1.0 and allocations to
//! ~total capacity, with tolerance only from per-row display rounding
//! (0.0005 per weight, 0.5 per allocation).

use proptest::prelude::*;
use tender_allocation_core_rs::{
    allocate_by_rank, allocate_proportional, BidQuote, CurrencyFormatter,
};

fn bids(quotes: &[f64]) -> Vec<BidQuote> {
    quotes
        .iter()
        .enumerate()
        .map(|(i, &q)| BidQuote::new(format!("Bidder #{}", i + 1), q))
        .collect()
}

fn quote_vec(min_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.01f64..10_000.0, min_len..=20)
}

proptest! {
    #[test]
    fn prop_proportional_weights_sum_to_one(
        quotes in quote_vec(1),
        capacity in 1.0f64..1_000_000.0,
    ) {
        let report = allocate_proportional(&bids(&quotes), capacity).unwrap();
        let n = quotes.len() as f64;

        let weight_sum: f64 = report.rows.iter().map(|r| r.weight).sum();
        prop_assert!((weight_sum - 1.0).abs() <= 0.001 * n);

        let alloc_sum: f64 = report.rows.iter().map(|r| r.allocated_capacity).sum();
        prop_assert!((alloc_sum - capacity).abs() <= 0.5 * n + 1e-6);
    }

    #[test]
    fn prop_proportional_totals_match_rounded_rows(
        quotes in quote_vec(1),
        capacity in 1.0f64..1_000_000.0,
    ) {
        let report = allocate_proportional(&bids(&quotes), capacity).unwrap();
        let manual: f64 = report.rows.iter().map(|r| r.allocated_capacity).sum();
        prop_assert_eq!(report.total_allocated, manual);
    }

    #[test]
    fn prop_proportional_non_negative(
        quotes in quote_vec(1),
        capacity in 0.0f64..1_000_000.0,
    ) {
        let report = allocate_proportional(&bids(&quotes), capacity).unwrap();
        for row in &report.rows {
            prop_assert!(row.weight >= 0.0);
            prop_assert!(row.allocated_capacity >= 0.0);
        }
    }

    #[test]
    fn prop_rank_weights_sum_to_one(
        mut quotes in quote_vec(2),
        capacity in 1.0f64..1_000_000.0,
    ) {
        quotes.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let inr = CurrencyFormatter::for_region("en_IN").unwrap();
        let report = allocate_by_rank(&bids(&quotes), capacity, &inr).unwrap();
        let n = quotes.len() as f64;

        let weight_sum: f64 = report.rows.iter().map(|r| r.weight).sum();
        prop_assert!((weight_sum - 1.0).abs() <= 0.001 * n);

        let alloc_sum: f64 = report.rows.iter().map(|r| r.allocated_capacity).sum();
        prop_assert!((alloc_sum - capacity).abs() <= 0.5 * n + 1e-6);
        prop_assert_eq!(report.total_allocated, alloc_sum);
    }

    #[test]
    fn prop_rank_ranks_are_positional(
        mut quotes in quote_vec(2),
        capacity in 1.0f64..1_000_000.0,
    ) {
        quotes.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let inr = CurrencyFormatter::for_region("en_IN").unwrap();
        let report = allocate_by_rank(&bids(&quotes), capacity, &inr).unwrap();

        for (i, row) in report.rows.iter().enumerate() {
            prop_assert_eq!(row.rank, Some((i + 1) as u32));
            prop_assert!(row.weight >= 0.0);
            prop_assert!(row.allocated_capacity >= 0.0);
        }
    }
}
