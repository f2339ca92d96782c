//! Bid quote model
//!
//! One input row per bidder: a label and a numeric quote. The quote's
//! meaning depends on the weighting scheme — price per unit in the
//! quote-proportional scheme, price per unit used as the contract multiplier
//! in the rank-based scheme.

use serde::{Deserialize, Serialize};

/// Advisory upper bound on bidders per run.
///
/// The entry UI caps the bidder slider at 20; the engine itself accepts any
/// non-empty input set. Exposed so collaborators can share the limit without
/// hard-coding it.
pub const MAX_BIDDERS: usize = 20;

/// One bidder's quote — a single row of engine input
///
/// # Example
/// ```
/// use tender_allocation_core_rs::BidQuote;
///
/// let bid = BidQuote::new("Bidder #1", 42.5);
/// assert_eq!(bid.bidder_id, "Bidder #1");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BidQuote {
    /// Bidder label, unique within a run
    pub bidder_id: String,

    /// Quoted price (non-negative by convention; not enforced, matching the
    /// reference behavior)
    pub quote: f64,
}

impl BidQuote {
    pub fn new(bidder_id: impl Into<String>, quote: f64) -> Self {
        Self {
            bidder_id: bidder_id.into(),
            quote,
        }
    }
}

/// Build a blank entry table for `n_bidders` bidders.
///
/// Rows are labelled `Bidder #1` through `Bidder #N` with zero quotes, ready
/// for the UI to fill in. This is a pure constructor: every call builds a
/// fresh table, so two concurrent entry sessions can never observe each
/// other's edits.
///
/// # Example
/// ```
/// use tender_allocation_core_rs::blank_quote_table;
///
/// let table = blank_quote_table(3);
/// assert_eq!(table.len(), 3);
/// assert_eq!(table[2].bidder_id, "Bidder #3");
/// assert_eq!(table[2].quote, 0.0);
/// ```
pub fn blank_quote_table(n_bidders: usize) -> Vec<BidQuote> {
    (1..=n_bidders)
        .map(|i| BidQuote::new(format!("Bidder #{}", i), 0.0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_table_labels_are_one_based() {
        let table = blank_quote_table(5);
        assert_eq!(table[0].bidder_id, "Bidder #1");
        assert_eq!(table[4].bidder_id, "Bidder #5");
        assert!(table.iter().all(|b| b.quote == 0.0));
    }

    #[test]
    fn test_blank_table_zero_bidders_is_empty() {
        assert!(blank_quote_table(0).is_empty());
    }

    #[test]
    fn test_blank_table_calls_are_independent() {
        let mut a = blank_quote_table(3);
        let b = blank_quote_table(3);
        a[0].quote = 99.0;
        assert_eq!(b[0].quote, 0.0);
    }
}
