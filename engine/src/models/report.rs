//! Allocation report model
//!
//! The engine's output: one [`AllocationRow`] per bidder plus run-level
//! totals, bundled as an [`AllocationReport`]. Reports are ephemeral —
//! constructed fresh per run, never persisted, never shared between runs.

use serde::{Deserialize, Serialize};

/// Weighting scheme selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightingScheme {
    /// Capacity proportional to quote value (reverse-order weighting)
    QuoteProportional,

    /// Descending-rank weighting with per-bidder contract values
    RankBased,
}

impl WeightingScheme {
    /// Parse a scheme from its UI/CLI label. Returns `None` for unknown
    /// labels.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "proportional" | "quote-proportional" => Some(Self::QuoteProportional),
            "rank" | "rank-based" => Some(Self::RankBased),
            _ => None,
        }
    }

    /// Canonical label used in exports and the FFI surface
    pub fn label(&self) -> &'static str {
        match self {
            Self::QuoteProportional => "proportional",
            Self::RankBased => "rank-based",
        }
    }
}

/// One output row, one-to-one with an input [`BidQuote`](crate::BidQuote)
///
/// Rows keep the same relative order the engine processed them in. `weight`
/// and `allocated_capacity` hold the display-rounded values (3 and 0 decimal
/// places); the unrounded intermediates are not retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationRow {
    /// Bidder label, carried through unchanged
    pub bidder_id: String,

    /// Quote value, carried through unchanged
    pub quote: f64,

    /// Fraction of capacity in [0, 1], rounded to 3 decimals
    pub weight: f64,

    /// Allocated capacity, rounded to the nearest whole unit
    pub allocated_capacity: f64,

    /// 1-based rank (rank scheme only; rank 1 = lowest quote)
    pub rank: Option<u32>,

    /// Contract value as localized currency text (rank scheme only)
    pub contract_value: Option<String>,
}

/// Full result of one allocation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationReport {
    /// Fresh UUID per run, for traceability of exported tables
    pub run_id: String,

    /// Scheme that produced this report
    pub scheme: WeightingScheme,

    /// Per-bidder rows in output order
    pub rows: Vec<AllocationRow>,

    /// Exact sum of the rounded per-row allocations (not recomputed from
    /// unrounded weights)
    pub total_allocated: f64,

    /// Sum of the unrounded contract amounts, formatted once (rank scheme
    /// only)
    pub total_contract_value: Option<String>,
}

impl AllocationReport {
    pub(crate) fn new(scheme: WeightingScheme, rows: Vec<AllocationRow>) -> Self {
        let total_allocated = rows.iter().map(|r| r.allocated_capacity).sum();
        Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            scheme,
            rows,
            total_allocated,
            total_contract_value: None,
        }
    }

    /// Number of bidder rows (totals row excluded; it is synthesized at
    /// render time)
    pub fn num_bidders(&self) -> usize {
        self.rows.len()
    }
}
