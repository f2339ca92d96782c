//! Allocation engine
//!
//! Two weighting schemes over the same input shape:
//! - **proportional**: capacity proportional to quote value, with the
//!   reference's reverse-order weighting quirk preserved
//! - **rank**: descending-rank weighting plus per-bidder contract values
//!
//! Both are pure synchronous computations: no shared state, no I/O. Each
//! call builds a fresh [`AllocationReport`](crate::AllocationReport), so
//! concurrent invocations from different UI sessions cannot interfere.

pub mod proportional;
pub mod rank;

// Re-exports
pub use proportional::allocate_proportional;
pub use rank::{allocate_by_rank, sort_by_quote};

use crate::currency::CurrencyFormatter;
use crate::errors::{ConfigurationError, EngineError, InvalidInputError};
use crate::models::{AllocationReport, BidQuote, WeightingScheme};

/// Display precision for weights (decimal places)
pub(crate) const WEIGHT_DECIMALS: u32 = 3;

/// Round to `decimals` decimal places, half away from zero.
///
/// Single rounding implementation for the whole engine; weights use 3
/// decimals, allocations 0.
pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Validate the shared input constraints: non-empty bidder set and
/// non-negative capacity.
pub(crate) fn validate_input(
    rows: &[BidQuote],
    total_capacity: f64,
) -> Result<(), InvalidInputError> {
    if rows.is_empty() {
        return Err(InvalidInputError::EmptyBidderSet);
    }
    if total_capacity < 0.0 {
        return Err(InvalidInputError::NegativeCapacity {
            capacity: total_capacity,
        });
    }
    Ok(())
}

/// Run an allocation under the selected scheme.
///
/// The rank scheme needs a currency formatter for contract values; invoking
/// it without one is a [`ConfigurationError::MissingLocale`]. The rank
/// scheme also expects `rows` pre-sorted ascending by quote — see
/// [`sort_by_quote`].
///
/// # Example
/// ```
/// use tender_allocation_core_rs::{run_allocation, BidQuote, WeightingScheme};
///
/// let rows = vec![
///     BidQuote::new("Bidder #1", 10.0),
///     BidQuote::new("Bidder #2", 20.0),
/// ];
/// let report = run_allocation(
///     WeightingScheme::QuoteProportional,
///     &rows,
///     1_000.0,
///     None,
/// )
/// .unwrap();
/// assert_eq!(report.num_bidders(), 2);
/// ```
pub fn run_allocation(
    scheme: WeightingScheme,
    rows: &[BidQuote],
    total_capacity: f64,
    formatter: Option<&CurrencyFormatter>,
) -> Result<AllocationReport, EngineError> {
    match scheme {
        WeightingScheme::QuoteProportional => {
            Ok(allocate_proportional(rows, total_capacity)?)
        }
        WeightingScheme::RankBased => {
            let formatter = formatter.ok_or(ConfigurationError::MissingLocale)?;
            Ok(allocate_by_rank(rows, total_capacity, formatter)?)
        }
    }
}
