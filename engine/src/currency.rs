//! Localized currency formatting
//!
//! The rank-based allocator renders contract values as currency text. The
//! formatter is an injected capability — a value passed into the engine call
//! — never process-wide locale state, so allocation stays side-effect-free
//! and concurrent runs with different regions cannot interfere.
//!
//! Supported regions:
//! - `en_IN` — ₹ with lakh/crore digit grouping (the original deployment)
//! - `en_US` — $ with thousands grouping

use serde::{Deserialize, Serialize};

use crate::errors::ConfigurationError;

/// Digit grouping convention for the integer part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grouping {
    /// Groups of three: 1,234,567
    Thousands,

    /// Indian lakh/crore: last three digits, then groups of two: 12,34,567
    IndianLakh,
}

/// Formats numeric amounts as localized currency text
///
/// # Example
/// ```
/// use tender_allocation_core_rs::CurrencyFormatter;
///
/// let inr = CurrencyFormatter::for_region("en_IN").unwrap();
/// assert_eq!(inr.format(1_234_567.5), "₹12,34,567.50");
///
/// let usd = CurrencyFormatter::for_region("en_US").unwrap();
/// assert_eq!(usd.format(1_234_567.5), "$1,234,567.50");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormatter {
    symbol: String,
    grouping: Grouping,
    decimals: u32,
}

impl CurrencyFormatter {
    /// Build a formatter from explicit parts
    pub fn new(symbol: impl Into<String>, grouping: Grouping, decimals: u32) -> Self {
        Self {
            symbol: symbol.into(),
            grouping,
            decimals,
        }
    }

    /// Build a formatter for a named region.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::UnsupportedRegion`] for regions without a
    /// configured monetary convention.
    pub fn for_region(region: &str) -> Result<Self, ConfigurationError> {
        match region {
            "en_IN" => Ok(Self::new("₹", Grouping::IndianLakh, 2)),
            "en_US" => Ok(Self::new("$", Grouping::Thousands, 2)),
            _ => Err(ConfigurationError::UnsupportedRegion {
                region: region.to_string(),
            }),
        }
    }

    /// Format an amount: sign, symbol, grouped integer digits, fixed
    /// fractional digits.
    pub fn format(&self, amount: f64) -> String {
        let scale = 10u128.pow(self.decimals);
        // Round once at the formatter's precision, then split into integer
        // and fractional digits.
        let scaled = (amount.abs() * scale as f64).round() as u128;
        let units = scaled / scale;
        let frac = scaled % scale;

        let grouped = group_digits(&units.to_string(), self.grouping);
        let sign = if amount < 0.0 && scaled > 0 { "-" } else { "" };
        if self.decimals == 0 {
            format!("{}{}{}", sign, self.symbol, grouped)
        } else {
            format!(
                "{}{}{}.{:0width$}",
                sign,
                self.symbol,
                grouped,
                frac,
                width = self.decimals as usize
            )
        }
    }
}

/// Insert grouping separators into a plain digit string.
fn group_digits(digits: &str, grouping: Grouping) -> String {
    let bytes = digits.as_bytes();
    let n = bytes.len();
    if n <= 3 {
        return digits.to_string();
    }

    // Split points counted from the right: 3,6,9,.. for thousands;
    // 3,5,7,.. for lakh/crore.
    let mut out = Vec::with_capacity(n + n / 2);
    for (i, &b) in bytes.iter().enumerate() {
        if i > 0 {
            let from_right = n - i;
            let at_boundary = match grouping {
                Grouping::Thousands => from_right % 3 == 0,
                Grouping::IndianLakh => from_right == 3 || (from_right > 3 && from_right % 2 == 1),
            };
            if at_boundary {
                out.push(b',');
            }
        }
        out.push(b);
    }
    String::from_utf8(out).unwrap_or_else(|_| digits.to_string())
}
