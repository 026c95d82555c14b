//! Number formatting helpers.

use std::fmt;

/// Formats a float with at least one fractional digit.
///
/// Whole numbers keep a trailing `.0` while other values print their shortest
/// exact representation.
///
/// # Examples
///
/// ```rust
/// use scales_core::display::Decimal;
///
/// assert_eq!(Decimal(75.0).to_string(), "75.0");
/// assert_eq!(Decimal(4.5).to_string(), "4.5");
/// assert_eq!(Decimal(72.25).to_string(), "72.25");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Decimal(pub f64);

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_finite() && self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}
