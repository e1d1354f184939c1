//! Point rounding.
//!
//! Player totals are rounded to one decimal place, half away from zero.
//! Team totals are summed in whole tenths so the result does not depend
//! on roster order.

/// Round to one decimal place, ties away from zero.
///
/// # Examples
///
/// ```rust
/// use gridiron_score::numeric::round_to_tenth;
///
/// assert_eq!(round_to_tenth(24.04), 24.0);
/// assert_eq!(round_to_tenth(2.25), 2.3);
/// assert_eq!(round_to_tenth(-2.25), -2.3);
/// ```
pub fn round_to_tenth(points: f64) -> f64 {
    from_tenths(to_tenths(points))
}

/// Convert points to a whole number of tenths, ties away from zero.
pub fn to_tenths(points: f64) -> i64 {
    // f64::round already rounds half away from zero.
    (points * 10.0).round() as i64
}

/// Convert whole tenths back to points.
pub fn from_tenths(tenths: i64) -> f64 {
    tenths as f64 / 10.0
}

/// Sum already-rounded point values and round the result.
///
/// # Examples
///
/// ```rust
/// use gridiron_score::numeric::sum_rounded;
///
/// assert_eq!(sum_rounded([0.1, 0.2]), 0.3);
/// assert_eq!(sum_rounded(std::iter::empty()), 0.0);
/// ```
pub fn sum_rounded<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    from_tenths(values.into_iter().map(to_tenths).sum())
}
