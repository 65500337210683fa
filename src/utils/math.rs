//! Percentage helpers for category breakdowns

/// Share of `part` in `total` as a percentage, 0.0 when `total` is zero.
///
/// # Examples
/// ```
/// use tx_untangling::utils::math::safe_percentage;
///
/// assert_eq!(safe_percentage(3, 12), 25.0);
/// assert_eq!(safe_percentage(7, 0), 0.0);
/// ```
#[inline]
pub fn safe_percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64) * 100.0
    }
}
