/// Adds two routing weights without wrapping.
///
/// Accumulated weights are compared against a caller-supplied ceiling, so
/// an overflow must saturate rather than wrap back under it.
///
/// # Examples
///
/// ```
/// assert_eq!(flowpath::util::sum_weight(10, 700), 710);
/// assert_eq!(flowpath::util::sum_weight(u32::MAX, 1), u32::MAX);
/// ```
pub fn sum_weight(a: u32, b: u32) -> u32 {
    a.saturating_add(b)
}
