/// Converts a language-level integer to a container index.
///
/// Negative values have no corresponding index and yield `None`, which
/// callers render as an out-of-range access.
///
/// # Example
/// ```
/// use monkey::util::num::i64_to_index;
///
/// assert_eq!(i64_to_index(2), Some(2));
/// assert_eq!(i64_to_index(0), Some(0));
/// assert_eq!(i64_to_index(-1), None);
/// ```
#[must_use]
pub fn i64_to_index(value: i64) -> Option<usize> {
    usize::try_from(value).ok()
}
