//! Integer average and median over a single row or column.
//!
//! Both return `None` for an empty slice; callers turn that into
//! `MatrixError::Invalid`.

/// Mean rounded half-up: `(sum + n / 2) / n` with truncating division.
///
/// The sum is carried in `i128` so no combination of `i64` inputs can
/// overflow. For negative sums truncation moves toward zero, which is the
/// arithmetic the tool has always used.
pub fn rounded_average(list: &[i64]) -> Option<i64> {
    if list.is_empty() {
        return None;
    }
    let len = list.len() as i128;
    let sum: i128 = list.iter().map(|&v| i128::from(v)).sum();
    // Never leaves the i64 range.
    Some(((sum + len / 2) / len) as i64)
}

/// Sorts `list` ascending and returns the element at index `len / 2`.
///
/// For an even length this is the upper of the two middle values, never
/// their mean.
pub fn upper_median(list: &mut [i64]) -> Option<i64> {
    if list.is_empty() {
        return None;
    }
    list.sort_unstable();
    Some(list[list.len() / 2])
}
