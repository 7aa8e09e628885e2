//! Slice helpers for price series.

/// Discard the first `n` entries. Returns an empty slice when `n >= len`.
pub fn drop_points<T>(series: &[T], n: usize) -> &[T] {
    series.get(n..).unwrap_or(&[])
}

/// Number of complete windows of `window` steps in a series of `len` points.
///
/// A window starting at `i` ends at `i + window`, which must be a valid index.
pub fn window_count(len: usize, window: usize) -> usize {
    len.saturating_sub(window)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_is_prefix_trim() {
        let v = [1, 2, 3, 4];
        assert_eq!(drop_points(&v, 0), &[1, 2, 3, 4]);
        assert_eq!(drop_points(&v, 1), &[2, 3, 4]);
        assert!(drop_points(&v, 4).is_empty());
        assert!(drop_points(&v, 9).is_empty());
    }

    #[test]
    fn window_count_matches_valid_starts() {
        assert_eq!(window_count(4, 2), 2);
        assert_eq!(window_count(4, 3), 1);
        assert_eq!(window_count(4, 4), 0);
        assert_eq!(window_count(4, 10), 0);
    }
}
