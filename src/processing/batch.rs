//! Splitting a sequence into fixed-size batches.

/// Splits `items` into consecutive, non-overlapping batches of at most `batch_size` elements.
///
/// Every batch except possibly the last holds exactly `batch_size` elements (or all of `items`
/// when it is shorter than that). Concatenating the batches in order reproduces `items`. An empty
/// input yields no batches.
///
/// ```rust
/// use seqkit::processing::batch;
///
/// assert_eq!(batch(&[1, 2, 3, 4, 5], 2), vec![vec![1, 2], vec![3, 4], vec![5]]);
/// ```
///
/// # Panics
///
/// Panics if `batch_size == 0`.
pub fn batch<T: Clone>(items: &[T], batch_size: usize) -> Vec<Vec<T>> {
    assert!(batch_size > 0, "batch_size must be > 0");
    items.chunks(batch_size).map(<[T]>::to_vec).collect()
}
