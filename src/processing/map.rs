//! Element mapping: [`map`] and [`map_reduce`].

/// Returns a new vector of the same length where each element is `transform` applied to the
/// corresponding input element.
pub fn map<T, U, F>(data: &[T], transform: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    data.iter().map(transform).collect()
}

/// Maps every element with `mapper`, then left-folds the mapped values with `reducer`, using the
/// first mapped value as the initial accumulator.
///
/// The mapping pass completes before the first `reducer` call.
///
/// ```rust
/// use seqkit::processing::map_reduce;
///
/// let total = map_reduce(&[1, 2, 3, 4], |x| x * 2, |acc, x| acc + x);
/// assert_eq!(total, 20);
/// ```
///
/// # Panics
///
/// Panics if `data` is empty: there is no first element to seed the fold with.
pub fn map_reduce<T, U, M, R>(data: &[T], mapper: M, reducer: R) -> U
where
    M: FnMut(&T) -> U,
    R: FnMut(U, U) -> U,
{
    assert!(
        !data.is_empty(),
        "map_reduce requires at least one element, got an empty sequence"
    );

    let mut mapped = map(data, mapper).into_iter();
    match mapped.next() {
        Some(first) => mapped.fold(first, reducer),
        None => unreachable!("non-empty input maps to a non-empty sequence"),
    }
}
