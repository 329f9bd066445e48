//! Left fold over a sequence.

/// Folds `data` left to right, starting from `initial` and calling `reducer(acc, element)` once
/// per element.
///
/// An empty sequence returns `initial` unchanged. The accumulator type is independent of the
/// element type.
///
/// This is `Iterator::fold` with the sequence borrowed rather than consumed.
pub fn reduce<T, A, F>(data: &[T], reducer: F, initial: A) -> A
where
    F: FnMut(A, &T) -> A,
{
    data.iter().fold(initial, reducer)
}
