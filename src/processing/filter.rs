//! Predicate-driven selection: [`filter`], [`any`], [`filter_nil`].

use crate::types::Value;

/// Returns a new vector containing, in order, the elements for which `predicate` returns `true`.
///
/// The predicate is called exactly once per element, front to back.
pub fn filter<T, F>(data: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    data.iter().filter(|d| predicate(*d)).cloned().collect()
}

/// Returns `true` if at least one element satisfies `predicate`.
///
/// Stops at the first match; later elements are not visited.
pub fn any<T, F>(data: &[T], predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    data.iter().any(predicate)
}

/// Element types that can represent the absence of a value.
pub trait Nullable {
    /// Returns `true` if this element stands for "no value".
    fn is_null(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl Nullable for Value {
    fn is_null(&self) -> bool {
        Value::is_null(self)
    }
}

/// Returns a new vector with every null element removed, preserving the order of the rest.
pub fn filter_nil<T>(data: &[T]) -> Vec<T>
where
    T: Nullable + Clone,
{
    filter(data, |d| !d.is_null())
}
