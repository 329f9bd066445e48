//! Membership and lookup over sequences.
//!
//! Note the two equality policies in this module:
//!
//! - [`is_exist`] / [`is_exist_in`] use the category-aware [`Equivalent`] policy (tolerant floats).
//! - [`index_of`] / [`contains_all`] use exact `PartialEq`.

use crate::equality::Equivalent;
use crate::types::Value;

/// Returns `true` if any item of `within` is equivalent to `what`.
///
/// Items whose [`crate::types::Category`] differs from the probe's are skipped without being
/// compared, so `Value::Int64(3)` never matches `Value::Float64(3.0)`. Scans left to right and
/// stops at the first match.
///
/// ```rust
/// use seqkit::processing::is_exist;
/// use seqkit::types::Value;
///
/// assert!(is_exist(&3, &[1, 2, 3, 4, 5]));
/// assert!(!is_exist(&6, &[1, 2, 3, 4, 5]));
///
/// let mixed = vec![Value::from(3), Value::from("3"), Value::from(1.0 + 5e-7)];
/// assert!(is_exist(&Value::from(1.0), &mixed));
/// assert!(!is_exist(&Value::from(3.0), &mixed));
/// ```
pub fn is_exist<T: Equivalent>(what: &T, within: &[T]) -> bool {
    let category = what.category();
    within
        .iter()
        .filter(|item| item.category() == category)
        .any(|item| what.equivalent(item))
}

/// Dynamic form of [`is_exist`] where the sequence itself is a [`Value`].
///
/// # Panics
///
/// Panics if `within` is not a [`Value::List`].
pub fn is_exist_in(what: &Value, within: &Value) -> bool {
    match within.as_list() {
        Some(items) => is_exist(what, items),
        None => panic!(
            "is_exist_in: second argument must be a sequence, got {}",
            within.category()
        ),
    }
}

/// Returns the position of the first element exactly equal to `element`, or `None`.
///
/// Unlike [`is_exist`], floats are compared exactly and there is no category gate beyond what
/// `PartialEq` itself does.
pub fn index_of<T: PartialEq>(data: &[T], element: &T) -> Option<usize> {
    data.iter().position(|d| d == element)
}

/// Returns `true` if every element of `subset` has an exactly-equal counterpart somewhere in
/// `superset`. An empty `subset` is vacuously contained.
pub fn contains_all<T: PartialEq>(subset: &[T], superset: &[T]) -> bool {
    subset.iter().all(|e| superset.contains(e))
}
