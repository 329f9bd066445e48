//! Category-aware equality used by the membership test.
//!
//! [`Equivalent`] is the capability an element type provides so that
//! [`crate::processing::is_exist`] can compare it without runtime type inspection:
//!
//! - integers compare by exact value
//! - floats compare within [`EPSILON`]
//! - strings and booleans compare by exact value
//! - lists, records and user-defined types fall back to structural equality (`PartialEq`)
//!
//! User-defined structured types opt in with [`impl_structural_equivalent!`](crate::impl_structural_equivalent).

use crate::types::{Category, Value};

/// Absolute tolerance for float comparison in [`Equivalent::equivalent`].
pub const EPSILON: f64 = 1e-6;

/// Returns `true` if `|a - b| < EPSILON`.
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Equality capability for the membership test.
///
/// Callers only invoke [`Equivalent::equivalent`] on two values of the same [`Category`].
pub trait Equivalent {
    /// Runtime category of this value.
    fn category(&self) -> Category;

    /// Category-specific equality. Only meaningful when both sides share a category.
    fn equivalent(&self, other: &Self) -> bool;
}

macro_rules! exact_equivalent {
    ($category:expr => $($ty:ty),+ $(,)?) => {
        $(
            impl Equivalent for $ty {
                fn category(&self) -> Category {
                    $category
                }

                fn equivalent(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )+
    };
}

exact_equivalent!(Category::Int => i8, i16, i32, i64, i128, isize);
exact_equivalent!(Category::UInt => u8, u16, u32, u64, u128, usize);
exact_equivalent!(Category::Bool => bool);
exact_equivalent!(Category::Utf8 => str, String, char);

impl Equivalent for f32 {
    fn category(&self) -> Category {
        Category::Float
    }

    fn equivalent(&self, other: &Self) -> bool {
        approx_eq(f64::from(*self), f64::from(*other))
    }
}

impl Equivalent for f64 {
    fn category(&self) -> Category {
        Category::Float
    }

    fn equivalent(&self, other: &Self) -> bool {
        approx_eq(*self, *other)
    }
}

impl<T: Equivalent + ?Sized> Equivalent for &T {
    fn category(&self) -> Category {
        (**self).category()
    }

    fn equivalent(&self, other: &Self) -> bool {
        (**self).equivalent(*other)
    }
}

impl<T: Equivalent> Equivalent for Option<T> {
    fn category(&self) -> Category {
        match self {
            Some(v) => v.category(),
            None => Category::Null,
        }
    }

    fn equivalent(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.equivalent(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: PartialEq> Equivalent for Vec<T> {
    fn category(&self) -> Category {
        Category::List
    }

    fn equivalent(&self, other: &Self) -> bool {
        self == other
    }
}

impl Equivalent for Value {
    fn category(&self) -> Category {
        Value::category(self)
    }

    fn equivalent(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Int64(a), Value::Int64(b)) => a == b,
            (Value::UInt64(a), Value::UInt64(b)) => a == b,
            (Value::Float64(a), Value::Float64(b)) => approx_eq(*a, *b),
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Utf8(a), Value::Utf8(b)) => a == b,
            // Nested floats compare exactly here, only top-level floats get the tolerance.
            (a, b) => a == b,
        }
    }
}

/// Implements [`Equivalent`](crate::equality::Equivalent) for structured types via their
/// `PartialEq`, placing them in [`Category::Record`](crate::types::Category::Record).
///
/// ```rust
/// use seqkit::impl_structural_equivalent;
/// use seqkit::processing::is_exist;
///
/// #[derive(PartialEq)]
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// impl_structural_equivalent!(Person);
///
/// let people = vec![
///     Person { name: "Alice".into(), age: 25 },
///     Person { name: "Bob".into(), age: 25 },
/// ];
/// assert!(is_exist(&Person { name: "Bob".into(), age: 25 }, &people));
/// assert!(!is_exist(&Person { name: "Bob".into(), age: 26 }, &people));
/// ```
#[macro_export]
macro_rules! impl_structural_equivalent {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::equality::Equivalent for $ty {
                fn category(&self) -> $crate::types::Category {
                    $crate::types::Category::Record
                }

                fn equivalent(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )+
    };
}
