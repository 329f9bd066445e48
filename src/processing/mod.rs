//! In-memory sequence operations.
//!
//! Every function here takes a borrowed slice and returns a freshly allocated result; inputs are
//! never mutated. Element types are generic, so the same functions serve `&[i64]`, `&[String]`,
//! user structs and heterogeneous `&[Value]` sequences alike.
//!
//! Currently implemented:
//!
//! - [`is_exist()`] / [`is_exist_in()`]: category-aware membership test (tolerant floats)
//! - [`index_of()`] / [`contains_all()`]: exact-equality lookup
//! - [`filter()`], [`any()`], [`filter_nil()`]: predicate-driven selection
//! - [`map()`], [`map_reduce()`]: element mapping
//! - [`reduce()`]: left fold with an initial accumulator
//! - [`reverse()`]: order reversal
//! - [`batch()`]: fixed-size chunking
//!
//! ## Example: filter → map → reduce
//!
//! ```rust
//! use seqkit::processing::{batch, filter, is_exist, map, reduce};
//! use seqkit::types::Value;
//!
//! let data = vec![
//!     Value::from(1),
//!     Value::from("skip me"),
//!     Value::from(2),
//!     Value::Null,
//!     Value::from(3),
//! ];
//!
//! // Keep only integers.
//! let ints = filter(&data, |v| matches!(v, Value::Int64(_)));
//! assert!(is_exist(&Value::from(2), &ints));
//!
//! // Square them.
//! let squared = map(&ints, |v| match v {
//!     Value::Int64(n) => n * n,
//!     _ => 0,
//! });
//!
//! let sum = reduce(&squared, |acc, x| acc + x, 0);
//! assert_eq!(sum, 14);
//!
//! assert_eq!(batch(&squared, 2), vec![vec![1, 4], vec![9]]);
//! ```

pub mod batch;
pub mod filter;
pub mod map;
pub mod reduce;
pub mod reorder;
pub mod search;

pub use batch::batch;
pub use filter::{any, filter, filter_nil, Nullable};
pub use map::{map, map_reduce};
pub use reduce::reduce;
pub use reorder::reverse;
pub use search::{contains_all, index_of, is_exist, is_exist_in};
