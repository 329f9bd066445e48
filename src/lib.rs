//! `seqkit` is a small library of type-agnostic operations over in-memory sequences, plus a CSV
//! exporter for sequences of records.
//!
//! Every operation takes a borrowed slice and returns a freshly allocated result; nothing is
//! mutated in place, nothing is lazy, and nothing runs concurrently.
//!
//! ## What you can do
//!
//! | Operation | Function |
//! |---|---|
//! | Category-aware membership test | [`processing::is_exist`], [`processing::is_exist_in`] |
//! | Filter / any-match | [`processing::filter`], [`processing::any`] |
//! | Drop nulls | [`processing::filter_nil`] |
//! | Map / fold / map-then-fold | [`processing::map`], [`processing::reduce`], [`processing::map_reduce`] |
//! | Exact lookup | [`processing::index_of`], [`processing::contains_all`] |
//! | Reverse / batch | [`processing::reverse`], [`processing::batch`] |
//! | CSV export | [`export::save_as_csv`], [`export::write_csv`] |
//!
//! ## Element types
//!
//! Operations are generic over the element type. For sequences that mix element types, use
//! [`types::Value`], a closed set of tagged variants:
//!
//! - [`types::Value::Int64`] / [`types::Value::UInt64`]
//! - [`types::Value::Float64`]
//! - [`types::Value::Bool`]
//! - [`types::Value::Utf8`]
//! - [`types::Value::List`] / [`types::Value::Record`]
//! - [`types::Value::Null`]
//!
//! ## Equality
//!
//! The membership test compares through the [`equality::Equivalent`] capability: values of
//! different [`types::Category`] never match, integers/strings/booleans compare exactly, floats
//! compare within [`equality::EPSILON`], and structured values compare field by field.
//! [`processing::index_of`] and [`processing::contains_all`] use plain `PartialEq` instead.
//!
//! ```rust
//! use seqkit::processing::{index_of, is_exist};
//!
//! assert!(is_exist(&1.0, &[0.5, 1.0 + 5e-7]));
//! assert_eq!(index_of(&[0.5, 1.0 + 5e-7], &1.0), None);
//! ```
//!
//! ## Contract violations
//!
//! Misuse that indicates a programming error panics with a diagnostic rather than returning a
//! default:
//!
//! - [`processing::is_exist_in`] with a non-list `Value` as the sequence
//! - [`processing::map_reduce`] on an empty sequence
//! - [`processing::batch`] with a batch size of zero
//!
//! Export failures (bad record shape, non-string fields, I/O) are returned as [`ExportError`].
//!
//! ## Modules
//!
//! - [`processing`]: the sequence operations
//! - [`types`]: [`types::Value`], [`types::Category`], [`types::Record`]
//! - [`equality`]: the [`equality::Equivalent`] capability and float tolerance
//! - [`export`]: CSV export and export observers
//! - [`error`]: error types used by export
//!
//! ## Example: map → reduce → export
//!
//! ```rust
//! use seqkit::export::{write_csv, ExportOptions};
//! use seqkit::processing::{batch, map_reduce};
//! use seqkit::types::Record;
//!
//! let total = map_reduce(&[1, 2, 3, 4], |x| x * 2, |acc, x| acc + x);
//! assert_eq!(total, 20);
//!
//! let rows: Vec<Record> = batch(&[1, 2, 3, 4, 5], 2)
//!     .iter()
//!     .enumerate()
//!     .map(|(i, b)| {
//!         Record::new()
//!             .with("batch", i.to_string())
//!             .with("size", b.len().to_string())
//!     })
//!     .collect();
//!
//! let mut out = Vec::new();
//! write_csv(&rows, &mut out, &ExportOptions::default()).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "batch,size\n0,2\n1,2\n2,1\n");
//! ```

pub mod equality;
pub mod error;
pub mod export;
pub mod processing;
pub mod types;

pub use error::{ExportError, ExportResult};
