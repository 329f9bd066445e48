//! Tabular export of record sequences.
//!
//! Most callers should use [`save_as_csv`] (or [`save_as_csv_with_options`]), which:
//!
//! - turns a homogeneous sequence of records into a header row plus one row per record
//! - creates or truncates the destination file and writes it as CSV
//! - optionally reports success/failure/alerts to an [`ExportObserver`]
//!
//! Any `T: Serialize` that serializes to a struct or map works as a record, including
//! [`crate::types::Record`], `Value::Record` and `HashMap<String, String>`. Records must share one
//! set of field names, in any order. Field values must already be strings.
//!
//! The lower-level pieces live in [`csv`]: [`tabulate`] (validation only) and [`write_csv`]
//! (any `io::Write` sink).

pub mod csv;
pub mod observability;

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use crate::error::ExportResult;

pub use ::csv::{QuoteStyle, Terminator};

pub use self::csv::{tabulate, write_csv, write_table, Table};
pub use observability::{
    CompositeObserver, ExportContext, ExportObserver, ExportSeverity, ExportStats, FileObserver,
    StdErrObserver,
};

/// Options controlling CSV export.
///
/// Use [`Default`] for standard comma-separated output.
#[derive(Clone)]
pub struct ExportOptions {
    /// Field delimiter. Defaults to `b','`.
    pub delimiter: u8,
    /// When fields are quoted. Defaults to [`QuoteStyle::Necessary`].
    pub quote_style: QuoteStyle,
    /// Record terminator. Defaults to `\n`.
    pub terminator: Terminator,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn ExportObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: ExportSeverity,
}

impl fmt::Debug for ExportOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportOptions")
            .field("delimiter", &(self.delimiter as char))
            .field("quote_style", &self.quote_style)
            .field("terminator", &self.terminator)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote_style: QuoteStyle::Necessary,
            terminator: Terminator::Any(b'\n'),
            observer: None,
            alert_at_or_above: ExportSeverity::Critical,
        }
    }
}

/// Write `records` to `path` as CSV using [`ExportOptions::default`].
///
/// The header comes from the first record's field names. An empty `records` slice therefore
/// creates (or truncates) `path` to an empty file with no header row, even for a struct type whose
/// fields are known statically.
///
/// ```no_run
/// use serde::Serialize;
/// use seqkit::export::save_as_csv;
///
/// #[derive(Serialize)]
/// struct Person {
///     #[serde(rename = "Name")]
///     name: String,
///     #[serde(rename = "Age")]
///     age: String,
/// }
///
/// # fn main() -> Result<(), seqkit::ExportError> {
/// let people = vec![Person { name: "Alice".into(), age: "25".into() }];
/// // people.csv:
/// // Name,Age
/// // Alice,25
/// save_as_csv(&people, "people.csv")?;
/// # Ok(())
/// # }
/// ```
pub fn save_as_csv<T: Serialize>(
    records: &[T],
    path: impl AsRef<Path>,
) -> ExportResult<ExportStats> {
    save_as_csv_with_options(records, path, &ExportOptions::default())
}

/// Write `records` to `path` as CSV.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with row/column stats
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// ## Observability (stderr logging + alert threshold)
///
/// ```no_run
/// use std::sync::Arc;
///
/// use seqkit::export::{save_as_csv_with_options, ExportOptions, ExportSeverity, StdErrObserver};
/// use seqkit::types::Record;
///
/// let opts = ExportOptions {
///     observer: Some(Arc::new(StdErrObserver::default())),
///     alert_at_or_above: ExportSeverity::Critical,
///     ..Default::default()
/// };
///
/// let rows = vec![Record::new().with("Name", "Alice")];
/// // A missing parent directory is Critical and triggers `on_alert` at this threshold.
/// let _err = save_as_csv_with_options(&rows, "missing_dir/out.csv", &opts).unwrap_err();
/// ```
pub fn save_as_csv_with_options<T: Serialize>(
    records: &[T],
    path: impl AsRef<Path>,
    options: &ExportOptions,
) -> ExportResult<ExportStats> {
    let path = path.as_ref();
    let ctx = ExportContext {
        path: path.to_path_buf(),
    };

    let result = self::csv::write_csv_to_path(records, path, options);

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(stats) => obs.on_success(&ctx, *stats),
            Err(e) => {
                let sev = ExportSeverity::for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}
