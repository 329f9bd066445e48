use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ExportError;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ExportSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (export rejected its input).
    Error,
    /// Critical error (the destination could not be created or written).
    Critical,
}

impl ExportSeverity {
    /// Classify an export failure.
    ///
    /// Anything that reached the filesystem is `Critical`; input-shape problems are `Error`.
    pub fn for_error(e: &ExportError) -> Self {
        match e {
            ExportError::Io(_) => ExportSeverity::Critical,
            ExportError::Csv(err) => match err.kind() {
                ::csv::ErrorKind::Io(_) => ExportSeverity::Critical,
                _ => ExportSeverity::Error,
            },
            ExportError::Serialize(err) if err.is_io() => ExportSeverity::Critical,
            ExportError::Serialize(_) => ExportSeverity::Error,
            ExportError::SchemaMismatch { .. } => ExportSeverity::Error,
            ExportError::NonStringField { .. } => ExportSeverity::Error,
        }
    }
}

/// Context about an export attempt.
#[derive(Debug, Clone)]
pub struct ExportContext {
    /// Destination path of the table.
    pub path: PathBuf,
}

/// Stats reported on a successful export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExportStats {
    /// Number of data rows written (the header row is not counted).
    pub rows: usize,
    /// Number of columns in the header.
    pub columns: usize,
}

/// Observer interface for export outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait ExportObserver: Send + Sync {
    /// Called when an export succeeds.
    fn on_success(&self, _ctx: &ExportContext, _stats: ExportStats) {}

    /// Called when an export fails.
    fn on_failure(&self, _ctx: &ExportContext, _severity: ExportSeverity, _error: &ExportError) {}

    /// Called when an export failure meets an alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &ExportContext, severity: ExportSeverity, error: &ExportError) {
        self.on_failure(ctx, severity, error)
    }
}

/// One observed export outcome, rendered as a single `key=value` log line.
enum Event<'a> {
    Ok(ExportStats),
    Fail(ExportSeverity, &'a ExportError),
    Alert(ExportSeverity, &'a ExportError),
}

impl Event<'_> {
    fn line(&self, ctx: &ExportContext) -> String {
        let path = ctx.path.display();
        match self {
            Event::Ok(stats) => {
                format!("ok path={path} rows={} columns={}", stats.rows, stats.columns)
            }
            Event::Fail(severity, error) => format!(
                "fail severity={severity:?} kind={} path={path} err={error}",
                error_kind(error)
            ),
            Event::Alert(severity, error) => format!(
                "ALERT severity={severity:?} kind={} path={path} err={error}",
                error_kind(error)
            ),
        }
    }
}

fn error_kind(e: &ExportError) -> &'static str {
    match e {
        ExportError::Io(_) => "io",
        ExportError::Csv(_) => "csv",
        ExportError::Serialize(_) => "serialize",
        ExportError::SchemaMismatch { .. } => "schema_mismatch",
        ExportError::NonStringField { .. } => "non_string_field",
    }
}

/// Forwards every callback to each wrapped observer, in order.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn ExportObserver>>,
}

impl CompositeObserver {
    pub fn new(observers: Vec<Arc<dyn ExportObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl ExportObserver for CompositeObserver {
    fn on_success(&self, ctx: &ExportContext, stats: ExportStats) {
        self.observers.iter().for_each(|o| o.on_success(ctx, stats));
    }

    fn on_failure(&self, ctx: &ExportContext, severity: ExportSeverity, error: &ExportError) {
        self.observers
            .iter()
            .for_each(|o| o.on_failure(ctx, severity, error));
    }

    fn on_alert(&self, ctx: &ExportContext, severity: ExportSeverity, error: &ExportError) {
        self.observers
            .iter()
            .for_each(|o| o.on_alert(ctx, severity, error));
    }
}

/// Prints one `[export] ...` line per event to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl StdErrObserver {
    fn emit(&self, ctx: &ExportContext, event: Event<'_>) {
        eprintln!("[export] {}", event.line(ctx));
    }
}

impl ExportObserver for StdErrObserver {
    fn on_success(&self, ctx: &ExportContext, stats: ExportStats) {
        self.emit(ctx, Event::Ok(stats));
    }

    fn on_failure(&self, ctx: &ExportContext, severity: ExportSeverity, error: &ExportError) {
        self.emit(ctx, Event::Fail(severity, error));
    }

    fn on_alert(&self, ctx: &ExportContext, severity: ExportSeverity, error: &ExportError) {
        self.emit(ctx, Event::Alert(severity, error));
    }
}

/// Appends one timestamped line per event to a log file.
///
/// Logging is best-effort: a log file that cannot be opened or written never fails the export.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn emit(&self, ctx: &ExportContext, event: Event<'_>) {
        let line = format!("{} {}", unix_ts(), event.line(ctx));
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl ExportObserver for FileObserver {
    fn on_success(&self, ctx: &ExportContext, stats: ExportStats) {
        self.emit(ctx, Event::Ok(stats));
    }

    fn on_failure(&self, ctx: &ExportContext, severity: ExportSeverity, error: &ExportError) {
        self.emit(ctx, Event::Fail(severity, error));
    }

    fn on_alert(&self, ctx: &ExportContext, severity: ExportSeverity, error: &ExportError) {
        self.emit(ctx, Event::Alert(severity, error));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
