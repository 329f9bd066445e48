use std::fs;
use std::sync::{Arc, Mutex};

use seqkit::export::{
    save_as_csv_with_options, CompositeObserver, ExportContext, ExportObserver, ExportOptions,
    ExportSeverity, ExportStats, FileObserver,
};
use seqkit::types::Record;
use seqkit::ExportError;

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<ExportStats>>,
    failures: Mutex<Vec<ExportSeverity>>,
    alerts: Mutex<Vec<ExportSeverity>>,
}

impl ExportObserver for RecordingObserver {
    fn on_success(&self, _ctx: &ExportContext, stats: ExportStats) {
        self.successes.lock().unwrap().push(stats);
    }

    fn on_failure(&self, _ctx: &ExportContext, severity: ExportSeverity, _error: &ExportError) {
        self.failures.lock().unwrap().push(severity);
    }

    fn on_alert(&self, _ctx: &ExportContext, severity: ExportSeverity, _error: &ExportError) {
        self.alerts.lock().unwrap().push(severity);
    }
}

fn string_rows() -> Vec<Record> {
    vec![Record::new().with("Name", "Alice").with("Age", "25")]
}

fn typed_rows() -> Vec<Record> {
    vec![Record::new().with("Name", "Alice").with("Age", 25)]
}

#[test]
fn observer_receives_success_stats() {
    let dir = tempfile::tempdir().unwrap();
    let obs = Arc::new(RecordingObserver::default());
    let opts = ExportOptions {
        observer: Some(obs.clone()),
        ..Default::default()
    };

    save_as_csv_with_options(&string_rows(), dir.path().join("ok.csv"), &opts).unwrap();

    assert_eq!(
        obs.successes.lock().unwrap().clone(),
        vec![ExportStats { rows: 1, columns: 2 }]
    );
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn observer_receives_failure_and_alert_on_critical_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let obs = Arc::new(RecordingObserver::default());
    let opts = ExportOptions {
        observer: Some(obs.clone()),
        alert_at_or_above: ExportSeverity::Critical,
        ..Default::default()
    };

    // Missing parent directory -> Io error -> Critical
    let path = dir.path().join("missing").join("out.csv");
    let _ = save_as_csv_with_options(&string_rows(), &path, &opts).unwrap_err();

    assert_eq!(
        obs.failures.lock().unwrap().clone(),
        vec![ExportSeverity::Critical]
    );
    assert_eq!(
        obs.alerts.lock().unwrap().clone(),
        vec![ExportSeverity::Critical]
    );
}

#[test]
fn observer_receives_failure_without_alert_for_non_critical_error() {
    let dir = tempfile::tempdir().unwrap();
    let obs = Arc::new(RecordingObserver::default());
    let opts = ExportOptions {
        observer: Some(obs.clone()),
        alert_at_or_above: ExportSeverity::Critical,
        ..Default::default()
    };

    // Non-string field -> Error severity (not Critical) -> should not alert
    let _ = save_as_csv_with_options(&typed_rows(), dir.path().join("x.csv"), &opts).unwrap_err();

    assert_eq!(
        obs.failures.lock().unwrap().clone(),
        vec![ExportSeverity::Error]
    );
    assert!(obs.alerts.lock().unwrap().is_empty());
}

#[test]
fn composite_fans_out_to_file_observer() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("export.log");
    let recorder = Arc::new(RecordingObserver::default());
    let observers: Vec<Arc<dyn ExportObserver>> = vec![
        recorder.clone() as Arc<dyn ExportObserver>,
        Arc::new(FileObserver::new(&log_path)),
    ];
    let composite = CompositeObserver::new(observers);
    let opts = ExportOptions {
        observer: Some(Arc::new(composite)),
        alert_at_or_above: ExportSeverity::Error,
        ..Default::default()
    };

    save_as_csv_with_options(&string_rows(), dir.path().join("a.csv"), &opts).unwrap();
    let _ = save_as_csv_with_options(&typed_rows(), dir.path().join("b.csv"), &opts).unwrap_err();

    assert_eq!(recorder.successes.lock().unwrap().len(), 1);
    assert_eq!(
        recorder.alerts.lock().unwrap().clone(),
        vec![ExportSeverity::Error]
    );

    let log = fs::read_to_string(&log_path).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains(" ok path="));
    assert!(lines[0].ends_with("rows=1 columns=2"));
    assert!(lines[1].contains(" fail severity=Error kind=non_string_field"));
    assert!(lines[2].contains(" ALERT severity=Error kind=non_string_field"));
}
