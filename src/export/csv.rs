//! CSV export implementation.

use std::fs::File;
use std::io;
use std::path::Path;

use serde::Serialize;

use crate::error::{ExportError, ExportResult};
use crate::types::Value;

use super::observability::ExportStats;
use super::ExportOptions;

/// A header row plus string rows, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    /// Column names, in field declaration order.
    pub headers: Vec<String>,
    /// One entry per record, values in header order.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}

/// Turn a homogeneous sequence of records into a [`Table`].
///
/// Rules:
///
/// - Each record must serialize to a struct or map; field names become the header, in
///   declaration order, taken from the first record.
/// - Every later record must have the same set of field names. Their order may differ (maps such
///   as `HashMap` iterate in arbitrary order); cells are always emitted in header order.
/// - Every field value must already be a string. Numbers, booleans, nulls, and nested values are
///   rejected rather than stringified.
///
/// An empty sequence produces an empty table with no header: field names are read from record
/// instances, and a `Serialize` bound cannot describe a type without one.
pub fn tabulate<T: Serialize>(records: &[T]) -> ExportResult<Table> {
    let mut table = Table::default();

    for (row, record) in records.iter().enumerate() {
        let mut fields = match serde_json::to_value(record)? {
            serde_json::Value::Object(map) => map,
            other => {
                return Err(ExportError::SchemaMismatch {
                    message: format!(
                        "record at row {row} must serialize to a struct or map, got {}",
                        Value::from(other).category()
                    ),
                });
            }
        };

        if row == 0 {
            table.headers = fields.keys().cloned().collect();
        }

        let mut out = Vec::with_capacity(table.headers.len());
        for column in &table.headers {
            match fields.remove(column) {
                Some(serde_json::Value::String(s)) => out.push(s),
                Some(other) => {
                    return Err(ExportError::NonStringField {
                        row,
                        column: column.clone(),
                        found: Value::from(other).category(),
                    });
                }
                None => {
                    return Err(ExportError::SchemaMismatch {
                        message: format!(
                            "record at row {row} is missing field '{column}', expected {:?}",
                            table.headers
                        ),
                    });
                }
            }
        }
        if !fields.is_empty() {
            return Err(ExportError::SchemaMismatch {
                message: format!(
                    "record at row {row} has unexpected fields {:?}, expected {:?}",
                    fields.keys().collect::<Vec<_>>(),
                    table.headers
                ),
            });
        }
        table.rows.push(out);
    }

    Ok(table)
}

/// Write an already-built [`Table`] to `writer` as CSV.
///
/// The writer is flushed before returning so that write failures surface here rather than on drop.
pub fn write_table<W: io::Write>(
    table: &Table,
    writer: W,
    options: &ExportOptions,
) -> ExportResult<ExportStats> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(options.delimiter)
        .quote_style(options.quote_style)
        .terminator(options.terminator)
        .from_writer(writer);

    if !table.headers.is_empty() {
        wtr.write_record(&table.headers)?;
        for row in &table.rows {
            wtr.write_record(row)?;
        }
    }
    wtr.flush()?;

    Ok(ExportStats {
        rows: table.row_count(),
        columns: table.column_count(),
    })
}

/// Validate `records` and write them as CSV to `writer`.
pub fn write_csv<T: Serialize, W: io::Write>(
    records: &[T],
    writer: W,
    options: &ExportOptions,
) -> ExportResult<ExportStats> {
    let table = tabulate(records)?;
    write_table(&table, writer, options)
}

/// Validate `records`, then create (or truncate) `path` and write them as CSV.
///
/// Records are validated before the file is touched, so a rejected input leaves any existing file
/// at `path` intact. If the file cannot be created nothing is written.
pub fn write_csv_to_path<T: Serialize>(
    records: &[T],
    path: impl AsRef<Path>,
    options: &ExportOptions,
) -> ExportResult<ExportStats> {
    let table = tabulate(records)?;
    let file = File::create(path)?;
    write_table(&table, file, options)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde::Serialize;

    use super::{tabulate, write_csv, Table};
    use crate::error::ExportError;
    use crate::export::ExportOptions;
    use crate::types::{Category, Record, Value};

    #[derive(Serialize)]
    struct Person {
        #[serde(rename = "Name")]
        name: String,
        #[serde(rename = "Age")]
        age: String,
    }

    #[derive(Serialize)]
    struct Typed {
        name: String,
        age: u32,
    }

    fn person(name: &str, age: &str) -> Person {
        Person {
            name: name.to_string(),
            age: age.to_string(),
        }
    }

    fn render(records: &[Person], options: &ExportOptions) -> String {
        let mut buf = Vec::new();
        write_csv(records, &mut buf, options).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn tabulate_uses_declaration_order() {
        let table = tabulate(&[person("Alice", "25"), person("Bob", "30")]).unwrap();
        assert_eq!(
            table,
            Table {
                headers: vec!["Name".to_string(), "Age".to_string()],
                rows: vec![
                    vec!["Alice".to_string(), "25".to_string()],
                    vec!["Bob".to_string(), "30".to_string()],
                ],
            }
        );
    }

    #[test]
    fn tabulate_empty_sequence_is_empty_table() {
        let table = tabulate::<Person>(&[]).unwrap();
        assert_eq!(table, Table::default());
    }

    #[test]
    fn tabulate_rejects_non_string_fields() {
        let err = tabulate(&[Typed {
            name: "Alice".to_string(),
            age: 25,
        }])
        .unwrap_err();

        match err {
            ExportError::NonStringField { row, column, found } => {
                assert_eq!(row, 0);
                assert_eq!(column, "age");
                assert_eq!(found, Category::Int);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn tabulate_rejects_heterogeneous_records() {
        let records = vec![
            Value::from(Record::new().with("Name", "Alice").with("Age", "25")),
            Value::from(Record::new().with("Name", "Bob")),
        ];
        let msg = tabulate(&records).unwrap_err().to_string();
        assert!(msg.contains("schema mismatch"));
        assert!(msg.contains("row 1"));
    }

    #[test]
    fn tabulate_rejects_extra_fields() {
        let records = vec![
            Record::new().with("Name", "Alice"),
            Record::new().with("Name", "Bob").with("Age", "30"),
        ];
        let msg = tabulate(&records).unwrap_err().to_string();
        assert!(msg.contains("row 1 has unexpected fields [\"Age\"]"));
    }

    #[test]
    fn write_csv_reorders_fields_to_header_order() {
        let records = vec![
            Record::new().with("Name", "Alice").with("Age", "25"),
            Record::new().with("Age", "30").with("Name", "Bob"),
        ];
        let mut buf = Vec::new();
        let stats = write_csv(&records, &mut buf, &ExportOptions::default()).unwrap();

        assert_eq!(stats.rows, 2);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Name,Age\nAlice,25\nBob,30\n"
        );
    }

    #[test]
    fn write_csv_accepts_hash_map_records() {
        let records: Vec<HashMap<String, String>> = (0..4)
            .map(|i| {
                ["a", "b", "c", "d", "e"]
                    .iter()
                    .map(|k| (k.to_string(), format!("{k}{i}")))
                    .collect()
            })
            .collect();

        let mut buf = Vec::new();
        write_csv(&records, &mut buf, &ExportOptions::default()).unwrap();
        let out = String::from_utf8(buf).unwrap();
        let mut lines = out.lines();

        let headers: Vec<&str> = lines.next().unwrap().split(',').collect();
        let mut sorted = headers.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, ["a", "b", "c", "d", "e"]);

        let rows: Vec<&str> = lines.collect();
        assert_eq!(rows.len(), 4);
        for (i, line) in rows.iter().enumerate() {
            for (header, cell) in headers.iter().zip(line.split(',')) {
                assert_eq!(cell, format!("{header}{i}"));
            }
        }
    }

    #[test]
    fn tabulate_rejects_non_record_elements() {
        let msg = tabulate(&["just a string"]).unwrap_err().to_string();
        assert!(msg.contains("must serialize to a struct or map, got utf8"));
    }

    #[test]
    fn write_csv_emits_header_then_rows() {
        let out = render(&[person("Alice", "25")], &ExportOptions::default());
        assert_eq!(out, "Name,Age\nAlice,25\n");
    }

    #[test]
    fn write_csv_quotes_embedded_delimiters() {
        let out = render(
            &[person("Smith, \"Al\"", "4\n2")],
            &ExportOptions::default(),
        );
        assert_eq!(out, "Name,Age\n\"Smith, \"\"Al\"\"\",\"4\n2\"\n");
    }

    #[test]
    fn write_csv_honors_delimiter() {
        let options = ExportOptions {
            delimiter: b';',
            ..Default::default()
        };
        let out = render(&[person("Alice", "25")], &options);
        assert_eq!(out, "Name;Age\nAlice;25\n");
    }
}
