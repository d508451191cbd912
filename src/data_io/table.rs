//! Time-indexed table of named scalar fields, the input to the forcing writer.

use chrono::NaiveDateTime;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Timestamps must be strictly increasing: record {index} ({time}) is not after {previous}")]
    NonMonotonicTime {
        index: usize,
        previous: NaiveDateTime,
        time: NaiveDateTime,
    },

    #[error("Column not found: {0}")]
    MissingColumn(String),

    #[error("Column {column} has {found} values but the table has {expected} records")]
    IncompleteColumn {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("Column {column} has {len} values but only {rows} timestamps were given")]
    ColumnTooLong {
        column: String,
        rows: usize,
        len: usize,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One timestamped row of the table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesRecord {
    pub time: NaiveDateTime,
    #[serde(flatten)]
    pub fields: BTreeMap<String, f64>,
}

impl TimeSeriesRecord {
    pub fn new(time: NaiveDateTime) -> Self {
        Self {
            time,
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field insertion
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.fields.get(name).copied()
    }
}

/// Records ordered by strictly increasing timestamp. Gaps between
/// timestamps are kept as they are.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeriesTable {
    records: Vec<TimeSeriesRecord>,
}

impl TimeSeriesTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record; its timestamp must be later than the last one
    pub fn push(&mut self, record: TimeSeriesRecord) -> Result<(), TableError> {
        if let Some(last) = self.records.last() {
            if record.time <= last.time {
                return Err(TableError::NonMonotonicTime {
                    index: self.records.len(),
                    previous: last.time,
                    time: record.time,
                });
            }
        }
        self.records.push(record);
        Ok(())
    }

    pub fn from_records(
        records: impl IntoIterator<Item = TimeSeriesRecord>,
    ) -> Result<Self, TableError> {
        let mut table = Self::new();
        for record in records {
            table.push(record)?;
        }
        Ok(table)
    }

    /// Build a table from a timestamp index and value columns.
    ///
    /// A column shorter than the index leaves the trailing records without
    /// that field; [`TimeSeriesTable::column`] reports it as incomplete.
    pub fn from_columns<K>(
        times: Vec<NaiveDateTime>,
        columns: impl IntoIterator<Item = (K, Vec<f64>)>,
    ) -> Result<Self, TableError>
    where
        K: Into<String>,
    {
        let mut records: Vec<TimeSeriesRecord> =
            times.into_iter().map(TimeSeriesRecord::new).collect();

        for (name, values) in columns {
            let name = name.into();
            if values.len() > records.len() {
                return Err(TableError::ColumnTooLong {
                    column: name,
                    rows: records.len(),
                    len: values.len(),
                });
            }
            for (record, value) in records.iter_mut().zip(values) {
                record.fields.insert(name.clone(), value);
            }
        }

        Self::from_records(records)
    }

    /// Read a JSON array of records, e.g.
    /// `[{"time": "2012-01-01T00:00:00", "Tair": 281.3, ...}, ...]`
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, TableError> {
        let records: Vec<TimeSeriesRecord> = serde_json::from_reader(reader)?;
        Self::from_records(records)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[TimeSeriesRecord] {
        &self.records
    }

    pub fn timestamps(&self) -> Vec<NaiveDateTime> {
        self.records.iter().map(|r| r.time).collect()
    }

    pub fn first_time(&self) -> Option<NaiveDateTime> {
        self.records.first().map(|r| r.time)
    }

    /// Values of one field across all records. Fails unless every record
    /// carries the field.
    pub fn column(&self, name: &str) -> Result<Array1<f64>, TableError> {
        let values: Vec<f64> = self.records.iter().filter_map(|r| r.get(name)).collect();

        if values.is_empty() && !self.records.is_empty() {
            return Err(TableError::MissingColumn(name.to_string()));
        }
        if values.len() != self.records.len() {
            return Err(TableError::IncompleteColumn {
                column: name.to_string(),
                expected: self.records.len(),
                found: values.len(),
            });
        }

        Ok(Array1::from(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2012, 1, 1)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_push_rejects_repeated_timestamp() {
        let mut table = TimeSeriesTable::new();
        table.push(TimeSeriesRecord::new(at(0, 0))).unwrap();
        table.push(TimeSeriesRecord::new(at(0, 30))).unwrap();

        let err = table.push(TimeSeriesRecord::new(at(0, 30))).unwrap_err();
        assert!(matches!(err, TableError::NonMonotonicTime { index: 2, .. }));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_from_columns_short_column() {
        let table = TimeSeriesTable::from_columns(
            vec![at(0, 0), at(0, 30), at(1, 30)],
            [("Tair", vec![280.0, 281.0]), ("Wind", vec![1.0, 2.0, 3.0])],
        )
        .unwrap();

        assert_eq!(table.column("Wind").unwrap().to_vec(), vec![1.0, 2.0, 3.0]);
        match table.column("Tair") {
            Err(TableError::IncompleteColumn {
                expected, found, ..
            }) => {
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(
            table.column("Psurf"),
            Err(TableError::MissingColumn(_))
        ));
    }

    #[test]
    fn test_from_columns_long_column() {
        let result = TimeSeriesTable::from_columns(vec![at(0, 0)], [("Tair", vec![280.0, 281.0])]);
        assert!(matches!(result, Err(TableError::ColumnTooLong { .. })));
    }

    #[test]
    fn test_from_json_reader() {
        let json = r#"[
            {"time": "2012-01-01T00:00:00", "Tair": 280.5, "Wind": 2.0},
            {"time": "2012-01-01T01:30:00", "Tair": 281.0, "Wind": 2.5}
        ]"#;
        let table = TimeSeriesTable::from_json_reader(json.as_bytes()).unwrap();

        assert_eq!(table.timestamps(), vec![at(0, 0), at(1, 30)]);
        assert_eq!(table.column("Tair").unwrap().to_vec(), vec![280.5, 281.0]);
    }

    #[test]
    fn test_from_json_reader_unordered() {
        let json = r#"[
            {"time": "2012-01-01T01:00:00", "Tair": 280.5},
            {"time": "2012-01-01T00:00:00", "Tair": 281.0}
        ]"#;
        let result = TimeSeriesTable::from_json_reader(json.as_bytes());
        assert!(matches!(result, Err(TableError::NonMonotonicTime { .. })));
    }
}
