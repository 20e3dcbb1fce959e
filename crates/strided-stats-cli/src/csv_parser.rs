//! CSV parsing module for reading numeric series from CSV files.
//!
//! Every file must start with a header row. Columns are looked up by header
//! name (case-insensitive, surrounding whitespace ignored). Empty cells parse
//! as `NaN`, which the kernels and accumulators then treat according to their
//! usual `NaN` policy.
//!
//! # Label Columns
//!
//! Columns named `date`, `time`, `datetime`, `timestamp`, `dt`, `label` or
//! `id` are kept verbatim as row labels and copied to the output so rows
//! stay aligned. Every other column must be numeric.

use crate::error::{CliError, Result};
use csv::ReaderBuilder;
use log::debug;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Parsed CSV data with column mapping.
#[derive(Debug, Clone)]
pub struct ParsedCsv {
    /// Column headers from the CSV, as written.
    pub headers: Vec<String>,
    /// Mapping of normalized column name to column index.
    pub column_map: HashMap<String, usize>,
    /// Row labels (if a label column was found).
    pub labels: Option<Vec<String>>,
    /// All numeric data columns by index.
    pub columns: HashMap<usize, Vec<f64>>,
    /// Number of rows parsed.
    pub row_count: usize,
}

impl ParsedCsv {
    /// Get a column by name.
    pub fn get_column(&self, name: &str) -> Option<&[f64]> {
        self.column_map
            .get(&normalize_header(name))
            .and_then(|idx| self.columns.get(idx))
            .map(Vec::as_slice)
    }

    /// Get the leftmost numeric column.
    pub fn first_column(&self) -> Option<(&str, &[f64])> {
        let idx = self.columns.keys().min()?;
        Some((self.headers[*idx].trim(), self.columns[idx].as_slice()))
    }

    /// Get a column by name, or fail with the list of available columns.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidArgument` naming `argument` if the column
    /// does not exist.
    pub fn require_column(&self, name: &str, argument: &str) -> Result<&[f64]> {
        self.get_column(name)
            .ok_or_else(|| CliError::InvalidArgument {
                argument: argument.to_string(),
                reason: format!("no numeric column named '{name}'"),
                suggestion: Some(format!("Available columns: {}", self.numeric_headers().join(", "))),
            })
    }

    /// Resolves an optional column name, falling back to the first numeric column.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidArgument` if the named column does not exist,
    /// or `CliError::CsvParseError` if the file has no numeric column at all.
    pub fn column_or_first(&self, name: Option<&str>, argument: &str) -> Result<(String, &[f64])> {
        match name {
            Some(n) => Ok((normalize_header(n), self.require_column(n, argument)?)),
            None => self
                .first_column()
                .map(|(h, v)| (normalize_header(h), v))
                .ok_or_else(|| CliError::CsvParseError {
                    message: "no numeric column found".to_string(),
                    line: None,
                }),
        }
    }

    /// Headers of the numeric columns, in file order.
    pub fn numeric_headers(&self) -> Vec<&str> {
        let mut idx: Vec<usize> = self.columns.keys().copied().collect();
        idx.sort_unstable();
        idx.into_iter().map(|i| self.headers[i].trim()).collect()
    }
}

/// Normalize a column header name for matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

/// Check if a header represents a label column.
fn is_label_column(header: &str) -> bool {
    matches!(
        normalize_header(header).as_str(),
        "date" | "time" | "datetime" | "timestamp" | "dt" | "label" | "id"
    )
}

/// Parse a string value to f64, treating empty as NaN.
fn parse_value(value: &str, line: usize) -> Result<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Ok(f64::NAN)
    } else {
        trimmed.parse::<f64>().map_err(|_| CliError::CsvParseError {
            message: format!("cannot parse '{trimmed}' as number"),
            line: Some(line),
        })
    }
}

/// Parse a CSV file into a structured format.
///
/// # Errors
///
/// Returns `CliError::IoError` if the file cannot be read, or
/// `CliError::CsvParseError` if the CSV is malformed.
pub fn parse_csv<P: AsRef<Path>>(path: P) -> Result<ParsedCsv> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| CliError::IoError {
        source: e,
        path: Some(path.display().to_string()),
    })?;
    let parsed = parse_csv_from_reader(BufReader::new(file))?;
    debug!(
        "parsed {} rows with columns {:?} from {}",
        parsed.row_count,
        parsed.numeric_headers(),
        path.display()
    );
    Ok(parsed)
}

/// Parse CSV data from a reader.
///
/// # Errors
///
/// Returns `CliError::CsvParseError` if the header row is missing or a
/// numeric cell cannot be parsed.
pub fn parse_csv_from_reader<R: Read>(reader: R) -> Result<ParsedCsv> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(|e| CliError::CsvParseError {
            message: e.to_string(),
            line: Some(1),
        })?
        .iter()
        .map(String::from)
        .collect();

    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(CliError::CsvParseError {
            message: "CSV file has no headers".to_string(),
            line: Some(1),
        });
    }

    let mut column_map = HashMap::new();
    let mut label_idx: Option<usize> = None;
    for (idx, header) in headers.iter().enumerate() {
        if is_label_column(header) {
            label_idx.get_or_insert(idx);
        } else {
            column_map.insert(normalize_header(header), idx);
        }
    }

    let mut columns: HashMap<usize, Vec<f64>> =
        column_map.values().map(|&idx| (idx, Vec::new())).collect();
    let mut labels: Vec<String> = Vec::new();

    let mut row_count = 0;
    for (row_idx, result) in csv_reader.records().enumerate() {
        // +2 for the header row and 0-indexing
        let line = row_idx + 2;
        let record = result.map_err(|e| CliError::CsvParseError {
            message: e.to_string(),
            line: Some(line),
        })?;

        if let Some(idx) = label_idx {
            labels.push(record.get(idx).unwrap_or("").to_string());
        }
        for (&col_idx, values) in &mut columns {
            values.push(parse_value(record.get(col_idx).unwrap_or(""), line)?);
        }
        row_count += 1;
    }

    Ok(ParsedCsv {
        headers,
        column_map,
        labels: label_idx.map(|_| labels),
        columns,
        row_count,
    })
}
