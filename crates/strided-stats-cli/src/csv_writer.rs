//! CSV output module for writing computed series.
//!
//! Output has one row per input observation, so row `i` of the output lines
//! up with row `i` of the input:
//!
//! - `NaN` values are written as empty cells
//! - a label column from the input (e.g. `date`) is copied as the first column
//! - scalar results are written as a single row under their header

use crate::error::{CliError, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Output destination: either stdout or a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDest {
    /// Write to stdout.
    Stdout,
    /// Write to a file at the given path.
    File(String),
}

impl OutputDest {
    /// Destination for an optional `-o` argument.
    pub fn from_arg(path: Option<&str>) -> Self {
        path.map_or(Self::Stdout, |p| Self::File(p.to_string()))
    }

    /// Create a writer for this output destination.
    ///
    /// # Errors
    ///
    /// Returns `CliError::IoError` if the file cannot be created.
    pub fn writer(&self) -> Result<Box<dyn Write>> {
        match self {
            Self::Stdout => Ok(Box::new(io::stdout().lock())),
            Self::File(path) => {
                let file = File::create(path).map_err(|e| CliError::IoError {
                    source: e,
                    path: Some(path.clone()),
                })?;
                Ok(Box::new(BufWriter::new(file)))
            }
        }
    }
}

/// Formats a value for output; `NaN` becomes an empty cell.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        value.to_string()
    }
}

/// Writes named columns row by row to any writer.
///
/// Columns shorter than the longest one are padded with empty cells.
///
/// # Errors
///
/// Returns `CliError::IoError` if writing fails.
pub fn write_columns<W: Write>(
    writer: &mut W,
    columns: &[(&str, &[f64])],
    labels: Option<&[String]>,
) -> Result<()> {
    if columns.is_empty() {
        return Ok(());
    }

    let mut header: Vec<&str> = Vec::with_capacity(columns.len() + 1);
    if labels.is_some() {
        header.push("label");
    }
    header.extend(columns.iter().map(|(name, _)| *name));
    writeln!(writer, "{}", header.join(","))?;

    let rows = columns.iter().map(|(_, v)| v.len()).max().unwrap_or(0);
    for i in 0..rows {
        let mut cells: Vec<String> = Vec::with_capacity(header.len());
        if let Some(labels) = labels {
            cells.push(labels.get(i).cloned().unwrap_or_default());
        }
        for (_, values) in columns {
            cells.push(values.get(i).map_or_else(String::new, |v| format_value(*v)));
        }
        writeln!(writer, "{}", cells.join(","))?;
    }

    writer.flush()?;
    Ok(())
}

/// Write several output columns to a destination.
///
/// # Errors
///
/// Returns `CliError::IoError` if the destination cannot be opened or written.
pub fn write_multi_output(
    columns: &[(&str, &[f64])],
    labels: Option<&[String]>,
    dest: &OutputDest,
) -> Result<()> {
    let mut writer = dest.writer()?;
    write_columns(&mut writer, columns, labels)
}

/// Write a single output column to a destination.
///
/// # Errors
///
/// Returns `CliError::IoError` if the destination cannot be opened or written.
pub fn write_single_output(
    output: &[f64],
    header: &str,
    labels: Option<&[String]>,
    dest: &OutputDest,
) -> Result<()> {
    write_multi_output(&[(header, output)], labels, dest)
}

/// Write a single scalar result under `header`.
///
/// # Errors
///
/// Returns `CliError::IoError` if the destination cannot be opened or written.
pub fn write_scalar(value: f64, header: &str, dest: &OutputDest) -> Result<()> {
    write_single_output(&[value], header, None, dest)
}
