//! CSV → `Dataset` loader
//!
//! Reads a header row plus data rows and infers one type per column:
//! a column is numeric when every non-missing cell parses as `f64`, otherwise
//! categorical. Missing cells are empty or whitespace-only, or one of
//! `nan`, `null`, `na`, `n/a`, `none`, `-` (case-insensitive).
//!
//! Quoted fields may contain commas and doubled quotes (`""`). Quoted
//! fields spanning several lines are not supported.
//!
//! # Usage
//!
//! ```ignore
//! use drift_monitor::acquisition::load_csv;
//!
//! let reference = load_csv("data/reference.csv")?;
//! let current = load_csv("data/current.csv")?;
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::types::{Column, Dataset, DatasetError};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}: file is empty or has no header row")]
    MissingHeader(String),

    #[error("{name}: line {line} has {actual} fields, header has {expected}")]
    RowWidth {
        name: String,
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

// ============================================================================
// Field Parsing
// ============================================================================

/// Split a CSV line into fields, honouring double-quoted fields.
fn csv_split(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    // Escaped quote ("")
                    if chars.peek() == Some(&'"') {
                        current.push('"');
                        chars.next();
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}

fn is_missing(cell: &str) -> bool {
    let s = cell.trim();
    s.is_empty()
        || s == "-"
        || ["nan", "null", "na", "n/a", "none"]
            .iter()
            .any(|token| s.eq_ignore_ascii_case(token))
}

/// Infer the column type from its raw cells.
fn build_column(name: String, cells: Vec<String>) -> Column {
    let numeric: Option<Vec<Option<f64>>> = cells
        .iter()
        .map(|cell| {
            if is_missing(cell) {
                Some(None)
            } else {
                cell.trim().parse::<f64>().ok().map(Some)
            }
        })
        .collect();

    match numeric {
        Some(values) => Column::numeric(name, values),
        None => Column::categorical(
            name,
            cells
                .into_iter()
                .map(|cell| (!is_missing(&cell)).then(|| cell.trim().to_string()))
                .collect(),
        ),
    }
}

// ============================================================================
// Entry Points
// ============================================================================

/// Parse CSV text into a dataset called `name`.
pub fn parse_csv_str(name: &str, contents: &str) -> Result<Dataset, LoadError> {
    let mut lines = contents.lines().enumerate();

    let header = loop {
        match lines.next() {
            Some((_, line)) if line.trim().is_empty() => continue,
            Some((_, line)) => break line.trim_start_matches('\u{feff}'),
            None => return Err(LoadError::MissingHeader(name.to_string())),
        }
    };
    let names: Vec<String> = csv_split(header).into_iter().map(|h| h.trim().to_string()).collect();
    let width = names.len();

    let mut cells: Vec<Vec<String>> = vec![Vec::new(); width];
    for (idx, line) in lines {
        // A blank line is a missing value in a single-column file, noise otherwise
        if line.trim().is_empty() && width > 1 {
            continue;
        }
        let fields = csv_split(line);
        if fields.len() != width {
            return Err(LoadError::RowWidth {
                name: name.to_string(),
                line: idx + 1,
                expected: width,
                actual: fields.len(),
            });
        }
        for (col, field) in cells.iter_mut().zip(fields) {
            col.push(field);
        }
    }

    let columns: Vec<Column> = names
        .into_iter()
        .zip(cells)
        .map(|(n, c)| build_column(n, c))
        .collect();

    let dataset = Dataset::new(name, columns)?;
    debug!(
        dataset = name,
        rows = dataset.row_count(),
        columns = dataset.column_count(),
        numeric = dataset.columns().iter().filter(|c| c.values.is_numeric()).count(),
        "Parsed CSV"
    );
    Ok(dataset)
}

/// Read and parse a CSV file. The dataset is named after the file.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Dataset, LoadError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    parse_csv_str(&name, &contents)
}
