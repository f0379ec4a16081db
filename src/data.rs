//! Loading numeric tables from plain-text files.
//!
//! One sample per line, fields separated by whitespace or commas. Blank
//! lines and `#` comments are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use poincare_section::{SectionError, Trajectory};
use thiserror::Error;

/// Errors while reading a numeric table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read data: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: cannot parse {token:?} as a number")]
    Parse { line: usize, token: String },

    #[error("line {line}: expected {expected} columns, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("need at least {required} columns, found {found}")]
    TooFewColumns { required: usize, found: usize },

    #[error("no data rows")]
    Empty,

    #[error(transparent)]
    Invalid(#[from] SectionError),
}

/// Column-major numeric table.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<Vec<f64>>,
}

impl Table {
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn num_rows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// Column `index`, or `TooFewColumns` if absent.
    pub fn column(&self, index: usize) -> Result<&[f64], LoadError> {
        self.columns
            .get(index)
            .map(Vec::as_slice)
            .ok_or(LoadError::TooFewColumns {
                required: index + 1,
                found: self.columns.len(),
            })
    }

    /// The first three columns as a trajectory. Extra columns are ignored.
    pub fn trajectory(&self) -> Result<Trajectory<'_>, LoadError> {
        if self.columns.len() < 3 {
            return Err(LoadError::TooFewColumns {
                required: 3,
                found: self.columns.len(),
            });
        }
        Ok(Trajectory::new(
            &self.columns[0],
            &self.columns[1],
            &self.columns[2],
        )?)
    }
}

/// Load a table from a file.
pub fn load_table(path: &Path) -> Result<Table, LoadError> {
    let file = File::open(path)?;
    let table = parse_table(BufReader::new(file))?;
    log::debug!(
        "loaded {}: {} rows x {} columns",
        path.display(),
        table.num_rows(),
        table.num_columns()
    );
    Ok(table)
}

/// Parse a table from any buffered reader.
pub fn parse_table<R: BufRead>(reader: R) -> Result<Table, LoadError> {
    let mut columns: Vec<Vec<f64>> = Vec::new();
    let mut row: Vec<f64> = Vec::new();

    for (line_idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = line_idx + 1;
        let content = line.split('#').next().unwrap_or("");

        row.clear();
        for token in content
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
        {
            let value = token.parse::<f64>().map_err(|_| LoadError::Parse {
                line: line_no,
                token: token.to_string(),
            })?;
            row.push(value);
        }

        if row.is_empty() {
            continue;
        }
        if columns.is_empty() {
            // Width is fixed by the first data row.
            columns.resize_with(row.len(), Vec::new);
        } else if row.len() != columns.len() {
            return Err(LoadError::RaggedRow {
                line: line_no,
                expected: columns.len(),
                found: row.len(),
            });
        }

        for (column, &value) in columns.iter_mut().zip(&row) {
            column.push(value);
        }
    }

    if columns.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(Table { columns })
}
