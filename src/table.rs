//! Named, row-aligned numeric columns and the delimited-text loader

use crate::error::{Result, StatsError};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, trace};

/// Ordered collection of equal-length named columns
///
/// Column order is insertion order; names are unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<(String, Vec<f64>)>,
    index: HashMap<String, usize>,
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(name, values)` pairs, in order
    ///
    /// # Example
    ///
    /// ```
    /// use tabstat::table::Table;
    ///
    /// let table = Table::from_columns([
    ///     ("A", vec![1.0, 2.0, 3.0]),
    ///     ("B", vec![2.0, 4.0, 6.0]),
    /// ])
    /// .unwrap();
    /// assert_eq!(table.names().collect::<Vec<_>>(), ["A", "B"]);
    /// assert_eq!(table.height(), 3);
    /// ```
    pub fn from_columns<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<f64>)>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (name, values) in columns {
            table.push_column(name, values)?;
        }
        Ok(table)
    }

    /// Append a column
    ///
    /// Fails with `DuplicateColumn` if the name is taken and with
    /// `LengthMismatch` if the length differs from the existing columns.
    pub fn push_column(&mut self, name: impl Into<String>, values: Vec<f64>) -> Result<()> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(StatsError::DuplicateColumn(name));
        }
        if let Some((_, first)) = self.columns.first() {
            if first.len() != values.len() {
                return Err(StatsError::LengthMismatch {
                    expected: first.len(),
                    actual: values.len(),
                });
            }
        }

        self.index.insert(name.clone(), self.columns.len());
        self.columns.push((name, values));
        Ok(())
    }

    /// Values of a column, if present
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.index
            .get(name)
            .map(|&i| self.columns[i].1.as_slice())
    }

    /// Column names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// `(name, values)` in insertion order
    pub fn columns(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.columns
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows (0 for a table without columns)
    pub fn height(&self) -> usize {
        self.columns.first().map_or(0, |(_, values)| values.len())
    }

    /// True when the table has no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Reads delimited text into a [`Table`]
///
/// Every cell must parse as a finite `f64`; anything else is rejected.
#[derive(Debug, Clone)]
pub struct TableLoader {
    /// Field delimiter (default: comma)
    delimiter: u8,
    /// Whether the first row names the columns
    has_header: bool,
}

impl Default for TableLoader {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_header: true,
        }
    }
}

impl TableLoader {
    /// Comma-separated loader with a header row
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loader with a custom delimiter
    #[must_use]
    pub const fn with_delimiter(delimiter: u8) -> Self {
        Self {
            delimiter,
            has_header: true,
        }
    }

    /// Tab-separated loader
    #[must_use]
    pub const fn tsv() -> Self {
        Self::with_delimiter(b'\t')
    }

    /// Set whether the first row contains headers
    #[must_use]
    pub const fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Load a table from a file
    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<Table> {
        let path = path.as_ref();
        debug!("Loading table from {}", path.display());
        self.load_reader(File::open(path)?)
    }

    /// Load a table from any reader
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<Table> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(self.has_header)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut names: Vec<String> = if self.has_header {
            reader.headers()?.iter().map(String::from).collect()
        } else {
            Vec::new()
        };
        let mut values: Vec<Vec<f64>> = vec![Vec::new(); names.len()];

        for (i, record) in reader.records().enumerate() {
            let record = record?;
            let row = i + 1;

            if names.is_empty() && !self.has_header {
                names = (1..=record.len()).map(|c| format!("column_{}", c)).collect();
                values = vec![Vec::new(); names.len()];
            }

            for (column, field) in record.iter().enumerate() {
                let value = parse_cell(field).ok_or_else(|| StatsError::NonNumericValue {
                    column: names[column].clone(),
                    row,
                    value: field.to_string(),
                })?;
                values[column].push(value);
            }
            trace!("row {}: {} fields", row, record.len());
        }

        let table = Table::from_columns(names.into_iter().zip(values))?;
        debug!(
            "Loaded table with {} columns and {} rows",
            table.width(),
            table.height()
        );
        Ok(table)
    }
}

fn parse_cell(field: &str) -> Option<f64> {
    field.parse::<f64>().ok().filter(|v| v.is_finite())
}
