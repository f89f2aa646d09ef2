//! Error kinds raised by the statistics engine and the table loader

use thiserror::Error;

/// Errors for statistics, table construction and loading
#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Insufficient data: need at least {required} values, got {actual}")]
    EmptyInput { required: usize, actual: usize },

    #[error("Length mismatch: expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Division by zero: standard deviation is zero (constant variable)")]
    DivisionByZero,

    #[error("Overflow: {0} is outside the floating-point range")]
    Overflow(&'static str),

    #[error("Table has no columns")]
    EmptyTable,

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    #[error("Invalid column pair: '{0}' paired with itself")]
    InvalidPair(String),

    #[error("Non-numeric value {value:?} in column '{column}' at row {row}")]
    NonNumericValue {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Failed to summarize '{column}'")]
    Column {
        column: String,
        #[source]
        source: Box<StatsError>,
    },

    #[error("Delimited text error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StatsError {
    /// Annotate an error with the column (or pair label) it came from
    pub fn in_column(self, column: impl Into<String>) -> Self {
        StatsError::Column {
            column: column.into(),
            source: Box::new(self),
        }
    }

    /// Innermost error, skipping `Column` annotations
    pub fn root(&self) -> &StatsError {
        match self {
            StatsError::Column { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
