//! Tabstat - descriptive and relationship statistics for numeric tables
//!
//! This library loads delimited numeric data into a [`table::Table`], computes
//! per-column summaries (mean, sample standard deviation, quartiles) and
//! per-pair covariance/correlation, and renders the resulting
//! [`aggregator::AnalysisReport`] as text, JSON or CSV.
//!
//! ```
//! use tabstat::aggregator::analyze;
//! use tabstat::table::Table;
//!
//! let table = Table::from_columns([
//!     ("X", vec![1.0, 2.0, 3.0]),
//!     ("Y", vec![2.0, 4.0, 6.0]),
//! ])
//! .unwrap();
//!
//! let report = analyze(&table, None).unwrap();
//! assert_eq!(report.column("X").unwrap().mean, 2.0);
//! assert!((report.pair("X", "Y").unwrap().correlation - 1.0).abs() < 1e-12);
//! ```

pub mod aggregator;
pub mod cli;
pub mod column_stats;
pub mod config;
pub mod csv_output;
pub mod error;
pub mod json_output;
pub mod pairwise;
pub mod table;
pub mod text_output;

pub use error::{Result, StatsError};
