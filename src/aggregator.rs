//! Applies column and pairwise statistics across a whole table
//!
//! The aggregator holds no state: every call borrows a [`Table`] and returns a
//! freshly built [`AnalysisReport`] (or pair list).

use crate::column_stats::{self, ColumnSummary};
use crate::error::{Result, StatsError};
use crate::pairwise::{self, PairSummary};
use crate::table::Table;
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};
use tracing::debug;

/// Unordered pair of distinct column names
///
/// `ColumnPair::new("a", "b") == ColumnPair::new("b", "a")`; the orientation
/// given at construction is kept for display.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnPair {
    first: String,
    second: String,
}

impl ColumnPair {
    /// Create a pair; a column cannot be paired with itself
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Result<Self> {
        let first = first.into();
        let second = second.into();
        if first == second {
            return Err(StatsError::InvalidPair(first));
        }
        Ok(Self { first, second })
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    fn key(&self) -> (&str, &str) {
        if self.first <= self.second {
            (&self.first, &self.second)
        } else {
            (&self.second, &self.first)
        }
    }
}

impl PartialEq for ColumnPair {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for ColumnPair {}

impl Hash for ColumnPair {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for ColumnPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ~ {}", self.first, self.second)
    }
}

/// Result of one analysis run
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    columns: Vec<(String, ColumnSummary)>,
    pairs: Option<Vec<(ColumnPair, PairSummary)>>,
}

impl AnalysisReport {
    /// Column summaries in table order
    pub fn columns(&self) -> &[(String, ColumnSummary)] {
        &self.columns
    }

    /// Summary of one column
    pub fn column(&self, name: &str) -> Option<&ColumnSummary> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, summary)| summary)
    }

    /// Pair summaries, if relationship statistics were requested
    pub fn pairs(&self) -> Option<&[(ColumnPair, PairSummary)]> {
        self.pairs.as_deref()
    }

    /// Summary of one pair, in either orientation
    pub fn pair(&self, a: &str, b: &str) -> Option<&PairSummary> {
        let wanted = ColumnPair::new(a, b).ok()?;
        self.pairs()?
            .iter()
            .find(|(pair, _)| *pair == wanted)
            .map(|(_, summary)| summary)
    }
}

/// Summarize every column of the table, in insertion order
///
/// # Example
///
/// ```
/// use tabstat::aggregator::summarize_table;
/// use tabstat::table::Table;
///
/// let table = Table::from_columns([("A", vec![1.0, 2.0, 3.0, 4.0, 5.0])]).unwrap();
/// let report = summarize_table(&table).unwrap();
/// assert_eq!(report.column("A").unwrap().mean, 3.0);
/// assert!(report.pairs().is_none());
/// ```
pub fn summarize_table(table: &Table) -> Result<AnalysisReport> {
    if table.is_empty() {
        return Err(StatsError::EmptyTable);
    }

    let columns = table
        .columns()
        .map(|(name, values)| {
            debug!("Summarizing column {} ({} values)", name, values.len());
            column_stats::summarize(values)
                .map(|summary| (name.to_string(), summary))
                .map_err(|e| e.in_column(name))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(AnalysisReport {
        columns,
        pairs: None,
    })
}

/// Every unordered pair of distinct columns, in table order
pub fn all_pairs(table: &Table) -> Vec<ColumnPair> {
    let names: Vec<&str> = table.names().collect();
    let mut pairs = Vec::with_capacity(names.len() * names.len().saturating_sub(1) / 2);
    for (i, first) in names.iter().enumerate() {
        for second in &names[i + 1..] {
            pairs.push(ColumnPair {
                first: first.to_string(),
                second: second.to_string(),
            });
        }
    }
    pairs
}

/// Covariance and correlation for the requested pairs
///
/// `None` means all pairs (O(k²) for k columns). A pair requested twice, in
/// either orientation, is computed once.
pub fn summarize_pairs(
    table: &Table,
    pairs: Option<&[ColumnPair]>,
) -> Result<Vec<(ColumnPair, PairSummary)>> {
    let requested = match pairs {
        Some(pairs) => pairs.to_vec(),
        None => all_pairs(table),
    };

    let mut results: Vec<(ColumnPair, PairSummary)> = Vec::with_capacity(requested.len());
    for pair in requested {
        if results.iter().any(|(done, _)| *done == pair) {
            continue;
        }

        let x = table
            .column(pair.first())
            .ok_or_else(|| StatsError::UnknownColumn(pair.first().to_string()))?;
        let y = table
            .column(pair.second())
            .ok_or_else(|| StatsError::UnknownColumn(pair.second().to_string()))?;

        debug!("Summarizing pair {}", pair);
        let summary = pairwise::summarize_pair(x, y).map_err(|e| e.in_column(pair.to_string()))?;
        results.push((pair, summary));
    }

    Ok(results)
}

/// Column summaries plus pair summaries in a single report
pub fn analyze(table: &Table, pairs: Option<&[ColumnPair]>) -> Result<AnalysisReport> {
    let mut report = summarize_table(table)?;
    report.pairs = Some(summarize_pairs(table, pairs)?);
    Ok(report)
}
