//! JSON output format for analysis reports

use crate::aggregator::AnalysisReport;
use crate::column_stats::ColumnSummary;
use serde::{Deserialize, Serialize};

/// Statistics for one column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonColumn {
    /// Column name from the table header
    pub name: String,
    #[serde(flatten)]
    pub summary: ColumnSummary,
}

/// Relationship statistics for one column pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonPair {
    pub column_x: String,
    pub column_y: String,
    pub covariance: f64,
    pub correlation: f64,
}

/// Complete JSON document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    /// Output format version
    pub version: String,
    /// Column statistics in table order
    pub columns: Vec<JsonColumn>,
    /// Pair statistics (omitted when not requested)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pairs: Option<Vec<JsonPair>>,
}

impl From<&AnalysisReport> for JsonReport {
    fn from(report: &AnalysisReport) -> Self {
        let columns = report
            .columns()
            .iter()
            .map(|(name, summary)| JsonColumn {
                name: name.clone(),
                summary: summary.clone(),
            })
            .collect();

        let pairs = report.pairs().map(|pairs| {
            pairs
                .iter()
                .map(|(pair, s)| JsonPair {
                    column_x: pair.first().to_string(),
                    column_y: pair.second().to_string(),
                    covariance: s.covariance,
                    correlation: s.correlation,
                })
                .collect()
        });

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            columns,
            pairs,
        }
    }
}

impl JsonReport {
    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Render a report as pretty-printed JSON
pub fn render(report: &AnalysisReport) -> anyhow::Result<String> {
    JsonReport::from(report).to_json()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::{analyze, summarize_table};
    use crate::table::Table;

    fn table() -> Table {
        Table::from_columns([
            ("A", vec![1.0, 2.0, 3.0, 4.0, 5.0]),
            ("B", vec![5.0, 4.0, 3.0, 2.0, 1.0]),
        ])
        .unwrap()
    }

    #[test]
    fn test_json_columns_flattened() {
        let json = render(&summarize_table(&table()).unwrap()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let first = &value["columns"][0];
        assert_eq!(first["name"], "A");
        assert_eq!(first["count"], 5);
        assert_eq!(first["mean"], 3.0);
        assert_eq!(first["q1"], 2.0);
        assert_eq!(first["q3"], 4.0);
        assert_eq!(value["columns"][1]["name"], "B");
    }

    #[test]
    fn test_json_pairs_omitted_when_absent() {
        let json = render(&summarize_table(&table()).unwrap()).unwrap();
        assert!(!json.contains("\"pairs\""));
    }

    #[test]
    fn test_json_pairs_present() {
        let json = render(&analyze(&table(), None).unwrap()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let pair = &value["pairs"][0];
        assert_eq!(pair["column_x"], "A");
        assert_eq!(pair["column_y"], "B");
        let r = pair["correlation"].as_f64().unwrap();
        assert!((r + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_json_round_trip_struct() {
        let report = JsonReport::from(&analyze(&table(), None).unwrap());
        let parsed: JsonReport = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(parsed.columns.len(), 2);
        assert_eq!(parsed.pairs.unwrap().len(), 1);
        assert_eq!(parsed.version, env!("CARGO_PKG_VERSION"));
    }
}
