//! CSV output format for analysis reports
//!
//! Two tables separated by a blank line: one row per column summary, then one
//! row per column pair. Values are written at full precision.

use crate::aggregator::AnalysisReport;

const COLUMN_HEADER: &str = "column,count,mean,std_dev,min,q1,median,q3,max";
const PAIR_HEADER: &str = "column_x,column_y,covariance,correlation";

/// CSV output formatter
#[derive(Debug)]
pub struct CsvOutput<'a> {
    report: &'a AnalysisReport,
}

impl<'a> CsvOutput<'a> {
    /// Create a new CSV output formatter
    pub fn new(report: &'a AnalysisReport) -> Self {
        Self { report }
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        // Quote fields holding a comma, quote or line break; double inner quotes
        if field.contains(&[',', '"', '\n', '\r'][..]) {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    /// Column summary table
    pub fn columns_csv(&self) -> String {
        let mut output = String::new();
        output.push_str(COLUMN_HEADER);
        output.push('\n');

        for (name, s) in self.report.columns() {
            let fields = [
                Self::escape_field(name),
                s.count.to_string(),
                s.mean.to_string(),
                s.standard_deviation.to_string(),
                s.min.to_string(),
                s.q1.to_string(),
                s.median.to_string(),
                s.q3.to_string(),
                s.max.to_string(),
            ];
            output.push_str(&fields.join(","));
            output.push('\n');
        }

        output
    }

    /// Pair table, or `None` when relationship statistics were not requested
    pub fn pairs_csv(&self) -> Option<String> {
        let pairs = self.report.pairs()?;
        let mut output = String::new();
        output.push_str(PAIR_HEADER);
        output.push('\n');

        for (pair, s) in pairs {
            let fields = [
                Self::escape_field(pair.first()),
                Self::escape_field(pair.second()),
                s.covariance.to_string(),
                s.correlation.to_string(),
            ];
            output.push_str(&fields.join(","));
            output.push('\n');
        }

        Some(output)
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = self.columns_csv();
        if let Some(pairs) = self.pairs_csv() {
            output.push('\n');
            output.push_str(&pairs);
        }
        output
    }
}

/// Render a report as CSV
pub fn render(report: &AnalysisReport) -> String {
    CsvOutput::new(report).to_csv()
}
