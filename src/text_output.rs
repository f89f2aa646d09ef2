//! Plain-text report for the terminal

use crate::aggregator::AnalysisReport;
use std::fmt;

/// Text rendering of a report with a fixed number of decimal places
pub struct TextReport<'a> {
    report: &'a AnalysisReport,
    precision: usize,
}

impl<'a> TextReport<'a> {
    pub fn new(report: &'a AnalysisReport, precision: usize) -> Self {
        Self { report, precision }
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.precision;

        writeln!(f, "=== Descriptive Statistics ===\n")?;
        for (name, s) in self.report.columns() {
            writeln!(f, "{} ({} values):", name, s.count)?;
            writeln!(f, "  Mean:         {:.p$}", s.mean)?;
            writeln!(f, "  Std Dev:      {:.p$}", s.standard_deviation)?;
            writeln!(f, "  Min:          {:.p$}", s.min)?;
            writeln!(f, "  Q1:           {:.p$}", s.q1)?;
            writeln!(f, "  Median:       {:.p$}", s.median)?;
            writeln!(f, "  Q3:           {:.p$}", s.q3)?;
            writeln!(f, "  Max:          {:.p$}", s.max)?;
            writeln!(f)?;
        }

        if let Some(pairs) = self.report.pairs() {
            writeln!(f, "=== Relationship Statistics ===\n")?;
            if pairs.is_empty() {
                writeln!(f, "No column pairs to compare.\n")?;
            }
            for (pair, s) in pairs {
                writeln!(f, "{}:", pair)?;
                writeln!(f, "  Covariance:   {:.p$}", s.covariance)?;
                writeln!(f, "  Correlation:  {:.p$}", s.correlation)?;
                writeln!(f)?;
            }
        }

        Ok(())
    }
}

/// Render a report as human-readable text with `precision` decimal places
pub fn render(report: &AnalysisReport, precision: usize) -> String {
    TextReport::new(report, precision).to_string()
}
