//! CLI argument parsing for tabstat

use crate::config::AnalysisConfig;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for analysis reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "tabstat")]
#[command(version)]
#[command(about = "Descriptive and relationship statistics for delimited numeric tables", long_about = None)]
pub struct Cli {
    /// Delimited text file to analyse (prompted for when omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Load analysis settings from a TOML file
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormat>,

    /// Field delimiter (single ASCII character, e.g. ';' or '\t')
    #[arg(short = 'd', long = "delimiter", value_name = "CHAR", value_parser = parse_delimiter)]
    pub delimiter: Option<char>,

    /// Treat the first row as data; columns are named column_1..column_N
    #[arg(long = "no-header")]
    pub no_header: bool,

    /// Column pair for relationship statistics (repeatable, e.g. --pair A,B)
    #[arg(long = "pair", value_name = "A,B", value_parser = parse_pair)]
    pub pairs: Vec<[String; 2]>,

    /// Skip covariance/correlation
    #[arg(long = "no-pairs", conflicts_with = "pairs")]
    pub no_pairs: bool,

    /// Decimal places in text output
    #[arg(long = "precision", value_name = "N")]
    pub precision: Option<usize>,

    /// Enable debug tracing output on stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

impl Cli {
    /// Overlay the flags that were given on top of a file/default configuration
    pub fn apply(&self, mut config: AnalysisConfig) -> AnalysisConfig {
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(delimiter) = self.delimiter {
            config.delimiter = delimiter;
        }
        if self.no_header {
            config.has_header = false;
        }
        if !self.pairs.is_empty() {
            config.pairs = Some(self.pairs.clone());
        }
        if self.no_pairs {
            config.skip_pairs = true;
        }
        if let Some(precision) = self.precision {
            config.precision = precision;
        }
        config
    }
}

fn parse_delimiter(s: &str) -> Result<char, String> {
    if s == "\\t" {
        return Ok('\t');
    }
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c),
        _ => Err(format!("expected a single ASCII character, got {:?}", s)),
    }
}

fn parse_pair(s: &str) -> Result<[String; 2], String> {
    match s.split_once(',') {
        Some((a, b)) if !a.trim().is_empty() && !b.trim().is_empty() => {
            Ok([a.trim().to_string(), b.trim().to_string()])
        }
        _ => Err(format!("expected two column names as A,B, got {:?}", s)),
    }
}
