//! Analysis configuration, loadable from a TOML file
//!
//! # Example tabstat.toml
//!
//! ```toml
//! delimiter = ";"
//! precision = 2
//! format = "json"
//! pairs = [["OSMarriages", "SSMarriages"]]
//! ```

use crate::aggregator::ColumnPair;
use crate::cli::OutputFormat;
use crate::table::TableLoader;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Largest number of decimal places the text reporter will print
pub const MAX_PRECISION: usize = 15;

/// Settings for one analysis run
///
/// Every field has a default, so a config file only needs the keys it changes.
/// Command-line flags override values read from a file.
///
/// # Example
/// ```
/// use tabstat::config::AnalysisConfig;
///
/// let config = AnalysisConfig::from_toml_str("precision = 2").unwrap();
/// assert_eq!(config.precision, 2);
/// assert_eq!(config.delimiter, ',');
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Field delimiter; must be a single ASCII character
    pub delimiter: char,

    /// Whether the first row names the columns
    pub has_header: bool,

    /// Decimal places in text output
    pub precision: usize,

    /// Report format
    pub format: OutputFormat,

    /// Column pairs for relationship statistics
    ///
    /// `None` analyses every unordered pair of distinct columns.
    pub pairs: Option<Vec<[String; 2]>>,

    /// Skip relationship statistics entirely
    pub skip_pairs: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            has_header: true,
            precision: 4,
            format: OutputFormat::Text,
            pairs: None,
            skip_pairs: false,
        }
    }
}

impl AnalysisConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML")
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.delimiter.is_ascii() {
            return Err(format!(
                "delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            ));
        }

        if self.precision > MAX_PRECISION {
            return Err(format!(
                "precision must be <= {}, got {}",
                MAX_PRECISION, self.precision
            ));
        }

        if let Some(pairs) = &self.pairs {
            if let Some([a, _]) = pairs.iter().find(|[a, b]| a == b) {
                return Err(format!("pair names column '{}' twice", a));
            }
        }

        Ok(())
    }

    /// Table loader matching the delimiter and header settings
    pub fn loader(&self) -> TableLoader {
        TableLoader::with_delimiter(self.delimiter as u8).with_header(self.has_header)
    }

    /// Pairs to analyse: `None` for all pairs
    pub fn column_pairs(&self) -> Result<Option<Vec<ColumnPair>>> {
        self.pairs
            .as_ref()
            .map(|pairs| {
                pairs
                    .iter()
                    .map(|[a, b]| ColumnPair::new(a.as_str(), b.as_str()))
                    .collect::<crate::Result<Vec<_>>>()
                    .context("Invalid column pair")
            })
            .transpose()
    }
}
