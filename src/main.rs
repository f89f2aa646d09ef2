use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tabstat::aggregator;
use tabstat::cli::{Cli, OutputFormat};
use tabstat::config::AnalysisConfig;
use tabstat::{csv_output, json_output, text_output};
use tracing_subscriber::EnvFilter;

/// File analysed when the user just presses enter at the prompt
const DEFAULT_DATA_FILE: &str = "./marriage_data.csv";

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Ask for the data file on stdin; an empty answer selects the default file
fn prompt_for_file() -> Result<PathBuf> {
    print!("Insert file name: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read file name from stdin")?;

    let name = line.trim();
    let path = if name.is_empty() {
        DEFAULT_DATA_FILE
    } else {
        name
    };
    eprintln!("Using file: {}", path);
    Ok(PathBuf::from(path))
}

fn load_config(args: &Cli) -> Result<AnalysisConfig> {
    let base = match &args.config {
        Some(path) => AnalysisConfig::from_file(path)?,
        None => AnalysisConfig::default(),
    };
    let config = args.apply(base);
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let config = load_config(&args)?;
    tracing::debug!(?config, "resolved configuration");

    let path = match &args.file {
        Some(path) => path.clone(),
        None => prompt_for_file()?,
    };

    let table = config
        .loader()
        .load_path(&path)
        .with_context(|| format!("Failed to load {}", path.display()))?;

    let analysis = if config.skip_pairs {
        aggregator::summarize_table(&table)
    } else {
        let pairs = config.column_pairs()?;
        aggregator::analyze(&table, pairs.as_deref())
    };
    let report = analysis.with_context(|| format!("Failed to analyse {}", path.display()))?;

    let rendered = match config.format {
        OutputFormat::Text => text_output::render(&report, config.precision),
        OutputFormat::Json => json_output::render(&report)?,
        OutputFormat::Csv => csv_output::render(&report),
    };
    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }

    Ok(())
}
