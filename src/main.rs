//! Tabrec CLI - print stock portfolios as tables
//!
//! Reads a portfolio CSV (`name,shares,price` with a header row), validates
//! every row into a `Stock`, and prints the result.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use tabrec::prelude::*;

/// Validated records and pluggable table output
#[derive(Parser, Debug)]
#[command(name = "tabrec")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a portfolio as a table
    Table {
        /// Portfolio CSV file
        path: PathBuf,

        /// Output format (text, csv, html); overrides the config file
        #[arg(short, long)]
        format: Option<String>,

        /// Comma-separated fields to print
        #[arg(long, value_delimiter = ',', default_value = "name,shares,price")]
        fields: Vec<String>,

        /// Printf-style specifier per column, repeated in column order
        #[arg(long = "column-format")]
        column_formats: Vec<String>,

        /// Upper-case headings
        #[arg(long)]
        upper_headers: bool,

        /// Formatter configuration file (.toml or .json)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Fail on the first malformed row instead of skipping it
        #[arg(long)]
        strict: bool,
    },

    /// Print the total cost of a portfolio
    Cost {
        /// Portfolio CSV file
        path: PathBuf,
    },

    /// List the available output formats
    Formats,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Table {
            path,
            format,
            fields,
            column_formats,
            upper_headers,
            config,
            strict,
        } => {
            let mut config = match config {
                Some(config_path) => FormatConfig::load(&config_path).with_context(|| {
                    format!("failed to load config {}", config_path.display())
                })?,
                None => FormatConfig::default(),
            };
            if let Some(format) = format {
                config.format = format;
            }
            if !column_formats.is_empty() {
                config.column_formats = Some(column_formats);
            }
            config.upper_headers |= upper_headers;

            let portfolio = load_portfolio(&path, strict)?;
            let formatter = create_formatter(&config)?;
            tabrec::format::print_table_stdout(&portfolio, &fields, formatter.as_ref())?;
        }
        Command::Cost { path } => {
            let portfolio = load_portfolio(&path, false)?;
            println!("portfolio total: ${:.2}", portfolio_cost(&portfolio));
        }
        Command::Formats => {
            let registry = FormatterRegistry::with_builtins();
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            for name in registry.names() {
                writeln!(out, "{}", name)?;
            }
        }
    }
    Ok(())
}

fn load_portfolio(path: &Path, strict: bool) -> Result<Vec<Stock>> {
    let outcome: ReadOutcome<Stock> = read_csv_file(path)
        .with_context(|| format!("failed to read portfolio {}", path.display()))?;

    if strict {
        return Ok(outcome.into_strict()?);
    }
    if !outcome.is_clean() {
        eprintln!("skipped {} malformed rows", outcome.skipped.len());
    }
    Ok(outcome.records)
}
