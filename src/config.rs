use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::collections::DEFAULT_SIZE;

/// How the course list is written to the console.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Runtime settings, taken from the command line.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Number of hash buckets. Fixed for the life of the table
    #[arg(short, long, default_value_t = DEFAULT_SIZE)]
    pub table_size: usize,

    /// Catalog file loaded before the menu starts
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Output format for the course list
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_size: DEFAULT_SIZE,
            source: None,
            format: OutputFormat::Text,
        }
    }
}
