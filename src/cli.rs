//! Command-line interface definition using clap.
//!
//! - [`Args`] - CLI argument structure
//! - [`OutputFormat`] - `--format` values, convertible to [`crate::format::OutputFormat`]
//!
//! Option values are validated and turned into library configuration here,
//! so `main` only has to wire things together.

use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{AnalysisConfig, DateOrder, ParserConfig};
use crate::core::Scope;
use crate::error::{ChatlensError, Result};

/// Statistics for WhatsApp chat exports: activity timelines, busiest
/// participants, word and emoji usage.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --list-users
    chatlens chat.txt -u Alice
    chatlens chat.txt -f json -o report.json
    chatlens chat.txt --records records.csv --date-order month-first")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: PathBuf,

    /// Analyze a single participant instead of the whole chat
    #[arg(short, long, value_name = "NAME")]
    pub user: Option<String>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also write the parsed records as CSV
    #[arg(long, value_name = "PATH")]
    pub records: Option<PathBuf>,

    /// Print "Overall" and every participant, then exit
    #[arg(long)]
    pub list_users: bool,

    /// Rows in the busiest-users table
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Extra stopwords, one per line
    #[arg(long, value_name = "FILE")]
    pub stopwords: Option<PathBuf>,

    /// Field order of numeric dates: auto, day-first or month-first
    #[arg(long, value_name = "ORDER", default_value = "auto")]
    pub date_order: String,

    /// Log parser decisions to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Scope selected by `--user`, [`Scope::Overall`] when absent.
    pub fn scope(&self) -> Scope {
        match &self.user {
            Some(name) => Scope::participant(name),
            None => Scope::Overall,
        }
    }

    /// Parser settings from `--date-order`.
    pub fn parser_config(&self) -> Result<ParserConfig> {
        let order: DateOrder = self.date_order.parse()?;
        Ok(ParserConfig::new().with_date_order(order))
    }

    /// Analysis settings from `--top` and `--stopwords`.
    pub fn analysis_config(&self) -> Result<AnalysisConfig> {
        let mut config = AnalysisConfig::new();

        if let Some(top) = self.top {
            if top == 0 {
                return Err(ChatlensError::invalid_config(
                    "top",
                    "must be at least 1",
                ));
            }
            config = config.with_top_users(top);
        }

        if let Some(path) = &self.stopwords {
            let contents = fs::read_to_string(path)?;
            config = config.with_stopword_list(&contents);
        }

        Ok(config)
    }
}

/// Report format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned text tables
    #[default]
    #[value(alias = "txt")]
    Text,

    /// Pretty-printed JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&crate::format::OutputFormat::from(*self), f)
    }
}

impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Text => crate::format::OutputFormat::Text,
            OutputFormat::Json => crate::format::OutputFormat::Json,
        }
    }
}
