//! Command-line arguments.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use tablesort::Modifiers;

/// Sort a table document the way header clicks would in the dashboard.
#[derive(Debug, Parser)]
#[command(name = "tablesort-cli", version)]
pub struct Args {
    /// Table document (JSON with `headers`, `rows` and optional `sort_initial`).
    pub document: PathBuf,

    /// Header click to replay, e.g. `2`, `shift+1`, `ctrl+0`. Repeatable;
    /// clicks are applied in the order given.
    #[arg(short, long = "click", value_name = "SPEC")]
    pub clicks: Vec<ClickSpec>,

    /// File of rows to append after attaching, followed by an update.
    /// Repeatable; files are applied before any click.
    #[arg(short, long = "append", value_name = "FILE")]
    pub appends: Vec<PathBuf>,

    /// Engine config (JSON) overriding the header marker classes.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write logs to this file instead of stderr.
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace).
    #[arg(long, default_value = "warn")]
    pub log_level: LevelFilter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Boxed text table with sort markers in the header.
    Table,
    /// The sorted table as JSON.
    Json,
}

/// A header click given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickSpec {
    pub column: usize,
    pub modifiers: Modifiers,
}

impl FromStr for ClickSpec {
    type Err = String;

    /// Parses `[shift+|ctrl+|alt+]*<column>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts: Vec<&str> = s.split('+').map(str::trim).collect();
        let column = parts
            .pop()
            .filter(|c| !c.is_empty())
            .ok_or_else(|| format!("missing column in click '{s}'"))?;
        let column = column
            .parse::<usize>()
            .map_err(|_| format!("invalid column '{column}' in click '{s}'"))?;

        let mut modifiers = Modifiers::NONE;
        for part in parts {
            match part.to_ascii_lowercase().as_str() {
                "shift" => modifiers.shift = true,
                "ctrl" | "control" => modifiers.ctrl = true,
                "alt" => modifiers.alt = true,
                other => return Err(format!("unknown modifier '{other}' in click '{s}'")),
            }
        }

        Ok(Self { column, modifiers })
    }
}
