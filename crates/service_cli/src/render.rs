//! Walk rendering
//!
//! Writes a [`WalkResult`] as a terminal table, JSON or CSV.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde::Serialize;
use walk_core::WalkResult;

use crate::{CliError, Result};

/// Output format for rendered walks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Box-drawn table with a summary line
    Table,
    /// Pretty-printed JSON document
    Json,
    /// `index,value` rows with a header
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(format!(
                "Unknown format: {}. Supported: table, json, csv",
                other
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Table => "table",
            Self::Json => "json",
            Self::Csv => "csv",
        };
        f.write_str(name)
    }
}

#[derive(Serialize)]
struct CsvRow {
    index: usize,
    value: i64,
}

/// Write `walk` to `writer` in the given format
pub fn write_walk<W: Write>(walk: &WalkResult, format: OutputFormat, writer: W) -> Result<()> {
    match format {
        OutputFormat::Table => write_table(walk, writer),
        OutputFormat::Json => write_json(walk, writer),
        OutputFormat::Csv => write_csv(walk, writer),
    }
}

fn write_json<W: Write>(walk: &WalkResult, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, walk).map_err(CliError::serialisation)?;
    writeln!(writer)?;
    Ok(())
}

fn write_csv<W: Write>(walk: &WalkResult, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if walk.is_empty() {
        // serialize() only emits the header alongside the first row
        csv_writer
            .write_record(["index", "value"])
            .map_err(CliError::serialisation)?;
    }

    for (index, value) in walk.points() {
        csv_writer
            .serialize(CsvRow { index, value })
            .map_err(CliError::serialisation)?;
    }

    csv_writer.flush()?;
    Ok(())
}

fn write_table<W: Write>(walk: &WalkResult, mut writer: W) -> Result<()> {
    writeln!(writer, "┌────────────┬──────────────────────┐")?;
    writeln!(writer, "│ Index      │ Value                │")?;
    writeln!(writer, "├────────────┼──────────────────────┤")?;
    if walk.is_empty() {
        writeln!(writer, "│ (no data)  │                      │")?;
    }
    for (index, value) in walk.points() {
        writeln!(writer, "│ {:<10} │ {:>20} │", index, value)?;
    }
    writeln!(writer, "└────────────┴──────────────────────┘")?;

    match (walk.min(), walk.max(), walk.last()) {
        (Some(min), Some(max), Some(last)) => writeln!(
            writer,
            "points={} seed={} min={} max={} last={}",
            walk.len(),
            walk.seed(),
            min,
            max,
            last
        )?,
        _ => writeln!(writer, "points=0 seed={}", walk.seed())?,
    }

    Ok(())
}
