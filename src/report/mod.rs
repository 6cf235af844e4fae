pub mod text;

use crate::core::{MatchStrategy, RunOutcome};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Machine-readable record of a single rename run
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub format: &'a str,
    pub input: PathBuf,
    pub table: PathBuf,
    pub output: PathBuf,
    pub strategy: MatchStrategy,
    #[serde(flatten)]
    pub outcome: &'a RunOutcome,
}

pub fn write_json_report(path: &Path, report: &RunReport<'_>) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create report file {:?}", path))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)
        .with_context(|| format!("Failed to write report to {:?}", path))?;
    writer.flush()?;
    Ok(())
}
