pub mod fasta;
pub mod gxf;

use crate::bio::FormatAdapter;
use crate::cli::output::*;
use crate::core::{load_config, Config, MappingTable, MatchStrategy, RewriteEngine, RunOutcome};
use crate::report::{text, write_json_report, RunReport};
use crate::RenameError;
use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Arguments shared by every rename command
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Input table file (tab-separated: old ID, new ID)
    #[arg(short, long, value_name = "FILE")]
    pub table: PathBuf,

    /// Output file (gzip-compressed if it ends in .gz)
    #[arg(short, long, value_name = "FILE")]
    pub out: PathBuf,

    /// Require table IDs to equal the record identifier instead of being contained in it
    #[arg(long)]
    pub exact: bool,

    /// Write a run report (JSON if the name ends in .json, plain text otherwise)
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE", env = "SEQRENAME_CONFIG")]
    pub config: Option<PathBuf>,
}

impl CommonArgs {
    pub fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => {
                load_config(path).with_context(|| format!("Failed to load config {:?}", path))
            }
            None => Ok(Config::default()),
        }
    }

    pub fn strategy(&self, config: &Config) -> MatchStrategy {
        if self.exact {
            MatchStrategy::Exact
        } else {
            config.matching.strategy
        }
    }
}

/// Validate, load, rewrite and report. Returns an error for any failed run,
/// including one that completed with ambiguous identifiers.
pub(crate) fn execute(
    input: &Path,
    adapter: &dyn FormatAdapter,
    common: &CommonArgs,
    config: &Config,
    quiet: bool,
) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {:?}", input);
    }
    if !common.table.exists() {
        anyhow::bail!("Table file does not exist: {:?}", common.table);
    }

    if !adapter.validate_path(input)? {
        return Err(RenameError::InvalidInputFormat {
            path: input.to_path_buf(),
            format: adapter.name().to_string(),
        }
        .into());
    }

    let table = MappingTable::load(&common.table)?;
    let strategy = common.strategy(config);
    debug!("Using {:?} matching against {} entries", strategy, table.len());

    let engine = RewriteEngine::new(table, strategy);
    let outcome = engine.run_paths(input, adapter, &common.out)?;

    if let Some(report_path) = &common.report {
        let report = RunReport {
            format: adapter.name(),
            input: input.to_path_buf(),
            table: common.table.clone(),
            output: common.out.clone(),
            strategy,
            outcome: &outcome,
        };
        write_report(report_path, &report, config.report.max_listed)?;
    }

    if !quiet {
        print_summary(&outcome, &common.out);
    }

    if !outcome.is_success() {
        let ambiguous = outcome.diagnostics.ambiguous();
        error("Multiple matches found for the following IDs:");
        for line in text::ambiguity_lines(&outcome.diagnostics) {
            error(&line);
        }
        return Err(RenameError::AmbiguousMatches {
            count: ambiguous.len(),
        }
        .into());
    }

    Ok(())
}

fn write_report(path: &Path, report: &RunReport<'_>, max_listed: usize) -> Result<()> {
    if path.extension().and_then(|s| s.to_str()) == Some("json") {
        write_json_report(path, report)
    } else {
        let summary = text::generate_text_summary(report.outcome, max_listed)?;
        std::fs::write(path, summary)
            .with_context(|| format!("Failed to write report to {:?}", path))
    }
}

fn print_summary(outcome: &RunOutcome, output_path: &Path) {
    let stats = &outcome.stats;

    section_header("Rename Summary");
    tree_item(false, "Identifiers", Some(&stats.identifiers.to_string()));
    tree_item(false, "Renamed", Some(&stats.renamed.to_string()));
    tree_item(false, "Unchanged lines", Some(&stats.unchanged().to_string()));
    if stats.skipped > 0 {
        tree_item(false, "Skipped lines", Some(&stats.skipped.to_string()));
    }
    tree_item(true, "Output", Some(&output_path.display().to_string()));

    let unmatched = outcome.diagnostics.no_matches().len();
    if unmatched > 0 {
        warning(&format!(
            "{} identifier(s) do not exist in your provided table file",
            unmatched
        ));
    }
    if outcome.is_success() {
        success("Renaming complete");
    }
}
