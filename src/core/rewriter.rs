/// Streaming identifier rewrite
///
/// One pass over the input in file order. Every line is written (or, for a
/// malformed GXF attribute-mode line, dropped) before the next one is read.
/// Ambiguous identifiers do not stop the stream: the original line is kept
/// and the run is marked as failed once the input is exhausted.
use crate::bio::{Extracted, FormatAdapter};
use crate::core::diagnostics::{Diagnostics, RunOutcome, RunStats, RunStatus};
use crate::core::mapping_table::MappingTable;
use crate::core::resolver::{MatchStrategy, ResolutionOutcome, ResolutionPolicy};
use crate::utils::{open_input, split_line_ending, OutputWriter, RawLines};
use crate::Result;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{debug, info, warn};

pub struct RewriteEngine {
    table: MappingTable,
    policy: ResolutionPolicy,
}

impl RewriteEngine {
    pub fn new(table: MappingTable, strategy: MatchStrategy) -> Self {
        Self {
            table,
            policy: ResolutionPolicy::new(strategy),
        }
    }

    pub fn table(&self) -> &MappingTable {
        &self.table
    }

    /// Rewrite `input` into `output`.
    ///
    /// The input is expected to have passed `adapter.validate()` already.
    pub fn run<R, W>(
        &self,
        input: R,
        adapter: &dyn FormatAdapter,
        output: &mut W,
    ) -> Result<RunOutcome>
    where
        R: BufRead,
        W: Write + ?Sized,
    {
        debug!(
            "Renaming {} records with {} table entries ({:?} matching)",
            adapter.name(),
            self.table.len(),
            self.policy.strategy()
        );

        let mut diagnostics = Diagnostics::new();
        let mut stats = RunStats::default();
        let tracked = adapter.tracks_diagnostics();

        for (index, line) in RawLines::new(input).enumerate() {
            let line = line?;
            let line_number = index + 1;
            stats.lines += 1;

            let (content, ending) = split_line_ending(&line);
            let raw_id = match adapter.extract_candidate(content) {
                Extracted::PassThrough => {
                    output.write_all(line.as_bytes())?;
                    continue;
                }
                Extracted::Malformed { fields } => {
                    warn!("Skipping malformed line: {}", content.trim());
                    diagnostics.record_malformed(line_number, fields, content.trim());
                    stats.skipped += 1;
                    continue;
                }
                Extracted::Identifier(raw_id) => raw_id,
            };

            stats.identifiers += 1;
            match self.policy.resolve(raw_id, &self.table) {
                ResolutionOutcome::UniqueMatch(new_id) => {
                    let rewritten = adapter.rewrite(content, new_id);
                    output.write_all(rewritten.as_bytes())?;
                    output.write_all(ending.as_bytes())?;
                    stats.renamed += 1;
                    continue;
                }
                ResolutionOutcome::NoMatch => {
                    stats.unmatched += 1;
                    if tracked {
                        warn!("{} does not exist in your provided table file.", raw_id);
                        diagnostics.record_no_match(raw_id);
                    }
                }
                ResolutionOutcome::AmbiguousMatch(candidates) => {
                    stats.ambiguous += 1;
                    if tracked {
                        debug!("{} matched with {}", raw_id, candidates.join(", "));
                        diagnostics.record_ambiguous(raw_id, &candidates);
                    }
                }
            }

            output.write_all(line.as_bytes())?;
        }

        output.flush()?;

        let status = diagnostics.status();
        match status {
            RunStatus::Success => info!(
                "Renamed {} of {} identifiers ({} unmatched)",
                stats.renamed, stats.identifiers, stats.unmatched
            ),
            RunStatus::Failure => warn!(
                "Run failed: {} identifier(s) matched multiple table entries",
                diagnostics.ambiguous().len()
            ),
        }

        Ok(RunOutcome {
            status,
            stats,
            diagnostics,
        })
    }

    /// Rewrite the file at `input` into a new file at `output` (either may be .gz)
    pub fn run_paths(
        &self,
        input: &Path,
        adapter: &dyn FormatAdapter,
        output: &Path,
    ) -> Result<RunOutcome> {
        let reader = open_input(input)?;
        let mut writer = OutputWriter::create(output)?;
        let outcome = self.run(reader, adapter, &mut writer)?;
        writer.finish()?;
        Ok(outcome)
    }
}
