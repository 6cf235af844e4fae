use crate::core::{Diagnostics, RunOutcome};
use std::fmt::Write;

/// Lines describing every ambiguous identifier, `id: matched with A, B`
pub fn ambiguity_lines(diagnostics: &Diagnostics) -> Vec<String> {
    diagnostics
        .ambiguous()
        .iter()
        .map(|(raw_id, candidates)| format!("{}: matched with {}", raw_id, candidates.join(", ")))
        .collect()
}

/// Plain-text summary of a run; `max_listed` caps the unmatched list (0 = no cap)
pub fn generate_text_summary(outcome: &RunOutcome, max_listed: usize) -> Result<String, std::fmt::Error> {
    let mut output = String::new();
    let stats = &outcome.stats;
    let diagnostics = &outcome.diagnostics;

    writeln!(&mut output, "Rename Summary")?;
    writeln!(&mut output, "--------------")?;
    writeln!(&mut output, "- Lines read:   {:6}", stats.lines)?;
    writeln!(&mut output, "- Identifiers:  {:6}", stats.identifiers)?;
    writeln!(&mut output, "- Renamed:      {:6}", stats.renamed)?;
    writeln!(&mut output, "- Unmatched:    {:6}", stats.unmatched)?;
    writeln!(&mut output, "- Ambiguous:    {:6}", stats.ambiguous)?;
    if stats.skipped > 0 {
        writeln!(&mut output, "- Skipped:      {:6}", stats.skipped)?;
    }

    let no_matches = diagnostics.no_matches();
    if !no_matches.is_empty() {
        writeln!(&mut output)?;
        writeln!(&mut output, "Identifiers not found in table")?;
        let shown = if max_listed == 0 {
            no_matches.len()
        } else {
            max_listed.min(no_matches.len())
        };
        for raw_id in &no_matches[..shown] {
            writeln!(&mut output, "  {}", raw_id)?;
        }
        if no_matches.len() > shown {
            writeln!(&mut output, "  ... and {} more", no_matches.len() - shown)?;
        }
    }

    if !diagnostics.malformed().is_empty() {
        writeln!(&mut output)?;
        writeln!(&mut output, "Skipped malformed lines")?;
        for malformed in diagnostics.malformed() {
            writeln!(
                &mut output,
                "  line {} ({} fields): {}",
                malformed.line_number, malformed.fields, malformed.content
            )?;
        }
    }

    if diagnostics.has_ambiguities() {
        writeln!(&mut output)?;
        writeln!(&mut output, "Multiple matches found for the following IDs:")?;
        for line in ambiguity_lines(diagnostics) {
            writeln!(&mut output, "  {}", line)?;
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RunStats, RunStatus};

    fn outcome_with(diagnostics: Diagnostics) -> RunOutcome {
        RunOutcome {
            status: diagnostics.status(),
            stats: RunStats::default(),
            diagnostics,
        }
    }

    #[test]
    fn test_ambiguity_lines_list_candidates_in_order() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.record_ambiguous("gene1_gene2combo", &["GENEA", "GENEB"]);

        assert_eq!(
            ambiguity_lines(&diagnostics),
            vec!["gene1_gene2combo: matched with GENEA, GENEB".to_string()]
        );
    }

    #[test]
    fn test_unmatched_list_is_capped() {
        let mut diagnostics = Diagnostics::new();
        for i in 0..5 {
            diagnostics.record_no_match(&format!("seq{}", i));
        }
        let outcome = outcome_with(diagnostics);
        assert_eq!(outcome.status, RunStatus::Success);

        let summary = generate_text_summary(&outcome, 2).unwrap();
        assert!(summary.contains("  seq0\n"));
        assert!(summary.contains("  seq1\n"));
        assert!(!summary.contains("  seq2\n"));
        assert!(summary.contains("... and 3 more"));

        let full = generate_text_summary(&outcome, 0).unwrap();
        assert!(full.contains("  seq4\n"));
    }
}
