use indexmap::IndexMap;
use serde::Serialize;

/// Final state of a rename run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Success,
    /// At least one identifier matched several table entries
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MalformedLine {
    pub line_number: usize,
    pub fields: usize,
    pub content: String,
}

/// Warnings and errors collected while streaming.
///
/// Ambiguities are only recorded here; whether they fail the run is decided
/// once the whole input has been written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    no_matches: Vec<String>,
    ambiguous: IndexMap<String, Vec<String>>,
    malformed: Vec<MalformedLine>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_no_match(&mut self, raw_id: &str) {
        self.no_matches.push(raw_id.to_string());
    }

    /// Record the candidates for an ambiguous identifier.
    ///
    /// Repeated occurrences of the same identifier keep the first candidate
    /// list; resolution is deterministic so later lists are identical.
    pub fn record_ambiguous(&mut self, raw_id: &str, candidates: &[&str]) {
        self.ambiguous
            .entry(raw_id.to_string())
            .or_insert_with(|| candidates.iter().map(|c| c.to_string()).collect());
    }

    pub fn record_malformed(&mut self, line_number: usize, fields: usize, content: &str) {
        self.malformed.push(MalformedLine {
            line_number,
            fields,
            content: content.to_string(),
        });
    }

    pub fn no_matches(&self) -> &[String] {
        &self.no_matches
    }

    /// Ambiguous identifiers in first-seen order, with their candidates in table order
    pub fn ambiguous(&self) -> &IndexMap<String, Vec<String>> {
        &self.ambiguous
    }

    pub fn malformed(&self) -> &[MalformedLine] {
        &self.malformed
    }

    pub fn has_ambiguities(&self) -> bool {
        !self.ambiguous.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.no_matches.is_empty() || !self.malformed.is_empty()
    }

    pub fn status(&self) -> RunStatus {
        if self.has_ambiguities() {
            RunStatus::Failure
        } else {
            RunStatus::Success
        }
    }
}

/// Line counters for a single run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub lines: usize,
    pub identifiers: usize,
    pub renamed: usize,
    pub unmatched: usize,
    pub ambiguous: usize,
    pub skipped: usize,
}

impl RunStats {
    /// Lines written without modification
    pub fn unchanged(&self) -> usize {
        self.lines - self.renamed - self.skipped
    }
}

/// Everything a run hands back to its caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunOutcome {
    pub status: RunStatus,
    pub stats: RunStats,
    pub diagnostics: Diagnostics,
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        self.status == RunStatus::Success
    }
}
