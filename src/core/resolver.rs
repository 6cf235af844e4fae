/// Identifier resolution against a mapping table
use crate::core::mapping_table::MappingTable;
use serde::{Deserialize, Serialize};

/// How a table's old ID is compared with a record's raw identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    /// Old ID occurs anywhere inside the raw identifier
    #[default]
    Contains,
    /// Old ID equals the raw identifier
    Exact,
}

impl MatchStrategy {
    pub fn matches(&self, old_id: &str, raw_id: &str) -> bool {
        match self {
            MatchStrategy::Contains => raw_id.contains(old_id),
            MatchStrategy::Exact => raw_id == old_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome<'t> {
    NoMatch,
    UniqueMatch(&'t str),
    /// All matched new IDs, in table order
    AmbiguousMatch(Vec<&'t str>),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ResolutionPolicy {
    strategy: MatchStrategy,
}

impl ResolutionPolicy {
    pub fn new(strategy: MatchStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    /// Resolve `raw_id` against every entry of `table`.
    ///
    /// No normalization is applied to either side: matching is case- and
    /// whitespace-sensitive.
    pub fn resolve<'t>(&self, raw_id: &str, table: &'t MappingTable) -> ResolutionOutcome<'t> {
        let mut matched: Vec<&'t str> = table
            .iter()
            .filter(|entry| self.strategy.matches(&entry.old_id, raw_id))
            .map(|entry| entry.new_id.as_str())
            .collect();

        match matched.len() {
            0 => ResolutionOutcome::NoMatch,
            1 => ResolutionOutcome::UniqueMatch(matched.remove(0)),
            _ => ResolutionOutcome::AmbiguousMatch(matched),
        }
    }
}
