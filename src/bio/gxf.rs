//! GFF3/GTF ("GXF") adapter.
//!
//! Two rename strategies share this adapter and are selected explicitly:
//!
//! - [`GxfMode::Attribute`] matches against the whole attributes column
//!   (column 9) and reports unmatched, ambiguous and malformed lines.
//! - [`GxfMode::Simple`] matches against the seqid column (column 1) and
//!   renames silently: unmatched or ambiguous rows are left as they are.
//!
//! Field counting trims surrounding whitespace from the line first, so a
//! trailing tab does not add an empty column.

use crate::bio::format::{scan_lines, Extracted, FormatAdapter};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::io::BufRead;

pub const COMMENT_MARKER: char = '#';

/// Column count of a well-formed GFF3/GTF data line
pub const GXF_COLUMNS: usize = 9;

/// Minimum column count accepted in attribute mode
pub const MIN_ATTRIBUTE_COLUMNS: usize = 8;

const SEQID_COLUMN: usize = 0;
const ATTRIBUTES_COLUMN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GxfMode {
    /// Rename the seqid column; no warnings or ambiguity checks
    Simple,
    /// Rename the attributes column with full diagnostics
    #[default]
    Attribute,
}

impl std::fmt::Display for GxfMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GxfMode::Simple => write!(f, "simple"),
            GxfMode::Attribute => write!(f, "attribute"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GxfAdapter {
    mode: GxfMode,
}

impl GxfAdapter {
    pub fn new(mode: GxfMode) -> Self {
        Self { mode }
    }

    pub fn simple() -> Self {
        Self::new(GxfMode::Simple)
    }

    pub fn attribute() -> Self {
        Self::new(GxfMode::Attribute)
    }

    pub fn mode(&self) -> GxfMode {
        self.mode
    }

    fn target_column(&self) -> usize {
        match self.mode {
            GxfMode::Simple => SEQID_COLUMN,
            GxfMode::Attribute => ATTRIBUTES_COLUMN,
        }
    }
}

fn columns(line: &str) -> Vec<&str> {
    line.trim().split('\t').collect()
}

impl FormatAdapter for GxfAdapter {
    fn name(&self) -> &'static str {
        "GFF3/GTF"
    }

    fn validate(&self, reader: &mut dyn BufRead) -> Result<bool> {
        match self.mode {
            // Every data line must have exactly nine columns
            GxfMode::Simple => scan_lines(reader, true, |line| {
                if line.starts_with(COMMENT_MARKER) {
                    return None;
                }
                (columns(line).len() != GXF_COLUMNS).then_some(false)
            }),
            // One data line with at least eight columns is enough
            GxfMode::Attribute => scan_lines(reader, false, |line| {
                if line.starts_with(COMMENT_MARKER) {
                    return None;
                }
                (columns(line).len() >= MIN_ATTRIBUTE_COLUMNS).then_some(true)
            }),
        }
    }

    fn extract_candidate<'a>(&self, line: &'a str) -> Extracted<'a> {
        if line.starts_with(COMMENT_MARKER) {
            return Extracted::PassThrough;
        }

        let fields = columns(line);
        match self.mode {
            GxfMode::Attribute if fields.len() < MIN_ATTRIBUTE_COLUMNS => Extracted::Malformed {
                fields: fields.len(),
            },
            // No identifier column to inspect; written as-is
            _ if fields.len() <= self.target_column() => Extracted::PassThrough,
            _ => Extracted::Identifier(fields[self.target_column()]),
        }
    }

    fn rewrite(&self, line: &str, resolved: &str) -> String {
        if line.starts_with(COMMENT_MARKER) {
            return line.to_string();
        }

        let mut fields = columns(line);
        let target = self.target_column();
        if fields.len() <= target {
            return line.to_string();
        }
        fields[target] = resolved;
        fields.join("\t")
    }

    fn tracks_diagnostics(&self) -> bool {
        self.mode == GxfMode::Attribute
    }
}
