use crate::bio::format::{scan_lines, Extracted, FormatAdapter};
use crate::Result;
use std::io::BufRead;

/// Record-start marker for FASTA headers
pub const HEADER_MARKER: char = '>';

/// FASTA adapter: the identifier is the whole header text after `>`.
///
/// Sequence lines are opaque and always passed through.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastaAdapter;

impl FastaAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl FormatAdapter for FastaAdapter {
    fn name(&self) -> &'static str {
        "FASTA"
    }

    /// A file is FASTA if at least one line starts with `>`
    fn validate(&self, reader: &mut dyn BufRead) -> Result<bool> {
        scan_lines(reader, false, |line| {
            line.starts_with(HEADER_MARKER).then_some(true)
        })
    }

    fn extract_candidate<'a>(&self, line: &'a str) -> Extracted<'a> {
        match line.strip_prefix(HEADER_MARKER) {
            Some(header) => Extracted::Identifier(header.trim()),
            None => Extracted::PassThrough,
        }
    }

    fn rewrite(&self, line: &str, resolved: &str) -> String {
        if line.starts_with(HEADER_MARKER) {
            format!("{}{}", HEADER_MARKER, resolved)
        } else {
            line.to_string()
        }
    }
}
