/// Format adapters for identifier renaming
///
/// An adapter knows three things about a flat record format: whether a file
/// looks like that format at all, which part of a line carries the identifier
/// to rename, and how to put a line back together once a replacement is known.
use crate::utils::{open_input, split_line_ending, RawLines};
use crate::Result;
use std::io::BufRead;
use std::path::Path;

/// What an adapter found on a single line (terminator already removed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extracted<'a> {
    /// Line is written through verbatim and never matched
    PassThrough,
    /// Identifier-bearing field to resolve against the mapping table
    Identifier(&'a str),
    /// Line lacks the fields needed to locate an identifier; it is dropped
    Malformed { fields: usize },
}

pub trait FormatAdapter {
    /// Human-readable format name used in messages
    fn name(&self) -> &'static str;

    /// Check whether the stream satisfies this format's acceptance rule
    fn validate(&self, reader: &mut dyn BufRead) -> Result<bool>;

    /// Locate the identifier-bearing field of a line
    fn extract_candidate<'a>(&self, line: &'a str) -> Extracted<'a>;

    /// Rebuild a line with its identifier-bearing field replaced by `resolved`
    fn rewrite(&self, line: &str, resolved: &str) -> String;

    /// Whether unmatched and ambiguous identifiers are reported
    fn tracks_diagnostics(&self) -> bool {
        true
    }

    fn validate_path(&self, path: &Path) -> Result<bool> {
        let mut reader = open_input(path)?;
        self.validate(&mut *reader)
    }
}

/// Scan line contents (without terminators) until `f` returns a verdict,
/// falling back to `default` at end of input
pub(crate) fn scan_lines<F>(reader: &mut dyn BufRead, default: bool, mut f: F) -> Result<bool>
where
    F: FnMut(&str) -> Option<bool>,
{
    for line in RawLines::new(reader) {
        let line = line?;
        let (content, _) = split_line_ending(&line);
        if let Some(verdict) = f(content) {
            return Ok(verdict);
        }
    }
    Ok(default)
}
