/// Two-column old-id to new-id mapping table
///
/// Old IDs are literal substrings to look for, not unique keys: the table
/// keeps every row in file order, duplicates included, so ambiguity checks
/// can see every entry that could match.
use crate::utils::{open_input, split_line_ending, RawLines};
use crate::{RenameError, Result};
use std::io::BufRead;
use std::path::Path;
use tracing::debug;

pub const TABLE_DELIMITER: char = '\t';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    pub old_id: String,
    pub new_id: String,
}

impl MappingEntry {
    pub fn new(old_id: impl Into<String>, new_id: impl Into<String>) -> Self {
        Self {
            old_id: old_id.into(),
            new_id: new_id.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingTable {
    entries: Vec<MappingEntry>,
}

impl MappingTable {
    /// Load a table file (supports .gz compression).
    ///
    /// Every line must hold exactly two tab-separated fields. The first line
    /// that does not invalidates the whole table.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let reader = open_input(path)?;
        let table = Self::from_reader(reader, path)?;
        debug!("Loaded {} mapping entries from {:?}", table.len(), path);
        Ok(table)
    }

    /// Parse a table from any reader; `source` is only used in error messages
    pub fn from_reader<R: BufRead>(reader: R, source: &Path) -> Result<Self> {
        let mut entries = Vec::new();

        for (index, line) in RawLines::new(reader).enumerate() {
            let line = line?;
            let (content, _) = split_line_ending(&line);
            let fields: Vec<&str> = content.split(TABLE_DELIMITER).collect();

            match fields.as_slice() {
                [old_id, new_id] => entries.push(MappingEntry::new(*old_id, *new_id)),
                _ => {
                    return Err(RenameError::InvalidTableFormat {
                        path: source.to_path_buf(),
                        line: index + 1,
                        fields: fields.len(),
                    })
                }
            }
        }

        Ok(Self { entries })
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = MappingEntry>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MappingEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a MappingTable {
    type Item = &'a MappingEntry;
    type IntoIter = std::slice::Iter<'a, MappingEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
