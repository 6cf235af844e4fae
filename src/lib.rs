pub mod bio;
pub mod cli;
pub mod core;
pub mod report;
pub mod utils;

pub use crate::bio::{FastaAdapter, FormatAdapter, GxfAdapter, GxfMode};
pub use crate::core::{
    diagnostics::{Diagnostics, RunStats, RunStatus},
    mapping_table::{MappingEntry, MappingTable},
    resolver::{MatchStrategy, ResolutionOutcome, ResolutionPolicy},
    rewriter::RewriteEngine,
};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenameError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(
        "The provided table file is not valid ({path:?}, line {line} has {fields} field(s)). \
         It should be a tab-separated file with exactly two columns."
    )]
    InvalidTableFormat {
        path: PathBuf,
        line: usize,
        fields: usize,
    },

    #[error("The provided {format} file is not valid: {path:?}")]
    InvalidInputFormat { path: PathBuf, format: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Multiple matches found for {count} identifier(s)")]
    AmbiguousMatches { count: usize },
}

pub type Result<T> = std::result::Result<T, RenameError>;
