pub mod config;
pub mod diagnostics;
pub mod mapping_table;
pub mod resolver;
pub mod rewriter;

pub use config::{load_config, Config};
pub use diagnostics::{Diagnostics, MalformedLine, RunOutcome, RunStats, RunStatus};
pub use mapping_table::{MappingEntry, MappingTable};
pub use resolver::{MatchStrategy, ResolutionOutcome, ResolutionPolicy};
pub use rewriter::RewriteEngine;
