pub mod fasta;
pub mod format;
pub mod gxf;

pub use fasta::FastaAdapter;
pub use format::{Extracted, FormatAdapter};
pub use gxf::{GxfAdapter, GxfMode};
