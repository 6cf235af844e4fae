pub mod io;

pub use io::{open_input, split_line_ending, OutputWriter, RawLines};
