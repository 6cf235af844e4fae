pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "seqrename",
    version,
    about = "Rename identifiers in FASTA and GFF3/GTF files from a mapping table",
    long_about = "seqrename rewrites FASTA headers or GFF3/GTF columns using a two-column, \
                  tab-separated old-id/new-id table. Table IDs are matched as substrings of each \
                  record's identifier; identifiers matching several table entries fail the run."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Default log level implied by -v/-q
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rename FASTA header identifiers
    Fasta(commands::fasta::FastaArgs),

    /// Rename identifiers in a GFF3 or GTF file
    Gxf(commands::gxf::GxfArgs),
}
