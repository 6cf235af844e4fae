use super::{execute, CommonArgs};
use crate::bio::FastaAdapter;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct FastaArgs {
    /// Input FASTA file
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn run(args: FastaArgs, quiet: bool) -> Result<()> {
    let config = args.common.load_config()?;
    execute(&args.input, &FastaAdapter::new(), &args.common, &config, quiet)
}
