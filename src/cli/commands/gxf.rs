use super::{execute, CommonArgs};
use crate::bio::{GxfAdapter, GxfMode};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct GxfArgs {
    /// Input GFF3 or GTF file
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Column to rename: attributes (column 9) or seqid (column 1) [default: attribute]
    #[arg(short, long, value_enum)]
    pub mode: Option<GxfMode>,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn run(args: GxfArgs, quiet: bool) -> Result<()> {
    let config = args.common.load_config()?;
    let mode = args.mode.unwrap_or(config.gxf.mode);
    execute(&args.input, &GxfAdapter::new(mode), &args.common, &config, quiet)
}
