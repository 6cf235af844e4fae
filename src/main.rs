use clap::Parser;
use colored::*;
use seqrename::cli::{Cli, Commands};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins, then SEQRENAME_LOG, then the -v/-q default
    let log_level =
        std::env::var("SEQRENAME_LOG").unwrap_or_else(|_| cli.log_level().to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Fasta(args) => seqrename::cli::commands::fasta::run(args, cli.quiet),
        Commands::Gxf(args) => seqrename::cli::commands::gxf::run(args, cli.quiet),
    }
}
