#![allow(dead_code)]

/// Common test utilities for seqrename integration tests
use anyhow::Result;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch directory holding input, table and output files for one test
pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    pub fn create_input_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    pub fn output_path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }
}

/// The gene1/gene2 table used throughout the examples
pub fn gene_table() -> &'static str {
    "gene1\tGENEA\ngene2\tGENEB\n"
}

pub fn gene_fasta() -> &'static str {
    ">gene1_transcript\nATGATGATG\n>unknown_seq\nCGCGCG\n"
}

pub fn ambiguous_fasta() -> &'static str {
    ">gene1_gene2combo\nATGATGATG\n>gene2 protein\nCGCGCG\n"
}

pub fn gene_gff3() -> &'static str {
    "##gff-version 3\n\
     chr1\tsrc\tgene\t100\t900\t.\t+\t.\tID=gene1;Name=x\n\
     chr1\tsrc\tmRNA\t100\t900\t.\t+\t.\tID=tx9;Parent=geneX\n"
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("Failed to read output file")
}

/// Helper to run the seqrename binary
pub fn seqrename_cmd() -> Command {
    let mut cmd = Command::cargo_bin("seqrename").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("SEQRENAME_LOG")
        .env_remove("SEQRENAME_CONFIG");
    cmd
}
