use anyhow::{bail, ensure, Context};
use bio::io::fasta;
use clap::{value_parser, Parser};
use ed_types::to_units;
use itertools::Itertools;
use log::{debug, LevelFilter};
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

/// Compute the edit distance (insert/delete 1, substitute 2) between two
/// strings, print one optimal path and the matrix of all optimal operations.
#[derive(Parser, Serialize, Deserialize, Debug)]
#[clap(about, disable_version_flag(true))]
pub struct Cli {
    /// The source string.
    #[clap(default_value = "intention")]
    pub source: String,

    /// The target string.
    #[clap(default_value = "execution")]
    pub target: String,

    /// A .seq, .txt, or Fasta file (or directory of them) with pairs to align.
    /// Replaces SOURCE and TARGET.
    #[clap(short, long, value_parser = value_parser!(PathBuf), display_order = 1)]
    pub input: Option<PathBuf>,

    /// Write a .csv of `{cost},{cigar}` lines.
    #[clap(short, long, value_parser = value_parser!(PathBuf), display_order = 1)]
    pub output: Option<PathBuf>,

    /// Export the operation and distance matrices of the last pair to an .xlsx workbook.
    #[clap(long, value_parser = value_parser!(PathBuf), display_order = 2)]
    pub xlsx: Option<PathBuf>,

    /// Export the operation matrix of the last pair as tab separated values.
    #[clap(long, value_parser = value_parser!(PathBuf), display_order = 2)]
    pub tsv: Option<PathBuf>,

    /// Do not print the operation matrix.
    #[clap(long)]
    pub no_matrix: bool,

    /// Print one JSON object per pair instead of the text report.
    #[clap(long)]
    pub json: bool,

    /// Print less. Pass once for one stats line per pair, twice for the summary only.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub silent: u8,

    /// Log more. Pass once for info, twice for debug. `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }

    /// Call the given function for each pair in the input.
    pub fn process_input_pairs(
        &self,
        mut run_pair: impl FnMut(&[char], &[char]) -> anyhow::Result<()>,
    ) -> anyhow::Result<()> {
        let Some(input) = &self.input else {
            return run_pair(&to_units(&self.source), &to_units(&self.target));
        };

        let files = if input.is_file() {
            vec![input.clone()]
        } else {
            let mut files: Vec<PathBuf> = input
                .read_dir()
                .with_context(|| format!("{} is not a file or directory", input.display()))?
                .map_ok(|e| e.path())
                .collect::<Result<_, _>>()?;
            files.sort();
            files
        };

        for f in files {
            debug!("Reading {}", f.display());
            for (a, b) in read_pairs(&f)? {
                run_pair(&a, &b)?;
            }
        }
        Ok(())
    }
}

/// Read all pairs from a single file, dispatching on its extension.
pub fn read_pairs(f: &Path) -> anyhow::Result<Vec<(Vec<char>, Vec<char>)>> {
    let ext = f.extension().and_then(|e| e.to_str()).unwrap_or_default();
    match ext {
        "seq" | "txt" => {
            let file = File::open(f).with_context(|| format!("Cannot open {}", f.display()))?;
            let lines: Vec<String> = BufReader::new(file).lines().collect::<Result<_, _>>()?;
            ensure!(
                lines.len() % 2 == 0,
                "{} has an odd number of lines",
                f.display()
            );
            lines
                .iter()
                .tuples::<(_, _)>()
                .map(|(a, b)| {
                    if ext == "seq" {
                        let (Some(a), Some(b)) = (a.strip_prefix('>'), b.strip_prefix('<')) else {
                            bail!("{}: .seq pairs must start with '>' and '<'", f.display());
                        };
                        Ok((to_units(a), to_units(b)))
                    } else {
                        Ok((to_units(a), to_units(b)))
                    }
                })
                .collect()
        }
        "fna" | "fa" | "fasta" => {
            let file = File::open(f).with_context(|| format!("Cannot open {}", f.display()))?;
            let records: Vec<fasta::Record> = fasta::Reader::new(BufReader::new(file))
                .records()
                .collect::<Result<_, _>>()?;
            ensure!(
                records.len() % 2 == 0,
                "{} has an odd number of records",
                f.display()
            );
            Ok(records
                .iter()
                .map(|r| String::from_utf8_lossy(r.seq()).chars().collect_vec())
                .tuples::<(_, _)>()
                .collect())
        }
        ext => bail!("Unknown file extension {ext:?}. Must be in {{seq,txt,fna,fa,fasta}}."),
    }
}
