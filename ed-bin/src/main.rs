mod cli;
mod stats;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use ed_engine::EditDistance;
use ed_table::{export_tsv, export_xlsx_sheets, render, Table};
use ed_types::*;
use log::info;
use serde::Serialize;
use stats::AlignStats;
use std::{
    fs::File,
    io::{self, BufWriter, Write},
};

/// One line of `--json` output.
#[derive(Serialize)]
struct PairResult<'a> {
    source: String,
    target: String,
    distance: Cost,
    cigar: String,
    path: &'a Path<char>,
    stats: &'a AlignStats,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    run(&args, &mut io::stdout().lock())
}

/// Align all input pairs and write the report, or one JSON line per pair, to `out`.
fn run(args: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let mut output = match &args.output {
        Some(path) => Some(BufWriter::new(
            File::create(path).with_context(|| format!("Cannot create {}", path.display()))?,
        )),
        None => None,
    };
    let export = args.xlsx.is_some() || args.tsv.is_some();

    let mut total = AlignStats::default();
    // Operation and distance tables of the last pair, when exporting.
    let mut last_tables: Option<(Table, Table)> = None;

    args.process_input_pairs(|a, b| {
        let mut ed = EditDistance::new(a, b)?;
        let cost = ed.compute_distance();
        let path = ed.backtrack_path()?;
        let ops = ed.operations()?;

        let stats = AlignStats {
            sample_size: 1,
            len_a: a.len(),
            len_b: b.len(),
            distance: cost,
            counts: path.counts(),
            tied_cells: ops.iter_rows().flatten().filter(|s| s.len() > 1).count(),
        };
        let cigar = path.to_cigar().to_string();

        if let Some(csv) = &mut output {
            writeln!(csv, "{cost},{cigar}")?;
        }

        if args.json {
            let result = PairResult {
                source: units_to_string(a),
                target: units_to_string(b),
                distance: cost,
                cigar,
                path: &path,
                stats: &stats,
            };
            writeln!(out, "{}", serde_json::to_string(&result)?)?;
        } else if args.silent == 0 {
            writeln!(out, "Source: {}", units_to_string(a))?;
            writeln!(out, "Target: {}", units_to_string(b))?;
            writeln!(out, "Minimum Edit Distance: {cost}")?;
            writeln!(out, "\nOptimal Path:")?;
            for step in &path {
                writeln!(out, "{step}")?;
            }
            if !args.no_matrix {
                writeln!(out, "\nOperation Matrix (all optimal operations in each cell):")?;
                write!(out, "{}", render("Operations", ops, a, b))?;
            }
            writeln!(out)?;
        } else if args.silent == 1 {
            stats.write_to(out, total.sample_size == 0)?;
        }

        if export {
            last_tables = Some((
                render("Operations", ops, a, b),
                render("Distances", ed.distances()?, a, b),
            ));
        }
        total += stats;
        Ok(())
    })?;

    if let Some(mut csv) = output {
        csv.flush()?;
    }

    if !args.json && (total.sample_size > 1 || args.silent > 1) {
        writeln!(out, "Summary:")?;
        total.write_to(out, true)?;
    }

    if let Some((ops, dist)) = &last_tables {
        if let Some(path) = &args.xlsx {
            export_xlsx_sheets(&[ops, dist], path)
                .with_context(|| format!("Cannot export to {}", path.display()))?;
        }
        if let Some(path) = &args.tsv {
            export_tsv(ops, path).with_context(|| format!("Cannot export to {}", path.display()))?;
        }
    }
    info!("Aligned {} pair(s)", total.sample_size);
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn tmp(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("ed-bin-main-{}-{name}", std::process::id()));
        std::fs::write(&path, content).unwrap();
        path
    }

    fn run_args(args: &[&str]) -> String {
        let args = Cli::parse_from(std::iter::once("edit-distance").chain(args.iter().copied()));
        let mut out = vec![];
        run(&args, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn json_lines_only() {
        let input = tmp("json.txt", "ab\nba\ncat\ncat\n");
        let out = run_args(&["--json", "-i", input.to_str().unwrap()]);
        std::fs::remove_file(input).unwrap();

        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2);
        let results = lines
            .iter()
            .map(|l| serde_json::from_str::<serde_json::Value>(l).unwrap())
            .collect::<Vec<_>>();
        assert_eq!(results[0]["distance"], 2);
        assert_eq!(results[1]["cigar"], "3M");
    }

    #[test]
    fn summary_after_report() {
        let input = tmp("summary.txt", "ab\nba\ncat\ncat\n");
        let out = run_args(&["-s", "-i", input.to_str().unwrap()]);
        std::fs::remove_file(input).unwrap();

        let lines = out.lines().collect::<Vec<_>>();
        // Header and one line per pair, then the summary with its own header.
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[3], "Summary:");
        assert_eq!(lines[4], lines[0]);
    }

    #[test]
    fn export_last_pair() {
        let input = tmp("export.txt", "ab\nba\ncat\ncat\n");
        let tsv = std::env::temp_dir().join(format!("ed-bin-main-{}-ops.tsv", std::process::id()));
        run_args(&[
            "-ss",
            "-i",
            input.to_str().unwrap(),
            "--tsv",
            tsv.to_str().unwrap(),
        ]);
        let table = std::fs::read_to_string(&tsv).unwrap();
        std::fs::remove_file(input).unwrap();
        std::fs::remove_file(tsv).unwrap();

        assert!(table.starts_with("\t\tc\ta\tt\n"));
        assert_eq!(table.lines().count(), 5);
    }
}
