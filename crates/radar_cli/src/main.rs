//! Radar CLI
//!
//! Raw season statistics JSON → radar attribute JSON, from the command
//! line. Input files hold one player's raw statistics record; a literal
//! JSON `null` is a valid "unknown player" input.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use radar_core::api::CompareResponse;
use radar_core::{RadarDiff, RawSeasonStats, StatNormalizer};

#[derive(Parser)]
#[command(name = "radar")]
#[command(about = "Normalize raw football season statistics into radar attributes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize one player's raw statistics
    Normalize {
        /// Input JSON file (stdin when omitted)
        #[arg(long)]
        r#in: Option<PathBuf>,

        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Pretty-print the output JSON
        #[arg(long, default_value = "false")]
        pretty: bool,
    },

    /// Compare two players' raw statistics
    Compare {
        /// First player's raw statistics JSON file
        #[arg(long)]
        first: PathBuf,

        /// Second player's raw statistics JSON file
        #[arg(long)]
        second: PathBuf,

        /// Pretty-print the output JSON
        #[arg(long, default_value = "false")]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize { r#in, out, pretty } => run_normalize(r#in, out, pretty),
        Commands::Compare { first, second, pretty } => run_compare(&first, &second, pretty),
    }
}

fn run_normalize(input: Option<PathBuf>, out: Option<PathBuf>, pretty: bool) -> Result<()> {
    let text = match &input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer).context("failed to read stdin")?;
            buffer
        }
    };

    // `null` is a valid body meaning "unknown player".
    let stats: Option<RawSeasonStats> =
        serde_json::from_str(&text).context("invalid raw statistics JSON")?;
    let attributes = StatNormalizer::normalize(stats.as_ref());

    let json = if pretty {
        serde_json::to_string_pretty(&attributes)?
    } else {
        serde_json::to_string(&attributes)?
    };

    match out {
        Some(path) => std::fs::write(&path, json)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{}", json),
    }
    Ok(())
}

fn run_compare(first: &PathBuf, second: &PathBuf, pretty: bool) -> Result<()> {
    let first_stats = read_stats(first)?;
    let second_stats = read_stats(second)?;

    let first_attrs = StatNormalizer::normalize(first_stats.as_ref());
    let second_attrs = StatNormalizer::normalize(second_stats.as_ref());
    let diff = RadarDiff::between(&first_attrs, &second_attrs);

    let report = CompareResponse {
        total_diff: diff.total_diff(),
        biggest_strength: diff.biggest_strength().into(),
        biggest_weakness: diff.biggest_weakness().into(),
        first: first_attrs,
        second: second_attrs,
        diff,
    };

    let json =
        if pretty { serde_json::to_string_pretty(&report)? } else { serde_json::to_string(&report)? };
    println!("{}", json);
    Ok(())
}

fn read_stats(path: &PathBuf) -> Result<Option<RawSeasonStats>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("invalid raw statistics JSON in {}", path.display()))
}
