use anyhow::{Context, Result};
use chrono::{Local, SubsecRound, Utc};
use clap::Parser;
use crossterm::style::Stylize;
use hive_core::config::{
    parse_count, parse_start_date, PipelineConfig, DEFAULT_DICTIONARY_PATH, DEFAULT_FREQUENCY_PATH,
    DEFAULT_OUTPUT_PATH,
};
use hive_core::core::engine::{run, CurationReport};
use hive_core::core::types::Difficulty;
use hive_core::persistence::PublishOutcome;
use std::path::PathBuf;

/// Curate a dated schedule of seven-letter word puzzles from a dictionary.
#[derive(Parser, Debug)]
#[command(name = "hive_curate", version, about)]
struct Cli {
    /// First puzzle date (YYYY-MM-DD). Invalid values fall back to today.
    #[arg(long)]
    start: Option<String>,

    /// Number of puzzles to schedule. Invalid values fall back to 60.
    #[arg(long)]
    count: Option<String>,

    /// Dictionary JSON ({"version", "words"})
    #[arg(long, default_value = DEFAULT_DICTIONARY_PATH)]
    dictionary: PathBuf,

    /// Word frequency TSV with "word" and "zipf" columns; may be absent
    #[arg(long, default_value = DEFAULT_FREQUENCY_PATH)]
    frequency: PathBuf,

    /// Where the schedule JSON is published
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Curate and report without writing the schedule
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("hive_core=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let today = Local::now().date_naive();
    let config = PipelineConfig {
        dictionary_path: cli.dictionary,
        frequency_path: cli.frequency,
        output_path: cli.output,
        start_date: parse_start_date(cli.start.as_deref(), today),
        count: parse_count(cli.count.as_deref()),
        dry_run: cli.dry_run,
    };

    let (curation, outcome) = run(&config, Utc::now().trunc_subsecs(3))
        .with_context(|| format!("puzzle build failed for {}", config.dictionary_path.display()))?;

    print_summary(&curation.report, outcome, &config);
    Ok(())
}

fn print_summary(report: &CurationReport, outcome: Option<PublishOutcome>, config: &PipelineConfig) {
    println!("{}", "Puzzle build complete".bold());
    println!(
        "  candidates={} eligible={} published={} (requested {})",
        report.base_candidates, report.eligible, report.published, config.count
    );

    let mix: Vec<String> = Difficulty::ALL
        .iter()
        .map(|&d| {
            let label = format!("{d}={}", report.difficulty_mix.get(d));
            match d {
                Difficulty::Simple => label.green().to_string(),
                Difficulty::Medium => label.yellow().to_string(),
                Difficulty::Hard => label.red().to_string(),
            }
        })
        .collect();
    println!("  difficulty mix {}", mix.join(" "));

    if report.shortages.total() > 0 {
        println!(
            "  {} simple={} medium={} hard={}",
            "quota shortfall".yellow(),
            report.shortages.simple,
            report.shortages.medium,
            report.shortages.hard
        );
    }
    println!(
        "  borrowed={} fallback={} frequency rows={}",
        report.borrowed, report.fallback, report.frequency_rows
    );

    let status = match outcome {
        Some(PublishOutcome::Written) => format!("written to {}", config.output_path.display()).green(),
        Some(PublishOutcome::Unchanged) => "unchanged, write skipped".to_string().dark_grey(),
        None => "dry run, nothing written".to_string().dark_grey(),
    };
    println!("  schedule {status}");
}
