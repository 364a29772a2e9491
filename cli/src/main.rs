//! pdfdigest CLI - heading and snippet digests for PDF collections

use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdfdigest::{
    run_batch_with, BatchEntry, CollectionProcessor, JsonFormat, LopdfSource, DEFAULT_COLLECTIONS,
};

#[derive(Parser)]
#[command(name = "pdfdigest")]
#[command(author = "iyulab")]
#[command(version)]
#[command(
    about = "Rank headings and snippets of PDF collections for a persona and task",
    long_about = None
)]
struct Cli {
    /// Directory containing the collections (defaults to the executable's directory)
    #[arg(long, value_name = "DIR", env = "PDFDIGEST_BASE")]
    base: Option<PathBuf>,

    /// Collection directory name; repeat to process several
    #[arg(short, long = "collection", value_name = "NAME")]
    collections: Vec<String>,

    /// Write compact JSON
    #[arg(long)]
    compact: bool,

    /// Skip unreadable pages instead of failing the whole document
    #[arg(long)]
    lenient: bool,

    /// Only print errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.quiet { "error" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let base = match cli.base {
        Some(base) => base,
        None => executable_dir()?,
    };

    let names: Vec<String> = if cli.collections.is_empty() {
        DEFAULT_COLLECTIONS.iter().map(|s| s.to_string()).collect()
    } else {
        cli.collections
    };

    let format = if cli.compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let source = if cli.lenient {
        LopdfSource::new().lenient()
    } else {
        LopdfSource::new()
    };
    let processor = CollectionProcessor::with_source(source).with_json_format(format);

    let pb = if cli.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(names.len() as u64)
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let summary = run_batch_with(&processor, &base, &names, |entry| {
        match entry {
            BatchEntry::Written { name, run } => {
                let tally = run.tally;
                pb.println(format!(
                    "{} {} {}",
                    "Processed".green(),
                    name.bold(),
                    format!(
                        "({} read, {} missing, {} failed)",
                        tally.processed, tally.missing, tally.failed
                    )
                    .dimmed()
                ));
                pb.println(format!("  {} {}", "└─".dimmed(), run.output_path.display()));
            }
            BatchEntry::Skipped { name, .. } => {
                pb.println(format!(
                    "{} {} folder not found",
                    "Skipped:".yellow(),
                    name
                ));
            }
        }
        pb.inc(1);
    });
    pb.finish_and_clear();
    let summary = summary?;

    if !cli.quiet {
        println!(
            "\n{} {} written, {} skipped",
            "Done!".green().bold(),
            summary.written().count(),
            summary.skipped().count()
        );
    }

    Ok(())
}

/// Directory containing the running executable.
fn executable_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let exe = std::env::current_exe()?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}
