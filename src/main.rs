//! Calendar Puzzle Runner
//!
//! Reads a puzzle input file and prints the answer to one or both parts of the
//! chosen day. Diagnostics go to stderr through `tracing`; answers go to
//! stdout.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;

use reflector::{puzzle, Part, PUZZLES};

/// Solves calendar puzzles built on grid search and cycle detection.
#[derive(Parser)]
#[command(name = "reflector")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log more detail to stderr (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a day's puzzle from an input file.
    Solve {
        /// Calendar day to run.
        #[arg(short, long)]
        day: u8,
        /// Part to run, both if omitted.
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
        part: Option<u8>,
        /// Puzzle input file.
        input: PathBuf,
    },
    /// List the supported days.
    List,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Command::Solve { day, part, input }) => run_solve(day, part, &input),
        Some(Command::List) | None => {
            run_list();
            Ok(())
        }
    }
}

/// Installs a stderr subscriber; warnings only unless `-v` is given.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs the selected part(s) of a day and prints each answer.
fn run_solve(day: u8, part: Option<u8>, input: &Path) -> anyhow::Result<()> {
    let puzzle = puzzle(day).ok_or_else(|| anyhow!("day {day} is not supported"))?;
    let text = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let lines: Vec<&str> = text.lines().collect();

    let parts = match part {
        Some(1) => vec![(1, Part::One)],
        Some(_) => vec![(2, Part::Two)],
        None => vec![(1, Part::One), (2, Part::Two)],
    };

    println!("Day {}: {}", puzzle.day(), puzzle.title());
    for (number, part) in parts {
        let answer = puzzle
            .solve(part, &lines)
            .with_context(|| format!("day {day} part {number} failed"))?;
        println!("Part {number}: {answer}");
    }
    Ok(())
}

/// Prints the supported days.
fn run_list() {
    for puzzle in PUZZLES {
        println!("{:>2}  {}", puzzle.day(), puzzle.title());
    }
}
