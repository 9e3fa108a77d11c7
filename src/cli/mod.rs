//! Command-line interface for langtour
//!
//! One default command (`run`) that prints the lesson transcript, plus an
//! `add` command exposing the lesson's addition helper on arbitrary
//! operands. Transcript output goes to stdout; everything else to stderr.

use crate::info_print;
use crate::math::{add_numbers, parse_operand};
use crate::output::{self, OutputFormat};
use crate::tour::{Section, Tour, Transcript};
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use tracing::debug;

/// Console walkthrough of programming-language basics
#[derive(Debug, Parser)]
#[command(name = "langtour", version, about)]
pub struct Cli {
    /// Suppress status output on stderr
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands. No subcommand means `run` with defaults.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the lesson walkthrough
    Run(RunArgs),
    /// Add two integers the way the lesson's methods section does
    Add {
        /// Left operand
        a: String,
        /// Right operand
        b: String,
    },
}

/// Arguments for the `run` command.
#[derive(Debug, Default, Args)]
pub struct RunArgs {
    /// Run a single section (variables, if-else, for-loop, methods)
    #[arg(long)]
    pub section: Option<Section>,

    /// Print the transcript as one JSON document instead of lesson text
    #[arg(long)]
    pub json: bool,

    /// Override the name greeted by the lesson
    #[arg(long)]
    pub name: Option<String>,

    /// Override the age used by the lesson's if/else branch
    #[arg(long)]
    pub age: Option<i64>,
}

/// Execute the parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    output::set_quiet(cli.quiet);

    match cli.command.unwrap_or(Command::Run(RunArgs::default())) {
        Command::Run(args) => run_tour(args),
        Command::Add { a, b } => run_add(&a, &b),
    }
}

fn run_tour(args: RunArgs) -> Result<()> {
    let mut tour = Tour::default();
    if let Some(name) = args.name {
        debug!(%name, "name override");
        tour.name = name;
    }
    if let Some(age) = args.age {
        debug!(age, "age override");
        tour.age = age;
    }

    let transcript = match args.section {
        Some(section) => {
            info_print!("Running single section: {}", section);
            tour.section_transcript(section)
        }
        None => tour.transcript(),
    };

    emit(&transcript, OutputFormat::from_json_flag(args.json))
}

/// Write a transcript to stdout in the requested format.
fn emit(transcript: &Transcript, format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => transcript.write_text(&mut out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, transcript)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn run_add(a: &str, b: &str) -> Result<()> {
    let lhs = parse_operand(a)?;
    let rhs = parse_operand(b)?;
    let sum = add_numbers(lhs, rhs);
    println!("The sum of {} and {} is: {}", lhs, rhs, sum);
    Ok(())
}
