//! Terminal quiz runner. Asks each question in order, scores the answers
//! and prints a summary at the end.

use std::io;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;
use deskmate::quiz::{self, Quiz};

/// Multiple-choice quiz in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON question file; the built-in set is used when omitted
    questions: Option<PathBuf>,

    /// Pause after each scored answer, in milliseconds
    #[arg(long, default_value_t = 1000)]
    delay_ms: u64,
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    if let Err(err) = run(args) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let questions = match &args.questions {
        Some(path) => quiz::load_questions(path)?,
        None => quiz::builtin_questions()?,
    };
    log::info!("starting a quiz with {} question(s)", questions.len());

    let quiz = Quiz::new(questions)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    quiz::runner::run(
        quiz,
        &mut input,
        &mut out,
        Duration::from_millis(args.delay_ms),
    )?;
    Ok(())
}
