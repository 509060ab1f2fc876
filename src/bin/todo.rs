//! Interactive to-do list over a JSON task file.

use std::io;
use std::process;

use clap::Parser;
use deskmate::todo::{menu, JsonFileStore, TaskList, TaskStore};

/// To-do list with a numbered menu, stored as a JSON file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Task file to use instead of the default location
    #[arg(long)]
    file: Option<String>,
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
    let store = match &args.file {
        Some(path) => JsonFileStore::from_user_path(path),
        None => JsonFileStore::new(JsonFileStore::default_path()),
    };
    log::info!("using task file {}", store.path().display());

    // Load failures degrade to an empty list instead of aborting.
    let tasks = match store.load() {
        Ok(tasks) => tasks,
        Err(err) => {
            eprintln!("Warning: could not read the task file: {}", err);
            Vec::new()
        }
    };

    let mut list = TaskList::new(Box::new(store), tasks);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    menu::run(&mut list, &mut input, &mut out)?;
    Ok(())
}
