use quiz_practice::question::{AnsweredRecord, WrongAnswerRecord};
use quiz_practice::report::render_summary;
use quiz_practice::statistics::HistorySummary;
use quiz_practice::storage::{HISTORY_KEY, SqliteStore, WRONG_ANSWERS_KEY, load_collection};
use std::env;
use std::path::Path;

fn main() {
    let args: Vec<String> = env::args().collect();
    let no_color = args.iter().any(|a| a == "--no-color");
    let positional: Vec<&String> = args.iter().skip(1).filter(|a| !a.starts_with("--")).collect();

    if positional.len() != 1 {
        eprintln!("Usage: {} <store_file> [--no-color]", args[0]);
        eprintln!();
        eprintln!("Summarizes the answer history saved by quiz_practice.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  <store_file>  Path to the SQLite store file");
        eprintln!("  --no-color    Disable colored output");
        eprintln!();
        eprintln!("Example: {} ~/quiz_practice.db", args[0]);
        std::process::exit(1);
    }

    let db_path = positional[0];
    if !Path::new(db_path).exists() {
        eprintln!("Error opening store: {} does not exist", db_path);
        std::process::exit(1);
    }

    let store = match SqliteStore::open(db_path) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error opening store: {}", e);
            std::process::exit(1);
        }
    };

    let history: Vec<AnsweredRecord> = load_collection(&store, HISTORY_KEY);
    let wrong_answers: Vec<WrongAnswerRecord> = load_collection(&store, WRONG_ANSWERS_KEY);

    let summary = HistorySummary::from_history(&history);
    println!("{}", render_summary(&summary, wrong_answers.len(), !no_color));
}
