use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use quiz_bank::{BankError, load_questions_from_json, ops};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// CSV summary (id, name, option count, points, published).
    Csv,
    /// Question names, one per line.
    Names,
    /// Total points as a single number.
    Points,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from
    #[arg(short, long)]
    questions: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Only include published questions
    #[arg(short, long)]
    published_only: bool,

    /// Write the output to a file instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn run(args: Args) -> Result<(), BankError> {
    let mut bank = load_questions_from_json(&args.questions)?;
    if args.published_only {
        bank = ops::published(&bank);
    }
    log::info!("loaded {} questions", bank.len());

    let output = match args.format {
        Format::Csv => ops::to_csv(&bank),
        Format::Names => ops::names(&bank).join("\n"),
        Format::Points => ops::sum_points(&bank).to_string(),
    };

    match args.out {
        Some(path) => fs::write(path, output + "\n")?,
        None => println!("{}", output),
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
