use std::fmt;
use std::path::PathBuf;

use bank::{JsonBank, QuestionSource};
use quiz_core::model::QuestionPool;
use services::QuizRunner;
use ui::TerminalPrompter;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidBankPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidBankPath { raw } => write!(f, "invalid --bank value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--bank <path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --bank questions.json");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_BANK");
}

struct Args {
    bank_path: PathBuf,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut bank_path = std::env::var("QUIZ_BANK")
            .ok()
            .map_or_else(|| PathBuf::from("questions.json"), PathBuf::from);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--bank" => {
                    let value = require_value(args, "--bank")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidBankPath { raw: value });
                    }
                    bank_path = PathBuf::from(value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { bank_path })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let questions = JsonBank::new(&args.bank_path).load()?;
    let pool = QuestionPool::new(questions);
    log::info!("loaded {} questions from {}", pool.len(), args.bank_path.display());

    let mut prompter = TerminalPrompter::stdio();
    prompter.welcome();

    let mut runner = QuizRunner::new(&pool, rand::rng());
    log::info!("maximum achievable score: {}", runner.max_score());

    let report = runner.run(&mut prompter);
    prompter.summary(&report);

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
