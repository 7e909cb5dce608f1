use std::fs::File;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use capital_quiz::{Language, Quiz, QuizConfig, SelectionPolicy};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON dataset (continent -> country -> {country, capital}); built-in table if omitted
    #[arg(short, long)]
    dataset: Option<PathBuf>,

    /// How the country for each question is chosen
    #[arg(short, long, value_enum, default_value_t = Policy::ByContinent)]
    policy: Policy,

    /// Seed for a reproducible sequence of questions
    #[arg(short, long)]
    seed: Option<u64>,

    /// Show the summary after this many questions instead of playing forever
    #[arg(short, long)]
    rounds: Option<NonZeroUsize>,

    /// Language of the questions and feedback
    #[arg(short, long, value_enum, default_value_t = Lang::En)]
    lang: Lang,

    /// Write logs to this file (the terminal is taken by the quiz)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Policy {
    /// Random continent, then random country in it
    ByContinent,
    /// Every country equally likely
    Uniform,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Lang {
    En,
    Es,
}

impl From<&Args> for QuizConfig {
    fn from(args: &Args) -> Self {
        Self {
            policy: match args.policy {
                Policy::ByContinent => SelectionPolicy::ByContinent,
                Policy::Uniform => SelectionPolicy::Uniform,
            },
            seed: args.seed,
            rounds: args.rounds,
            language: match args.lang {
                Lang::En => Language::English,
                Lang::Es => Language::Spanish,
            },
        }
    }
}

fn setup_logging(path: &Path, verbose: bool) -> std::io::Result<()> {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(File::create(path)?))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        if let Err(e) = setup_logging(path, args.verbose) {
            eprintln!("Cannot open log file {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }

    let config = QuizConfig::from(&args);
    info!(?config, dataset = ?args.dataset, "starting");

    let quiz = match &args.dataset {
        Some(path) => Quiz::from_json(path, config),
        None => Quiz::embedded(config),
    };

    let result = quiz.and_then(Quiz::run);
    if let Err(e) = result {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
