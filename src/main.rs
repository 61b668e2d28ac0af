//! Word Guess - CLI
//!
//! Wordle-style guessing game with TUI and simple text modes.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use tracing::info;
use word_guess::{
    commands::{check_guess, clear_scores, load_distribution, run_simple},
    config::{Config, DEFAULT_SCORES_PATH},
    game::Session,
    output::{print_check_result, print_distribution},
    scores::FileScoreStore,
};

#[derive(Parser)]
#[command(
    name = "word_guess",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file (one word per line); defaults to the built-in list
    #[arg(short = 'w', long, global = true, env = "WORD_GUESS_WORDS")]
    words: Option<PathBuf>,

    /// Score file (one winning attempt count per line)
    #[arg(long, global = true, env = "WORD_GUESS_SCORES", default_value = DEFAULT_SCORES_PATH)]
    scores: PathBuf,

    /// Seed for reproducible answers
    #[arg(long, global = true, env = "WORD_GUESS_SEED")]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without the TUI
    Simple,

    /// Show feedback for a guess against a chosen answer
    Check {
        /// The guess to score
        guess: String,

        /// The answer to score against
        answer: String,
    },

    /// Show the distribution of recorded scores
    Stats,

    /// Erase all recorded scores
    ClearScores,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            words_path: self.words.clone(),
            scores_path: self.scores.clone(),
            seed: self.seed,
            verbosity: self.verbose,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    tracing_subscriber::fmt()
        .with_max_level(config.log_level())
        .with_writer(io::stderr)
        .init();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Check { guess, answer } => run_check_command(&guess, &answer),
        Commands::Stats => run_stats_command(&config),
        Commands::ClearScores => run_clear_scores_command(&config),
    }
}

fn new_session(config: &Config) -> Result<Session<FileScoreStore, StdRng>> {
    let vocabulary = config.load_vocabulary()?;
    info!(words = vocabulary.len(), "Vocabulary loaded");
    Ok(Session::new(vocabulary, config.score_store(), config.rng())?)
}

fn run_play_command(config: &Config) -> Result<()> {
    use word_guess::interactive::{App, run_tui};

    let app = App::new(new_session(config)?);
    run_tui(app)
}

fn run_simple_command(config: &Config) -> Result<()> {
    let mut session = new_session(config)?;
    run_simple(&mut session, &mut io::stdin().lock())
}

fn run_check_command(guess: &str, answer: &str) -> Result<()> {
    let result = check_guess(guess, answer)?;
    print_check_result(&result.guess, &result.answer, &result.feedback);
    Ok(())
}

fn run_stats_command(config: &Config) -> Result<()> {
    let dist = load_distribution(&config.score_store())?;
    print_distribution(&dist);
    Ok(())
}

fn run_clear_scores_command(config: &Config) -> Result<()> {
    let removed = clear_scores(&mut config.score_store())?;
    println!("Cleared {removed} recorded score(s).");
    Ok(())
}
