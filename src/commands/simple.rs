//! Simple interactive CLI mode
//!
//! Line-based game without the TUI

use crate::game::Session;
use crate::output::{CREDITS, print_board, print_distribution, print_outcome};
use crate::scores::ScoreStore;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Run the simple interactive CLI mode until the player quits or input ends
///
/// Declining to play again returns control to the caller.
///
/// # Errors
///
/// Returns an error on I/O failure or if a new round cannot be started.
pub fn run_simple<S: ScoreStore, R: Rng>(
    session: &mut Session<S, R>,
    input: &mut impl BufRead,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════╗");
    println!("║                Word Guess                ║");
    println!("╚══════════════════════════════════════════╝");
    println!("{}\n", CREDITS.bright_black());

    println!("Guess the hidden five-letter word in six tries.");
    println!("  - {} letter is in the right spot", "green".green().bold());
    println!("  - {} letter is in the word, wrong spot", "yellow".yellow().bold());
    println!("  - {} letter is not in the word\n", "gray".bright_black().bold());
    println!("Commands: 'stats' for statistics, 'new' for a new word, 'quit' to exit\n");

    loop {
        let Some(line) = get_user_input("Guess", input)? else {
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "quit" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "stats" => {
                match session.distribution() {
                    Ok(dist) => print_distribution(&dist),
                    Err(e) => {
                        warn!(error = %e, "Could not load scores");
                        println!("{}\n", format!("❌ {e}").red());
                    }
                }
                continue;
            }
            "new" => {
                session.start_round()?;
                println!("\n🔄 New word chosen!\n");
                continue;
            }
            _ => {}
        }

        let turn = match session.submit_guess(&line) {
            Ok(turn) => turn,
            Err(e) if e.is_validation() => {
                println!("{}\n", format!("❌ {e}").red());
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        print_board(session.round());

        if let Some(warning) = &turn.warning {
            println!("{}", format!("⚠ {warning}; this win was not saved").yellow());
        }

        if turn.evaluated.outcome.is_finished() {
            print_outcome(&turn.evaluated.outcome);

            let again = get_user_input("Play again? (yes/no)", input)?.unwrap_or_default();
            if matches!(again.to_lowercase().as_str(), "yes" | "y") {
                session.start_round()?;
                println!("\n🔄 New game started!\n");
            } else {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Get user input with a prompt, `None` at end of input
fn get_user_input(prompt: &str, input: &mut impl BufRead) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Outcome;
    use crate::scores::{FileScoreStore, MemoryScoreStore, Score};
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn session() -> Session<MemoryScoreStore, StdRng> {
        Session::new(
            words_from_slice(&["crane"]),
            MemoryScoreStore::new(),
            StdRng::seed_from_u64(0),
        )
        .unwrap()
    }

    #[test]
    fn win_then_decline_records_score() {
        let mut session = session();
        let mut input = Cursor::new("slate\ncrane\nno\n");

        run_simple(&mut session, &mut input).unwrap();

        assert_eq!(session.outcome(), &Outcome::Won { attempts: 2 });
        assert_eq!(session.scores().unwrap(), vec![Score::new(2).unwrap()]);
    }

    #[test]
    fn invalid_guesses_do_not_count() {
        let mut session = session();
        let mut input = Cursor::new("ab\nab12c\nslate\n");

        run_simple(&mut session, &mut input).unwrap();

        assert_eq!(session.round().attempt_count(), 1);
    }

    #[test]
    fn play_again_starts_fresh_round() {
        let mut session = session();
        let mut input = Cursor::new("crane\nyes\nslate\nquit\n");

        run_simple(&mut session, &mut input).unwrap();

        assert_eq!(session.round().attempt_count(), 1);
        assert_eq!(session.outcome(), &Outcome::InProgress);
    }

    #[test]
    fn unreadable_scores_do_not_end_the_game() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.txt");
        std::fs::write(&path, "3\nfour\n").unwrap();

        let mut session = Session::new(
            words_from_slice(&["crane"]),
            FileScoreStore::new(&path),
            StdRng::seed_from_u64(0),
        )
        .unwrap();
        let mut input = Cursor::new("slate\nstats\nirate\ncrane\nno\n");

        run_simple(&mut session, &mut input).unwrap();

        assert_eq!(session.round().attempt_count(), 3);
        assert_eq!(session.outcome(), &Outcome::Won { attempts: 3 });
    }

    #[test]
    fn end_of_input_returns() {
        let mut session = session();
        let mut input = Cursor::new("");
        run_simple(&mut session, &mut input).unwrap();
        assert_eq!(session.round().attempt_count(), 0);
    }
}
