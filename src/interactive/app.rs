//! TUI application state and logic

use crate::game::{Outcome, Session};
use crate::scores::{ScoreDistribution, ScoreStore};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::warn;

/// Longest input accepted into the guess box
const MAX_INPUT: usize = 16;

/// Application state
pub struct App<S: ScoreStore> {
    pub session: Session<S, StdRng>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub distribution: ScoreDistribution,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
    Statistics,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Warning,
    Error,
}

impl<S: ScoreStore> App<S> {
    #[must_use]
    pub fn new(session: Session<S, StdRng>) -> Self {
        let mut app = Self {
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            input_mode: InputMode::Guessing,
            distribution: ScoreDistribution::default(),
            should_quit: false,
        };
        app.add_message(
            "Guess the five-letter word in six tries.",
            MessageStyle::Info,
        );
        app
    }

    /// Submit the input buffer as a guess
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        let turn = match self.session.submit_guess(&input) {
            Ok(turn) => turn,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        if let Some(warning) = &turn.warning {
            self.add_message(
                &format!("{warning}; this win was not saved"),
                MessageStyle::Warning,
            );
        }

        match &turn.evaluated.outcome {
            Outcome::InProgress => {}
            Outcome::Won { attempts } => {
                self.input_mode = InputMode::RoundOver;
                let celebration = match *attempts {
                    1 => "🎯 HOLE IN ONE!",
                    2 => "🔥 MAGNIFICENT! Two guesses!",
                    3 => "✨ SPLENDID! Three guesses!",
                    4 => "👏 GREAT JOB! Four guesses!",
                    5 => "🎉 NICE WORK! Five guesses!",
                    _ => "😅 PHEW! Got it in six!",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' to play again or 'q' to quit.", MessageStyle::Info);
            }
            Outcome::Lost { answer } => {
                self.input_mode = InputMode::RoundOver;
                self.add_message(
                    &format!("Correct answer: {}", answer.text().to_uppercase()),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' to play again or 'q' to quit.", MessageStyle::Info);
            }
        }
    }

    pub fn new_game(&mut self) {
        if let Err(e) = self.session.start_round() {
            self.add_message(&e.to_string(), MessageStyle::Error);
            return;
        }
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New word chosen. Good luck!", MessageStyle::Info);
    }

    pub fn open_statistics(&mut self) {
        self.refresh_distribution();
        self.input_mode = InputMode::Statistics;
    }

    /// Leave the statistics view for whichever mode the round is in
    pub fn close_statistics(&mut self) {
        self.input_mode = if self.session.outcome().is_finished() {
            InputMode::RoundOver
        } else {
            InputMode::Guessing
        };
    }

    pub fn clear_scores(&mut self) {
        match self.session.clear_scores() {
            Ok(()) => self.add_message("Scores cleared.", MessageStyle::Info),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
        self.refresh_distribution();
    }

    fn refresh_distribution(&mut self) {
        match self.session.distribution() {
            Ok(dist) => self.distribution = dist,
            Err(e) => {
                warn!(error = %e, "Could not load scores");
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab => self.open_statistics(),
                KeyCode::Enter => self.submit_input(),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Char(c) => {
                    if self.input_buffer.chars().count() < MAX_INPUT {
                        self.input_buffer.push(c);
                    }
                }
                _ => {}
            },
            InputMode::RoundOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n' | 'y') | KeyCode::Enter => self.new_game(),
                KeyCode::Tab | KeyCode::Char('s') => self.open_statistics(),
                _ => {}
            },
            InputMode::Statistics => match key.code {
                KeyCode::Char('c') => self.clear_scores(),
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Tab | KeyCode::Esc => self.close_statistics(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: ScoreStore>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: ScoreStore>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
