//! TUI rendering with ratatui
//!
//! The board shows one row per attempt slot; colors come from each letter's
//! classification.

use super::app::{App, InputMode, MessageStyle};
use crate::core::LetterResult;
use crate::game::{MAX_ATTEMPTS, Outcome};
use crate::output::CREDITS;
use crate::scores::ScoreStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, BorderType, Borders, List, ListItem, Paragraph},
};

const BAR_LABELS: [&str; MAX_ATTEMPTS as usize] = ["1", "2", "3", "4", "5", "6"];

/// Main UI rendering function
pub fn ui<S: ScoreStore>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(10),    // Main content
            Constraint::Length(3),  // Input area
            Constraint::Length(1),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    if app.input_mode == InputMode::Statistics {
        render_statistics(f, app, main_chunks[0]);
    } else {
        render_board(f, app, main_chunks[0]);
    }
    render_messages(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            "WORD GUESS",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {CREDITS}"), Style::default().fg(Color::DarkGray)),
    ]);
    let header = Paragraph::new(title)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile_style(result: LetterResult) -> Style {
    match result {
        LetterResult::Exact => Style::default()
            .fg(Color::White)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterResult::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterResult::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_board<S: ScoreStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let attempts = app.session.round().attempts();

    let mut lines = vec![Line::from("")];
    for slot in 0..usize::from(MAX_ATTEMPTS) {
        let mut spans = vec![Span::styled(
            format!("  {}/{MAX_ATTEMPTS}  ", slot + 1),
            Style::default().fg(Color::DarkGray),
        )];

        if let Some(attempt) = attempts.get(slot) {
            for (c, &result) in attempt
                .guess
                .text()
                .chars()
                .zip(attempt.feedback.results())
            {
                spans.push(Span::styled(
                    format!(" {} ", c.to_ascii_uppercase()),
                    tile_style(result),
                ));
                spans.push(Span::raw(" "));
            }
        } else {
            spans.push(Span::styled(
                " _   _   _   _   _ ",
                Style::default().fg(Color::DarkGray),
            ));
        }

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let title = match app.session.outcome() {
        Outcome::InProgress => format!(
            " Board: {} guesses left ",
            app.session.round().remaining_attempts()
        ),
        Outcome::Won { attempts } => format!(" Solved in {attempts}/{MAX_ATTEMPTS} "),
        Outcome::Lost { answer } => format!(" Answer: {} ", answer.text().to_uppercase()),
    };

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_statistics<S: ScoreStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(5)])
        .split(area);

    let dist = &app.distribution;
    let summary = vec![
        Line::from(format!("Wins: {}", dist.total())),
        Line::from(match dist.mean() {
            Some(mean) => format!("Average: {mean:.2} guesses"),
            None => "Average: -".to_string(),
        }),
    ];
    let summary = Paragraph::new(summary).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(summary, chunks[0]);

    let data: Vec<(&str, u64)> = BAR_LABELS
        .iter()
        .zip(dist.iter())
        .map(|(&label, (_, count))| (label, count as u64))
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Score Distribution ")
                .borders(Borders::ALL),
        )
        .data(data.as_slice())
        .bar_width(5)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::Gray))
        .value_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(chart, chunks[1]);
}

fn render_messages<S: ScoreStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Warning => Style::default().fg(Color::Yellow),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<S: ScoreStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Guessing => (
            " Enter your guess | Enter to submit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::RoundOver => (" Play again? 'n' new game | 'q' quit ", "", Color::Green),
        InputMode::Statistics => (" Statistics | 'c' clear scores | Tab back ", "", Color::Cyan),
    };

    let input = Paragraph::new(content.to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<S: ScoreStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let help_text = match app.input_mode {
        InputMode::Guessing => "Esc: Quit | Tab: Statistics | Enter: Submit",
        InputMode::RoundOver => "q: Quit | n: New Game | s: Statistics",
        InputMode::Statistics => "q: Quit | c: Clear Scores | Tab/Esc: Back",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Session;
    use crate::scores::MemoryScoreStore;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App<MemoryScoreStore> {
        let session = Session::new(
            words_from_slice(&["crane"]),
            MemoryScoreStore::new(),
            StdRng::seed_from_u64(0),
        )
        .unwrap();
        App::new(session)
    }

    fn rendered(app: &App<MemoryScoreStore>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn board_shows_submitted_guess() {
        let mut app = app();
        app.input_buffer = "slate".to_string();
        app.submit_input();

        let screen = rendered(&app);
        assert!(screen.contains("WORD GUESS"));
        assert!(screen.contains("Michael Rutherford"));
        assert!(screen.contains(" S "));
        assert!(screen.contains("5 guesses left"));
    }

    #[test]
    fn statistics_view_renders() {
        let mut app = app();
        app.input_buffer = "crane".to_string();
        app.submit_input();
        app.open_statistics();

        let screen = rendered(&app);
        assert!(screen.contains("Score Distribution"));
        assert!(screen.contains("Wins: 1"));
    }
}
