use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    engine::{RoundOutcome, MAX_GUESSES},
    input::normalize_guess,
    App, AppState,
};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 2;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let game = &self.game;
        let round = game.round();

        // styles
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let green_bold_style = Style::default().patch(bold_style).fg(Color::Green);
        let red_bold_style = Style::default().patch(bold_style).fg(Color::Red);
        let dim_style = Style::default().add_modifier(Modifier::DIM);
        let italic_dim_style = Style::default()
            .patch(dim_style)
            .add_modifier(Modifier::ITALIC);

        let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1);
        let status_lines =
            ((self.status_message.width() as f64 / max_chars_per_line as f64).ceil() as u16).max(1);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([
                Constraint::Length(2),            // session counters
                Constraint::Min(1),               // spacer
                Constraint::Length(status_lines), // status message
                Constraint::Length(1),            // padding
                Constraint::Length(1),            // revealed pattern
                Constraint::Length(1),            // padding
                Constraint::Length(1),            // letters tried
                Constraint::Length(1),            // entry box / advance prompt
                Constraint::Min(1),               // spacer
                Constraint::Length(1),            // petal row
                Constraint::Length(1),            // key hints
            ])
            .split(area);

        // Session counters, two per corner like a scoreboard.
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[0]);

        Paragraph::new(vec![
            Line::from(format!("Words Guessed: {}", game.words_guessed())),
            Line::from(format!("Words Missed: {}", game.words_missed())),
        ])
        .alignment(Alignment::Left)
        .render(halves[0], buf);

        Paragraph::new(vec![
            Line::from(format!("Words to Guess: {}", game.words_remaining())),
            Line::from(format!("Words in Game: {}", game.total_words())),
        ])
        .alignment(Alignment::Right)
        .render(halves[1], buf);

        // Status message, colored by how the round stands.
        let status_style = match round.map(|r| r.outcome) {
            Some(RoundOutcome::Won) => green_bold_style,
            Some(RoundOutcome::Lost) => red_bold_style,
            _ => bold_style,
        };
        Paragraph::new(Span::styled(self.status_message.clone(), status_style))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(chunks[2], buf);

        // The word being uncovered.
        if let Some(round) = round {
            Paragraph::new(Span::styled(round.revealed_pattern(), bold_style))
                .alignment(Alignment::Center)
                .render(chunks[4], buf);

            // Letters tried so far, hits green and misses red.
            if !round.letters_guessed.is_empty() {
                let mut spans = vec![Span::styled("Tried: ", dim_style)];
                for letter in &round.letters_guessed {
                    let style = if round.is_miss(*letter) {
                        red_bold_style
                    } else {
                        green_bold_style
                    };
                    spans.push(Span::styled(format!("{letter} "), style));
                }
                Paragraph::new(Line::from(spans))
                    .alignment(Alignment::Center)
                    .render(chunks[6], buf);
            }
        }

        // Entry box while guessing, advance prompt once the round ends.
        let action_line = match self.state {
            AppState::Guessing => {
                let pending = normalize_guess(&self.guess_buffer)
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "_".to_string());
                Line::from(vec![
                    Span::raw("Guess a Letter: "),
                    Span::styled(pending, bold_style.add_modifier(Modifier::UNDERLINED)),
                ])
            }
            AppState::RoundOver => {
                let prompt = if game.session_complete() {
                    "Press (enter) to Play Again"
                } else {
                    "Press (enter) for Another Word"
                };
                Line::from(Span::styled(prompt, bold_style))
            }
        };
        Paragraph::new(action_line)
            .alignment(Alignment::Center)
            .render(chunks[7], buf);

        // The flower: one petal per remaining guess. The petal that
        // just wilted flashes before settling into a dim stem mark.
        let remaining = round.map(|r| r.guesses_remaining).unwrap_or(MAX_GUESSES);
        let mut petals: Vec<Span> = Vec::with_capacity(MAX_GUESSES);
        for slot in 0..MAX_GUESSES {
            if slot < remaining {
                petals.push(Span::styled("✿ ", Style::default().fg(Color::Magenta)));
            } else if slot == remaining && self.flash_ticks > 0 {
                petals.push(Span::styled("✗ ", red_bold_style));
            } else {
                petals.push(Span::styled("· ", dim_style));
            }
        }
        Paragraph::new(Line::from(petals))
            .alignment(Alignment::Center)
            .render(chunks[9], buf);

        let hints = match self.state {
            AppState::Guessing => "(enter) guess (esc) quit",
            AppState::RoundOver => "(n / enter) next word (esc) quit",
        };
        Paragraph::new(Span::styled(hints, italic_dim_style))
            .alignment(Alignment::Center)
            .render(chunks[10], buf);
    }
}
