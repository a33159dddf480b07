use crossterm::event::{KeyCode, KeyEvent};
use quizboard_core::board::TileKey;
use quizboard_core::session::MIN_WAGER;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Widget};

use crate::theme::Theme;

/// Largest amount the input accepts; further digits are ignored
const AMOUNT_CAP: i64 = 1_000_000;

/// Modal wager entry for a daily double. Owns the typed amount and its
/// own key handling; the host locks whatever comes back from Enter
/// (the session clamps it to the real bounds).
pub struct WagerPanel {
    key: TileKey,
    team: usize,
    team_score: i64,
    amount: i64,
}

impl WagerPanel {
    pub fn new(key: TileKey, team: usize, team_score: i64) -> Self {
        Self {
            key,
            team,
            team_score,
            amount: MIN_WAGER,
        }
    }

    pub fn key(&self) -> TileKey {
        self.key
    }

    /// Feed a key press. Returns the amount to lock on Enter; every
    /// other key either edits the amount or is swallowed, so board
    /// shortcuts stay inert while the modal is up.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<i64> {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let digit = i64::from(c as u8 - b'0');
                let next = self.amount * 10 + digit;
                if next <= AMOUNT_CAP {
                    self.amount = next;
                }
                None
            }
            KeyCode::Backspace => {
                self.amount /= 10;
                None
            }
            KeyCode::Enter => Some(self.amount),
            _ => None,
        }
    }
}

impl Widget for &WagerPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = 44u16.min(area.width);
        let height = 9u16.min(area.height);
        let panel = Rect::new(
            area.x + (area.width.saturating_sub(width)) / 2,
            area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        );

        Clear.render(panel, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Theme::GOLD))
            .style(Style::default().bg(Theme::PANEL_BG))
            .title(Line::from(Span::styled(
                " DAILY DOUBLE ",
                Style::default()
                    .fg(Theme::GOLD)
                    .add_modifier(Modifier::BOLD),
            )))
            .title_alignment(Alignment::Center)
            .padding(Padding::uniform(1));
        let inner = block.inner(panel);
        block.render(panel, buf);

        let ceiling = self.team_score.max(MIN_WAGER);
        let lines = vec![
            Line::from(Span::styled(
                format!("Team {} wagers", self.team + 1),
                Style::default().fg(Theme::MUTED_TEXT),
            )),
            Line::from(Span::styled(
                format!("${}", self.amount),
                Style::default()
                    .fg(Theme::MONEY_COLOR)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("min ${}  \u{00b7}  max ${}", MIN_WAGER, ceiling),
                Style::default().fg(Theme::DIM_TEXT),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "[0-9] Edit  [Bksp] Delete  [Enter] Lock",
                Style::default().fg(Theme::GOLD),
            )),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
