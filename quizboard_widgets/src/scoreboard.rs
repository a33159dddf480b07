use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

use crate::theme::Theme;

/// Score strip across the bottom: one panel per team, with the armed
/// team highlighted and locked-out teams (for the active tile) dimmed
pub struct ScoreboardWidget<'a> {
    scores: &'a [i64],
    selected: Option<usize>,
    locked_out: &'a [usize],
}

impl<'a> ScoreboardWidget<'a> {
    pub fn new(scores: &'a [i64]) -> Self {
        Self {
            scores,
            selected: None,
            locked_out: &[],
        }
    }

    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    pub fn locked_out(mut self, locked_out: &'a [usize]) -> Self {
        self.locked_out = locked_out;
        self
    }
}

impl<'a> Widget for ScoreboardWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 || self.scores.is_empty() {
            return;
        }

        let constraints =
            vec![Constraint::Ratio(1, self.scores.len() as u32); self.scores.len()];
        let chunks = Layout::horizontal(constraints).split(area);

        for (team, (&score, chunk)) in self.scores.iter().zip(chunks.iter()).enumerate() {
            let is_selected = self.selected == Some(team);
            let is_locked = self.locked_out.contains(&team);

            let border_style = if is_selected {
                Style::default()
                    .fg(Theme::BRIGHT_TEXT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Theme::GOLD)
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(if is_selected {
                    BorderType::Double
                } else {
                    BorderType::Rounded
                })
                .border_style(border_style)
                .style(Style::default().bg(Theme::PANEL_BG));
            let inner = block.inner(*chunk);
            block.render(*chunk, buf);

            let name_style = if is_locked {
                Style::default().fg(Theme::DIM_TEXT)
            } else {
                Style::default()
                    .fg(Theme::GOLD)
                    .add_modifier(Modifier::BOLD)
            };
            let score_style = if score < 0 {
                Style::default()
                    .fg(Theme::NEGATIVE_MONEY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(Theme::MONEY_COLOR)
                    .add_modifier(Modifier::BOLD)
            };

            let mut name = format!("Team {}", team + 1);
            if is_locked {
                name.push_str(" \u{2716}");
            }
            let lines = vec![
                Line::from(Span::styled(name, name_style)),
                Line::from(Span::styled(format!("${}", score), score_style)),
            ];
            Paragraph::new(lines)
                .alignment(ratatui::layout::Alignment::Center)
                .render(inner, buf);
        }
    }
}
