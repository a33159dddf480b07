use quizboard_core::scoring::PodiumEntry;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

use crate::theme::Theme;

/// Three podium stands, tallest in the middle. Takes the capped,
/// tie-aware podium entries in display order and draws one stand per
/// entry; fewer than three entries leave the missing stands empty.
pub struct PodiumWidget<'a> {
    entries: &'a [PodiumEntry],
}

impl<'a> PodiumWidget<'a> {
    pub fn new(entries: &'a [PodiumEntry]) -> Self {
        Self { entries }
    }

    fn stand_height(slot: usize, area_height: u16) -> u16 {
        // Center stand tallest, right stand shortest
        let fraction = match slot {
            1 => 0.9,
            0 => 0.7,
            _ => 0.5,
        };
        ((area_height as f32) * fraction).max(4.0) as u16
    }
}

impl<'a> Widget for PodiumWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 6 || area.width < 24 {
            return;
        }

        let chunks = Layout::horizontal([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

        for (slot, entry) in self.entries.iter().take(3).enumerate() {
            let column = chunks[slot];
            let height = Self::stand_height(slot, area.height).min(column.height);
            let stand = Rect::new(
                column.x + 1,
                column.bottom() - height,
                column.width.saturating_sub(2),
                height,
            );

            let is_center = slot == 1;
            let (bg, fg) = if is_center {
                (Theme::PODIUM_GOLD, Theme::BG)
            } else {
                (Theme::PODIUM_WOOD, Theme::PODIUM_GOLD)
            };

            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Theme::GOLD))
                .style(Style::default().bg(bg));
            let inner = block.inner(stand);
            block.render(stand, buf);

            let lines = vec![
                Line::from(Span::styled(
                    format!("#{}", entry.rank),
                    Style::default().fg(fg).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("Team {}", entry.team + 1),
                    Style::default().fg(fg).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("${}", entry.score),
                    Style::default().fg(fg),
                )),
            ];
            let pad = inner.height.saturating_sub(lines.len() as u16) / 2;
            let text_area = Rect::new(
                inner.x,
                inner.y + pad,
                inner.width,
                inner.height.saturating_sub(pad),
            );
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .render(text_area, buf);
        }
    }
}
