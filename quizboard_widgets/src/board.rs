use quizboard_core::tile::{TileDisplay, TileView};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap};

use crate::theme::Theme;

/// Height of the category banner above the tile grid
pub const CATEGORY_HEADER_HEIGHT: u16 = 2;

/// The tile grid with its category banner. Views are row-major: one
/// entry per (value row, category column) in reading order.
pub struct BoardWidget<'a> {
    categories: &'a [String],
    values: &'a [u32],
    views: &'a [TileView],
    cursor: Option<(usize, usize)>,
}

impl<'a> BoardWidget<'a> {
    pub fn new(categories: &'a [String], values: &'a [u32], views: &'a [TileView]) -> Self {
        Self {
            categories,
            values,
            views,
            cursor: None,
        }
    }

    /// Highlight the (column, row) the presenter has keyed onto
    pub fn cursor(mut self, cursor: Option<(usize, usize)>) -> Self {
        self.cursor = cursor;
        self
    }

    /// The cell rect for a (column, row), using the same layout math as
    /// render. None when the area is too small to fit the grid.
    pub fn cell_rect(area: Rect, cols: usize, rows: usize, col: usize, row: usize) -> Option<Rect> {
        if cols == 0 || rows == 0 || col >= cols || row >= rows {
            return None;
        }
        let grid = Self::grid_area(area)?;
        let cell_w = grid.width / cols as u16;
        let cell_h = grid.height / rows as u16;
        if cell_w < 5 || cell_h < 3 {
            return None;
        }
        Some(Rect::new(
            grid.x + col as u16 * cell_w,
            grid.y + row as u16 * cell_h,
            cell_w,
            cell_h,
        ))
    }

    /// Map a click position to a (column, row), for mouse selection
    pub fn cell_at(area: Rect, cols: usize, rows: usize, x: u16, y: u16) -> Option<(usize, usize)> {
        for row in 0..rows {
            for col in 0..cols {
                if let Some(rect) = Self::cell_rect(area, cols, rows, col, row) {
                    if x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom() {
                        return Some((col, row));
                    }
                }
            }
        }
        None
    }

    fn grid_area(area: Rect) -> Option<Rect> {
        if area.height <= CATEGORY_HEADER_HEIGHT {
            return None;
        }
        Some(Rect::new(
            area.x,
            area.y + CATEGORY_HEADER_HEIGHT,
            area.width,
            area.height - CATEGORY_HEADER_HEIGHT,
        ))
    }

    fn render_cell(&self, view: &TileView, active: bool, area: Rect, buf: &mut Buffer) {
        let (border_color, text_style) = match view.display {
            TileDisplay::Value => (
                Theme::TILE_BORDER,
                Style::default()
                    .fg(Theme::GOLD)
                    .add_modifier(Modifier::BOLD),
            ),
            TileDisplay::Question => (Theme::TILE_BORDER, Style::default().fg(Theme::QUESTION_TEXT)),
            TileDisplay::Answer => (
                Theme::TILE_BORDER,
                Style::default()
                    .fg(Theme::ANSWER_TEXT)
                    .add_modifier(Modifier::ITALIC),
            ),
            TileDisplay::Blank => (Theme::TILE_DONE, Style::default().fg(Theme::TILE_DONE_TEXT)),
        };

        let border_style = if active {
            Style::default()
                .fg(Theme::TILE_ACTIVE)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(border_color)
        };
        let border_type = if active {
            BorderType::Double
        } else {
            BorderType::Rounded
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style)
            .style(Style::default().bg(Theme::TILE_FACE));
        let inner = block.inner(area);
        block.render(area, buf);

        let text = if view.display == TileDisplay::Blank {
            "\u{00b7}".to_string()
        } else {
            view.text.clone()
        };

        // Rough vertical centering for wrapped clue text
        let usable = inner.width.max(1) as usize;
        let lines = (text.len() / usable + 1).min(inner.height as usize) as u16;
        let pad = inner.height.saturating_sub(lines) / 2;
        let text_area = Rect::new(
            inner.x,
            inner.y + pad,
            inner.width,
            inner.height.saturating_sub(pad),
        );

        Paragraph::new(text)
            .style(text_style)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(text_area, buf);
    }
}

impl<'a> Widget for BoardWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cols = self.categories.len();
        let rows = self.values.len();
        if cols == 0 || rows == 0 {
            return;
        }

        // Category banner with an underline row
        let col_w = area.width / cols as u16;
        for (i, name) in self.categories.iter().enumerate() {
            let cell = Rect::new(area.x + i as u16 * col_w, area.y, col_w, 1);
            Paragraph::new(Line::from(name.as_str()))
                .style(
                    Style::default()
                        .fg(Theme::GOLD)
                        .add_modifier(Modifier::BOLD),
                )
                .alignment(Alignment::Center)
                .render(cell, buf);
        }
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, area.y + 1)) {
                cell.set_symbol("\u{2500}");
                cell.set_fg(Theme::GOLD);
            }
        }

        for row in 0..rows {
            for col in 0..cols {
                let Some(rect) = Self::cell_rect(area, cols, rows, col, row) else {
                    continue;
                };
                let Some(view) = self.views.get(row * cols + col) else {
                    continue;
                };
                let active = self.cursor == Some((col, row));
                self.render_cell(view, active, rect, buf);
            }
        }
    }
}
