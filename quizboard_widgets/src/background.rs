use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

use crate::theme::Theme;

/// Animated stage backdrop: warm wood tones with a slow spotlight sweep
pub struct BackgroundWidget {
    pub tick: u64,
}

impl BackgroundWidget {
    pub fn new(tick: u64) -> Self {
        Self { tick }
    }
}

impl Widget for BackgroundWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cycle = (self.tick % 720) as f64;
        let sweep_x = ((cycle * 0.01).sin() * 0.5 + 0.5) * area.width.max(1) as f64;

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let base_r = 43i16;
                let base_g = 22i16;
                let base_b = 16i16;

                // Spotlight: brighten cells near the sweep column
                let dist = (x as f64 - sweep_x).abs() / area.width.max(1) as f64;
                let glow = ((1.0 - dist).max(0.0).powi(3) * 10.0) as i16;

                // Vignette toward the bottom rows
                let depth = (y.saturating_sub(area.top()) as i16) / 12;

                let r = (base_r + glow - depth).clamp(0, 255) as u8;
                let g = (base_g + glow / 2 - depth).clamp(0, 255) as u8;
                let b = (base_b + glow / 3).clamp(0, 255) as u8;

                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(" ");
                    cell.set_bg(Color::Rgb(r, g, b));
                }
            }
        }
    }
}

/// Decorative gold frame around the stage
pub struct FrameWidget {
    pub tick: u64,
}

impl FrameWidget {
    pub fn new(tick: u64) -> Self {
        Self { tick }
    }
}

impl Widget for FrameWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 4 {
            return;
        }

        let cycle = (self.tick % 600) as f64;

        for x in area.left()..area.right() {
            let t = (x as f64 / area.width as f64 * 6.0 + cycle * 0.02).sin().abs();
            let color = interpolate_color(Theme::PANEL_BG, Theme::GOLD, (t * 0.4) as f32);

            if let Some(cell) = buf.cell_mut((x, area.top())) {
                cell.set_symbol("\u{2500}");
                cell.set_fg(color);
            }
            if let Some(cell) = buf.cell_mut((x, area.bottom().saturating_sub(1))) {
                cell.set_symbol("\u{2500}");
                cell.set_fg(color);
            }
        }

        for y in area.top()..area.bottom() {
            let t = (y as f64 / area.height as f64 * 4.0 + cycle * 0.02).sin().abs();
            let color = interpolate_color(Theme::PANEL_BG, Theme::GOLD, (t * 0.4) as f32);

            if let Some(cell) = buf.cell_mut((area.left(), y)) {
                cell.set_symbol("\u{2502}");
                cell.set_fg(color);
            }
            if let Some(cell) = buf.cell_mut((area.right().saturating_sub(1), y)) {
                cell.set_symbol("\u{2502}");
                cell.set_fg(color);
            }
        }

        let corner_style = Style::default().fg(Theme::GOLD);
        set_cell(buf, area.left(), area.top(), "\u{256d}", corner_style);
        set_cell(
            buf,
            area.right().saturating_sub(1),
            area.top(),
            "\u{256e}",
            corner_style,
        );
        set_cell(
            buf,
            area.left(),
            area.bottom().saturating_sub(1),
            "\u{2570}",
            corner_style,
        );
        set_cell(
            buf,
            area.right().saturating_sub(1),
            area.bottom().saturating_sub(1),
            "\u{256f}",
            corner_style,
        );
    }
}

fn set_cell(buf: &mut Buffer, x: u16, y: u16, symbol: &str, style: Style) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_symbol(symbol);
        if let Some(fg) = style.fg {
            cell.set_fg(fg);
        }
    }
}

fn interpolate_color(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let r = (r1 as f32 + (r2 as f32 - r1 as f32) * t) as u8;
            let g = (g1 as f32 + (g2 as f32 - g1 as f32) * t) as u8;
            let b = (b1 as f32 + (b2 as f32 - b1 as f32) * t) as u8;
            Color::Rgb(r, g, b)
        }
        _ => to,
    }
}
