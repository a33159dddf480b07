use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use quizboard_core::board::TileKey;
use quizboard_core::session::GameSession;
use quizboard_core::tile::{TilePhase, TileView};
use quizboard_widgets::board::BoardWidget;
use quizboard_widgets::popup::PopupWidget;
use quizboard_widgets::scoreboard::ScoreboardWidget;
use quizboard_widgets::theme::Theme;
use quizboard_widgets::wager_panel::WagerPanel;

use crate::app::ScreenAction;
use crate::screens::Screen;

pub struct BoardScreen {
    /// Keyed-on tile as (category column, value row)
    pub cursor: (usize, usize),
    /// Presentation mode: keyboard play keys live, host keys dormant
    pub presentation: bool,
    wager: Option<WagerPanel>,
    board_area: Rect,
}

impl BoardScreen {
    pub fn new() -> Self {
        Self {
            cursor: (0, 0),
            presentation: false,
            wager: None,
            board_area: Rect::default(),
        }
    }

    pub fn reset(&mut self) {
        self.cursor = (0, 0);
        self.wager = None;
    }

    pub fn open_wager(&mut self, key: TileKey, team: usize, team_score: i64) {
        self.wager = Some(WagerPanel::new(key, team, team_score));
    }

    fn active_key(&self, session: &GameSession) -> Option<TileKey> {
        let values = &session.content().values;
        values
            .get(self.cursor.1)
            .map(|&value| TileKey::new(self.cursor.0, value))
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let badge = if self.presentation {
            Span::styled(
                " PRESENTING ",
                Style::default()
                    .fg(Theme::BG)
                    .bg(Theme::GOLD)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(" HOST ", Style::default().fg(Theme::MUTED_TEXT))
        };
        let header = Line::from(vec![
            Span::styled(
                "  QUIZBOARD  ",
                Style::default()
                    .fg(Theme::GOLD)
                    .add_modifier(Modifier::BOLD),
            ),
            badge,
        ]);
        frame.render_widget(Paragraph::new(header), area);
    }

    fn render_status(&self, frame: &mut Frame, session: &GameSession, area: Rect) {
        let chunks = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(area);

        if self.presentation {
            let mut spans = Vec::new();
            if let Some(key) = self.active_key(session) {
                spans.push(Span::styled("Active: ", Style::default().fg(Theme::DIM_TEXT)));
                spans.push(Span::styled(
                    format!(
                        "{} ${}",
                        session.content().category_name(key.category),
                        key.value
                    ),
                    Style::default()
                        .fg(Theme::GOLD)
                        .add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::styled("   Team: ", Style::default().fg(Theme::DIM_TEXT)));
                spans.push(match session.selected_team() {
                    Some(team) => Span::styled(
                        format!("{}", team + 1),
                        Style::default()
                            .fg(Theme::BRIGHT_TEXT)
                            .add_modifier(Modifier::BOLD),
                    ),
                    None => Span::styled("none", Style::default().fg(Theme::DIM_TEXT)),
                });
                let locked = session.locked_out_teams(key);
                if !locked.is_empty() {
                    let names: Vec<String> =
                        locked.iter().map(|t| format!("{}", t + 1)).collect();
                    spans.push(Span::styled(
                        "   Locked out: ",
                        Style::default().fg(Theme::DIM_TEXT),
                    ));
                    spans.push(Span::styled(
                        names.join(", "),
                        Style::default().fg(Theme::INCORRECT),
                    ));
                }
            }
            frame.render_widget(
                Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
                chunks[0],
            );

            let help = Paragraph::new(Line::from(vec![
                Span::styled("[", Style::default().fg(Theme::DIM_TEXT)),
                Span::styled("\u{2190}\u{2191}\u{2192}\u{2193}", Style::default().fg(Theme::GOLD)),
                Span::styled("] Move  [", Style::default().fg(Theme::DIM_TEXT)),
                Span::styled("Space", Style::default().fg(Theme::GOLD)),
                Span::styled("] Reveal/Finish  [", Style::default().fg(Theme::DIM_TEXT)),
                Span::styled("1-4", Style::default().fg(Theme::GOLD)),
                Span::styled("] Team  [", Style::default().fg(Theme::DIM_TEXT)),
                Span::styled("Enter", Style::default().fg(Theme::GOLD)),
                Span::styled("] Correct  [", Style::default().fg(Theme::DIM_TEXT)),
                Span::styled("W", Style::default().fg(Theme::GOLD)),
                Span::styled("] Wrong  [", Style::default().fg(Theme::DIM_TEXT)),
                Span::styled("Esc", Style::default().fg(Theme::GOLD)),
                Span::styled("] Host", Style::default().fg(Theme::DIM_TEXT)),
            ]))
            .alignment(Alignment::Center);
            frame.render_widget(help, chunks[1]);
        } else {
            let help = Paragraph::new(Line::from(vec![
                Span::styled("[", Style::default().fg(Theme::DIM_TEXT)),
                Span::styled("Click", Style::default().fg(Theme::GOLD)),
                Span::styled("] Step Tile  [", Style::default().fg(Theme::DIM_TEXT)),
                Span::styled("P", Style::default().fg(Theme::GOLD)),
                Span::styled("] Present  [", Style::default().fg(Theme::DIM_TEXT)),
                Span::styled("R", Style::default().fg(Theme::GOLD)),
                Span::styled("] Reset  [", Style::default().fg(Theme::DIM_TEXT)),
                Span::styled("H", Style::default().fg(Theme::GOLD)),
                Span::styled("] Hide All  [", Style::default().fg(Theme::DIM_TEXT)),
                Span::styled("F", Style::default().fg(Theme::GOLD)),
                Span::styled("] Final  [", Style::default().fg(Theme::DIM_TEXT)),
                Span::styled("L", Style::default().fg(Theme::GOLD)),
                Span::styled("] Podium  [", Style::default().fg(Theme::DIM_TEXT)),
                Span::styled("Q", Style::default().fg(Theme::GOLD)),
                Span::styled("] Quit", Style::default().fg(Theme::DIM_TEXT)),
            ]))
            .alignment(Alignment::Center);
            frame.render_widget(help, chunks[0]);
        }
    }

    fn presentation_keys(
        &mut self,
        key: KeyEvent,
        session: &GameSession,
    ) -> Option<ScreenAction> {
        let cols = session.content().categories.len();
        let rows = session.content().values.len();

        match key.code {
            KeyCode::Up => {
                self.cursor.1 = self.cursor.1.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                if self.cursor.1 + 1 < rows {
                    self.cursor.1 += 1;
                }
                None
            }
            KeyCode::Left => {
                self.cursor.0 = self.cursor.0.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                if self.cursor.0 + 1 < cols {
                    self.cursor.0 += 1;
                }
                None
            }
            KeyCode::Char(c @ '1'..='4') => {
                Some(ScreenAction::SelectTeam(c as usize - '1' as usize))
            }
            KeyCode::Char(' ') => self.active_key(session).map(ScreenAction::AdvanceTile),
            KeyCode::Enter => self.active_key(session).map(ScreenAction::JudgeCorrect),
            KeyCode::Char('w') | KeyCode::Char('W') => {
                self.active_key(session).map(ScreenAction::JudgeWrong)
            }
            KeyCode::Esc => {
                self.presentation = false;
                None
            }
            _ => None,
        }
    }

    fn host_keys(&mut self, key: KeyEvent) -> Option<ScreenAction> {
        match key.code {
            KeyCode::Char('p') | KeyCode::Char('P') => {
                self.presentation = true;
                None
            }
            KeyCode::Char(c @ '1'..='4') => {
                Some(ScreenAction::SelectTeam(c as usize - '1' as usize))
            }
            KeyCode::Char('r') | KeyCode::Char('R') => Some(ScreenAction::ResetBoard),
            KeyCode::Char('h') | KeyCode::Char('H') => Some(ScreenAction::HideAll),
            KeyCode::Char('f') | KeyCode::Char('F') => Some(ScreenAction::StartFinalRound),
            KeyCode::Char('l') | KeyCode::Char('L') => Some(ScreenAction::ShowLeaderboard),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(ScreenAction::Quit),
            _ => None,
        }
    }

    pub fn handle_mouse(
        &mut self,
        mouse: MouseEvent,
        session: &GameSession,
    ) -> Option<ScreenAction> {
        // The wager modal owns all input while it is up
        if self.wager.is_some() {
            return None;
        }
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return None;
        }

        let cols = session.content().categories.len();
        let rows = session.content().values.len();
        let (col, row) =
            BoardWidget::cell_at(self.board_area, cols, rows, mouse.column, mouse.row)?;
        let key = TileKey::new(col, session.content().values[row]);
        self.cursor = (col, row);

        // Host clicks step the tile: reveal, then answer, then finish
        match session.tile(key)?.phase {
            TilePhase::Hidden => Some(ScreenAction::AdvanceTile(key)),
            TilePhase::QuestionShown => Some(ScreenAction::RevealAnswer(key)),
            TilePhase::AnswerShown => Some(ScreenAction::AdvanceTile(key)),
            TilePhase::WagerPending | TilePhase::Completed => None,
        }
    }
}

impl Screen for BoardScreen {
    fn render(&mut self, frame: &mut Frame, session: &GameSession) {
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Board grid
            Constraint::Length(2), // Status / help
            Constraint::Length(4), // Scoreboard
        ])
        .split(area.inner(ratatui::layout::Margin::new(1, 1)));

        self.render_header(frame, chunks[0]);

        let content = session.content();
        let cols = content.categories.len();
        let views: Vec<TileView> = content
            .values
            .iter()
            .flat_map(|&value| {
                (0..cols).map(move |category| TileKey::new(category, value))
            })
            .map(|key| session.tile_view(key))
            .collect();

        self.board_area = chunks[1];
        let board = BoardWidget::new(&content.categories, &content.values, &views)
            .cursor(self.presentation.then_some(self.cursor));
        frame.render_widget(board, chunks[1]);

        self.render_status(frame, session, chunks[2]);

        let locked = self
            .active_key(session)
            .map(|key| session.locked_out_teams(key))
            .unwrap_or(&[]);
        let scoreboard = ScoreboardWidget::new(session.scores())
            .selected(session.selected_team())
            .locked_out(locked);
        frame.render_widget(scoreboard, chunks[3]);

        if let Some(panel) = &self.wager {
            frame.render_widget(panel, area);
        } else if session.board_complete() {
            let popup = PopupWidget::new("Board Complete!")
                .line(
                    "All clues have been played.",
                    Style::default().fg(Theme::MUTED_TEXT),
                )
                .line("", Style::default())
                .line(
                    "[F] Final Round   [L] Podium",
                    Style::default()
                        .fg(Theme::GOLD)
                        .add_modifier(Modifier::BOLD),
                )
                .size(40, 30);
            frame.render_widget(popup, area);
        }
    }

    fn handle_key(&mut self, key: KeyEvent, session: &GameSession) -> Option<ScreenAction> {
        // Wager entry swallows the keyboard until the amount locks
        if let Some(panel) = &mut self.wager {
            if let Some(amount) = panel.handle_key(key) {
                let tile = panel.key();
                self.wager = None;
                return Some(ScreenAction::LockWager(tile, amount));
            }
            return None;
        }

        if self.presentation {
            self.presentation_keys(key, session)
        } else {
            self.host_keys(key)
        }
    }
}
