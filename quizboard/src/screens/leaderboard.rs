use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use quizboard_core::session::GameSession;
use quizboard_widgets::podium::PodiumWidget;
use quizboard_widgets::theme::Theme;

use crate::app::ScreenAction;
use crate::screens::Screen;

pub struct LeaderboardScreen;

impl LeaderboardScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Screen for LeaderboardScreen {
    fn render(&mut self, frame: &mut Frame, session: &GameSession) {
        let area = frame.area();
        let chunks = Layout::vertical([
            Constraint::Length(2), // Title
            Constraint::Min(8),    // Podium stands
            Constraint::Length(6), // Full standings
            Constraint::Length(1), // Help
        ])
        .split(area.inner(ratatui::layout::Margin::new(4, 1)));

        frame.render_widget(
            Paragraph::new(Span::styled(
                "FINAL PODIUM",
                Style::default()
                    .fg(Theme::GOLD)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            chunks[0],
        );

        let podium = session.podium();
        frame.render_widget(PodiumWidget::new(&podium), chunks[1]);

        let mut lines = vec![Line::from(Span::styled(
            "Standings",
            Style::default().fg(Theme::DIM_TEXT),
        ))];
        for standing in session.standings() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("Team {}  ", standing.team + 1),
                    Style::default().fg(Theme::MUTED_TEXT),
                ),
                Span::styled(
                    format!("${}", standing.score),
                    Style::default()
                        .fg(if standing.score < 0 {
                            Theme::NEGATIVE_MONEY
                        } else {
                            Theme::MONEY_COLOR
                        })
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        }
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            chunks[2],
        );

        frame.render_widget(
            Paragraph::new(Span::styled(
                "[Esc] Back  [R] Reset Game",
                Style::default().fg(Theme::DIM_TEXT),
            ))
            .alignment(Alignment::Center),
            chunks[3],
        );
    }

    fn handle_key(&mut self, key: KeyEvent, _session: &GameSession) -> Option<ScreenAction> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('B') => {
                Some(ScreenAction::LeaveLeaderboard)
            }
            KeyCode::Char('r') | KeyCode::Char('R') => Some(ScreenAction::ExitFinalRound),
            _ => None,
        }
    }
}
