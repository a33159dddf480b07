use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};
use ratatui::Frame;

use quizboard_core::final_round::FinalStage;
use quizboard_core::session::{GameSession, TEAM_COUNT};
use quizboard_widgets::theme::Theme;

use crate::app::ScreenAction;
use crate::screens::Screen;

pub struct FinalRoundScreen {
    /// Highlighted team row for wager editing and result marking
    pub cursor: usize,
}

impl FinalRoundScreen {
    pub fn new() -> Self {
        Self { cursor: 0 }
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    fn render_header(&self, frame: &mut Frame, session: &GameSession, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                "FINAL ROUND",
                Style::default()
                    .fg(Theme::GOLD)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                session.content().final_clue.category.clone(),
                Style::default().fg(Theme::BRIGHT_TEXT),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            area,
        );
    }

    fn render_wager_entry(&self, frame: &mut Frame, session: &GameSession, area: Rect) {
        let round = session.final_round();
        let mut lines = vec![
            Line::from(Span::styled(
                "Enter Wagers",
                Style::default()
                    .fg(Theme::GOLD)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for team in 0..TEAM_COUNT {
            let score = session.scores()[team];
            let marker = if team == self.cursor { "> " } else { "  " };
            let row_style = if team == self.cursor {
                Style::default()
                    .fg(Theme::BRIGHT_TEXT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Theme::MUTED_TEXT)
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{}Team {} (${})", marker, team + 1, score), row_style),
                Span::styled(
                    format!("   wager ${}", round.wagers()[team]),
                    Style::default()
                        .fg(Theme::MONEY_COLOR)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Wagers are capped at each team's current score.",
            Style::default().fg(Theme::DIM_TEXT),
        )));

        self.render_panel(frame, lines, area);
    }

    fn render_question(&self, frame: &mut Frame, session: &GameSession, area: Rect) {
        let round = session.final_round();
        let chunks = Layout::vertical([
            Constraint::Length(4), // Question text
            Constraint::Length(2), // Countdown
            Constraint::Min(0),    // Result marking
        ])
        .split(area);

        frame.render_widget(
            Paragraph::new(session.content().final_clue.question.clone())
                .style(Style::default().fg(Theme::QUESTION_TEXT))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            chunks[0],
        );

        if round.timer_running() {
            let urgent = round.countdown() <= 10;
            let style = Style::default()
                .fg(if urgent {
                    Theme::TIMER_URGENT
                } else {
                    Theme::TIMER_CALM
                })
                .add_modifier(Modifier::BOLD);
            frame.render_widget(
                Paragraph::new(Span::styled(format!("{}", round.countdown()), style))
                    .alignment(Alignment::Center),
                chunks[1],
            );
        }

        let mut lines = vec![
            Line::from(Span::styled(
                "Mark Results",
                Style::default()
                    .fg(Theme::GOLD)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for team in 0..TEAM_COUNT {
            let marker = if team == self.cursor { "> " } else { "  " };
            let row_style = if team == self.cursor {
                Style::default()
                    .fg(Theme::BRIGHT_TEXT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Theme::MUTED_TEXT)
            };
            let verdict = if round.results()[team] {
                Span::styled(
                    "\u{2714} correct",
                    Style::default()
                        .fg(Theme::CORRECT)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(
                    "\u{2716} wrong",
                    Style::default()
                        .fg(Theme::INCORRECT)
                        .add_modifier(Modifier::BOLD),
                )
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!(
                        "{}Team {}  (${}, wager ${})  ",
                        marker,
                        team + 1,
                        session.scores()[team],
                        round.wagers()[team]
                    ),
                    row_style,
                ),
                verdict,
            ]));
        }

        self.render_panel(frame, lines, chunks[2]);
    }

    fn render_answer(&self, frame: &mut Frame, session: &GameSession, area: Rect) {
        let round = session.final_round();
        let mut lines = vec![
            Line::from(Span::styled(
                "Answer",
                Style::default().fg(Theme::DIM_TEXT),
            )),
            Line::from(Span::styled(
                session.content().final_clue.answer.clone(),
                Style::default()
                    .fg(Theme::ANSWER_TEXT)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for team in 0..TEAM_COUNT {
            let verdict = if round.results()[team] {
                Span::styled("\u{2714}", Style::default().fg(Theme::CORRECT))
            } else {
                Span::styled("\u{2716}", Style::default().fg(Theme::INCORRECT))
            };
            lines.push(Line::from(vec![
                verdict,
                Span::styled(
                    format!(" Team {}: ${}", team + 1, session.scores()[team]),
                    Style::default()
                        .fg(Theme::MONEY_COLOR)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Final wagers applied. The podium is ready.",
            Style::default().fg(Theme::DIM_TEXT),
        )));

        self.render_panel(frame, lines, area);
    }

    fn render_panel(&self, frame: &mut Frame, lines: Vec<Line<'_>>, area: Rect) {
        let width = 56u16.min(area.width);
        let height = (lines.len() as u16 + 4).min(area.height);
        let panel = Rect::new(
            area.x + area.width.saturating_sub(width) / 2,
            area.y,
            width,
            height,
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Theme::GOLD))
            .style(Style::default().bg(Theme::PANEL_BG))
            .padding(Padding::uniform(1));
        let inner = block.inner(panel);
        frame.render_widget(block, panel);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
    }

    fn render_help(&self, frame: &mut Frame, stage: FinalStage, area: Rect) {
        let text = match stage {
            FinalStage::WagerEntry => {
                "[\u{2191}\u{2193}] Team  [0-9] Edit  [Bksp] Delete  [Enter] Lock & Reveal Question  [Esc] Exit"
            }
            FinalStage::QuestionShown => {
                "[\u{2191}\u{2193}/1-4] Team  [Enter] Correct  [W] Wrong  [T] 45s Timer  [Space] Reveal Answer  [Esc] Exit"
            }
            FinalStage::AnswerShown => "[Enter] Podium  [Esc] Exit Final Round",
        };
        frame.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(Theme::DIM_TEXT)))
                .alignment(Alignment::Center),
            area,
        );
    }
}

impl Screen for FinalRoundScreen {
    fn render(&mut self, frame: &mut Frame, session: &GameSession) {
        let area = frame.area();
        let chunks = Layout::vertical([
            Constraint::Length(3), // Banner
            Constraint::Min(0),    // Stage content
            Constraint::Length(2), // Help
        ])
        .split(area.inner(ratatui::layout::Margin::new(2, 1)));

        self.render_header(frame, session, chunks[0]);

        match session.final_round().stage {
            FinalStage::WagerEntry => self.render_wager_entry(frame, session, chunks[1]),
            FinalStage::QuestionShown => self.render_question(frame, session, chunks[1]),
            FinalStage::AnswerShown => self.render_answer(frame, session, chunks[1]),
        }

        self.render_help(frame, session.final_round().stage, chunks[2]);
    }

    fn handle_key(&mut self, key: KeyEvent, session: &GameSession) -> Option<ScreenAction> {
        let round = session.final_round();
        match round.stage {
            FinalStage::WagerEntry => match key.code {
                KeyCode::Up => {
                    self.cursor = self.cursor.saturating_sub(1);
                    None
                }
                KeyCode::Down => {
                    if self.cursor + 1 < TEAM_COUNT {
                        self.cursor += 1;
                    }
                    None
                }
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    let digit = i64::from(c as u8 - b'0');
                    let amount = round.wagers()[self.cursor] * 10 + digit;
                    Some(ScreenAction::SetFinalWager(self.cursor, amount))
                }
                KeyCode::Backspace => {
                    let amount = round.wagers()[self.cursor] / 10;
                    Some(ScreenAction::SetFinalWager(self.cursor, amount))
                }
                KeyCode::Enter => Some(ScreenAction::LockFinalWagers),
                KeyCode::Esc => Some(ScreenAction::ExitFinalRound),
                _ => None,
            },
            FinalStage::QuestionShown => match key.code {
                KeyCode::Up => {
                    self.cursor = self.cursor.saturating_sub(1);
                    None
                }
                KeyCode::Down => {
                    if self.cursor + 1 < TEAM_COUNT {
                        self.cursor += 1;
                    }
                    None
                }
                KeyCode::Char(c @ '1'..='4') => {
                    self.cursor = c as usize - '1' as usize;
                    None
                }
                KeyCode::Enter => Some(ScreenAction::SetFinalResult(self.cursor, true)),
                KeyCode::Char('w') | KeyCode::Char('W') => {
                    Some(ScreenAction::SetFinalResult(self.cursor, false))
                }
                KeyCode::Char('t') | KeyCode::Char('T') => Some(ScreenAction::StartFinalTimer),
                KeyCode::Char(' ') => Some(ScreenAction::RevealFinalAnswer),
                KeyCode::Esc => Some(ScreenAction::ExitFinalRound),
                _ => None,
            },
            FinalStage::AnswerShown => match key.code {
                KeyCode::Enter | KeyCode::Char('l') | KeyCode::Char('L') => {
                    Some(ScreenAction::ShowLeaderboard)
                }
                KeyCode::Esc => Some(ScreenAction::ExitFinalRound),
                _ => None,
            },
        }
    }
}
