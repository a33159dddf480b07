pub mod board;
pub mod final_round;
pub mod leaderboard;

use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::app::ScreenAction;
use quizboard_core::session::GameSession;

/// Trait for game screens
pub trait Screen {
    fn render(&mut self, frame: &mut Frame, session: &GameSession);
    fn handle_key(&mut self, key: KeyEvent, session: &GameSession) -> Option<ScreenAction>;
}
