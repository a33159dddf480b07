use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Frame;
use tachyonfx::Duration;

use quizboard_core::board::{BoardContent, TileKey};
use quizboard_core::session::{GameMode, GameSession};
use quizboard_core::tile::TilePhase;

use crate::effects::{self, FxManager};
use crate::screens::board::BoardScreen;
use crate::screens::final_round::FinalRoundScreen;
use crate::screens::leaderboard::LeaderboardScreen;
use crate::screens::Screen;

/// Ticks per countdown second at the ~30fps poll rate
const TICKS_PER_SECOND: u64 = 30;

/// Main application state
pub struct App {
    pub session: GameSession,
    pub tick: u64,
    pub fx: FxManager,
    prev_mode: Option<GameMode>,

    // Screens
    pub board: BoardScreen,
    pub final_round: FinalRoundScreen,
    pub leaderboard: LeaderboardScreen,
}

impl App {
    pub fn new() -> Self {
        Self {
            session: GameSession::new(BoardContent::sample()),
            tick: 0,
            fx: FxManager::default(),
            prev_mode: None,
            board: BoardScreen::new(),
            final_round: FinalRoundScreen::new(),
            leaderboard: LeaderboardScreen::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        // Stage backdrop and frame border behind every screen
        let bg = quizboard_widgets::background::BackgroundWidget::new(self.tick);
        frame.render_widget(bg, area);
        let frame_border = quizboard_widgets::background::FrameWidget::new(self.tick);
        frame.render_widget(frame_border, area);

        match self.session.mode() {
            GameMode::Board => self.board.render(frame, &self.session),
            GameMode::FinalRound => self.final_round.render(frame, &self.session),
            GameMode::Leaderboard => self.leaderboard.render(frame, &self.session),
        }

        // Apply all tachyonfx effects on top of rendered content
        let tick_duration = Duration::from_millis(33); // ~30fps
        let buf = frame.buffer_mut();
        self.fx.process_effects(tick_duration, buf, area);
    }

    /// Handle key event. Returns true if should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let action = match self.session.mode() {
            GameMode::Board => self.board.handle_key(key, &self.session),
            GameMode::FinalRound => self.final_round.handle_key(key, &self.session),
            GameMode::Leaderboard => self.leaderboard.handle_key(key, &self.session),
        };

        self.process_action(action)
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.session.mode() == GameMode::Board {
            let action = self.board.handle_mouse(mouse, &self.session);
            self.process_action(action);
        }
    }

    pub fn handle_resize(&mut self, _w: u16, _h: u16) {
        // Ratatui handles resize automatically
    }

    pub fn tick(&mut self) {
        self.tick += 1;

        // Detect mode changes and trigger transition effects
        let mode = self.session.mode();
        if self.prev_mode != Some(mode) {
            self.fx
                .add_unique_effect("screen_transition", effects::screen_transition());

            if mode == GameMode::Leaderboard {
                self.fx
                    .add_unique_effect("podium_shimmer", effects::podium_shimmer());
            } else {
                self.fx.cancel_unique_effect("podium_shimmer");
            }

            self.prev_mode = Some(mode);
        }

        // Drive the final-round countdown at one tick per second
        if self.tick % TICKS_PER_SECOND == 0 {
            self.session.tick_final_timer();
        }

        self.pump_events();
    }

    /// Process a screen action. Returns true if should quit.
    fn process_action(&mut self, action: Option<ScreenAction>) -> bool {
        match action {
            Some(ScreenAction::Quit) => return true,
            Some(ScreenAction::SelectTeam(team)) => {
                self.session.select_team(team);
            }
            Some(ScreenAction::AdvanceTile(key)) => {
                if self.session.advance_tile(key) {
                    self.maybe_open_wager(key);
                }
            }
            Some(ScreenAction::JudgeCorrect(key)) => {
                self.session.judge_correct(key);
            }
            Some(ScreenAction::JudgeWrong(key)) => {
                self.session.judge_wrong(key);
            }
            Some(ScreenAction::RevealAnswer(key)) => {
                self.session.reveal_answer(key);
            }
            Some(ScreenAction::LockWager(key, amount)) => {
                self.session.lock_wager(key, amount);
            }
            Some(ScreenAction::ResetBoard) => {
                self.session.reset_board();
                self.board.reset();
            }
            Some(ScreenAction::HideAll) => {
                self.session.hide_all();
            }
            Some(ScreenAction::StartFinalRound) => {
                self.session.start_final_round();
                self.final_round.reset();
            }
            Some(ScreenAction::ShowLeaderboard) => {
                self.session.show_leaderboard();
            }
            Some(ScreenAction::SetFinalWager(team, amount)) => {
                self.session.set_final_wager(team, amount);
            }
            Some(ScreenAction::LockFinalWagers) => {
                self.session.lock_final_wagers();
            }
            Some(ScreenAction::SetFinalResult(team, correct)) => {
                self.session.set_final_result(team, correct);
            }
            Some(ScreenAction::StartFinalTimer) => {
                self.session.start_final_timer();
            }
            Some(ScreenAction::RevealFinalAnswer) => {
                self.session.reveal_final_answer();
            }
            Some(ScreenAction::ExitFinalRound) => {
                self.session.exit_final_round();
            }
            Some(ScreenAction::LeaveLeaderboard) => {
                self.session.leave_leaderboard();
            }
            None => {}
        }

        self.pump_events();
        false
    }

    /// A daily-double advance lands in wager entry; put the modal up
    /// for the armed team
    fn maybe_open_wager(&mut self, key: TileKey) {
        let pending = self
            .session
            .tile(key)
            .map(|t| t.phase == TilePhase::WagerPending)
            .unwrap_or(false);
        if !pending {
            return;
        }
        if let Some(team) = self.session.selected_team() {
            let score = self.session.scores()[team];
            self.board.open_wager(key, team, score);
        }
    }

    /// Forward drained session events to the presentation feedback layer
    fn pump_events(&mut self) {
        for event in self.session.drain_events() {
            effects::apply_feedback(&mut self.fx, event);
        }
    }
}

/// Actions that screens can return
#[derive(Debug, Clone)]
pub enum ScreenAction {
    Quit,
    SelectTeam(usize),
    AdvanceTile(TileKey),
    JudgeCorrect(TileKey),
    JudgeWrong(TileKey),
    /// Host-mode inspection: show the answer without judging
    RevealAnswer(TileKey),
    LockWager(TileKey, i64),
    ResetBoard,
    HideAll,
    StartFinalRound,
    ShowLeaderboard,
    SetFinalWager(usize, i64),
    LockFinalWagers,
    SetFinalResult(usize, bool),
    StartFinalTimer,
    RevealFinalAnswer,
    ExitFinalRound,
    LeaveLeaderboard,
}
