use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::board::{BoardContent, TileKey};
use crate::final_round::FinalRound;
use crate::scoring::{compute_podium_with_ties, rank_teams, PodiumEntry, TeamStanding};
use crate::tile::{Tile, TileDisplay, TilePhase, TileView};

pub const TEAM_COUNT: usize = 4;
pub const DAILY_DOUBLE_COUNT: usize = 2;
pub const MIN_WAGER: i64 = 5;

/// Top-level screen the session is in. Switched only by explicit host
/// actions; the final round manages its own sub-stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Board,
    FinalRound,
    Leaderboard,
}

/// Semantic feedback events for the presentation layer. Emitted by the
/// state transitions and drained by the host loop; whatever the
/// subscriber does with them can never touch game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    DailyDoubleTriggered,
    QuestionRevealed,
    AnswerRevealed,
    Correct,
    Incorrect,
    TileCompleted,
    TimerTick(u32),
}

/// Clamp a daily-double wager to [5, team's current score]. When the
/// team has less than the minimum, the floor wins and the team may end
/// up wagering more than it has.
pub fn clamp_wager(amount: i64, team_score: i64) -> i64 {
    amount.clamp(MIN_WAGER, team_score.max(MIN_WAGER))
}

/// Complete game state: board tiles, team scores, team selection, the
/// final round, and the mode switch. All mutation goes through the
/// operations below so the tile and scoring invariants hold; invalid
/// actions are no-ops rather than errors.
#[derive(Debug, Clone)]
pub struct GameSession {
    mode: GameMode,
    content: BoardContent,
    tiles: HashMap<TileKey, Tile>,
    scores: [i64; TEAM_COUNT],
    selected_team: Option<usize>,
    daily_doubles: Vec<TileKey>,
    final_round: FinalRound,
    rng: StdRng,
    events: Vec<GameEvent>,
}

impl GameSession {
    pub fn new(content: BoardContent) -> Self {
        Self::with_seed(content, rand::thread_rng().gen())
    }

    pub fn with_seed(content: BoardContent, seed: u64) -> Self {
        let tiles = content
            .all_keys()
            .into_iter()
            .map(|key| (key, Tile::new()))
            .collect();
        let mut session = Self {
            mode: GameMode::Board,
            content,
            tiles,
            scores: [0; TEAM_COUNT],
            selected_team: None,
            daily_doubles: Vec::new(),
            final_round: FinalRound::new(),
            rng: StdRng::seed_from_u64(seed),
            events: Vec::new(),
        };
        session.roll_daily_doubles();
        session
    }

    // ─── Accessors ───────────────────────────────────────────────────

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn content(&self) -> &BoardContent {
        &self.content
    }

    pub fn scores(&self) -> &[i64; TEAM_COUNT] {
        &self.scores
    }

    pub fn selected_team(&self) -> Option<usize> {
        self.selected_team
    }

    pub fn tile(&self, key: TileKey) -> Option<&Tile> {
        self.tiles.get(&key)
    }

    pub fn is_daily_double(&self, key: TileKey) -> bool {
        self.tiles.get(&key).map(|t| t.daily_double).unwrap_or(false)
    }

    pub fn daily_doubles(&self) -> &[TileKey] {
        &self.daily_doubles
    }

    pub fn final_round(&self) -> &FinalRound {
        &self.final_round
    }

    pub fn locked_out_teams(&self, key: TileKey) -> &[usize] {
        self.tiles
            .get(&key)
            .map(|t| t.locked_out.as_slice())
            .unwrap_or(&[])
    }

    /// Points at stake on a tile: the locked-in wager for a daily
    /// double, the face value otherwise
    pub fn award_for(&self, key: TileKey) -> i64 {
        self.tiles
            .get(&key)
            .and_then(|t| if t.daily_double { t.wager } else { None })
            .unwrap_or(i64::from(key.value))
    }

    /// Every tile has been played out
    pub fn board_complete(&self) -> bool {
        self.tiles.values().all(|t| t.phase == TilePhase::Completed)
    }

    pub fn standings(&self) -> Vec<TeamStanding> {
        rank_teams(&self.scores)
    }

    pub fn podium(&self) -> Vec<PodiumEntry> {
        compute_podium_with_ties(&self.standings())
    }

    /// Render view model for one tile. Completed tiles collapse to a
    /// neutral placeholder and never re-reveal their text.
    pub fn tile_view(&self, key: TileKey) -> TileView {
        let Some(tile) = self.tiles.get(&key) else {
            return TileView {
                display: TileDisplay::Blank,
                text: String::new(),
            };
        };
        match tile.phase {
            TilePhase::Hidden | TilePhase::WagerPending => TileView {
                display: TileDisplay::Value,
                text: format!("${}", key.value),
            },
            TilePhase::QuestionShown => TileView {
                display: TileDisplay::Question,
                text: self.content.question(key).to_string(),
            },
            TilePhase::AnswerShown => TileView {
                display: TileDisplay::Answer,
                text: self.content.answer(key).to_string(),
            },
            TilePhase::Completed => TileView {
                display: TileDisplay::Blank,
                text: String::new(),
            },
        }
    }

    /// Take the feedback events accumulated since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // ─── Team selection ──────────────────────────────────────────────

    /// Arm a team to answer. Persists across tiles until changed or a
    /// tile is finalized.
    pub fn select_team(&mut self, team: usize) {
        if team < TEAM_COUNT {
            self.selected_team = Some(team);
        }
    }

    // ─── Tile state machine ──────────────────────────────────────────

    /// Unified advance: face-down tiles reveal their question (daily
    /// doubles detour through wager entry, and stay put until a team is
    /// selected to wager), and a shown answer finalizes the tile.
    /// Anything else is a no-op.
    pub fn advance_tile(&mut self, key: TileKey) -> bool {
        let selected = self.selected_team;
        let Some(tile) = self.tiles.get_mut(&key) else {
            return false;
        };
        match tile.phase {
            TilePhase::Hidden => {
                if tile.daily_double {
                    if selected.is_none() {
                        return false;
                    }
                    tile.phase = TilePhase::WagerPending;
                    self.events.push(GameEvent::DailyDoubleTriggered);
                } else {
                    tile.phase = TilePhase::QuestionShown;
                    tile.locked_out.clear();
                    self.events.push(GameEvent::QuestionRevealed);
                }
                true
            }
            TilePhase::AnswerShown => {
                self.finalize_tile(key);
                true
            }
            // Open questions resolve through judging; everything else
            // is terminal or waiting on the wager
            TilePhase::WagerPending | TilePhase::QuestionShown | TilePhase::Completed => false,
        }
    }

    /// Lock a daily-double wager for the selected team and reveal the
    /// question. The wager is clamped, never rejected.
    pub fn lock_wager(&mut self, key: TileKey, amount: i64) -> bool {
        let Some(team) = self.selected_team else {
            return false;
        };
        let locked = clamp_wager(amount, self.scores[team]);
        let Some(tile) = self.tiles.get_mut(&key) else {
            return false;
        };
        if tile.phase != TilePhase::WagerPending {
            return false;
        }
        tile.wager = Some(locked);
        tile.phase = TilePhase::QuestionShown;
        tile.locked_out.clear();
        self.events.push(GameEvent::QuestionRevealed);
        true
    }

    /// Judge the selected team correct: award points and reveal the
    /// answer. The tile stays open until advanced.
    pub fn judge_correct(&mut self, key: TileKey) -> bool {
        let Some(team) = self.selected_team else {
            return false;
        };
        let award = self.award_for(key);
        let Some(tile) = self.tiles.get_mut(&key) else {
            return false;
        };
        if tile.phase != TilePhase::QuestionShown || tile.is_locked_out(team) {
            return false;
        }
        tile.phase = TilePhase::AnswerShown;
        self.scores[team] += award;
        self.events.push(GameEvent::Correct);
        self.events.push(GameEvent::AnswerRevealed);
        true
    }

    /// Judge the selected team wrong: deduct points and lock the team
    /// out of this tile. When every team is locked out the tile shows
    /// its answer and finalizes immediately.
    pub fn judge_wrong(&mut self, key: TileKey) -> bool {
        let Some(team) = self.selected_team else {
            return false;
        };
        let award = self.award_for(key);
        let exhausted;
        {
            let Some(tile) = self.tiles.get_mut(&key) else {
                return false;
            };
            if tile.phase != TilePhase::QuestionShown || tile.is_locked_out(team) {
                return false;
            }
            tile.locked_out.push(team);
            exhausted = tile.locked_out.len() == TEAM_COUNT;
        }
        self.scores[team] -= award;
        self.events.push(GameEvent::Incorrect);
        if exhausted {
            self.events.push(GameEvent::AnswerRevealed);
            self.finalize_tile(key);
        }
        true
    }

    /// Host-mode inspection: reveal the answer of an open question
    /// without judging anyone
    pub fn reveal_answer(&mut self, key: TileKey) -> bool {
        let Some(tile) = self.tiles.get_mut(&key) else {
            return false;
        };
        if tile.phase != TilePhase::QuestionShown {
            return false;
        }
        tile.phase = TilePhase::AnswerShown;
        self.events.push(GameEvent::AnswerRevealed);
        true
    }

    fn finalize_tile(&mut self, key: TileKey) {
        if let Some(tile) = self.tiles.get_mut(&key) {
            tile.phase = TilePhase::Completed;
            tile.locked_out.clear();
        }
        self.selected_team = None;
        self.events.push(GameEvent::TileCompleted);
    }

    // ─── Board-wide host actions ─────────────────────────────────────

    /// Collapse every unfinished tile back to its face value. Scores,
    /// wagers, and completion are untouched.
    pub fn hide_all(&mut self) {
        for tile in self.tiles.values_mut() {
            if tile.phase != TilePhase::Completed {
                tile.phase = TilePhase::Hidden;
            }
        }
    }

    /// Fresh board: all tiles hidden, scores zeroed, selection cleared,
    /// and the two daily doubles re-rolled
    pub fn reset_board(&mut self) {
        for tile in self.tiles.values_mut() {
            *tile = Tile::new();
        }
        self.scores = [0; TEAM_COUNT];
        self.selected_team = None;
        self.roll_daily_doubles();
    }

    fn roll_daily_doubles(&mut self) {
        let mut keys = self.content.all_keys();
        keys.shuffle(&mut self.rng);
        keys.truncate(DAILY_DOUBLE_COUNT.min(keys.len()));
        for tile in self.tiles.values_mut() {
            tile.daily_double = false;
        }
        for key in &keys {
            if let Some(tile) = self.tiles.get_mut(key) {
                tile.daily_double = true;
            }
        }
        self.daily_doubles = keys;
    }

    // ─── Mode switching ──────────────────────────────────────────────

    pub fn start_final_round(&mut self) {
        if self.mode == GameMode::Board {
            self.mode = GameMode::FinalRound;
        }
    }

    /// Leave the final round for the board, discarding its state and
    /// stopping the countdown
    pub fn exit_final_round(&mut self) {
        self.final_round.reset();
        self.mode = GameMode::Board;
    }

    pub fn reset_final_round(&mut self) {
        self.final_round.reset();
    }

    pub fn show_leaderboard(&mut self) {
        self.mode = GameMode::Leaderboard;
    }

    /// Back out of the leaderboard: to the final-round screen when its
    /// scores were applied, to the board otherwise
    pub fn leave_leaderboard(&mut self) {
        if self.mode != GameMode::Leaderboard {
            return;
        }
        self.mode = if self.final_round.applied() {
            GameMode::FinalRound
        } else {
            GameMode::Board
        };
    }

    // ─── Final round pass-throughs ───────────────────────────────────

    pub fn set_final_wager(&mut self, team: usize, amount: i64) {
        if team >= TEAM_COUNT {
            return;
        }
        let score = self.scores[team];
        self.final_round.set_wager(team, amount, score);
    }

    pub fn lock_final_wagers(&mut self) -> bool {
        if self.mode == GameMode::FinalRound && self.final_round.lock_wagers() {
            self.events.push(GameEvent::QuestionRevealed);
            true
        } else {
            false
        }
    }

    pub fn set_final_result(&mut self, team: usize, correct: bool) {
        self.final_round.set_result(team, correct);
    }

    pub fn start_final_timer(&mut self) {
        self.final_round.start_timer();
    }

    /// One-second tick from the host loop; only the final round has a
    /// running timer
    pub fn tick_final_timer(&mut self) {
        if self.mode != GameMode::FinalRound {
            return;
        }
        if let Some(remaining) = self.final_round.tick_timer() {
            self.events.push(GameEvent::TimerTick(remaining));
        }
    }

    /// Reveal the final answer, applying every wager exactly once
    pub fn reveal_final_answer(&mut self) -> bool {
        if self.mode != GameMode::FinalRound {
            return false;
        }
        if self.final_round.reveal_answer(&mut self.scores) {
            self.events.push(GameEvent::AnswerRevealed);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Clue, FinalClue};
    use crate::final_round::FinalStage;

    fn session() -> GameSession {
        GameSession::with_seed(BoardContent::sample(), 42)
    }

    /// First key on the sample board that is not a daily double
    fn plain_key(session: &GameSession) -> TileKey {
        session
            .content()
            .all_keys()
            .into_iter()
            .find(|&k| !session.is_daily_double(k))
            .unwrap()
    }

    /// Two tiles, both forced to be daily doubles
    fn all_dd_content() -> BoardContent {
        let mut clues = HashMap::new();
        clues.insert(TileKey::new(0, 50), Clue::new("q0", "a0"));
        clues.insert(TileKey::new(1, 50), Clue::new("q1", "a1"));
        BoardContent::new(
            vec!["One".to_string(), "Two".to_string()],
            vec![50],
            clues,
            FinalClue {
                category: "F".to_string(),
                question: "fq".to_string(),
                answer: "fa".to_string(),
            },
        )
    }

    #[test]
    fn test_clamp_wager_bounds() {
        assert_eq!(clamp_wager(3, 50), 5);
        assert_eq!(clamp_wager(1000, 50), 50);
        assert_eq!(clamp_wager(25, 50), 25);
        // Minimum wins when the team has less than the floor
        assert_eq!(clamp_wager(10, 0), 5);
        assert_eq!(clamp_wager(10, -200), 5);
    }

    #[test]
    fn test_seeded_sessions_agree_on_daily_doubles() {
        let a = GameSession::with_seed(BoardContent::sample(), 7);
        let b = GameSession::with_seed(BoardContent::sample(), 7);
        assert_eq!(a.daily_doubles(), b.daily_doubles());
        assert_eq!(a.daily_doubles().len(), DAILY_DOUBLE_COUNT);
    }

    #[test]
    fn test_tile_lifecycle_wrong_answers_exhaust() {
        let mut s = session();
        let key = plain_key(&s);

        assert!(s.advance_tile(key));
        assert_eq!(s.tile(key).unwrap().phase, TilePhase::QuestionShown);
        assert!(s.locked_out_teams(key).is_empty());

        s.select_team(0);
        assert!(s.judge_wrong(key));
        assert_eq!(s.scores()[0], -i64::from(key.value));
        assert_eq!(s.locked_out_teams(key), &[0]);
        assert_eq!(s.tile(key).unwrap().phase, TilePhase::QuestionShown);

        for team in 1..TEAM_COUNT {
            s.select_team(team);
            assert!(s.judge_wrong(key));
        }
        assert_eq!(s.tile(key).unwrap().phase, TilePhase::Completed);
        let events = s.drain_events();
        assert!(events.contains(&GameEvent::AnswerRevealed));
        assert!(events.contains(&GameEvent::TileCompleted));
        // Finalizing cleared the armed team
        assert_eq!(s.selected_team(), None);
    }

    #[test]
    fn test_correct_answer_awards_and_reveals() {
        let mut s = session();
        let key = plain_key(&s);
        s.advance_tile(key);
        s.select_team(2);
        assert!(s.judge_correct(key));
        assert_eq!(s.scores()[2], i64::from(key.value));
        assert_eq!(s.tile(key).unwrap().phase, TilePhase::AnswerShown);

        // Advance finalizes and clears the selection
        assert!(s.advance_tile(key));
        assert_eq!(s.tile(key).unwrap().phase, TilePhase::Completed);
        assert_eq!(s.selected_team(), None);
    }

    #[test]
    fn test_judging_without_team_is_ignored() {
        let mut s = session();
        let key = plain_key(&s);
        s.advance_tile(key);
        assert!(!s.judge_correct(key));
        assert!(!s.judge_wrong(key));
        assert_eq!(s.scores(), &[0; TEAM_COUNT]);
    }

    #[test]
    fn test_locked_out_team_cannot_retry() {
        let mut s = session();
        let key = plain_key(&s);
        s.advance_tile(key);
        s.select_team(1);
        s.judge_wrong(key);
        let after_first = s.scores()[1];
        assert!(!s.judge_wrong(key));
        assert!(!s.judge_correct(key));
        assert_eq!(s.scores()[1], after_first);
    }

    #[test]
    fn test_completed_tile_is_terminal() {
        let mut s = session();
        let key = plain_key(&s);
        s.advance_tile(key);
        s.select_team(0);
        s.judge_correct(key);
        s.advance_tile(key);
        assert_eq!(s.tile(key).unwrap().phase, TilePhase::Completed);

        assert!(!s.advance_tile(key));
        s.select_team(1);
        assert!(!s.judge_correct(key));
        assert!(!s.reveal_answer(key));
        assert_eq!(s.tile(key).unwrap().phase, TilePhase::Completed);
    }

    #[test]
    fn test_daily_double_blocked_without_team() {
        let mut s = GameSession::with_seed(all_dd_content(), 1);
        let key = s.daily_doubles()[0];
        assert!(!s.advance_tile(key));
        assert_eq!(s.tile(key).unwrap().phase, TilePhase::Hidden);

        s.select_team(0);
        assert!(s.advance_tile(key));
        assert_eq!(s.tile(key).unwrap().phase, TilePhase::WagerPending);
        assert!(s.drain_events().contains(&GameEvent::DailyDoubleTriggered));
    }

    #[test]
    fn test_wager_locks_clamped_and_reveals_question() {
        let mut s = GameSession::with_seed(all_dd_content(), 1);
        let key = s.daily_doubles()[0];
        s.select_team(0);
        s.advance_tile(key);

        // Team 0 has score 0, so the floor wins
        assert!(s.lock_wager(key, 1000));
        let tile = s.tile(key).unwrap();
        assert_eq!(tile.wager, Some(MIN_WAGER));
        assert_eq!(tile.phase, TilePhase::QuestionShown);
        assert_eq!(s.award_for(key), MIN_WAGER);

        // Judging wrong deducts the wager, not the face value
        s.judge_wrong(key);
        assert_eq!(s.scores()[0], -MIN_WAGER);
    }

    #[test]
    fn test_lock_wager_requires_pending_tile() {
        let mut s = session();
        let key = plain_key(&s);
        s.select_team(0);
        assert!(!s.lock_wager(key, 100));
        s.advance_tile(key);
        assert!(!s.lock_wager(key, 100));
    }

    #[test]
    fn test_host_reveal_skips_judging() {
        let mut s = session();
        let key = plain_key(&s);
        s.advance_tile(key);
        assert!(s.reveal_answer(key));
        assert_eq!(s.tile(key).unwrap().phase, TilePhase::AnswerShown);
        assert_eq!(s.scores(), &[0; TEAM_COUNT]);
    }

    #[test]
    fn test_hide_all_preserves_scores_and_completion() {
        let mut s = session();
        let done = plain_key(&s);
        s.advance_tile(done);
        s.select_team(0);
        s.judge_correct(done);
        s.advance_tile(done);

        let open = s
            .content()
            .all_keys()
            .into_iter()
            .find(|&k| !s.is_daily_double(k) && k != done)
            .unwrap();
        s.advance_tile(open);

        let score = s.scores()[0];
        s.hide_all();
        assert_eq!(s.tile(open).unwrap().phase, TilePhase::Hidden);
        assert_eq!(s.tile(done).unwrap().phase, TilePhase::Completed);
        assert_eq!(s.scores()[0], score);
    }

    #[test]
    fn test_reset_board_rerolls_and_zeroes() {
        let mut s = session();
        let key = plain_key(&s);
        s.advance_tile(key);
        s.select_team(3);
        s.judge_correct(key);
        assert!(s.scores()[3] > 0);

        s.reset_board();
        assert_eq!(s.scores(), &[0; TEAM_COUNT]);
        assert_eq!(s.selected_team(), None);
        assert_eq!(s.daily_doubles().len(), DAILY_DOUBLE_COUNT);
        for k in s.content().all_keys() {
            assert_eq!(s.tile(k).unwrap().phase, TilePhase::Hidden);
        }
    }

    #[test]
    fn test_tile_views_track_phase() {
        let mut s = session();
        let key = plain_key(&s);
        assert_eq!(s.tile_view(key).display, TileDisplay::Value);
        assert_eq!(s.tile_view(key).text, format!("${}", key.value));

        s.advance_tile(key);
        let view = s.tile_view(key);
        assert_eq!(view.display, TileDisplay::Question);
        assert_eq!(view.text, s.content().question(key));

        s.select_team(0);
        s.judge_correct(key);
        assert_eq!(s.tile_view(key).display, TileDisplay::Answer);

        s.advance_tile(key);
        let view = s.tile_view(key);
        assert_eq!(view.display, TileDisplay::Blank);
        assert!(view.text.is_empty());
    }

    #[test]
    fn test_board_complete_after_every_tile_plays_out() {
        let mut s = session();
        assert!(!s.board_complete());

        for key in s.content().all_keys() {
            s.select_team(0);
            if s.is_daily_double(key) {
                s.advance_tile(key);
                s.lock_wager(key, 100);
            } else {
                s.advance_tile(key);
            }
            s.judge_correct(key);
            s.advance_tile(key);
        }
        assert!(s.board_complete());
    }

    #[test]
    fn test_final_round_flow_through_session() {
        let mut s = session();

        // Give team 0 something to wager
        let key = plain_key(&s);
        s.advance_tile(key);
        s.select_team(0);
        s.judge_correct(key);
        s.advance_tile(key);
        let bank = s.scores()[0];

        s.start_final_round();
        assert_eq!(s.mode(), GameMode::FinalRound);

        s.set_final_wager(0, bank + 500);
        assert_eq!(s.final_round().wagers()[0], bank);

        assert!(s.lock_final_wagers());
        s.set_final_result(0, false);
        assert!(s.reveal_final_answer());
        assert_eq!(s.scores()[0], 0);

        // Double reveal leaves scores alone
        assert!(s.reveal_final_answer());
        assert_eq!(s.scores()[0], 0);

        s.show_leaderboard();
        s.leave_leaderboard();
        assert_eq!(s.mode(), GameMode::FinalRound);

        s.exit_final_round();
        assert_eq!(s.mode(), GameMode::Board);
        assert_eq!(s.final_round().stage, FinalStage::WagerEntry);
    }

    #[test]
    fn test_leaderboard_returns_to_board_before_apply() {
        let mut s = session();
        s.show_leaderboard();
        assert_eq!(s.mode(), GameMode::Leaderboard);
        s.leave_leaderboard();
        assert_eq!(s.mode(), GameMode::Board);
    }

    #[test]
    fn test_timer_tick_emits_event_only_in_final_round() {
        let mut s = session();
        s.tick_final_timer();
        assert!(s.drain_events().is_empty());

        s.start_final_round();
        s.lock_final_wagers();
        s.start_final_timer();
        s.tick_final_timer();
        assert!(s
            .drain_events()
            .iter()
            .any(|e| matches!(e, GameEvent::TimerTick(44))));
    }
}
