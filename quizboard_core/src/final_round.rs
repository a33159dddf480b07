use crate::scoring::apply_final_wagers;
use crate::session::TEAM_COUNT;

/// Countdown length in seconds
pub const FINAL_COUNTDOWN_START: u32 = 45;

/// The phase within the final round. Transitions are one-way:
/// wagers freeze when the question is revealed, and the answer
/// reveal is where scores get applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinalStage {
    WagerEntry,
    QuestionShown,
    AnswerShown,
}

/// End-of-game controller: collects one wager per team, reveals the
/// question, takes per-team correctness marks, and applies all wagers
/// to the scores exactly once.
#[derive(Debug, Clone)]
pub struct FinalRound {
    pub stage: FinalStage,
    wagers: [i64; TEAM_COUNT],
    results: [bool; TEAM_COUNT],
    applied: bool,
    countdown: u32,
    timer_running: bool,
}

impl Default for FinalRound {
    fn default() -> Self {
        Self::new()
    }
}

impl FinalRound {
    pub fn new() -> Self {
        Self {
            stage: FinalStage::WagerEntry,
            wagers: [0; TEAM_COUNT],
            results: [true; TEAM_COUNT],
            applied: false,
            countdown: FINAL_COUNTDOWN_START,
            timer_running: false,
        }
    }

    pub fn wagers(&self) -> &[i64; TEAM_COUNT] {
        &self.wagers
    }

    pub fn results(&self) -> &[bool; TEAM_COUNT] {
        &self.results
    }

    pub fn applied(&self) -> bool {
        self.applied
    }

    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    pub fn timer_running(&self) -> bool {
        self.timer_running
    }

    /// Store a wager during entry, clamped to [0, team's current score].
    /// No-op once wagers are locked.
    pub fn set_wager(&mut self, team: usize, amount: i64, team_score: i64) {
        if self.stage != FinalStage::WagerEntry || team >= TEAM_COUNT {
            return;
        }
        self.wagers[team] = amount.clamp(0, team_score.max(0));
    }

    /// Freeze wagers and reveal the question
    pub fn lock_wagers(&mut self) -> bool {
        if self.stage != FinalStage::WagerEntry {
            return false;
        }
        self.stage = FinalStage::QuestionShown;
        true
    }

    /// Mark a team correct or wrong. Freely togglable until scores apply.
    pub fn set_result(&mut self, team: usize, correct: bool) {
        if self.stage == FinalStage::WagerEntry || self.applied || team >= TEAM_COUNT {
            return;
        }
        self.results[team] = correct;
    }

    /// Reveal the answer. Applies wagers to `scores` exactly once; a
    /// second call still returns true (the answer stays revealed) but
    /// leaves scores untouched. Cancels the countdown.
    pub fn reveal_answer(&mut self, scores: &mut [i64; TEAM_COUNT]) -> bool {
        if self.stage == FinalStage::WagerEntry {
            return false;
        }
        if !self.applied {
            let updated = apply_final_wagers(scores, &self.wagers, &self.results);
            scores.copy_from_slice(&updated);
            self.applied = true;
        }
        self.stage = FinalStage::AnswerShown;
        self.stop_timer();
        true
    }

    /// Start (or restart) the countdown at 45. Only meaningful while
    /// the question is open.
    pub fn start_timer(&mut self) {
        if self.stage != FinalStage::QuestionShown {
            return;
        }
        self.countdown = FINAL_COUNTDOWN_START;
        self.timer_running = true;
    }

    pub fn stop_timer(&mut self) {
        self.timer_running = false;
    }

    /// One-second tick from the host loop. Returns the remaining count
    /// while running; a stopped timer never ticks.
    pub fn tick_timer(&mut self) -> Option<u32> {
        if !self.timer_running {
            return None;
        }
        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown == 0 {
            self.timer_running = false;
        }
        Some(self.countdown)
    }

    /// Back to initial wager entry; stops the countdown
    pub fn reset(&mut self) {
        *self = FinalRound::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wager_entry_clamps_live() {
        let mut round = FinalRound::new();
        round.set_wager(0, 500, 300);
        assert_eq!(round.wagers()[0], 300);
        round.set_wager(0, -10, 300);
        assert_eq!(round.wagers()[0], 0);
        round.set_wager(1, 50, -100);
        assert_eq!(round.wagers()[1], 0);
    }

    #[test]
    fn test_wagers_freeze_after_lock() {
        let mut round = FinalRound::new();
        round.set_wager(0, 100, 200);
        assert!(round.lock_wagers());
        round.set_wager(0, 150, 200);
        assert_eq!(round.wagers()[0], 100);
        // Locking twice is a no-op
        assert!(!round.lock_wagers());
    }

    #[test]
    fn test_results_toggle_until_applied() {
        let mut round = FinalRound::new();
        // No marking during wager entry
        round.set_result(0, false);
        assert!(round.results()[0]);

        round.lock_wagers();
        round.set_result(0, false);
        assert!(!round.results()[0]);
        round.set_result(0, true);
        assert!(round.results()[0]);

        let mut scores = [0i64; TEAM_COUNT];
        round.reveal_answer(&mut scores);
        round.set_result(0, false);
        assert!(round.results()[0]);
    }

    #[test]
    fn test_reveal_applies_exactly_once() {
        let mut round = FinalRound::new();
        let mut scores = [100, 200, 300, 400];
        round.set_wager(0, 10, scores[0]);
        round.set_wager(1, 20, scores[1]);
        round.set_wager(2, 30, scores[2]);
        round.set_wager(3, 40, scores[3]);
        round.lock_wagers();
        round.set_result(1, false);
        round.set_result(3, false);

        assert!(round.reveal_answer(&mut scores));
        assert_eq!(scores, [110, 180, 330, 360]);

        // Second reveal is a scoring no-op
        assert!(round.reveal_answer(&mut scores));
        assert_eq!(scores, [110, 180, 330, 360]);
    }

    #[test]
    fn test_reveal_requires_question_stage() {
        let mut round = FinalRound::new();
        let mut scores = [0i64; TEAM_COUNT];
        assert!(!round.reveal_answer(&mut scores));
        assert!(!round.applied());
    }

    #[test]
    fn test_timer_counts_down_and_stops_at_zero() {
        let mut round = FinalRound::new();
        round.lock_wagers();
        round.start_timer();
        assert!(round.timer_running());
        assert_eq!(round.tick_timer(), Some(44));

        for _ in 0..43 {
            round.tick_timer();
        }
        assert_eq!(round.tick_timer(), Some(0));
        assert!(!round.timer_running());
        assert_eq!(round.tick_timer(), None);
    }

    #[test]
    fn test_timer_restart_resets_to_full() {
        let mut round = FinalRound::new();
        round.lock_wagers();
        round.start_timer();
        round.tick_timer();
        round.tick_timer();
        round.start_timer();
        assert_eq!(round.countdown(), FINAL_COUNTDOWN_START);
    }

    #[test]
    fn test_timer_cancelled_on_reveal_and_reset() {
        let mut round = FinalRound::new();
        round.lock_wagers();
        round.start_timer();
        let mut scores = [0i64; TEAM_COUNT];
        round.reveal_answer(&mut scores);
        assert!(!round.timer_running());
        assert_eq!(round.tick_timer(), None);

        let mut round = FinalRound::new();
        round.lock_wagers();
        round.start_timer();
        round.reset();
        assert!(!round.timer_running());
        assert_eq!(round.stage, FinalStage::WagerEntry);
        assert_eq!(round.countdown(), FINAL_COUNTDOWN_START);
    }

    #[test]
    fn test_timer_only_starts_while_question_open() {
        let mut round = FinalRound::new();
        round.start_timer();
        assert!(!round.timer_running());
    }
}
