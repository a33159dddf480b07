#![allow(dead_code)]

use ratatui::style::Color;
use tachyonfx::fx;
use tachyonfx::{Effect, EffectManager, Interpolation, Motion};

use quizboard_core::session::GameEvent;

/// Our keyed effect manager using tachyonfx's built-in EffectManager
pub type FxManager = EffectManager<&'static str>;

// ─── Effect Factories ────────────────────────────────────────────────

const STAGE: Color = Color::Rgb(43, 22, 16);
const GOLD: Color = Color::Rgb(255, 181, 0);
const GREEN: Color = Color::Rgb(6, 214, 160);
const RED: Color = Color::Rgb(230, 57, 70);

/// Screen transition: content sweeps in from the left
pub fn screen_transition() -> Effect {
    fx::sweep_in(
        Motion::LeftToRight,
        8,
        2,
        STAGE,
        (400, Interpolation::CubicOut),
    )
}

/// Reveal: content materializes from empty space
pub fn reveal_sweep() -> Effect {
    fx::coalesce((350, Interpolation::CubicOut))
}

/// Daily double: loud gold shimmer across the whole screen
pub fn daily_double_flash() -> Effect {
    let shift = fx::hsl_shift_fg([25.0, 0.2, 0.2], (600, Interpolation::SineInOut));
    fx::ping_pong(shift)
}

/// Correct answer: flash the foreground toward green and back
pub fn correct_flash() -> Effect {
    let shift = fx::fade_to_fg(GREEN, (150, Interpolation::QuadOut));
    let shift_back = fx::fade_from_fg(GREEN, (450, Interpolation::QuadIn));
    fx::sequence(&[shift, shift_back])
}

/// Wrong answer: flash the foreground toward red and back
pub fn incorrect_flash() -> Effect {
    let shift = fx::fade_to_fg(RED, (150, Interpolation::QuadOut));
    let shift_back = fx::fade_from_fg(RED, (450, Interpolation::QuadIn));
    fx::sequence(&[shift, shift_back])
}

/// Countdown urgency pulse for the last seconds
pub fn timer_pulse() -> Effect {
    let shift = fx::hsl_shift_fg([0.0, 0.1, 0.12], (300, Interpolation::SineInOut));
    fx::ping_pong(shift)
}

/// Gold shimmer that runs while the podium is on screen
pub fn podium_shimmer() -> Effect {
    let shift = fx::hsl_shift_fg([15.0, 0.1, 0.1], (1200, Interpolation::SineInOut));
    fx::repeating(fx::ping_pong(shift))
}

/// Dissolve out (for leaving a screen)
pub fn dissolve_out() -> Effect {
    fx::dissolve((300, Interpolation::QuadIn))
}

/// Fade score digits to gold and back after an award
pub fn score_highlight() -> Effect {
    let shift = fx::fade_to_fg(GOLD, (200, Interpolation::QuadOut));
    let shift_back = fx::fade_from_fg(GOLD, (600, Interpolation::QuadIn));
    fx::sequence(&[shift, shift_back])
}

/// Map a semantic game event to screen feedback. Fire-and-forget: the
/// effect manager absorbs everything and nothing flows back into the
/// session.
pub fn apply_feedback(fx: &mut FxManager, event: GameEvent) {
    match event {
        GameEvent::DailyDoubleTriggered => {
            fx.add_unique_effect("daily_double", daily_double_flash());
        }
        GameEvent::QuestionRevealed | GameEvent::AnswerRevealed => {
            fx.add_unique_effect("reveal", reveal_sweep());
        }
        GameEvent::Correct => {
            fx.add_unique_effect("judgement", correct_flash());
            fx.add_unique_effect("score_highlight", score_highlight());
        }
        GameEvent::Incorrect => {
            fx.add_unique_effect("judgement", incorrect_flash());
        }
        GameEvent::TileCompleted => {}
        GameEvent::TimerTick(remaining) if remaining <= 10 => {
            fx.add_unique_effect("timer", timer_pulse());
        }
        GameEvent::TimerTick(_) => {}
    }
}
