//! Clock module - gravity, shift repeat, and difficulty timing
//!
//! Every timer accumulates real elapsed seconds, so the simulation runs at
//! the same speed under any frame rate. A timer fires when it exceeds its
//! interval and then resets to zero; overshoot past one interval is
//! discarded, so a long frame produces at most one step.

use blockfall_types::{
    BASE_FALL_INTERVAL_SECS, LEVEL_PERIOD_SECS, LEVEL_SPEED_STEP, MIN_FALL_INTERVAL_SECS,
    SHIFT_REPEAT_SECS, SOFT_DROP_DIVISOR,
};

/// Timers owned by a game session
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GameClock {
    elapsed_secs: f64,
    fall_timer: f64,
    shift_timer: f64,
}

impl GameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance every timer by `dt` seconds
    pub fn advance(&mut self, dt: f64) {
        self.elapsed_secs += dt;
        self.fall_timer += dt;
        self.shift_timer += dt;
    }

    /// Seconds of play since the session (or last reset) began
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    /// Difficulty level: one step per `LEVEL_PERIOD_SECS` of play
    pub fn level(&self) -> u32 {
        (self.elapsed_secs / LEVEL_PERIOD_SECS) as u32
    }

    /// Current gravity interval in seconds, clamped to the configured floor
    pub fn fall_interval_secs(&self) -> f64 {
        let factor = 1.0 - self.level() as f64 * LEVEL_SPEED_STEP;
        (BASE_FALL_INTERVAL_SECS * factor).max(MIN_FALL_INTERVAL_SECS)
    }

    /// Consume one gravity step if the fall timer has expired.
    ///
    /// While soft drop is held the effective interval is divided by
    /// `SOFT_DROP_DIVISOR`.
    pub fn take_fall_step(&mut self, soft_drop: bool) -> bool {
        let mut interval = self.fall_interval_secs();
        if soft_drop {
            interval /= SOFT_DROP_DIVISOR;
        }
        if self.fall_timer > interval {
            self.fall_timer = 0.0;
            return true;
        }
        false
    }

    /// Consume one horizontal-repeat step if its timer has expired.
    ///
    /// The repeat timer runs regardless of whether a direction is held, as a
    /// fixed-rate gate; the session decides what (if anything) to move.
    pub fn take_shift_step(&mut self) -> bool {
        if self.shift_timer > SHIFT_REPEAT_SECS {
            self.shift_timer = 0.0;
            return true;
        }
        false
    }

    /// Restart the elapsed-time origin and clear both step timers
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
