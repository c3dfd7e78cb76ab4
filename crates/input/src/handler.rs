//! Held-key tracking for terminal environments.
//!
//! Supports terminals that do not emit key release events by auto-releasing
//! held directions after a short timeout; terminal auto-repeat keeps
//! refreshing the timestamp while a key really is down.

use crossterm::event::KeyCode;

use blockfall_types::GameCommand;

use crate::map::{map_held_key, map_one_shot, HeldKey};

// In terminals without key-release events, a short timeout prevents a single
// tap from turning into a sustained "held" state.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

/// Tracks which directional keys are currently down.
#[derive(Debug, Clone)]
pub struct InputState {
    left: bool,
    right: bool,
    soft_drop: bool,
    last_key_time: std::time::Instant,
    release_timeout: std::time::Duration,
}

impl InputState {
    pub fn new() -> Self {
        Self::with_release_timeout_ms(DEFAULT_KEY_RELEASE_TIMEOUT_MS)
    }

    pub fn with_release_timeout_ms(timeout_ms: u64) -> Self {
        Self {
            left: false,
            right: false,
            soft_drop: false,
            last_key_time: std::time::Instant::now(),
            release_timeout: std::time::Duration::from_millis(timeout_ms),
        }
    }

    /// Feed a key press (or terminal auto-repeat press).
    ///
    /// Held directions update the intent flags and refresh the auto-release
    /// timestamp; other keys may map to a one-shot command for the session.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameCommand> {
        if let Some(held) = map_held_key(code) {
            self.last_key_time = std::time::Instant::now();
            match held {
                HeldKey::Left => self.left = true,
                HeldKey::Right => self.right = true,
                HeldKey::SoftDrop => self.soft_drop = true,
            }
            return None;
        }
        map_one_shot(code)
    }

    /// Feed a key release (terminals with the kitty protocol emit these).
    pub fn handle_key_release(&mut self, code: KeyCode) {
        match map_held_key(code) {
            Some(HeldKey::Left) => self.left = false,
            Some(HeldKey::Right) => self.right = false,
            Some(HeldKey::SoftDrop) => self.soft_drop = false,
            None => {}
        }
    }

    /// Drop all held state once no press has arrived within the timeout.
    ///
    /// Call once per frame before reading the flags.
    pub fn update(&mut self) {
        if self.any_held() && self.last_key_time.elapsed() > self.release_timeout {
            self.left = false;
            self.right = false;
            self.soft_drop = false;
        }
    }

    pub fn left_held(&self) -> bool {
        self.left
    }

    pub fn right_held(&self) -> bool {
        self.right
    }

    pub fn soft_drop_held(&self) -> bool {
        self.soft_drop
    }

    pub fn reset(&mut self) {
        self.left = false;
        self.right = false;
        self.soft_drop = false;
        self.last_key_time = std::time::Instant::now();
    }

    fn any_held(&self) -> bool {
        self.left || self.right || self.soft_drop
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
