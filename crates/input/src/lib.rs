//! Terminal input module (session-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into held-direction intent and one-shot
//! [`GameCommand`](blockfall_types::GameCommand)s. Repeat generation is not
//! done here: the core session owns the shift-repeat throttle, so this layer
//! only tracks which keys are down, with an auto-release timeout for
//! terminals that never emit key-release events.

pub mod handler;
pub mod map;

pub use blockfall_types as types;

pub use handler::InputState;
pub use map::{map_held_key, map_one_shot, should_quit, HeldKey};
