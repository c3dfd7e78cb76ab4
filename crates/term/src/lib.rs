//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: the game view draws a session
//! snapshot into a plain framebuffer of styled character cells, and the
//! renderer flushes that framebuffer to the terminal with crossterm. Keeping
//! the view pure (no I/O) makes it unit-testable.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
