//! Core simulation module - pure, deterministic, and testable
//!
//! This crate contains the whole falling-block simulation: the grid state
//! machine, the piece catalog, collision and rotation, the timing/difficulty
//! model, and the session that ties them together. It has **zero
//! dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: runs headless or behind any front-end
//!
//! # Module Structure
//!
//! - [`grid`]: 10x20 tagged-cell grid with collision queries and cascading
//!   line clears
//! - [`shapes`]: the seven shape matrices and square-matrix rotation
//! - [`piece`]: the active falling piece (matrix copy + board anchor)
//! - [`clock`]: gravity, shift-repeat and difficulty timers in real seconds
//! - [`rng`]: seedable generator for the uniform piece draw
//! - [`session`]: round lifecycle (spawn, fall/lock loop, line clear, score,
//!   game over, reset) and the command/query surface
//! - [`snapshot`]: read-only state copies for renderers
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameSession;
//! use blockfall_types::GameCommand;
//!
//! let mut session = GameSession::new(12345);
//!
//! session.apply(GameCommand::MoveRight);
//! session.apply(GameCommand::RotateCw);
//! session.apply(GameCommand::HardDrop);
//!
//! assert!(!session.is_game_over());
//! ```
//!
//! # Timing
//!
//! Call [`GameSession::tick`] every frame with the measured elapsed time in
//! seconds. Gravity steps once each time the fall timer exceeds the current
//! interval (`0.5 s` at level 0, 10x faster while soft drop is held, shorter
//! every 30 s of play down to a clamped minimum).

pub mod clock;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod session;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use clock::GameClock;
pub use grid::Grid;
pub use piece::ActivePiece;
pub use rng::SimpleRng;
pub use session::{GameSession, LockEvent};
pub use shapes::{catalog_matrix, ShapeMatrix};
pub use snapshot::{ActiveSnapshot, SessionSnapshot};
