//! Game session module - the round lifecycle and command surface
//!
//! `GameSession` owns every piece of mutable game state: the grid, the
//! active piece, the clock, the RNG, the held-input intent, and the score.
//! Front-ends drive it with [`GameSession::tick`] plus the discrete command
//! set, and read it through snapshots; nothing outside the session mutates
//! core state directly.
//!
//! Round lifecycle: spawn, fall/lock loop, line clear, score update, then
//! either the next spawn or game over. A spawn that collides immediately is
//! the game-over condition; after it only [`GameSession::reset`] is
//! accepted, every other command is a silent no-op.

use crate::clock::GameClock;
use crate::grid::Grid;
use crate::piece::ActivePiece;
use crate::rng::SimpleRng;
use crate::snapshot::{ActiveSnapshot, SessionSnapshot};
use blockfall_types::{GameCommand, PieceKind, RotateDir, LINE_SCORES};

/// Held directional keys, mirrored from the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct InputIntent {
    left: bool,
    right: bool,
    soft_drop: bool,
}

/// What happened the last time a piece locked (consumed by observers)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub points: u32,
}

/// Complete game state with explicit lifecycle
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    active: Option<ActivePiece>,
    rng: SimpleRng,
    clock: GameClock,
    intent: InputIntent,
    score: u32,
    game_over: bool,
    last_event: Option<LockEvent>,
}

fn line_points(lines: usize) -> u32 {
    LINE_SCORES.get(lines).copied().unwrap_or(0)
}

impl GameSession {
    /// Create a session and spawn its first piece.
    ///
    /// The first spawn on an empty grid can never collide, so a fresh
    /// session is always playable.
    pub fn new(seed: u32) -> Self {
        let mut session = Self {
            grid: Grid::new(),
            active: None,
            rng: SimpleRng::new(seed),
            clock: GameClock::new(),
            intent: InputIntent::default(),
            score: 0,
            game_over: false,
            last_event: None,
        };
        session.spawn_next();
        session
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.clock.level()
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.clock.elapsed_secs()
    }

    pub fn fall_interval_secs(&self) -> f64 {
        self.clock.fall_interval_secs()
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    /// Take and clear the last lock/line-clear event
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Advance the simulation by `dt` seconds of real time.
    ///
    /// Fires at most one shift-repeat step and one gravity step; a failed
    /// gravity step locks the piece, clears lines, scores, and respawns.
    /// Frozen while game over.
    pub fn tick(&mut self, dt: f64) {
        if self.game_over {
            return;
        }

        self.clock.advance(dt);

        if self.clock.take_shift_step() {
            if self.intent.left {
                self.shift(-1);
            }
            if self.intent.right {
                self.shift(1);
            }
        }

        if self.clock.take_fall_step(self.intent.soft_drop) {
            self.descend();
        }
    }

    /// Move the active piece one cell left
    pub fn move_left(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.shift(-1)
    }

    /// Move the active piece one cell right
    pub fn move_right(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.shift(1)
    }

    /// Rotate the active piece; a blocked rotation is rejected outright
    pub fn rotate(&mut self, dir: RotateDir) -> bool {
        if self.game_over {
            return false;
        }
        match self.active.as_mut() {
            Some(piece) => piece.try_rotate(&self.grid, dir),
            None => false,
        }
    }

    /// Drop the active piece to the floor and lock it immediately
    pub fn hard_drop(&mut self) -> bool {
        if self.game_over || self.active.is_none() {
            return false;
        }
        if let Some(piece) = self.active.as_mut() {
            piece.drop_to_floor(&self.grid);
        }
        self.lock_active();
        true
    }

    /// Update the held soft-drop flag (gravity runs 10x while held)
    pub fn set_soft_drop(&mut self, held: bool) {
        if self.game_over {
            return;
        }
        self.intent.soft_drop = held;
    }

    /// Update the held move-left flag, consumed by the shift-repeat gate
    pub fn set_left_held(&mut self, held: bool) {
        if self.game_over {
            return;
        }
        self.intent.left = held;
    }

    /// Update the held move-right flag, consumed by the shift-repeat gate
    pub fn set_right_held(&mut self, held: bool) {
        if self.game_over {
            return;
        }
        self.intent.right = held;
    }

    /// Start a fresh round: empty grid, zero score, new time origin.
    ///
    /// Accepted in any state; this is the only command that works during
    /// game over.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.score = 0;
        self.clock.reset();
        self.intent = InputIntent::default();
        self.game_over = false;
        self.last_event = None;
        self.active = None;
        self.spawn_next();
    }

    /// Apply a discrete command
    pub fn apply(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::MoveLeft => self.move_left(),
            GameCommand::MoveRight => self.move_right(),
            GameCommand::RotateCw => self.rotate(RotateDir::Clockwise),
            GameCommand::RotateCcw => self.rotate(RotateDir::CounterClockwise),
            GameCommand::HardDrop => self.hard_drop(),
            GameCommand::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Fill a reusable snapshot with the current state
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        self.grid.write_rows(&mut out.board);
        out.active = self.active.as_ref().map(ActiveSnapshot::from);
        out.score = self.score;
        out.level = self.clock.level();
        out.elapsed_secs = self.clock.elapsed_secs();
        out.fall_interval_secs = self.clock.fall_interval_secs();
        out.game_over = self.game_over;
    }

    /// Allocate and fill a fresh snapshot
    pub fn snapshot(&self) -> SessionSnapshot {
        let mut snap = SessionSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    fn shift(&mut self, dx: i8) -> bool {
        match self.active.as_mut() {
            Some(piece) => piece.try_move(&self.grid, dx, 0),
            None => false,
        }
    }

    /// One gravity step; landing locks the piece and continues the round.
    fn descend(&mut self) {
        let moved = match self.active.as_mut() {
            Some(piece) => piece.try_move(&self.grid, 0, 1),
            None => return,
        };
        if !moved {
            self.lock_active();
        }
    }

    /// Merge the active piece into the grid, clear lines, score, respawn.
    fn lock_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        self.grid.lock(piece.matrix(), piece.x(), piece.y());

        let lines = self.grid.clear_complete_rows();
        let points = line_points(lines);
        self.score += points;
        self.last_event = Some(LockEvent {
            lines_cleared: lines as u32,
            points,
        });

        self.spawn_next();
    }

    /// Draw a kind uniformly and spawn it; an immediate collision ends the
    /// round instead of completing the spawn.
    fn spawn_next(&mut self) {
        let kind = PieceKind::ALL[self.rng.next_range(7) as usize];
        let piece = ActivePiece::spawn(kind);
        if piece.collides(&self.grid) {
            self.game_over = true;
        } else {
            self.active = Some(piece);
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}
