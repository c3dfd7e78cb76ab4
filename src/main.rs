//! Terminal blockfall runner (default binary).
//!
//! Renders with a framebuffer-based terminal view and drives the core
//! session with measured wall-clock time, so the simulation speed does not
//! depend on the frame rate.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{GameSession, SessionSnapshot};
use blockfall::input::{should_quit, InputState};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Target frame duration (~60 FPS). Timing inside the core is based on the
/// measured delta, not on this constant.
const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut session = GameSession::new(clock_seed());
    let view = GameView::default();
    let mut input = InputState::new();

    let mut snap = SessionSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until the next frame.
        let timeout = FRAME
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if let Some(command) = input.handle_key_press(key.code) {
                            session.apply(command);
                        }
                    }
                    KeyEventKind::Repeat => {
                        // Terminal auto-repeat only refreshes held state.
                        let _ = input.handle_key_press(key.code);
                    }
                    KeyEventKind::Release => {
                        input.handle_key_release(key.code);
                    }
                }
            }
        }

        // Tick with the real elapsed time.
        if last_tick.elapsed() >= FRAME {
            let dt = last_tick.elapsed().as_secs_f64();
            last_tick = Instant::now();

            input.update();
            session.set_left_held(input.left_held());
            session.set_right_held(input.right_held());
            session.set_soft_drop(input.soft_drop_held());

            session.tick(dt);
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
