//! Terminal snake runner.
//!
//! One cooperative loop: poll the keyboard for at most one frame, step the
//! session with the monotonic clock, apply the emitted commands to the screen,
//! and flush the changed cells.

use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::info;

use tui_snake::config::AppConfig;
use tui_snake::core::Session;
use tui_snake::input::poll_key;
use tui_snake::logging;
use tui_snake::term::{Screen, TerminalRenderer};
use tui_snake::types::{GridBounds, Outcome};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(&config)?;

    let mut term = TerminalRenderer::new().with_bell(config.bell);
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();

    let score = result?;
    println!("Final score: {score}");
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<u32> {
    let (width, height) = crossterm::terminal::size()?;
    let bounds = GridBounds::new(height, width);

    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;

    let mut session = Session::new(bounds, config.engine_config(), now_ms())?;
    let mut screen = Screen::new(width, height);
    let mut out = Vec::with_capacity(64);
    let frame = Duration::from_millis(config.frame_ms);

    loop {
        // Wake for the next move or food tick, never later than one frame.
        let timeout = match session.next_deadline_ms() {
            Some(deadline) => frame.min(Duration::from_millis(deadline.saturating_sub(now_ms()))),
            None => frame,
        };
        let key = poll_key(timeout)?;

        out.clear();
        let outcome = session.step_into(now_ms(), key, &mut out);

        screen.apply_all(&out);
        term.ring(screen.take_ticks())?;
        term.draw(screen.framebuffer())?;

        if let Outcome::Terminated { score } = outcome {
            info!(score, dropped_draws = screen.dropped(), "exiting");
            return Ok(score);
        }
    }
}
