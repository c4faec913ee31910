//! Screen: applies engine [`Output`] commands to a persistent framebuffer.
//!
//! This is the rendering adapter boundary. A command that cannot be drawn is
//! dropped and counted; it never reaches the engine. Pure, no I/O.

use tracing::trace;

use crate::fb::{CellStyle, FrameBuffer, RenderError};
use crate::palette::style_for;
use crate::types::{ColorClass, Output, Position};

const GAME_OVER_TEXT: &str = "GAME OVER!";
const RESTART_TEXT: &str = "Press 'r' to restart or 'q' to quit";

pub struct Screen {
    fb: FrameBuffer,
    pending_ticks: u32,
    dropped: u64,
}

impl Screen {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            fb: FrameBuffer::new(width, height),
            pending_ticks: 0,
            dropped: 0,
        }
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    /// Commands that failed to draw since creation.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Take the number of `PlayTick` notifications received since the last call.
    pub fn take_ticks(&mut self) -> u32 {
        std::mem::take(&mut self.pending_ticks)
    }

    pub fn apply_all<'a>(&mut self, cmds: impl IntoIterator<Item = &'a Output>) {
        for cmd in cmds {
            self.apply(cmd);
        }
    }

    /// Apply one command, swallowing render failures.
    pub fn apply(&mut self, cmd: &Output) {
        if let Err(err) = self.try_apply(cmd) {
            self.dropped += 1;
            trace!(%err, "draw command dropped");
        }
    }

    pub fn try_apply(&mut self, cmd: &Output) -> Result<(), RenderError> {
        match cmd {
            Output::ClearScreen => {
                self.fb.clear();
                Ok(())
            }
            Output::DrawBorder => self.draw_border(),
            Output::DrawCell { pos, glyph, class } => self.fb.put(*pos, *glyph, style_for(*class)),
            Output::ClearCell { pos } => self.fb.erase(*pos),
            Output::DrawScore(text) => {
                self.fb
                    .put_str_centered(0, text, style_for(ColorClass::UI_TEXT))
            }
            Output::PlayTick => {
                self.pending_ticks = self.pending_ticks.saturating_add(1);
                Ok(())
            }
            Output::ShowGameOver { score } => self.draw_game_over(*score),
        }
    }

    fn draw_border(&mut self) -> Result<(), RenderError> {
        let w = self.fb.width() as i32;
        let h = self.fb.height() as i32;
        if w < 2 || h < 2 {
            return Err(RenderError::OutOfBounds {
                row: h - 1,
                col: w - 1,
                height: self.fb.height(),
                width: self.fb.width(),
            });
        }
        let style = style_for(ColorClass::BORDER);

        self.fb.put(Position::new(0, 0), '┌', style)?;
        self.fb.put(Position::new(0, w - 1), '┐', style)?;
        self.fb.put(Position::new(h - 1, 0), '└', style)?;
        self.fb.put(Position::new(h - 1, w - 1), '┘', style)?;
        for col in 1..w - 1 {
            self.fb.put(Position::new(0, col), '─', style)?;
            self.fb.put(Position::new(h - 1, col), '─', style)?;
        }
        for row in 1..h - 1 {
            self.fb.put(Position::new(row, 0), '│', style)?;
            self.fb.put(Position::new(row, w - 1), '│', style)?;
        }
        Ok(())
    }

    fn draw_game_over(&mut self, score: u32) -> Result<(), RenderError> {
        self.fb.clear();
        let mid = self.fb.height() as i32 / 2;
        let title = style_for(ColorClass::UI_TEXT).bold();
        let plain = CellStyle::default();

        self.fb.put_str_centered(mid - 2, GAME_OVER_TEXT, title)?;
        self.fb
            .put_str_centered(mid, &format!("Final Score: {score}"), plain)?;
        self.fb.put_str_centered(mid + 2, RESTART_TEXT, plain)
    }
}
