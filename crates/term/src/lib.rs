//! Terminal rendering adapter.
//!
//! Interprets engine [`Output`](crate::types::Output) commands into a
//! framebuffer and flushes it to the terminal with crossterm.
//!
//! - [`screen`]: command interpreter; swallows draw failures at the boundary
//! - [`palette`]: colour classes to styles
//! - [`fb`]: framebuffer and styles
//! - [`renderer`]: diffing terminal writer

pub mod fb;
pub mod palette;
pub mod renderer;
pub mod screen;

pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, RenderError, Rgb};
pub use palette::style_for;
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, TerminalRenderer};
pub use screen::Screen;
