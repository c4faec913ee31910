//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::InputKey`] and offers a
//! non-blocking poll that returns "latest key or none" once per frame.

pub mod map;
pub mod poll;

pub use tui_snake_types as types;

pub use map::{map_key_event, should_quit};
pub use poll::{fold_key, poll_key};
