//! Core game logic module - pure, deterministic, and testable
//!
//! This crate is the whole game engine. It has **no dependencies** on terminal
//! I/O, which makes it:
//!
//! - **Deterministic**: Same seed and same input timeline produce the same game
//! - **Testable**: Every rule is exercised without a terminal
//! - **Portable**: Any adapter that can read a clock and a key can drive it
//!
//! # Module Structure
//!
//! - [`snake`]: Segments and the snake body
//! - [`food`]: Food spawner and countdown lifecycle
//! - [`steering`]: Buffered, debounced direction changes
//! - [`speed`]: Move interval curve while a direction is held
//! - [`game_state`]: Per-session state, movement and collisions
//! - [`session`]: Running / game-over / terminated state machine
//! - [`rng`]: Seeded randomness for food placement
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{EngineConfig, Session};
//! use tui_snake_core::types::{GridBounds, InputKey, Outcome};
//!
//! let mut session = Session::new(GridBounds::new(24, 80), EngineConfig::default(), 0).unwrap();
//!
//! // First step returns the opening frame.
//! let (frame, outcome) = session.step(0, None);
//! assert!(!frame.is_empty());
//! assert_eq!(outcome, Outcome::Continue);
//!
//! // Quit is honoured immediately.
//! let (_, outcome) = session.step(10, Some(InputKey::Quit));
//! assert!(outcome.is_terminated());
//! ```
//!
//! # Timing
//!
//! Time is an external monotonic millisecond clock passed to every step. The
//! snake moves every 70ms right after a turn and speeds up to every 30ms after
//! two seconds in one direction. Food counters drop once per second.

pub mod config;
pub mod error;
pub mod food;
pub mod game_state;
pub mod rng;
pub mod session;
pub mod snake;
pub mod speed;
pub mod steering;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use config::EngineConfig;
pub use error::{EngineError, SpawnError};
pub use food::{spawn, Food, FoodField};
pub use game_state::{Collision, GameState, MoveResult};
pub use rng::SimpleRng;
pub use session::{Phase, Session};
pub use snake::{Segment, Snake};
pub use speed::move_delay_ms;
pub use steering::{Resolution, Steering};
