//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, terminal rendering, tests).
//!
//! # Grid
//!
//! The grid is the terminal area reported at startup. Row 0, row `height - 1`,
//! column 0 and column `width - 1` are the wall. Every other cell is playable.
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 50 | Loop poll cadence |
//! | `DEBOUNCE_MS` | 50 | Minimum gap between accepted direction changes |
//! | `BASE_MOVE_DELAY_MS` | 70 | Move interval right after a turn |
//! | `MIN_MOVE_DELAY_MS` | 30 | Move interval floor |
//! | `SPEED_RAMP_MS` | 2000 | Time holding a direction to reach the floor |
//! | `FOOD_TICK_MS` | 1000 | Food countdown period |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, Position};
//!
//! let head = Position::new(10, 10);
//! assert_eq!(head.step(Direction::Right), Position::new(10, 11));
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//! assert_eq!(Direction::Left.glyph(), '<');
//! ```

/// Loop poll cadence in milliseconds.
pub const FRAME_MS: u64 = 50;

/// Minimum time between accepted direction changes.
pub const DEBOUNCE_MS: u64 = 50;

/// Move interval right after a direction change.
pub const BASE_MOVE_DELAY_MS: u64 = 70;

/// Fastest move interval reachable by holding a direction.
pub const MIN_MOVE_DELAY_MS: u64 = 30;

/// Time spent in one direction to reach `MIN_MOVE_DELAY_MS`.
pub const SPEED_RAMP_MS: u64 = 2000;

/// Food countdown period.
pub const FOOD_TICK_MS: u64 = 1000;

/// Maximum number of food items on the grid.
pub const MAX_FOODS: usize = 1;

/// Smallest counter a fresh food can carry.
pub const FOOD_COUNTER_MIN: u8 = 3;

/// Largest counter a fresh food can carry.
pub const FOOD_COUNTER_MAX: u8 = 9;

/// Distance (in cells, counted from the screen edge) food never spawns in.
pub const FOOD_MARGIN: u16 = 2;

/// Snake length at session start.
pub const INITIAL_SNAKE_LEN: usize = 3;

/// Smallest grid that can host a session.
pub const MIN_GRID_HEIGHT: u16 = 5;
pub const MIN_GRID_WIDTH: u16 = 6;

/// Glyph used for every snake segment except the head.
pub const BODY_GLYPH: char = '█';


/// A grid cell, row first.
///
/// Signed so a step off the top/left edge is still representable; such cells
/// are always walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The neighbouring cell one step in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dr, dc) = dir.delta();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

/// Grid dimensions as reported by the terminal. Immutable for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridBounds {
    pub height: u16,
    pub width: u16,
}

impl GridBounds {
    pub const fn new(height: u16, width: u16) -> Self {
        Self { height, width }
    }

    /// True when `pos` lies on or beyond the one-cell border.
    pub fn is_wall(&self, pos: Position) -> bool {
        pos.row <= 0
            || pos.col <= 0
            || pos.row >= self.height as i32 - 1
            || pos.col >= self.width as i32 - 1
    }

    pub fn center(&self) -> Position {
        Position::new((self.height / 2) as i32, (self.width / 2) as i32)
    }

    pub fn fits_session(&self) -> bool {
        self.height >= MIN_GRID_HEIGHT && self.width >= MIN_GRID_WIDTH
    }
}

/// Movement direction of the snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(row, col)` offset of one step.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_reverse_of(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Head glyph pointing the way the snake travels.
    pub fn glyph(self) -> char {
        match self {
            Direction::Up => '^',
            Direction::Down => 'v',
            Direction::Left => '<',
            Direction::Right => '>',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Abstract key delivered by the input port.
///
/// "No key" is expressed as `Option<InputKey>::None` at the port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKey {
    Up,
    Down,
    Left,
    Right,
    Quit,
    /// Only meaningful on the game-over screen.
    Restart,
}

impl InputKey {
    /// The direction this key steers toward, if any.
    pub fn direction(self) -> Option<Direction> {
        match self {
            InputKey::Up => Some(Direction::Up),
            InputKey::Down => Some(Direction::Down),
            InputKey::Left => Some(Direction::Left),
            InputKey::Right => Some(Direction::Right),
            InputKey::Quit | InputKey::Restart => None,
        }
    }
}

/// Presentation class attached to drawn cells.
///
/// - 1..=9: snake segments, by the food value that produced them
///   (8 and 9 are visually distinct "unique" states)
/// - 10: food digits
/// - 11: UI text
///
/// The palette itself belongs to the rendering adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorClass(u8);

impl ColorClass {
    pub const FOOD: ColorClass = ColorClass(10);
    pub const UI_TEXT: ColorClass = ColorClass(11);
    pub const BORDER: ColorClass = ColorClass(0);

    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Class for a snake segment produced by a food worth `value`, clamped to 1..=9.
    pub fn snake(value: u8) -> Self {
        Self(value.clamp(1, 9))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_unique(self) -> bool {
        matches!(self.0, 8 | 9)
    }
}

/// Command emitted by the engine for the rendering adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Wipe the whole screen (session start/restart).
    ClearScreen,
    /// Draw the one-cell wall around the grid.
    DrawBorder,
    DrawCell {
        pos: Position,
        glyph: char,
        class: ColorClass,
    },
    ClearCell {
        pos: Position,
    },
    /// Score line, centred on row 0.
    DrawScore(String),
    /// Audible notification for one food countdown step.
    PlayTick,
    ShowGameOver {
        score: u32,
    },
}

/// Result of one engine step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    /// Collision happened; awaiting restart or quit.
    GameOver { score: u32 },
    /// Player quit; the session is over.
    Terminated { score: u32 },
}

impl Outcome {
    pub fn is_terminated(&self) -> bool {
        matches!(self, Outcome::Terminated { .. })
    }
}
