//! Engine error taxonomy.
//!
//! Nothing here is fatal to a running session: spawn failures are retried on a
//! later tick, and collisions are modelled as [`Outcome::GameOver`], not errors.
//!
//! [`Outcome::GameOver`]: crate::types::Outcome::GameOver

use thiserror::Error;

/// A food spawn attempt did not produce a placeable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpawnError {
    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: i32, col: i32 },
    #[error("grid has no interior cells outside the spawn margin")]
    NoRoom,
}

/// Errors raised while building a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("grid {height}x{width} is too small for a session")]
    GridTooSmall { height: u16, width: u16 },
    #[error("invalid layout: {0}")]
    InvalidLayout(&'static str),
    #[error("food placement failed: {0}")]
    Placement(#[from] SpawnError),
}
