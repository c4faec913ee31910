//! Direction controller: single-slot key buffer with a debounce gate.
//!
//! Keys are buffered last-key-wins. Once per loop iteration [`Steering::resolve`]
//! tries to commit the buffered key. Direction keys honour the debounce gate
//! and the no-reverse rule; quit bypasses the gate.

use tracing::trace;

use crate::types::{Direction, InputKey};

/// What a resolution attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Nothing buffered, or the debounce gate held the key back.
    Idle,
    /// Key accepted and the heading changed.
    Turned(Direction),
    /// Key accepted but it matched the current heading.
    Kept(Direction),
    /// Exact reverse of the current heading; dropped.
    Rejected(Direction),
    Quit,
}

#[derive(Debug, Clone)]
pub struct Steering {
    direction: Direction,
    buffered: Option<InputKey>,
    debounce_ms: u64,
    last_change_ms: u64,
    same_direction_since_ms: u64,
}

impl Steering {
    pub fn new(direction: Direction, debounce_ms: u64, now_ms: u64) -> Self {
        Self {
            direction,
            buffered: None,
            debounce_ms,
            last_change_ms: now_ms,
            same_direction_since_ms: now_ms,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn buffered(&self) -> Option<InputKey> {
        self.buffered
    }

    pub fn last_change_ms(&self) -> u64 {
        self.last_change_ms
    }

    /// When the current heading was first taken. Drives the speed-up ramp.
    pub fn same_direction_since_ms(&self) -> u64 {
        self.same_direction_since_ms
    }

    /// When a key held back by the debounce gate becomes eligible, if one is.
    pub fn pending_until_ms(&self) -> Option<u64> {
        self.buffered?;
        Some(self.last_change_ms + self.debounce_ms)
    }

    /// Buffer a key, replacing any unprocessed one. Non-qualifying keys are ignored.
    pub fn submit(&mut self, key: InputKey) {
        match key {
            InputKey::Up | InputKey::Down | InputKey::Left | InputKey::Right | InputKey::Quit => {
                self.buffered = Some(key);
            }
            InputKey::Restart => {}
        }
    }

    /// Try to commit the buffered key.
    ///
    /// A direction key held back by the debounce gate stays buffered for the
    /// next attempt; every other outcome clears the buffer.
    pub fn resolve(&mut self, now_ms: u64) -> Resolution {
        let Some(key) = self.buffered else {
            return Resolution::Idle;
        };

        let Some(wanted) = key.direction() else {
            self.buffered = None;
            return if key == InputKey::Quit {
                Resolution::Quit
            } else {
                Resolution::Idle
            };
        };

        if now_ms.saturating_sub(self.last_change_ms) < self.debounce_ms {
            return Resolution::Idle;
        }
        self.buffered = None;

        if wanted.is_reverse_of(self.direction) {
            trace!(current = self.direction.as_str(), "reverse rejected");
            return Resolution::Rejected(wanted);
        }

        self.last_change_ms = now_ms;
        if wanted == self.direction {
            return Resolution::Kept(wanted);
        }

        trace!(from = self.direction.as_str(), to = wanted.as_str(), "turn");
        self.direction = wanted;
        self.same_direction_since_ms = now_ms;
        Resolution::Turned(wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_key_wins() {
        let mut s = Steering::new(Direction::Right, 50, 0);
        s.submit(InputKey::Up);
        s.submit(InputKey::Down);
        assert_eq!(s.buffered(), Some(InputKey::Down));
        assert_eq!(s.resolve(100), Resolution::Turned(Direction::Down));
        assert_eq!(s.buffered(), None);
    }

    #[test]
    fn test_debounce_holds_key_until_gap_elapses() {
        let mut s = Steering::new(Direction::Right, 50, 0);
        s.submit(InputKey::Up);
        assert_eq!(s.resolve(49), Resolution::Idle);
        assert_eq!(s.buffered(), Some(InputKey::Up));
        assert_eq!(s.resolve(50), Resolution::Turned(Direction::Up));
        assert_eq!(s.last_change_ms(), 50);
        assert_eq!(s.same_direction_since_ms(), 50);
    }

    #[test]
    fn test_reverse_is_rejected_and_cleared() {
        let mut s = Steering::new(Direction::Right, 50, 0);
        s.submit(InputKey::Left);
        assert_eq!(s.resolve(100), Resolution::Rejected(Direction::Left));
        assert_eq!(s.direction(), Direction::Right);
        assert_eq!(s.buffered(), None);
        assert_eq!(s.last_change_ms(), 0);
    }

    #[test]
    fn test_same_direction_stamps_change_but_keeps_ramp() {
        let mut s = Steering::new(Direction::Right, 50, 0);
        s.submit(InputKey::Right);
        assert_eq!(s.resolve(300), Resolution::Kept(Direction::Right));
        assert_eq!(s.last_change_ms(), 300);
        assert_eq!(s.same_direction_since_ms(), 0);
    }

    #[test]
    fn test_quit_bypasses_debounce() {
        let mut s = Steering::new(Direction::Right, 50, 0);
        s.submit(InputKey::Quit);
        assert_eq!(s.resolve(1), Resolution::Quit);
        assert_eq!(s.buffered(), None);
    }

    #[test]
    fn test_restart_is_not_buffered_while_steering() {
        let mut s = Steering::new(Direction::Right, 50, 0);
        s.submit(InputKey::Up);
        s.submit(InputKey::Restart);
        assert_eq!(s.buffered(), Some(InputKey::Up));
    }
}
