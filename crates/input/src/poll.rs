//! Non-blocking key polling.
//!
//! Drains every pending terminal event and keeps the last one that maps to an
//! engine key, so a burst of presses between frames collapses to the newest.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::map::map_key_event;
use crate::types::InputKey;

/// Wait up to `timeout` for input, then drain whatever else is queued.
///
/// Returns `Ok(None)` when nothing qualifying arrived. A zero timeout never blocks.
pub fn poll_key(timeout: Duration) -> Result<Option<InputKey>> {
    let mut latest = None;
    let mut wait = timeout;

    while event::poll(wait)? {
        if let Event::Key(key) = event::read()? {
            latest = fold_key(latest, key);
        }
        wait = Duration::ZERO;
    }

    Ok(latest)
}

/// Last-key-wins fold over raw key events. Releases and unmapped keys are skipped.
pub fn fold_key(latest: Option<InputKey>, key: KeyEvent) -> Option<InputKey> {
    if key.kind == KeyEventKind::Release {
        return latest;
    }
    map_key_event(key).or(latest)
}
