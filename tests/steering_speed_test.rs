//! Direction buffering, debounce and the hold-to-accelerate curve, observed
//! through the session.

use tui_snake::core::{EngineConfig, GameState, Segment, Session};
use tui_snake::types::{
    ColorClass, Direction, GridBounds, InputKey, Position, BASE_MOVE_DELAY_MS, FRAME_MS,
    MIN_MOVE_DELAY_MS,
};

fn key_for(dir: Direction) -> InputKey {
    match dir {
        Direction::Up => InputKey::Up,
        Direction::Down => InputKey::Down,
        Direction::Left => InputKey::Left,
        Direction::Right => InputKey::Right,
    }
}

fn session() -> Session {
    let config = EngineConfig::default();
    let segments = [10, 9, 8]
        .iter()
        .map(|&c| Segment::new(Position::new(10, c), ColorClass::snake(1)));
    let state = GameState::from_layout(GridBounds::new(40, 200), config, segments, Direction::Right, 0)
        .unwrap();
    Session::from_state(state, config)
}

#[test]
fn test_debounced_key_waits_then_applies() {
    let mut s = session();

    s.step(100, Some(InputKey::Up));
    assert_eq!(s.state().direction(), Direction::Up);

    // 20ms after the last accepted change: held in the buffer.
    s.step(120, Some(InputKey::Right));
    assert_eq!(s.state().direction(), Direction::Up);
    assert_eq!(s.state().steering().buffered(), Some(InputKey::Right));

    s.step(150, None);
    assert_eq!(s.state().direction(), Direction::Right);
    assert_eq!(s.state().steering().buffered(), None);
}

#[test]
fn test_latest_key_overwrites_buffer() {
    let mut s = session();
    s.step(100, Some(InputKey::Up));

    s.step(110, Some(InputKey::Left));
    s.step(120, Some(InputKey::Right));
    assert_eq!(s.state().steering().buffered(), Some(InputKey::Right));

    s.step(160, None);
    assert_eq!(s.state().direction(), Direction::Right);
}

#[test]
fn test_reverse_never_changes_direction() {
    let mut s = session();
    for (i, now) in (100..1000).step_by(60).enumerate() {
        let before = s.state().direction();
        s.step(now, Some(key_for(before.opposite())));
        assert_eq!(s.state().direction(), before, "iteration {i}");
    }
}

#[test]
fn test_quit_is_not_debounced() {
    let mut s = session();
    s.step(100, Some(InputKey::Up));
    let (_, outcome) = s.step(101, Some(InputKey::Quit));
    assert!(outcome.is_terminated());
}

#[test]
fn test_move_interval_ramps_down_while_held() {
    let mut s = session();
    let mut now = 0;
    let mut prev = BASE_MOVE_DELAY_MS;

    while now < 3000 {
        now += s.state().move_delay_ms();
        s.step(now, None);
        let delay = s.state().move_delay_ms();
        assert!(delay <= prev, "delay rose to {delay} at {now}ms");
        assert!(delay >= MIN_MOVE_DELAY_MS);
        prev = delay;
    }
    assert_eq!(prev, MIN_MOVE_DELAY_MS);
}

#[test]
fn test_turn_resets_move_interval_immediately() {
    let mut s = session();
    s.step(2500, None);
    assert_eq!(s.state().move_delay_ms(), MIN_MOVE_DELAY_MS);

    s.step(2510, Some(InputKey::Down));
    assert_eq!(s.state().direction(), Direction::Down);
    assert_eq!(s.state().move_delay_ms(), BASE_MOVE_DELAY_MS);
    // Not due yet under the reset interval: the head has not moved down.
    assert_eq!(s.state().snake().head().pos, Position::new(10, 11));

    s.step(2500 + BASE_MOVE_DELAY_MS, None);
    assert_eq!(s.state().snake().head().pos, Position::new(11, 11));
}

#[test]
fn test_same_direction_key_keeps_ramp() {
    let mut s = session();
    s.step(1500, Some(InputKey::Right));
    assert_eq!(s.state().steering().same_direction_since_ms(), 0);
    assert_eq!(s.state().steering().last_change_ms(), 1500);
}

#[test]
fn test_deadline_paced_loop_reaches_min_move_gap() {
    let mut s = session();
    let mut now = 0;
    let mut head = s.state().snake().head();
    let mut moves = Vec::new();

    while now < 3000 {
        let wait = match s.next_deadline_ms() {
            Some(deadline) => FRAME_MS.min(deadline.saturating_sub(now)),
            None => FRAME_MS,
        };
        now += wait;
        s.step(now, None);
        if s.state().snake().head() != head {
            head = s.state().snake().head();
            moves.push(now);
        }
    }

    let gaps: Vec<u64> = moves.windows(2).map(|w| w[1] - w[0]).collect();
    assert_eq!(moves[0], BASE_MOVE_DELAY_MS);
    assert_eq!(gaps.iter().copied().min(), Some(MIN_MOVE_DELAY_MS));
    assert!(gaps.iter().rev().take(5).all(|&g| g == MIN_MOVE_DELAY_MS));
}
