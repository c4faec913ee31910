//! Speed-up curve for sustained movement in one direction.

/// Move interval after holding one heading for `held_ms`.
///
/// Falls linearly from `base_ms` to `min_ms` over `ramp_ms`, then stays at
/// `min_ms`. A zero ramp jumps straight to the floor.
pub fn move_delay_ms(held_ms: u64, base_ms: u64, min_ms: u64, ramp_ms: u64) -> u64 {
    if base_ms <= min_ms {
        return min_ms;
    }
    if ramp_ms == 0 {
        return min_ms;
    }
    let span = base_ms - min_ms;
    let progress = held_ms.min(ramp_ms);
    let delay = base_ms - span * progress / ramp_ms;
    delay.max(min_ms)
}
