//! Engine tuning. Every field has the built-in default; the session never
//! reads the environment itself.

use crate::types::{
    BASE_MOVE_DELAY_MS, DEBOUNCE_MS, FOOD_TICK_MS, MAX_FOODS, MIN_MOVE_DELAY_MS, SPEED_RAMP_MS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub debounce_ms: u64,
    pub base_move_delay_ms: u64,
    pub min_move_delay_ms: u64,
    pub speed_ramp_ms: u64,
    pub food_tick_ms: u64,
    pub max_foods: usize,
    /// Seed for food placement.
    pub seed: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEBOUNCE_MS,
            base_move_delay_ms: BASE_MOVE_DELAY_MS,
            min_move_delay_ms: MIN_MOVE_DELAY_MS,
            speed_ramp_ms: SPEED_RAMP_MS,
            food_tick_ms: FOOD_TICK_MS,
            max_foods: MAX_FOODS,
            seed: 1,
        }
    }
}

impl EngineConfig {
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }
}
