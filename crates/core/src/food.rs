//! Food module - spawning and countdown lifecycle
//!
//! Food carries a counter that drops by one every food tick. Eating it scores
//! the current counter; letting it reach zero removes it and makes room for a
//! replacement.
//!
//! Spawning is a single attempt: pick one random cell inside the spawn margin
//! and give up if it is taken. Callers retry on a later tick.

use tracing::debug;

use crate::error::SpawnError;
use crate::rng::SimpleRng;
use crate::snake::Snake;
use crate::types::{
    ColorClass, GridBounds, Output, Position, FOOD_COUNTER_MAX, FOOD_COUNTER_MIN, FOOD_MARGIN,
};

/// A transient grid item with a decaying point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Food {
    pub pos: Position,
    /// Points awarded when eaten; also the digit shown on screen.
    pub counter: u8,
    pub spawned_at_ms: u64,
}

impl Food {
    pub fn new(pos: Position, counter: u8, spawned_at_ms: u64) -> Self {
        Self {
            pos,
            counter,
            spawned_at_ms,
        }
    }

    /// Digit glyph for the current counter.
    pub fn glyph(&self) -> char {
        char::from_digit(self.counter.min(9) as u32, 10).unwrap_or('?')
    }

    pub fn draw_command(&self) -> Output {
        Output::DrawCell {
            pos: self.pos,
            glyph: self.glyph(),
            class: ColorClass::FOOD,
        }
    }
}

/// Pick one candidate food.
///
/// Rows and columns are drawn from `FOOD_MARGIN..=edge - FOOD_MARGIN`, so food
/// never sits on or directly against the border. Only one cell is tried.
pub fn spawn(
    bounds: GridBounds,
    snake: &Snake,
    foods: &[Food],
    rng: &mut SimpleRng,
    now_ms: u64,
) -> Result<Food, SpawnError> {
    let (row_lo, row_hi) = spawn_span(bounds.height).ok_or(SpawnError::NoRoom)?;
    let (col_lo, col_hi) = spawn_span(bounds.width).ok_or(SpawnError::NoRoom)?;

    let row = rng.range_inclusive(row_lo, row_hi) as i32;
    let col = rng.range_inclusive(col_lo, col_hi) as i32;
    let counter = rng.range_inclusive(FOOD_COUNTER_MIN as u32, FOOD_COUNTER_MAX as u32) as u8;
    let pos = Position::new(row, col);

    if snake.occupies(pos) || foods.iter().any(|f| f.pos == pos) {
        return Err(SpawnError::Occupied { row, col });
    }

    Ok(Food::new(pos, counter, now_ms))
}

fn spawn_span(extent: u16) -> Option<(u32, u32)> {
    let lo = FOOD_MARGIN as u32;
    let hi = (extent as u32).checked_sub(FOOD_MARGIN as u32 + 1)?;
    (lo <= hi).then_some((lo, hi))
}

/// Active food items plus the countdown clock.
#[derive(Debug, Clone)]
pub struct FoodField {
    items: Vec<Food>,
    max_items: usize,
    tick_ms: u64,
    last_tick_ms: u64,
}

impl FoodField {
    pub fn new(max_items: usize, tick_ms: u64, now_ms: u64) -> Self {
        Self {
            items: Vec::with_capacity(max_items),
            max_items,
            tick_ms,
            last_tick_ms: now_ms,
        }
    }

    pub fn items(&self) -> &[Food] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.max_items
    }

    pub fn last_tick_ms(&self) -> u64 {
        self.last_tick_ms
    }

    pub fn at(&self, pos: Position) -> Option<&Food> {
        self.items.iter().find(|f| f.pos == pos)
    }

    /// Remove and return the food at `pos`, if any.
    pub fn take_at(&mut self, pos: Position) -> Option<Food> {
        let idx = self.items.iter().position(|f| f.pos == pos)?;
        Some(self.items.remove(idx))
    }

    /// Insert a food chosen by the caller, enforcing the no-overlap rule.
    pub fn place(&mut self, food: Food, snake: &Snake) -> Result<(), SpawnError> {
        if snake.occupies(food.pos) || self.at(food.pos).is_some() {
            return Err(SpawnError::Occupied {
                row: food.pos.row,
                col: food.pos.col,
            });
        }
        self.items.push(food);
        Ok(())
    }

    /// One spawn attempt if below the cap. Draws the new food on success.
    pub fn try_spawn(
        &mut self,
        bounds: GridBounds,
        snake: &Snake,
        rng: &mut SimpleRng,
        now_ms: u64,
        out: &mut Vec<Output>,
    ) -> bool {
        if self.is_full() {
            return false;
        }
        match spawn(bounds, snake, &self.items, rng, now_ms) {
            Ok(food) => {
                out.push(food.draw_command());
                self.items.push(food);
                true
            }
            Err(err) => {
                debug!(%err, "food spawn skipped");
                false
            }
        }
    }

    /// Run the countdown if a full tick period has passed since the last one.
    ///
    /// Each due tick decrements every counter once, emits a `PlayTick` per food,
    /// clears expired food, redraws survivors, and makes one spawn attempt when
    /// below the cap. The clock restarts at `now_ms` (no catch-up ticks).
    /// Returns whether a tick ran.
    pub fn tick(
        &mut self,
        now_ms: u64,
        bounds: GridBounds,
        snake: &Snake,
        rng: &mut SimpleRng,
        out: &mut Vec<Output>,
    ) -> bool {
        if now_ms.saturating_sub(self.last_tick_ms) < self.tick_ms {
            return false;
        }
        self.last_tick_ms = now_ms;

        let mut i = 0;
        while i < self.items.len() {
            let food = &mut self.items[i];
            food.counter = food.counter.saturating_sub(1);
            out.push(Output::PlayTick);

            if food.counter == 0 {
                let pos = food.pos;
                debug!(row = pos.row, col = pos.col, "food expired");
                out.push(Output::ClearCell { pos });
                self.items.remove(i);
            } else {
                out.push(food.draw_command());
                i += 1;
            }
        }

        self.try_spawn(bounds, snake, rng, now_ms, out);
        true
    }
}
