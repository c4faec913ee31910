//! Game state module - everything one session owns
//!
//! Ties together the snake, steering, food field, score and move timing. The
//! [`Session`](crate::session::Session) drives it in a fixed order each loop
//! iteration: input resolution, food countdown, movement.

use tracing::debug;

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::food::{Food, FoodField};
use crate::rng::SimpleRng;
use crate::snake::{Segment, Snake};
use crate::speed::move_delay_ms;
use crate::steering::{Resolution, Steering};
use crate::types::*;

/// Why a move ended the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfBite,
}

/// Result of a movement attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// Move interval has not elapsed.
    NotDue,
    Moved { ate: Option<u8> },
    Crashed(Collision),
}

/// Complete per-session state
#[derive(Debug, Clone)]
pub struct GameState {
    bounds: GridBounds,
    config: EngineConfig,
    snake: Snake,
    steering: Steering,
    foods: FoodField,
    score: u32,
    last_move_ms: u64,
    move_delay_ms: u64,
}

impl GameState {
    /// Fresh session state: centred snake heading right, initial food, and the
    /// opening frame written to `out`.
    pub fn new(
        bounds: GridBounds,
        config: EngineConfig,
        rng: &mut SimpleRng,
        now_ms: u64,
        out: &mut Vec<Output>,
    ) -> Result<Self, EngineError> {
        if !bounds.fits_session() {
            return Err(EngineError::GridTooSmall {
                height: bounds.height,
                width: bounds.width,
            });
        }

        let snake = Snake::straight(
            bounds.center(),
            Direction::Right,
            INITIAL_SNAKE_LEN,
            ColorClass::snake(1),
        );
        let mut state = Self::assemble(bounds, config, snake, Direction::Right, now_ms);

        out.push(Output::ClearScreen);
        out.push(Output::DrawBorder);
        state.draw_snake(out);
        for _ in 0..config.max_foods {
            state.foods.try_spawn(bounds, &state.snake, rng, now_ms, out);
        }
        out.push(state.score_command());

        Ok(state)
    }

    /// State from an explicit layout, with no food and no output.
    ///
    /// Segments are head first and must be inside the walls, pairwise distinct,
    /// orthogonally connected, and at least `INITIAL_SNAKE_LEN` long. The
    /// heading may not point back into the neck.
    pub fn from_layout(
        bounds: GridBounds,
        config: EngineConfig,
        segments: impl IntoIterator<Item = Segment>,
        direction: Direction,
        now_ms: u64,
    ) -> Result<Self, EngineError> {
        if !bounds.fits_session() {
            return Err(EngineError::GridTooSmall {
                height: bounds.height,
                width: bounds.width,
            });
        }

        let snake = Snake::from_segments(segments)
            .ok_or(EngineError::InvalidLayout("snake has no segments"))?;
        validate_layout(&snake, bounds, direction)?;

        Ok(Self::assemble(bounds, config, snake, direction, now_ms))
    }

    fn assemble(
        bounds: GridBounds,
        config: EngineConfig,
        snake: Snake,
        direction: Direction,
        now_ms: u64,
    ) -> Self {
        Self {
            bounds,
            config,
            snake,
            steering: Steering::new(direction, config.debounce_ms, now_ms),
            foods: FoodField::new(config.max_foods, config.food_tick_ms, now_ms),
            score: 0,
            last_move_ms: now_ms,
            move_delay_ms: config.base_move_delay_ms,
        }
    }

    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn foods(&self) -> &[Food] {
        self.foods.items()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn direction(&self) -> Direction {
        self.steering.direction()
    }

    pub fn steering(&self) -> &Steering {
        &self.steering
    }

    pub fn move_delay_ms(&self) -> u64 {
        self.move_delay_ms
    }

    pub fn last_move_ms(&self) -> u64 {
        self.last_move_ms
    }

    pub fn last_food_tick_ms(&self) -> u64 {
        self.foods.last_tick_ms()
    }

    /// Earliest time at which stepping can change anything: the next move,
    /// the next food tick, or a debounced key becoming eligible.
    pub fn next_deadline_ms(&self) -> u64 {
        let next_move = self.last_move_ms + self.move_delay_ms;
        let next_tick = self.foods.last_tick_ms() + self.config.food_tick_ms;
        let deadline = next_move.min(next_tick);
        match self.steering.pending_until_ms() {
            Some(at) => deadline.min(at),
            None => deadline,
        }
    }

    /// Put a food at a chosen cell (scenario setup).
    pub fn place_food(&mut self, food: Food) -> Result<(), EngineError> {
        if self.bounds.is_wall(food.pos) {
            return Err(EngineError::InvalidLayout("food on the wall"));
        }
        self.foods.place(food, &self.snake)?;
        Ok(())
    }

    /// Buffer a key for the next resolution.
    pub fn submit(&mut self, key: InputKey) {
        self.steering.submit(key);
    }

    /// Resolve the buffered key. A turn resets the move interval to its base.
    pub fn resolve_input(&mut self, now_ms: u64) -> Resolution {
        let res = self.steering.resolve(now_ms);
        if let Resolution::Turned(_) = res {
            self.move_delay_ms = self.config.base_move_delay_ms;
        }
        res
    }

    /// Run the food countdown if due.
    pub fn tick_food(&mut self, now_ms: u64, rng: &mut SimpleRng, out: &mut Vec<Output>) -> bool {
        self.foods.tick(now_ms, self.bounds, &self.snake, rng, out)
    }

    pub fn is_move_due(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.last_move_ms) >= self.move_delay_ms
    }

    /// Move one cell if the move interval has elapsed.
    ///
    /// Collisions are tested against the body before the tail moves, so
    /// stepping into the cell the tail is about to leave is a loss.
    pub fn advance(&mut self, now_ms: u64, rng: &mut SimpleRng, out: &mut Vec<Output>) -> MoveResult {
        if !self.is_move_due(now_ms) {
            return MoveResult::NotDue;
        }

        let held = now_ms.saturating_sub(self.steering.same_direction_since_ms());
        self.move_delay_ms = move_delay_ms(
            held,
            self.config.base_move_delay_ms,
            self.config.min_move_delay_ms,
            self.config.speed_ramp_ms,
        );

        let dir = self.steering.direction();
        let old_head = self.snake.head();
        let next = old_head.pos.step(dir);

        if self.bounds.is_wall(next) {
            return MoveResult::Crashed(Collision::Wall);
        }
        if self.snake.occupies(next) {
            return MoveResult::Crashed(Collision::SelfBite);
        }

        let ate = match self.foods.take_at(next) {
            Some(food) => {
                self.score = self.score.saturating_add(food.counter as u32);
                self.snake
                    .push_head(Segment::new(next, ColorClass::snake(food.counter)));
                debug!(counter = food.counter, score = self.score, "food eaten");
                self.foods
                    .try_spawn(self.bounds, &self.snake, rng, now_ms, out);
                out.push(self.score_command());
                Some(food.counter)
            }
            None => {
                self.snake.push_head(Segment::new(next, old_head.class));
                if let Some(tail) = self.snake.pop_tail() {
                    out.push(Output::ClearCell { pos: tail.pos });
                }
                None
            }
        };

        out.push(Output::DrawCell {
            pos: old_head.pos,
            glyph: BODY_GLYPH,
            class: old_head.class,
        });
        let head = self.snake.head();
        out.push(Output::DrawCell {
            pos: head.pos,
            glyph: dir.glyph(),
            class: head.class,
        });

        self.last_move_ms = now_ms;
        MoveResult::Moved { ate }
    }

    pub fn score_command(&self) -> Output {
        Output::DrawScore(format!("Score: {}", self.score))
    }

    fn draw_snake(&self, out: &mut Vec<Output>) {
        let glyph = self.steering.direction().glyph();
        for (i, seg) in self.snake.segments().enumerate() {
            out.push(Output::DrawCell {
                pos: seg.pos,
                glyph: if i == 0 { glyph } else { BODY_GLYPH },
                class: seg.class,
            });
        }
    }
}

fn validate_layout(snake: &Snake, bounds: GridBounds, direction: Direction) -> Result<(), EngineError> {
    if snake.len() < INITIAL_SNAKE_LEN {
        return Err(EngineError::InvalidLayout("snake shorter than the starting length"));
    }
    if snake.segments().any(|s| bounds.is_wall(s.pos)) {
        return Err(EngineError::InvalidLayout("segment on the wall"));
    }
    if !snake.is_self_disjoint() {
        return Err(EngineError::InvalidLayout("segments overlap"));
    }

    let cells: Vec<Position> = snake.segments().map(|s| s.pos).collect();
    let connected = cells.windows(2).all(|w| {
        (w[0].row - w[1].row).abs() + (w[0].col - w[1].col).abs() == 1
    });
    if !connected {
        return Err(EngineError::InvalidLayout("segments are not connected"));
    }
    if cells[0].step(direction) == cells[1] {
        return Err(EngineError::InvalidLayout("heading points into the neck"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> GridBounds {
        GridBounds::new(20, 40)
    }

    fn row_snake(cols: &[i32]) -> Vec<Segment> {
        cols.iter()
            .map(|&c| Segment::new(Position::new(10, c), ColorClass::snake(1)))
            .collect()
    }

    fn layout(cols: &[i32]) -> GameState {
        GameState::from_layout(bounds(), EngineConfig::default(), row_snake(cols), Direction::Right, 0)
            .unwrap()
    }

    #[test]
    fn test_new_state_is_centred() {
        let mut rng = SimpleRng::new(5);
        let mut out = Vec::new();
        let state = GameState::new(bounds(), EngineConfig::default(), &mut rng, 0, &mut out).unwrap();

        let cells: Vec<Position> = state.snake().segments().map(|s| s.pos).collect();
        assert_eq!(
            cells,
            vec![
                Position::new(10, 20),
                Position::new(10, 19),
                Position::new(10, 18)
            ]
        );
        assert_eq!(state.direction(), Direction::Right);
        assert_eq!(state.score(), 0);
        assert_eq!(state.move_delay_ms(), BASE_MOVE_DELAY_MS);
        assert!(state.foods().len() <= MAX_FOODS);

        assert_eq!(out[0], Output::ClearScreen);
        assert_eq!(out[1], Output::DrawBorder);
        assert_eq!(
            out[2],
            Output::DrawCell {
                pos: Position::new(10, 20),
                glyph: '>',
                class: ColorClass::snake(1)
            }
        );
        assert_eq!(out.last(), Some(&Output::DrawScore("Score: 0".to_string())));
    }

    #[test]
    fn test_tiny_grid_rejected() {
        let mut rng = SimpleRng::new(5);
        let mut out = Vec::new();
        let err = GameState::new(GridBounds::new(4, 40), EngineConfig::default(), &mut rng, 0, &mut out)
            .unwrap_err();
        assert_eq!(err, EngineError::GridTooSmall { height: 4, width: 40 });
        assert!(out.is_empty());
    }

    #[test]
    fn test_layout_validation() {
        let cfg = EngineConfig::default();
        let short = row_snake(&[10, 9]);
        assert!(GameState::from_layout(bounds(), cfg, short, Direction::Right, 0).is_err());

        let gap = row_snake(&[10, 9, 7]);
        assert!(GameState::from_layout(bounds(), cfg, gap, Direction::Right, 0).is_err());

        let on_wall = row_snake(&[2, 1, 0]);
        assert!(GameState::from_layout(bounds(), cfg, on_wall, Direction::Left, 0).is_err());

        let into_neck = row_snake(&[10, 9, 8]);
        assert_eq!(
            GameState::from_layout(bounds(), cfg, into_neck, Direction::Left, 0).unwrap_err(),
            EngineError::InvalidLayout("heading points into the neck")
        );
    }

    #[test]
    fn test_move_not_due_is_noop() {
        let mut state = layout(&[10, 9, 8]);
        let mut rng = SimpleRng::new(1);
        let mut out = Vec::new();
        assert_eq!(state.advance(69, &mut rng, &mut out), MoveResult::NotDue);
        assert!(out.is_empty());
        assert_eq!(state.snake().head().pos, Position::new(10, 10));
    }

    #[test]
    fn test_plain_move_outputs() {
        let mut state = layout(&[10, 9, 8]);
        let mut rng = SimpleRng::new(1);
        let mut out = Vec::new();
        assert_eq!(state.advance(70, &mut rng, &mut out), MoveResult::Moved { ate: None });
        assert_eq!(
            out,
            vec![
                Output::ClearCell {
                    pos: Position::new(10, 8)
                },
                Output::DrawCell {
                    pos: Position::new(10, 10),
                    glyph: BODY_GLYPH,
                    class: ColorClass::snake(1)
                },
                Output::DrawCell {
                    pos: Position::new(10, 11),
                    glyph: '>',
                    class: ColorClass::snake(1)
                },
            ]
        );
        assert_eq!(state.last_move_ms(), 70);
    }

    #[test]
    fn test_move_delay_shrinks_while_held() {
        let mut state = layout(&[10, 9, 8]);
        let mut rng = SimpleRng::new(1);
        let mut out = Vec::new();
        state.advance(1000, &mut rng, &mut out);
        assert_eq!(state.move_delay_ms(), 50);
    }

    #[test]
    fn test_turn_resets_move_delay() {
        let mut state = layout(&[10, 9, 8]);
        let mut rng = SimpleRng::new(1);
        let mut out = Vec::new();
        state.advance(2000, &mut rng, &mut out);
        assert_eq!(state.move_delay_ms(), MIN_MOVE_DELAY_MS);

        state.submit(InputKey::Up);
        assert_eq!(state.resolve_input(2010), Resolution::Turned(Direction::Up));
        assert_eq!(state.move_delay_ms(), BASE_MOVE_DELAY_MS);
    }

    #[test]
    fn test_next_deadline_tracks_move_tick_and_debounce() {
        let mut state = layout(&[10, 9, 8]);
        assert_eq!(state.next_deadline_ms(), BASE_MOVE_DELAY_MS);

        let mut rng = SimpleRng::new(1);
        let mut out = Vec::new();
        state.advance(2000, &mut rng, &mut out);
        assert_eq!(state.next_deadline_ms(), FOOD_TICK_MS);
        state.tick_food(2000, &mut rng, &mut out);
        assert_eq!(state.next_deadline_ms(), 2000 + MIN_MOVE_DELAY_MS);

        state.submit(InputKey::Up);
        state.resolve_input(2010);
        state.submit(InputKey::Left);
        assert_eq!(state.resolve_input(2020), Resolution::Idle);
        assert_eq!(state.next_deadline_ms(), 2010 + DEBOUNCE_MS);
    }

    #[test]
    fn test_wall_collision() {
        let mut state = GameState::from_layout(
            bounds(),
            EngineConfig::default(),
            [
                Segment::new(Position::new(10, 38), ColorClass::snake(1)),
                Segment::new(Position::new(10, 37), ColorClass::snake(1)),
                Segment::new(Position::new(10, 36), ColorClass::snake(1)),
            ],
            Direction::Right,
            0,
        )
        .unwrap();
        let mut rng = SimpleRng::new(1);
        let mut out = Vec::new();
        assert_eq!(
            state.advance(100, &mut rng, &mut out),
            MoveResult::Crashed(Collision::Wall)
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_tail_cell_counts_as_body() {
        // A 2x2 loop: heading down from (10,10) walks into the tail at (11,10).
        let class = ColorClass::snake(1);
        let mut state = GameState::from_layout(
            bounds(),
            EngineConfig::default(),
            [
                Segment::new(Position::new(10, 10), class),
                Segment::new(Position::new(10, 11), class),
                Segment::new(Position::new(11, 11), class),
                Segment::new(Position::new(11, 10), class),
            ],
            Direction::Down,
            0,
        )
        .unwrap();
        let mut rng = SimpleRng::new(1);
        let mut out = Vec::new();
        assert_eq!(
            state.advance(70, &mut rng, &mut out),
            MoveResult::Crashed(Collision::SelfBite)
        );
    }

    #[test]
    fn test_eating_grows_and_scores() {
        let mut state = layout(&[10, 9, 8]);
        state
            .place_food(Food::new(Position::new(10, 11), 5, 0))
            .unwrap();
        let mut rng = SimpleRng::new(1);
        let mut out = Vec::new();

        assert_eq!(state.advance(70, &mut rng, &mut out), MoveResult::Moved { ate: Some(5) });
        assert_eq!(state.score(), 5);
        assert_eq!(state.snake().len(), 4);
        assert_eq!(state.snake().head().class, ColorClass::snake(5));
        assert!(state.foods().iter().all(|f| f.pos != Position::new(10, 11)));
        assert!(out.contains(&Output::DrawScore("Score: 5".to_string())));
        assert!(!out.iter().any(|o| matches!(o, Output::ClearCell { .. })));
    }

    #[test]
    fn test_place_food_rejects_wall_and_body() {
        let mut state = layout(&[10, 9, 8]);
        assert!(state.place_food(Food::new(Position::new(0, 5), 5, 0)).is_err());
        assert!(matches!(
            state.place_food(Food::new(Position::new(10, 9), 5, 0)),
            Err(EngineError::Placement(_))
        ));
    }
}
