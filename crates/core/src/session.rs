//! Session state machine: `Running -> GameOver -> (Restart -> Running | Quit -> Terminated)`.
//!
//! A session is a single step function. Adapters feed it the clock and the
//! latest key, then render the returned commands. The game-over prompt is a
//! phase, not a blocking loop, so headless harnesses drive it the same way.

use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::game_state::{GameState, MoveResult};
use crate::rng::SimpleRng;
use crate::steering::Resolution;
use crate::types::{GridBounds, InputKey, Outcome, Output};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver { score: u32 },
    Terminated { score: u32 },
}

#[derive(Debug, Clone)]
pub struct Session {
    bounds: GridBounds,
    config: EngineConfig,
    rng: SimpleRng,
    state: GameState,
    phase: Phase,
    /// Output produced outside of `step_into` (opening frame), flushed first.
    pending: Vec<Output>,
    episode_id: u32,
}

impl Session {
    /// Start a session. The opening frame is returned by the first step.
    pub fn new(bounds: GridBounds, config: EngineConfig, now_ms: u64) -> Result<Self, EngineError> {
        let mut rng = SimpleRng::new(config.seed);
        let mut pending = Vec::new();
        let state = GameState::new(bounds, config, &mut rng, now_ms, &mut pending)?;
        info!(height = bounds.height, width = bounds.width, seed = config.seed, "session started");

        Ok(Self {
            bounds,
            config,
            rng,
            state,
            phase: Phase::Running,
            pending,
            episode_id: 0,
        })
    }

    /// Wrap a prepared state (scenario setup). No opening frame is queued.
    pub fn from_state(state: GameState, config: EngineConfig) -> Self {
        Self {
            bounds: state.bounds(),
            config,
            rng: SimpleRng::new(config.seed),
            state,
            phase: Phase::Running,
            pending: Vec::new(),
            episode_id: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of restarts so far.
    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn outcome(&self) -> Outcome {
        match self.phase {
            Phase::Running => Outcome::Continue,
            Phase::GameOver { score } => Outcome::GameOver { score },
            Phase::Terminated { score } => Outcome::Terminated { score },
        }
    }

    /// When the running game next needs a step. `Some(0)` while the opening
    /// frame is still queued; `None` once only a key can change anything.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        match self.phase {
            Phase::Running if !self.pending.is_empty() => Some(0),
            Phase::Running => Some(self.state.next_deadline_ms()),
            Phase::GameOver { .. } | Phase::Terminated { .. } => None,
        }
    }

    /// Advance one loop iteration, appending render commands to `out`.
    ///
    /// Order within an iteration: input resolution, food countdown, movement.
    /// A quit short-circuits the rest.
    pub fn step_into(&mut self, now_ms: u64, key: Option<InputKey>, out: &mut Vec<Output>) -> Outcome {
        out.append(&mut self.pending);

        match self.phase {
            Phase::Running => self.step_running(now_ms, key, out),
            Phase::GameOver { .. } => {
                match key {
                    Some(InputKey::Restart) => {
                        if let Err(err) = self.restart(now_ms, out) {
                            warn!(%err, "restart failed");
                        }
                    }
                    Some(InputKey::Quit) => {
                        self.terminate();
                    }
                    _ => {}
                }
                self.outcome()
            }
            Phase::Terminated { .. } => self.outcome(),
        }
    }

    /// Allocating convenience wrapper around [`Session::step_into`].
    pub fn step(&mut self, now_ms: u64, key: Option<InputKey>) -> (Vec<Output>, Outcome) {
        let mut out = Vec::new();
        let outcome = self.step_into(now_ms, key, &mut out);
        (out, outcome)
    }

    /// Replace the game with a fresh one. The RNG stream carries on.
    pub fn restart(&mut self, now_ms: u64, out: &mut Vec<Output>) -> Result<(), EngineError> {
        let state = GameState::new(self.bounds, self.config, &mut self.rng, now_ms, out)?;
        self.state = state;
        self.phase = Phase::Running;
        self.episode_id = self.episode_id.wrapping_add(1);
        info!(episode = self.episode_id, "session restarted");
        Ok(())
    }

    /// End the session with the current score.
    pub fn terminate(&mut self) -> Outcome {
        let score = match self.phase {
            Phase::GameOver { score } | Phase::Terminated { score } => score,
            Phase::Running => self.state.score(),
        };
        if !matches!(self.phase, Phase::Terminated { .. }) {
            info!(score, "session terminated");
        }
        self.phase = Phase::Terminated { score };
        self.outcome()
    }

    fn step_running(&mut self, now_ms: u64, key: Option<InputKey>, out: &mut Vec<Output>) -> Outcome {
        if let Some(key) = key {
            self.state.submit(key);
        }

        if self.state.resolve_input(now_ms) == Resolution::Quit {
            return self.terminate();
        }

        self.state.tick_food(now_ms, &mut self.rng, out);

        if let MoveResult::Crashed(collision) = self.state.advance(now_ms, &mut self.rng, out) {
            let score = self.state.score();
            info!(?collision, score, "game over");
            self.phase = Phase::GameOver { score };
            out.push(Output::ShowGameOver { score });
        }

        self.outcome()
    }
}
