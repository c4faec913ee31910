//! Runtime configuration for the terminal binary.
//!
//! Read once at startup from `SNAKE_*` environment variables. The engine never
//! sees the environment; it only gets the seed through `EngineConfig`.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::EngineConfig;
use crate::types::FRAME_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Food placement seed.
    pub seed: u32,
    /// Loop poll cadence.
    pub frame_ms: u64,
    /// Ring the terminal bell on food countdown ticks.
    pub bell: bool,
    /// Log file; logging is off when unset.
    pub log_path: Option<String>,
    /// `tracing` filter directive.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            frame_ms: FRAME_MS,
            bell: false,
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Create from environment variables.
    ///
    /// - `SNAKE_SEED`: u32 seed (default: derived from the wall clock)
    /// - `SNAKE_FRAME_MS`: poll cadence in ms, clamped to 1..=1000 (default: 50)
    /// - `SNAKE_BELL`: "1" or "true" to enable the bell
    /// - `SNAKE_LOG_PATH`: log file path
    /// - `SNAKE_LOG`: log filter (default: "info")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("SNAKE_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let frame_ms = lookup("SNAKE_FRAME_MS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(|ms| ms.clamp(1, 1000))
            .unwrap_or(FRAME_MS);

        let bell = lookup("SNAKE_BELL")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let log_path = lookup("SNAKE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let log_filter = lookup("SNAKE_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "info".to_string());

        Self {
            seed,
            frame_ms,
            bell,
            log_path,
            log_filter,
        }
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::default().with_seed(self.seed)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
