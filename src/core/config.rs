//! Engine configuration.
//!
//! The difficulty parameters of both games live here rather than in the
//! engines, so tests and callers can read the same constants the engines
//! use:
//! - `SequenceConfig`: signal alphabet size and playback timing
//! - `PuzzleConfig`: shuffle depth, drag threshold and clock cadence

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Sequence-memory game parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceConfig {
    /// Number of distinct signals (ids `0..signal_count`).
    pub signal_count: u8,

    /// Pause before each signal lights up during playback.
    pub playback_gap_ms: u64,

    /// How long each signal stays lit during playback.
    pub signal_on_ms: u64,

    /// Pause between a completed round and the next playback.
    pub round_pause_ms: u64,

    /// How long a player's press stays lit.
    pub press_flash_ms: u64,

    /// RNG seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            signal_count: 4,
            playback_gap_ms: 500,
            signal_on_ms: 600,
            round_pause_ms: 1000,
            press_flash_ms: 300,
            seed: None,
        }
    }
}

impl SequenceConfig {
    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the signal alphabet size.
    #[must_use]
    pub fn with_signal_count(mut self, count: u8) -> Self {
        self.signal_count = count;
        self
    }

    /// Set the playback timing (gap before each signal, time lit).
    #[must_use]
    pub fn with_playback_timing(mut self, gap_ms: u64, on_ms: u64) -> Self {
        self.playback_gap_ms = gap_ms;
        self.signal_on_ms = on_ms;
        self
    }

    /// Set the pause between rounds.
    #[must_use]
    pub fn with_round_pause(mut self, pause_ms: u64) -> Self {
        self.round_pause_ms = pause_ms;
        self
    }

    pub fn playback_gap(&self) -> Duration {
        Duration::from_millis(self.playback_gap_ms)
    }

    pub fn signal_on(&self) -> Duration {
        Duration::from_millis(self.signal_on_ms)
    }

    pub fn round_pause(&self) -> Duration {
        Duration::from_millis(self.round_pause_ms)
    }

    pub fn press_flash(&self) -> Duration {
        Duration::from_millis(self.press_flash_ms)
    }

    /// Total length of one playback pass over `len` signals.
    #[must_use]
    pub fn playback_duration(&self, len: usize) -> Duration {
        (self.playback_gap() + self.signal_on()) * len as u32
    }

    /// Check the configuration for values the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.signal_count == 0 {
            return Err(ConfigError::NoSignals);
        }
        Ok(())
    }
}

/// Sliding-puzzle parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Random legal moves applied to the solved board by a shuffle.
    pub shuffle_moves: u32,

    /// Drag distance (either axis) that turns a drag into a move.
    pub drag_threshold: f32,

    /// Elapsed-time clock cadence. Each tick adds one second.
    pub clock_tick_ms: u64,

    /// RNG seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            shuffle_moves: 100,
            drag_threshold: 50.0,
            clock_tick_ms: 1000,
            seed: None,
        }
    }
}

impl PuzzleConfig {
    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of shuffle moves.
    #[must_use]
    pub fn with_shuffle_moves(mut self, moves: u32) -> Self {
        self.shuffle_moves = moves;
        self
    }

    /// Set the drag threshold.
    #[must_use]
    pub fn with_drag_threshold(mut self, threshold: f32) -> Self {
        self.drag_threshold = threshold;
        self
    }

    pub fn clock_tick(&self) -> Duration {
        Duration::from_millis(self.clock_tick_ms)
    }

    /// Check the configuration for values the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shuffle_moves == 0 {
            return Err(ConfigError::NoShuffleMoves);
        }
        if self.clock_tick_ms == 0 {
            return Err(ConfigError::ZeroClockTick);
        }
        if !self.drag_threshold.is_finite() || self.drag_threshold < 0.0 {
            return Err(ConfigError::InvalidDragThreshold(self.drag_threshold));
        }
        Ok(())
    }
}
