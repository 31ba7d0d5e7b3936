//! Construction-time errors.
//!
//! Gameplay itself never fails: rejected intents are no-ops. Errors only
//! surface when building an engine or a board from caller-supplied values.

/// Invalid engine configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("signal_count must be at least 1")]
    NoSignals,

    #[error("shuffle_moves must be at least 1")]
    NoShuffleMoves,

    #[error("clock_tick_ms must be greater than zero")]
    ZeroClockTick,

    #[error("drag_threshold must be finite and non-negative, got {0}")]
    InvalidDragThreshold(f32),
}

/// Invalid explicit board arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("slot {slot} for tile {tile} is outside the 3x3 grid")]
    SlotOutOfRange { tile: u8, slot: u8 },

    #[error("slot {slot} is assigned to both tile {first} and tile {second}")]
    DuplicateSlot { slot: u8, first: u8, second: u8 },
}
