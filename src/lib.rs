//! # mini-arcade
//!
//! Game-state engines for two small interactive games:
//!
//! - a **sequence-memory** game: repeat a growing random sequence of
//!   signals, one more signal per round
//! - an **8-tile sliding puzzle**: restore a scrambled 3x3 board by sliding
//!   tiles into the single empty slot
//!
//! ## Design Principles
//!
//! 1. **No rendering**: the engines consume intents (start, tap, drag) and
//!    produce read-only views. Drawing, layout and assets live elsewhere.
//!
//! 2. **Explicit time**: all delays run on a virtual `Timeline` the caller
//!    advances, so every timing rule is deterministic and testable.
//!
//! 3. **Seeded randomness**: configure a seed and a game replays exactly.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, timeline, errors
//! - `rules`: `GameEngine` trait driven by the rendering layer
//! - `sequence`: sequence-memory engine
//! - `puzzle`: sliding-puzzle engine, gesture interpreter, solver

pub mod core;
pub mod puzzle;
pub mod rules;
pub mod sequence;

// Re-export commonly used types
pub use crate::core::{BoardError, ConfigError, GameRng, PuzzleConfig, SequenceConfig, Timeline};

pub use crate::rules::GameEngine;

pub use crate::sequence::{
    PlaybackState, SequenceEngine, SequenceIntent, SequenceStatus, SequenceView, SignalId,
    SignalOutcome,
};

pub use crate::puzzle::{
    drag_direction, solve, Board, BoardSnapshot, Direction, ElapsedTime, GameStatus,
    GestureInterpreter, PuzzleEngine, PuzzleIntent, PuzzleView, Slot, Tile, TileId,
};
