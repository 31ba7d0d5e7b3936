//! Shared building blocks: RNG, configuration, timeline, errors.
//!
//! Both engines are built from these pieces but share no game state.

pub mod config;
pub mod error;
pub mod rng;
pub mod timer;

pub use config::{PuzzleConfig, SequenceConfig};
pub use error::{BoardError, ConfigError};
pub use rng::GameRng;
pub use timer::Timeline;
