//! Sequence-memory game.
//!
//! The player watches a growing random sequence of signals and repeats it.
//! Each completed round adds one signal; any mistake ends the game.

mod engine;
mod signal;

pub use engine::{
    PlaybackState, SequenceEngine, SequenceIntent, SequenceStatus, SequenceView, SignalOutcome,
};
pub use signal::SignalId;
