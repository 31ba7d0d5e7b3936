//! Engine trait shared by both games.
//!
//! The rendering layer only ever talks to a game through `GameEngine`:
//! intents in, projections out, time moved forward explicitly. It holds
//! no decision logic of its own.

pub mod engine;

pub use engine::GameEngine;
