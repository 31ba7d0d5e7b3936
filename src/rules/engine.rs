//! Engine trait for game implementations.
//!
//! The rendering layer drives every game the same way:
//! - feed user intents in with `handle`
//! - move time forward with `advance`
//! - read the projection back with `view`

use std::time::Duration;

/// Game engine trait.
///
/// ## Implementation Notes
///
/// - `handle`: Return `false` for rejected intents. Rejection is a no-op,
///   never an error.
/// - `advance`: Fire every timer due within `elapsed`, in order.
/// - `view`: Read-only; never mutates the engine.
/// - `is_finished`: True in a terminal state (game over, solved) that only
///   a fresh start leaves.
pub trait GameEngine {
    /// Inbound user intent.
    type Intent;

    /// Outbound read-only projection for rendering.
    type View;

    /// Apply a user intent. Returns whether it had any effect.
    fn handle(&mut self, intent: Self::Intent) -> bool;

    /// Advance the engine clock by `elapsed`.
    fn advance(&mut self, elapsed: Duration);

    /// Current projection.
    fn view(&self) -> Self::View;

    /// Whether the engine sits in a terminal state.
    fn is_finished(&self) -> bool;

    // === Convenience Methods ===

    /// Apply intents in order, returning how many were accepted.
    fn handle_all<I>(&mut self, intents: I) -> usize
    where
        I: IntoIterator<Item = Self::Intent>,
    {
        intents
            .into_iter()
            .map(|intent| self.handle(intent))
            .filter(|accepted| *accepted)
            .count()
    }
}
