//! Signal identifiers.

use serde::{Deserialize, Serialize};

/// One of the interchangeable stimuli the player must repeat.
///
/// The engine doesn't interpret a signal beyond its index. Which colour
/// or sound it maps to is a rendering concern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignalId(pub u8);

impl SignalId {
    /// Create a new signal ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// All signal ids of an alphabet with `count` signals.
    pub fn all(count: u8) -> impl Iterator<Item = SignalId> {
        (0..count).map(SignalId)
    }
}

impl std::fmt::Display for SignalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Signal({})", self.0)
    }
}
