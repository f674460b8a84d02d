//! Turn order

use crate::board::Stone;

/// Tracks whose turn it is. Black always opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnController {
    current: Stone,
}

impl TurnController {
    pub fn new() -> Self {
        Self { current: Stone::Black }
    }

    /// The player to move
    #[inline]
    pub fn current(&self) -> Stone {
        self.current
    }

    /// Pass the turn to the other player
    #[inline]
    pub fn toggle(&mut self) {
        self.current = self.current.opponent();
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}
