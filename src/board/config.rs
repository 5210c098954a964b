//! Rule configuration carried by each position.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Hard cap on the reversible-ply counter.
pub const MAX_REVERSIBLE_PLIES: u16 = 100;

/// Variant rules a [`Position`](crate::Position) is played under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RuleConfig {
    /// Advisors and bishops on a back rank may turn into pawns.
    pub allow_promotion: bool,
    /// Reversible plies (checks and captures excluded) before the game is drawn.
    pub draw_moves: u16,
}

impl Default for RuleConfig {
    fn default() -> Self {
        RuleConfig {
            allow_promotion: false,
            draw_moves: MAX_REVERSIBLE_PLIES,
        }
    }
}

impl RuleConfig {
    #[must_use]
    pub fn with_promotion(mut self, allow: bool) -> Self {
        self.allow_promotion = allow;
        self
    }

    #[must_use]
    pub fn with_draw_moves(mut self, plies: u16) -> Self {
        self.draw_moves = plies;
        self
    }
}
