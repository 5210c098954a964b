//! Move outcome flags for a front end that plays moves one at a time.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use super::history::RepetitionStatus;
use super::state::Position;
use super::types::{Move, MoveList};

/// Bit set describing what happened when a move was tried.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MoveStatus(u16);

impl MoveStatus {
    pub const NONE: MoveStatus = MoveStatus(0);
    pub const CAPTURE: MoveStatus = MoveStatus(1);
    pub const CHECK: MoveStatus = MoveStatus(2);
    pub const MATE: MoveStatus = MoveStatus(4);
    /// The position repeated; see the win/loss bits for the verdict.
    pub const PERPETUAL: MoveStatus = MoveStatus(8);
    /// The opponent lost by perpetual check or chase.
    pub const PERP_WIN: MoveStatus = MoveStatus(16);
    /// The mover lost by perpetual check or chase.
    pub const PERP_LOSS: MoveStatus = MoveStatus(32);
    pub const DRAW: MoveStatus = MoveStatus(64);
    /// Rejected: the mover's general would be in check.
    pub const INCHECK: MoveStatus = MoveStatus(128);
    /// Rejected: not a pseudo-legal move.
    pub const ILLEGAL: MoveStatus = MoveStatus(256);

    #[inline]
    #[must_use]
    pub const fn contains(self, other: MoveStatus) -> bool {
        self.0 & other.0 == other.0
    }

    /// Was the move actually played?
    #[inline]
    #[must_use]
    pub const fn is_played(self) -> bool {
        self.0 & (Self::ILLEGAL.0 | Self::INCHECK.0) == 0
    }

    #[inline]
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }
}

impl BitOr for MoveStatus {
    type Output = MoveStatus;

    fn bitor(self, rhs: MoveStatus) -> MoveStatus {
        MoveStatus(self.0 | rhs.0)
    }
}

impl BitOrAssign for MoveStatus {
    fn bitor_assign(&mut self, rhs: MoveStatus) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for MoveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(MoveStatus, &str); 9] = [
            (MoveStatus::CAPTURE, "CAPTURE"),
            (MoveStatus::CHECK, "CHECK"),
            (MoveStatus::MATE, "MATE"),
            (MoveStatus::PERPETUAL, "PERPETUAL"),
            (MoveStatus::PERP_WIN, "PERP_WIN"),
            (MoveStatus::PERP_LOSS, "PERP_LOSS"),
            (MoveStatus::DRAW, "DRAW"),
            (MoveStatus::INCHECK, "INCHECK"),
            (MoveStatus::ILLEGAL, "ILLEGAL"),
        ];
        let set: Vec<&str> = NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|&(_, name)| name)
            .collect();
        if set.is_empty() {
            write!(f, "MoveStatus(NONE)")
        } else {
            write!(f, "MoveStatus({})", set.join(" | "))
        }
    }
}

impl Position {
    /// Play `mv` if it is legal and report what it did.
    ///
    /// On [`MoveStatus::ILLEGAL`] or [`MoveStatus::INCHECK`] the position is
    /// unchanged; otherwise the move stays on the board.
    pub fn try_move(&mut self, mv: Move) -> MoveStatus {
        if !self.is_pseudo_legal(mv) {
            return MoveStatus::ILLEGAL;
        }
        if !self.make_move(mv) {
            return MoveStatus::INCHECK;
        }

        let last = self.last_entry();
        let mut status = MoveStatus::NONE;
        if last.gives_check() {
            status |= MoveStatus::CHECK;
        }
        if last.is_capture() && !mv.is_promotion() {
            status |= MoveStatus::CAPTURE;
        }
        if self.is_draw() {
            status |= MoveStatus::DRAW;
        }
        if self.is_mate() {
            status |= MoveStatus::MATE;
        }

        // The verdict is for the side now to move; flip it for the mover.
        status |= match self.repetition_status(3) {
            RepetitionStatus::None => MoveStatus::NONE,
            RepetitionStatus::Draw => MoveStatus::PERPETUAL | MoveStatus::DRAW,
            RepetitionStatus::Loss => MoveStatus::PERPETUAL | MoveStatus::PERP_WIN,
            RepetitionStatus::Win => MoveStatus::PERPETUAL | MoveStatus::PERP_LOSS,
        };
        status
    }

    /// Generated moves that [`make_move`](Self::make_move) accepts, in
    /// generation order.
    pub fn legal_moves(&mut self) -> MoveList {
        let mut legal = MoveList::new();
        for &mv in self.generate_all().iter() {
            if self.try_and_undo(mv) {
                legal.push(mv);
            }
        }
        legal
    }
}
