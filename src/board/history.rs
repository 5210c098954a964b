//! Repetition, draw detection and the scalars an external search needs.

use super::config::MAX_REVERSIBLE_PLIES;
use super::state::{HistoryEntry, Position, Threat, MAX_HISTORY, REP_HASH_MASK};
use super::types::PieceType;

pub const MATE_VALUE: i32 = 10_000;
/// Score for a win or loss by perpetual check or chase.
pub const BAN_VALUE: i32 = MATE_VALUE - 100;
/// Scores beyond this mean a forced result was found.
pub const WIN_VALUE: i32 = MATE_VALUE - 200;
pub const DRAW_VALUE: i32 = 20;

const NULL_OKAY_MARGIN: i32 = 200;
const NULL_SAFE_MARGIN: i32 = 400;

// Perpetual levels: bit 16 for "every move checked", bit n for "every move
// chased slot n".
const PERP_ANY: u32 = 0x1ffff;
const PERP_CHECK: u32 = 0x10000;
const PERP_CHASE: u32 = 0xffff;

/// Repetition verdict from the point of view of the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepetitionStatus {
    None,
    Draw,
    /// The side to move has been checking or chasing perpetually.
    Loss,
    /// The opponent has been checking or chasing perpetually.
    Win,
}

fn narrow(level: &mut u32, threat: Threat) {
    match threat {
        Threat::None => *level = 0,
        Threat::Check(_) => *level &= PERP_CHECK,
        Threat::Chase(slot) => *level &= 1 << slot,
    }
}

fn settle(level: u32) -> u32 {
    if level & PERP_CHASE == 0 {
        level
    } else {
        PERP_CHASE
    }
}

impl Position {
    /// Has the current position occurred `recur` more times since the last
    /// capture? If so, decide the repetition by comparing how persistently
    /// each side checked or chased. Use 1 inside a search, 3 at the root.
    #[must_use]
    pub fn repetition_status(&self, recur: u32) -> RepetitionStatus {
        if self.rep_hash[(self.zobrist.key & REP_HASH_MASK) as usize] == 0 {
            return RepetitionStatus::None;
        }

        let mut remaining = recur.max(1);
        let mut mover = self.side.opponent();
        let mut own = PERP_ANY;
        let mut other = PERP_ANY;

        for entry in self.history.iter().rev() {
            if entry.mv.is_null() || entry.is_capture() {
                break;
            }
            if mover == self.side {
                narrow(&mut own, entry.threat);
                if entry.zobrist == self.zobrist {
                    remaining -= 1;
                    if remaining == 0 {
                        let (own, other) = (settle(own), settle(other));
                        let status = if own > other {
                            RepetitionStatus::Loss
                        } else if own < other {
                            RepetitionStatus::Win
                        } else {
                            RepetitionStatus::Draw
                        };
                        #[cfg(feature = "logging")]
                        log::trace!("repetition after {} plies: {status:?}", self.distance);
                        return status;
                    }
                }
            } else {
                narrow(&mut other, entry.threat);
            }
            mover = mover.opponent();
        }
        RepetitionStatus::None
    }

    /// Drawn by lack of attackers, the reversible-ply limit or a full history.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        let attack = PieceType::Knight.slot_mask()
            | PieceType::Rook.slot_mask()
            | PieceType::Cannon.slot_mask()
            | PieceType::Pawn.slot_mask();
        let attack_both = attack as u32 | (attack as u32) << 16;
        let quiet = self.last_entry().quiet_plies;

        (!self.rules.allow_promotion && self.bit_piece & attack_both == 0)
            || quiet >= self.rules.draw_moves
            || quiet >= MAX_REVERSIBLE_PLIES
            || self.history.len() >= MAX_HISTORY
    }

    /// The record of the last move played; the root record if none.
    #[must_use]
    pub fn last_move(&self) -> &HistoryEntry {
        self.last_entry()
    }

    /// Is the side to move in check, as recorded by the last move?
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.last_entry().gives_check()
    }

    /// The side to move is missing a pawn and is not in check.
    #[must_use]
    pub fn can_promote(&self) -> bool {
        let pawns = PieceType::Pawn.slot_mask();
        self.side_bits(self.side) & pawns != pawns && !self.in_check()
    }

    /// Material balance from the side to move's point of view.
    #[must_use]
    pub fn material(&self) -> i32 {
        self.side.sign() * (self.material[0] - self.material[1])
    }

    /// Enough material for null-move pruning.
    #[must_use]
    pub fn null_okay(&self) -> bool {
        self.material[self.side.index()] > NULL_OKAY_MARGIN
    }

    /// Enough material that a null-move result needs no verification.
    #[must_use]
    pub fn null_safe(&self) -> bool {
        self.material[self.side.index()] > NULL_SAFE_MARGIN
    }

    /// Contempt-style draw score, alternating sign with search distance.
    #[must_use]
    pub fn draw_value(&self) -> i32 {
        if self.distance % 2 == 0 {
            -DRAW_VALUE
        } else {
            DRAW_VALUE
        }
    }

    #[must_use]
    pub fn repetition_value(&self, status: RepetitionStatus) -> i32 {
        let distance = self.distance as i32;
        match status {
            RepetitionStatus::Loss => distance - BAN_VALUE,
            RepetitionStatus::Win => BAN_VALUE - distance,
            RepetitionStatus::Draw | RepetitionStatus::None => self.draw_value(),
        }
    }

    /// Number of history records, the root included.
    #[must_use]
    pub fn move_number(&self) -> usize {
        self.history.len()
    }

    /// Plies made since the position was last marked irreversible.
    #[must_use]
    pub fn distance(&self) -> usize {
        self.distance
    }
}
