//! Check, protection and chase detection.

use super::state::{Check, Position};
use super::tables::geometry::{
    advisor_span, bishop_pin, bishop_span, king_span, knight_pin, FILE_BIT, RANK_BIT,
};
use super::tables::SlideMask;
use super::types::{Color, Move, Piece, PieceType, Square};

/// Does a slider standing on `from` reach `target` through the lines
/// described by `rank`/`file`? `field` picks rook or cannon reach.
#[inline]
fn line_reaches(
    rank: &SlideMask,
    file: &SlideMask,
    from: Square,
    target: Square,
    field: fn(&SlideMask) -> u16,
) -> bool {
    if from.same_file(target) {
        field(file) & FILE_BIT[target.index()] != 0
    } else if from.same_rank(target) {
        field(rank) & RANK_BIT[target.index()] != 0
    } else {
        false
    }
}

fn rook_reach(mask: &SlideMask) -> u16 {
    mask.rook_cap
}

fn cannon_reach(mask: &SlideMask) -> u16 {
    mask.cannon_cap
}

struct Checkers {
    lazy: bool,
    first: Option<Piece>,
}

impl Checkers {
    /// Record an attacker; returns the verdict once no more scanning is needed.
    fn add(&mut self, pc: Piece) -> Option<Check> {
        match self.first {
            Some(_) => Some(Check::Multiple),
            None if self.lazy => Some(Check::Single(pc)),
            None => {
                self.first = Some(pc);
                None
            }
        }
    }
}

impl Position {
    /// Who checks the side to move.
    ///
    /// With `lazy` the first attacker found is returned straight away. Without
    /// it every attacker is counted and two or more give [`Check::Multiple`].
    /// Facing generals always count as [`Check::Multiple`].
    #[must_use]
    pub fn checked_by(&self, lazy: bool) -> Option<Check> {
        let side = self.side;
        let opp = side.opponent();
        let king = self.slot_square(side, 0);
        if king.is_none() {
            return None;
        }
        let rank = self.rank_mask(king);
        let file = self.file_mask(king);

        let opp_king = self.slot_square(opp, 0);
        if !opp_king.is_none()
            && king.same_file(opp_king)
            && file.rook_cap & FILE_BIT[opp_king.index()] != 0
        {
            return Some(Check::Multiple);
        }

        let mut checkers = Checkers { lazy, first: None };

        for slot in PieceType::Knight.slots() {
            let sq = self.slot_square(opp, slot);
            if sq.is_none() {
                continue;
            }
            let pin = knight_pin(sq, king);
            if pin != sq && self.squares[pin.index()].is_empty() {
                if let Some(verdict) = checkers.add(Piece::new(opp, slot)) {
                    return Some(verdict);
                }
            }
        }

        for (kind, field) in [
            (PieceType::Rook, rook_reach as fn(&SlideMask) -> u16),
            (PieceType::Cannon, cannon_reach as fn(&SlideMask) -> u16),
        ] {
            for slot in kind.slots() {
                let sq = self.slot_square(opp, slot);
                if sq.is_none() || !line_reaches(rank, file, king, sq, field) {
                    continue;
                }
                if let Some(verdict) = checkers.add(Piece::new(opp, slot)) {
                    return Some(verdict);
                }
            }
        }

        for sq in [king.offset(-1), king.offset(1), king.forward(side)] {
            let pc = self.squares[sq.index()];
            if pc.belongs_to(opp) && pc.kind() == PieceType::Pawn {
                if let Some(verdict) = checkers.add(pc) {
                    return Some(verdict);
                }
            }
        }

        checkers.first.map(Check::Single)
    }

    /// Would `side` be able to recapture on `sq`? Defenders standing on
    /// `except` are ignored.
    #[must_use]
    pub fn is_protected(&self, side: Color, sq: Square, except: Option<Square>) -> bool {
        let allowed = |s: Square| !s.is_none() && Some(s) != except;

        if sq.home_half(side) {
            if sq.in_fort() {
                let king = self.slot_square(side, 0);
                if allowed(king) && king_span(sq, king) {
                    return true;
                }
                if self
                    .squares_of(side, PieceType::Advisor)
                    .any(|s| allowed(s) && advisor_span(sq, s))
                {
                    return true;
                }
            }
            if self.squares_of(side, PieceType::Bishop).any(|s| {
                allowed(s) && bishop_span(sq, s) && self.squares[bishop_pin(sq, s).index()].is_empty()
            }) {
                return true;
            }
        } else {
            for s in [sq.offset(-1), sq.offset(1)] {
                if Some(s) != except && self.is_pawn_of(side, s) {
                    return true;
                }
            }
        }

        let behind = sq.backward(side);
        if Some(behind) != except && self.is_pawn_of(side, behind) {
            return true;
        }

        if self.squares_of(side, PieceType::Knight).any(|s| {
            let pin = knight_pin(s, sq);
            allowed(s) && pin != s && self.squares[pin.index()].is_empty()
        }) {
            return true;
        }

        let rank = self.rank_mask(sq);
        let file = self.file_mask(sq);
        let slides = |kind: PieceType, field: fn(&SlideMask) -> u16| {
            self.squares_of(side, kind)
                .any(|s| allowed(s) && s != sq && line_reaches(rank, file, sq, s, field))
        };
        slides(PieceType::Rook, rook_reach) || slides(PieceType::Cannon, cannon_reach)
    }

    #[inline]
    fn is_pawn_of(&self, side: Color, sq: Square) -> bool {
        let pc = self.squares[sq.index()];
        pc.belongs_to(side) && pc.kind() == PieceType::Pawn
    }

    /// Capture ordering score for taking `captured` on `dst` with a piece of
    /// simple value `lva`.
    #[must_use]
    pub fn mvv_lva(&self, dst: Square, captured: Piece, lva: i32) -> i32 {
        let mvv = captured.kind().simple_value();
        let adjust = if self.is_protected(self.side.opponent(), dst, None) {
            lva
        } else {
            0
        };
        if mvv >= adjust {
            mvv - adjust + 1
        } else if mvv >= 3 || dst.home_half(self.side) {
            1
        } else {
            0
        }
    }

    /// Slot of the piece the last move started chasing, if any.
    ///
    /// Called after the move has been made, so the chased pieces belong to
    /// the side to move. Only knights, rooks and cannons chase, and only
    /// a fixed set of targets counts:
    ///
    /// | mover  | rook | knight          | cannon          | crossed pawn    |
    /// |--------|------|-----------------|-----------------|-----------------|
    /// | knight | yes  |                 | if undefended   | if undefended   |
    /// | rook   |      | if undefended   | if undefended   | if undefended   |
    /// | cannon | yes  | if undefended   |                 | if undefended   |
    pub fn chased_by(&self, mv: Move) -> Option<u8> {
        let side = self.side;
        let from = mv.dst();
        let moved = self.squares[from.index()];
        if moved.is_empty() || moved.belongs_to(side) {
            return None;
        }

        match moved.kind() {
            PieceType::Knight => self.tables.steps.knight[from.index()]
                .iter()
                .filter(|step| self.squares[step.pin.index()].is_empty())
                .find_map(|step| self.chase_target(moved.kind(), step.dst)),
            kind @ (PieceType::Rook | PieceType::Cannon) => {
                let (x, y) = (from.file_x(), from.rank_y());
                // A piece that moved along its file threatens along its rank.
                let targets: [Square; 2] = if mv.src().same_file(from) {
                    let line = self.rank_move(from);
                    let caps = if kind == PieceType::Rook {
                        line.rook_cap
                    } else {
                        line.cannon_cap
                    };
                    caps.map(|cx| Square::from_coords(cx, y))
                } else {
                    let line = self.file_move(from);
                    let caps = if kind == PieceType::Rook {
                        line.rook_cap
                    } else {
                        line.cannon_cap
                    };
                    caps.map(|cy| Square(cy | x))
                };
                targets
                    .into_iter()
                    .filter(|&sq| sq != from)
                    .find_map(|sq| self.chase_target(kind, sq))
            }
            _ => None,
        }
    }

    fn chase_target(&self, mover: PieceType, sq: Square) -> Option<u8> {
        let side = self.side;
        let target = self.squares[sq.index()];
        if !target.belongs_to(side) {
            return None;
        }
        let undefended = || !self.is_protected(side, sq, None);
        let chased = match (mover, target.kind()) {
            (PieceType::Knight, PieceType::Rook) | (PieceType::Cannon, PieceType::Rook) => true,
            (PieceType::Knight, PieceType::Cannon)
            | (PieceType::Rook, PieceType::Knight)
            | (PieceType::Rook, PieceType::Cannon)
            | (PieceType::Cannon, PieceType::Knight) => undefended(),
            (_, PieceType::Pawn) => sq.away_half(side) && undefended(),
            _ => false,
        };
        chased.then(|| target.slot())
    }

    /// A capture worth keeping out of quiet-move heuristics: the victim is
    /// undefended or worth more than the capturer.
    #[must_use]
    pub fn good_capture(&self, mv: Move) -> bool {
        let captured = self.squares[mv.dst().index()];
        if captured.is_empty() {
            return false;
        }
        if !self.is_protected(self.side.opponent(), mv.dst(), None) {
            return true;
        }
        let moved = self.squares[mv.src().index()];
        captured.kind().simple_value() > moved.kind().simple_value()
    }
}
