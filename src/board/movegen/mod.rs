//! Pseudo-legal move generation.
//!
//! Moves come out grouped by piece type in a fixed order (king, advisors,
//! bishops, knights, rooks, cannons, pawns) and by slot within a type.
//! Callers may rely on this order.

mod sliders;
mod steppers;

use sliders::SliderType;

use super::state::Position;
use super::tables::geometry::{
    advisor_span, bishop_pin, bishop_span, king_span, knight_pin, FILE_BIT, RANK_BIT,
};
use super::types::{Move, MoveList, PieceType, ScoredMoveList};

impl Position {
    /// Captures for the side to move, each scored with [`Position::mvv_lva`].
    /// In-place promotions are listed here too, with score 0.
    #[must_use]
    pub fn generate_captures(&self) -> ScoredMoveList {
        let mut list = ScoredMoveList::new();
        let side = self.side;
        let promote = self.rules.allow_promotion && self.can_promote();

        for kind in PieceType::ALL {
            for src in self.squares_of(side, kind) {
                match kind {
                    PieceType::Rook => {
                        self.generate_slider_captures(&mut list, src, SliderType::Rook)
                    }
                    PieceType::Cannon => {
                        self.generate_slider_captures(&mut list, src, SliderType::Cannon)
                    }
                    _ => self.generate_step_captures(&mut list, kind, src),
                }
                if promote
                    && matches!(kind, PieceType::Advisor | PieceType::Bishop)
                    && src.can_promote()
                {
                    list.push(Move::promotion(src), 0);
                }
            }
        }
        list
    }

    /// Non-capturing moves for the side to move.
    #[must_use]
    pub fn generate_quiets(&self) -> MoveList {
        let mut list = MoveList::new();
        let side = self.side;
        for kind in PieceType::ALL {
            for src in self.squares_of(side, kind) {
                match kind {
                    PieceType::Rook | PieceType::Cannon => {
                        self.generate_slider_quiets(&mut list, src)
                    }
                    _ => self.generate_step_quiets(&mut list, kind, src),
                }
            }
        }
        list
    }

    /// Captures (in generation order, unsorted) followed by quiet moves.
    #[must_use]
    pub fn generate_all(&self) -> MoveList {
        let mut list = MoveList::new();
        for mv in self.generate_captures().moves() {
            list.push(mv);
        }
        for &mv in self.generate_quiets().iter() {
            list.push(mv);
        }
        list
    }

    /// Cheap shape and occupancy test. Does not look at whether the mover's
    /// general would be left in check.
    #[must_use]
    pub fn is_pseudo_legal(&self, mv: Move) -> bool {
        let (src, dst) = (mv.src(), mv.dst());
        if !src.in_board() || !dst.in_board() {
            return false;
        }
        let side = self.side;
        let moved = self.squares[src.index()];
        if !moved.belongs_to(side) {
            return false;
        }
        let captured = self.squares[dst.index()];
        if src != dst && captured.belongs_to(side) {
            return false;
        }

        match moved.kind() {
            PieceType::King => dst.in_fort() && king_span(src, dst),
            PieceType::Advisor | PieceType::Bishop if src == dst => {
                self.rules.allow_promotion && src.can_promote() && self.can_promote()
            }
            PieceType::Advisor => dst.in_fort() && advisor_span(src, dst),
            PieceType::Bishop => {
                src.same_half(dst)
                    && bishop_span(src, dst)
                    && self.squares[bishop_pin(src, dst).index()].is_empty()
            }
            PieceType::Knight => {
                let pin = knight_pin(src, dst);
                pin != src && self.squares[pin.index()].is_empty()
            }
            kind @ (PieceType::Rook | PieceType::Cannon) => {
                let (line, bit) = if src.same_file(dst) {
                    (self.file_mask(src), FILE_BIT[dst.index()])
                } else if src.same_rank(dst) {
                    (self.rank_mask(src), RANK_BIT[dst.index()])
                } else {
                    return false;
                };
                let reach = if captured.is_empty() {
                    line.non_cap
                } else if kind == PieceType::Rook {
                    line.rook_cap
                } else {
                    line.cannon_cap
                };
                reach & bit != 0
            }
            PieceType::Pawn => {
                (dst.away_half(side) && (dst == src.offset(-1) || dst == src.offset(1)))
                    || dst == src.forward(side)
            }
        }
    }

    /// True when no generated move survives [`make_move`](Self::make_move).
    pub fn is_mate(&mut self) -> bool {
        let captures = self.generate_captures();
        if captures.moves().any(|mv| self.try_and_undo(mv)) {
            return false;
        }
        let quiets = self.generate_quiets();
        !quiets.iter().any(|&mv| self.try_and_undo(mv))
    }

    pub(crate) fn try_and_undo(&mut self, mv: Move) -> bool {
        if self.make_move(mv) {
            self.undo_make_move();
            true
        } else {
            false
        }
    }
}
