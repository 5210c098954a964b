use crate::board::state::Position;
use crate::board::tables::Step;
use crate::board::types::{Move, MoveList, PieceType, ScoredMoveList, Square};

impl Position {
    /// Step lists for a piece of `kind` on `src`, for the side to move.
    pub(crate) fn steps_from(
        &self,
        kind: PieceType,
        src: Square,
    ) -> impl Iterator<Item = Step> + '_ {
        let steps = &self.tables.steps;
        let i = src.index();
        // Only one of these is non-empty for a given kind.
        let (short, knight) = match kind {
            PieceType::King => (Some(&steps.king[i]), None),
            PieceType::Advisor => (Some(&steps.advisor[i]), None),
            PieceType::Bishop => (Some(&steps.bishop[i]), None),
            PieceType::Knight => (None, Some(&steps.knight[i])),
            _ => (None, None),
        };
        let pawn = (kind == PieceType::Pawn).then(|| &steps.pawn[self.side.index()][i]);
        short
            .into_iter()
            .flat_map(|list| list.iter())
            .chain(knight.into_iter().flat_map(|list| list.iter()))
            .chain(pawn.into_iter().flat_map(|list| list.iter()))
    }

    /// Captures by a stepping piece. Square 0 is never occupied, so steps
    /// without a blocking square always pass the pin test.
    pub(crate) fn generate_step_captures(
        &self,
        list: &mut ScoredMoveList,
        kind: PieceType,
        src: Square,
    ) {
        let opp = self.side.opponent();
        let lva = kind.simple_value();
        for step in self.steps_from(kind, src) {
            if !self.squares[step.pin.index()].is_empty() {
                continue;
            }
            let captured = self.squares[step.dst.index()];
            if captured.belongs_to(opp) {
                list.push(Move::new(src, step.dst), self.mvv_lva(step.dst, captured, lva));
            }
        }
    }

    pub(crate) fn generate_step_quiets(&self, list: &mut MoveList, kind: PieceType, src: Square) {
        for step in self.steps_from(kind, src) {
            if self.squares[step.pin.index()].is_empty() && self.squares[step.dst.index()].is_empty()
            {
                list.push(Move::new(src, step.dst));
            }
        }
    }
}
