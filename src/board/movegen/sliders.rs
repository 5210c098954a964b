use crate::board::state::Position;
use crate::board::tables::SlideMove;
use crate::board::types::{Move, MoveList, PieceType, ScoredMoveList, Square};

/// Type of sliding piece for move generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SliderType {
    Rook,
    Cannon,
}

impl SliderType {
    fn kind(self) -> PieceType {
        match self {
            SliderType::Rook => PieceType::Rook,
            SliderType::Cannon => PieceType::Cannon,
        }
    }

    fn captures(self, line: &SlideMove) -> [u8; 2] {
        match self {
            SliderType::Rook => line.rook_cap,
            SliderType::Cannon => line.cannon_cap,
        }
    }
}

impl Position {
    pub(crate) fn generate_slider_captures(
        &self,
        list: &mut ScoredMoveList,
        src: Square,
        slider: SliderType,
    ) {
        let opp = self.side.opponent();
        let (x, y) = (src.file_x(), src.rank_y());
        let lva = slider.kind().simple_value();
        let along_rank = slider
            .captures(self.rank_move(src))
            .map(|cx| Square::from_coords(cx, y));
        let along_file = slider
            .captures(self.file_move(src))
            .map(|cy| Square(cy | x));

        for dst in along_rank.into_iter().chain(along_file) {
            if dst == src {
                continue;
            }
            let captured = self.squares[dst.index()];
            if captured.belongs_to(opp) {
                list.push(Move::new(src, dst), self.mvv_lva(dst, captured, lva));
            }
        }
    }

    /// Quiet slides: each direction walks back from the farthest empty
    /// square towards `src`.
    pub(crate) fn generate_slider_quiets(&self, list: &mut MoveList, src: Square) {
        let (x, y) = (src.file_x(), src.rank_y());
        let rank = self.rank_move(src).non_cap;
        let file = self.file_move(src).non_cap;
        let walks = [
            (Square::from_coords(rank[0], y), -1),
            (Square::from_coords(rank[1], y), 1),
            (Square(file[0] | x), -16),
            (Square(file[1] | x), 16),
        ];
        for (farthest, step) in walks {
            let mut dst = farthest;
            while dst != src {
                list.push(Move::new(src, dst));
                dst = dst.offset(step);
            }
        }
    }
}
