//! Left-right mirroring, side exchange and board rotation.

use super::state::Position;
use super::types::{Color, Move, Piece, Square};

impl Position {
    /// Every piece on the board with its square, red first.
    fn placements(&self) -> Vec<(Square, Piece)> {
        Color::BOTH
            .into_iter()
            .flat_map(|color| self.pieces_of(color))
            .map(|(pc, sq)| (sq, pc))
            .collect()
    }

    /// Rebuild the board from `placements`, mapping each entry through `f`.
    /// History is reset.
    fn rebuild(
        &mut self,
        placements: &[(Square, Piece)],
        side: Color,
        f: impl Fn(Square, Piece) -> (Square, Piece),
    ) {
        self.clear();
        for &(sq, pc) in placements {
            let (sq, pc) = f(sq, pc);
            self.add_piece(sq, pc);
        }
        if side == Color::Black {
            self.change_side();
        }
        self.set_irreversible();
    }

    /// Mirror the position left to right.
    ///
    /// The moves played since the root are taken back, the root is mirrored
    /// and the mirrored moves are replayed, so hashes, material and history
    /// stay consistent.
    pub fn mirror(&mut self) {
        let moves: Vec<Move> = self.history[1..].iter().map(|entry| entry.mv).collect();
        while self.history.len() > 1 {
            if self.last_entry().mv.is_null() {
                self.undo_null_move();
            } else {
                self.undo_make_move();
            }
        }

        let placements = self.placements();
        let side = self.side;
        self.rebuild(&placements, side, |sq, pc| (sq.mirrored(), pc));

        for mv in moves {
            if mv.is_null() {
                self.null_move();
            } else {
                let replayed = self.make_move(mv.mirrored());
                debug_assert!(replayed, "mirrored move {} rejected", mv.mirrored());
            }
        }
    }

    /// Swap the colours: every piece moves to the rotated square and changes
    /// sides, and the other side gets the move. History is reset.
    pub fn exchange_side(&mut self) {
        let placements = self.placements();
        let side = self.side.opponent();
        self.rebuild(&placements, side, |sq, pc| {
            (sq.flipped(), Piece::new(pc.color().opponent(), pc.slot()))
        });
    }

    /// Rotate the board 180 degrees, keeping colours and side to move.
    /// History is reset.
    pub fn flip_board(&mut self) {
        let placements = self.placements();
        let side = self.side;
        self.rebuild(&placements, side, |sq, pc| (sq.flipped(), pc));
    }
}

/// Mirror a FEN string left to right by reversing every rank. Anything after
/// the board field is kept as is.
#[must_use]
pub fn fen_mirror(fen: &str) -> String {
    let (board, rest) = match fen.split_once(' ') {
        Some((board, rest)) => (board, Some(rest)),
        None => (fen, None),
    };
    let rows: Vec<String> = board
        .split('/')
        .map(|rank| rank.chars().rev().collect())
        .collect();
    match rest {
        Some(rest) => format!("{} {}", rows.join("/"), rest),
        None => rows.join("/"),
    }
}
