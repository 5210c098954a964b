use crate::board::{Move, Position};

impl Position {
    /// Count leaf nodes of the legal move tree to `depth`.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_all();
        let mut nodes = 0;
        for &m in moves.iter() {
            if !self.make_move(m) {
                continue;
            }
            nodes += if depth == 1 { 1 } else { self.perft(depth - 1) };
            self.undo_make_move();
        }

        nodes
    }

    /// Per-move node counts at the root, in generation order.
    pub fn perft_divide(&mut self, depth: usize) -> Vec<(Move, u64)> {
        let mut counts = Vec::new();
        if depth == 0 {
            return counts;
        }
        for &m in self.generate_all().iter() {
            if self.make_move(m) {
                counts.push((m, self.perft(depth - 1)));
                self.undo_make_move();
            }
        }
        counts
    }
}
