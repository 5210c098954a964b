use super::config::MAX_REVERSIBLE_PLIES;
use super::state::{HistoryEntry, Position, Threat, MAX_HISTORY, REP_HASH_MASK};
use super::types::{Move, Piece, PieceType, Square};

impl Position {
    /// Apply `mv`. Returns `false` and leaves the position untouched when the
    /// move would leave the mover's general in check, the history is full, or
    /// `mv` does not move a piece of the side to move.
    pub fn make_move(&mut self, mv: Move) -> bool {
        if !self.is_playable(mv) {
            #[cfg(feature = "logging")]
            log::debug!("rejecting malformed move {mv}");
            return false;
        }
        if self.history.len() >= MAX_HISTORY {
            #[cfg(feature = "logging")]
            log::debug!("history full, refusing {mv}");
            return false;
        }

        let old_key = self.zobrist.key;
        let (zobrist, material) = (self.zobrist, self.material);

        let captured = if mv.is_promotion() {
            self.promote(mv.src())
        } else {
            let captured = self.move_piece(mv);
            if self.checked_by(true).is_some() {
                self.undo_move_piece(mv, captured);
                self.zobrist = zobrist;
                self.material = material;
                return false;
            }
            captured
        };

        self.change_side();
        self.note_repetition(old_key);

        let mut threat = match self.checked_by(false) {
            Some(check) => Threat::Check(check),
            None => Threat::None,
        };
        let quiet_plies = if captured.is_empty() {
            if threat == Threat::None {
                if let Some(slot) = self.chased_by(mv) {
                    threat = Threat::Chase(slot);
                }
            }
            if matches!(threat, Threat::Check(_)) {
                0
            } else {
                (self.last_entry().quiet_plies + 1).min(MAX_REVERSIBLE_PLIES)
            }
        } else {
            0
        };

        self.history.push(HistoryEntry {
            zobrist,
            material,
            mv,
            captured,
            quiet_plies,
            threat,
        });
        self.distance += 1;
        true
    }

    /// Take back the last move made with [`make_move`](Self::make_move).
    pub fn undo_make_move(&mut self) {
        debug_assert!(self.history.len() > 1, "no move to take back");
        if self.history.len() <= 1 {
            return;
        }
        let Some(entry) = self.history.pop() else {
            return;
        };
        debug_assert!(!entry.mv.is_null(), "undo_make_move over a null move");
        self.distance = self.distance.saturating_sub(1);

        if entry.mv.is_promotion() {
            self.undo_promote(entry.mv.src(), entry.captured);
        } else {
            self.undo_move_piece(entry.mv, entry.captured);
        }
        self.side = self.side.opponent();
        self.zobrist = entry.zobrist;
        self.material = entry.material;
        self.forget_repetition();
    }

    /// Pass the move. Only sound when the side to move is not in check.
    pub fn null_move(&mut self) {
        debug_assert!(self.history.len() < MAX_HISTORY);
        self.note_repetition(self.zobrist.key);
        let entry = HistoryEntry {
            zobrist: self.zobrist,
            material: self.material,
            mv: Move::NULL,
            captured: Piece::EMPTY,
            quiet_plies: 0,
            threat: Threat::None,
        };
        self.change_side();
        self.history.push(entry);
        self.distance += 1;
    }

    pub fn undo_null_move(&mut self) {
        debug_assert!(self.history.len() > 1, "no null move to take back");
        if self.history.len() <= 1 {
            return;
        }
        let Some(entry) = self.history.pop() else {
            return;
        };
        debug_assert!(entry.mv.is_null());
        self.distance = self.distance.saturating_sub(1);
        self.side = self.side.opponent();
        self.zobrist = entry.zobrist;
        self.material = entry.material;
        self.forget_repetition();
    }

    /// Shape checks only: the source holds one of our pieces, the target does
    /// not, and a promotion has a pawn slot to fill.
    fn is_playable(&self, mv: Move) -> bool {
        let (src, dst) = (mv.src(), mv.dst());
        if mv.is_null() || !src.in_board() || !dst.in_board() {
            return false;
        }
        let moved = self.squares[src.index()];
        if moved.is_empty() || !moved.belongs_to(self.side) {
            return false;
        }
        if mv.is_promotion() {
            let free = !self.side_bits(self.side) & PieceType::Pawn.slot_mask();
            src.can_promote()
                && matches!(moved.kind(), PieceType::Advisor | PieceType::Bishop)
                && free != 0
        } else {
            !self.squares[dst.index()].belongs_to(self.side)
        }
    }

    #[inline]
    pub(crate) fn last_entry(&self) -> &HistoryEntry {
        // The root record is never popped.
        &self.history[self.history.len() - 1]
    }

    fn note_repetition(&mut self, key: u32) {
        let slot = &mut self.rep_hash[(key & REP_HASH_MASK) as usize];
        if *slot == 0 {
            *slot = self.history.len() as u16;
        }
    }

    fn forget_repetition(&mut self) {
        let len = self.history.len() as u16;
        let slot = &mut self.rep_hash[(self.zobrist.key & REP_HASH_MASK) as usize];
        if *slot == len {
            *slot = 0;
        }
    }

    /// Move a piece, removing whatever stood on the destination.
    fn move_piece(&mut self, mv: Move) -> Piece {
        let (src, dst) = (mv.src(), mv.dst());
        let moved = self.squares[src.index()];
        debug_assert!(src.in_board() && dst.in_board());
        debug_assert!(!moved.is_empty());

        let captured = self.squares[dst.index()];
        if captured.is_empty() {
            self.flip_occupancy(dst);
        } else {
            let (color, kind) = (captured.color(), captured.kind());
            self.pieces[captured.index()] = Square::NONE;
            self.bit_piece ^= captured.bit();
            self.material[color.index()] -= self.tables.values.value(color, kind, dst);
            self.zobrist ^= self.tables.zobrist.piece(color, kind, dst);
        }

        self.squares[src.index()] = Piece::EMPTY;
        self.squares[dst.index()] = moved;
        self.pieces[moved.index()] = dst;
        self.flip_occupancy(src);

        let (color, kind) = (moved.color(), moved.kind());
        let values = &self.tables.values;
        let delta = values.value(color, kind, dst) - values.value(color, kind, src);
        self.material[color.index()] += delta;
        let keys = &self.tables.zobrist;
        let mut key = keys.piece(color, kind, src);
        key ^= keys.piece(color, kind, dst);
        self.zobrist ^= key;
        captured
    }

    /// Board arrays and occupancy only; hash and material come back from the
    /// history snapshot.
    fn undo_move_piece(&mut self, mv: Move, captured: Piece) {
        let (src, dst) = (mv.src(), mv.dst());
        let moved = self.squares[dst.index()];
        debug_assert!(!moved.is_empty());

        self.squares[src.index()] = moved;
        self.pieces[moved.index()] = src;
        self.flip_occupancy(src);
        if captured.is_empty() {
            self.squares[dst.index()] = Piece::EMPTY;
            self.flip_occupancy(dst);
        } else {
            self.squares[dst.index()] = captured;
            self.pieces[captured.index()] = dst;
            self.bit_piece ^= captured.bit();
        }
    }

    /// Turn the advisor or bishop on `sq` into a pawn of the lowest free slot.
    fn promote(&mut self, sq: Square) -> Piece {
        let replaced = self.squares[sq.index()];
        debug_assert!(sq.can_promote());
        debug_assert!(matches!(
            replaced.kind(),
            PieceType::Advisor | PieceType::Bishop
        ));
        let free = !self.side_bits(self.side) & PieceType::Pawn.slot_mask();
        debug_assert!(free != 0, "no free pawn slot");
        let promoted = Piece::new(self.side, free.trailing_zeros() as u8);

        self.toggle_piece(sq, replaced, true);
        self.toggle_piece(sq, promoted, false);
        replaced
    }

    fn undo_promote(&mut self, sq: Square, replaced: Piece) {
        let promoted = self.squares[sq.index()];
        debug_assert_eq!(promoted.kind(), PieceType::Pawn);
        self.pieces[promoted.index()] = Square::NONE;
        self.squares[sq.index()] = replaced;
        self.pieces[replaced.index()] = sq;
        self.bit_piece ^= promoted.bit() ^ replaced.bit();
    }
}
