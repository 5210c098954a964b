use std::fmt;
use std::sync::Arc;

use super::config::RuleConfig;
use super::tables::geometry::{FILE_BIT, RANK_BIT};
use super::tables::{SlideMask, SlideMove, StaticTables};
use super::types::{Color, Move, Piece, PieceType, Square};
use crate::zobrist::ZobristKey;

/// Capacity of the move history, root record included.
pub const MAX_HISTORY: usize = 1024;

pub(crate) const REP_HASH_LEN: usize = 4096;
pub(crate) const REP_HASH_MASK: u32 = REP_HASH_LEN as u32 - 1;

/// Who is giving check to the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Check {
    Single(Piece),
    /// Two or more checkers, or the generals facing each other.
    Multiple,
}

/// What the move recorded in a history entry did to the opponent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Threat {
    #[default]
    None,
    Check(Check),
    /// Slot (0..16) of the opponent piece now chased.
    Chase(u8),
}

/// One ply of history: the move plus the state needed to take it back.
#[derive(Clone, Copy, Debug)]
pub struct HistoryEntry {
    pub(crate) zobrist: ZobristKey,
    pub(crate) material: [i32; 2],
    pub(crate) mv: Move,
    pub(crate) captured: Piece,
    pub(crate) quiet_plies: u16,
    pub(crate) threat: Threat,
}

impl HistoryEntry {
    pub(crate) fn root(zobrist: ZobristKey, material: [i32; 2], threat: Threat) -> Self {
        HistoryEntry {
            zobrist,
            material,
            mv: Move::NULL,
            captured: Piece::EMPTY,
            quiet_plies: 0,
            threat,
        }
    }

    #[must_use]
    pub fn mv(&self) -> Move {
        self.mv
    }

    /// The captured piece, or for a promotion the advisor/bishop it replaced.
    #[must_use]
    pub fn captured(&self) -> Piece {
        self.captured
    }

    #[must_use]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }

    #[must_use]
    pub fn threat(&self) -> Threat {
        self.threat
    }

    #[must_use]
    pub fn gives_check(&self) -> bool {
        matches!(self.threat, Threat::Check(_))
    }

    /// Reversible plies up to and including this one.
    #[must_use]
    pub fn quiet_plies(&self) -> u16 {
        self.quiet_plies
    }
}

/// A xiangqi position with incremental hashing, occupancy and history.
#[derive(Clone)]
pub struct Position {
    pub(crate) tables: Arc<StaticTables>,
    pub(crate) rules: RuleConfig,
    pub(crate) side: Color,
    pub(crate) squares: [Piece; 256],
    pub(crate) pieces: [Square; 48],
    pub(crate) zobrist: ZobristKey,
    // Bit i is set while piece 16 + i is on the board.
    pub(crate) bit_piece: u32,
    pub(crate) bit_ranks: [u16; 16],
    pub(crate) bit_files: [u16; 16],
    pub(crate) material: [i32; 2],
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) distance: usize,
    pub(crate) rep_hash: Box<[u16; REP_HASH_LEN]>,
}

impl Position {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Position::from_fen(super::fen::START_FEN)
    }

    /// An empty board under default rules.
    #[must_use]
    pub fn empty() -> Self {
        Position::with_rules(RuleConfig::default())
    }

    /// An empty board under `rules`, using the shared tables.
    #[must_use]
    pub fn with_rules(rules: RuleConfig) -> Self {
        Position::with_tables(StaticTables::shared(), rules)
    }

    /// An empty board using a specific table set.
    #[must_use]
    pub fn with_tables(tables: Arc<StaticTables>, rules: RuleConfig) -> Self {
        let mut pos = Position {
            tables,
            rules,
            side: Color::Red,
            squares: [Piece::EMPTY; 256],
            pieces: [Square::NONE; 48],
            zobrist: ZobristKey::ZERO,
            bit_piece: 0,
            bit_ranks: [0; 16],
            bit_files: [0; 16],
            material: [0; 2],
            history: Vec::with_capacity(MAX_HISTORY),
            distance: 0,
            rep_hash: Box::new([0; REP_HASH_LEN]),
        };
        pos.set_irreversible();
        pos
    }

    /// Remove every piece and give the move to red. History is left alone;
    /// call [`set_irreversible`](Self::set_irreversible) before playing.
    pub fn clear(&mut self) {
        self.side = Color::Red;
        self.squares = [Piece::EMPTY; 256];
        self.pieces = [Square::NONE; 48];
        self.zobrist = ZobristKey::ZERO;
        self.bit_piece = 0;
        self.bit_ranks = [0; 16];
        self.bit_files = [0; 16];
        self.material = [0; 2];
    }

    /// Forget all history: the current position becomes the root and the
    /// repetition table is emptied.
    pub fn set_irreversible(&mut self) {
        let threat = match self.checked_by(false) {
            Some(check) => Threat::Check(check),
            None => Threat::None,
        };
        self.history.clear();
        self.history
            .push(HistoryEntry::root(self.zobrist, self.material, threat));
        self.distance = 0;
        self.rep_hash.fill(0);
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Piece {
        self.squares[sq.index()]
    }

    /// Square of `piece`, or `None` once it has been captured.
    #[must_use]
    pub fn square_of(&self, piece: Piece) -> Option<Square> {
        let sq = self.pieces[piece.index()];
        (!sq.is_none()).then_some(sq)
    }

    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.square_of(Piece::new(color, 0))
    }

    #[inline]
    #[must_use]
    pub fn zobrist(&self) -> ZobristKey {
        self.zobrist
    }

    #[inline]
    #[must_use]
    pub fn rules(&self) -> RuleConfig {
        self.rules
    }

    pub fn set_rules(&mut self, rules: RuleConfig) {
        self.rules = rules;
    }

    #[must_use]
    pub fn tables(&self) -> &Arc<StaticTables> {
        &self.tables
    }

    /// Running piece-square totals, indexed by [`Color::index`].
    #[must_use]
    pub fn material_totals(&self) -> [i32; 2] {
        self.material
    }

    /// All history records, root first.
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Pieces of `color` still on the board, with their squares.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Piece, Square)> + '_ {
        (0..16).filter_map(move |slot| {
            let pc = Piece::new(color, slot);
            self.square_of(pc).map(|sq| (pc, sq))
        })
    }

    /// Place `piece` on an empty `sq`. Setup only; follow with
    /// [`set_irreversible`](Self::set_irreversible).
    pub fn add_piece(&mut self, sq: Square, piece: Piece) {
        debug_assert!(self.squares[sq.index()].is_empty());
        debug_assert!(self.pieces[piece.index()].is_none());
        self.toggle_piece(sq, piece, false);
    }

    /// Take `piece` off `sq`. Setup only.
    pub fn remove_piece(&mut self, sq: Square, piece: Piece) {
        debug_assert_eq!(self.squares[sq.index()], piece);
        self.toggle_piece(sq, piece, true);
    }

    pub(crate) fn toggle_piece(&mut self, sq: Square, pc: Piece, remove: bool) {
        debug_assert!(sq.in_board());
        debug_assert!((16..48).contains(&pc.0));
        if remove {
            self.squares[sq.index()] = Piece::EMPTY;
            self.pieces[pc.index()] = Square::NONE;
        } else {
            self.squares[sq.index()] = pc;
            self.pieces[pc.index()] = sq;
        }
        self.flip_occupancy(sq);
        self.bit_piece ^= pc.bit();

        let (color, kind) = (pc.color(), pc.kind());
        let value = self.tables.values.value(color, kind, sq);
        if remove {
            self.material[color.index()] -= value;
        } else {
            self.material[color.index()] += value;
        }
        self.zobrist ^= self.tables.zobrist.piece(color, kind, sq);
    }

    #[inline]
    pub(crate) fn flip_occupancy(&mut self, sq: Square) {
        self.bit_ranks[sq.rank_y() as usize] ^= RANK_BIT[sq.index()];
        self.bit_files[sq.file_x() as usize] ^= FILE_BIT[sq.index()];
    }

    pub(crate) fn change_side(&mut self) {
        self.side = self.side.opponent();
        self.zobrist ^= self.tables.zobrist.black_to_move_key;
    }

    /// Square of the piece in `slot` of `color`, `Square::NONE` if captured.
    #[inline]
    pub(crate) fn slot_square(&self, color: Color, slot: u8) -> Square {
        self.pieces[(color.tag() + slot) as usize]
    }

    /// Squares of `color`'s pieces of type `kind` still on the board.
    pub(crate) fn squares_of(
        &self,
        color: Color,
        kind: PieceType,
    ) -> impl Iterator<Item = Square> + '_ {
        kind.slots()
            .map(move |slot| self.slot_square(color, slot))
            .filter(|sq| !sq.is_none())
    }

    /// Presence bits of one side, bit i for slot i.
    #[inline]
    pub(crate) fn side_bits(&self, color: Color) -> u16 {
        (self.bit_piece >> (color.index() * 16)) as u16
    }

    #[inline]
    pub(crate) fn rank_move(&self, sq: Square) -> &SlideMove {
        self.tables
            .slides
            .rank_move(sq.file_x(), self.bit_ranks[sq.rank_y() as usize])
    }

    #[inline]
    pub(crate) fn file_move(&self, sq: Square) -> &SlideMove {
        self.tables
            .slides
            .file_move(sq.rank_y(), self.bit_files[sq.file_x() as usize])
    }

    #[inline]
    pub(crate) fn rank_mask(&self, sq: Square) -> &SlideMask {
        self.tables
            .slides
            .rank_mask(sq.file_x(), self.bit_ranks[sq.rank_y() as usize])
    }

    #[inline]
    pub(crate) fn file_mask(&self, sq: Square) -> &SlideMask {
        self.tables
            .slides
            .file_mask(sq.rank_y(), self.bit_files[sq.file_x() as usize])
    }

    /// Recompute hash, occupancy and material from the board array.
    /// Used by tests to check the incremental state.
    #[cfg(test)]
    pub(crate) fn recomputed(&self) -> (ZobristKey, [u16; 16], [u16; 16], [i32; 2]) {
        let mut key = ZobristKey::ZERO;
        let mut ranks = [0u16; 16];
        let mut files = [0u16; 16];
        let mut material = [0i32; 2];
        for sq in Square::all() {
            let pc = self.squares[sq.index()];
            if pc.is_empty() {
                continue;
            }
            let (color, kind) = (pc.color(), pc.kind());
            key ^= self.tables.zobrist.piece(color, kind, sq);
            ranks[sq.rank_y() as usize] |= RANK_BIT[sq.index()];
            files[sq.file_x() as usize] |= FILE_BIT[sq.index()];
            material[color.index()] += self.tables.values.value(color, kind, sq);
        }
        if self.side == Color::Black {
            key ^= self.tables.zobrist.black_to_move_key;
        }
        (key, ranks, files, material)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Position")
            .field("fen", &self.to_fen())
            .field("plies", &(self.history.len() - 1))
            .field("zobrist", &self.zobrist)
            .finish()
    }
}

/// Writes the position's FEN.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fen())
    }
}
