//! Zobrist hashing for xiangqi positions.
//!
//! Every hash is a triple: a 32-bit key used to index the repetition table and
//! two 32-bit locks used to confirm a match. All three are updated by XOR.

use std::ops::BitXorAssign;

use rand::prelude::*;

use crate::board::{Color, PieceType, Square};

/// Seed used for the process-wide default key set.
pub const DEFAULT_ZOBRIST_SEED: u64 = 1234567890;

/// One Zobrist triple.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ZobristKey {
    pub key: u32,
    pub lock0: u32,
    pub lock1: u32,
}

impl ZobristKey {
    pub const ZERO: ZobristKey = ZobristKey {
        key: 0,
        lock0: 0,
        lock1: 0,
    };

    fn random(rng: &mut StdRng) -> Self {
        ZobristKey {
            key: rng.gen(),
            lock0: rng.gen(),
            lock1: rng.gen(),
        }
    }
}

impl BitXorAssign for ZobristKey {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.key ^= rhs.key;
        self.lock0 ^= rhs.lock0;
        self.lock1 ^= rhs.lock1;
    }
}

pub(crate) struct ZobristKeys {
    // piece_keys[piece_type + 7 * color][square]
    piece_keys: Box<[[ZobristKey; 256]; 14]>,
    pub(crate) black_to_move_key: ZobristKey,
}

impl ZobristKeys {
    pub(crate) fn with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let black_to_move_key = ZobristKey::random(&mut rng);
        let mut piece_keys = Box::new([[ZobristKey::ZERO; 256]; 14]);
        for table in piece_keys.iter_mut() {
            for key in table.iter_mut() {
                *key = ZobristKey::random(&mut rng);
            }
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key,
        }
    }

    #[inline]
    pub(crate) fn piece(&self, color: Color, kind: PieceType, sq: Square) -> ZobristKey {
        self.piece_keys[kind.index() + 7 * color.index()][sq.index()]
    }
}
