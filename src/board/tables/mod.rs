//! Precomputed tables shared by every position.
//!
//! [`StaticTables`] bundles the slide tables, per-square step lists, Zobrist
//! keys and piece-square values. The fixed geometry in [`geometry`] has no
//! seed dependency and lives in process-wide lazy statics instead.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::zobrist::{ZobristKeys, DEFAULT_ZOBRIST_SEED};

pub(crate) mod geometry;
mod slides;
mod steps;
mod values;

pub(crate) use slides::{SlideMask, SlideMove, SlideTables};
pub(crate) use steps::{Step, StepTables};
pub(crate) use values::PieceValues;

static SHARED: Lazy<Arc<StaticTables>> =
    Lazy::new(|| Arc::new(StaticTables::new(DEFAULT_ZOBRIST_SEED)));

static BY_SEED: Lazy<Mutex<HashMap<u64, Arc<StaticTables>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Immutable lookup data needed by [`Position`](crate::Position).
///
/// Building a set takes a few milliseconds; share it through [`Arc`] rather
/// than rebuilding per position.
pub struct StaticTables {
    seed: u64,
    pub(crate) zobrist: ZobristKeys,
    pub(crate) slides: SlideTables,
    pub(crate) steps: StepTables,
    pub(crate) values: PieceValues,
}

impl StaticTables {
    /// Build a fresh table set whose Zobrist keys come from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        #[cfg(feature = "logging")]
        log::trace!("building static tables for seed {seed}");

        StaticTables {
            seed,
            zobrist: ZobristKeys::with_seed(seed),
            slides: SlideTables::new(),
            steps: StepTables::new(),
            values: PieceValues::new(),
        }
    }

    /// The process-wide default set.
    #[must_use]
    pub fn shared() -> Arc<StaticTables> {
        Arc::clone(&SHARED)
    }

    /// A set for `seed`, built once and cached for the life of the process.
    #[must_use]
    pub fn for_seed(seed: u64) -> Arc<StaticTables> {
        if seed == DEFAULT_ZOBRIST_SEED {
            return StaticTables::shared();
        }
        let mut cache = BY_SEED.lock();
        Arc::clone(
            cache
                .entry(seed)
                .or_insert_with(|| Arc::new(StaticTables::new(seed))),
        )
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl std::fmt::Debug for StaticTables {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticTables")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}
