//! Per-square destination lists for the stepping pieces.
//!
//! Each list ends with a zero destination. Bishops and knights carry the
//! square that blocks the step alongside the destination.

use super::geometry::{
    self, bishop_pin, ADVISOR_DELTAS, BISHOP_DELTAS, KING_DELTAS, KNIGHT_DELTAS,
};
use crate::board::types::{Color, Square};

/// A destination plus the square that must be empty for the step to be
/// possible. `pin` is `Square::NONE` for pieces that cannot be blocked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Step {
    pub(crate) dst: Square,
    pub(crate) pin: Square,
}

/// Zero-terminated list of at most `N - 1` steps.
#[derive(Clone, Copy, Debug)]
pub(crate) struct StepList<const N: usize> {
    steps: [Step; N],
}

impl<const N: usize> StepList<N> {
    const EMPTY: Self = StepList {
        steps: [Step {
            dst: Square::NONE,
            pin: Square::NONE,
        }; N],
    };

    fn from_steps(steps: impl IntoIterator<Item = Step>) -> Self {
        let mut list = Self::EMPTY;
        let mut n = 0;
        for step in steps {
            debug_assert!(n < N - 1, "step list overflow");
            list.steps[n] = step;
            n += 1;
        }
        list
    }

    #[inline]
    pub(crate) fn iter(&self) -> impl Iterator<Item = Step> + '_ {
        self.steps.iter().copied().take_while(|s| !s.dst.is_none())
    }
}

pub(crate) struct StepTables {
    pub(crate) king: Box<[StepList<5>; 256]>,
    pub(crate) advisor: Box<[StepList<5>; 256]>,
    pub(crate) bishop: Box<[StepList<5>; 256]>,
    pub(crate) knight: Box<[StepList<9>; 256]>,
    pub(crate) pawn: [Box<[StepList<4>; 256]>; 2],
}

impl StepTables {
    pub(crate) fn new() -> Self {
        let mut tables = StepTables {
            king: Box::new([StepList::EMPTY; 256]),
            advisor: Box::new([StepList::EMPTY; 256]),
            bishop: Box::new([StepList::EMPTY; 256]),
            knight: Box::new([StepList::EMPTY; 256]),
            pawn: [Box::new([StepList::EMPTY; 256]), Box::new([StepList::EMPTY; 256])],
        };

        for src in Square::all() {
            let i = src.index();
            tables.king[i] = StepList::from_steps(
                KING_DELTAS
                    .iter()
                    .map(|&d| src.offset(d))
                    .filter(|dst| dst.in_fort())
                    .map(unpinned),
            );
            tables.advisor[i] = StepList::from_steps(
                ADVISOR_DELTAS
                    .iter()
                    .map(|&d| src.offset(d))
                    .filter(|dst| dst.in_fort())
                    .map(unpinned),
            );
            tables.bishop[i] = StepList::from_steps(
                BISHOP_DELTAS
                    .iter()
                    .map(|&d| src.offset(d))
                    .filter(|&dst| dst.in_board() && src.same_half(dst))
                    .map(|dst| Step {
                        dst,
                        pin: bishop_pin(src, dst),
                    }),
            );
            tables.knight[i] = StepList::from_steps(
                KNIGHT_DELTAS
                    .iter()
                    .map(|&d| src.offset(d))
                    .filter(|dst| dst.in_board())
                    .map(|dst| Step {
                        dst,
                        pin: geometry::knight_pin(src, dst),
                    }),
            );
            for color in Color::BOTH {
                let forward = Some(src.forward(color));
                let lateral = if src.away_half(color) {
                    [Some(src.offset(-1)), Some(src.offset(1))]
                } else {
                    [None, None]
                };
                tables.pawn[color.index()][i] = StepList::from_steps(
                    forward
                        .into_iter()
                        .chain(lateral.into_iter().flatten())
                        .filter(|dst| dst.in_board())
                        .map(unpinned),
                );
            }
        }

        tables
    }
}

fn unpinned(dst: Square) -> Step {
    Step {
        dst,
        pin: Square::NONE,
    }
}
