//! Move generation, legality and move status tests.

use super::{assert_consistent, mv, sq};
use crate::board::{Check, Color, Move, MoveStatus, Position, Threat};

#[test]
fn test_start_position_move_counts() {
    let mut pos = Position::new();
    assert_eq!(pos.generate_all().len(), 44);
    assert_eq!(pos.legal_moves().len(), 44);
    assert_eq!(pos.generate_captures().len(), 2);
    assert_eq!(pos.generate_quiets().len(), 42);
    assert_eq!(pos.perft(1), 44);
    assert_eq!(pos.perft(2), 1920);
    assert_consistent(&pos);
}

#[test]
fn test_captures_come_first() {
    let pos = Position::new();
    let all = pos.generate_all();
    assert_eq!(&all.as_slice()[..2], &[mv("b2b9"), mv("h2h9")]);
}

#[test]
fn test_perft_divide_sums() {
    let mut pos = Position::new();
    let divide = pos.perft_divide(2);
    assert_eq!(divide.len(), 44);
    assert_eq!(divide.iter().map(|(_, n)| n).sum::<u64>(), 1920);
}

#[test]
fn test_pseudo_legal_start_position() {
    let pos = Position::new();
    let legal = [
        "h2e2", "h2h9", "b0c2", "b0a2", "c0e2", "c0a2", "d0e1", "e0e1", "e3e4", "a0a1", "a0a2",
    ];
    let illegal = [
        "h2h8", "b0d1", "d0d1", "e0e2", "e3d3", "e3e2", "a0a3", "a9a8", "c0e3", "b2b8",
    ];
    for s in legal {
        assert!(pos.is_pseudo_legal(mv(s)), "{s} should be pseudo-legal");
    }
    for s in illegal {
        assert!(!pos.is_pseudo_legal(mv(s)), "{s} should not be pseudo-legal");
    }
    assert!(!pos.is_pseudo_legal(Move::NULL));
}

#[test]
fn test_pseudo_legal_agrees_with_generator() {
    let mut pos = Position::new();
    for s in ["h2e2", "h9g7", "b0c2", "c6c5"] {
        assert!(pos.make_move(mv(s)));
        let generated = pos.generate_all();
        for &m in generated.iter() {
            assert!(pos.is_pseudo_legal(m), "{m} generated but rejected");
        }
    }
}

#[test]
fn test_bishop_stays_home() {
    let pos = Position::from_fen("3k5/9/9/9/9/2B6/9/9/9/4K4 w");
    assert!(pos.is_pseudo_legal(mv("c4e2")));
    assert!(pos.is_pseudo_legal(mv("c4a2")));
    assert!(!pos.is_pseudo_legal(mv("c4e6")));
    assert!(!pos.is_pseudo_legal(mv("c4a6")));
}

#[test]
fn test_crossed_pawn_moves_sideways() {
    let pos = Position::from_fen("3k5/9/9/9/4P4/9/9/9/9/4K4 w");
    for s in ["e5d5", "e5f5", "e5e6"] {
        assert!(pos.is_pseudo_legal(mv(s)), "{s}");
    }
    assert!(!pos.is_pseudo_legal(mv("e5e4")));
}

#[test]
fn test_facing_generals_limit_king() {
    let mut pos = Position::from_fen("3k5/9/9/9/9/9/9/9/9/4K4 w");
    let legal = pos.legal_moves();
    assert_eq!(legal.len(), 2);
    assert!(legal.contains(mv("e0e1")));
    assert!(legal.contains(mv("e0f0")));
    assert!(!legal.contains(mv("e0d0")));
}

#[test]
fn test_checked_by() {
    let pos = Position::from_fen("4k4/9/9/9/9/9/9/9/9/3KR4 b");
    let rook = pos.piece_at(sq("e0"));
    assert_eq!(pos.checked_by(false), Some(Check::Single(rook)));
    assert!(pos.in_check());

    let pos = Position::from_fen("4k4/9/3N5/9/9/9/9/9/9/3KR4 b");
    let knight = pos.piece_at(sq("d7"));
    assert_eq!(pos.checked_by(false), Some(Check::Multiple));
    assert_eq!(pos.checked_by(true), Some(Check::Single(knight)));

    assert_eq!(Position::new().checked_by(false), None);
}

#[test]
fn test_checked_by_without_general() {
    let pos = Position::from_fen("4k4/9/9/9/9/9/9/9/4r4/9 w");
    assert_eq!(pos.checked_by(false), None);
    assert_eq!(pos.checked_by(true), None);

    let pos = Position::from_fen("9/9/9/9/9/9/9/9/4r4/4K4 b");
    assert_eq!(pos.checked_by(false), None);
}

#[test]
fn test_mate() {
    let mut pos = Position::from_fen("R3k4/8R/9/9/9/9/9/9/9/3K5 b");
    assert!(pos.in_check());
    assert!(pos.is_mate());
    assert!(pos.legal_moves().is_empty());

    assert!(!Position::new().is_mate());
}

#[test]
fn test_try_move_flags() {
    let mut pos = Position::new();
    assert_eq!(pos.try_move(mv("h2e2")), MoveStatus::NONE);
    assert_eq!(pos.side_to_move(), Color::Black);

    let mut pos = Position::new();
    let status = pos.try_move(mv("b2b9"));
    assert_eq!(status, MoveStatus::CAPTURE);
    assert!(status.is_played());

    let mut pos = Position::from_fen("4k4/8R/9/9/9/9/9/9/R8/3K5 w");
    let status = pos.try_move(mv("a1a9"));
    assert!(status.contains(MoveStatus::CHECK | MoveStatus::MATE));
    assert!(!status.contains(MoveStatus::CAPTURE));
}

#[test]
fn test_try_move_rejections() {
    let mut pos = Position::new();
    let fen = pos.to_fen();
    let status = pos.try_move(mv("a0a5"));
    assert_eq!(status, MoveStatus::ILLEGAL);
    assert!(!status.is_played());
    assert_eq!(pos.to_fen(), fen);

    let mut pos = Position::from_fen("3kr4/9/9/9/9/9/9/9/4R4/4K4 w");
    let fen = pos.to_fen();
    assert_eq!(pos.try_move(mv("e1d1")), MoveStatus::INCHECK);
    assert_eq!(pos.to_fen(), fen);
}

#[test]
fn test_move_status_debug() {
    let status = MoveStatus::CHECK | MoveStatus::MATE;
    assert_eq!(format!("{status:?}"), "MoveStatus(CHECK | MATE)");
    assert_eq!(format!("{:?}", MoveStatus::NONE), "MoveStatus(NONE)");
    assert_eq!(status.bits(), 6);
}

#[test]
fn test_rook_chases_loose_knight() {
    let mut pos = Position::from_fen("5k3/9/9/9/2n6/9/9/9/R8/4K4 w");
    assert!(pos.make_move(mv("a1a5")));
    assert_eq!(pos.last_move().threat(), Threat::Chase(5));

    // A rook behind the knight protects it.
    let mut pos = Position::from_fen("2r2k3/9/9/9/2n6/9/9/9/R8/4K4 w");
    assert!(pos.make_move(mv("a1a5")));
    assert_eq!(pos.last_move().threat(), Threat::None);
}

#[test]
fn test_protection_and_good_captures() {
    let pos = Position::new();
    assert!(pos.is_protected(Color::Black, sq("b9"), None));
    assert!(!pos.is_protected(Color::Black, sq("b9"), Some(sq("a9"))));
    assert!(!pos.good_capture(mv("b2b9")));
    assert!(!pos.good_capture(mv("h2e2")));

    let pos = Position::from_fen("5k3/9/9/9/R1n6/9/9/9/9/4K4 w");
    assert!(pos.good_capture(mv("a5c5")));
    let caps = pos.generate_captures();
    assert_eq!(caps.moves().collect::<Vec<_>>(), vec![mv("a5c5")]);
}
