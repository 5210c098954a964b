use super::{assert_consistent, sq};
use crate::board::{Color, FenError, PieceType, Position, RuleConfig, START_FEN};

#[test]
fn test_start_fen_round_trip() {
    let pos = Position::new();
    assert_eq!(pos.to_fen(), START_FEN);
    assert_eq!(pos.side_to_move(), Color::Red);
    assert_consistent(&pos);

    assert_eq!(pos.piece_at(sq("e0")).kind(), PieceType::King);
    assert_eq!(pos.piece_at(sq("b7")).kind(), PieceType::Cannon);
    assert_eq!(pos.piece_at(sq("b7")).color(), Color::Black);
    assert_eq!(pos.pieces_of(Color::Red).count(), 16);
    assert_eq!(pos.pieces_of(Color::Black).count(), 16);
}

#[test]
fn test_black_to_move() {
    let red = Position::from_fen("4k4/9/9/9/9/9/9/9/9/4K4 w");
    let black = Position::from_fen("4k4/9/9/9/9/9/9/9/9/4K4 b");
    assert_eq!(black.side_to_move(), Color::Black);
    assert_eq!(black.to_fen(), "4k4/9/9/9/9/9/9/9/9/4K4 b");
    assert_ne!(red.zobrist(), black.zobrist());
}

#[test]
fn test_lenient_missing_side_is_red() {
    let pos = Position::from_fen("rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR");
    assert_eq!(pos.to_fen(), START_FEN);
}

#[test]
fn test_lenient_drops_extra_pieces() {
    let pos = Position::from_fen("4k4/9/9/9/9/9/PPPPPP3/9/9/4K4 w");
    assert_eq!(pos.to_fen(), "4k4/9/9/9/9/9/PPPPP4/9/9/4K4 w");
    assert!(pos.piece_at(sq("f3")).is_empty());
    assert_consistent(&pos);
}

#[test]
fn test_lenient_skips_unknown_letters() {
    let pos = Position::from_fen("4k4/9/9/9/9/9/9/9/9/3xK4 w");
    assert_eq!(pos.to_fen(), "4k4/9/9/9/9/9/9/9/9/4K4 w");
    assert_eq!(pos.king_square(Color::Red), Some(sq("e0")));
}

#[test]
fn test_alternative_letters() {
    let pos = Position::from_fen("rheakaehr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RHEAKAEHR w");
    assert_eq!(pos.to_fen(), START_FEN);
}

#[test]
fn test_load_fen_keeps_rules() {
    let rules = RuleConfig::default().with_promotion(true);
    let mut pos = Position::with_rules(rules);
    pos.load_fen(START_FEN);
    assert_eq!(pos.rules(), rules);
    assert_eq!(pos.to_fen(), START_FEN);
    assert_eq!(pos.history().len(), 1);
}

#[test]
fn test_strict_accepts_start() {
    let pos = Position::try_from_fen(START_FEN).unwrap();
    assert_eq!(pos.zobrist(), Position::new().zobrist());

    let parsed: Position = "4k4/9/9/9/9/9/9/9/9/4K4 r".parse().unwrap();
    assert_eq!(parsed.side_to_move(), Color::Red);
}

#[test]
fn test_strict_errors() {
    assert_eq!(Position::try_from_fen("").err(), Some(FenError::Empty));
    assert_eq!(
        Position::try_from_fen("4k4/9/9/9/9/9/9/9/9/4K4/9 w").err(),
        Some(FenError::TooManyRanks { ranks: 11 })
    );
    assert_eq!(
        Position::try_from_fen("4k4/9/9/9/9/9/9/9/9/4X4 w").err(),
        Some(FenError::UnknownPiece { char: 'X' })
    );
    assert_eq!(
        Position::try_from_fen("4k5/9/9/9/9/9/9/9/9/4K4 w").err(),
        Some(FenError::TooManyFiles { rank: 0, files: 10 })
    );
    assert_eq!(
        Position::try_from_fen("9k/9/9/9/9/9/9/9/9/4K4 w").err(),
        Some(FenError::TooManyFiles { rank: 0, files: 10 })
    );
    assert_eq!(
        Position::try_from_fen("4k4/9/9/9/9/9/9/9/9/3KK4 w").err(),
        Some(FenError::PieceOverflow { char: 'K' })
    );
}

#[test]
fn test_strict_side_to_move() {
    assert_eq!(
        Position::try_from_fen("4k4/9/9/9/9/9/9/9/9/4K4").err(),
        Some(FenError::InvalidSideToMove {
            found: String::new()
        })
    );
    assert_eq!(
        "4k4/9/9/9/9/9/9/9/9/4K4 x".parse::<Position>().err(),
        Some(FenError::InvalidSideToMove {
            found: "x".to_string()
        })
    );
}
