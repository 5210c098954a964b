//! UCCI, WXF and Chinese notation tests.

use super::{mv, sq};
use crate::board::{
    chinese_to_wxf, file_mirror, parse_ucci, to_ucci, wxf_to_chinese, Color, Move, NotationError,
    Position, RuleConfig, WxfCode,
};

fn code(s: &str) -> WxfCode {
    s.parse().unwrap()
}

#[test]
fn test_opening_in_chinese() {
    let mut pos = Position::new();
    let first = pos.chinese_to_move("炮二平五").unwrap();
    assert_eq!(first, mv("h2e2"));
    assert_eq!(pos.move_to_wxf(first).unwrap(), code("C2.5"));
    assert!(pos.make_move(first));
    assert_eq!(
        pos.to_fen(),
        "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C2C4/9/RNBAKABNR b"
    );

    let reply = pos.chinese_to_move("马8进7").unwrap();
    assert_eq!(reply, mv("h9g7"));
    assert_eq!(pos.move_to_wxf(reply).unwrap(), code("N8+7"));
    assert_eq!(pos.move_to_chinese(reply).unwrap(), "马８进７");
    assert!(pos.make_move(reply));
    assert_eq!(
        pos.to_fen(),
        "rnbakab1r/9/1c4nc1/p1p1p1p1p/9/9/P1P1P1P1P/1C2C4/9/RNBAKABNR w"
    );
}

#[test]
fn test_red_encoding() {
    let pos = Position::new();
    let cases = [
        ("h2e2", "C2.5", "炮二平五"),
        ("b0c2", "N8+7", "马八进七"),
        ("a0a1", "R9+1", "车九进一"),
        ("e3e4", "P5+1", "兵五进一"),
        ("e0e1", "K5+1", "帅五进一"),
        ("d0e1", "A6+5", "仕六进五"),
        ("g0e2", "B3+5", "相三进五"),
    ];
    for (ucci, wxf, chinese) in cases {
        let m = mv(ucci);
        assert_eq!(pos.move_to_wxf(m).unwrap(), code(wxf), "{ucci}");
        assert_eq!(pos.move_to_chinese(m).unwrap(), chinese, "{ucci}");
        assert_eq!(pos.wxf_to_move(code(wxf)).unwrap(), m, "{wxf}");
        assert_eq!(pos.chinese_to_move(chinese).unwrap(), m, "{chinese}");
    }
}

#[test]
fn test_black_fixed_table() {
    let mut pos = Position::new();
    assert!(pos.make_move(mv("h2e2")));
    assert_eq!(pos.chinese_to_move("象7进5").unwrap(), mv("g9e7"));
    assert_eq!(pos.wxf_to_move(code("A4+5")).unwrap(), mv("d9e8"));
    assert_eq!(pos.move_to_chinese(mv("g9e7")).unwrap(), "象７进５");
}

#[test]
fn test_keypad_and_lowercase_codes() {
    let pos = Position::new();
    assert_eq!(pos.wxf_to_move(code("26+5")).unwrap(), mv("d0e1"));
    assert_eq!(pos.wxf_to_move(code("e3+5")).unwrap(), mv("g0e2"));
    assert_eq!(pos.wxf_to_move(code("62.5")).unwrap(), mv("h2e2"));
}

#[test]
fn test_two_rooks_on_a_file() {
    let pos = Position::from_fen("3k5/9/9/9/9/9/9/R8/9/R3K4 w");

    assert_eq!(pos.move_to_wxf(mv("a2a5")).unwrap(), code("R++3"));
    assert_eq!(pos.move_to_chinese(mv("a2a5")).unwrap(), "前车进三");
    assert_eq!(pos.move_to_wxf(mv("a0a1")).unwrap(), code("R-+1"));
    assert_eq!(pos.move_to_chinese(mv("a0a1")).unwrap(), "后车进一");

    assert_eq!(pos.wxf_to_move(code("+R+3")).unwrap(), mv("a2a5"));
    assert_eq!(pos.wxf_to_move(code("R-+1")).unwrap(), mv("a0a1"));
    assert_eq!(pos.chinese_to_move("后车进一").unwrap(), mv("a0a1"));
    assert_eq!(pos.chinese_to_move("前车平五").unwrap(), mv("a2e2"));
}

#[test]
fn test_three_pawns_on_a_file() {
    let pos = Position::from_fen("4k4/9/9/4P4/4P4/4P4/9/9/9/3K5 w");
    assert_eq!(pos.move_to_wxf(mv("e6e7")).unwrap(), code("P++1"));
    assert_eq!(pos.move_to_wxf(mv("e5d5")).unwrap(), code("P..6"));
    assert_eq!(pos.move_to_chinese(mv("e5d5")).unwrap(), "中兵平六");
    assert_eq!(pos.move_to_wxf(mv("e4e5")).unwrap(), code("P-+1"));

    assert_eq!(pos.wxf_to_move(code("P..6")).unwrap(), mv("e5d5"));
    assert_eq!(pos.chinese_to_move("后兵进一").unwrap(), mv("e4e5"));
}

#[test]
fn test_pawns_on_two_files() {
    let pos = Position::from_fen("4k4/9/9/9/P1P6/P1P6/9/9/9/3K5 w");
    // Stacked pawns are lettered right to left, front to back.
    assert_eq!(pos.move_to_wxf(mv("c5c6")).unwrap(), code("Pa+1"));
    assert_eq!(pos.move_to_wxf(mv("c4c5")).unwrap(), code("Pb+1"));
    assert_eq!(pos.move_to_wxf(mv("a5a6")).unwrap(), code("Pc+1"));
    assert_eq!(pos.move_to_chinese(mv("a5a6")).unwrap(), "三兵进一");

    assert_eq!(pos.wxf_to_move(code("Pc+1")).unwrap(), mv("a5a6"));
    assert_eq!(pos.wxf_to_move(code("Pd+1")).unwrap(), mv("a4a5"));
    assert_eq!(pos.chinese_to_move("三兵进一").unwrap(), mv("a5a6"));

    let mut mirrored = pos.clone();
    mirrored.mirror();
    let code_there = file_mirror(pos.move_to_wxf(mv("a5a6")).unwrap());
    assert_eq!(code_there, code("Pa+1"));
    assert_eq!(mirrored.wxf_to_move(code_there).unwrap(), mv("i5i6"));
}

// Layouts with more than two pawns sharing files use one pooled list,
// lettered right to left and front to back. Neither layout below has been
// checked against published WXF records.
#[test]
fn test_three_and_two_pawns_pooled() {
    let pos = Position::from_fen("3k5/9/9/2P6/P1P6/P1P6/9/9/9/4K4 w");
    assert_eq!(pos.move_to_wxf(mv("c6c7")).unwrap(), code("Pa+1"));
    assert_eq!(pos.move_to_wxf(mv("c5b5")).unwrap(), code("Pb.8"));
    assert_eq!(pos.move_to_wxf(mv("a5a6")).unwrap(), code("Pd+1"));
    assert_eq!(pos.move_to_chinese(mv("a5a6")).unwrap(), "四兵进一");

    assert_eq!(pos.wxf_to_move(code("Pc+1")).unwrap(), mv("c4c5"));
    assert_eq!(pos.wxf_to_move(code("Pe+1")).unwrap(), mv("a4a5"));
    assert_eq!(pos.chinese_to_move("二兵平八").unwrap(), mv("c5b5"));
}

#[test]
fn test_four_pawns_on_a_file() {
    let pos = Position::from_fen("3k5/9/4P4/4P4/4P4/4P4/9/9/9/4K4 w");
    assert_eq!(pos.move_to_wxf(mv("e7e8")).unwrap(), code("Pa+1"));
    assert_eq!(pos.move_to_chinese(mv("e7e8")).unwrap(), "一兵进一");
    assert_eq!(pos.move_to_wxf(mv("e5d5")).unwrap(), code("Pc.6"));

    assert_eq!(pos.wxf_to_move(code("Pd+1")).unwrap(), mv("e4e5"));
    assert_eq!(pos.chinese_to_move("三兵平六").unwrap(), mv("e5d5"));
}

#[test]
fn test_file_mirror() {
    let cases = [
        ("C2.5", "C8.5"),
        ("N2+3", "N8+7"),
        ("R1+3", "R9+3"),
        ("A4=P", "A6=P"),
        ("+P.4", "+P.6"),
        ("R-+1", "R-+1"),
    ];
    for (code_in, expected) in cases {
        assert_eq!(file_mirror(code(code_in)), code(expected), "{code_in}");
    }
}

#[test]
fn test_wxf_errors() {
    let pos = Position::new();
    let cases = [
        ("C5.5", "no cannon on the centre file"),
        ("A1+2", "not an advisor move"),
        ("+K+1", "generals have no ordinal"),
        ("K4+1", "general is on file 5"),
    ];
    for (text, why) in cases {
        assert!(
            matches!(pos.wxf_to_move(code(text)), Err(NotationError::NoSuchPiece { .. })),
            "{text}: {why}"
        );
    }
    assert!(matches!(
        pos.wxf_to_move(code("R1-1")),
        Err(NotationError::OffBoard { .. })
    ));
    assert!(matches!(
        pos.wxf_to_move(code("X1+1")),
        Err(NotationError::UnknownPiece { .. })
    ));
    assert!(matches!(
        pos.wxf_to_move(code("C2x5")),
        Err(NotationError::UnknownDirection { .. })
    ));
    assert!(matches!(
        pos.move_to_wxf(mv("e5e6")),
        Err(NotationError::NoSuchPiece { .. })
    ));
    assert_eq!(
        "C2.".parse::<WxfCode>(),
        Err(NotationError::InvalidLength { len: 3 })
    );
}

#[test]
fn test_chinese_text() {
    assert_eq!(chinese_to_wxf("砲二平五").unwrap(), code("C2.5"));
    assert_eq!(chinese_to_wxf("馬８進７").unwrap(), code("N8+7"));
    assert_eq!(chinese_to_wxf("後車退一").unwrap(), code("R--1"));
    assert_eq!(chinese_to_wxf("仕四变兵").unwrap(), code("A4=P"));

    assert_eq!(wxf_to_chinese(code("A4=P"), Color::Red).unwrap(), "仕四跑兵");
    assert_eq!(wxf_to_chinese(code("A4=P"), Color::Black).unwrap(), "士４变卒");
    assert_eq!(wxf_to_chinese(code("+P.4"), Color::Black).unwrap(), "前卒平４");

    assert_eq!(
        chinese_to_wxf("炮二平"),
        Err(NotationError::InvalidLength { len: 3 })
    );
    assert!(matches!(
        chinese_to_wxf("炮二走五"),
        Err(NotationError::InvalidText { .. })
    ));
    assert!(matches!(
        wxf_to_chinese(code("X1+1"), Color::Red),
        Err(NotationError::UnknownPiece { .. })
    ));
}

#[test]
fn test_promotion_codes() {
    let mut pos = Position::with_rules(RuleConfig::default().with_promotion(true));
    pos.load_fen("5k3/9/9/9/9/9/9/9/9/3AK4 w");
    let promote = Move::promotion(sq("d0"));
    assert_eq!(pos.move_to_wxf(promote).unwrap(), code("A6=P"));
    assert_eq!(pos.move_to_chinese(promote).unwrap(), "仕六跑兵");
    assert_eq!(pos.wxf_to_move(code("A6=P")).unwrap(), promote);
    assert_eq!(pos.chinese_to_move("仕六变兵").unwrap(), promote);
}

#[test]
fn test_ucci() {
    assert_eq!(parse_ucci("h2e2").unwrap(), Move::new(sq("h2"), sq("e2")));
    assert_eq!("b0c2".parse::<Move>().unwrap(), mv("b0c2"));
    assert_eq!(to_ucci(mv("h2e2")), "h2e2");
    assert_eq!(to_ucci(Move::NULL), "0000");

    assert_eq!(parse_ucci("h2e"), Err(NotationError::InvalidLength { len: 3 }));
    assert!(matches!(
        parse_ucci("h2z2"),
        Err(NotationError::InvalidSquare { .. })
    ));
    assert!(matches!(
        parse_ucci("h2ea"),
        Err(NotationError::InvalidSquare { .. })
    ));
    assert!(matches!(
        parse_ucci("炮二平五"),
        Err(NotationError::InvalidSquare { .. })
    ));
}
