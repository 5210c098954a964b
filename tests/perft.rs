use xiangqi_engine::board::Position;

#[test]
fn perft_start_position() {
    let mut pos = Position::new();
    assert_eq!(pos.perft(1), 44);
    assert_eq!(pos.perft(2), 1920);
    assert_eq!(pos.perft(3), 79_666);
}

#[test]
fn perft_is_mirror_symmetric() {
    let mut pos = Position::new();
    assert!(pos.make_move("h2e2".parse().unwrap()));
    let mut mirrored = pos.clone();
    mirrored.mirror();

    assert_eq!(pos.perft(2), mirrored.perft(2));
}

#[test]
fn perft_divide_matches_total() {
    let mut pos = Position::new();
    let total: u64 = pos.perft_divide(3).iter().map(|(_, n)| n).sum();
    assert_eq!(total, 79_666);
}

#[test]
#[ignore]
fn perft_start_position_deep() {
    let mut pos = Position::new();
    assert_eq!(pos.perft(4), 3_290_240);
}
