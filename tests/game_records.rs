use serde::Deserialize;

use xiangqi_engine::board::{MoveStatus, Position, WxfCode, START_FEN};

#[derive(Deserialize)]
struct GameSet {
    games: Vec<Game>,
}

#[derive(Deserialize)]
struct Game {
    name: String,
    start: Option<String>,
    moves: Vec<Record>,
    fen: String,
    mate: bool,
}

#[derive(Deserialize)]
struct Record {
    chinese: String,
    wxf: String,
    ucci: String,
    #[serde(default)]
    capture: bool,
    #[serde(default)]
    check: bool,
}

fn load_games() -> GameSet {
    let data = include_str!("data/games.json");
    serde_json::from_str(data).expect("invalid games.json")
}

#[test]
fn game_records_replay() {
    for game in load_games().games {
        let mut pos = Position::from_fen(game.start.as_deref().unwrap_or(START_FEN));

        for record in &game.moves {
            let mv = record.ucci.parse().unwrap();
            let code: WxfCode = record.wxf.parse().unwrap();

            assert_eq!(pos.move_to_wxf(mv).unwrap(), code, "{}: {}", game.name, record.ucci);
            assert_eq!(pos.wxf_to_move(code).unwrap(), mv, "{}: {}", game.name, record.wxf);
            assert_eq!(
                pos.move_to_chinese(mv).unwrap(),
                record.chinese,
                "{}: {}",
                game.name,
                record.ucci
            );
            assert_eq!(
                pos.chinese_to_move(&record.chinese).unwrap(),
                mv,
                "{}: {}",
                game.name,
                record.chinese
            );

            let status = pos.try_move(mv);
            assert!(status.is_played(), "{}: {} rejected", game.name, record.ucci);
            assert_eq!(status.contains(MoveStatus::CAPTURE), record.capture);
            assert_eq!(status.contains(MoveStatus::CHECK), record.check);
        }

        assert_eq!(pos.to_fen(), game.fen, "{}", game.name);
        assert_eq!(pos.is_mate(), game.mate, "{}", game.name);
    }
}

#[test]
fn game_records_undo_to_start() {
    for game in load_games().games {
        let start = game.start.as_deref().unwrap_or(START_FEN);
        let mut pos = Position::from_fen(start);
        let key = pos.zobrist();

        for record in &game.moves {
            assert!(pos.make_move(record.ucci.parse().unwrap()));
        }
        for _ in &game.moves {
            pos.undo_make_move();
        }

        assert_eq!(pos.to_fen(), Position::from_fen(start).to_fen(), "{}", game.name);
        assert_eq!(pos.zobrist(), key, "{}", game.name);
    }
}

#[test]
fn game_records_mirrored() {
    for game in load_games().games {
        let mut pos = Position::from_fen(game.start.as_deref().unwrap_or(START_FEN));
        pos.mirror();

        for record in &game.moves {
            let code: WxfCode = record.wxf.parse().unwrap();
            let mv = pos.wxf_to_move(xiangqi_engine::board::file_mirror(code)).unwrap();
            assert!(pos.make_move(mv), "{}: mirrored {} rejected", game.name, record.wxf);
        }

        assert_eq!(
            pos.to_fen(),
            xiangqi_engine::board::fen_mirror(&game.fen),
            "{}",
            game.name
        );
    }
}
