use chess_rules::board::{BoardBuilder, CastleBlock, Color, MoveError, MoveKind, PieceKind, PlayerId};
use chess_rules::game::{Game, GameStatus, TurnState};
use chess_rules::CheckStatus;

fn play_all(game: &mut Game, moves: &[&str]) {
    for text in moves {
        game.apply_move(text)
            .unwrap_or_else(|err| panic!("'{text}' rejected: {err}"));
    }
}

#[test]
fn new_game_has_full_board_and_white_to_move() {
    let game = Game::new();
    let state = game.board_state();

    assert_eq!(state.len(), 64);
    assert_eq!(state.values().filter(|p| p.is_some()).count(), 32);
    assert_eq!(state["e1"].as_ref().map(|p| p.asset.as_str()), Some("W_King"));
    assert_eq!(state["d8"].as_ref().map(|p| p.asset.as_str()), Some("B_Queen"));
    assert_eq!(game.current_turn(), PlayerId::Player1);
    assert_eq!(game.game_status(), GameStatus::Incomplete);
    assert_eq!(game.game_status().to_string(), "INCOMPLETE");
    assert_eq!(game.player(PlayerId::Player1).color(), Color::White);
    assert_eq!(game.player(PlayerId::Player2).color(), Color::Black);
}

#[test]
fn turns_alternate_and_ownership_is_enforced() {
    let mut game = Game::new();
    assert!(matches!(game.check_move("e7 e5"), Err(MoveError::NotOwner { .. })));

    game.apply_move("e2 e4").unwrap();
    assert_eq!(game.current_turn(), PlayerId::Player2);
    assert!(matches!(game.check_move("d2 d4"), Err(MoveError::NotOwner { .. })));
    assert!(game.validate_move("e7 e5"));
    assert_eq!(game.history().len(), 1);
}

#[test]
fn rejected_move_leaves_game_untouched() {
    let mut game = Game::new();
    let before = game.board_state();

    for text in ["e2 e5", "e3 e4", "nonsense", "z9 a1", "g1 g3"] {
        assert!(game.apply_move(text).is_err(), "{text} should be rejected");
    }
    assert_eq!(game.board_state(), before);
    assert_eq!(game.current_turn(), PlayerId::Player1);
    assert!(game.history().is_empty());
}

#[test]
fn validate_move_is_side_effect_free() {
    let game = Game::new();
    let before = game.board_state();
    assert!(game.validate_move("g1 f3"));
    assert!(!game.validate_move("g1 g3"));
    assert_eq!(game.board_state(), before);
}

#[test]
fn check_is_reported_and_must_be_answered() {
    let mut game = Game::new();
    play_all(&mut game, &["e2 e4", "f7 f6", "d2 d4"]);
    let played = game.apply_move("e8 f7");
    assert!(played.is_ok());

    let mut game = Game::new();
    play_all(&mut game, &["e2 e4", "f7 f6", "d1 h5"]);
    assert_eq!(game.history().last().map(|p| p.check), Some(CheckStatus::Check));
    assert!(game.player(PlayerId::Player2).in_check());
    assert_eq!(game.check_status(), CheckStatus::Check);

    assert!(matches!(
        game.check_move("a7 a6"),
        Err(MoveError::SelfCheck { .. })
    ));
    game.apply_move("g7 g6").unwrap();
    assert!(!game.player(PlayerId::Player2).in_check());
}

#[test]
fn checkmate_ends_the_game() {
    let mut game = Game::new();
    play_all(&mut game, &["f2 f3", "e7 e5", "g2 g4", "d8 h4"]);

    assert_eq!(game.game_status(), GameStatus::Won(PlayerId::Player2));
    assert_eq!(game.game_status().to_string(), "Player 2 Wins");
    assert_eq!(game.turn_state(), TurnState::Won(PlayerId::Player2));
    assert!(game.legal_moves().is_empty());
    assert_eq!(game.apply_move("a2 a3"), Err(MoveError::GameOver));
}

#[test]
fn captures_are_credited_to_the_capturer() {
    let mut game = Game::new();
    play_all(&mut game, &["e2 e4", "d7 d5", "e4 d5"]);

    let taken = game.captured_by(PlayerId::Player1);
    assert_eq!(taken.len(), 1);
    assert_eq!(taken[0].kind(), PieceKind::Pawn);
    assert_eq!(taken[0].owner(), PlayerId::Player2);
    assert!(game.captured_by(PlayerId::Player2).is_empty());
    assert_eq!(
        game.history().last().and_then(|p| p.record.captured).map(|p| p.kind()),
        Some(PieceKind::Pawn)
    );
}

#[test]
fn promotion_through_the_controller() {
    let board = BoardBuilder::new()
        .piece("e1".parse().unwrap(), PlayerId::Player1, PieceKind::King)
        .piece("h8".parse().unwrap(), PlayerId::Player2, PieceKind::King)
        .piece("a7".parse().unwrap(), PlayerId::Player1, PieceKind::Pawn)
        .build();
    let mut game = Game::from_board(board, Color::White, PlayerId::Player1);

    assert_eq!(
        game.check_move("a7 a8 k"),
        Err(MoveError::InvalidPromotion { found: 'k' })
    );
    let played = game.apply_move("a7 a8 n").unwrap();
    assert_eq!(played.record.mv.kind(), MoveKind::Promotion(PieceKind::Knight));
    assert_eq!(
        game.board_state()["a8"].as_ref().map(|p| p.asset.as_str()),
        Some("W_Knight")
    );
}

#[test]
fn castling_rejection_names_the_reason() {
    let mut game = Game::new();
    play_all(&mut game, &["e2 e4", "e7 e5", "g1 f3", "b8 c6"]);
    assert_eq!(
        game.check_move("e1 g1"),
        Err(MoveError::CastleUnavailable {
            reason: CastleBlock::PathBlocked
        })
    );
    play_all(&mut game, &["f1 c4", "g8 f6", "e1 g1"]);
    assert_eq!(game.history().last().map(|p| p.record.mv.kind()), Some(MoveKind::CastleKingside));
}

#[test]
fn black_player_one_uses_mirrored_names() {
    let mut game = Game::with_player_one_color(Color::Black);
    assert_eq!(game.current_turn(), PlayerId::Player2);
    assert_eq!(game.player(PlayerId::Player1).color(), Color::Black);

    let state = game.board_state();
    assert_eq!(state["e8"].as_ref().map(|p| p.owner), Some(PlayerId::Player1));
    assert_eq!(state["e1"].as_ref().map(|p| p.asset.as_str()), Some("W_King"));

    game.apply_move("e2 e4").unwrap();
    assert_eq!(game.current_turn(), PlayerId::Player1);
    game.apply_move("e7 e5").unwrap();
    assert_eq!(
        game.board_state()["e5"].as_ref().map(|p| p.asset.as_str()),
        Some("B_Pawn")
    );
}

#[test]
fn mirrored_game_errors_use_typed_squares() {
    let game = Game::with_player_one_color(Color::Black);

    let err = game.check_move("e2 e5").unwrap_err();
    assert_eq!(
        err,
        MoveError::IllegalTarget {
            from: "e2".parse().unwrap(),
            to: "e5".parse().unwrap(),
        }
    );
    let message = err.to_string();
    assert!(message.contains("e2") && message.contains("e5"), "{message}");

    let err = game.check_move("e7 e5").unwrap_err();
    assert_eq!(
        err,
        MoveError::NotOwner {
            square: "e7".parse().unwrap()
        }
    );
    assert!(err.to_string().contains("e7"));
}

#[test]
fn from_board_detects_existing_mate() {
    let board = BoardBuilder::new()
        .piece("g1".parse().unwrap(), PlayerId::Player1, PieceKind::King)
        .piece("f2".parse().unwrap(), PlayerId::Player1, PieceKind::Pawn)
        .piece("g2".parse().unwrap(), PlayerId::Player1, PieceKind::Pawn)
        .piece("h2".parse().unwrap(), PlayerId::Player1, PieceKind::Pawn)
        .piece("a1".parse().unwrap(), PlayerId::Player2, PieceKind::Rook)
        .piece("a8".parse().unwrap(), PlayerId::Player2, PieceKind::King)
        .build();
    let game = Game::from_board(board, Color::White, PlayerId::Player1);
    assert_eq!(game.game_status(), GameStatus::Won(PlayerId::Player2));
    assert!(game.player(PlayerId::Player1).in_check());
}

#[test]
fn play_accepts_generated_moves_only() {
    let mut game = Game::new();
    let mv = game.legal_moves()[0];
    assert!(game.play(mv).is_ok());

    let wrong = game.legal_moves()[0];
    let mut other = Game::new();
    assert!(other.play(wrong).is_err());
}

#[test]
fn en_passant_window_is_one_ply() {
    let mut game = Game::new();
    play_all(&mut game, &["e2e4", "a7a6", "e4e5", "f7f5"]);
    assert!(game.validate_move("e5f6"));

    let mut late = Game::new();
    play_all(&mut late, &["e2e4", "a7a6", "e4e5", "f7f5", "b1c3", "a6a5"]);
    assert!(!late.validate_move("e5f6"));

    let played = game.apply_move("e5f6").unwrap();
    assert_eq!(played.record.mv.kind(), MoveKind::EnPassant);
    assert!(game.board_state()["f5"].is_none());
}

#[test]
fn board_state_is_idempotent() {
    let mut game = Game::new();
    play_all(&mut game, &["e2 e4", "c7 c5"]);
    assert_eq!(game.board_state(), game.board_state());
}
