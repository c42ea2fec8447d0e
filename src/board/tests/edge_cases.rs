//! Edge case tests: the mirrored board, roster bookkeeping and odd positions.

use super::sq;
use crate::board::rules::{check_move, check_status, is_in_check, legal_moves, CheckStatus};
use crate::board::{
    Board, BoardBuilder, BoardError, Color, MoveKind, Orientation, PieceKind, PlayerId,
};

use PlayerId::{Player1, Player2};

fn mirrored() -> Board {
    Board::standard(Orientation::Mirrored, Color::Black)
}

#[test]
fn test_neighbor_stops_at_the_edge() {
    let board = Board::new();
    assert_eq!(board.neighbor(sq("h1"), 1, 0), None);
    assert_eq!(board.neighbor(sq("a1"), 0, -1), None);
    assert_eq!(board.neighbor(sq("a8"), -1, 1), None);
    assert_eq!(board.neighbor(sq("e4"), 1, 1), Some(sq("f5")));
    assert_eq!(board.neighbor(sq("e4"), -2, -1), Some(sq("c3")));
}

#[test]
fn test_mirrored_start_keeps_player_one_near_row_zero() {
    let board = mirrored();
    let orientation = Orientation::Mirrored;

    let king = board.king_square(Player1).unwrap();
    assert_eq!(king.row(), 0);
    assert_eq!(orientation.name(king), "e8");
    assert_eq!(board.piece_at(king).map(|p| p.color()), Some(Color::Black));

    let queen = orientation.square("d8").unwrap();
    assert_eq!(board.piece_at(queen).map(|p| p.kind()), Some(PieceKind::Queen));

    assert_eq!(legal_moves(board.grid(), Player1).len(), 20);
    assert_eq!(legal_moves(board.grid(), Player2).len(), 20);
    assert!(board.is_consistent());
}

#[test]
fn test_mirrored_castling_sides() {
    let orientation = Orientation::Mirrored;
    let mut board = mirrored();
    for name in ["f8", "g8", "b8", "c8", "d8"] {
        board.capture_at(orientation.square(name).unwrap()).unwrap();
    }
    let king = orientation.square("e8").unwrap();

    let kingside = check_move(board.grid(), Player1, king, orientation.square("g8").unwrap(), None);
    assert_eq!(kingside.map(|mv| mv.kind()), Ok(MoveKind::CastleKingside));

    let queenside = check_move(board.grid(), Player1, king, orientation.square("c8").unwrap(), None)
        .unwrap();
    assert_eq!(queenside.kind(), MoveKind::CastleQueenside);

    board.apply(queenside).unwrap();
    let rook = board.piece_at(orientation.square("d8").unwrap()).unwrap();
    assert_eq!(rook.kind(), PieceKind::Rook);
    assert!(rook.has_moved());
}

#[test]
fn test_stalemate_is_not_check() {
    let board = BoardBuilder::new()
        .piece(sq("h8"), Player2, PieceKind::King)
        .piece(sq("f7"), Player1, PieceKind::Queen)
        .piece(sq("g6"), Player1, PieceKind::King)
        .build();
    assert!(legal_moves(board.grid(), Player2).is_empty());
    assert_eq!(check_status(board.grid(), Player2), CheckStatus::Clear);
}

#[test]
fn test_board_without_king_is_never_in_check() {
    let board = BoardBuilder::new()
        .piece(sq("e4"), Player2, PieceKind::Queen)
        .piece(sq("e1"), Player1, PieceKind::Rook)
        .build();
    assert!(!is_in_check(board.grid(), Player1));
    assert_eq!(check_status(board.grid(), Player1), CheckStatus::Clear);
}

#[test]
fn test_edge_pawn_does_not_wrap() {
    let board = BoardBuilder::new()
        .piece(sq("h2"), Player1, PieceKind::Pawn)
        .piece(sq("a3"), Player2, PieceKind::Knight)
        .build();
    let pawn = board.piece_at(sq("h2")).unwrap();
    let targets: Vec<_> = crate::board::movegen::reachable(board.grid(), &pawn)
        .into_keys()
        .collect();
    assert_eq!(targets, vec![sq("h3"), sq("h4")]);
}

#[test]
fn test_player_two_promotes_on_row_zero() {
    let board = BoardBuilder::new()
        .piece(sq("e8"), Player2, PieceKind::King)
        .piece(sq("a1"), Player1, PieceKind::King)
        .piece(sq("g2"), Player2, PieceKind::Pawn)
        .build();
    let mv = check_move(board.grid(), Player2, sq("g2"), sq("g1"), Some(PieceKind::Rook)).unwrap();
    assert_eq!(mv.kind(), MoveKind::Promotion(PieceKind::Rook));
}

#[test]
fn test_capture_moves_piece_to_owner_lost_pile() {
    let mut board = Board::new();
    let taken = board.capture_at(sq("d8")).unwrap();
    assert_eq!(taken.kind(), PieceKind::Queen);
    assert_eq!(board.roster(Player2).lost(), &[taken]);
    assert!(!board.roster(Player2).contains(taken.id()));
    assert!(board.roster(Player1).lost().is_empty());
    assert!(board.is_consistent());

    assert_eq!(
        board.capture_at(sq("d8")),
        Err(BoardError::NoPieceToCapture { square: sq("d8") })
    );
}

#[test]
fn test_low_level_mutation_errors() {
    let mut board = Board::new();
    assert_eq!(
        board.relocate(sq("e4"), sq("e5")),
        Err(BoardError::EmptySource { square: sq("e4") })
    );
    assert_eq!(
        board.relocate(sq("e1"), sq("e2")),
        Err(BoardError::OccupiedTarget { square: sq("e2") })
    );
    assert_eq!(
        board.spawn(sq("a1"), PieceKind::Queen, Player1, Color::White),
        Err(BoardError::OccupiedTarget { square: sq("a1") })
    );
    assert_eq!(
        board.promote(sq("a1"), PieceKind::Queen),
        Err(BoardError::NotPromotable { square: sq("a1") })
    );
    assert!(board.is_consistent());
}

#[test]
fn test_relocate_marks_tracked_pieces_moved() {
    let mut board = Board::new();
    board.relocate(sq("g1"), sq("f3")).unwrap();
    board.relocate(sq("e2"), sq("e4")).unwrap();
    assert!(board.piece_at(sq("f3")).is_some_and(|p| !p.has_moved()));
    assert!(board.piece_at(sq("e4")).is_some_and(|p| p.has_moved()));
    assert_eq!(board.piece_at(sq("e4")).map(|p| p.location()), Some(sq("e4")));
}
