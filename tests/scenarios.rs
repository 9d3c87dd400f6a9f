//! End-to-end scenarios played through the public board and engine API.

use mini_chess::engines::ai_player::AIPlayer;
use mini_chess::engines::engine_greedy::GreedyEngine;
use mini_chess::engines::engine_trait::Engine;
use mini_chess::errors::MoveError;
use mini_chess::game_state::chess_rules::STARTING_LAYOUT;
use mini_chess::game_state::chess_types::{
    Board, GameStatus, Move, Piece, PieceKind, Player, Square,
};
use mini_chess::game_state::snapshot::BoardSnapshot;
use mini_chess::move_generation::perft::perft;

fn sq(row: i32, col: i32) -> Square {
    Square::new(row, col).unwrap()
}

#[test]
fn fresh_board_has_the_fixed_layout() {
    let board = Board::new();
    for player in Player::ALL {
        assert_eq!(board.pieces_of(player).count(), 3);
        assert_eq!(board.count_pieces(player, PieceKind::Leader), 1);
        assert_eq!(board.count_pieces(player, PieceKind::Soldier), 2);
    }
    for (kind, owner, row, col) in STARTING_LAYOUT {
        let piece = board.piece_at_coords(row as i32, col as i32).unwrap();
        assert_eq!((piece.kind(), piece.owner()), (kind, owner));
        assert_eq!(piece.position(), sq(row as i32, col as i32));
    }
    assert_eq!(board.check_winner(), None);
}

#[test]
fn soldier_advance_then_capture() {
    let mut board = Board::new();

    assert!(board.move_piece(3, 1, 2, 1));
    assert!(board.piece_at_coords(3, 1).is_none());
    let advanced = board.piece_at_coords(2, 1).unwrap();
    assert_eq!((advanced.kind(), advanced.owner()), (PieceKind::Soldier, Player::Player1));

    assert!(board.move_piece(1, 1, 2, 1));
    let capturer = board.piece_at_coords(2, 1).unwrap();
    assert_eq!(capturer.owner(), Player::Player2);
    assert_eq!(capturer.position(), sq(2, 1));
    assert_eq!(board.count_pieces(Player::Player1, PieceKind::Soldier), 1);
    assert_eq!(board.symbol_at(2, 1), Some('s'));
}

#[test]
fn self_capture_is_rejected_without_mutation() {
    let mut board = Board::new();
    let before = board.clone();

    // Leader (4,2) onto its own Soldier at (3,1).
    assert!(!board.move_piece(4, 2, 3, 1));
    assert_eq!(board, before);
    assert_eq!(
        board.try_move_piece(4, 2, 3, 1),
        Err(MoveError::OwnPieceAtDestination {
            player: Player::Player1,
            square: sq(3, 1)
        })
    );
    assert_eq!(board, before);
}

#[test]
fn out_of_bounds_moves_are_rejected_without_mutation() {
    let mut board = Board::new();
    let before = board.clone();

    assert!(!board.move_piece(0, 0, 5, 5));
    assert!(!board.move_piece(-1, 2, 0, 2));
    assert!(!board.move_piece(4, 2, 4, 5));
    assert!(matches!(
        board.try_move_piece(0, 2, 0, -1),
        Err(MoveError::OutOfBounds { .. })
    ));
    assert_eq!(board, before);
}

#[test]
fn missing_leader_decides_the_game_regardless_of_status() {
    let mut board = Board::from_pieces([
        Piece::new(PieceKind::Leader, Player::Player2, sq(0, 2)),
        Piece::new(PieceKind::Soldier, Player::Player1, sq(3, 1)),
        Piece::new(PieceKind::Soldier, Player::Player2, sq(1, 1)),
    ])
    .unwrap();

    assert_eq!(board.check_winner(), Some(Player::Player2));
    // Player1 still has moves, so status alone would not end the game.
    assert_eq!(board.check_status(Player::Player2), GameStatus::None);
}

#[test]
fn leader_capture_by_search_ends_a_game() {
    let mut board = Board::from_pieces([
        Piece::new(PieceKind::Leader, Player::Player1, sq(4, 4)),
        Piece::new(PieceKind::Leader, Player::Player2, sq(2, 2)),
        Piece::new(PieceKind::Soldier, Player::Player1, sq(3, 2)),
    ])
    .unwrap();

    let mut ai = AIPlayer::new(5).with_search_depth(3);
    assert_eq!(
        ai.choose_best_move(&mut board, Player::Player1),
        Some(Move::new(3, 2, 2, 2))
    );
    assert!(ai.make_best_move(&mut board, Player::Player1));
    assert_eq!(board.check_winner(), Some(Player::Player1));
}

#[test]
fn seeded_players_repeat_their_choices() {
    let choices = |seed: u64| {
        let mut ai = AIPlayer::new(seed).with_search_depth(2);
        let mut board = Board::new();
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push(ai.choose_best_move(&mut board, Player::Player1));
            seen.push(ai.choose_random_move(&mut board, Player::Player2));
        }
        seen
    };
    assert_eq!(choices(2024), choices(2024));
}

#[test]
fn engines_return_legal_moves_without_touching_the_board() {
    let mut board = Board::new();
    assert!(board.move_piece(3, 3, 2, 3));
    let before = board.clone();

    let mut engines: Vec<Box<dyn Engine>> = vec![
        Box::new(AIPlayer::new(1).with_search_depth(2)),
        Box::new(GreedyEngine::new(1)),
    ];
    for engine in &mut engines {
        let out = engine.choose_move(&mut board, Player::Player2);
        let mv = out.best_move.unwrap();
        assert!(board.is_legal_move(Player::Player2, mv), "{} chose {}", engine.name(), mv);
        assert_eq!(board, before);
    }
}

#[test]
fn snapshot_reconstructs_an_equivalent_board() {
    let mut board = Board::new();
    assert!(board.move_piece(3, 1, 2, 1));
    assert!(board.move_piece(1, 3, 2, 3));

    let json = serde_json::to_string(&board.snapshot()).unwrap();
    let restored: BoardSnapshot = serde_json::from_str(&json).unwrap();
    let mut rebuilt = Board::from_snapshot(&restored).unwrap();

    assert_eq!(rebuilt, board);
    assert_eq!(
        rebuilt.get_all_legal_moves(Player::Player1),
        board.get_all_legal_moves(Player::Player1)
    );
}

#[test]
fn perft_counts_from_the_start() {
    let mut board = Board::new();
    assert_eq!(perft(&mut board, Player::Player1, 1), 5);
    assert_eq!(perft(&mut board, Player::Player1, 2), 25);
    assert_eq!(board, Board::new());
}
