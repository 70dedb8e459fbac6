use std::thread;

use super::*;
use crate::chess_position;
use common::coordinate::*;

#[test]
fn test_standard_position_layout() {
    let board = Board::standard();

    assert_eq!(Alliance::White, board.mover());
    assert_eq!(None, board.en_passant_pawn());
    assert_eq!(16, board.white_pieces().len());
    assert_eq!(16, board.black_pieces().len());

    assert_eq!(Some(PieceKind::Queen), board.piece_at(D1).map(|p| p.kind()));
    assert_eq!(Some(PieceKind::King), board.piece_at(E8).map(|p| p.kind()));
    assert_eq!(Some(Alliance::Black), board.piece_at(A7).map(|p| p.alliance()));
    for coordinate in Coordinate::all().skip(16).take(32) {
        assert!(!board.tile(coordinate).is_occupied(), "{:?}", coordinate);
    }
    assert!(board.all_pieces().all(|piece| piece.is_first_move()));
}

#[test]
fn test_active_pieces_match_occupied_tiles() {
    let board = Board::standard();
    let occupied = board.tiles().iter().filter(|tile| tile.is_occupied()).count();
    assert_eq!(occupied, board.all_pieces().count());

    for piece in board.all_pieces() {
        assert_eq!(Some(piece), board.piece_at(piece.position()));
        assert_eq!(piece.position(), board.tile(piece.position()).coordinate());
    }
    assert!(board.active_pieces(Alliance::White).iter().all(|p| p.alliance().is_white()));
}

#[test]
fn test_all_legal_moves_concatenates_both_sides() {
    let board = Board::standard();
    let moves: Vec<_> = board.all_legal_moves().collect();
    assert_eq!(40, moves.len());
    assert!(moves[..20].iter().all(|m| m.moved_piece().map_or(false, |p| p.alliance().is_white())));
    assert!(moves[20..].iter().all(|m| m.moved_piece().map_or(false, |p| p.alliance().is_black())));
}

#[test]
fn test_king_count_is_enforced() {
    let white_king = Piece::new(PieceKind::King, Alliance::White, E1);
    let black_king = Piece::new(PieceKind::King, Alliance::Black, E8);
    let second_black_king = Piece::new(PieceKind::King, Alliance::Black, A8);

    assert!(Board::new([white_king, black_king], Alliance::White, None).is_ok());
    assert_eq!(
        Err(BoardError::KingCount {
            alliance: Alliance::Black,
            count: 0
        }),
        Board::new([white_king], Alliance::White, None)
    );
    assert_eq!(
        Err(BoardError::KingCount {
            alliance: Alliance::Black,
            count: 2
        }),
        Board::new([white_king, black_king, second_black_king], Alliance::White, None)
    );
}

#[test]
fn test_later_piece_replaces_earlier_on_same_square() {
    let pieces = [
        Piece::new(PieceKind::King, Alliance::White, E1),
        Piece::new(PieceKind::King, Alliance::Black, E8),
        Piece::new(PieceKind::Rook, Alliance::White, D4),
        Piece::new(PieceKind::Knight, Alliance::Black, D4),
    ];
    let board = Board::new(pieces, Alliance::White, None).unwrap();
    assert_eq!(Some(PieceKind::Knight), board.piece_at(D4).map(|p| p.kind()));
    assert_eq!(3, board.all_pieces().count());
}

#[test]
fn test_equality_is_by_value() {
    let board = Board::standard();
    assert_eq!(board, board.clone());
    assert_eq!(board, Board::standard());

    let black_to_move = Board::new(board.all_pieces().copied(), Alliance::Black, None).unwrap();
    assert_ne!(board, black_to_move);

    let rearranged = chess_position! {
        rnbqkbnr
        pppppppp
        ........
        ........
        ....P...
        ........
        PPPP.PPP
        RNBQKBNR
    };
    assert_ne!(board, rearranged);
}

#[test]
fn test_piece_moves_of_empty_square() {
    let board = Board::standard();
    assert!(board.piece_moves(E4).is_empty());
    assert_eq!(2, board.piece_moves(B1).len());
    assert_eq!(2, board.piece_moves(G8).len());
}

#[test]
fn test_board_is_shared_across_threads() {
    let board = Board::standard();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let board = board.clone();
            thread::spawn(move || board.current_player().legal_moves().len())
        })
        .collect();
    for handle in handles {
        assert_eq!(20, handle.join().unwrap());
    }
}
