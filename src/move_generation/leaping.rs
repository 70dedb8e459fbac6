use common::coordinate::Coordinate;
use common::geometry::{EIGHTH_COLUMN, FIRST_COLUMN, SECOND_COLUMN, SEVENTH_COLUMN};

use super::{crosses_side_edge, ChessMoveList};
use crate::board::{Piece, Tiles};
use crate::chess_move::{ChessMove, StandardChessMove};

const KNIGHT_OFFSETS: [i32; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];
const KING_OFFSETS: [i32; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

pub fn generate_knight_moves(moves: &mut ChessMoveList, knight: &Piece, tiles: &Tiles) {
    let from = knight.position();
    for offset in KNIGHT_OFFSETS {
        if knight_exclusion(from, offset) {
            continue;
        }
        if let Some(to) = from.offset(offset) {
            push_leap(moves, knight, to, tiles, ChessMove::Major, ChessMove::MajorAttack);
        }
    }
}

pub fn generate_king_moves(moves: &mut ChessMoveList, king: &Piece, tiles: &Tiles) {
    let from = king.position();
    for offset in KING_OFFSETS {
        if crosses_side_edge(from, offset) {
            continue;
        }
        if let Some(to) = from.offset(offset) {
            push_leap(moves, king, to, tiles, ChessMove::Major, ChessMove::Attack);
        }
    }
}

fn push_leap(
    moves: &mut ChessMoveList,
    piece: &Piece,
    to: Coordinate,
    tiles: &Tiles,
    quiet: fn(StandardChessMove) -> ChessMove,
    attack: fn(StandardChessMove) -> ChessMove,
) {
    match tiles.piece_at(to) {
        None => moves.push(quiet(StandardChessMove::new(*piece, to, None))),
        Some(occupant) if occupant.alliance() != piece.alliance() => {
            moves.push(attack(StandardChessMove::new(*piece, to, Some(*occupant))))
        }
        Some(_) => {}
    }
}

fn knight_exclusion(from: Coordinate, offset: i32) -> bool {
    let i = from.index();
    (FIRST_COLUMN[i] && matches!(offset, -17 | -10 | 6 | 15))
        || (SECOND_COLUMN[i] && matches!(offset, -10 | 6))
        || (SEVENTH_COLUMN[i] && matches!(offset, -6 | 10))
        || (EIGHTH_COLUMN[i] && matches!(offset, -15 | -6 | 10 | 17))
}
