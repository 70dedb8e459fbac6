use super::{crosses_side_edge, ChessMoveList};
use crate::board::{Piece, Tiles};
use crate::chess_move::{ChessMove, StandardChessMove};

const BISHOP_VECTORS: [i32; 4] = [-9, -7, 7, 9];
const ROOK_VECTORS: [i32; 4] = [-8, -1, 1, 8];
const QUEEN_VECTORS: [i32; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

pub fn generate_bishop_moves(moves: &mut ChessMoveList, bishop: &Piece, tiles: &Tiles) {
    slide(moves, bishop, tiles, &BISHOP_VECTORS);
}

pub fn generate_rook_moves(moves: &mut ChessMoveList, rook: &Piece, tiles: &Tiles) {
    slide(moves, rook, tiles, &ROOK_VECTORS);
}

pub fn generate_queen_moves(moves: &mut ChessMoveList, queen: &Piece, tiles: &Tiles) {
    slide(moves, queen, tiles, &QUEEN_VECTORS);
}

fn slide(moves: &mut ChessMoveList, piece: &Piece, tiles: &Tiles, vectors: &[i32]) {
    for &vector in vectors {
        let mut current = piece.position();
        loop {
            if crosses_side_edge(current, vector) {
                break;
            }
            let to = match current.offset(vector) {
                Some(to) => to,
                None => break,
            };
            match tiles.piece_at(to) {
                None => moves.push(ChessMove::Major(StandardChessMove::new(*piece, to, None))),
                Some(occupant) => {
                    if occupant.alliance() != piece.alliance() {
                        moves.push(ChessMove::MajorAttack(StandardChessMove::new(
                            *piece,
                            to,
                            Some(*occupant),
                        )));
                    }
                    break;
                }
            }
            current = to;
        }
    }
}
