//! Pseudo-legal move generation.
//!
//! Each piece kind has its own generator; `generate_piece_moves` is the
//! dispatch table keyed by `PieceKind`. Generators see only the tile array and
//! the en-passant pawn, never a whole `Board`, so a board can ask its pieces
//! for their moves while it is still being assembled.
//!
//! Moves are expressed as flat-index offsets. An offset that would carry a
//! piece off the left or right edge and back onto the opposite side of the
//! board is rejected through the column exclusion tables in
//! `common::geometry`, keyed by the square the step starts from.

mod leaping;
mod pawn;
mod sliding;

use common::coordinate::Coordinate;
use common::geometry::{EIGHTH_COLUMN, FIRST_COLUMN};
use smallvec::SmallVec;

use crate::board::{Piece, PieceKind, Tiles};
use crate::chess_move::ChessMove;

/// A list of chess moves that is optimized for small sizes.
pub type ChessMoveList = SmallVec<[ChessMove; 32]>;

pub fn generate_piece_moves(
    moves: &mut ChessMoveList,
    piece: &Piece,
    tiles: &Tiles,
    en_passant_pawn: Option<&Piece>,
) {
    match piece.kind() {
        PieceKind::Pawn => pawn::generate_pawn_moves(moves, piece, tiles, en_passant_pawn),
        PieceKind::Knight => leaping::generate_knight_moves(moves, piece, tiles),
        PieceKind::Bishop => sliding::generate_bishop_moves(moves, piece, tiles),
        PieceKind::Rook => sliding::generate_rook_moves(moves, piece, tiles),
        PieceKind::Queen => sliding::generate_queen_moves(moves, piece, tiles),
        PieceKind::King => leaping::generate_king_moves(moves, piece, tiles),
    }
}

/// Whether a single step along `vector` (one of the eight king directions)
/// from `from` would cross the left or right edge.
fn crosses_side_edge(from: Coordinate, vector: i32) -> bool {
    let i = from.index();
    (FIRST_COLUMN[i] && matches!(vector, -9 | -1 | 7))
        || (EIGHTH_COLUMN[i] && matches!(vector, -7 | 1 | 9))
}
