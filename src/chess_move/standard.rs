use common::coordinate::Coordinate;

use crate::board::{Board, BoardError, Piece};

use super::chess_move::successor_board;

/// Payload shared by every single-piece move: quiet moves, captures, pawn
/// pushes, pawn jumps and en passant captures. The enclosing `ChessMove`
/// variant says which of those it is.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct StandardChessMove {
    /// The piece as it stood before moving
    piece: Piece,

    /// The square the piece is moving to
    to_square: Coordinate,

    /// The piece being taken, which for en passant is not on `to_square`
    capture: Option<Piece>,
}

impl StandardChessMove {
    pub fn new(piece: Piece, to_square: Coordinate, capture: Option<Piece>) -> Self {
        Self {
            piece,
            to_square,
            capture,
        }
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    pub fn from_square(&self) -> Coordinate {
        self.piece.position()
    }

    pub fn to_square(&self) -> Coordinate {
        self.to_square
    }

    pub fn capture(&self) -> Option<&Piece> {
        self.capture.as_ref()
    }

    /// Moves `landed` (the post-move value of the piece) onto the board,
    /// taking the captured piece off. `en_passant_pawn` becomes the new
    /// board's en-passant pawn.
    pub(super) fn execute(
        &self,
        board: &Board,
        landed: Piece,
        en_passant_pawn: Option<Piece>,
    ) -> Result<Board, BoardError> {
        let mut removed = vec![self.piece];
        removed.extend(self.capture);
        successor_board(board, &self.piece, &removed, &[landed], en_passant_pawn)
    }
}
