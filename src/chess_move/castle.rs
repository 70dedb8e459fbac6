use common::coordinate::{Coordinate, C1, C8, D1, D8, F1, F8, G1, G8};

use crate::board::{Alliance, Board, BoardError, Piece};

use super::chess_move::successor_board;

/// A castle moves two pieces at once. The intended entry points are
/// `king_side` and `queen_side`, which know where each piece lands.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct CastleChessMove {
    /// The king before castling
    king: Piece,

    /// The square the king lands on
    king_to: Coordinate,

    /// The rook before castling
    rook: Piece,

    /// The square the rook lands on
    rook_to: Coordinate,
}

impl CastleChessMove {
    fn new(king: Piece, king_to: Coordinate, rook: Piece, rook_to: Coordinate) -> Self {
        Self {
            king,
            king_to,
            rook,
            rook_to,
        }
    }

    pub fn king_side(king: Piece, rook: Piece) -> Self {
        match king.alliance() {
            Alliance::White => Self::new(king, G1, rook, F1),
            Alliance::Black => Self::new(king, G8, rook, F8),
        }
    }

    pub fn queen_side(king: Piece, rook: Piece) -> Self {
        match king.alliance() {
            Alliance::White => Self::new(king, C1, rook, D1),
            Alliance::Black => Self::new(king, C8, rook, D8),
        }
    }

    pub fn king(&self) -> &Piece {
        &self.king
    }

    pub fn rook(&self) -> &Piece {
        &self.rook
    }

    pub fn from_square(&self) -> Coordinate {
        self.king.position()
    }

    pub fn to_square(&self) -> Coordinate {
        self.king_to
    }

    pub fn rook_to_square(&self) -> Coordinate {
        self.rook_to
    }

    pub(super) fn execute(&self, board: &Board, landed_king: Piece) -> Result<Board, BoardError> {
        if board.piece_at(self.rook.position()) != Some(&self.rook) {
            return Err(BoardError::PieceNotOnBoard {
                position: self.rook.position(),
            });
        }
        let landed_rook =
            Piece::with_first_move(self.rook.kind(), self.rook.alliance(), self.rook_to, false);
        successor_board(
            board,
            &self.king,
            &[self.king, self.rook],
            &[landed_king, landed_rook],
            None,
        )
    }
}
