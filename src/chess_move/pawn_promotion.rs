use common::coordinate::Coordinate;

use crate::board::{Board, BoardError};

use super::chess_move::ChessMove;
use super::standard::StandardChessMove;

/// Wraps the pawn push or pawn capture that reaches the last rank. The board
/// logic is the inner move's, except the pawn is replaced with a queen on
/// arrival.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct PawnPromotionChessMove {
    inner: Box<ChessMove>,
}

impl PawnPromotionChessMove {
    pub fn new(inner: ChessMove) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }

    /// The push or capture being promoted.
    pub fn inner(&self) -> &ChessMove {
        &self.inner
    }

    pub fn to_square(&self) -> Coordinate {
        self.inner.destination()
    }

    pub(super) fn standard(&self) -> Option<&StandardChessMove> {
        match self.inner.as_ref() {
            ChessMove::Pawn(m) | ChessMove::PawnAttack(m) => Some(m),
            _ => None,
        }
    }

    pub(super) fn execute(&self, board: &Board) -> Result<Board, BoardError> {
        match self.standard() {
            Some(standard) => {
                let pawn = standard.piece().move_piece(&self.inner);
                standard.execute(board, pawn.promotion_piece(), None)
            }
            // Only pushes and captures are ever wrapped; anything else executes as is.
            None => self.inner.execute(board),
        }
    }
}
