use std::fmt;

use crate::board::Board;
use crate::chess_move::ChessMove;

/// Outcome of `Player::make_move`. Rejection is a status, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStatus {
    Done,
    /// The move is not in the player's legal set
    IllegalMove,
    /// The move would leave the mover's own king attacked
    LeavesPlayerInCheck,
}

impl MoveStatus {
    pub fn is_done(&self) -> bool {
        *self == MoveStatus::Done
    }
}

impl fmt::Display for MoveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            MoveStatus::Done => "done",
            MoveStatus::IllegalMove => "illegal move",
            MoveStatus::LeavesPlayerInCheck => "leaves player in check",
        };
        write!(f, "{}", msg)
    }
}

/// The board after a move attempt (the original board if the attempt was
/// rejected), the move, and the status.
#[derive(Debug, Clone)]
pub struct MoveTransition {
    board: Board,
    chess_move: ChessMove,
    status: MoveStatus,
}

impl MoveTransition {
    pub fn new(board: Board, chess_move: ChessMove, status: MoveStatus) -> Self {
        Self {
            board,
            chess_move,
            status,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    pub fn chess_move(&self) -> &ChessMove {
        &self.chess_move
    }

    pub fn status(&self) -> MoveStatus {
        self.status
    }

    pub fn is_done(&self) -> bool {
        self.status.is_done()
    }
}
