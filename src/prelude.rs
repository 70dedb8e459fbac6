//! Common types re-exported for convenience.

pub use crate::board::{Alliance, Board, BoardError, Piece, PieceKind, Tile};
pub use crate::chess_move::{
    CastleChessMove, ChessMove, MoveFactory, PawnPromotionChessMove, StandardChessMove,
};
pub use crate::player::{GameEnding, MoveStatus, MoveTransition, Player};
pub use common::coordinate::Coordinate;
