use thiserror::Error;

use common::coordinate::Coordinate;

use super::alliance::Alliance;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("a board needs exactly one {alliance} king, found {count}")]
    KingCount { alliance: Alliance, count: usize },
    #[error("the null move cannot be executed")]
    NullMoveExecution,
    #[error("cannot execute move, the board has no such piece on {position}")]
    PieceNotOnBoard { position: Coordinate },
    #[error("invalid board layout: expected 64 squares, got {len}")]
    InvalidLayoutLength { len: usize },
    #[error("invalid board layout: unexpected character {c:?}")]
    InvalidLayoutCharacter { c: char },
}
