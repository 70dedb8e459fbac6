use common::coordinate::Coordinate;

use crate::board::Board;

use super::chess_move::ChessMove;

/// Resolves coordinate pairs coming from outside the rules core (typed input,
/// a mouse drag) to the move the board actually offers.
pub struct MoveFactory;

impl MoveFactory {
    /// Finds the move of either side going from `from` to `to` on `board`.
    /// No legality gating happens here; a miss yields `ChessMove::Null`,
    /// which callers must check for before executing.
    pub fn create_move(board: &Board, from: Coordinate, to: Coordinate) -> ChessMove {
        board
            .all_legal_moves()
            .find(|chess_move| chess_move.source() == from && chess_move.destination() == to)
            .cloned()
            .unwrap_or_else(|| ChessMove::null(from, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::coordinate::*;

    #[test]
    fn test_create_move_finds_either_side() {
        let board = Board::standard();

        let white = MoveFactory::create_move(&board, E2, E4);
        assert!(matches!(white, ChessMove::PawnJump(_)));
        assert_eq!(E2, white.source());

        let black = MoveFactory::create_move(&board, G8, F6);
        assert!(matches!(black, ChessMove::Major(_)));
        assert_eq!("Nf6", black.to_string());
    }

    #[test]
    fn test_create_move_misses_with_null_move() {
        let board = Board::standard();
        let missing = MoveFactory::create_move(&board, E2, E5);
        assert!(missing.is_null());
        assert_eq!(E2, missing.source());
        assert_eq!(E5, missing.destination());
        assert_eq!(None, missing.moved_piece());

        assert!(MoveFactory::create_move(&board, E4, E5).is_null());
    }
}
