use common::coordinate::{
    Coordinate, A1, A8, B1, B8, C1, C8, D1, D8, E1, E8, F1, F8, G1, G8, H1, H8,
};

use super::is_tile_attacked;
use crate::board::{Alliance, Piece, Tiles};
use crate::chess_move::{CastleChessMove, ChessMove};

struct CastleSquares {
    rook: Coordinate,
    /// Squares between the king and the rook
    empty: &'static [Coordinate],
    /// Squares the king crosses or lands on
    unattacked: &'static [Coordinate],
    build: fn(Piece, Piece) -> ChessMove,
}

fn king_side(king: Piece, rook: Piece) -> ChessMove {
    ChessMove::KingSideCastle(CastleChessMove::king_side(king, rook))
}

fn queen_side(king: Piece, rook: Piece) -> ChessMove {
    ChessMove::QueenSideCastle(CastleChessMove::queen_side(king, rook))
}

static WHITE_CASTLES: [CastleSquares; 2] = [
    CastleSquares {
        rook: H1,
        empty: &[F1, G1],
        unattacked: &[F1, G1],
        build: king_side,
    },
    CastleSquares {
        rook: A1,
        empty: &[B1, C1, D1],
        unattacked: &[C1, D1],
        build: queen_side,
    },
];

static BLACK_CASTLES: [CastleSquares; 2] = [
    CastleSquares {
        rook: H8,
        empty: &[F8, G8],
        unattacked: &[F8, G8],
        build: king_side,
    },
    CastleSquares {
        rook: A8,
        empty: &[B8, C8, D8],
        unattacked: &[C8, D8],
        build: queen_side,
    },
];

/// The castles available to `king`, judged against the opponent's
/// pseudo-legal moves. A castle that fails any condition is simply left out.
pub(crate) fn calculate_king_castles(
    king: &Piece,
    in_check: bool,
    tiles: &Tiles,
    opponent_moves: &[ChessMove],
) -> Vec<ChessMove> {
    let alliance = king.alliance();
    let home = alliance.choose_player(E1, E8);
    if !king.is_first_move() || in_check || king.position() != home {
        return Vec::new();
    }

    let sides = match alliance {
        Alliance::White => &WHITE_CASTLES,
        Alliance::Black => &BLACK_CASTLES,
    };

    sides
        .iter()
        .filter_map(|side| {
            let rook = tiles.piece_at(side.rook)?;
            let rook_ready =
                rook.kind().is_rook() && rook.alliance() == alliance && rook.is_first_move();
            let path_clear = side.empty.iter().all(|&square| !tiles.is_occupied(square));
            let path_safe = side
                .unattacked
                .iter()
                .all(|&square| !is_tile_attacked(square, opponent_moves));
            (rook_ready && path_clear && path_safe).then(|| (side.build)(*king, *rook))
        })
        .collect()
}
