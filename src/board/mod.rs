pub mod alliance;
pub mod error;
pub mod piece;
pub mod tile;

mod display;

#[cfg(test)]
mod tests;

use std::fmt;
use std::sync::Arc;

use common::coordinate::Coordinate;
use common::geometry::NUM_TILES;
use log::trace;

use crate::chess_move::ChessMove;
use crate::move_generation::ChessMoveList;
use crate::player::{calculate_king_castles, is_tile_attacked, Player, PlayerState};

pub use alliance::Alliance;
pub use error::BoardError;
pub use piece::{Piece, PieceKind};
pub use tile::{Tile, Tiles};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An immutable chess position. Every move produces a new `Board`; nothing
/// reachable from a board is ever written after construction, so a board can
/// be cloned cheaply and read from any number of threads.
///
/// Construction derives everything else from the placement: the tiles, the
/// active pieces of each side, each side's pseudo-legal moves, castles and
/// check status.
#[derive(Clone)]
pub struct Board {
    state: Arc<BoardState>,
}

struct BoardState {
    tiles: Tiles,
    white_pieces: Vec<Piece>,
    black_pieces: Vec<Piece>,
    white_player: PlayerState,
    black_player: PlayerState,
    mover: Alliance,
    en_passant_pawn: Option<Piece>,
}

impl Board {
    /// Assembles a board from a full piece placement. A piece placed on an
    /// already used coordinate replaces the earlier one.
    pub fn new<I>(
        pieces: I,
        mover: Alliance,
        en_passant_pawn: Option<Piece>,
    ) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = Piece>,
    {
        let mut placement = [None; NUM_TILES];
        for piece in pieces {
            placement[piece.position().index()] = Some(piece);
        }

        let tiles = Tiles::from_placement(&placement);
        let white_pieces = calculate_active_pieces(&tiles, Alliance::White);
        let black_pieces = calculate_active_pieces(&tiles, Alliance::Black);
        let white_king = establish_king(&white_pieces, Alliance::White)?;
        let black_king = establish_king(&black_pieces, Alliance::Black)?;

        let white_moves = calculate_moves(&white_pieces, &tiles, en_passant_pawn.as_ref());
        let black_moves = calculate_moves(&black_pieces, &tiles, en_passant_pawn.as_ref());

        let white_in_check = is_tile_attacked(white_king.position(), &black_moves);
        let black_in_check = is_tile_attacked(black_king.position(), &white_moves);
        let white_castles =
            calculate_king_castles(&white_king, white_in_check, &tiles, &black_moves);
        let black_castles =
            calculate_king_castles(&black_king, black_in_check, &tiles, &white_moves);

        trace!(
            "built board: {} to move, {} white moves, {} black moves",
            mover,
            white_moves.len() + white_castles.len(),
            black_moves.len() + black_castles.len()
        );

        let white_player = PlayerState::new(white_king, white_moves, white_castles, white_in_check);
        let black_player = PlayerState::new(black_king, black_moves, black_castles, black_in_check);

        Ok(Self {
            state: Arc::new(BoardState {
                tiles,
                white_pieces,
                black_pieces,
                white_player,
                black_player,
                mover,
                en_passant_pawn,
            }),
        })
    }

    /// The standard starting position, white to move.
    pub fn standard() -> Self {
        let mut pieces = Vec::with_capacity(32);
        for (file, kind) in BACK_RANK.iter().enumerate() {
            let file = file as u8;
            pieces.push(Piece::new(*kind, Alliance::Black, Coordinate::new(file)));
            pieces.push(Piece::new(PieceKind::Pawn, Alliance::Black, Coordinate::new(8 + file)));
            pieces.push(Piece::new(PieceKind::Pawn, Alliance::White, Coordinate::new(48 + file)));
            pieces.push(Piece::new(*kind, Alliance::White, Coordinate::new(56 + file)));
        }
        Self::new(pieces, Alliance::White, None)
            .expect("the standard position has one king per side")
    }

    pub fn tile(&self, coordinate: Coordinate) -> &Tile {
        self.state.tiles.get(coordinate)
    }

    pub fn tiles(&self) -> &Tiles {
        &self.state.tiles
    }

    pub fn piece_at(&self, coordinate: Coordinate) -> Option<&Piece> {
        self.state.tiles.piece_at(coordinate)
    }

    pub fn white_pieces(&self) -> &[Piece] {
        &self.state.white_pieces
    }

    pub fn black_pieces(&self) -> &[Piece] {
        &self.state.black_pieces
    }

    pub fn active_pieces(&self, alliance: Alliance) -> &[Piece] {
        alliance.choose_player(self.white_pieces(), self.black_pieces())
    }

    /// Both sides' pieces, white first.
    pub fn all_pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.white_pieces().iter().chain(self.black_pieces().iter())
    }

    /// The side whose turn it is.
    pub fn mover(&self) -> Alliance {
        self.state.mover
    }

    /// The pawn that just made a double step, if the previous ply was one.
    pub fn en_passant_pawn(&self) -> Option<&Piece> {
        self.state.en_passant_pawn.as_ref()
    }

    pub fn white_player(&self) -> Player<'_> {
        Player::new(self, Alliance::White)
    }

    pub fn black_player(&self) -> Player<'_> {
        Player::new(self, Alliance::Black)
    }

    pub fn player(&self, alliance: Alliance) -> Player<'_> {
        Player::new(self, alliance)
    }

    pub fn current_player(&self) -> Player<'_> {
        self.state
            .mover
            .choose_player(self.white_player(), self.black_player())
    }

    pub(crate) fn player_state(&self, alliance: Alliance) -> &PlayerState {
        alliance.choose_player(&self.state.white_player, &self.state.black_player)
    }

    /// White's legal moves followed by black's.
    pub fn all_legal_moves(&self) -> impl Iterator<Item = &ChessMove> + '_ {
        self.state
            .white_player
            .legal_moves()
            .iter()
            .chain(self.state.black_player.legal_moves().iter())
    }

    /// Pseudo-legal moves of whatever piece stands on `coordinate`.
    pub fn piece_moves(&self, coordinate: Coordinate) -> ChessMoveList {
        match self.piece_at(coordinate) {
            Some(piece) => piece.calculate_moves(self),
            None => ChessMoveList::new(),
        }
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
            || (self.state.mover == other.state.mover
                && self.state.en_passant_pawn == other.state.en_passant_pawn
                && self.state.tiles == other.state.tiles)
    }
}

impl Eq for Board {}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({} to move)\n{}", self.mover(), self)
    }
}

fn calculate_active_pieces(tiles: &Tiles, alliance: Alliance) -> Vec<Piece> {
    tiles
        .iter()
        .filter_map(Tile::piece)
        .filter(|piece| piece.alliance() == alliance)
        .copied()
        .collect()
}

fn establish_king(pieces: &[Piece], alliance: Alliance) -> Result<Piece, BoardError> {
    let mut kings = pieces.iter().filter(|piece| piece.kind().is_king());
    match (kings.next(), kings.count()) {
        (Some(king), 0) => Ok(*king),
        (None, _) => Err(BoardError::KingCount { alliance, count: 0 }),
        (Some(_), extra) => Err(BoardError::KingCount {
            alliance,
            count: extra + 1,
        }),
    }
}

fn calculate_moves(
    pieces: &[Piece],
    tiles: &Tiles,
    en_passant_pawn: Option<&Piece>,
) -> Vec<ChessMove> {
    let mut moves = ChessMoveList::new();
    for piece in pieces {
        crate::move_generation::generate_piece_moves(&mut moves, piece, tiles, en_passant_pawn);
    }
    moves.into_vec()
}
