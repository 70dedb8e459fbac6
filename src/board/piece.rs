use std::fmt;

use common::coordinate::Coordinate;

use super::alliance::Alliance;
use super::Board;
use crate::chess_move::ChessMove;
use crate::move_generation::{generate_piece_moves, ChessMoveList};

#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Material value in centipawns, consumed by evaluators.
    pub fn value(&self) -> u32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 300,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 10000,
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    pub fn is_king(&self) -> bool {
        *self == PieceKind::King
    }

    pub fn is_rook(&self) -> bool {
        *self == PieceKind::Rook
    }

    pub fn is_pawn(&self) -> bool {
        *self == PieceKind::Pawn
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A piece as it stands on one particular board. Pieces are plain values:
/// the same piece on a later board is a different value with an updated
/// position and `first_move` flag.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    alliance: Alliance,
    position: Coordinate,
    first_move: bool,
}

impl Piece {
    /// A piece that has not moved yet.
    pub fn new(kind: PieceKind, alliance: Alliance, position: Coordinate) -> Self {
        Self {
            kind,
            alliance,
            position,
            first_move: true,
        }
    }

    pub fn with_first_move(
        kind: PieceKind,
        alliance: Alliance,
        position: Coordinate,
        first_move: bool,
    ) -> Self {
        Self {
            kind,
            alliance,
            position,
            first_move,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn alliance(&self) -> Alliance {
        self.alliance
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    pub fn is_first_move(&self) -> bool {
        self.first_move
    }

    pub fn value(&self) -> u32 {
        self.kind.value()
    }

    /// Upper case for white, lower case for black.
    pub fn to_fen(&self) -> char {
        match self.alliance {
            Alliance::White => self.kind.to_char(),
            Alliance::Black => self.kind.to_char().to_ascii_lowercase(),
        }
    }

    pub fn from_fen(c: char, position: Coordinate) -> Option<Piece> {
        let kind = PieceKind::from_char(c)?;
        let alliance = if c.is_ascii_uppercase() {
            Alliance::White
        } else {
            Alliance::Black
        };
        Some(Piece::new(kind, alliance, position))
    }

    /// Pseudo-legal moves of this piece on `board`.
    pub fn calculate_moves(&self, board: &Board) -> ChessMoveList {
        let mut moves = ChessMoveList::new();
        generate_piece_moves(&mut moves, self, board.tiles(), board.en_passant_pawn());
        moves
    }

    /// The value this piece becomes once `chess_move` lands it on its
    /// destination.
    pub fn move_piece(&self, chess_move: &ChessMove) -> Piece {
        Piece::with_first_move(self.kind, self.alliance, chess_move.destination(), false)
    }

    /// What a pawn turns into on the last rank. Always a queen.
    pub fn promotion_piece(&self) -> Piece {
        Piece::with_first_move(PieceKind::Queen, self.alliance, self.position, false)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}
