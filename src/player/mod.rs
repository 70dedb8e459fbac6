//! The side-to-move view of a board: legal move sets, check, castling, the
//! checkmate/stalemate probes and `make_move`.

mod castle;
pub mod move_transition;


use std::fmt;

use common::coordinate::Coordinate;
use log::debug;

use crate::board::{Alliance, Board, Piece};
use crate::chess_move::ChessMove;

pub(crate) use castle::calculate_king_castles;
pub use move_transition::{MoveStatus, MoveTransition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnding {
    Checkmate,
    Stalemate,
}

/// What a board computes once per side at construction time.
pub(crate) struct PlayerState {
    king: Piece,
    legal_moves: Vec<ChessMove>,
    in_check: bool,
}

impl PlayerState {
    pub(crate) fn new(
        king: Piece,
        mut moves: Vec<ChessMove>,
        castles: Vec<ChessMove>,
        in_check: bool,
    ) -> Self {
        moves.extend(castles);
        Self {
            king,
            legal_moves: moves,
            in_check,
        }
    }

    pub(crate) fn king(&self) -> &Piece {
        &self.king
    }

    pub(crate) fn legal_moves(&self) -> &[ChessMove] {
        &self.legal_moves
    }

    pub(crate) fn in_check(&self) -> bool {
        self.in_check
    }
}

/// True when any of `moves` lands on `coordinate`.
pub(crate) fn is_tile_attacked(coordinate: Coordinate, moves: &[ChessMove]) -> bool {
    moves.iter().any(|chess_move| chess_move.destination() == coordinate)
}

/// One side of a board. A `Player` borrows its board, so it is only ever a
/// view: the opponent is found by looking up the other alliance on the same
/// board.
#[derive(Clone, Copy)]
pub struct Player<'a> {
    board: &'a Board,
    alliance: Alliance,
}

impl<'a> Player<'a> {
    pub fn new(board: &'a Board, alliance: Alliance) -> Self {
        Self { board, alliance }
    }

    pub fn alliance(&self) -> Alliance {
        self.alliance
    }

    pub fn board(&self) -> &'a Board {
        self.board
    }

    fn state(&self) -> &'a PlayerState {
        self.board.player_state(self.alliance)
    }

    pub fn king(&self) -> &'a Piece {
        self.state().king()
    }

    pub fn active_pieces(&self) -> &'a [Piece] {
        self.board.active_pieces(self.alliance)
    }

    /// Every pseudo-legal move of this side plus its legal castles. Whether
    /// a move exposes the king is only decided by `make_move`.
    pub fn legal_moves(&self) -> &'a [ChessMove] {
        self.state().legal_moves()
    }

    pub fn opponent(&self) -> Player<'a> {
        Player::new(self.board, self.alliance.opposite())
    }

    pub fn is_move_legal(&self, chess_move: &ChessMove) -> bool {
        self.legal_moves().contains(chess_move)
    }

    pub fn is_in_check(&self) -> bool {
        self.state().in_check()
    }

    pub fn is_in_checkmate(&self) -> bool {
        let checkmate = self.is_in_check() && !self.has_escape_moves();
        if checkmate {
            debug!("{} is checkmated", self.alliance);
        }
        checkmate
    }

    pub fn is_in_stalemate(&self) -> bool {
        let stalemate = !self.is_in_check() && !self.has_escape_moves();
        if stalemate {
            debug!("{} is stalemated", self.alliance);
        }
        stalemate
    }

    /// `Some` once this side has no move that `make_move` accepts.
    pub fn game_ending(&self) -> Option<GameEnding> {
        if self.has_escape_moves() {
            return None;
        }
        if self.is_in_check() {
            Some(GameEnding::Checkmate)
        } else {
            Some(GameEnding::Stalemate)
        }
    }

    fn has_escape_moves(&self) -> bool {
        self.legal_moves()
            .iter()
            .any(|chess_move| self.make_move(chess_move).is_done())
    }

    /// Every transition `make_move` accepts, in legal move order.
    pub fn accepted_transitions(&self) -> impl Iterator<Item = MoveTransition> + 'a {
        let player = *self;
        self.legal_moves()
            .iter()
            .map(move |chess_move| player.make_move(chess_move))
            .filter(MoveTransition::is_done)
    }

    /// The moves of the piece on `coordinate` that `make_move` accepts.
    pub fn legal_moves_from(&self, coordinate: Coordinate) -> Vec<ChessMove> {
        let player = *self;
        self.legal_moves()
            .iter()
            .filter(|chess_move| chess_move.source() == coordinate)
            .filter(|chess_move| player.make_move(chess_move).is_done())
            .cloned()
            .collect()
    }

    /// Plays `chess_move` for this side. The move must be one of this side's
    /// legal moves and must not leave this side's king attacked; otherwise the
    /// transition carries the unchanged board and the reason it was rejected.
    pub fn make_move(&self, chess_move: &ChessMove) -> MoveTransition {
        if !self.is_move_legal(chess_move) {
            debug!("{} rejected {}: not a legal move", self.alliance, chess_move);
            return self.reject(chess_move, MoveStatus::IllegalMove);
        }

        if chess_move.attacked_piece().map_or(false, |piece| piece.kind().is_king()) {
            debug!("{} rejected {}: captures a king", self.alliance, chess_move);
            return self.reject(chess_move, MoveStatus::IllegalMove);
        }

        let candidate = match chess_move.execute(self.board) {
            Ok(candidate) => candidate,
            Err(error) => {
                debug!("{} rejected {}: {}", self.alliance, chess_move, error);
                return self.reject(chess_move, MoveStatus::IllegalMove);
            }
        };

        let king = candidate.player_state(self.alliance).king().position();
        let replies = candidate.player_state(self.alliance.opposite()).legal_moves();
        if is_tile_attacked(king, replies) {
            debug!("{} rejected {}: leaves the king in check", self.alliance, chess_move);
            return self.reject(chess_move, MoveStatus::LeavesPlayerInCheck);
        }

        MoveTransition::new(candidate, chess_move.clone(), MoveStatus::Done)
    }

    fn reject(&self, chess_move: &ChessMove, status: MoveStatus) -> MoveTransition {
        MoveTransition::new(self.board.clone(), chess_move.clone(), status)
    }
}

impl fmt::Display for Player<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.alliance)
    }
}

impl fmt::Debug for Player<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("alliance", &self.alliance)
            .field("in_check", &self.is_in_check())
            .field("legal_moves", &self.legal_moves().len())
            .finish()
    }
}
