use common::coordinate::Coordinate;
use thiserror::Error;

use crate::board::Board;
use crate::chess_move::{ChessMove, MoveFactory};
use crate::input_handler::MoveInput;
use crate::player::{GameEnding, MoveStatus, MoveTransition};

use super::strategy::MoveStrategy;

/// A game in progress: the current board plus the moves that led to it.
pub struct Game {
    board: Board,
    move_history: Vec<ChessMove>,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("no move from {from} to {to}")]
    NoSuchMove { from: Coordinate, to: Coordinate },
    #[error("no move matches {notation:?}")]
    UnknownNotation { notation: String },
    #[error("{notation:?} matches more than one move")]
    AmbiguousNotation { notation: String },
    #[error("{chess_move} rejected: {status}")]
    Rejected { chess_move: String, status: MoveStatus },
}

impl Default for Game {
    fn default() -> Self {
        Self::from_board(Board::standard())
    }
}

impl Game {
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            move_history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn move_history(&self) -> &[ChessMove] {
        &self.move_history
    }

    pub fn most_recent_move(&self) -> Option<&ChessMove> {
        self.move_history.last()
    }

    pub fn check_game_over_for_current_turn(&self) -> Option<GameEnding> {
        self.board.current_player().game_ending()
    }

    /// Plays `chess_move` for the side to move and records it.
    pub fn apply_chess_move(&mut self, chess_move: &ChessMove) -> Result<(), GameError> {
        let transition = self.board.current_player().make_move(chess_move);
        if transition.status() != MoveStatus::Done {
            return Err(GameError::Rejected {
                chess_move: chess_move.to_string(),
                status: transition.status(),
            });
        }
        self.board = transition.into_board();
        self.move_history.push(chess_move.clone());
        Ok(())
    }

    pub fn apply_chess_move_by_from_to_coordinates(
        &mut self,
        from: Coordinate,
        to: Coordinate,
    ) -> Result<ChessMove, GameError> {
        let chess_move = MoveFactory::create_move(&self.board, from, to);
        if chess_move.is_null() {
            return Err(GameError::NoSuchMove { from, to });
        }
        self.apply_chess_move(&chess_move)?;
        Ok(chess_move)
    }

    /// Plays the accepted move whose printed notation is `notation`.
    pub fn apply_chess_move_from_notation(
        &mut self,
        notation: &str,
    ) -> Result<ChessMove, GameError> {
        let mut matches: Vec<MoveTransition> = self
            .board
            .current_player()
            .accepted_transitions()
            .filter(|transition| transition.chess_move().to_string() == notation)
            .collect();

        if matches.len() > 1 {
            return Err(GameError::AmbiguousNotation {
                notation: notation.to_string(),
            });
        }
        let transition = matches.pop().ok_or_else(|| GameError::UnknownNotation {
            notation: notation.to_string(),
        })?;

        let chess_move = transition.chess_move().clone();
        self.board = transition.into_board();
        self.move_history.push(chess_move.clone());
        Ok(chess_move)
    }

    /// Applies a parsed input line. `Quit` is left to the caller.
    pub fn apply_move_input(
        &mut self,
        input: &MoveInput,
    ) -> Result<Option<ChessMove>, GameError> {
        match input {
            MoveInput::Coordinate { from, to } => self
                .apply_chess_move_by_from_to_coordinates(*from, *to)
                .map(Some),
            MoveInput::Algebraic { notation } => {
                self.apply_chess_move_from_notation(notation).map(Some)
            }
            MoveInput::Quit => Ok(None),
        }
    }

    /// Lets `strategy` pick and play a move. `None` once the side to move has
    /// no accepted move.
    pub fn make_strategy_move(
        &mut self,
        strategy: &mut dyn MoveStrategy,
    ) -> Result<Option<ChessMove>, GameError> {
        match strategy.choose_move(&self.board) {
            Some(chess_move) => {
                self.apply_chess_move(&chess_move)?;
                Ok(Some(chess_move))
            }
            None => Ok(None),
        }
    }
}
