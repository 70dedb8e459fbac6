use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::Board;
use crate::chess_move::ChessMove;

/// Picks the next move for the side to move. This is where a search would
/// plug in; the rules core only guarantees that whatever it returns has been
/// accepted by `Player::make_move`.
pub trait MoveStrategy {
    /// `None` when the side to move has no accepted move.
    fn choose_move(&mut self, board: &Board) -> Option<ChessMove>;
}

/// Plays uniformly at random among the accepted moves.
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// The same seed replays the same game.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl MoveStrategy for RandomStrategy {
    fn choose_move(&mut self, board: &Board) -> Option<ChessMove> {
        let candidates: Vec<ChessMove> = board
            .current_player()
            .accepted_transitions()
            .map(|transition| transition.chess_move().clone())
            .collect();
        candidates.choose(&mut self.rng).cloned()
    }
}
