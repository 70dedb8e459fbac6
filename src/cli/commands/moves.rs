//! Moves command - list the accepted moves of the standard position.

use chesscore::board::Board;
use common::coordinate::Coordinate;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct MovesArgs {
    #[structopt(long, help = "Only list the moves of the piece on this square, e.g. `g1`")]
    pub square: Option<Coordinate>,
}

impl Command for MovesArgs {
    fn execute(self) {
        let board = Board::standard();
        let player = board.current_player();
        let moves = match self.square {
            Some(square) => player.legal_moves_from(square),
            None => player
                .accepted_transitions()
                .map(|transition| transition.chess_move().clone())
                .collect(),
        };

        println!("{:#}", board);
        println!("{} has {} moves:", player, moves.len());
        for chess_move in moves {
            println!(
                "  {:<6} {}{}",
                chess_move.to_string(),
                chess_move.source(),
                chess_move.destination()
            );
        }
    }
}
