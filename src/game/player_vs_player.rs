use crate::input_handler::{self, MoveInput};
use crate::player::GameEnding;

use super::game::Game;

/// Two humans alternate typing moves on stdin until the game ends or one of
/// them quits.
pub fn player_vs_player() {
    let mut game = Game::default();
    loop {
        println!("turn: {}", game.board().mover());
        println!("{:#}", game.board());

        match game.check_game_over_for_current_turn() {
            Some(GameEnding::Checkmate) => {
                println!("checkmate!");
                break;
            }
            Some(GameEnding::Stalemate) => {
                println!("stalemate!");
                break;
            }
            None => (),
        };

        if game.board().current_player().is_in_check() {
            println!("check!");
        }

        let input = match input_handler::parse_player_move_input() {
            Ok(MoveInput::Quit) => break,
            Ok(input) => input,
            Err(error) => {
                println!("{}", error);
                continue;
            }
        };

        match game.apply_move_input(&input) {
            Ok(Some(chess_move)) => println!("played {}", chess_move),
            Ok(None) => break,
            Err(error) => println!("error: {}", error),
        }
    }
}
