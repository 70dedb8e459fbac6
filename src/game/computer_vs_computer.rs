use log::info;

use crate::player::GameEnding;

use super::game::Game;
use super::strategy::MoveStrategy;

/// Lets `strategy` play both sides from the standard position, printing each
/// move, until the game ends or `max_plies` moves have been made (0 for no
/// limit). Returns the finished game.
pub fn computer_vs_computer(strategy: &mut dyn MoveStrategy, max_plies: usize) -> Game {
    let mut game = Game::default();

    loop {
        match game.check_game_over_for_current_turn() {
            Some(GameEnding::Checkmate) => {
                println!("checkmate! {} wins", game.board().mover().opposite());
                break;
            }
            Some(GameEnding::Stalemate) => {
                println!("stalemate!");
                break;
            }
            None => (),
        };

        if max_plies > 0 && game.move_history().len() >= max_plies {
            println!("stopping after {} plies", max_plies);
            break;
        }

        let mover = game.board().mover();
        match game.make_strategy_move(strategy) {
            Ok(Some(chess_move)) => {
                println!("{:>4}. {:<5} {}", game.move_history().len(), mover, chess_move);
            }
            Ok(None) => break,
            Err(error) => {
                println!("error: {}", error);
                break;
            }
        }
    }

    info!("game finished after {} plies", game.move_history().len());
    println!("{:#}", game.board());
    game
}
