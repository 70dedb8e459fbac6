pub mod computer_vs_computer;
#[allow(clippy::module_inception)]
pub mod game;
pub mod player_vs_player;
pub mod position_counter;
pub mod strategy;

pub use game::{Game, GameError};
pub use position_counter::count_positions;
pub use strategy::{MoveStrategy, RandomStrategy};
