//! Watch command - watch the random player play against itself.

use chesscore::game::computer_vs_computer::computer_vs_computer;
use chesscore::game::RandomStrategy;
use log::info;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(
        long = "max-plies",
        default_value = "200",
        help = "Stop after this many moves; 0 for no limit"
    )]
    pub max_plies: usize,
    #[structopt(long, help = "Seed for the random player; a fresh game each run when omitted")]
    pub seed: Option<u64>,
}

impl Command for WatchArgs {
    fn execute(self) {
        let mut strategy = match self.seed {
            Some(seed) => {
                info!("watching a game with seed {}", seed);
                RandomStrategy::new(seed)
            }
            None => RandomStrategy::default(),
        };
        computer_vs_computer(&mut strategy, self.max_plies);
    }
}
