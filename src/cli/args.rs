//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    count_positions::CountPositionsArgs, moves::MovesArgs, pvp::PvpArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "chess",
    about = "A rules-correct chess position engine implemented in Rust ♛"
)]
pub enum Chess {
    #[structopt(
        name = "pvp",
        about = "Play a game against another human on this local machine. Enter moves as coordinates (`e2e4` or `e2 e4`) or in the notation the engine prints (`Nf3`, `exd5`, `O-O`); `quit` ends the game."
    )]
    Pvp(PvpArgs),
    #[structopt(
        name = "watch",
        about = "Watch a random player play against itself from the standard position. Stops at checkmate, stalemate or after `--max-plies` moves (default: 200). Pass `--seed` to replay a game."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "count-positions",
        about = "Count the number of reachable positions for every depth up to `--depth` (default: 4) from the standard position, and report the time it took to do so."
    )]
    CountPositions(CountPositionsArgs),
    #[structopt(
        name = "moves",
        about = "List the moves white may play from the standard position, optionally only those of the piece on `--square`."
    )]
    Moves(MovesArgs),
}

impl crate::cli::commands::Command for Chess {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Pvp(cmd),
            Watch(cmd),
            CountPositions(cmd),
            Moves(cmd),
        }
    }
}
