//! PvP command - play a game against another human.

use chesscore::game::player_vs_player::player_vs_player;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct PvpArgs {}

impl Command for PvpArgs {
    fn execute(self) {
        player_vs_player();
    }
}
