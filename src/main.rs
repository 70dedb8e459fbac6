mod cli;

use structopt::StructOpt;

use cli::{Chess, Command};

fn main() {
    env_logger::init();
    Chess::from_args().execute();
}
