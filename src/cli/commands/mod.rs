//! CLI command implementations.

pub trait Command {
    fn execute(self);
}

pub mod count_positions;
pub mod moves;
pub mod pvp;
pub mod watch;
