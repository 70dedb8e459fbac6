//! Count positions command - count reachable positions at each depth.

use std::time::{Duration, Instant};

use chesscore::board::Board;
use chesscore::game::count_positions;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct CountPositionsArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
}

impl Command for CountPositionsArgs {
    fn execute(self) {
        let board = Board::standard();

        let mut total_positions = 0;
        let mut total_duration = Duration::from_secs(0);

        for depth in 1..=self.depth {
            let starting_time = Instant::now();
            let count = count_positions(&board, depth);
            let duration = starting_time.elapsed();
            let positions_per_second = count as f64 / duration.as_secs_f64();

            total_positions += count;
            total_duration += duration;

            println!(
                "depth: {}, positions: {}, positions per second: {}",
                depth, count, positions_per_second
            );
        }

        println!(
            "total positions: {}, total duration: {:?}, positions per second: {}",
            total_positions,
            total_duration,
            total_positions as f64 / total_duration.as_secs_f64()
        );
    }
}
