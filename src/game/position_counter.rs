use rayon::prelude::*;

use crate::board::Board;
use crate::player::MoveTransition;

/// Number of positions reachable from `board` in exactly `depth` accepted
/// moves (perft). The root moves are counted in parallel.
pub fn count_positions(board: &Board, depth: u8) -> usize {
    if depth == 0 {
        return 1;
    }

    let transitions: Vec<MoveTransition> = board.current_player().accepted_transitions().collect();
    if depth == 1 {
        return transitions.len();
    }

    transitions
        .par_iter()
        .map(|transition| count_positions_inner(transition.board(), depth - 1))
        .sum()
}

fn count_positions_inner(board: &Board, depth: u8) -> usize {
    let transitions = board.current_player().accepted_transitions();
    if depth == 1 {
        return transitions.count();
    }
    transitions
        .map(|transition| count_positions_inner(transition.board(), depth - 1))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_position;

    #[test]
    fn test_count_positions_from_standard_position() {
        let board = Board::standard();
        assert_eq!(1, count_positions(&board, 0));
        assert_eq!(20, count_positions(&board, 1));
        assert_eq!(400, count_positions(&board, 2));
        assert_eq!(8902, count_positions(&board, 3));
    }

    #[test]
    fn test_count_positions_of_a_mated_side() {
        let board = chess_position! { @Black
            k.......
            ........
            .Q......
            ........
            ........
            ........
            ........
            ..K.....
        };
        assert_eq!(0, count_positions(&board, 1));
        assert_eq!(0, count_positions(&board, 3));
    }
}
