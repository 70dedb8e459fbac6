//! Static membership tables over the 64 tile coordinates.
//!
//! Coordinates run row-major from the top-left corner, so index 0 is a8 and
//! index 63 is h1. The "first rank" is white's back rank (the bottom row) and
//! the "first column" is the a-file.

pub const NUM_TILES: usize = 64;
pub const NUM_TILES_PER_ROW: usize = 8;

pub const FIRST_COLUMN: [bool; NUM_TILES] = column(0);
pub const SECOND_COLUMN: [bool; NUM_TILES] = column(1);
pub const SEVENTH_COLUMN: [bool; NUM_TILES] = column(6);
pub const EIGHTH_COLUMN: [bool; NUM_TILES] = column(7);

pub const EIGHTH_RANK: [bool; NUM_TILES] = row(0);
pub const SEVENTH_RANK: [bool; NUM_TILES] = row(1);
pub const SIXTH_RANK: [bool; NUM_TILES] = row(2);
pub const FIFTH_RANK: [bool; NUM_TILES] = row(3);
pub const FOURTH_RANK: [bool; NUM_TILES] = row(4);
pub const THIRD_RANK: [bool; NUM_TILES] = row(5);
pub const SECOND_RANK: [bool; NUM_TILES] = row(6);
pub const FIRST_RANK: [bool; NUM_TILES] = row(7);

pub fn is_valid_tile_coordinate(candidate: i32) -> bool {
    candidate >= 0 && candidate < NUM_TILES as i32
}

const fn column(column_number: usize) -> [bool; NUM_TILES] {
    let mut table = [false; NUM_TILES];
    let mut coordinate = column_number;
    while coordinate < NUM_TILES {
        table[coordinate] = true;
        coordinate += NUM_TILES_PER_ROW;
    }
    table
}

const fn row(row_number: usize) -> [bool; NUM_TILES] {
    let mut table = [false; NUM_TILES];
    let mut coordinate = row_number * NUM_TILES_PER_ROW;
    while coordinate < (row_number + 1) * NUM_TILES_PER_ROW {
        table[coordinate] = true;
        coordinate += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_have_eight_members() {
        for table in [FIRST_COLUMN, SECOND_COLUMN, SEVENTH_COLUMN, EIGHTH_COLUMN] {
            assert_eq!(8, table.iter().filter(|&&member| member).count());
        }
    }

    #[test]
    fn test_column_membership() {
        assert!(FIRST_COLUMN[0]);
        assert!(FIRST_COLUMN[56]);
        assert!(!FIRST_COLUMN[1]);
        assert!(SECOND_COLUMN[57]);
        assert!(SEVENTH_COLUMN[6]);
        assert!(EIGHTH_COLUMN[7]);
        assert!(EIGHTH_COLUMN[63]);
        assert!(!EIGHTH_COLUMN[56]);
    }

    #[test]
    fn test_rank_membership() {
        assert!(EIGHTH_RANK[0] && EIGHTH_RANK[7] && !EIGHTH_RANK[8]);
        assert!(SEVENTH_RANK[8] && SEVENTH_RANK[15]);
        assert!(SECOND_RANK[48] && SECOND_RANK[55]);
        assert!(FIRST_RANK[56] && FIRST_RANK[63] && !FIRST_RANK[55]);
        assert!(FIFTH_RANK[24] && FOURTH_RANK[39]);
        assert!(SIXTH_RANK[16] && THIRD_RANK[40]);
    }

    #[test]
    fn test_valid_tile_coordinate() {
        assert!(is_valid_tile_coordinate(0));
        assert!(is_valid_tile_coordinate(63));
        assert!(!is_valid_tile_coordinate(-1));
        assert!(!is_valid_tile_coordinate(64));
    }
}
