use std::fmt;

use common::coordinate::Coordinate;
use common::geometry::{NUM_TILES, NUM_TILES_PER_ROW};

use super::{Alliance, Board, BoardError, Piece};

impl Board {
    /// Reads a board from an 8x8 grid of characters, rank 8 first. `.` or `-`
    /// marks an empty tile, upper case letters are white pieces and lower case
    /// letters black ones. Whitespace is ignored. Every piece is created as
    /// not having moved yet.
    pub fn from_layout(layout: &str, mover: Alliance) -> Result<Board, BoardError> {
        let squares: Vec<char> = layout.chars().filter(|c| !c.is_whitespace()).collect();
        if squares.len() != NUM_TILES {
            return Err(BoardError::InvalidLayoutLength { len: squares.len() });
        }

        let mut pieces = Vec::new();
        for (coordinate, &c) in Coordinate::all().zip(squares.iter()) {
            if c == '.' || c == '-' {
                continue;
            }
            let piece = Piece::from_fen(c, coordinate)
                .ok_or(BoardError::InvalidLayoutCharacter { c })?;
            pieces.push(piece);
        }

        Board::new(pieces, mover, None)
    }
}

impl fmt::Display for Board {
    /// `{}` prints the bare grid accepted by `Board::from_layout`; `{:#}` adds
    /// rank and file labels.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let labelled = f.alternate();
        for (row, tiles) in self
            .tiles()
            .iter()
            .collect::<Vec<_>>()
            .chunks(NUM_TILES_PER_ROW)
            .enumerate()
        {
            if labelled {
                write!(f, "{} ", NUM_TILES_PER_ROW - row)?;
            }
            for tile in tiles {
                match tile.piece() {
                    Some(piece) => write!(f, "{}", piece)?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        if labelled {
            writeln!(f, "  abcdefgh")?;
        }
        Ok(())
    }
}

/// Builds a `Board` from a picture of the position, white at the bottom.
///
/// ```ignore
/// let board = chess_position! {
///     ....k...
///     ........
///     ........
///     ........
///     ........
///     ........
///     ........
///     R...K..R
/// };
/// ```
///
/// White moves unless the picture is prefixed with `@Black`.
#[macro_export]
macro_rules! chess_position {
    (@ $mover:ident $($piece:tt)*) => {{
        // Convert all input tokens to a string; whitespace is dropped by the layout reader.
        $crate::board::Board::from_layout(
            stringify!($($piece)*),
            $crate::board::Alliance::$mover,
        )
        .expect("chess_position! layout should describe a valid board")
    }};
    ($($piece:tt)*) => {
        $crate::chess_position!(@White $($piece)*)
    };
}
