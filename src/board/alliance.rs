use std::fmt;
use std::str::FromStr;

use common::coordinate::Coordinate;
use common::geometry::{EIGHTH_RANK, FIRST_RANK, SECOND_RANK, SEVENTH_RANK};

/// The two sides of the game.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum Alliance {
    White,
    Black,
}

impl Alliance {
    pub const ALL: [Alliance; 2] = [Alliance::White, Alliance::Black];

    pub fn opposite(&self) -> Self {
        match self {
            Alliance::White => Alliance::Black,
            Alliance::Black => Alliance::White,
        }
    }

    /// Rank step a pawn of this side advances by. White moves towards index 0.
    pub fn direction(&self) -> i32 {
        match self {
            Alliance::White => -1,
            Alliance::Black => 1,
        }
    }

    pub fn opposite_direction(&self) -> i32 {
        -self.direction()
    }

    pub fn is_white(&self) -> bool {
        *self == Alliance::White
    }

    pub fn is_black(&self) -> bool {
        *self == Alliance::Black
    }

    pub fn is_pawn_promotion_square(&self, coordinate: Coordinate) -> bool {
        match self {
            Alliance::White => EIGHTH_RANK[coordinate.index()],
            Alliance::Black => FIRST_RANK[coordinate.index()],
        }
    }

    /// Whether a pawn of this side standing on `coordinate` may still jump.
    pub fn is_pawn_start_square(&self, coordinate: Coordinate) -> bool {
        match self {
            Alliance::White => SECOND_RANK[coordinate.index()],
            Alliance::Black => SEVENTH_RANK[coordinate.index()],
        }
    }

    /// Picks this side's member of a (white, black) pair.
    pub fn choose_player<T>(&self, white: T, black: T) -> T {
        match self {
            Alliance::White => white,
            Alliance::Black => black,
        }
    }
}

impl fmt::Display for Alliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let alliance_str = match self {
            Alliance::White => "White",
            Alliance::Black => "Black",
        };
        write!(f, "{}", alliance_str)
    }
}

type ParseError = &'static str;
impl FromStr for Alliance {
    type Err = ParseError;
    fn from_str(alliance: &str) -> Result<Self, Self::Err> {
        match alliance.to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(Alliance::White),
            "black" | "b" => Ok(Alliance::Black),
            _ => Err("invalid alliance; options are: white, black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::coordinate::{A1, A8, E2, E7, H1};

    #[test]
    fn test_directions_are_antisymmetric() {
        for alliance in Alliance::ALL {
            assert_eq!(alliance.direction(), -alliance.opposite_direction());
            assert_eq!(alliance.direction(), alliance.opposite().opposite_direction());
        }
    }

    #[test]
    fn test_promotion_squares() {
        assert!(Alliance::White.is_pawn_promotion_square(A8));
        assert!(!Alliance::White.is_pawn_promotion_square(A1));
        assert!(Alliance::Black.is_pawn_promotion_square(H1));
        assert!(!Alliance::Black.is_pawn_promotion_square(A8));
    }

    #[test]
    fn test_pawn_start_squares() {
        assert!(Alliance::White.is_pawn_start_square(E2));
        assert!(Alliance::Black.is_pawn_start_square(E7));
        assert!(!Alliance::Black.is_pawn_start_square(E2));
    }

    #[test]
    fn test_choose_player() {
        assert_eq!("w", Alliance::White.choose_player("w", "b"));
        assert_eq!("b", Alliance::Black.choose_player("w", "b"));
    }

    #[test]
    fn test_parse() {
        assert_eq!(Alliance::White, Alliance::from_str("white").unwrap());
        assert_eq!(Alliance::Black, Alliance::from_str("Black").unwrap());
        assert!(Alliance::from_str("green").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!("White", Alliance::White.to_string());
        assert_eq!("Black", Alliance::Black.to_string());
    }
}
