use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::geometry::{is_valid_tile_coordinate, NUM_TILES, NUM_TILES_PER_ROW};

static ALGEBRAIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([a-hA-H])([1-8])$").expect("ALGEBRAIC_RE regex should be valid")
});

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoordinateError {
    #[error("invalid algebraic coordinate: {input:?}")]
    InvalidAlgebraic { input: String },
    #[error("tile index {index} is outside the board")]
    OutOfRange { index: i32 },
}

/// One of the 64 tiles, addressed row-major from a8 (0) to h1 (63).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate(u8);

impl Coordinate {
    pub const fn new(index: u8) -> Self {
        assert!((index as usize) < NUM_TILES, "tile index out of range");
        Self(index)
    }

    pub fn try_new(index: i32) -> Result<Self, CoordinateError> {
        if is_valid_tile_coordinate(index) {
            Ok(Self(index as u8))
        } else {
            Err(CoordinateError::OutOfRange { index })
        }
    }

    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..NUM_TILES as u8).map(Coordinate)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Column, 0 for the a-file through 7 for the h-file.
    pub const fn file(self) -> usize {
        self.index() % NUM_TILES_PER_ROW
    }

    /// Chess rank, 1 for white's back rank through 8 for black's.
    pub const fn rank(self) -> usize {
        NUM_TILES_PER_ROW - self.index() / NUM_TILES_PER_ROW
    }

    /// Adds a flat-index offset, returning `None` when the result leaves the
    /// board. Left/right wrap-around is not detected here.
    pub fn offset(self, delta: i32) -> Option<Coordinate> {
        Self::try_new(self.0 as i32 + delta).ok()
    }

    pub fn from_algebraic(algebraic: &str) -> Result<Self, CoordinateError> {
        let caps = ALGEBRAIC_RE
            .captures(algebraic)
            .ok_or_else(|| CoordinateError::InvalidAlgebraic {
                input: algebraic.to_string(),
            })?;

        let file = caps[1].to_ascii_lowercase().as_bytes()[0] - b'a';
        let rank = caps[2].as_bytes()[0] - b'0';
        let row = NUM_TILES_PER_ROW as u8 - rank;
        Ok(Self(row * NUM_TILES_PER_ROW as u8 + file))
    }

    pub fn to_algebraic(self) -> &'static str {
        tables::ALGEBRAIC[self.index()]
    }
}

impl TryFrom<i32> for Coordinate {
    type Error = CoordinateError;

    fn try_from(index: i32) -> Result<Self, Self::Error> {
        Self::try_new(index)
    }
}

impl From<Coordinate> for usize {
    fn from(coordinate: Coordinate) -> Self {
        coordinate.index()
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_algebraic(s.trim())
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.to_algebraic(), self.0)
    }
}

pub const A8: Coordinate = Coordinate(0);
pub const B8: Coordinate = Coordinate(1);
pub const C8: Coordinate = Coordinate(2);
pub const D8: Coordinate = Coordinate(3);
pub const E8: Coordinate = Coordinate(4);
pub const F8: Coordinate = Coordinate(5);
pub const G8: Coordinate = Coordinate(6);
pub const H8: Coordinate = Coordinate(7);
pub const A7: Coordinate = Coordinate(8);
pub const B7: Coordinate = Coordinate(9);
pub const C7: Coordinate = Coordinate(10);
pub const D7: Coordinate = Coordinate(11);
pub const E7: Coordinate = Coordinate(12);
pub const F7: Coordinate = Coordinate(13);
pub const G7: Coordinate = Coordinate(14);
pub const H7: Coordinate = Coordinate(15);
pub const A6: Coordinate = Coordinate(16);
pub const B6: Coordinate = Coordinate(17);
pub const C6: Coordinate = Coordinate(18);
pub const D6: Coordinate = Coordinate(19);
pub const E6: Coordinate = Coordinate(20);
pub const F6: Coordinate = Coordinate(21);
pub const G6: Coordinate = Coordinate(22);
pub const H6: Coordinate = Coordinate(23);
pub const A5: Coordinate = Coordinate(24);
pub const B5: Coordinate = Coordinate(25);
pub const C5: Coordinate = Coordinate(26);
pub const D5: Coordinate = Coordinate(27);
pub const E5: Coordinate = Coordinate(28);
pub const F5: Coordinate = Coordinate(29);
pub const G5: Coordinate = Coordinate(30);
pub const H5: Coordinate = Coordinate(31);
pub const A4: Coordinate = Coordinate(32);
pub const B4: Coordinate = Coordinate(33);
pub const C4: Coordinate = Coordinate(34);
pub const D4: Coordinate = Coordinate(35);
pub const E4: Coordinate = Coordinate(36);
pub const F4: Coordinate = Coordinate(37);
pub const G4: Coordinate = Coordinate(38);
pub const H4: Coordinate = Coordinate(39);
pub const A3: Coordinate = Coordinate(40);
pub const B3: Coordinate = Coordinate(41);
pub const C3: Coordinate = Coordinate(42);
pub const D3: Coordinate = Coordinate(43);
pub const E3: Coordinate = Coordinate(44);
pub const F3: Coordinate = Coordinate(45);
pub const G3: Coordinate = Coordinate(46);
pub const H3: Coordinate = Coordinate(47);
pub const A2: Coordinate = Coordinate(48);
pub const B2: Coordinate = Coordinate(49);
pub const C2: Coordinate = Coordinate(50);
pub const D2: Coordinate = Coordinate(51);
pub const E2: Coordinate = Coordinate(52);
pub const F2: Coordinate = Coordinate(53);
pub const G2: Coordinate = Coordinate(54);
pub const H2: Coordinate = Coordinate(55);
pub const A1: Coordinate = Coordinate(56);
pub const B1: Coordinate = Coordinate(57);
pub const C1: Coordinate = Coordinate(58);
pub const D1: Coordinate = Coordinate(59);
pub const E1: Coordinate = Coordinate(60);
pub const F1: Coordinate = Coordinate(61);
pub const G1: Coordinate = Coordinate(62);
pub const H1: Coordinate = Coordinate(63);

#[rustfmt::skip]
mod tables {
    pub const ALGEBRAIC: [&str; 64] = [
        "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8",
        "a7", "b7", "c7", "d7", "e7", "f7", "g7", "h7",
        "a6", "b6", "c6", "d6", "e6", "f6", "g6", "h6",
        "a5", "b5", "c5", "d5", "e5", "f5", "g5", "h5",
        "a4", "b4", "c4", "d4", "e4", "f4", "g4", "h4",
        "a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3",
        "a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2",
        "a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1",
    ];
}
