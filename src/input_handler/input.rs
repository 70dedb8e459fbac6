//! Move input parsing and validation.

use std::str::FromStr;

use common::coordinate::{Coordinate, CoordinateError};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static COORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-h][1-8])\s*([a-h][1-8])$").expect("COORD_RE regex should be valid")
});
static ALG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([NBRQK]?[a-h]?x?[a-h][1-8](=Q)?|O-O(-O)?)$")
        .expect("ALG_RE regex should be valid")
});

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error(transparent)]
    InvalidSquare(#[from] CoordinateError),
}

#[derive(Debug, PartialEq, Eq)]
pub enum MoveInput {
    /// `e2e4` or `e2 e4`
    Coordinate { from: Coordinate, to: Coordinate },
    /// Notation as printed for moves, e.g. `Nf3`, `exd5`, `O-O`
    Algebraic { notation: String },
    Quit,
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();

        if trimmed.eq_ignore_ascii_case("quit") || trimmed == "q" {
            return Ok(MoveInput::Quit);
        }

        if let Some(caps) = COORD_RE.captures(trimmed) {
            return Ok(MoveInput::Coordinate {
                from: Coordinate::from_algebraic(&caps[1])?,
                to: Coordinate::from_algebraic(&caps[2])?,
            });
        }

        if let Some(caps) = ALG_RE.captures(trimmed) {
            return Ok(MoveInput::Algebraic {
                notation: caps[1].to_string(),
            });
        }

        Err(InputError::InvalidInput {
            input: input.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::coordinate::{E2, E4, G1, F3};

    #[test]
    fn test_parse_coordinate_input() {
        let expected = MoveInput::Coordinate { from: E2, to: E4 };
        assert_eq!(Ok(expected), "e2e4".parse());
        assert_eq!(
            Ok(MoveInput::Coordinate { from: G1, to: F3 }),
            "  g1 f3\n".parse()
        );
    }

    #[test]
    fn test_parse_algebraic_input() {
        for notation in ["Nf3", "exd5", "e4", "Qxh4", "a8=Q", "O-O", "O-O-O"] {
            assert_eq!(
                Ok(MoveInput::Algebraic {
                    notation: notation.to_string()
                }),
                notation.parse()
            );
        }
    }

    #[test]
    fn test_parse_quit() {
        assert_eq!(Ok(MoveInput::Quit), "quit".parse());
        assert_eq!(Ok(MoveInput::Quit), "q\n".parse());
    }

    #[test]
    fn test_parse_invalid_input() {
        assert_eq!(
            Err(InputError::InvalidInput {
                input: "e2e9".to_string()
            }),
            "e2e9".parse::<MoveInput>()
        );
        assert!("hello".parse::<MoveInput>().is_err());
        assert!("".parse::<MoveInput>().is_err());
    }
}
