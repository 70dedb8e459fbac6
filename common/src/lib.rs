//! Board geometry shared by the rules engine and its front ends: square
//! coordinates, algebraic notation, and the file/rank membership tables the
//! move generators consult to avoid wrapping across the board edge.

pub mod coordinate;
pub mod geometry;

pub use coordinate::{Coordinate, CoordinateError};
