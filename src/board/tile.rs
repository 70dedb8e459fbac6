use std::fmt;
use std::ops::Index;

use common::coordinate::Coordinate;
use common::geometry::NUM_TILES;

use super::piece::Piece;

/// A single square of a board. Tiles never change once created.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash)]
pub enum Tile {
    Empty(Coordinate),
    Occupied(Coordinate, Piece),
}

static EMPTY_TILES: [Tile; NUM_TILES] = empty_tiles();

const fn empty_tiles() -> [Tile; NUM_TILES] {
    let mut tiles = [Tile::Empty(Coordinate::new(0)); NUM_TILES];
    let mut index = 0;
    while index < NUM_TILES {
        tiles[index] = Tile::Empty(Coordinate::new(index as u8));
        index += 1;
    }
    tiles
}

impl Tile {
    pub fn create(coordinate: Coordinate, piece: Option<Piece>) -> Self {
        match piece {
            Some(piece) => Tile::Occupied(coordinate, piece),
            None => Self::empty(coordinate),
        }
    }

    pub fn empty(coordinate: Coordinate) -> Self {
        EMPTY_TILES[coordinate.index()]
    }

    pub fn coordinate(&self) -> Coordinate {
        match self {
            Tile::Empty(coordinate) | Tile::Occupied(coordinate, _) => *coordinate,
        }
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, Tile::Occupied(..))
    }

    pub fn piece(&self) -> Option<&Piece> {
        match self {
            Tile::Empty(_) => None,
            Tile::Occupied(_, piece) => Some(piece),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Empty(_) => write!(f, "-"),
            Tile::Occupied(_, piece) => write!(f, "{}", piece),
        }
    }
}

/// The 64 tiles of one board, indexed by coordinate.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Tiles([Tile; NUM_TILES]);

impl Tiles {
    pub fn from_placement(placement: &[Option<Piece>; NUM_TILES]) -> Self {
        let mut tiles = empty_tiles();
        for coordinate in Coordinate::all() {
            tiles[coordinate.index()] = Tile::create(coordinate, placement[coordinate.index()]);
        }
        Self(tiles)
    }

    pub fn get(&self, coordinate: Coordinate) -> &Tile {
        &self.0[coordinate.index()]
    }

    pub fn piece_at(&self, coordinate: Coordinate) -> Option<&Piece> {
        self.get(coordinate).piece()
    }

    pub fn is_occupied(&self, coordinate: Coordinate) -> bool {
        self.get(coordinate).is_occupied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.0.iter()
    }
}

impl Index<Coordinate> for Tiles {
    type Output = Tile;

    fn index(&self, coordinate: Coordinate) -> &Self::Output {
        self.get(coordinate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::alliance::Alliance;
    use crate::board::piece::PieceKind;
    use common::coordinate::{D4, E4};

    #[test]
    fn test_empty_tiles_are_cached_per_coordinate() {
        for coordinate in Coordinate::all() {
            let tile = Tile::empty(coordinate);
            assert_eq!(coordinate, tile.coordinate());
            assert!(!tile.is_occupied());
            assert_eq!(None, tile.piece());
        }
    }

    #[test]
    fn test_occupied_tile() {
        let knight = Piece::new(PieceKind::Knight, Alliance::Black, D4);
        let tile = Tile::create(D4, Some(knight));
        assert!(tile.is_occupied());
        assert_eq!(Some(&knight), tile.piece());
        assert_eq!("n", tile.to_string());
        assert_eq!("-", Tile::create(E4, None).to_string());
    }

    #[test]
    fn test_tiles_from_placement() {
        let mut placement = [None; NUM_TILES];
        let queen = Piece::new(PieceKind::Queen, Alliance::White, E4);
        placement[E4.index()] = Some(queen);
        let tiles = Tiles::from_placement(&placement);

        assert_eq!(Some(&queen), tiles.piece_at(E4));
        assert!(!tiles.is_occupied(D4));
        assert_eq!(1, tiles.iter().filter(|tile| tile.is_occupied()).count());
        assert_eq!(E4, tiles[E4].coordinate());
    }
}
