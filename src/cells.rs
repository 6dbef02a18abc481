use smallvec::SmallVec;

use crate::units::SideLength;

/// One cell position in a square maze grid.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
}

impl Cell {
    pub fn new(x: u32, y: u32) -> Cell {
        Cell { x: x, y: y }
    }
}

pub type CellSmallVec = SmallVec<[Cell; 4]>;

/// A carved passage between two grid adjacent cells.
///
/// Edges are only ever created by maze generation and record the direction of
/// discovery: `from` was already part of the maze when `to` was carved into it.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub struct Edge {
    pub from: Cell,
    pub to: Cell,
}

impl Edge {
    pub fn new(from: Cell, to: Cell) -> Edge {
        Edge {
            from: from,
            to: to,
        }
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum GridDirection {
    North,
    South,
    East,
    West,
}

pub const DIRECTIONS: [GridDirection; 4] = [GridDirection::North,
                                            GridDirection::South,
                                            GridDirection::East,
                                            GridDirection::West];

/// Creates a new `Cell` offset 1 cell away in the given direction.
/// Returns None if the coordinate would leave a `size` sided grid.
pub fn offset_coordinate(coord: Cell, dir: GridDirection, size: SideLength) -> Option<Cell> {
    let (x, y) = (coord.x, coord.y);
    let side = size.0 as u32;
    match dir {
        GridDirection::North => {
            if y > 0 {
                Some(Cell { x: x, y: y - 1 })
            } else {
                None
            }
        }
        GridDirection::South => {
            if y + 1 < side {
                Some(Cell { x: x, y: y + 1 })
            } else {
                None
            }
        }
        GridDirection::East => {
            if x + 1 < side {
                Some(Cell { x: x + 1, y: y })
            } else {
                None
            }
        }
        GridDirection::West => {
            if x > 0 {
                Some(Cell { x: x - 1, y: y })
            } else {
                None
            }
        }
    }
}
