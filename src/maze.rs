use std::fmt;

use fnv::FnvHashSet;

use crate::cells::{offset_coordinate, Cell, Edge, GridDirection};
use crate::units::SideLength;

/// A generated maze: the carved passages of a square grid plus constant time
/// passage lookup.
#[derive(Debug, Clone)]
pub struct Maze {
    side: SideLength,
    edges: Vec<Edge>,
    passages: FnvHashSet<(Cell, Cell)>,
}

impl Maze {
    pub fn new(side: SideLength, edges: Vec<Edge>) -> Maze {
        let mut passages = FnvHashSet::default();
        for edge in &edges {
            // Passages are undirected, record both orientations.
            passages.insert((edge.from, edge.to));
            passages.insert((edge.to, edge.from));
        }
        Maze {
            side: side,
            edges: edges,
            passages: passages,
        }
    }

    pub fn side(&self) -> SideLength {
        self.side
    }

    /// The carved passages in discovery order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Are two cells joined by a carved passage?
    pub fn is_linked(&self, a: Cell, b: Cell) -> bool {
        self.passages.contains(&(a, b))
    }

    pub fn is_neighbour_linked(&self, coord: &Cell, direction: GridDirection) -> bool {
        offset_coordinate(*coord, direction, self.side)
            .map_or(false,
                    |neighbour_coord| self.is_linked(*coord, neighbour_coord))
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {

        let SideLength(side) = self.side;

        // North most boundary, then each row renders its own body line and its
        // southern boundary line.
        let mut output = String::from("+");
        for _ in 0..side {
            output.push_str("---+");
        }
        output.push('\n');

        for y in 0..side {
            let mut row_middle_section_render = String::from("|");
            let mut row_bottom_section_render = String::from("+");

            for x in 0..side {
                let cell_coord = Cell::new(x as u32, y as u32);

                row_middle_section_render.push_str("   ");
                if self.is_neighbour_linked(&cell_coord, GridDirection::East) {
                    row_middle_section_render.push(' ');
                } else {
                    row_middle_section_render.push('|');
                }

                if self.is_neighbour_linked(&cell_coord, GridDirection::South) {
                    row_bottom_section_render.push_str("   +");
                } else {
                    row_bottom_section_render.push_str("---+");
                }
            }

            output.push_str(&row_middle_section_render);
            output.push('\n');
            output.push_str(&row_bottom_section_render);
            output.push('\n');
        }

        write!(f, "{}", output)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn passage_lookup_is_symmetric() {
        let a = Cell::new(0, 0);
        let b = Cell::new(1, 0);
        let c = Cell::new(1, 1);
        let maze = Maze::new(SideLength(2), vec![Edge::new(a, b)]);

        assert!(maze.is_linked(a, b));
        assert!(maze.is_linked(b, a));
        assert!(!maze.is_linked(b, c));
        assert!(!maze.is_linked(a, a));
    }

    #[test]
    fn neighbour_links_respect_grid_bounds() {
        let a = Cell::new(0, 0);
        let b = Cell::new(1, 0);
        let maze = Maze::new(SideLength(2), vec![Edge::new(a, b)]);

        assert!(maze.is_neighbour_linked(&a, GridDirection::East));
        assert!(maze.is_neighbour_linked(&b, GridDirection::West));
        assert!(!maze.is_neighbour_linked(&a, GridDirection::West));
        assert!(!maze.is_neighbour_linked(&a, GridDirection::North));
        assert!(!maze.is_neighbour_linked(&a, GridDirection::South));
    }

    #[test]
    fn display_single_cell() {
        let maze = Maze::new(SideLength(1), vec![]);
        assert_eq!(format!("{}", maze), "+---+\n|   |\n+---+\n");
    }

    #[test]
    fn display_two_by_two() {
        // (0,0)-(1,0) open to the east, both columns open to the south.
        let edges = vec![Edge::new(Cell::new(0, 0), Cell::new(1, 0)),
                        Edge::new(Cell::new(0, 0), Cell::new(0, 1)),
                        Edge::new(Cell::new(1, 0), Cell::new(1, 1))];
        let maze = Maze::new(SideLength(2), edges);

        let expected = "+---+---+\n\
                        |       |\n\
                        +   +   +\n\
                        |   |   |\n\
                        +---+---+\n";
        assert_eq!(format!("{}", maze), expected);
    }
}
