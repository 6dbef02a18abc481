use fnv::FnvHashSet;
use petgraph::unionfind::UnionFind;

use crate::cells::{Cell, Edge};
use crate::units::SideLength;

/// Does the edge list describe a perfect maze over a `size` sided grid?
///
/// A perfect maze is a spanning tree of the grid graph: `size * size - 1`
/// edges, every edge joining two in bounds grid adjacent cells, no passage
/// repeated and no edge closing a cycle. Cycle detection merges cell
/// components in a union find structure; with `size * size - 1` acyclic edges
/// exactly one component remains, so connectivity needs no separate check.
pub fn is_spanning_tree(edges: &[Edge], size: SideLength) -> bool {
    let SideLength(side) = size;
    let cells_count = side * side;
    if cells_count == 0 || edges.len() != cells_count - 1 {
        return false;
    }

    let mut components = UnionFind::<u32>::new(cells_count);
    let mut passages: FnvHashSet<(Cell, Cell)> = FnvHashSet::default();

    for edge in edges {
        if !is_in_bounds(&edge.from, size) || !is_in_bounds(&edge.to, size) ||
           !is_grid_adjacent(&edge.from, &edge.to) {
            return false;
        }
        if !passages.insert(normalised_passage(edge)) {
            // The same wall carved twice.
            return false;
        }
        if !components.union(node_index(&edge.from, side), node_index(&edge.to, side)) {
            // Both cells were already in the same component: a cycle.
            return false;
        }
    }

    true
}

/// Are two cells exactly one orthogonal grid step apart?
pub fn is_grid_adjacent(a: &Cell, b: &Cell) -> bool {
    let dx = if a.x > b.x { a.x - b.x } else { b.x - a.x };
    let dy = if a.y > b.y { a.y - b.y } else { b.y - a.y };
    dx + dy == 1
}

fn is_in_bounds(cell: &Cell, size: SideLength) -> bool {
    (cell.x as usize) < size.0 && (cell.y as usize) < size.0
}

fn node_index(cell: &Cell, side: usize) -> u32 {
    (cell.x as usize + side * cell.y as usize) as u32
}

fn normalised_passage(edge: &Edge) -> (Cell, Cell) {
    if edge.from <= edge.to {
        (edge.from, edge.to)
    } else {
        (edge.to, edge.from)
    }
}
