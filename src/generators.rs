use bit_set::BitSet;
use rand::Rng;

use crate::cells::{offset_coordinate, Cell, CellSmallVec, Edge, DIRECTIONS};
use crate::errors::*;
use crate::units::SideLength;

/// Generate a perfect maze over a `size` x `size` grid of cells.
///
/// Owns a thread local rng for the duration of the call, so repeated calls are
/// independent of one another. Use `frontier_growth` directly to control the
/// source of randomness.
pub fn generate_maze(size: SideLength) -> Result<Vec<Edge>> {
    let mut rng = rand::thread_rng();
    frontier_growth(size, &mut rng)
}

/// Apply the frontier growth maze generation algorithm, returning the carved
/// passages in discovery order.
///
/// The maze tree grows from one random start cell. Each step picks a uniformly
/// random cell from the fringe of the tree - not necessarily the most recently
/// added one, which is what gives the maze its branching structure rather than
/// a pure depth first corridor - and tries to carve a passage to a random
/// unvisited neighbour. A fringe cell with no unvisited neighbours left is
/// dropped from the fringe. Growth stops once every cell has been carved into
/// the tree: `size * size - 1` passages.
///
/// The fringe index selection is uniform over the current fringe size each
/// iteration, so no boundary or recency bias creeps in.
pub fn frontier_growth<R: Rng>(size: SideLength, rng: &mut R) -> Result<Vec<Edge>> {
    let SideLength(side) = size;
    if side == 0 {
        bail!(ErrorKind::ZeroSideLength);
    }

    let cells_count = side * side;
    let mut visited = BitSet::with_capacity(cells_count);
    let mut fringe: Vec<Cell> = Vec::new();
    let mut edges: Vec<Edge> = Vec::with_capacity(cells_count - 1);

    let start_cell = random_cell(size, rng);
    visited.insert(cell_index(&start_cell, size));
    fringe.push(start_cell);

    while edges.len() < cells_count - 1 {
        debug_assert!(!fringe.is_empty(),
                      "fringe drained before the spanning tree was complete");

        let fringe_index = rng.gen_range(0, fringe.len());
        let current = fringe[fringe_index];

        let moves = valid_moves(&current, &visited, size);
        if moves.is_empty() {
            // Exhausted cell. The fringe is unordered, so swap with the last
            // element and pop.
            fringe.swap_remove(fringe_index);
        } else {
            let chosen = moves[rng.gen_range(0, moves.len())];
            edges.push(Edge::new(current, chosen));
            visited.insert(cell_index(&chosen, size));
            fringe.push(chosen);
        }
    }

    Ok(edges)
}

/// Uniformly random cell of a `size` sided grid.
pub fn random_cell<R: Rng>(size: SideLength, rng: &mut R) -> Cell {
    let SideLength(side) = size;
    Cell::new(rng.gen_range(0, side) as u32, rng.gen_range(0, side) as u32)
}

/// The grid adjacent cells of `current` that are not yet part of the maze.
fn valid_moves(current: &Cell, visited: &BitSet, size: SideLength) -> CellSmallVec {
    DIRECTIONS
        .iter()
        .filter_map(|dir| offset_coordinate(*current, *dir, size))
        .filter(|cell| !visited.contains(cell_index(cell, size)))
        .collect()
}

fn cell_index(cell: &Cell, size: SideLength) -> usize {
    cell.x as usize + size.0 * cell.y as usize
}

#[cfg(test)]
mod tests {

    use super::*;
    use itertools::Itertools;
    use quickcheck::{quickcheck, TestResult};
    use rand::{SeedableRng, XorShiftRng};

    use crate::topology;

    fn seeded_rng(seed: u32) -> XorShiftRng {
        // XorShift must not be seeded with all zeroes.
        XorShiftRng::from_seed([seed | 1,
                                seed ^ 0x9e3779b9,
                                seed.wrapping_add(0x7f4a7c15),
                                seed.rotate_left(16)])
    }

    #[test]
    fn edge_count_is_cells_count_minus_one() {
        for side in 1..9 {
            let mut rng = seeded_rng(side as u32);
            let edges = frontier_growth(SideLength(side), &mut rng).unwrap();
            assert_eq!(edges.len(), side * side - 1);
        }
    }

    #[test]
    fn edges_form_a_spanning_tree() {
        let size = SideLength(12);
        let mut rng = seeded_rng(99);
        let edges = frontier_growth(size, &mut rng).unwrap();
        assert!(topology::is_spanning_tree(&edges, size));
    }

    #[test]
    fn edges_connect_grid_adjacent_cells_within_bounds() {
        let size = SideLength(7);
        let mut rng = seeded_rng(3);
        for edge in frontier_growth(size, &mut rng).unwrap() {
            assert!(topology::is_grid_adjacent(&edge.from, &edge.to));
            for cell in [edge.from, edge.to].iter() {
                assert!((cell.x as usize) < size.0);
                assert!((cell.y as usize) < size.0);
            }
        }
    }

    #[test]
    fn every_cell_is_carved_into_the_maze() {
        let side = 6;
        let mut rng = seeded_rng(17);
        let edges = frontier_growth(SideLength(side), &mut rng).unwrap();

        let expected: Vec<Cell> = (0..side as u32)
            .flat_map(|y| (0..side as u32).map(move |x| Cell::new(x, y)))
            .sorted();
        let touched: Vec<Cell> = edges.iter()
            .flat_map(|edge| vec![edge.from, edge.to])
            .sorted()
            .into_iter()
            .dedup()
            .collect();
        assert_eq!(touched, expected);
    }

    #[test]
    fn zero_side_length_is_rejected() {
        let mut rng = seeded_rng(1);
        assert!(frontier_growth(SideLength(0), &mut rng).is_err());
    }

    #[test]
    fn single_cell_maze_has_no_edges() {
        let mut rng = seeded_rng(1);
        let edges = frontier_growth(SideLength(1), &mut rng).unwrap();
        assert!(edges.is_empty());
    }

    #[test]
    fn two_by_two_maze_has_three_edges() {
        let mut rng = seeded_rng(5);
        let edges = frontier_growth(SideLength(2), &mut rng).unwrap();
        assert_eq!(edges.len(), 3);
        assert!(topology::is_spanning_tree(&edges, SideLength(2)));
    }

    #[test]
    fn same_seed_gives_the_same_maze() {
        let size = SideLength(10);
        let first = frontier_growth(size, &mut seeded_rng(7)).unwrap();
        let second = frontier_growth(size, &mut seeded_rng(7)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_give_different_mazes() {
        let size = SideLength(10);
        let first = frontier_growth(size, &mut seeded_rng(7)).unwrap();
        let second = frontier_growth(size, &mut seeded_rng(8)).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn random_cells_stay_in_bounds() {
        let size = SideLength(4);
        let mut rng = seeded_rng(21);
        for _ in 0..1000 {
            let cell = random_cell(size, &mut rng);
            assert!(cell.x < 4 && cell.y < 4);
        }
    }

    #[test]
    fn generated_mazes_are_always_spanning_trees() {
        fn prop(side: usize) -> TestResult {
            if side == 0 || side > 12 {
                return TestResult::discard();
            }
            let size = SideLength(side);
            let edges = generate_maze(size).unwrap();
            TestResult::from_bool(edges.len() == side * side - 1 &&
                                  topology::is_spanning_tree(&edges, size))
        }
        quickcheck(prop as fn(usize) -> TestResult);
    }
}
