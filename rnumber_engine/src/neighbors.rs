// neighbors.rs - Weighted sum over the 8 toroidal neighbors of a cell

use crate::grid::Grid;

// Offsets to the Moore neighborhood, centre excluded
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Sums the weights of the 8 cells around `(row, col)`, wrapping at every edge.
///
/// With the fixed weight table the result always lies in `-24..=24`. On grids
/// narrower than 3 the same cell can be counted more than once, including
/// the centre cell itself.
pub fn neighbor_weight_sum(grid: &Grid, row: usize, col: usize) -> i32 {
    let rows = grid.rows() as isize;
    let cols = grid.cols() as isize;

    NEIGHBORS
        .iter()
        .map(|&(dr, dc)| {
            let r = (row as isize + dr).rem_euclid(rows) as usize;
            let c = (col as isize + dc).rem_euclid(cols) as usize;
            grid.get(r, c).weight()
        })
        .sum()
}
