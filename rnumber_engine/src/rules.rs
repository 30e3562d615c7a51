// rules.rs - Per-state transition table

use crate::cell::Cell;
use crate::grid::Grid;
use crate::neighbors::neighbor_weight_sum;
use crate::predicates::{is_fibonacci, is_power_of_two, is_prime};

/// Next state of a cell given its current state and weighted neighbor sum.
///
/// Arms are tried top to bottom, so within one state the first matching
/// guard wins.
pub fn next_state(current: Cell, neighbor_sum: i32) -> Cell {
    let n = i64::from(neighbor_sum);

    match current {
        Cell::Empty  if n > 0 && is_power_of_two(n)        => Cell::AliveB,
        Cell::Empty  if n < 0 && is_power_of_two(n.abs())  => Cell::AliveD,
        Cell::Empty                                        => Cell::Empty,

        Cell::AliveA if is_fibonacci(n)                    => Cell::Empty,
        Cell::AliveA if n < 12                             => Cell::AliveB,
        Cell::AliveA                                       => Cell::AliveA,

        Cell::AliveB if n < 0                              => Cell::Empty,
        Cell::AliveB if n > 6                              => Cell::AliveA,
        Cell::AliveB                                       => Cell::AliveB,

        Cell::AliveC if is_prime(n.abs())                  => Cell::Empty,
        Cell::AliveC if n > -12                            => Cell::AliveD,
        Cell::AliveC                                       => Cell::AliveC,

        Cell::AliveD if n >= 1                             => Cell::Empty,
        Cell::AliveD if n < -6                             => Cell::AliveC,
        Cell::AliveD                                       => Cell::AliveD,
    }
}

/// Computes the next-generation cells of one row, reading only `grid`.
pub fn evolve_row(grid: &Grid, row: usize) -> Vec<Cell> {
    (0..grid.cols())
        .map(|col| next_state(grid.get(row, col), neighbor_weight_sum(grid, row, col)))
        .collect()
}
