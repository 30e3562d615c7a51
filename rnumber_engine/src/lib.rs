// lib.rs - Weighted-neighbor automaton on a toroidal grid
//
// Five cell states, each with a signed weight. Every generation each cell
// looks at the weighted sum of its 8 wrapped neighbors and moves through a
// fixed rule table built on number-theoretic tests. Rows are split into
// chunks that run as parallel tasks against a shared, read-only snapshot.

pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod neighbors;
pub mod predicates;
pub mod rules;
pub mod scheduler;
pub mod simulation;

pub use cell::Cell;
pub use config::{RunConfig, DEFAULT_GENERATIONS, DEFAULT_WORKERS};
pub use error::{EngineError, EngineResult};
pub use grid::Grid;
pub use neighbors::neighbor_weight_sum;
pub use rules::{evolve_row, next_state};
pub use scheduler::{map_row_chunks, partition_rows, GenerationScheduler};
pub use simulation::{run, run_with, RunSummary, Simulation};

#[cfg(test)]
mod tests;
