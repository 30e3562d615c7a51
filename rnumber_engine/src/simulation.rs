// simulation.rs - Generation loop with double-buffered grids

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::RunConfig;
use crate::error::EngineResult;
use crate::grid::Grid;
use crate::scheduler::GenerationScheduler;

const HISTORY_LEN: usize = 10;

/// Drives a grid forward one full generation at a time.
///
/// `current` is the read-only snapshot the workers share; `next` is the
/// buffer the following generation is written into. The two swap after
/// every step, so no cell is ever overwritten while it is still being read.
pub struct Simulation {
    current       : Arc<Grid>,
    next          : Grid,
    scheduler     : GenerationScheduler,
    generation    : u32,

    track_repeats : bool,
    grid_history  : [u64; HISTORY_LEN],     // fingerprints only, never grids
    history_count : usize,
    first_repeat  : Option<u32>,
}

/// What a finished run looked like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub grid         : Grid,
    pub generations  : u32,
    pub population   : usize,
    pub fingerprint  : u64,
    pub first_repeat : Option<u32>,
}

impl Simulation {
    pub fn new(initial: Grid, workers: usize) -> EngineResult<Self> {
        let scheduler = GenerationScheduler::for_rows(initial.rows(), workers)?;
        let next = Grid::new(initial.rows(), initial.cols())?;

        Ok(Self {
            current: Arc::new(initial),
            next,
            scheduler,
            generation: 0,
            track_repeats: false,
            grid_history: [0; HISTORY_LEN],
            history_count: 0,
            first_repeat: None,
        })
    }

    /// Starts fingerprinting every generation so repeats can be reported.
    /// Off by default; it costs one hash of the grid per step.
    pub fn with_repeat_tracking(mut self) -> Self {
        if !self.track_repeats {
            self.track_repeats = true;
            self.grid_history[self.history_count % HISTORY_LEN] = self.current.fingerprint();
            self.history_count += 1;
        }
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.current
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// First generation whose grid matched one of the preceding ten.
    /// Always `None` unless repeat tracking is on.
    pub fn first_repeat(&self) -> Option<u32> {
        self.first_repeat
    }

    /// Computes one generation. Nothing changes if a worker fails.
    pub fn step(&mut self) -> EngineResult<()> {
        self.scheduler.compute_into(&self.current, &mut self.next)?;

        // Every task has been joined, so the snapshot is normally unshared again.
        match Arc::get_mut(&mut self.current) {
            Some(current) => std::mem::swap(current, &mut self.next),
            None => self.current = Arc::new(self.next.clone()),
        }
        self.generation += 1;

        debug!(generation = self.generation, population = self.current.population(), "generation complete");
        if self.track_repeats {
            self.record_history();
        }
        Ok(())
    }

    /// Runs `generations` steps back to back.
    pub fn advance(&mut self, generations: u32) -> EngineResult<()> {
        for _ in 0..generations {
            self.step()?;
        }
        Ok(())
    }

    pub fn into_grid(self) -> Grid {
        Arc::try_unwrap(self.current).unwrap_or_else(|shared| (*shared).clone())
    }

    fn record_history(&mut self) {
        let fingerprint = self.current.fingerprint();
        let seen = self.grid_history[..self.history_count.min(HISTORY_LEN)].contains(&fingerprint);

        if seen && self.first_repeat.is_none() {
            self.first_repeat = Some(self.generation);
            debug!(generation = self.generation, "grid repeats a recent generation");
        }

        self.grid_history[self.history_count % HISTORY_LEN] = fingerprint;
        self.history_count += 1;
    }
}

/// Evolves `initial` for exactly `generations` generations and returns the last one.
pub fn run(initial: Grid, generations: u32, workers: usize) -> EngineResult<Grid> {
    let mut simulation = Simulation::new(initial, workers)?;
    simulation.advance(generations)?;
    Ok(simulation.into_grid())
}

/// Like [`run`], but validates `config` first and reports on the run.
pub fn run_with(initial: Grid, config: &RunConfig) -> EngineResult<RunSummary> {
    config.validate()?;

    info!(
        rows = initial.rows(),
        cols = initial.cols(),
        generations = config.generations,
        workers = config.workers,
        "starting simulation"
    );

    let mut simulation = Simulation::new(initial, config.workers)?;
    if config.track_repeats {
        simulation = simulation.with_repeat_tracking();
    }
    debug!(pool_threads = simulation.scheduler.pool_threads(), "worker pool ready");
    simulation.advance(config.generations)?;

    let generations = simulation.generation();
    let first_repeat = simulation.first_repeat();
    let grid = simulation.into_grid();
    let summary = RunSummary {
        population: grid.population(),
        fingerprint: grid.fingerprint(),
        generations,
        first_repeat,
        grid,
    };

    info!(
        generations = summary.generations,
        population = summary.population,
        first_repeat = ?summary.first_repeat,
        "simulation finished"
    );
    Ok(summary)
}
