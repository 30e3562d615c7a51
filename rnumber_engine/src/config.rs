// config.rs - Run parameters for a simulation

use crate::error::{EngineError, EngineResult};

pub const DEFAULT_GENERATIONS: u32   = 100;
pub const DEFAULT_WORKERS: usize     = 1;

/// How long to run and how many parallel workers to use per generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    pub generations   : u32,
    pub workers       : usize,
    pub track_repeats : bool,     // fingerprint each generation to spot cycles
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { generations: DEFAULT_GENERATIONS, workers: DEFAULT_WORKERS, track_repeats: false }
    }
}

impl RunConfig {
    pub fn new(generations: u32, workers: usize) -> EngineResult<Self> {
        let config = Self { generations, workers, ..Self::default() };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> EngineResult<()> {
        if self.generations == 0 {
            return Err(EngineError::InvalidConfig("generation count must be at least 1".into()));
        }
        if self.workers == 0 {
            return Err(EngineError::InvalidConfig("worker count must be at least 1".into()));
        }
        Ok(())
    }
}
