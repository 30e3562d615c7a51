// scheduler.rs - Row-chunk fan-out / fan-in for one generation
//
// The previous generation is shared read-only behind an Arc. Each chunk of
// rows runs as its own task on the worker pool and hands back an owned
// buffer; buffers are merged in row order once every task has finished.

use std::ops::Range;
use std::sync::Arc;

use tokio::runtime::Runtime;
use tokio::task::JoinError;
use tracing::{trace, warn};

use crate::error::{EngineError, EngineResult};
use crate::grid::Grid;
use crate::rules::evolve_row;

/// Splits `0..rows` into contiguous chunks of `ceil(rows / workers)` rows.
///
/// The last chunk may be shorter, and there are never more chunks than
/// workers. When `workers > rows` the surplus workers get nothing.
pub fn partition_rows(rows: usize, workers: usize) -> Vec<Range<usize>> {
    if rows == 0 {
        return Vec::new();
    }
    let chunk = rows.div_ceil(workers.max(1));
    (0..rows).step_by(chunk).map(|start| start..(start + chunk).min(rows)).collect()
}

/// Maps `kernel` over every row of `snapshot`, one task per chunk.
///
/// Results come back in chunk order, each paired with the rows it covers.
/// If any task fails, the tasks still pending are aborted and the whole
/// call fails; no partial result is returned.
pub async fn map_row_chunks<T, F>(
    snapshot: Arc<Grid>,
    workers: usize,
    kernel: F,
) -> EngineResult<Vec<(Range<usize>, Vec<T>)>>
where
    T: Send + 'static,
    F: Fn(&Grid, usize) -> Vec<T> + Send + Sync + 'static,
{
    let kernel = Arc::new(kernel);
    let chunks = partition_rows(snapshot.rows(), workers);

    let mut handles = Vec::with_capacity(chunks.len());
    for rows in chunks {
        let snapshot = Arc::clone(&snapshot);
        let kernel = Arc::clone(&kernel);
        let task_rows = rows.clone();
        let handle = tokio::spawn(async move {
            let out: Vec<T> = task_rows.clone().flat_map(|row| (*kernel)(snapshot.as_ref(), row)).collect();
            trace!(start = task_rows.start, end = task_rows.end, "chunk finished");
            out
        });
        handles.push((rows, handle));
    }

    let mut results = Vec::with_capacity(handles.len());
    let mut pending = handles.into_iter();
    while let Some((rows, handle)) = pending.next() {
        match handle.await {
            Ok(out) => results.push((rows, out)),
            Err(err) => {
                for (_, rest) in pending.by_ref() {
                    rest.abort();
                }
                let reason = failure_reason(err);
                warn!(start = rows.start, end = rows.end, %reason, "worker failed, aborting generation");
                return Err(EngineError::WorkerFailed { start: rows.start, end: rows.end, reason });
            }
        }
    }
    Ok(results)
}

fn failure_reason(err: JoinError) -> String {
    if !err.is_panic() {
        return err.to_string();
    }
    let payload = err.into_panic();
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "worker panicked".to_string()
    }
}

/// Owns the worker pool used to compute generations.
///
/// `workers` decides how rows are partitioned; the pool itself never has
/// more threads than there are chunks to run or cores to run them on.
pub struct GenerationScheduler {
    runtime      : Runtime,
    workers      : usize,
    pool_threads : usize,
}

impl GenerationScheduler {
    /// Pool sized for any grid, capped at the available parallelism.
    pub fn new(workers: usize) -> EngineResult<Self> {
        Self::with_pool(workers, workers)
    }

    /// Pool sized for grids with `rows` rows: one thread per chunk at most.
    pub fn for_rows(rows: usize, workers: usize) -> EngineResult<Self> {
        Self::with_pool(workers, partition_rows(rows, workers).len())
    }

    fn with_pool(workers: usize, wanted: usize) -> EngineResult<Self> {
        if workers == 0 {
            return Err(EngineError::InvalidConfig("worker count must be at least 1".into()));
        }
        let cores = std::thread::available_parallelism().map_or(1, |n| n.get());
        let pool_threads = wanted.clamp(1, cores);

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(pool_threads)
            .thread_name("rnumber-worker")
            .build()?;
        Ok(Self { runtime, workers, pool_threads })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn pool_threads(&self) -> usize {
        self.pool_threads
    }

    /// Blocking wrapper over [`map_row_chunks`] on this scheduler's pool.
    pub fn map_rows<T, F>(&self, snapshot: &Arc<Grid>, kernel: F) -> EngineResult<Vec<(Range<usize>, Vec<T>)>>
    where
        T: Send + 'static,
        F: Fn(&Grid, usize) -> Vec<T> + Send + Sync + 'static,
    {
        self.runtime.block_on(map_row_chunks(Arc::clone(snapshot), self.workers, kernel))
    }

    /// Builds the generation that follows `snapshot` as a new grid.
    pub fn compute_next_generation(&self, snapshot: &Arc<Grid>) -> EngineResult<Grid> {
        let mut next = Grid::new(snapshot.rows(), snapshot.cols())?;
        self.compute_into(snapshot, &mut next)?;
        Ok(next)
    }

    /// Writes the generation that follows `snapshot` into `target`.
    ///
    /// `target` is reshaped first if its dimensions differ. On error its
    /// contents are unspecified.
    pub fn compute_into(&self, snapshot: &Arc<Grid>, target: &mut Grid) -> EngineResult<()> {
        if !target.same_shape(snapshot) {
            *target = Grid::new(snapshot.rows(), snapshot.cols())?;
        }
        for (rows, cells) in self.map_rows(snapshot, evolve_row)? {
            target.rows_mut(rows).copy_from_slice(&cells);
        }
        Ok(())
    }
}
