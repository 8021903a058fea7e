//! Fixed-size worker pool driving grid updates.

use super::Grid;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("worker pool needs at least one thread")]
    NoThreads,
    #[error("failed to build worker pool: {0}")]
    Pool(#[from] ThreadPoolBuildError),
}

/// Steps generations on a dedicated rayon pool of a fixed size, so the
/// configured thread count is honoured regardless of the global pool.
pub struct Engine {
    pool: ThreadPool,
}

impl Engine {
    pub fn new(threads: usize) -> Result<Self, EngineError> {
        if threads == 0 {
            return Err(EngineError::NoThreads);
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("life-worker-{i}"))
            .build()?;
        log::debug!("built worker pool with {} threads", pool.current_num_threads());
        Ok(Self { pool })
    }

    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Compute the generation after `grid`. Blocks until every cell is done.
    pub fn step(&self, grid: &Grid) -> Grid {
        self.pool.install(|| grid.step())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_size_is_honoured() {
        let engine = Engine::new(3).unwrap();
        assert_eq!(engine.threads(), 3);
    }

    #[test]
    fn test_zero_threads_rejected() {
        assert!(matches!(Engine::new(0), Err(EngineError::NoThreads)));
    }

    #[test]
    fn test_result_independent_of_thread_count() {
        let single = Engine::new(1).unwrap();
        let many = Engine::new(4).unwrap();

        let mut a = Grid::seeded(61, 37, 1749994962);
        let mut b = a.clone();
        for _ in 0..25 {
            a = single.step(&a);
            b = many.step(&b);
            assert_eq!(a, b);
        }
        assert_eq!(a, (0..25).fold(Grid::seeded(61, 37, 1749994962), |g, _| g.step_serial()));
    }

    #[test]
    fn test_repeated_steps_are_deterministic() {
        let engine = Engine::new(2).unwrap();
        let grid = Grid::seeded(40, 40, 5);
        assert_eq!(engine.step(&grid), engine.step(&grid));
    }

    #[test]
    fn test_presets_agree_with_serial_step() {
        let engines = [Engine::new(1).unwrap(), Engine::new(3).unwrap()];
        for pattern in crate::domain::presets::all_patterns() {
            let grid = pattern.centered(16, 16);
            for engine in &engines {
                assert_eq!(engine.step(&grid), grid.step_serial(), "{}", pattern.name);
            }
        }
    }

    #[test]
    fn test_empty_grid_on_pool() {
        let engine = Engine::new(2).unwrap();
        let grid = Grid::new(0, 9);
        assert_eq!(engine.step(&grid), grid);
    }
}
