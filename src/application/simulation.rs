use std::time::{Duration, Instant};

use super::Config;
use crate::domain::{Engine, EngineError, Grid};

/// A generation kept for playback after the run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    /// Number of steps applied to the initial grid
    pub generation: usize,
    pub grid: Grid,
}

/// Everything measured during one run.
#[derive(Debug)]
pub struct Report {
    pub snapshots: Vec<Snapshot>,
    /// Wall time of each `Engine::step` call, in order
    pub generation_times: Vec<Duration>,
    pub total_time: Duration,
    pub final_grid: Grid,
}

impl Report {
    /// Mean step time in milliseconds, or `None` if nothing was simulated
    pub fn average_generation_ms(&self) -> Option<f64> {
        if self.generation_times.is_empty() {
            return None;
        }
        let sum: f64 = self
            .generation_times
            .iter()
            .map(|t| t.as_secs_f64() * 1000.0)
            .sum();
        Some(sum / self.generation_times.len() as f64)
    }

    pub fn total_seconds(&self) -> f64 {
        self.total_time.as_secs_f64()
    }

    pub fn generations(&self) -> usize {
        self.generation_times.len()
    }
}

/// Drives an engine through the configured number of generations.
pub struct Simulation {
    config: Config,
    engine: Engine,
    grid: Grid,
}

impl Simulation {
    /// Seed generation 0 and spin up the worker pool.
    pub fn new(config: Config) -> Result<Self, EngineError> {
        let grid = Grid::seeded(config.width, config.height, config.seed);
        Self::with_grid(config, grid)
    }

    /// Start from a caller-supplied generation 0 instead of a random one.
    pub fn with_grid(config: Config, grid: Grid) -> Result<Self, EngineError> {
        let engine = Engine::new(config.threads)?;
        Ok(Self { config, engine, grid })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Whether the grid reached after `generation` steps goes into the buffer
    fn should_capture(&self, generation: usize) -> bool {
        let interval = self.config.display_interval;
        interval > 0 && (generation % interval == 0 || generation == self.config.generations)
    }

    pub fn run(mut self) -> Report {
        let generations = self.config.generations;
        log::info!(
            "simulating {generations} generations on {}x{} with {} threads",
            self.grid.width(),
            self.grid.height(),
            self.engine.threads(),
        );

        let mut generation_times = Vec::with_capacity(generations);
        let mut snapshots = Vec::with_capacity(match self.config.display_interval {
            0 => 0,
            n => generations / n + 1,
        });

        let total_start = Instant::now();
        for generation in 1..=generations {
            let start = Instant::now();
            self.grid = self.engine.step(&self.grid);
            let elapsed = start.elapsed();
            generation_times.push(elapsed);
            log::debug!("generation {generation} took {:.3} ms", elapsed.as_secs_f64() * 1000.0);

            if self.should_capture(generation) {
                log::trace!("buffering generation {generation}");
                snapshots.push(Snapshot {
                    generation,
                    grid: self.grid.clone(),
                });
            }
        }
        let total_time = total_start.elapsed();

        log::info!(
            "finished {generations} generations in {:.3} s, {} snapshots buffered",
            total_time.as_secs_f64(),
            snapshots.len(),
        );
        Report {
            snapshots,
            generation_times,
            total_time,
            final_grid: self.grid,
        }
    }
}
