mod config;
mod simulation;

pub use config::{
    Config, ConfigError, DEFAULT_DISPLAY_INTERVAL, DEFAULT_GENERATIONS, DEFAULT_HEIGHT,
    DEFAULT_SEED, DEFAULT_WIDTH, available_threads,
};
pub use simulation::{Report, Simulation, Snapshot};
