// Domain layer - grid, update rule, worker pool
pub mod domain;

// Application layer - configuration and the simulation driver
pub mod application;

// Text output
pub mod rendering;

pub use application::{Config, ConfigError, Report, Simulation, Snapshot};
pub use domain::{Cell, Engine, EngineError, Grid, Pattern, presets};
pub use rendering::render;
