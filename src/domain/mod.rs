mod cell;
mod engine;
mod grid;
mod patterns;

pub use cell::Cell;
pub use engine::{Engine, EngineError};
pub use grid::Grid;
pub use patterns::{Pattern, presets};
