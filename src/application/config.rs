//! Run configuration read from positional command-line arguments.
//!
//! `life_bench [width] [height] [generations] [display_interval] [num_threads] [seed]`
//!
//! Every argument is optional; missing trailing arguments keep their defaults.

use std::num::NonZeroUsize;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_WIDTH: usize = 20;
pub const DEFAULT_HEIGHT: usize = 20;
pub const DEFAULT_GENERATIONS: usize = 100;
pub const DEFAULT_DISPLAY_INTERVAL: usize = 50;
pub const DEFAULT_SEED: u64 = 1749994962;

const MAX_ARGUMENTS: usize = 6;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("too many arguments ({count}, at most 6 accepted)")]
    TooManyArguments { count: usize },
    #[error("{name} must be an integer, got `{value}`")]
    NotANumber { name: &'static str, value: String },
    #[error("grid dimensions must be positive (got {width}x{height})")]
    NonPositiveDimensions { width: i64, height: i64 },
    #[error("number of generations cannot be negative (got {0})")]
    NegativeGenerations(i64),
    #[error("display interval cannot be negative (got {0})")]
    NegativeDisplayInterval(i64),
    #[error("invalid number of threads: {requested} (expected 1 to {max})")]
    InvalidThreadCount { requested: i64, max: usize },
    #[error("grid of {width}x{height} cells is too large to allocate")]
    GridTooLarge { width: i64, height: i64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub generations: usize,
    /// Snapshot every N generations; 0 disables playback
    pub display_interval: usize,
    pub threads: usize,
    pub seed: u64,
}

/// Worker threads the platform can run in parallel (at least 1)
pub fn available_threads() -> usize {
    std::thread::available_parallelism().map_or(1, NonZeroUsize::get)
}

impl Config {
    /// Defaults used when no argument overrides them
    pub fn with_max_threads(max_threads: usize) -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            generations: DEFAULT_GENERATIONS,
            display_interval: DEFAULT_DISPLAY_INTERVAL,
            threads: max_threads.max(1),
            seed: DEFAULT_SEED,
        }
    }

    /// Parse arguments (program name excluded) against this machine's limits.
    pub fn parse<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::parse_with_limit(args, available_threads())
    }

    /// Parse arguments with an explicit upper bound on the thread count.
    pub fn parse_with_limit<I, S>(args: I, max_threads: usize) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<S> = args.into_iter().collect();
        if args.len() > MAX_ARGUMENTS {
            return Err(ConfigError::TooManyArguments { count: args.len() });
        }
        let arg = |i: usize| -> Option<&str> { args.get(i).map(|s| s.as_ref()) };
        let defaults = Self::with_max_threads(max_threads);

        let width = optional(arg(0), "width", defaults.width as i64)?;
        let height = optional(arg(1), "height", defaults.height as i64)?;
        let generations = optional(arg(2), "generations", defaults.generations as i64)?;
        let display_interval =
            optional(arg(3), "display_interval", defaults.display_interval as i64)?;
        let threads = optional(arg(4), "num_threads", defaults.threads as i64)?;
        let seed = optional(arg(5), "seed", defaults.seed)?;

        if threads <= 0 || threads as u64 > max_threads as u64 {
            return Err(ConfigError::InvalidThreadCount { requested: threads, max: max_threads });
        }
        if width <= 0 || height <= 0 {
            return Err(ConfigError::NonPositiveDimensions { width, height });
        }
        // Grid buffers hold width * height cells in one allocation
        let cells = usize::try_from(width)
            .ok()
            .zip(usize::try_from(height).ok())
            .and_then(|(w, h)| w.checked_mul(h));
        if cells.is_none_or(|n| n > isize::MAX as usize) {
            return Err(ConfigError::GridTooLarge { width, height });
        }
        if generations < 0 {
            return Err(ConfigError::NegativeGenerations(generations));
        }
        if display_interval < 0 {
            return Err(ConfigError::NegativeDisplayInterval(display_interval));
        }

        Ok(Self {
            width: width as usize,
            height: height as usize,
            generations: generations as usize,
            display_interval: display_interval as usize,
            threads: threads as usize,
            seed,
        })
    }

    pub fn playback_enabled(&self) -> bool {
        self.display_interval > 0
    }

    pub fn usage(program: &str) -> String {
        let max = available_threads();
        [
            format!(
                "Usage: {program} [width] [height] [generations] [display_interval] \
                 [num_threads] [seed]"
            ),
            format!("  width            - Grid width (positive, default {DEFAULT_WIDTH})"),
            format!("  height           - Grid height (positive, default {DEFAULT_HEIGHT})"),
            format!("  generations      - Generations to simulate (default {DEFAULT_GENERATIONS})"),
            format!("  display_interval - Buffer a grid every N generations, 0 for none"),
            format!("                     (default {DEFAULT_DISPLAY_INTERVAL})"),
            format!("  num_threads      - Number of worker threads (1 to {max}, default {max})"),
            format!("  seed             - Random seed (unsigned integer, default {DEFAULT_SEED})"),
        ]
        .iter()
        .fold(String::new(), |usage, line| usage + line + "\n")
    }
}

fn optional<T: FromStr>(
    value: Option<&str>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::NotANumber {
            name,
            value: raw.to_string(),
        }),
    }
}
