//! Contains the logic for logging statistics of a run.
mod statistic_logging;

pub use statistic_logging::*;
