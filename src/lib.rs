//! Bay Assignment Problem solver.
//!
//! Given a day's flight schedule and an airport's gate layout, assigns each
//! aircraft turnaround to a bay (or a remote "no bay" fallback) minimizing
//! walking-distance cost subject to compatibility, temporal non-overlap,
//! wingtip adjacency, and optional mid-stay towing.

#[macro_use]
pub mod macros;

pub mod config;
pub mod costs;
pub mod decomposer;
pub mod domain;
pub mod error;
pub mod inputs;
pub mod layout;
pub mod model;
pub mod schedule;
pub mod solver;

pub use crate::config::Config;
pub use crate::error::BapError;

use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize the logger from the path named in `config`. Safe to call more
/// than once; only the first call takes effect.
pub fn init_logger(config: &Config) {
    INIT_LOGGER.call_once(|| {
        let log_cfg: &str = config.log_config.as_str();
        if let Err(e) = log4rs::init_file(log_cfg, Default::default()) {
            panic!(
                "(init_logger) could not parse log config {} found in config {:?}: {}.",
                log_cfg, config, e
            );
        }
    });
}
