//! # Config
//!
//! Define and implement config options for the crate.

use config::{ConfigError as CrateConfigError, Environment};
use dotenv::dotenv;
use serde::Deserialize;

/// Struct holding configuration options.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// path to the aircraft table JSON file
    pub aircraft_table_path: String,

    /// path to the terminal layout JSON file
    pub terminal_layout_path: String,

    /// path to the wake/wingtip adjacency table JSON file
    pub adjacency_table_path: String,

    /// path to the tow/no-bay cost table JSON file
    pub cost_table_path: String,

    /// path to the scheduling parameters (tstart/tend/tmin/ttow) JSON file
    pub schedule_params_path: String,

    /// path to the probability-zone and terminal-weights features JSON file
    pub features_path: String,

    /// number of flights to generate when none is given explicitly
    pub default_nflights: usize,

    /// RNG seed for the synthetic schedule generator
    pub seed: u64,

    /// minutes of buffer applied to both sides of a turn's occupied interval
    /// before testing time-conflict and adjacency overlap
    pub time_buffer_minutes: i64,

    /// where the rendered LP-format problem file is written
    pub lp_output_path: String,

    /// optional path to an external solver binary (e.g. a CPLEX install); if
    /// unset, the in-process HiGHS backend is used
    #[serde(default)]
    pub solver_path: Option<String>,

    /// path to log configuration YAML file
    pub log_config: String,
}

impl Default for Config {
    fn default() -> Self {
        log::warn!("(default) Creating Config object with default values.");
        Self::new()
    }
}

impl Config {
    /// Default values for Config.
    pub fn new() -> Self {
        Config {
            aircraft_table_path: String::from("programdata/ac.json"),
            terminal_layout_path: String::from("programdata/terminals.json"),
            adjacency_table_path: String::from("programdata/adj.json"),
            cost_table_path: String::from("programdata/costs.json"),
            schedule_params_path: String::from("programdata/scheduling.json"),
            features_path: String::from("programdata/features.json"),
            default_nflights: 50,
            seed: 0,
            time_buffer_minutes: 15,
            lp_output_path: String::from("BayAssignmentProblem.lp"),
            solver_path: None,
            log_config: String::from("log4rs.yaml"),
        }
    }

    /// Create a new `Config` object using environment variables.
    pub fn try_from_env() -> Result<Self, CrateConfigError> {
        // read .env file if present
        dotenv().ok();
        let default_config = Config::default();

        config::Config::builder()
            .set_default("aircraft_table_path", default_config.aircraft_table_path)?
            .set_default(
                "terminal_layout_path",
                default_config.terminal_layout_path,
            )?
            .set_default(
                "adjacency_table_path",
                default_config.adjacency_table_path,
            )?
            .set_default("cost_table_path", default_config.cost_table_path)?
            .set_default(
                "schedule_params_path",
                default_config.schedule_params_path,
            )?
            .set_default("features_path", default_config.features_path)?
            .set_default("default_nflights", default_config.default_nflights as i64)?
            .set_default("seed", default_config.seed as i64)?
            .set_default(
                "time_buffer_minutes",
                default_config.time_buffer_minutes,
            )?
            .set_default("lp_output_path", default_config.lp_output_path)?
            .set_default("log_config", default_config.log_config)?
            .add_source(Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }
}
