//! Loads and validates the six JSON input tables named in `Config`
//! (spec.md §6, "Input data files"), deserializing each once at startup.

use crate::config::Config;
use crate::domain::{AdjacencyTable, AircraftTable, AircraftType, CostTable, RawAdjacencyTable, TerminalLayoutConfig};
use crate::error::ConfigError;
use crate::schedule::{Features, RawScheduleParams, ScheduleParams};
use chrono::NaiveDate;

/// Every table the core needs, loaded once and held for the run.
pub struct Inputs {
    pub aircraft: AircraftTable,
    pub terminals: TerminalLayoutConfig,
    pub adjacency: AdjacencyTable,
    pub costs: CostTable,
    pub schedule_params: ScheduleParams,
    pub features: Features,
}

pub fn load(config: &Config, date: NaiveDate) -> Result<Inputs, ConfigError> {
    let aircraft_entries: Vec<AircraftType> = read_json(&config.aircraft_table_path)?;
    let aircraft = AircraftTable::from_entries(aircraft_entries);

    let terminals: TerminalLayoutConfig = read_json(&config.terminal_layout_path)?;

    let raw_adjacency: RawAdjacencyTable = read_json(&config.adjacency_table_path)?;
    let adjacency = AdjacencyTable::from_raw(&raw_adjacency, &config.adjacency_table_path)?;

    let costs: CostTable = read_json(&config.cost_table_path)?;

    let raw_schedule: RawScheduleParams = read_json(&config.schedule_params_path)?;
    let schedule_params = ScheduleParams::resolve(date, &raw_schedule);

    let features: Features = read_json(&config.features_path)?;

    Ok(Inputs { aircraft, terminals, adjacency, costs, schedule_params, features })
}

fn read_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io { path: path.to_string(), reason: e.to_string() })?;
    serde_json::from_str(&text).map_err(|e| ConfigError::Malformed { path: path.to_string(), reason: e.to_string() })
}
