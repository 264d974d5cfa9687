//! Probability catalog and terminal-weights mixture model consumed by the
//! Schedule Generator. Shapes mirror the original `features.json` file:
//! a `prob` map keyed by time-zone id and a `weights` map keyed by terminal.

use crate::domain::terminal::BayType;
use serde::Deserialize;
use std::collections::HashMap;

/// One time-zone's arrival-time and turnaround-length Gaussian model, plus
/// the weight used when sampling a zone and the terminal that zone belongs
/// to.
#[derive(Debug, Clone, Deserialize)]
pub struct ProbabilityZone {
    /// relative weight used when sampling this zone among all zones
    pub weight: f64,
    /// the terminal this zone's flights belong to
    #[serde(rename = "type")]
    pub terminal: BayType,
    /// mean arrival time of day, as (hour, minute)
    pub mean_arr: (u32, u32),
    /// std-dev of the arrival offset, in minutes
    pub std_arr: f64,
    /// mean turnaround length, in minutes
    pub mean_len: i64,
    /// std-dev of the turnaround-length offset, in minutes
    pub std_len: f64,
}

/// Per-terminal mixture weights: which aircraft categories appear, and the
/// probabilities of the optional `tow`/`pref` flags.
#[derive(Debug, Clone, Deserialize)]
pub struct TerminalWeights {
    /// aircraft-id -> relative sampling weight
    #[serde(rename = "AC")]
    pub aircraft: HashMap<u32, f64>,
    /// probability that a mandatory-tow flag is attached to an eligible long turn
    #[serde(default)]
    pub tow: f64,
    /// probability that a preferred-bay hint is attached to an eligible turn
    #[serde(default)]
    pub pref: f64,
}

/// The full features catalog: `prob` (zones) + `weights` (terminal mixtures).
#[derive(Debug, Clone, Deserialize)]
pub struct Features {
    pub prob: HashMap<String, ProbabilityZone>,
    pub weights: HashMap<BayType, TerminalWeights>,
}
