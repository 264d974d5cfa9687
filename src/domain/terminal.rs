//! Terminal layout descriptor: the input shape the Bay Layout Builder
//! (`crate::layout`) consumes to materialize per-bay records.

use crate::domain::category::Category;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// A terminal identifier: DOM, INT, or the remote BUS "terminal".
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum BayType {
    #[serde(rename = "A")]
    Dom,
    #[serde(rename = "B")]
    Int,
    #[serde(rename = "BUS")]
    Bus,
}

impl fmt::Display for BayType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BayType::Dom => write!(f, "A"),
            BayType::Int => write!(f, "B"),
            BayType::Bus => write!(f, "BUS"),
        }
    }
}

/// Bay size class within a terminal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize)]
pub enum BaySize {
    L,
    S,
    B,
}

impl fmt::Display for BaySize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let c = match self {
            BaySize::L => 'L',
            BaySize::S => 'S',
            BaySize::B => 'B',
        };
        write!(f, "{c}")
    }
}

/// Per-size-class configuration: how many bays, which categories they admit,
/// and the walking-distance unit used to derive each bay's `dist`.
#[derive(Debug, Clone, Deserialize)]
pub struct SizeClassConfig {
    pub num: u32,
    pub cat: (Category, Category),
    pub dist: f64,
}

/// One terminal's full layout: its size classes, in the order bays are
/// numbered (L bays first, then S, then B).
#[derive(Debug, Clone, Deserialize, Default)]
pub struct TerminalConfig {
    #[serde(rename = "L")]
    pub l: Option<SizeClassConfig>,
    #[serde(rename = "S")]
    pub s: Option<SizeClassConfig>,
    #[serde(rename = "B")]
    pub b: Option<SizeClassConfig>,
}

/// The whole-airport layout descriptor: `{terminal -> {size-class -> config}}`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct TerminalLayoutConfig {
    #[serde(rename = "A")]
    pub dom: TerminalConfig,
    #[serde(rename = "B")]
    pub int: TerminalConfig,
    #[serde(rename = "BUS")]
    pub bus: TerminalConfig,
}

impl TerminalLayoutConfig {
    pub fn config_for(&self, ter: BayType) -> &TerminalConfig {
        match ter {
            BayType::Dom => &self.dom,
            BayType::Int => &self.int,
            BayType::Bus => &self.bus,
        }
    }

    pub fn terminals(&self) -> [BayType; 3] {
        [BayType::Dom, BayType::Int, BayType::Bus]
    }
}

/// Convenience alias: an ordered map from bay index to its admissible
/// category set, used while building bays (indices must stay monotone).
pub type CategoryOrder = BTreeMap<u32, Vec<Category>>;
