//! Top-level error taxonomy.
//!
//! Each fallible component gets its own small `Display`-implementing enum,
//! following the teacher's convention (`VehicleError`, `FlightPlanError`,
//! ...) rather than a single catch-all `anyhow::Error`. [`BapError`]
//! aggregates them for `main` and integration tests.

use std::fmt;

/// Failure to load or validate one of the JSON input tables.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The named file could not be read from disk.
    Io { path: String, reason: String },
    /// The file was read but did not parse as the expected shape.
    Malformed { path: String, reason: String },
    /// A required field was missing or held an invalid value.
    InvalidField { path: String, field: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Io { path, reason } => write!(f, "could not read {path}: {reason}"),
            ConfigError::Malformed { path, reason } => {
                write!(f, "could not parse {path}: {reason}")
            }
            ConfigError::InvalidField { path, field } => {
                write!(f, "{path} has invalid or missing field {field:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Failure during synthetic schedule generation.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorError {
    /// No aircraft category at all satisfies a zone's weight table.
    EmptyWeights { terminal: String },
    /// The rejection loop in `make_t` could not find a feasible (arr, len)
    /// sample within a bounded number of attempts.
    SamplingExhausted { zone: String },
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GeneratorError::EmptyWeights { terminal } => {
                write!(f, "no AC weights configured for terminal {terminal}")
            }
            GeneratorError::SamplingExhausted { zone } => {
                write!(f, "could not sample a feasible turn for zone {zone}")
            }
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Failure while assembling the MILP formulation.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// A turn references an aircraft type id absent from the aircraft table.
    UnknownAircraft { turn: String },
    /// A turn's category has no compatible bay anywhere in the layout.
    NoCompatibleBay { turn: String },
    /// The cost table has no entry for a category that appears in the schedule.
    MissingCost { turn: String },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ModelError::UnknownAircraft { turn } => {
                write!(f, "turn {turn} references an unknown aircraft type")
            }
            ModelError::NoCompatibleBay { turn } => {
                write!(f, "turn {turn} has no compatible bay in any terminal")
            }
            ModelError::MissingCost { turn } => {
                write!(f, "turn {turn}'s aircraft category has no cost-table entry")
            }
        }
    }
}

impl std::error::Error for ModelError {}

/// Failure while solving or reading back a formulation.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverError {
    /// The solver determined the problem has no feasible solution.
    Infeasible { detail: String },
    /// The configured external solver binary could not be spawned.
    Unavailable { reason: String },
    /// The solver's backend returned an error that isn't infeasibility.
    Failed { reason: String },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolverError::Infeasible { detail } => write!(f, "infeasible: {detail}"),
            SolverError::Unavailable { reason } => write!(f, "solver unavailable: {reason}"),
            SolverError::Failed { reason } => write!(f, "solver failed: {reason}"),
        }
    }
}

impl std::error::Error for SolverError {}

/// Aggregate error type propagated out of the crate's top-level pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum BapError {
    Config(ConfigError),
    Generator(GeneratorError),
    Model(ModelError),
    Solver(SolverError),
}

impl fmt::Display for BapError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BapError::Config(e) => write!(f, "configuration error: {e}"),
            BapError::Generator(e) => write!(f, "schedule generation error: {e}"),
            BapError::Model(e) => write!(f, "model error: {e}"),
            BapError::Solver(e) => write!(f, "solver error: {e}"),
        }
    }
}

impl std::error::Error for BapError {}

impl From<ConfigError> for BapError {
    fn from(e: ConfigError) -> Self {
        BapError::Config(e)
    }
}

impl From<GeneratorError> for BapError {
    fn from(e: GeneratorError) -> Self {
        BapError::Generator(e)
    }
}

impl From<ModelError> for BapError {
    fn from(e: ModelError) -> Self {
        BapError::Model(e)
    }
}

impl From<SolverError> for BapError {
    fn from(e: SolverError) -> Self {
        BapError::Solver(e)
    }
}
