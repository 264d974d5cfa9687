//! Immutable domain model: aircraft categories, bays, terminals, and turns.

pub mod adjacency;
pub mod aircraft;
pub mod bay;
pub mod category;
pub mod cost_table;
pub mod terminal;
pub mod turn;

pub use adjacency::{AdjacencyTable, RawAdjacencyTable};
pub use aircraft::{AircraftTable, AircraftType};
pub use bay::{Bay, BayKey, BayLayout};
pub use category::Category;
pub use cost_table::CostTable;
pub use terminal::{BaySize, BayType, TerminalLayoutConfig};
pub use turn::{Preference, SplitKind, Turn, TurnClass, TurnId};
