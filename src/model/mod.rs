//! MILP Model Builder: the abstract formulation plus the constraint-family
//! logic that assembles it from a decomposed schedule.

pub mod builder;
pub mod types;

pub use builder::build;
pub use types::{Constraint, Formulation, Sense, VarId};
