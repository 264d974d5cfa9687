//! The abstract MILP formulation: variables, objective, and constraints,
//! independent of any solver backend. `src/solver/*` turns this into either
//! an LP text file or an in-process `good_lp` model.

use crate::domain::{BayKey, BayType};
use crate::domain::TurnId;
use std::fmt;

/// One decision variable: a turn-bay assignment, a mandatory-tow flag, or a
/// no-bay fallback flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VarId {
    /// `x[i,t,k]`
    Turn(TurnId, BayKey),
    /// `w[f]`
    Tow(String),
    /// `y[i]`
    NoBay(TurnId),
}

impl VarId {
    /// A stable, LP-dialect-safe identifier: alphanumerics and underscores
    /// only, mirroring the original program's `x_<flight>_<terminal>_<bay>`
    /// naming.
    pub fn lp_name(&self) -> String {
        match self {
            VarId::Turn(id, bay) => format!(
                "x_{}_{}_{}",
                sanitize(&id.to_string()),
                terminal_code(bay.terminal),
                bay.index
            ),
            VarId::Tow(flight) => format!("w_{}", sanitize(flight)),
            VarId::NoBay(id) => format!("y_{}", sanitize(&id.to_string())),
        }
    }
}

impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.lp_name())
    }
}

fn terminal_code(ter: BayType) -> &'static str {
    match ter {
        BayType::Dom => "A",
        BayType::Int => "B",
        BayType::Bus => "BUS",
    }
}

fn sanitize(s: &str) -> String {
    s.chars().map(|c| if c.is_alphanumeric() { c } else { '_' }).collect()
}

/// Relational sense of a linear constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    Eq,
    Le,
}

/// One named linear constraint: `Σ terms <sense> rhs`.
#[derive(Debug, Clone)]
pub struct Constraint {
    pub name: String,
    pub terms: Vec<(VarId, f64)>,
    pub sense: Sense,
    pub rhs: f64,
}

impl Constraint {
    pub fn eq(name: impl Into<String>, terms: Vec<(VarId, f64)>, rhs: f64) -> Self {
        Constraint { name: name.into(), terms, sense: Sense::Eq, rhs }
    }

    pub fn le(name: impl Into<String>, terms: Vec<(VarId, f64)>, rhs: f64) -> Self {
        Constraint { name: name.into(), terms, sense: Sense::Le, rhs }
    }
}

/// The complete abstract formulation: every binary variable declared, the
/// minimization objective, and every constraint, in deterministic order.
#[derive(Debug, Clone, Default)]
pub struct Formulation {
    pub variables: Vec<VarId>,
    pub objective: Vec<(VarId, f64)>,
    pub constraints: Vec<Constraint>,
}
