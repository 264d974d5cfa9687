//! Solver Adapter: writes the formulation to an LP file, then solves it
//! either in-process via HiGHS or by shelling out to a configured external
//! solver binary, and reads the valuation back (spec.md §4.6).

pub mod external;
pub mod highs_adapter;
pub mod lp_format;

use crate::error::SolverError;
use crate::model::{Formulation, VarId};
use std::collections::HashMap;
use std::path::Path;

/// A solved formulation, backend-independent.
#[derive(Debug)]
pub struct Assignment {
    pub values: HashMap<VarId, f64>,
    pub objective: f64,
    pub solve_time_secs: f64,
}

impl Assignment {
    pub fn assigned(&self, var: &VarId) -> bool {
        self.values.get(var).copied().unwrap_or(0.0) > 0.5
    }
}

/// Write `formulation` to `lp_path` and solve it. Uses the configured
/// external solver binary if one is given, otherwise solves in-process via
/// HiGHS.
pub fn solve(formulation: &Formulation, lp_path: &Path, external_solver: Option<&str>) -> Result<Assignment, SolverError> {
    let lp_text = lp_format::write_lp(formulation);
    std::fs::write(lp_path, &lp_text).map_err(|e| SolverError::Failed { reason: format!("could not write {}: {e}", lp_path.display()) })?;

    match external_solver {
        Some(path) => {
            let result = external::solve(path, lp_path)?;
            let values: HashMap<VarId, f64> = formulation
                .variables
                .iter()
                .filter_map(|id| result.raw_values.get(&id.lp_name()).map(|v| (id.clone(), *v)))
                .collect();
            let objective = formulation
                .objective
                .iter()
                .map(|(id, coef)| coef * values.get(id).copied().unwrap_or(0.0))
                .sum();
            Ok(Assignment { values, objective, solve_time_secs: result.solve_time_secs })
        }
        None => {
            let result = highs_adapter::solve(formulation)?;
            Ok(Assignment { values: result.values, objective: result.objective, solve_time_secs: result.solve_time_secs })
        }
    }
}
