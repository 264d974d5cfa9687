//! In-process MILP solving via `good_lp`'s HiGHS backend.

use crate::error::SolverError;
use crate::model::{Formulation, Sense, VarId};
use good_lp::solvers::highs::highs;
use good_lp::{variable, variables, Expression, Solution, SolverModel};
use std::collections::HashMap;
use std::time::Instant;

/// A solved formulation: every variable's 0/1 valuation plus the objective.
#[derive(Debug)]
pub struct SolveResult {
    pub values: HashMap<VarId, f64>,
    pub objective: f64,
    pub solve_time_secs: f64,
}

impl SolveResult {
    pub fn assigned(&self, var: &VarId) -> bool {
        self.values.get(var).copied().unwrap_or(0.0) > 0.5
    }
}

pub fn solve(formulation: &Formulation) -> Result<SolveResult, SolverError> {
    let mut vars = variables!();
    let mut var_map: HashMap<VarId, good_lp::Variable> = HashMap::with_capacity(formulation.variables.len());
    for id in &formulation.variables {
        let handle = vars.add(variable().integer().min(0).max(1));
        var_map.insert(id.clone(), handle);
    }

    let mut objective = Expression::from(0.0);
    for (id, coef) in &formulation.objective {
        objective += *coef * var_map[id];
    }

    let mut model = vars.minimise(objective).using(highs);

    for constraint in &formulation.constraints {
        let mut expr = Expression::from(0.0);
        for (id, coef) in &constraint.terms {
            expr += *coef * var_map[id];
        }
        model = match constraint.sense {
            Sense::Eq => model.with(good_lp::constraint!(expr == constraint.rhs)),
            Sense::Le => model.with(good_lp::constraint!(expr <= constraint.rhs)),
        };
    }

    let start = Instant::now();
    let solution = model.solve().map_err(|e| {
        let detail = format!("{e:?}");
        if detail.to_lowercase().contains("infeasible") {
            SolverError::Infeasible { detail }
        } else {
            SolverError::Failed { reason: detail }
        }
    })?;
    let solve_time_secs = start.elapsed().as_secs_f64();

    let values: HashMap<VarId, f64> = var_map.iter().map(|(id, v)| (id.clone(), solution.value(*v))).collect();
    let objective = formulation
        .objective
        .iter()
        .map(|(id, coef)| coef * values.get(id).copied().unwrap_or(0.0))
        .sum();

    solver_info!("(solve) HiGHS finished in {solve_time_secs:.3}s, objective={objective}");
    Ok(SolveResult { values, objective, solve_time_secs })
}
