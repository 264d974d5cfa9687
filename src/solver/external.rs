//! External solver process backend: spawns a configured MIP solver binary
//! against a written LP file (in the spirit of the original program's
//! `CPLEX_CMD(path=...)`), and reads back a simple `name value` solution
//! dump from its stdout.

use crate::error::SolverError;
use std::collections::HashMap;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

pub struct ExternalResult {
    pub raw_values: HashMap<String, f64>,
    pub solve_time_secs: f64,
}

pub fn solve(solver_path: &str, lp_path: &Path) -> Result<ExternalResult, SolverError> {
    solver_info!("(solve) invoking external solver {solver_path} on {}", lp_path.display());
    let start = Instant::now();

    let output = Command::new(solver_path)
        .arg(lp_path)
        .output()
        .map_err(|e| SolverError::Unavailable { reason: e.to_string() })?;
    let solve_time_secs = start.elapsed().as_secs_f64();

    if !output.status.success() {
        return Err(SolverError::Failed { reason: String::from_utf8_lossy(&output.stderr).into_owned() });
    }

    let text = String::from_utf8_lossy(&output.stdout);
    let mut raw_values = HashMap::new();
    for line in text.lines() {
        let mut fields = line.split_whitespace();
        if let (Some(name), Some(raw_value)) = (fields.next(), fields.next()) {
            if let Ok(value) = raw_value.parse::<f64>() {
                raw_values.insert(name.to_string(), value);
            }
        }
    }

    Ok(ExternalResult { raw_values, solve_time_secs })
}
