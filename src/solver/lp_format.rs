//! Serializes a [`Formulation`] to a standard CPLEX-dialect LP text file —
//! the same textual format the original program's `writeLP()` call produced,
//! consumed either as a record of the run or by the external solver backend.

use crate::model::{Formulation, Sense};

pub fn write_lp(formulation: &Formulation) -> String {
    let mut out = String::new();
    out.push_str("\\* Bay_Assignment *\\\n");
    out.push_str("Minimize\n");
    out.push_str(&format!(" obj_fun: {}\n", format_terms(&formulation.objective)));

    out.push_str("Subject To\n");
    for constraint in &formulation.constraints {
        let sense = match constraint.sense {
            Sense::Eq => "=",
            Sense::Le => "<=",
        };
        out.push_str(&format!(
            " {}: {} {} {}\n",
            constraint.name,
            format_terms(&constraint.terms),
            sense,
            format_number(constraint.rhs)
        ));
    }

    out.push_str("Binary\n");
    for var in &formulation.variables {
        out.push_str(&format!(" {}\n", var.lp_name()));
    }
    out.push_str("End\n");
    out
}

fn format_terms(terms: &[(crate::model::VarId, f64)]) -> String {
    let mut parts = Vec::with_capacity(terms.len());
    for (var, coef) in terms {
        let sign = if *coef < 0.0 { "-" } else { "+" };
        let magnitude = coef.abs();
        if (magnitude - 1.0).abs() < 1e-9 {
            parts.push(format!("{sign} {var}"));
        } else {
            parts.push(format!("{sign} {} {var}", format_number(magnitude)));
        }
    }
    parts.join(" ")
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{n:.0}")
    } else {
        format!("{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BayKey, BayType};
    use crate::model::{Constraint, VarId};

    #[test]
    fn test_writes_sections_in_order() {
        let bay = BayKey::new(BayType::Dom, 1);
        let var = VarId::Turn(crate::domain::TurnId::Bare("1".into()), bay);
        let mut formulation = Formulation::default();
        formulation.variables.push(var.clone());
        formulation.objective.push((var.clone(), 180.0));
        formulation.constraints.push(Constraint::eq("AssignConstFlight1", vec![(var, 1.0)], 1.0));

        let lp = write_lp(&formulation);
        let minimize_at = lp.find("Minimize").unwrap();
        let subject_at = lp.find("Subject To").unwrap();
        let binary_at = lp.find("Binary").unwrap();
        let end_at = lp.find("End").unwrap();
        assert!(minimize_at < subject_at && subject_at < binary_at && binary_at < end_at);
        assert!(lp.contains("AssignConstFlight1: + x_1_A_1 = 1"));
    }
}
