//! MILP Model Builder: assembles the abstract [`Formulation`] from a
//! decomposed schedule, its cost matrix, the bay layout, and the adjacency
//! table (spec.md §4.5).
//!
//! Variable and constraint ordering is made deterministic end to end (turns
//! sorted by their display id, bays already iterate in `BayKey` order out of
//! the `BTreeMap`-backed layout) so the same seed always produces a
//! byte-identical LP file (spec.md §8, determinism property).

use crate::costs::CostMatrix;
use crate::decomposer::TurnTable;
use crate::domain::{AdjacencyTable, AircraftTable, BayKey, BayLayout, BayType, Category, SplitKind, Turn, TurnId};
use crate::error::ModelError;
use crate::model::types::{Constraint, Formulation, VarId};
use chrono::Duration;
use std::collections::HashSet;

pub fn build(
    turns: &TurnTable,
    bays: &BayLayout,
    costs: &CostMatrix,
    ac_table: &AircraftTable,
    adj: &AdjacencyTable,
    time_buffer: Duration,
) -> Result<Formulation, ModelError> {
    let mut formulation = Formulation::default();

    let all_turns = sorted_turns(turns.all_turns());
    let short_turns = sorted_turns(turns.short_turns().map(|(id, t)| (TurnId::Bare(id.clone()), t)));
    let full_turns = sorted_turns(turns.full_turns().map(|(id, t)| (TurnId::Bare(id.clone()), t)));

    build_objective(&mut formulation, &all_turns, &full_turns, costs)?;
    assign_short(&mut formulation, &short_turns, costs);
    assign_long(&mut formulation, &full_turns, costs);
    mandatory_tow(&mut formulation, &full_turns);

    let overlapping_pairs = sweep_overlapping_pairs(&all_turns, time_buffer);
    time_conflict(&mut formulation, &overlapping_pairs, costs);
    adjacency(&mut formulation, &overlapping_pairs, costs, bays, adj, ac_table, turns)?;

    model_info!(
        "(build) {} variables, {} constraints",
        formulation.variables.len(),
        formulation.constraints.len()
    );
    Ok(formulation)
}

fn sorted_turns<'a>(iter: impl Iterator<Item = (TurnId, &'a Turn)>) -> Vec<(TurnId, &'a Turn)> {
    let mut v: Vec<_> = iter.collect();
    v.sort_by(|a, b| a.0.to_string().cmp(&b.0.to_string()));
    v
}

fn sorted_compatible(costs: &CostMatrix, id: &TurnId) -> Vec<(BayKey, f64)> {
    let mut v: Vec<(BayKey, f64)> = costs.compatible_bays(id).collect();
    v.sort_by_key(|(bay, _)| *bay);
    v
}

/// Declares every variable (by walking the cost matrix's compatible-bay
/// lists) and accumulates the matching objective term in the same pass.
fn build_objective(
    formulation: &mut Formulation,
    all_turns: &[(TurnId, &Turn)],
    full_turns: &[(TurnId, &Turn)],
    costs: &CostMatrix,
) -> Result<(), ModelError> {
    for (id, _) in all_turns {
        for (bay, cost) in sorted_compatible(costs, id) {
            let var = VarId::Turn(id.clone(), bay);
            formulation.variables.push(var.clone());
            formulation.objective.push((var, cost));
        }
    }

    for (id, _) in full_turns {
        let flight = id.parent().to_string();
        let cost = costs.tow(&flight).ok_or_else(|| ModelError::MissingCost { turn: flight.clone() })?;
        let var = VarId::Tow(flight);
        formulation.variables.push(var.clone());
        formulation.objective.push((var, cost));
    }

    for (id, _) in all_turns.iter().filter(|(id, _)| !matches!(id, TurnId::Split(..))) {
        if let Some(cost) = costs.nobay(id) {
            let var = VarId::NoBay(id.clone());
            formulation.variables.push(var.clone());
            formulation.objective.push((var, cost));
        }
    }

    Ok(())
}

/// Assignment (short): spec.md §4.5 family 2.
fn assign_short(formulation: &mut Formulation, short_turns: &[(TurnId, &Turn)], costs: &CostMatrix) {
    for (id, _) in short_turns {
        let mut terms: Vec<(VarId, f64)> = sorted_compatible(costs, id)
            .into_iter()
            .map(|(bay, _)| (VarId::Turn(id.clone(), bay), 1.0))
            .collect();
        terms.push((VarId::NoBay(id.clone()), 1.0));
        formulation.constraints.push(Constraint::eq(format!("AssignConstFlight{id}"), terms, 1.0));
    }
}

/// Assignment (long): spec.md §4.5 family 3.
fn assign_long(formulation: &mut Formulation, full_turns: &[(TurnId, &Turn)], costs: &CostMatrix) {
    for (full_id, _) in full_turns {
        let flight = full_id.parent().to_string();

        let mut full_terms: Vec<(VarId, f64)> = sorted_compatible(costs, full_id)
            .into_iter()
            .map(|(bay, _)| (VarId::Turn(full_id.clone(), bay), 1.0))
            .collect();
        full_terms.push((VarId::Tow(flight.clone()), 1.0));
        full_terms.push((VarId::NoBay(full_id.clone()), 1.0));
        formulation.constraints.push(Constraint::eq(format!("AssignConstraintFullFlight{flight}"), full_terms, 1.0));

        for (kind, suffix) in [(SplitKind::Arrival, "A"), (SplitKind::Departure, "D")] {
            let split_id = TurnId::Split(flight.clone(), kind);
            let mut terms: Vec<(VarId, f64)> = sorted_compatible(costs, &split_id)
                .into_iter()
                .filter(|(bay, _)| bay.terminal != BayType::Bus)
                .map(|(bay, _)| (VarId::Turn(split_id.clone(), bay), 1.0))
                .collect();
            terms.push((VarId::Tow(flight.clone()), -1.0));
            formulation.constraints.push(Constraint::eq(format!("AssignConstSplitFlight{flight}{suffix}"), terms, 0.0));
        }

        let parking_id = TurnId::Split(flight.clone(), SplitKind::Parking);
        let mut park_terms: Vec<(VarId, f64)> = sorted_compatible(costs, &parking_id)
            .into_iter()
            .filter(|(bay, _)| bay.terminal == BayType::Bus)
            .map(|(bay, _)| (VarId::Turn(parking_id.clone(), bay), 1.0))
            .collect();
        park_terms.push((VarId::Tow(flight.clone()), -1.0));
        formulation.constraints.push(Constraint::eq(format!("AssignConstSplitFlight{flight}P"), park_terms, 0.0));
    }
}

/// Mandatory tow: spec.md §4.5 family 4.
fn mandatory_tow(formulation: &mut Formulation, full_turns: &[(TurnId, &Turn)]) {
    for (id, turn) in full_turns {
        if turn.tow {
            let flight = id.parent().to_string();
            formulation
                .constraints
                .push(Constraint::eq(format!("TowConstFlight{flight}"), vec![(VarId::Tow(flight), 1.0)], 1.0));
        }
    }
}

/// Sweep turns sorted by ETA and collect every pair whose buffered
/// intervals overlap and whose parents differ — the shared candidate set for
/// both the time-conflict and adjacency constraint families (spec.md §9,
/// "rely on an O(|M| log |M|) sweep by ETA").
fn sweep_overlapping_pairs(all_turns: &[(TurnId, &Turn)], buf: Duration) -> Vec<(TurnId, TurnId)> {
    let mut sorted: Vec<&(TurnId, &Turn)> = all_turns.iter().collect();
    sorted.sort_by_key(|(_, t)| t.eta);

    let mut pairs = Vec::new();
    for i in 0..sorted.len() {
        let (id1, t1) = sorted[i];
        let (_, end1) = t1.buffered_interval(buf);
        for (id2, t2) in &sorted[i + 1..] {
            if t2.eta - buf > end1 {
                break;
            }
            if id1.parent() == id2.parent() {
                continue;
            }
            if t1.overlaps(t2, buf) {
                pairs.push((id1.clone(), (*id2).clone()));
            }
        }
    }
    pairs
}

/// Time conflict: spec.md §4.5 family 5.
fn time_conflict(formulation: &mut Formulation, pairs: &[(TurnId, TurnId)], costs: &CostMatrix) {
    for (id1, id2) in pairs {
        let bays1 = sorted_compatible(costs, id1);
        let bays2: HashSet<BayKey> = sorted_compatible(costs, id2).into_iter().map(|(b, _)| b).collect();
        for (bay, _) in bays1 {
            if bays2.contains(&bay) {
                formulation.constraints.push(Constraint::le(
                    format!("TimeConstTer{}Bay{}Flights{}&{}", terminal_code(bay.terminal), bay.index, id1, id2),
                    vec![(VarId::Turn(id1.clone(), bay), 1.0), (VarId::Turn(id2.clone(), bay), 1.0)],
                    1.0,
                ));
            }
        }
    }
}

/// Adjacency (wake separation): spec.md §4.5 family 6.
fn adjacency(
    formulation: &mut Formulation,
    pairs: &[(TurnId, TurnId)],
    costs: &CostMatrix,
    bays: &BayLayout,
    adj: &AdjacencyTable,
    ac_table: &AircraftTable,
    turns: &TurnTable,
) -> Result<(), ModelError> {
    for (id1, id2) in pairs {
        let cat1 = turn_category(id1, turns, ac_table)?;
        let cat2 = turn_category(id2, turns, ac_table)?;

        for (bay1, _) in sorted_compatible(costs, id1) {
            let neighbor = bay1.adjacent();
            let Some(bay2) = bays.get(neighbor) else { continue };
            if !sorted_compatible(costs, id2).iter().any(|(b, _)| *b == neighbor) {
                continue;
            }
            let size1 = bays.get(bay1).expect("bay1 came from a compatible-bay lookup against this layout").size;
            if adj.forbids(bay1.terminal, size1, bay2.size, cat1, cat2) {
                formulation.constraints.push(Constraint::eq(
                    format!("AdjConstTer{}Bay{}Flights{}&{}", terminal_code(bay1.terminal), bay1.index, id1, id2),
                    vec![(VarId::Turn(id1.clone(), bay1), 1.0), (VarId::Turn(id2.clone(), neighbor), 1.0)],
                    0.0,
                ));
            }
        }
    }
    Ok(())
}

fn turn_category(id: &TurnId, turns: &TurnTable, ac_table: &AircraftTable) -> Result<Category, ModelError> {
    let turn = turns
        .lookup(id)
        .unwrap_or_else(|| panic!("every turn id in the candidate pair set was produced from this turn table"));
    ac_table
        .get(turn.aircraft_id)
        .map(|ac| ac.cat)
        .ok_or_else(|| ModelError::UnknownAircraft { turn: id.to_string() })
}

fn terminal_code(ter: BayType) -> &'static str {
    match ter {
        BayType::Dom => "A",
        BayType::Int => "B",
        BayType::Bus => "BUS",
    }
}
