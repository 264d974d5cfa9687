//! Cost Matrix Builder: precomputes the objective-function coefficients for
//! every compatible (turn, bay) pair, plus the tow and no-bay cost of every
//! short/long-full turn (spec.md §4.4).
//!
//! Incompatible (turn, bay) pairs are pruned from the index space entirely
//! rather than given a cost and then forced to zero by a constraint — see
//! DESIGN.md for why this is equivalent to, and simpler than, the source's
//! dense cross-product.

use crate::domain::{AircraftTable, Bay, BayKey, BayLayout, BayType};
use crate::domain::{AircraftType, Turn, TurnId};
use crate::error::ModelError;
use std::collections::HashMap;

/// Surcharge applied when a turn is assigned a bay outside its home
/// terminal (and not the remote BUS terminal).
pub const TER_PENALTY: f64 = 100.0;

#[derive(Debug, Default)]
pub struct CostMatrix {
    turn_bay: HashMap<(TurnId, BayKey), f64>,
    tow: HashMap<String, f64>,
    nobay: HashMap<TurnId, f64>,
}

impl CostMatrix {
    pub fn turn_bay(&self, id: &TurnId, bay: &BayKey) -> Option<f64> {
        self.turn_bay.get(&(id.clone(), *bay)).copied()
    }

    pub fn compatible_bays(&self, id: &TurnId) -> impl Iterator<Item = (BayKey, f64)> + '_ {
        let id = id.clone();
        self.turn_bay.iter().filter_map(move |(key, cost)| {
            if key.0 == id {
                Some((key.1, *cost))
            } else {
                None
            }
        })
    }

    pub fn tow(&self, flight: &str) -> Option<f64> {
        self.tow.get(flight).copied()
    }

    pub fn nobay(&self, id: &TurnId) -> Option<f64> {
        self.nobay.get(id).copied()
    }
}

pub fn build(
    turns: &crate::decomposer::TurnTable,
    bays: &BayLayout,
    cost_table: &crate::domain::CostTable,
    ac_table: &AircraftTable,
) -> Result<CostMatrix, ModelError> {
    let mut matrix = CostMatrix::default();

    for (id, turn) in turns.all_turns() {
        let aircraft = lookup_aircraft(ac_table, turn, &id)?;
        let mut compatible_count = 0usize;

        for bay in bays.iter() {
            if id.is_parking() && bay.key.terminal != BayType::Bus {
                continue;
            }
            if !bay.admits(aircraft.cat) {
                continue;
            }
            compatible_count += 1;
            let cost = turn_bay_cost(turn, &id, aircraft, bay);
            matrix.turn_bay.insert((id.clone(), bay.key), cost);
        }

        if compatible_count == 0 {
            return Err(ModelError::NoCompatibleBay { turn: id.to_string() });
        }
        cost_debug!("(build) turn {id}: {compatible_count} compatible bays");
    }

    for (flight_id, turn) in turns.full_turns() {
        let aircraft = lookup_aircraft(ac_table, turn, &TurnId::Bare(flight_id.clone()))?;
        let cost = *cost_table
            .tow
            .get(&aircraft.cat)
            .ok_or_else(|| ModelError::MissingCost { turn: flight_id.clone() })?;
        matrix.tow.insert(flight_id.clone(), cost);
    }

    for (id, turn) in turns.fturns() {
        let aircraft = lookup_aircraft(ac_table, turn, &id)?;
        let cost = *cost_table
            .nobay
            .get(&aircraft.cat)
            .ok_or_else(|| ModelError::MissingCost { turn: id.to_string() })?;
        matrix.nobay.insert(id, cost);
    }

    Ok(matrix)
}

fn lookup_aircraft<'a>(
    ac_table: &'a AircraftTable,
    turn: &Turn,
    id: &TurnId,
) -> Result<&'a AircraftType, ModelError> {
    ac_table
        .get(turn.aircraft_id)
        .ok_or_else(|| ModelError::UnknownAircraft { turn: id.to_string() })
}

/// `c_x(i,t,k)` (spec.md §4.4).
fn turn_bay_cost(turn: &Turn, id: &TurnId, aircraft: &AircraftType, bay: &Bay) -> f64 {
    if id.is_parking() {
        return 1.0;
    }

    let divisor = if id.is_arrival_or_departure_split() { 2.0 } else { 1.0 };
    let base = aircraft.cap as f64 * bay.dist / divisor;
    let mut cost = if bay.key.terminal == turn.terminal || bay.key.terminal == BayType::Bus {
        base
    } else {
        TER_PENALTY * base
    };

    if let Some(pref) = &turn.pref {
        if pref.terminal == bay.key.terminal && pref.bay_index == bay.key.index {
            cost /= pref.weight as f64;
        }
    }
    cost
}
