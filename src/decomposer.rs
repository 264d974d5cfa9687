//! Turnaround Decomposer: splits long turns into Full/Arrival/Parking/
//! Departure sub-turns and exposes a single chained lookup over
//! short + long-full + long-split turns, replacing the original program's
//! `ChainMap` of three dictionaries (see the teacher's Design Notes on
//! chained turn-table lookups).

use crate::domain::{AircraftTable, SplitKind, Turn, TurnId};
use crate::error::ModelError;
use chrono::Duration;
use std::collections::HashMap;

/// The mid-stay parking window length either side of a long turn's
/// arrival/departure slice.
const SPLIT_OFFSET_MINUTES: i64 = 30;

/// Chained view over short turns, long-full turns, and their A/P/D splits.
#[derive(Debug, Default)]
pub struct TurnTable {
    short: HashMap<String, Turn>,
    full: HashMap<String, Turn>,
    split: HashMap<TurnId, Turn>,
}

impl TurnTable {
    /// Resolve any turn id — bare or split — to its record.
    pub fn lookup(&self, id: &TurnId) -> Option<&Turn> {
        match id {
            TurnId::Bare(s) => self.short.get(s).or_else(|| self.full.get(s)),
            TurnId::Split(..) => self.split.get(id),
        }
    }

    pub fn short_turns(&self) -> impl Iterator<Item = (&String, &Turn)> {
        self.short.iter()
    }

    pub fn full_turns(&self) -> impl Iterator<Item = (&String, &Turn)> {
        self.full.iter()
    }

    pub fn split(&self, parent: &str, kind: SplitKind) -> Option<&Turn> {
        self.split.get(&TurnId::Split(parent.to_string(), kind))
    }

    /// `M = S ∪ L_F ∪ L_S`: every turn the model builder needs an `x`
    /// variable for.
    pub fn all_turns(&self) -> impl Iterator<Item = (TurnId, &Turn)> {
        self.short
            .iter()
            .map(|(id, t)| (TurnId::Bare(id.clone()), t))
            .chain(self.full.iter().map(|(id, t)| (TurnId::Bare(id.clone()), t)))
            .chain(self.split.iter().map(|(id, t)| (id.clone(), t)))
    }

    /// `S ∪ L_F`: every turn that gets a `y` (no-bay) variable.
    pub fn fturns(&self) -> impl Iterator<Item = (TurnId, &Turn)> {
        self.short
            .iter()
            .map(|(id, t)| (TurnId::Bare(id.clone()), t))
            .chain(self.full.iter().map(|(id, t)| (TurnId::Bare(id.clone()), t)))
    }

    pub fn len(&self) -> usize {
        self.short.len() + self.full.len() + self.split.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition a generated schedule into short turns and long turns (each
/// kept whole as `FULL` plus split into `A`/`P`/`D` sub-turns).
///
/// Splitting rule: `ETD − ETA > ttow` and the aircraft's category is not
/// exempt from towing (spec.md §4.3).
pub fn decompose(schedule: Vec<Turn>, ac_table: &AircraftTable, ttow: Duration) -> Result<TurnTable, ModelError> {
    let mut table = TurnTable::default();

    for turn in schedule {
        let id = match &turn.id {
            TurnId::Bare(s) => s.clone(),
            TurnId::Split(..) => unreachable!("the schedule generator only ever emits bare turn ids"),
        };
        let aircraft = ac_table
            .get(turn.aircraft_id)
            .ok_or_else(|| ModelError::UnknownAircraft { turn: id.clone() })?;

        let is_long = turn.duration() > ttow && !aircraft.cat.exempt_from_towing();
        decomp_debug!("(decompose) turn {id}: long={is_long}");

        if is_long {
            let split_offset = Duration::minutes(SPLIT_OFFSET_MINUTES);
            let arrival_etd = turn.eta + split_offset;
            let departure_eta = turn.etd - split_offset;

            let mut arrival = turn.clone();
            arrival.id = TurnId::Split(id.clone(), SplitKind::Arrival);
            arrival.etd = arrival_etd;

            let mut departure = turn.clone();
            departure.id = TurnId::Split(id.clone(), SplitKind::Departure);
            departure.eta = departure_eta;

            let mut parking = turn.clone();
            parking.id = TurnId::Split(id.clone(), SplitKind::Parking);
            parking.eta = arrival_etd;
            parking.etd = departure_eta;
            parking.pref = None;

            table.split.insert(arrival.id.clone(), arrival);
            table.split.insert(departure.id.clone(), departure);
            table.split.insert(parking.id.clone(), parking);
            table.full.insert(id, turn);
        } else {
            table.short.insert(id, turn);
        }
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AircraftType, BayType, Category};
    use chrono::TimeZone;

    fn ac_table() -> AircraftTable {
        AircraftTable::from_entries(vec![
            AircraftType { id: 1, name: "A320".into(), cap: 180, cat: Category::C },
            AircraftType { id: 2, name: "A388".into(), cap: 500, cat: Category::H },
        ])
    }

    fn turn(id: &str, ac: u32, eta_h: u32, etd_h: u32) -> Turn {
        Turn {
            id: TurnId::Bare(id.to_string()),
            aircraft_id: ac,
            eta: chrono::Utc.with_ymd_and_hms(2010, 6, 15, eta_h, 0, 0).unwrap(),
            etd: chrono::Utc.with_ymd_and_hms(2010, 6, 15, etd_h, 0, 0).unwrap(),
            terminal: BayType::Dom,
            pref: None,
            tow: false,
        }
    }

    #[test]
    fn test_short_turn_stays_undivided() {
        let table = decompose(vec![turn("1", 1, 8, 10)], &ac_table(), Duration::hours(3)).unwrap();
        assert!(table.lookup(&TurnId::Bare("1".into())).is_some());
        assert!(table.split("1", SplitKind::Arrival).is_none());
    }

    #[test]
    fn test_long_eligible_turn_splits_with_30_minute_windows() {
        let table = decompose(vec![turn("2", 1, 6, 12)], &ac_table(), Duration::hours(3)).unwrap();
        assert!(table.full_turns().any(|(id, _)| id == "2"));
        let arrival = table.split("2", SplitKind::Arrival).unwrap();
        let parking = table.split("2", SplitKind::Parking).unwrap();
        let departure = table.split("2", SplitKind::Departure).unwrap();
        assert_eq!(arrival.etd, arrival.eta + Duration::minutes(30));
        assert_eq!(parking.eta, arrival.etd);
        assert_eq!(parking.etd, departure.eta);
        assert_eq!(departure.etd - departure.eta, Duration::minutes(30));
    }

    #[test]
    fn test_category_h_never_splits_even_if_long() {
        let table = decompose(vec![turn("3", 2, 6, 12)], &ac_table(), Duration::hours(3)).unwrap();
        assert!(table.short_turns().any(|(id, _)| id == "3"));
        assert!(table.split("3", SplitKind::Arrival).is_none());
    }

    #[test]
    fn test_duration_exactly_ttow_is_short() {
        let table = decompose(vec![turn("4", 1, 6, 9)], &ac_table(), Duration::hours(3)).unwrap();
        assert!(table.short_turns().any(|(id, _)| id == "4"));
    }

    #[test]
    fn test_unknown_aircraft_is_reported() {
        let err = decompose(vec![turn("5", 99, 6, 12)], &ac_table(), Duration::hours(3)).unwrap_err();
        assert_eq!(err, ModelError::UnknownAircraft { turn: "5".to_string() });
    }
}
