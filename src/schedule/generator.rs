//! Schedule Generator: samples a synthetic day of turns from the features
//! catalog. Ports the original `make_schedule`/`make_t` rejection-loop
//! sampling exactly, using a seeded RNG so the same seed always reproduces
//! the same schedule (spec.md §4.2, §8 determinism property).

use crate::domain::{AircraftTable, BayLayout, BayType, Category, Preference, Turn, TurnId};
use crate::error::GeneratorError;
use crate::schedule::params::ScheduleParams;
use crate::schedule::probability::{Features, ProbabilityZone};
use chrono::Duration;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;
use std::collections::HashMap;

/// Bounded retry count for the arrival/length rejection loop. The original
/// resamples unconditionally; a bound turns a pathological features file
/// into a reported error instead of an infinite loop.
const MAX_SAMPLE_ATTEMPTS: usize = 10_000;
/// Bay-preference weight range, inclusive (matches the original's `randint(5, 10)`).
const PREF_WEIGHT_RANGE: (u8, u8) = (5, 10);

/// Samples a synthetic day's worth of [`Turn`]s.
pub struct Generator<'a> {
    rng: StdRng,
    features: &'a Features,
    params: &'a ScheduleParams,
    ac_table: &'a AircraftTable,
    bays: &'a BayLayout,
}

impl<'a> Generator<'a> {
    pub fn new(
        seed: u64,
        features: &'a Features,
        params: &'a ScheduleParams,
        ac_table: &'a AircraftTable,
        bays: &'a BayLayout,
    ) -> Self {
        Generator {
            rng: StdRng::seed_from_u64(seed),
            features,
            params,
            ac_table,
            bays,
        }
    }

    /// Generate `nflights` turns, numbered `1..=nflights`.
    pub fn generate(&mut self, nflights: usize) -> Result<Vec<Turn>, GeneratorError> {
        sched_info!("(generate) sampling {nflights} turns");
        let mut turns = Vec::with_capacity(nflights);
        for n in 1..=nflights {
            turns.push(self.generate_one(n)?);
        }
        Ok(turns)
    }

    fn generate_one(&mut self, n: usize) -> Result<Turn, GeneratorError> {
        let (zone_id, zone) = self.sample_zone()?;
        let ter = zone.terminal;

        let ter_weights = self.features.weights.get(&ter).ok_or_else(|| {
            GeneratorError::EmptyWeights { terminal: ter.to_string() }
        })?;
        if ter_weights.aircraft.is_empty() {
            return Err(GeneratorError::EmptyWeights { terminal: ter.to_string() });
        }
        let ac_ids: Vec<u32> = ter_weights.aircraft.keys().copied().collect();
        let ac_weights: Vec<f64> = ac_ids.iter().map(|id| ter_weights.aircraft[id]).collect();
        let ac_dist = WeightedIndex::new(&ac_weights)
            .map_err(|_| GeneratorError::EmptyWeights { terminal: ter.to_string() })?;
        let ac_id = ac_ids[ac_dist.sample(&mut self.rng)];
        let aircraft = self
            .ac_table
            .get(ac_id)
            .expect("terminal weights reference only known aircraft ids");

        let (eta, etd) = self.sample_arrival_and_length(&zone_id, zone)?;

        let mut turn = Turn {
            id: TurnId::Bare(n.to_string()),
            aircraft_id: ac_id,
            eta,
            etd,
            terminal: ter,
            pref: None,
            tow: false,
        };

        if turn.duration() > self.params.ttow && !aircraft.cat.exempt_from_towing() {
            turn.tow = self.rng.gen_bool(ter_weights.tow.clamp(0.0, 1.0));
        }

        if aircraft.cat.eligible_for_pref() && self.rng.gen_bool(ter_weights.pref.clamp(0.0, 1.0)) {
            turn.pref = self.sample_preference(ter, aircraft.cat);
        }

        sched_debug!(
            "(generate_one) turn {} zone={} ac={} eta={} etd={} tow={} pref={:?}",
            turn.id, zone_id, aircraft.name, turn.eta, turn.etd, turn.tow, turn.pref
        );

        Ok(turn)
    }

    fn sample_zone(&mut self) -> Result<(String, &'a ProbabilityZone), GeneratorError> {
        let zone_ids: Vec<&String> = self.features.prob.keys().collect();
        let weights: Vec<f64> = zone_ids.iter().map(|z| self.features.prob[*z].weight).collect();
        let dist = WeightedIndex::new(&weights)
            .map_err(|_| GeneratorError::EmptyWeights { terminal: "<zone>".to_string() })?;
        let zone_id = zone_ids[dist.sample(&mut self.rng)].clone();
        let zone = &self.features.prob[&zone_id];
        Ok((zone_id, zone))
    }

    /// Rejection-sample `(arr_offset, len_offset)` until the resulting
    /// `[eta, etd]` stays inside `[tstart, tend]` and the turn is at least
    /// `tmin` long (see `flight_schedule.py`'s `make_t`).
    fn sample_arrival_and_length(
        &mut self,
        zone_id: &str,
        zone: &ProbabilityZone,
    ) -> Result<(chrono::DateTime<chrono::Utc>, chrono::DateTime<chrono::Utc>), GeneratorError> {
        let mean_arr = self.params.tstart.date_naive().and_time(chrono::NaiveTime::from_hms_opt(
            zone.mean_arr.0,
            zone.mean_arr.1,
            0,
        ).expect("valid mean_arr (hour, minute)"));
        let mean_arr = chrono::TimeZone::from_utc_datetime(&chrono::Utc, &mean_arr);
        let mean_len = Duration::minutes(zone.mean_len);

        let normal_arr = Normal::new(0.0_f64, zone.std_arr)
            .map_err(|_| GeneratorError::SamplingExhausted { zone: zone_id.to_string() })?;
        let normal_len = Normal::new(0.0_f64, zone.std_len)
            .map_err(|_| GeneratorError::SamplingExhausted { zone: zone_id.to_string() })?;

        for _ in 0..MAX_SAMPLE_ATTEMPTS {
            let arr_offset = Duration::minutes(normal_arr.sample(&mut self.rng).round() as i64);
            let len_offset = Duration::minutes(normal_len.sample(&mut self.rng).round() as i64);

            let eta = mean_arr + arr_offset;
            let etd = mean_arr + mean_len + arr_offset + len_offset;
            let length = mean_len + len_offset;

            let within_window = eta >= self.params.tstart && eta <= self.params.tend - self.params.tmin;
            let within_length =
                length >= self.params.tmin && etd <= self.params.tend;

            if within_window && within_length {
                return Ok((eta, etd));
            }
        }

        Err(GeneratorError::SamplingExhausted { zone: zone_id.to_string() })
    }

    /// Pick a uniformly random preferred bay among those in `ter` that admit
    /// `cat` and aren't a remote "B" (bus) stand — the original never hints
    /// at a remote bay.
    fn sample_preference(&mut self, ter: BayType, cat: Category) -> Option<Preference> {
        let candidates: Vec<_> = self
            .bays
            .in_terminal(ter)
            .filter(|bay| bay.admits(cat) && bay.size != crate::domain::BaySize::B)
            .collect();
        if candidates.is_empty() {
            sched_warn!("(sample_preference) no candidate bay in {ter} admits category {cat}");
            return None;
        }
        let bay = candidates[self.rng.gen_range(0..candidates.len())];
        let weight = self.rng.gen_range(PREF_WEIGHT_RANGE.0..=PREF_WEIGHT_RANGE.1);
        Some(Preference { terminal: ter, bay_index: bay.key.index, weight })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AircraftType, BayKey, BayLayout, Category};
    use crate::schedule::probability::{Features, ProbabilityZone, TerminalWeights};
    use chrono::TimeZone;

    fn ac_table() -> AircraftTable {
        AircraftTable::from_entries(vec![
            AircraftType { id: 1, name: "A320".into(), cap: 180, cat: Category::C },
            AircraftType { id: 2, name: "B777".into(), cap: 350, cat: Category::F },
        ])
    }

    fn bays() -> BayLayout {
        let mut layout = BayLayout::new();
        layout.insert(crate::domain::Bay {
            key: BayKey::new(BayType::Dom, 1),
            size: crate::domain::BaySize::L,
            dist: 100.0,
            categories: Category::reversed_range(Category::A, Category::H),
        });
        layout
    }

    fn features() -> Features {
        let mut prob = HashMap::new();
        prob.insert(
            "z1".to_string(),
            ProbabilityZone { weight: 1.0, terminal: BayType::Dom, mean_arr: (9, 0), std_arr: 30.0, mean_len: 90, std_len: 15.0 },
        );
        let mut weights = HashMap::new();
        let mut aircraft = HashMap::new();
        aircraft.insert(1, 1.0);
        aircraft.insert(2, 1.0);
        weights.insert(BayType::Dom, TerminalWeights { aircraft, tow: 0.1, pref: 0.5 });
        Features { prob, weights }
    }

    fn params() -> ScheduleParams {
        ScheduleParams::resolve(
            chrono::NaiveDate::from_ymd_opt(2010, 6, 15).unwrap(),
            &crate::schedule::params::RawScheduleParams::default(),
        )
    }

    #[test]
    fn test_same_seed_yields_identical_schedule() {
        let ac = ac_table();
        let bays = bays();
        let feats = features();
        let p = params();

        let mut gen1 = Generator::new(7, &feats, &p, &ac, &bays);
        let mut gen2 = Generator::new(7, &feats, &p, &ac, &bays);
        let s1 = gen1.generate(20).unwrap();
        let s2 = gen2.generate(20).unwrap();

        assert_eq!(s1.len(), s2.len());
        for (t1, t2) in s1.iter().zip(s2.iter()) {
            assert_eq!(t1.aircraft_id, t2.aircraft_id);
            assert_eq!(t1.eta, t2.eta);
            assert_eq!(t1.etd, t2.etd);
            assert_eq!(t1.tow, t2.tow);
            assert_eq!(t1.pref, t2.pref);
        }
    }

    #[test]
    fn test_different_seeds_usually_diverge() {
        let ac = ac_table();
        let bays = bays();
        let feats = features();
        let p = params();

        let mut gen1 = Generator::new(1, &feats, &p, &ac, &bays);
        let mut gen2 = Generator::new(2, &feats, &p, &ac, &bays);
        let s1 = gen1.generate(20).unwrap();
        let s2 = gen2.generate(20).unwrap();

        let any_diff = s1.iter().zip(s2.iter()).any(|(t1, t2)| t1.eta != t2.eta || t1.aircraft_id != t2.aircraft_id);
        assert!(any_diff, "20 samples from two different seeds should not collide on every field");
    }

    #[test]
    fn test_window_bounded_by_tstart_and_tend() {
        let ac = ac_table();
        let bays = bays();
        let feats = features();
        let p = params();
        let mut gen = Generator::new(42, &feats, &p, &ac, &bays);
        for turn in gen.generate(20).unwrap() {
            assert!(turn.eta >= p.tstart);
            assert!(turn.etd <= p.tend);
            assert!(turn.duration() >= p.tmin);
        }
    }
}
