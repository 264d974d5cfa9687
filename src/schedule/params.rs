//! Scheduling parameters: the day's sampling window and the tow/short-turn
//! thresholds, read from the scheduling-parameters JSON file as (hours,
//! minutes) pairs and resolved against a concrete date.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use serde::Deserialize;

/// Raw (hours, minutes) pairs as they appear in the JSON file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawScheduleParams {
    pub tstart: (u32, u32),
    pub tend: (u32, u32),
    pub tmin: (u32, u32),
    pub ttow: (u32, u32),
}

impl Default for RawScheduleParams {
    fn default() -> Self {
        RawScheduleParams {
            tstart: (6, 0),
            tend: (23, 59),
            tmin: (1, 0),
            ttow: (3, 0),
        }
    }
}

/// Resolved scheduling parameters for a specific day.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleParams {
    pub tstart: DateTime<Utc>,
    pub tend: DateTime<Utc>,
    pub tmin: Duration,
    pub ttow: Duration,
}

impl ScheduleParams {
    pub fn resolve(date: NaiveDate, raw: &RawScheduleParams) -> Self {
        let at = |hm: (u32, u32)| -> DateTime<Utc> {
            Utc.from_utc_datetime(&date.and_hms_opt(hm.0, hm.1, 0).expect("valid (hour, minute)"))
        };
        ScheduleParams {
            tstart: at(raw.tstart),
            tend: at(raw.tend),
            tmin: Duration::hours(raw.tmin.0 as i64) + Duration::minutes(raw.tmin.1 as i64),
            ttow: Duration::hours(raw.ttow.0 as i64) + Duration::minutes(raw.ttow.1 as i64),
        }
    }
}
