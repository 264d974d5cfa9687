//! Turns: the unit of assignment, and the tagged-union turn identifier the
//! teacher's Design Notes call for in place of string-suffix conventions.

use crate::domain::terminal::BayType;
use chrono::{DateTime, Duration, Utc};
use std::fmt;

/// Which slice of a long turn's decomposition a split sub-turn represents.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SplitKind {
    Arrival,
    Parking,
    Departure,
}

impl SplitKind {
    fn suffix(self) -> char {
        match self {
            SplitKind::Arrival => 'A',
            SplitKind::Parking => 'P',
            SplitKind::Departure => 'D',
        }
    }
}

/// A turn identifier: either a bare (short, or long-full) turn id, or a
/// `(parent, slice)` pair for one of a long turn's A/P/D sub-turns.
///
/// Replaces the original program's string-suffix convention
/// (`"12A"`, `"12P"`, `"12D"`) and its `flight_check` canonicalization helper:
/// `TurnId::parent()` recovers the owning flight's bare id directly instead
/// of stripping characters out of a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TurnId {
    Bare(String),
    Split(String, SplitKind),
}

impl TurnId {
    /// The bare id of the long turn this id belongs to (itself, if bare).
    pub fn parent(&self) -> &str {
        match self {
            TurnId::Bare(id) => id,
            TurnId::Split(id, _) => id,
        }
    }

    pub fn split_kind(&self) -> Option<SplitKind> {
        match self {
            TurnId::Bare(_) => None,
            TurnId::Split(_, kind) => Some(*kind),
        }
    }

    pub fn is_parking(&self) -> bool {
        matches!(self.split_kind(), Some(SplitKind::Parking))
    }

    pub fn is_arrival_or_departure_split(&self) -> bool {
        matches!(
            self.split_kind(),
            Some(SplitKind::Arrival) | Some(SplitKind::Departure)
        )
    }
}

impl fmt::Display for TurnId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TurnId::Bare(id) => write!(f, "{id}"),
            TurnId::Split(id, kind) => write!(f, "{id}{}", kind.suffix()),
        }
    }
}

/// A turn's preferred bay, with the weight (5..10) the cost matrix divides
/// the base cost by when the assignment lands there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preference {
    pub terminal: BayType,
    pub bay_index: u32,
    pub weight: u8,
}

/// Whether a turn is short (single occupation) or long (eligible for a
/// mid-stay tow, decomposed into Full/A/P/D variants by the decomposer).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TurnClass {
    Short,
    Long,
}

/// One aircraft turnaround.
#[derive(Debug, Clone)]
pub struct Turn {
    pub id: TurnId,
    pub aircraft_id: u32,
    pub eta: DateTime<Utc>,
    pub etd: DateTime<Utc>,
    pub terminal: BayType,
    pub pref: Option<Preference>,
    /// Mandatory-tow flag: only meaningful on a long turn.
    pub tow: bool,
}

impl Turn {
    pub fn duration(&self) -> Duration {
        self.etd - self.eta
    }

    /// The buffered occupation interval `[eta - buf, etd + buf]` used by the
    /// time-conflict and adjacency constraints. A single symmetric buffer is
    /// applied to both ends (see DESIGN.md for why this, rather than two
    /// distinct arrival/departure buffers, is the intended semantics).
    pub fn buffered_interval(&self, buf: Duration) -> (DateTime<Utc>, DateTime<Utc>) {
        (self.eta - buf, self.etd + buf)
    }

    /// Whether this turn's buffered interval overlaps another's — the
    /// symmetric interval-overlap test the spec's Design Notes call for
    /// (covers strict containment in either direction, unlike a
    /// same-direction-shift predicate that misses it).
    pub fn overlaps(&self, other: &Turn, buf: Duration) -> bool {
        let (a1, d1) = self.buffered_interval(buf);
        let (a2, d2) = other.buffered_interval(buf);
        a1 <= d2 && a2 <= d1
    }
}
