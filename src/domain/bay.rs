//! Physical bay records, as produced by the Bay Layout Builder.

use crate::domain::category::Category;
use crate::domain::terminal::{BaySize, BayType};
use std::collections::BTreeMap;

/// Composite key identifying a bay: its terminal and 1-based index.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BayKey {
    pub terminal: BayType,
    pub index: u32,
}

impl BayKey {
    pub fn new(terminal: BayType, index: u32) -> Self {
        BayKey { terminal, index }
    }

    /// The neighboring bay two indices over — the "side-by-side" pier
    /// partner used by the adjacency (wake separation) constraint.
    pub fn adjacent(&self) -> BayKey {
        BayKey { terminal: self.terminal, index: self.index + 2 }
    }
}

/// A single parking stand.
#[derive(Debug, Clone)]
pub struct Bay {
    pub key: BayKey,
    pub size: BaySize,
    /// Walking distance from the terminal's reference point.
    pub dist: f64,
    /// Admissible aircraft categories, largest-first (see
    /// `Category::reversed_range`).
    pub categories: Vec<Category>,
}

impl Bay {
    pub fn admits(&self, cat: Category) -> bool {
        self.categories.contains(&cat)
    }
}

/// Full per-bay map for the airport, keyed by `(terminal, index)`, kept in a
/// `BTreeMap` for deterministic iteration order (load-bearing for
/// byte-identical LP output across runs with the same seed).
#[derive(Debug, Clone, Default)]
pub struct BayLayout {
    bays: BTreeMap<BayKey, Bay>,
}

impl BayLayout {
    pub fn new() -> Self {
        BayLayout::default()
    }

    pub fn insert(&mut self, bay: Bay) {
        self.bays.insert(bay.key, bay);
    }

    pub fn get(&self, key: BayKey) -> Option<&Bay> {
        self.bays.get(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bay> {
        self.bays.values()
    }

    pub fn in_terminal(&self, terminal: BayType) -> impl Iterator<Item = &Bay> {
        self.bays.values().filter(move |b| b.key.terminal == terminal)
    }

    pub fn len(&self) -> usize {
        self.bays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bays.is_empty()
    }
}
