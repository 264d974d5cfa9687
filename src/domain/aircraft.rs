//! Aircraft type table.

use crate::domain::category::Category;
use serde::Deserialize;
use std::collections::HashMap;

/// One entry of the aircraft table: `{id, AC, cap, cat}`.
#[derive(Debug, Clone, Deserialize)]
pub struct AircraftType {
    pub id: u32,
    #[serde(rename = "AC")]
    pub name: String,
    pub cap: u32,
    pub cat: Category,
}

/// The full aircraft table, indexed both by id and by display name.
#[derive(Debug, Clone, Default)]
pub struct AircraftTable {
    by_id: HashMap<u32, AircraftType>,
    id_by_name: HashMap<String, u32>,
}

impl AircraftTable {
    pub fn from_entries(entries: Vec<AircraftType>) -> Self {
        let mut by_id = HashMap::with_capacity(entries.len());
        let mut id_by_name = HashMap::with_capacity(entries.len());
        for ac in entries {
            id_by_name.insert(ac.name.clone(), ac.id);
            by_id.insert(ac.id, ac);
        }
        AircraftTable { by_id, id_by_name }
    }

    pub fn get(&self, id: u32) -> Option<&AircraftType> {
        self.by_id.get(&id)
    }

    pub fn get_by_name(&self, name: &str) -> Option<&AircraftType> {
        self.id_by_name.get(name).and_then(|id| self.by_id.get(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &AircraftType> {
        self.by_id.values()
    }
}
