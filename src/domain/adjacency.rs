//! Wingtip-clearance adjacency table: per terminal and neighboring bay-size
//! pair, which aircraft-category pairings may not be parked side by side.

use crate::domain::category::Category;
use crate::domain::terminal::{BaySize, BayType};
use crate::error::ConfigError;
use serde::Deserialize;
use std::collections::HashMap;

/// Raw shape as it appears on disk: `{type -> size1 -> size2 -> cat_i -> [cat_i2, ...]}`.
/// Kept string-keyed because `serde_json` map keys must deserialize from a
/// string, which the domain enums don't implement directly.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawAdjacencyTable(HashMap<String, HashMap<String, HashMap<String, Vec<String>>>>);

/// Forbidden `(cat_i, cat_i2)` pairings for every `(terminal, size1, size2)`.
/// Presence of `cat_i2` in the set for `(terminal, size1, size2, cat_i)` means
/// the pairing violates wake/wingtip clearance.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyTable {
    forbidden: HashMap<(BayType, BaySize, BaySize, Category), Vec<Category>>,
}

impl AdjacencyTable {
    pub fn from_raw(raw: &RawAdjacencyTable, path: &str) -> Result<Self, ConfigError> {
        let mut forbidden = HashMap::new();
        for (ter_str, by_size1) in &raw.0 {
            let ter = parse_bay_type(ter_str, path)?;
            for (size1_str, by_size2) in by_size1 {
                let size1 = parse_bay_size(size1_str, path)?;
                for (size2_str, by_cat) in by_size2 {
                    let size2 = parse_bay_size(size2_str, path)?;
                    for (cat_str, incompatible) in by_cat {
                        let cat = parse_category(cat_str, path)?;
                        let incompatible_cats = incompatible
                            .iter()
                            .map(|c| parse_category(c, path))
                            .collect::<Result<Vec<_>, _>>()?;
                        forbidden.insert((ter, size1, size2, cat), incompatible_cats);
                    }
                }
            }
        }
        Ok(AdjacencyTable { forbidden })
    }

    /// Whether parking `cat2` at the neighboring bay violates clearance for
    /// `cat1` already parked at `(ter, size1, size2)`.
    pub fn forbids(&self, ter: BayType, size1: BaySize, size2: BaySize, cat1: Category, cat2: Category) -> bool {
        self.forbidden
            .get(&(ter, size1, size2, cat1))
            .map_or(false, |list| list.contains(&cat2))
    }
}

fn parse_bay_type(s: &str, path: &str) -> Result<BayType, ConfigError> {
    match s {
        "A" => Ok(BayType::Dom),
        "B" => Ok(BayType::Int),
        "BUS" => Ok(BayType::Bus),
        _ => Err(ConfigError::InvalidField { path: path.to_string(), field: format!("terminal {s:?}") }),
    }
}

fn parse_bay_size(s: &str, path: &str) -> Result<BaySize, ConfigError> {
    match s {
        "L" => Ok(BaySize::L),
        "S" => Ok(BaySize::S),
        "B" => Ok(BaySize::B),
        _ => Err(ConfigError::InvalidField { path: path.to_string(), field: format!("bay size {s:?}") }),
    }
}

fn parse_category(s: &str, path: &str) -> Result<Category, ConfigError> {
    s.chars()
        .next()
        .and_then(Category::from_char)
        .filter(|_| s.len() == 1)
        .ok_or_else(|| ConfigError::InvalidField { path: path.to_string(), field: format!("category {s:?}") })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_nested_raw_shape() {
        let json = r#"{"B": {"L": {"L": {"F": ["F", "G"]}}}}"#;
        let raw: RawAdjacencyTable = serde_json::from_str(json).unwrap();
        let table = AdjacencyTable::from_raw(&raw, "adj.json").unwrap();
        assert!(table.forbids(BayType::Int, BaySize::L, BaySize::L, Category::F, Category::F));
        assert!(table.forbids(BayType::Int, BaySize::L, BaySize::L, Category::F, Category::G));
        assert!(!table.forbids(BayType::Int, BaySize::L, BaySize::L, Category::F, Category::C));
    }

    #[test]
    fn test_unknown_terminal_rejected() {
        let json = r#"{"ZZ": {"L": {"L": {"F": ["F"]}}}}"#;
        let raw: RawAdjacencyTable = serde_json::from_str(json).unwrap();
        assert!(AdjacencyTable::from_raw(&raw, "adj.json").is_err());
    }
}
