//! Per-category tow/no-bay cost tables, read directly from the cost input
//! file (spec.md §6) rather than derived from capacity and bay distance.

use crate::domain::category::Category;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Deserialize)]
pub struct CostTable {
    pub tow: HashMap<Category, f64>,
    pub nobay: HashMap<Category, f64>,
}
