//! Bay Layout Builder: turns a terminal descriptor into per-bay records.
//!
//! Indices are 1-based and monotone within a terminal: L bays first, then S,
//! then B (remote). Distance formulas and category-range derivation match
//! the original `get_bays`/`cat_list` exactly (see spec.md §4.1).

use crate::domain::bay::{Bay, BayKey, BayLayout};
use crate::domain::category::Category;
use crate::domain::terminal::{BaySize, SizeClassConfig, TerminalLayoutConfig};

/// Build the full-airport bay layout from a terminal descriptor.
pub fn build_bays(config: &TerminalLayoutConfig) -> BayLayout {
    let mut layout = BayLayout::new();

    for terminal in config.terminals() {
        let ter_cfg = config.config_for(terminal);
        let n_l = ter_cfg.l.as_ref().map_or(0, |c| c.num);
        let n_s = ter_cfg.s.as_ref().map_or(0, |c| c.num);
        let n_b = ter_cfg.b.as_ref().map_or(0, |c| c.num);
        let total = n_l + n_s + n_b;

        layout_debug!(
            "(build_bays) terminal {terminal}: {n_l} L, {n_s} S, {n_b} B bays"
        );

        for k in 1..=total {
            let bay = if k <= n_l {
                let l: &SizeClassConfig = ter_cfg.l.as_ref().expect("n_l > 0 implies L config present");
                let dist = (k as f64 / 2.0).ceil() * l.dist - l.dist / 2.0;
                Bay {
                    key: BayKey::new(terminal, k),
                    size: BaySize::L,
                    dist,
                    categories: Category::reversed_range(l.cat.0, l.cat.1),
                }
            } else if k <= n_l + n_s {
                let l = ter_cfg.l.as_ref().expect("n_s > 0 implies L config present for the unit base");
                let s: &SizeClassConfig = ter_cfg.s.as_ref().expect("n_s > 0 implies S config present");
                let dist = s.dist / 2.0
                    + (n_l as f64 / 2.0).ceil() * l.dist
                    + s.dist * (((k - n_l) as f64 / 2.0).ceil() - 1.0);
                Bay {
                    key: BayKey::new(terminal, k),
                    size: BaySize::S,
                    dist,
                    categories: Category::reversed_range(s.cat.0, s.cat.1),
                }
            } else {
                let b: &SizeClassConfig = ter_cfg.b.as_ref().expect("n_b > 0 implies B config present");
                Bay {
                    key: BayKey::new(terminal, k),
                    size: BaySize::B,
                    dist: b.dist,
                    categories: Category::reversed_range(b.cat.0, b.cat.1),
                }
            };
            layout.insert(bay);
        }
    }

    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::terminal::{BayType, TerminalConfig};

    fn dom_only(l_num: u32, s_num: u32) -> TerminalLayoutConfig {
        TerminalLayoutConfig {
            dom: TerminalConfig {
                l: Some(SizeClassConfig { num: l_num, cat: (Category::B, Category::H), dist: 100.0 }),
                s: Some(SizeClassConfig { num: s_num, cat: (Category::B, Category::G), dist: 50.0 }),
                b: None,
            },
            int: TerminalConfig::default(),
            bus: TerminalConfig {
                b: Some(SizeClassConfig { num: 6, cat: (Category::A, Category::G), dist: 500.0 }),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_l_bay_distances() {
        let layout = build_bays(&dom_only(4, 6));
        let bay1 = layout.get(BayKey::new(BayType::Dom, 1)).unwrap();
        let bay2 = layout.get(BayKey::new(BayType::Dom, 2)).unwrap();
        let bay3 = layout.get(BayKey::new(BayType::Dom, 3)).unwrap();
        let bay4 = layout.get(BayKey::new(BayType::Dom, 4)).unwrap();
        assert_eq!(bay1.dist, 50.0);
        assert_eq!(bay2.dist, 50.0);
        assert_eq!(bay3.dist, 150.0);
        assert_eq!(bay4.dist, 150.0);
    }

    #[test]
    fn test_s_bay_distances_follow_l_bays() {
        let layout = build_bays(&dom_only(4, 6));
        let s1 = layout.get(BayKey::new(BayType::Dom, 5)).unwrap();
        let s2 = layout.get(BayKey::new(BayType::Dom, 6)).unwrap();
        // unit_S/2 + ceil(4/2)*unit_L + unit_S*(ceil((5-4)/2)-1) = 25 + 200 + 0 = 225
        assert_eq!(s1.dist, 225.0);
        assert_eq!(s2.dist, 225.0);
    }

    #[test]
    fn test_bus_bays_share_constant_distance() {
        let layout = build_bays(&dom_only(4, 6));
        let b1 = layout.get(BayKey::new(BayType::Bus, 1)).unwrap();
        let b6 = layout.get(BayKey::new(BayType::Bus, 6)).unwrap();
        assert_eq!(b1.dist, 500.0);
        assert_eq!(b6.dist, 500.0);
    }

    #[test]
    fn test_categories_reversed_and_larger_bays_admit_more() {
        let layout = build_bays(&dom_only(4, 6));
        let l_bay = layout.get(BayKey::new(BayType::Dom, 1)).unwrap();
        let s_bay = layout.get(BayKey::new(BayType::Dom, 5)).unwrap();
        assert!(l_bay.admits(Category::H));
        assert!(!s_bay.admits(Category::H));
        assert!(s_bay.admits(Category::B));
    }

    #[test]
    fn test_indices_monotone_and_count() {
        let layout = build_bays(&dom_only(4, 6));
        assert_eq!(layout.in_terminal(BayType::Dom).count(), 10);
        assert_eq!(layout.in_terminal(BayType::Bus).count(), 6);
    }
}
