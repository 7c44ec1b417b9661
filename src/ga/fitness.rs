//! Layout fitness model.
//!
//! Higher is better and every score is strictly positive. Layouts with a
//! table off the plan, inside a restricted area, or intruding on the chair
//! band are scored by penalty only and always land at or below 1.0.
//! Feasible layouts get a composite desirability score that includes a
//! flat bonus of [`FEASIBLE_BONUS`], so they always outrank infeasible ones.

use crate::geometry::{collides, distance, Rect, CHAIR_CLEARANCE};
use crate::layout::{FloorPlan, Layout};

/// Width of a table that seats four.
pub const WIDE_TABLE_WIDTH: f64 = 20.0;

/// Flat bonus for a layout with no invalid tables and no chair violations.
pub const FEASIBLE_BONUS: f64 = 50.0;

/// Floor of the penalty branch.
pub const MIN_FITNESS: f64 = 0.0001;

const INVALID_PENALTY: f64 = 100.0;
const CHAIR_PENALTY: f64 = 150.0;
const COLLISION_PENALTY: f64 = 50.0;

const CAPACITY_WEIGHT: f64 = 10.0;
const MIN_DISTANCE_WEIGHT: f64 = 3.0;
const MEAN_DISTANCE_WEIGHT: f64 = 1.0;
const CENTRALITY_WEIGHT: f64 = 2.0;
const DENSITY_WEIGHT: f64 = 5.0;
const DENSITY_CAP: f64 = 3.0;
const PER_TABLE_BONUS: f64 = 2.0;

/// Chairs around a table of the given width.
pub fn chairs_for_width(w: f64) -> usize {
    if (w - WIDE_TABLE_WIDTH).abs() < f64::EPSILON {
        4
    } else {
        2
    }
}

/// Total seats offered by a layout.
pub fn chair_capacity(layout: &Layout) -> usize {
    layout.iter().map(|p| chairs_for_width(p.w)).sum()
}

/// Constraint violations found in one scan of a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Violations {
    /// Tables off the plan or inside a restricted area, once per table.
    pub invalid: usize,
    /// Table pairs closer than the configured spacing, once per pair.
    pub collisions: usize,
    /// Tables intruding on the chair band at the top or bottom edge.
    pub chair: usize,
}

impl Violations {
    /// Feasible layouts are scored by desirability; collisions alone do
    /// not make a layout infeasible.
    pub fn is_feasible(&self) -> bool {
        self.invalid == 0 && self.chair == 0
    }

    pub fn penalty(&self) -> f64 {
        self.invalid as f64 * INVALID_PENALTY
            + self.chair as f64 * CHAIR_PENALTY
            + self.collisions as f64 * COLLISION_PENALTY
    }

    /// `max(1 / (penalty + 1), MIN_FITNESS)`.
    pub fn penalty_score(&self) -> f64 {
        (1.0 / (self.penalty() + 1.0)).max(MIN_FITNESS)
    }
}

/// Raw desirability terms of a feasible layout, before weighting.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreTerms {
    pub chair_capacity: usize,
    /// Smallest center-to-center distance; 0 with fewer than two tables.
    pub min_distance: f64,
    /// Mean center-to-center distance; 0 with fewer than two tables.
    pub mean_distance: f64,
    pub centrality: f64,
    /// `used / free` area, capped at 3.
    pub density: f64,
    pub table_count: usize,
}

impl ScoreTerms {
    pub fn compute(layout: &Layout, plan: &FloorPlan) -> Self {
        let rects: Vec<Rect> = layout.iter().map(|p| p.rect()).collect();

        let mut min_distance = f64::INFINITY;
        let mut total_distance = 0.0;
        let mut pairs = 0usize;
        for (i, a) in rects.iter().enumerate() {
            for b in &rects[i + 1..] {
                let d = distance(a, b);
                min_distance = min_distance.min(d);
                total_distance += d;
                pairs += 1;
            }
        }
        let (min_distance, mean_distance) = if pairs == 0 {
            (0.0, 0.0)
        } else {
            (min_distance, total_distance / pairs as f64)
        };

        let (cx, cy) = plan.center();
        let centrality = rects
            .iter()
            .map(|r| {
                let (tx, ty) = r.center();
                1.0 / (1.0 + (tx - cx).abs()) + 1.0 / (1.0 + (ty - cy).abs())
            })
            .sum();

        let used: f64 = rects.iter().map(Rect::area).sum();
        let free = plan.area() - used;
        let density = if free > 0.0 {
            (used / free).min(DENSITY_CAP)
        } else {
            DENSITY_CAP
        };

        Self {
            chair_capacity: chair_capacity(layout),
            min_distance,
            mean_distance,
            centrality,
            density,
            table_count: rects.len(),
        }
    }

    /// Weighted capacity term (10 per chair).
    pub fn capacity_score(&self) -> f64 {
        self.chair_capacity as f64 * CAPACITY_WEIGHT
    }

    /// Weighted sum of all terms plus the feasibility bonus.
    pub fn score(&self) -> f64 {
        self.capacity_score()
            + self.min_distance * MIN_DISTANCE_WEIGHT
            + self.mean_distance * MEAN_DISTANCE_WEIGHT
            + self.centrality * CENTRALITY_WEIGHT
            + self.density * DENSITY_WEIGHT
            + self.table_count as f64 * PER_TABLE_BONUS
            + FEASIBLE_BONUS
    }
}

/// Full fitness breakdown of one layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment {
    pub violations: Violations,
    /// Present only for feasible layouts.
    pub terms: Option<ScoreTerms>,
    pub fitness: f64,
}

/// Scans a layout for violations.
///
/// A table outside `[0, W - w] x [0, H - h]` counts as invalid and is not
/// checked further. Otherwise a restricted-area hit counts as invalid,
/// every later table within `spacing` counts one collision, and a table
/// crossing into the chair band counts one chair violation.
pub fn violations(layout: &Layout, plan: &FloorPlan, restricted: &[Rect], spacing: f64) -> Violations {
    let mut v = Violations::default();

    for (i, table) in layout.placements.iter().enumerate() {
        let rect = table.rect();

        let in_bounds = (0.0..=plan.width - rect.w).contains(&rect.x)
            && (0.0..=plan.height - rect.h).contains(&rect.y);
        if !in_bounds {
            v.invalid += 1;
            continue;
        }

        if restricted.iter().any(|area| collides(&rect, area, 0.0)) {
            v.invalid += 1;
        }

        v.collisions += layout.placements[i + 1..]
            .iter()
            .filter(|other| collides(&rect, &other.rect(), spacing))
            .count();

        if rect.y < CHAIR_CLEARANCE || rect.y + rect.h > plan.height - CHAIR_CLEARANCE {
            v.chair += 1;
        }
    }

    v
}

/// Computes the full fitness breakdown of `layout`.
pub fn assess(layout: &Layout, plan: &FloorPlan, restricted: &[Rect], spacing: f64) -> Assessment {
    let violations = violations(layout, plan, restricted, spacing);

    if !violations.is_feasible() {
        return Assessment {
            violations,
            terms: None,
            fitness: violations.penalty_score(),
        };
    }

    let terms = ScoreTerms::compute(layout, plan);
    Assessment {
        violations,
        terms: Some(terms),
        fitness: terms.score(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::TableSpec;

    fn plan() -> FloorPlan {
        FloorPlan::new(40.0, 30.0)
    }

    fn layout(tables: &[(f64, f64, f64, f64)]) -> Layout {
        Layout::new(
            tables
                .iter()
                .enumerate()
                .map(|(i, &(x, y, w, h))| TableSpec::new(format!("t{i}"), w, h).place_at(x, y))
                .collect(),
        )
    }

    #[test]
    fn test_capacity_wide_and_narrow() {
        let l = layout(&[(2.0, 5.0, 20.0, 4.0), (25.0, 5.0, 10.0, 4.0)]);
        assert_eq!(chair_capacity(&l), 6);

        let a = assess(&l, &plan(), &[], 2.0);
        let terms = a.terms.expect("layout is feasible");
        assert!((terms.capacity_score() - 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_two_wide_tables_seat_four_each() {
        let l = layout(&[(0.0, 2.0, 20.0, 4.0), (0.0, 20.0, 20.0, 4.0)]);
        assert_eq!(chair_capacity(&l), 8);
    }

    #[test]
    fn test_feasible_score_breakdown() {
        // Two 4x2 tables mirrored around the center of a 40x30 plan.
        let l = layout(&[(8.0, 14.0, 4.0, 2.0), (28.0, 14.0, 4.0, 2.0)]);
        let a = assess(&l, &plan(), &[], 2.0);
        let t = a.terms.unwrap();

        assert_eq!(t.chair_capacity, 4);
        assert!((t.min_distance - 20.0).abs() < 1e-12);
        assert!((t.mean_distance - 20.0).abs() < 1e-12);
        // Each center is 10 units off in x and exactly centered in y.
        assert!((t.centrality - 2.0 * (1.0 / 11.0 + 1.0)).abs() < 1e-12);
        assert!((t.density - 16.0 / 1184.0).abs() < 1e-12);

        let expected = 40.0 + 60.0 + 20.0 + t.centrality * 2.0 + t.density * 5.0 + 4.0 + 50.0;
        assert!((a.fitness - expected).abs() < 1e-9);
    }

    #[test]
    fn test_feasible_at_least_bonus() {
        let l = layout(&[(10.0, 10.0, 4.0, 2.0)]);
        let a = assess(&l, &plan(), &[], 2.0);
        assert!(a.violations.is_feasible());
        assert!(a.fitness >= FEASIBLE_BONUS);
    }

    #[test]
    fn test_single_table_has_zero_distance_terms() {
        let l = layout(&[(10.0, 10.0, 4.0, 2.0)]);
        let t = assess(&l, &plan(), &[], 2.0).terms.unwrap();
        assert_eq!(t.min_distance, 0.0);
        assert_eq!(t.mean_distance, 0.0);
        assert!(t.min_distance.is_finite());
    }

    #[test]
    fn test_sentinel_is_invalid() {
        let spec = TableSpec::new("t0", 4.0, 2.0);
        let l = Layout::new(vec![spec.unplaced()]);
        let a = assess(&l, &plan(), &[], 2.0);
        assert_eq!(a.violations.invalid, 1);
        assert!(a.terms.is_none());
        assert!((a.fitness - 1.0 / 101.0).abs() < 1e-12);
    }

    #[test]
    fn test_restricted_hit_counts_once() {
        let areas = vec![Rect::new(0.0, 0.0, 26.0, 16.0), Rect::new(0.0, 0.0, 30.0, 20.0)];
        let l = layout(&[(5.0, 5.0, 4.0, 2.0)]);
        let v = violations(&l, &plan(), &areas, 2.0);
        assert_eq!(v.invalid, 1);
    }

    #[test]
    fn test_chair_violation_penalized() {
        let l = layout(&[(5.0, 0.5, 4.0, 2.0)]);
        let a = assess(&l, &plan(), &[], 2.0);
        assert_eq!(a.violations.chair, 1);
        assert!((a.fitness - 1.0 / 151.0).abs() < 1e-12);
    }

    #[test]
    fn test_collisions_counted_once_per_pair() {
        let l = layout(&[
            (10.0, 10.0, 4.0, 2.0),
            (11.0, 10.0, 4.0, 2.0),
            (12.0, 10.0, 4.0, 2.0),
        ]);
        let v = violations(&l, &plan(), &[], 0.0);
        assert_eq!(v.collisions, 3);
        // Collisions alone keep a layout feasible.
        assert!(v.is_feasible());
    }

    #[test]
    fn test_penalty_monotonic_and_floored() {
        let fewer = Violations { invalid: 1, collisions: 0, chair: 0 };
        let more = Violations { invalid: 2, collisions: 0, chair: 0 };
        assert!(fewer.penalty_score() > more.penalty_score());

        let huge = Violations { invalid: 1000, collisions: 1000, chair: 1000 };
        assert_eq!(huge.penalty_score(), MIN_FITNESS);
    }

    #[test]
    fn test_density_capped() {
        // Stacked tables collide but stay feasible, and their area
        // exceeds the plan.
        let tiny = FloorPlan::new(10.0, 10.0);
        let l = layout(&[(0.0, 1.5, 10.0, 7.0), (0.0, 1.5, 10.0, 7.0)]);
        let t = assess(&l, &tiny, &[], 0.0).terms.unwrap();
        assert_eq!(t.density, DENSITY_CAP);
    }
}
