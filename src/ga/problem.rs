//! The table placement problem: how layouts are created, scored and varied.

use super::fitness::{assess, Assessment};
use super::operators::single_point_crossover;
use crate::geometry::{is_valid_placement, restricted_areas, Rect};
use crate::layout::{Floor, Layout};
use rand::Rng;
use tracing::trace;

/// Random draws per table when building a fresh layout.
pub const PLACEMENT_ATTEMPTS: usize = 50;

/// Random relocation draws per mutated gene.
pub const MUTATION_ATTEMPTS: usize = 10;

/// Share of gene mutations that relocate; the rest try a rotation.
pub const RELOCATE_PROBABILITY: f64 = 0.7;

/// A loaded floor plus the derived state every operator needs.
///
/// Restricted areas are derived once here and never recomputed.
#[derive(Debug, Clone)]
pub struct LayoutProblem {
    floor: Floor,
    restricted: Vec<Rect>,
    spacing: f64,
}

impl LayoutProblem {
    pub fn new(floor: Floor, spacing: f64) -> Self {
        let restricted = restricted_areas(&floor.fixed);
        Self {
            floor,
            restricted,
            spacing,
        }
    }

    pub fn floor(&self) -> &Floor {
        &self.floor
    }

    pub fn restricted_areas(&self) -> &[Rect] {
        &self.restricted
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Checks `rect` against the restricted areas, the plan bounds and
    /// every rectangle in `others`.
    pub fn is_valid<I>(&self, rect: &Rect, others: I) -> bool
    where
        I: IntoIterator<Item = Rect>,
    {
        is_valid_placement(rect, others, &self.restricted, self.spacing, &self.floor.plan)
    }

    /// Creates a random layout with exactly one gene per table spec.
    ///
    /// Tables are placed in spec order, each validated against the tables
    /// placed before it. A table that finds no valid spot within
    /// [`PLACEMENT_ATTEMPTS`] draws gets the off-plan sentinel.
    pub fn create_individual<R: Rng>(&self, rng: &mut R) -> Layout {
        let mut layout = Layout::new(Vec::with_capacity(self.floor.tables.len()));

        for spec in &self.floor.tables {
            let placed = (0..PLACEMENT_ATTEMPTS).find_map(|_| {
                let (x, y) = self.random_position(spec.w, spec.h, rng)?;
                let candidate = spec.place_at(x, y);
                self.is_valid(&candidate.rect(), layout.iter().map(|p| p.rect()))
                    .then_some(candidate)
            });

            let placement = placed.unwrap_or_else(|| {
                trace!(table = %spec.id, "no valid position found, using sentinel");
                spec.unplaced()
            });
            layout.placements.push(placement);
        }

        layout
    }

    /// Fitness of a layout (higher is better).
    pub fn evaluate(&self, layout: &Layout) -> f64 {
        self.assess(layout).fitness
    }

    /// Fitness with its violation counts and score terms.
    pub fn assess(&self, layout: &Layout) -> Assessment {
        assess(layout, &self.floor.plan, &self.restricted, self.spacing)
    }

    /// Single-point crossover of two layouts.
    pub fn crossover<R: Rng>(&self, parent1: &Layout, parent2: &Layout, rng: &mut R) -> (Layout, Layout) {
        let (c1, c2) = single_point_crossover(&parent1.placements, &parent2.placements, rng);
        (Layout::new(c1), Layout::new(c2))
    }

    /// Mutates each gene independently with probability `mutation_rate`.
    ///
    /// A mutated gene either relocates (first valid of
    /// [`MUTATION_ATTEMPTS`] random positions) or rotates by 90 degrees
    /// (non-square tables only). Both changes are committed only if the
    /// new rectangle is valid against every other gene; otherwise the gene
    /// is left as is. Length and table identities never change.
    pub fn mutate<R: Rng>(&self, layout: &mut Layout, mutation_rate: f64, rng: &mut R) {
        for i in 0..layout.len() {
            if !rng.random_bool(mutation_rate) {
                continue;
            }

            let current = layout.placements[i].rect();
            let replacement = if rng.random_bool(RELOCATE_PROBABILITY) {
                self.relocate(layout, i, &current, rng)
            } else {
                self.rotate(layout, i, &current)
            };

            if let Some(rect) = replacement {
                layout.placements[i] = layout.placements[i].with_rect(rect);
            }
        }
    }

    fn relocate<R: Rng>(&self, layout: &Layout, i: usize, current: &Rect, rng: &mut R) -> Option<Rect> {
        (0..MUTATION_ATTEMPTS).find_map(|_| {
            let (x, y) = self.random_position(current.w, current.h, rng)?;
            let candidate = Rect::new(x, y, current.w, current.h);
            self.is_valid(&candidate, layout.rects_except(i))
                .then_some(candidate)
        })
    }

    fn rotate(&self, layout: &Layout, i: usize, current: &Rect) -> Option<Rect> {
        if current.w == current.h {
            return None;
        }
        let rotated = current.rotated();
        self.is_valid(&rotated, layout.rects_except(i))
            .then_some(rotated)
    }

    /// Uniform integer-grid position keeping a `w x h` rectangle on the
    /// plan. `None` if the rectangle cannot fit at all.
    fn random_position<R: Rng>(&self, w: f64, h: f64, rng: &mut R) -> Option<(f64, f64)> {
        let max_x = (self.floor.plan.width - w).floor();
        let max_y = (self.floor.plan.height - h).floor();
        if max_x < 0.0 || max_y < 0.0 {
            return None;
        }
        let x = rng.random_range(0..=max_x as u64) as f64;
        let y = rng.random_range(0..=max_y as u64) as f64;
        Some((x, y))
    }
}
