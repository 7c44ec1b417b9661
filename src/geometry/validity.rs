//! Restricted zones and positional validity of a table placement.

use super::rect::{collides, Rect};
use crate::layout::{FixedElement, FloorPlan};

/// Safety margin added around every restricting obstacle.
pub const RESTRICTED_BUFFER: f64 = 3.0;

/// Empty band kept free for chairs along the top and bottom plan edges.
pub const CHAIR_CLEARANCE: f64 = 1.5;

/// Derives the no-placement zones from the fixed obstacles.
///
/// Only walls, bathrooms and restrictions qualify; each one yields exactly
/// one zone, grown by [`RESTRICTED_BUFFER`] on every side.
pub fn restricted_areas(fixed: &[FixedElement]) -> Vec<Rect> {
    fixed
        .iter()
        .filter(|elem| elem.kind.is_restricting())
        .map(|elem| elem.rect.expanded(RESTRICTED_BUFFER))
        .collect()
}

/// Whether `rect` sits inside the plan with chair clearance above and below.
///
/// Left and right edges need no clearance.
pub fn within_plan(rect: &Rect, plan: &FloorPlan) -> bool {
    rect.x >= 0.0
        && rect.y >= CHAIR_CLEARANCE
        && rect.x + rect.w <= plan.width
        && rect.y + rect.h <= plan.height - CHAIR_CLEARANCE
}

/// Full positional validity of `candidate`.
///
/// A placement is valid iff it avoids every restricted area, keeps
/// `spacing` from every rectangle in `placed`, and lies
/// [`within_plan`]. Restricted areas are checked first.
pub fn is_valid_placement<I>(
    candidate: &Rect,
    placed: I,
    restricted: &[Rect],
    spacing: f64,
    plan: &FloorPlan,
) -> bool
where
    I: IntoIterator<Item = Rect>,
{
    if restricted.iter().any(|area| collides(candidate, area, 0.0)) {
        return false;
    }
    if placed
        .into_iter()
        .any(|other| collides(candidate, &other, spacing))
    {
        return false;
    }
    within_plan(candidate, plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::ElementKind;

    const NO_TABLES: [Rect; 0] = [];

    fn plan() -> FloorPlan {
        FloorPlan::new(40.0, 30.0)
    }

    #[test]
    fn test_restricted_areas_only_for_restricting_kinds() {
        let fixed = vec![
            FixedElement::new("w", ElementKind::Wall, Rect::new(0.0, 0.0, 40.0, 1.0)),
            FixedElement::new("t", ElementKind::Table, Rect::new(10.0, 10.0, 4.0, 2.0)),
            FixedElement::new("b", ElementKind::Bathroom, Rect::new(30.0, 20.0, 5.0, 5.0)),
            FixedElement::new("o", ElementKind::Other, Rect::new(5.0, 5.0, 1.0, 1.0)),
        ];
        let areas = restricted_areas(&fixed);
        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0], Rect::new(0.0, 0.0, 46.0, 7.0));
        assert_eq!(areas[1], Rect::new(27.0, 17.0, 11.0, 11.0));
    }

    #[test]
    fn test_valid_placement_in_open_space() {
        let r = Rect::new(10.0, 10.0, 4.0, 2.0);
        assert!(is_valid_placement(&r, std::iter::empty(), &[], 2.0, &plan()));
    }

    #[test]
    fn test_invalid_when_hitting_restricted_area() {
        let areas = vec![Rect::new(0.0, 0.0, 26.0, 16.0)];
        let r = Rect::new(20.0, 10.0, 4.0, 2.0);
        assert!(!is_valid_placement(&r, std::iter::empty(), &areas, 0.0, &plan()));
    }

    #[test]
    fn test_invalid_when_too_close_to_other_table() {
        let other = Rect::new(15.0, 10.0, 4.0, 2.0);
        let r = Rect::new(10.0, 10.0, 4.0, 2.0);
        assert!(is_valid_placement(&r, [other], &[], 1.0, &plan()));
        assert!(!is_valid_placement(&r, [other], &[], 2.0, &plan()));
    }

    #[test]
    fn test_chair_clearance_top_and_bottom() {
        let p = plan();
        assert!(!is_valid_placement(&Rect::new(5.0, 1.0, 4.0, 2.0), NO_TABLES, &[], 0.0, &p));
        assert!(is_valid_placement(&Rect::new(5.0, 1.5, 4.0, 2.0), NO_TABLES, &[], 0.0, &p));
        assert!(is_valid_placement(&Rect::new(5.0, 26.5, 4.0, 2.0), NO_TABLES, &[], 0.0, &p));
        assert!(!is_valid_placement(&Rect::new(5.0, 27.0, 4.0, 2.0), NO_TABLES, &[], 0.0, &p));
    }

    #[test]
    fn test_no_clearance_on_left_and_right() {
        let p = plan();
        assert!(is_valid_placement(&Rect::new(0.0, 10.0, 4.0, 2.0), NO_TABLES, &[], 0.0, &p));
        assert!(is_valid_placement(&Rect::new(36.0, 10.0, 4.0, 2.0), NO_TABLES, &[], 0.0, &p));
        assert!(!is_valid_placement(&Rect::new(36.5, 10.0, 4.0, 2.0), NO_TABLES, &[], 0.0, &p));
        assert!(!is_valid_placement(&Rect::new(-0.5, 10.0, 4.0, 2.0), NO_TABLES, &[], 0.0, &p));
    }

    #[test]
    fn test_sentinel_is_never_valid() {
        let r = Rect::new(-10.0, -10.0, 4.0, 2.0);
        assert!(!is_valid_placement(&r, NO_TABLES, &[], 0.0, &plan()));
    }
}
