//! Data model for floor plans, obstacles and table placements.

use crate::geometry::Rect;

/// Coordinate given to a table that could not be placed.
///
/// Deliberately outside the plan so the fitness model counts the table
/// as invalid.
pub const UNPLACED_COORD: f64 = -10.0;

/// Floor plan dimensions. Fixed for a run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorPlan {
    #[cfg_attr(feature = "serde", serde(alias = "largura"))]
    pub width: f64,
    #[cfg_attr(feature = "serde", serde(alias = "altura"))]
    pub height: f64,
}

impl FloorPlan {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Geometric center of the plan.
    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Category tag of a floor element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ElementKind {
    #[cfg_attr(feature = "serde", serde(alias = "parede"))]
    Wall,
    #[cfg_attr(feature = "serde", serde(alias = "banheiro"))]
    Bathroom,
    #[cfg_attr(feature = "serde", serde(alias = "restricao"))]
    Restriction,
    #[cfg_attr(feature = "serde", serde(alias = "mesa"))]
    Table,
    #[cfg_attr(feature = "serde", serde(other))]
    Other,
}

impl ElementKind {
    /// Whether elements of this kind turn into restricted areas.
    pub fn is_restricting(self) -> bool {
        matches!(
            self,
            ElementKind::Wall | ElementKind::Bathroom | ElementKind::Restriction
        )
    }
}

/// An immovable obstacle on the floor.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedElement {
    pub id: String,
    pub kind: ElementKind,
    pub rect: Rect,
}

impl FixedElement {
    pub fn new(id: impl Into<String>, kind: ElementKind, rect: Rect) -> Self {
        Self {
            id: id.into(),
            kind,
            rect,
        }
    }
}

/// Template for one movable table: what must be placed, not where.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableSpec {
    pub id: String,
    pub kind: ElementKind,
    pub w: f64,
    pub h: f64,
}

impl TableSpec {
    pub fn new(id: impl Into<String>, w: f64, h: f64) -> Self {
        Self {
            id: id.into(),
            kind: ElementKind::Table,
            w,
            h,
        }
    }

    /// Instantiates the template at `(x, y)`.
    pub fn place_at(&self, x: f64, y: f64) -> TablePlacement {
        TablePlacement {
            id: self.id.clone(),
            kind: self.kind,
            x,
            y,
            w: self.w,
            h: self.h,
        }
    }

    /// The sentinel placement used when no valid spot was found.
    pub fn unplaced(&self) -> TablePlacement {
        self.place_at(UNPLACED_COORD, UNPLACED_COORD)
    }
}

/// A table at a concrete position.
///
/// Rotation swaps `w` and `h`, so a placement's dimensions may differ from
/// its [`TableSpec`] by a transposition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TablePlacement {
    pub id: String,
    pub kind: ElementKind,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl TablePlacement {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }

    /// Whether this is the off-plan sentinel.
    pub fn is_unplaced(&self) -> bool {
        self.x == UNPLACED_COORD && self.y == UNPLACED_COORD
    }

    pub(crate) fn with_rect(&self, rect: Rect) -> Self {
        Self {
            id: self.id.clone(),
            kind: self.kind,
            x: rect.x,
            y: rect.y,
            w: rect.w,
            h: rect.h,
        }
    }
}

/// One candidate layout: a placement per table, in table-spec order.
///
/// Gene `i` always carries the table identified by the `i`-th
/// [`TableSpec`]; crossover and mutation preserve that alignment.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    pub placements: Vec<TablePlacement>,
}

impl Layout {
    pub fn new(placements: Vec<TablePlacement>) -> Self {
        Self { placements }
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TablePlacement> {
        self.placements.iter()
    }

    /// Rectangles of every placement except the one at `skip`.
    pub fn rects_except(&self, skip: usize) -> impl Iterator<Item = Rect> + '_ {
        self.placements
            .iter()
            .enumerate()
            .filter(move |(j, _)| *j != skip)
            .map(|(_, p)| p.rect())
    }

    /// Number of tables that ended up on the off-plan sentinel.
    pub fn unplaced_count(&self) -> usize {
        self.placements.iter().filter(|p| p.is_unplaced()).count()
    }
}

impl<'a> IntoIterator for &'a Layout {
    type Item = &'a TablePlacement;
    type IntoIter = std::slice::Iter<'a, TablePlacement>;

    fn into_iter(self) -> Self::IntoIter {
        self.placements.iter()
    }
}
