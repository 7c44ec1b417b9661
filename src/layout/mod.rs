//! Floor plan data model.
//!
//! - [`FloorPlan`]: room dimensions
//! - [`FixedElement`]: walls, bathrooms and other immovable obstacles
//! - [`TableSpec`] / [`TablePlacement`]: a table template and its instance
//! - [`Layout`]: one candidate arrangement (a GA individual)
//! - [`Floor`]: the loaded room, built from a flat [`Element`] list

mod floor;
mod types;

pub use floor::{Element, Floor};
pub use types::{
    ElementKind, FixedElement, FloorPlan, Layout, TablePlacement, TableSpec, UNPLACED_COORD,
};
