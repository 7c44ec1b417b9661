//! Geometry and validity model.
//!
//! Pure functions over axis-aligned rectangles. Nothing here depends on
//! the genetic engine; the engine calls in for every placement check.
//!
//! - [`collides`]: separating-axis overlap test with optional spacing
//! - [`distance`]: center-to-center Euclidean distance
//! - [`restricted_areas`]: buffered no-placement zones from fixed obstacles
//! - [`is_valid_placement`]: full positional validity of a table

mod rect;
mod validity;

pub use rect::{collides, distance, Rect};
pub use validity::{
    is_valid_placement, restricted_areas, within_plan, CHAIR_CLEARANCE, RESTRICTED_BUFFER,
};
