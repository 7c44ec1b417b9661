//! Genetic table layout optimizer.
//!
//! Searches for an arrangement of rectangular tables inside a fixed floor
//! plan that avoids walls, bathrooms, restricted zones and other tables,
//! while maximizing seating capacity, spacing, centrality and density.
//!
//! - **Geometry**: Pure rectangle predicates: collision with spacing,
//!   buffered restricted areas, and positional validity with chair
//!   clearance.
//! - **Layout**: Floor plan data model and intake of a flat element list.
//! - **GA**: Population-based search with tournament, roulette or rank
//!   selection, single-point crossover and validity-preserving mutation,
//!   stepped one generation at a time.
//!
//! # Example
//!
//! ```
//! use u_layout::ga::{EngineConfig, LayoutEngine, LayoutRunner};
//! use u_layout::geometry::Rect;
//! use u_layout::layout::{ElementKind, FixedElement, Floor, FloorPlan, TableSpec};
//!
//! let floor = Floor::new(
//!     FloorPlan::new(60.0, 40.0),
//!     vec![FixedElement::new("wc", ElementKind::Bathroom, Rect::new(50.0, 30.0, 10.0, 10.0))],
//!     vec![TableSpec::new("t1", 20.0, 4.0), TableSpec::new("t2", 10.0, 4.0)],
//! )
//! .unwrap();
//!
//! let config = EngineConfig::default().with_seed(42).with_max_generations(20);
//! let mut engine = LayoutEngine::new(floor, config).unwrap();
//! let result = LayoutRunner::run(&mut engine);
//!
//! assert!(result.best_fitness > 0.0);
//! ```

pub mod error;
pub mod ga;
pub mod geometry;
pub mod layout;

pub use error::ConfigError;
