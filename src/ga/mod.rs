//! Genetic layout engine.
//!
//! Evolves a fixed-size population of [`Layout`](crate::layout::Layout)s
//! toward collision-free, well-spread table arrangements.
//!
//! # Key Types
//!
//! - [`EngineConfig`]: Search parameters (population size, rates, stop criteria)
//! - [`Selection`]: Tournament, roulette or rank parent selection
//! - [`LayoutProblem`]: Individual creation, fitness, crossover and mutation
//! - [`LayoutEngine`]: One generation per call, with read-only observers
//! - [`LayoutRunner`]: Headless loop until a [`StopReason`] or cancellation
//!
//! # Generation Step
//!
//! evaluate → record best → select → pairwise crossover → mutate → replace
//!
//! # Submodules
//!
//! - [`fitness`]: Violation scan, penalty branch and desirability terms
//! - [`operators`]: Alignment-preserving single-point crossover

mod config;
mod engine;
pub mod fitness;
pub mod operators;
mod problem;
mod runner;
mod selection;

pub use config::EngineConfig;
pub use engine::{LayoutEngine, StopReason};
pub use fitness::{Assessment, ScoreTerms, Violations, FEASIBLE_BONUS};
pub use problem::{LayoutProblem, MUTATION_ATTEMPTS, PLACEMENT_ATTEMPTS};
pub use runner::{LayoutRunner, RunResult};
pub use selection::{Selection, DEFAULT_TOURNAMENT_SIZE};
