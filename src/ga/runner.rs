//! Headless driver loop.
//!
//! [`LayoutRunner`] repeatedly steps a [`LayoutEngine`] until it reports a
//! [`StopReason`] or an external cancellation flag is raised.

use super::engine::{LayoutEngine, StopReason};
use crate::layout::Layout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

/// Result of a complete layout search.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// The best layout found during the run, if any generation completed.
    pub best: Option<Layout>,

    /// Fitness of `best`; `-inf` if no generation completed.
    pub best_fitness: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Why the engine asked to stop. `None` when cancelled first.
    pub stop_reason: Option<StopReason>,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best fitness of each generation.
    pub fitness_history: Vec<f64>,
}

/// Drives a [`LayoutEngine`] to completion.
///
/// # Usage
///
/// ```
/// use u_layout::ga::{EngineConfig, LayoutEngine, LayoutRunner, StopReason};
/// use u_layout::layout::{Floor, FloorPlan, TableSpec};
///
/// let floor = Floor::new(FloorPlan::new(40.0, 30.0), vec![], vec![TableSpec::new("t1", 4.0, 2.0)])
///     .unwrap();
/// let config = EngineConfig::default().with_seed(1).with_max_generations(10);
/// let mut engine = LayoutEngine::new(floor, config).unwrap();
///
/// let result = LayoutRunner::run(&mut engine);
/// assert_eq!(result.stop_reason, Some(StopReason::GenerationLimit));
/// assert_eq!(result.generations, 10);
/// ```
pub struct LayoutRunner;

impl LayoutRunner {
    /// Steps the engine until it reports a stop reason.
    pub fn run(engine: &mut LayoutEngine) -> RunResult {
        Self::run_with_cancel(engine, None)
    }

    /// Steps the engine until it reports a stop reason or `cancel` is set.
    ///
    /// The flag is checked before each generation, so a run cancelled
    /// mid-generation finishes that generation first.
    pub fn run_with_cancel(engine: &mut LayoutEngine, cancel: Option<Arc<AtomicBool>>) -> RunResult {
        info!(
            population = engine.config().population_size,
            max_generations = engine.config().max_generations,
            selection = %engine.config().selection,
            "layout search started"
        );

        let mut cancelled = false;
        let stop_reason = loop {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break None;
                }
            }
            if let Some(reason) = engine.next_generation() {
                break Some(reason);
            }
        };

        info!(
            generations = engine.generation(),
            best = engine.best_fitness(),
            cancelled,
            "layout search finished"
        );

        RunResult {
            best: engine.best_layout().cloned(),
            best_fitness: engine.best_fitness(),
            generations: engine.generation(),
            stop_reason,
            cancelled,
            fitness_history: engine.fitness_history().to_vec(),
        }
    }
}
