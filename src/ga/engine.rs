//! Generation-by-generation layout search.
//!
//! [`LayoutEngine`] owns the population, the random source and the
//! tracked best. A driver calls [`next_generation`](LayoutEngine::next_generation)
//! once per step and reads the observers in between; the engine never
//! halts by itself, it only reports a [`StopReason`].

use super::config::EngineConfig;
use super::problem::LayoutProblem;
use crate::error::ConfigError;
use crate::geometry::Rect;
use crate::layout::{Floor, Layout};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use tracing::{debug, info};

/// Why a run should end. Checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// The generation counter reached `max_generations`.
    GenerationLimit,
    /// The best fitness reached `target_fitness`.
    TargetReached,
    /// More than `stagnation_limit` generations passed without a new best.
    Stagnation,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::GenerationLimit => f.write_str("generation limit reached"),
            StopReason::TargetReached => f.write_str("target fitness reached"),
            StopReason::Stagnation => f.write_str("no improvement within stagnation limit"),
        }
    }
}

/// Tracked search state. Replaced as a whole on reset.
#[derive(Debug, Clone)]
struct EngineState {
    generation: usize,
    best_fitness: f64,
    best: Option<Layout>,
    last_improvement: usize,
    fitness_history: Vec<f64>,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            generation: 0,
            best_fitness: f64::NEG_INFINITY,
            best: None,
            last_improvement: 0,
            fitness_history: Vec::new(),
        }
    }
}

/// The genetic layout engine.
///
/// # Usage
///
/// ```
/// use u_layout::ga::{EngineConfig, LayoutEngine};
/// use u_layout::layout::{Floor, FloorPlan, TableSpec};
///
/// let floor = Floor::new(
///     FloorPlan::new(40.0, 30.0),
///     vec![],
///     vec![TableSpec::new("t1", 4.0, 2.0), TableSpec::new("t2", 20.0, 4.0)],
/// )
/// .unwrap();
/// let config = EngineConfig::default().with_seed(42).with_max_generations(5);
/// let mut engine = LayoutEngine::new(floor, config).unwrap();
///
/// while engine.next_generation().is_none() {}
/// assert_eq!(engine.generation(), 5);
/// assert!(engine.best_layout().is_some());
/// ```
#[derive(Debug)]
pub struct LayoutEngine {
    problem: LayoutProblem,
    config: EngineConfig,
    rng: StdRng,
    population: Vec<Layout>,
    state: EngineState,
}

impl LayoutEngine {
    /// Validates `config`, derives the restricted areas and seeds the
    /// initial population.
    pub fn new(floor: Floor, config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        let problem = LayoutProblem::new(floor, config.spacing);

        let mut engine = Self {
            problem,
            config,
            rng,
            population: Vec::new(),
            state: EngineState::default(),
        };
        engine.population = engine.seed_population();

        debug!(
            population = engine.config.population_size,
            tables = engine.problem.floor().tables.len(),
            restricted = engine.problem.restricted_areas().len(),
            selection = %engine.config.selection,
            "layout engine initialized"
        );
        Ok(engine)
    }

    /// Runs one generation and reports whether the run should stop.
    ///
    /// Evaluates the population, records a new best if one appeared,
    /// breeds the next population (selection, pairwise crossover,
    /// mutation) and appends this generation's best fitness to the
    /// history.
    pub fn next_generation(&mut self) -> Option<StopReason> {
        let fitness: Vec<f64> = self
            .population
            .iter()
            .map(|layout| self.problem.evaluate(layout))
            .collect();

        let (best_idx, generation_best) = fitness
            .iter()
            .copied()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .unwrap_or((0, f64::NEG_INFINITY));

        if generation_best > self.state.best_fitness {
            self.state.best_fitness = generation_best;
            self.state.best = Some(self.population[best_idx].clone());
            self.state.last_improvement = self.state.generation;
            info!(
                generation = self.state.generation,
                fitness = generation_best,
                "new best layout"
            );
        }

        let parents = self
            .config
            .selection
            .select_population(&self.population, &fitness, &mut self.rng);
        self.population = self.breed(parents);

        self.state.generation += 1;
        self.state.fitness_history.push(generation_best);

        debug!(
            generation = self.state.generation,
            generation_best,
            best = self.state.best_fitness,
            "generation complete"
        );

        let reason = self.stop_reason();
        if let Some(reason) = reason {
            info!(
                generation = self.state.generation,
                best = self.state.best_fitness,
                %reason,
                "stop condition met"
            );
        }
        reason
    }

    /// Pairs parents (0 & 1, 2 & 3, ...), crosses each pair and mutates
    /// both children. An odd leftover parent is only mutated.
    fn breed(&mut self, parents: Vec<Layout>) -> Vec<Layout> {
        let rate = self.config.mutation_rate;
        let mut next = Vec::with_capacity(parents.len());

        for pair in parents.chunks(2) {
            match pair {
                [p1, p2] => {
                    let (mut c1, mut c2) = self.problem.crossover(p1, p2, &mut self.rng);
                    self.problem.mutate(&mut c1, rate, &mut self.rng);
                    self.problem.mutate(&mut c2, rate, &mut self.rng);
                    next.push(c1);
                    next.push(c2);
                }
                [single] => {
                    let mut child = single.clone();
                    self.problem.mutate(&mut child, rate, &mut self.rng);
                    next.push(child);
                }
                _ => unreachable!("chunks(2) yields one or two items"),
            }
        }

        next
    }

    fn stop_reason(&self) -> Option<StopReason> {
        let s = &self.state;
        if s.generation >= self.config.max_generations {
            Some(StopReason::GenerationLimit)
        } else if s.best_fitness >= self.config.target_fitness {
            Some(StopReason::TargetReached)
        } else if s.generation - s.last_improvement > self.config.stagnation_limit {
            Some(StopReason::Stagnation)
        } else {
            None
        }
    }

    /// Re-seeds the population and clears all tracked state.
    ///
    /// The random source keeps running; it is not re-seeded.
    pub fn reset(&mut self) {
        self.population = self.seed_population();
        self.state = EngineState::default();
        debug!("layout engine reset");
    }

    fn seed_population(&mut self) -> Vec<Layout> {
        (0..self.config.population_size)
            .map(|_| self.problem.create_individual(&mut self.rng))
            .collect()
    }

    /// Number of completed generations.
    pub fn generation(&self) -> usize {
        self.state.generation
    }

    /// Best fitness seen so far; `-inf` before the first generation.
    pub fn best_fitness(&self) -> f64 {
        self.state.best_fitness
    }

    /// Best layout seen so far.
    pub fn best_layout(&self) -> Option<&Layout> {
        self.state.best.as_ref()
    }

    /// Generation index of the most recent new best.
    pub fn last_improvement(&self) -> usize {
        self.state.last_improvement
    }

    /// Best fitness of each completed generation, oldest first.
    pub fn fitness_history(&self) -> &[f64] {
        &self.state.fitness_history
    }

    pub fn population(&self) -> &[Layout] {
        &self.population
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn floor(&self) -> &Floor {
        self.problem.floor()
    }

    pub fn restricted_areas(&self) -> &[Rect] {
        self.problem.restricted_areas()
    }

    /// The problem definition, for scoring layouts outside the loop.
    pub fn problem(&self) -> &LayoutProblem {
        &self.problem
    }
}
