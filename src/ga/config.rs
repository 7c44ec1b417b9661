//! Engine configuration.
//!
//! [`EngineConfig`] holds every parameter that controls the layout search.

use super::selection::Selection;
use crate::error::ConfigError;

/// Configuration for the layout engine.
///
/// # Defaults
///
/// ```
/// use u_layout::ga::{EngineConfig, Selection};
///
/// let config = EngineConfig::default();
/// assert_eq!(config.population_size, 30);
/// assert_eq!(config.max_generations, 1000);
/// assert_eq!(config.selection, Selection::Rank);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_layout::ga::{EngineConfig, Selection};
///
/// let config = EngineConfig::default()
///     .with_population_size(60)
///     .with_selection(Selection::Tournament(5))
///     .with_mutation_rate(0.2)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Number of layouts in the population. Constant for the whole run.
    pub population_size: usize,

    /// Per-gene probability of attempting a mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Minimum free gap required between two tables.
    pub spacing: f64,

    /// Generation count at which the run reports
    /// [`StopReason::GenerationLimit`](super::StopReason::GenerationLimit).
    pub max_generations: usize,

    /// Best fitness at which the run reports
    /// [`StopReason::TargetReached`](super::StopReason::TargetReached).
    ///
    /// This is a tuning threshold, not a theoretical maximum.
    pub target_fitness: f64,

    /// Generations allowed since the last new best before the run reports
    /// [`StopReason::Stagnation`](super::StopReason::Stagnation).
    pub stagnation_limit: usize,

    /// Parent selection strategy.
    pub selection: Selection,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from system entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            population_size: 30,
            mutation_rate: 0.1,
            spacing: 2.0,
            max_generations: 1000,
            target_fitness: 500.0,
            stagnation_limit: 500,
            selection: Selection::default(),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the required gap between tables.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the target fitness.
    pub fn with_target_fitness(mut self, target: f64) -> Self {
        self.target_fitness = target;
        self
    }

    /// Sets the stagnation limit.
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Sets the selection strategy from its identifier
    /// (`"tournament"`, `"roulette"` or `"rank"`).
    pub fn with_selection_name(self, name: &str) -> Result<Self, ConfigError> {
        Ok(self.with_selection(name.parse()?))
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::InvalidMutationRate(self.mutation_rate));
        }
        if self.spacing.is_nan() || self.spacing < 0.0 {
            return Err(ConfigError::NegativeSpacing(self.spacing));
        }
        if self.max_generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        if self.selection == Selection::Tournament(0) {
            return Err(ConfigError::EmptyTournament);
        }
        Ok(())
    }
}
