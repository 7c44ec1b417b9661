//! Configuration errors.
//!
//! Every failure the crate can report happens at construction time.
//! Once a [`LayoutEngine`](crate::ga::LayoutEngine) exists, its
//! generational step never fails.

/// Errors raised while validating engine parameters or the floor input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The selection identifier is not one of `tournament`, `roulette`, `rank`.
    #[error("unknown selection strategy: {0:?}")]
    UnknownSelection(String),

    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    #[error("mutation_rate must lie in [0, 1], got {0}")]
    InvalidMutationRate(f64),

    #[error("spacing must be non-negative, got {0}")]
    NegativeSpacing(f64),

    #[error("max_generations must be at least 1")]
    ZeroGenerations,

    #[error("tournament size must be at least 1")]
    EmptyTournament,

    /// Floor plan dimensions must be finite and strictly positive.
    #[error("invalid floor plan dimensions {width} x {height}")]
    InvalidPlan { width: f64, height: f64 },

    /// A fixed element was given without an `x`/`y` position.
    #[error("fixed element {id:?} has no position")]
    MissingPosition { id: String },
}
