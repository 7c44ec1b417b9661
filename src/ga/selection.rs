//! Selection strategies for the layout engine.
//!
//! Each strategy builds a whole parent pool at once: `N` draws with
//! replacement from a population of `N`, biased toward higher fitness.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Baker (1985), "Adaptive Selection Methods for Genetic Algorithms"

use crate::error::ConfigError;
use rand::seq::index;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Tournament size used when a strategy is parsed from `"tournament"`.
pub const DEFAULT_TOURNAMENT_SIZE: usize = 5;

/// Selection strategy for choosing parents.
///
/// All strategies assume **maximization** (higher fitness = better).
///
/// # Examples
///
/// ```
/// use u_layout::ga::Selection;
///
/// let sel: Selection = "roulette".parse().unwrap();
/// assert_eq!(sel, Selection::Roulette);
/// assert!("best".parse::<Selection>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Draw `k` distinct individuals uniformly at random, keep the fittest.
    ///
    /// `k` is clamped to the population size.
    Tournament(usize),

    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// Falls back to uniform weights when the total fitness is zero.
    Roulette,

    /// Rank-based selection.
    ///
    /// Individuals are sorted ascending by fitness and weighted by rank
    /// position (1 = worst, `n` = best). Only relative order matters, so a
    /// single outlier cannot take over the parent pool.
    Rank,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Rank
    }
}

impl FromStr for Selection {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tournament" => Ok(Selection::Tournament(DEFAULT_TOURNAMENT_SIZE)),
            "roulette" => Ok(Selection::Roulette),
            "rank" => Ok(Selection::Rank),
            other => Err(ConfigError::UnknownSelection(other.to_string())),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Tournament(k) => write!(f, "tournament({k})"),
            Selection::Roulette => f.write_str("roulette"),
            Selection::Rank => f.write_str("rank"),
        }
    }
}

impl Selection {
    /// Picks `fitness.len()` parent indices, with replacement.
    ///
    /// Returns an empty pool for an empty population.
    pub fn select_indices<R: Rng>(&self, fitness: &[f64], rng: &mut R) -> Vec<usize> {
        if fitness.is_empty() {
            return Vec::new();
        }
        match self {
            Selection::Tournament(k) => tournament(fitness, *k, rng),
            Selection::Roulette => roulette(fitness, rng),
            Selection::Rank => rank(fitness, rng),
        }
    }

    /// Builds a parent pool of the same size as `population`.
    ///
    /// # Panics
    /// Panics if `population` and `fitness` differ in length.
    pub fn select_population<T: Clone, R: Rng>(
        &self,
        population: &[T],
        fitness: &[f64],
        rng: &mut R,
    ) -> Vec<T> {
        assert_eq!(
            population.len(),
            fitness.len(),
            "population and fitness must have equal length"
        );
        self.select_indices(fitness, rng)
            .into_iter()
            .map(|i| population[i].clone())
            .collect()
    }
}

fn tournament<R: Rng>(fitness: &[f64], k: usize, rng: &mut R) -> Vec<usize> {
    let n = fitness.len();
    let k = k.clamp(1, n);

    (0..n)
        .map(|_| {
            index::sample(rng, n, k)
                .into_iter()
                .max_by(|&a, &b| fitness[a].total_cmp(&fitness[b]))
                .unwrap_or(0)
        })
        .collect()
}

fn roulette<R: Rng>(fitness: &[f64], rng: &mut R) -> Vec<usize> {
    let n = fitness.len();
    let total: f64 = fitness.iter().sum();

    if total <= 0.0 || !total.is_finite() {
        return (0..n).map(|_| rng.random_range(0..n)).collect();
    }

    (0..n)
        .map(|_| weighted_pick(fitness.iter().copied(), total, rng).unwrap_or(n - 1))
        .collect()
}

fn rank<R: Rng>(fitness: &[f64], rng: &mut R) -> Vec<usize> {
    let n = fitness.len();

    // Ascending: order[0] is the worst and gets weight 1.
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| fitness[a].total_cmp(&fitness[b]));

    let total = (n * (n + 1)) as f64 / 2.0;
    (0..n)
        .map(|_| {
            let pos = weighted_pick((1..=n).map(|r| r as f64), total, rng).unwrap_or(n - 1);
            order[pos]
        })
        .collect()
}

/// Cumulative-weight scan. Returns `None` only on floating-point shortfall.
fn weighted_pick<I, R>(weights: I, total: f64, rng: &mut R) -> Option<usize>
where
    I: IntoIterator<Item = f64>,
    R: Rng,
{
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, w) in weights.into_iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return Some(i);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn counts(sel: Selection, fitness: &[f64], rounds: usize) -> Vec<usize> {
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = vec![0usize; fitness.len()];
        for _ in 0..rounds {
            for i in sel.select_indices(fitness, &mut rng) {
                counts[i] += 1;
            }
        }
        counts
    }

    #[test]
    fn test_parse_identifiers() {
        assert_eq!("tournament".parse::<Selection>().unwrap(), Selection::Tournament(5));
        assert_eq!("roulette".parse::<Selection>().unwrap(), Selection::Roulette);
        assert_eq!("rank".parse::<Selection>().unwrap(), Selection::Rank);
        assert_eq!(
            "Rank".parse::<Selection>(),
            Err(ConfigError::UnknownSelection("Rank".into()))
        );
    }

    #[test]
    fn test_pool_size_matches_population() {
        let fitness = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0];
        let mut rng = StdRng::seed_from_u64(42);
        for sel in [Selection::Tournament(5), Selection::Roulette, Selection::Rank] {
            let pool = sel.select_indices(&fitness, &mut rng);
            assert_eq!(pool.len(), fitness.len(), "{sel}");
            assert!(pool.iter().all(|&i| i < fitness.len()));
        }
    }

    #[test]
    fn test_tournament_full_size_always_picks_best() {
        let fitness = [10.0, 5.0, 80.0, 8.0];
        let c = counts(Selection::Tournament(4), &fitness, 200);
        assert_eq!(c[2], 800);
    }

    #[test]
    fn test_tournament_larger_than_population() {
        let fitness = [1.0, 2.0];
        let c = counts(Selection::Tournament(5), &fitness, 100);
        assert_eq!(c, vec![0, 200]);
    }

    #[test]
    fn test_roulette_favors_best() {
        let fitness = [1.0, 50.0, 100.0, 10.0];
        let c = counts(Selection::Roulette, &fitness, 2500);
        assert!(c[2] > c[0], "best should be selected more often: {c:?}");
        assert!(c[1] > c[3], "{c:?}");
    }

    #[test]
    fn test_roulette_zero_total_is_uniform() {
        let fitness = [0.0; 6];
        let mut rng = StdRng::seed_from_u64(42);
        let pool = Selection::Roulette.select_indices(&fitness, &mut rng);
        assert_eq!(pool.len(), 6);

        let c = counts(Selection::Roulette, &fitness, 2000);
        for &n in &c {
            assert!(n > 1500, "expected roughly uniform, got {c:?}");
        }
    }

    #[test]
    fn test_rank_ignores_magnitude() {
        // Same order, wildly different magnitudes: identical selection
        // pressure under the same seed.
        let a = counts(Selection::Rank, &[1.0, 2.0, 3.0, 4.0], 500);
        let b = counts(Selection::Rank, &[0.001, 2.0, 3.0, 1e9], 500);
        assert_eq!(a, b);
        assert!(a[3] > a[0], "{a:?}");
    }

    #[test]
    fn test_select_population_clones_members() {
        let population = vec!["a", "b", "c"];
        let fitness = [0.0, 0.0, 100.0];
        let mut rng = StdRng::seed_from_u64(42);
        let pool = Selection::Tournament(3).select_population(&population, &fitness, &mut rng);
        assert_eq!(pool, vec!["c", "c", "c"]);
    }

    #[test]
    fn test_empty_population() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(Selection::Rank.select_indices(&[], &mut rng).is_empty());
    }
}
