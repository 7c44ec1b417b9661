//! Position-preserving genetic operators.
//!
//! Layout genes are index-aligned with the table specs, so recombination
//! must never move a gene to another index. Single-point crossover keeps
//! that alignment by construction.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*

use rand::Rng;

/// Single-point crossover.
///
/// Draws a cut point `p` uniformly from `[1, n - 1]` and returns
/// `(parent1[..p] ++ parent2[p..], parent2[..p] ++ parent1[p..])`.
/// Parents with fewer than two genes cannot be cut and are returned as
/// clones.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn single_point_crossover<T: Clone, R: Rng>(
    parent1: &[T],
    parent2: &[T],
    rng: &mut R,
) -> (Vec<T>, Vec<T>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let point = rng.random_range(1..n);
    (
        splice(parent1, parent2, point),
        splice(parent2, parent1, point),
    )
}

fn splice<T: Clone>(head: &[T], tail: &[T], point: usize) -> Vec<T> {
    let mut child = Vec::with_capacity(head.len());
    child.extend_from_slice(&head[..point]);
    child.extend_from_slice(&tail[point..]);
    child
}
