//! Crossover operators for sequence genomes.
//!
//! Both point-based and uniform crossover are *complementary*: at every
//! position, one offspring inherits the male allele and the other the female
//! allele. No position ever receives both alleles from the same parent.
//!
//! - [`NPointCrossover`]: splice `n` random segments, alternating parents
//! - [`UniformCrossover`]: independent fair coin per position
//! - [`AsexualCrossover`]: returns the parents unchanged (mutation-only search)
//!
//! # References
//!
//! - De Jong (1975), *An Analysis of the Behavior of a Class of Genetic
//!   Adaptive Systems* (n-point crossover)
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"

use super::types::Crossover;
use crate::error::{GeneticError, Result};
use rand::Rng;

/// N-point crossover.
///
/// Draws `points` break positions uniformly in `0..len`, adds the fixed
/// boundaries `0` and `len`, and sorts them. The `points + 1` segments
/// between consecutive boundaries alternate in origin: the first segment
/// goes female→offspring1 / male→offspring2, the second the reverse, and so
/// on. Break positions may coincide, producing empty segments.
///
/// ```
/// use u_genetic::ga::{Crossover, NPointCrossover};
/// use u_genetic::random::create_rng;
///
/// let mut rng = create_rng(42);
/// let crossover = NPointCrossover::new(2).unwrap();
/// let (a, b) = crossover.crossover(vec![0u8; 8], vec![1u8; 8], &mut rng).unwrap();
/// assert!(a.iter().zip(&b).all(|(x, y)| x != y));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NPointCrossover {
    points: usize,
}

impl NPointCrossover {
    /// Creates an n-point crossover.
    ///
    /// # Errors
    /// [`GeneticError::InvalidPointCount`] if `points < 1`.
    pub fn new(points: usize) -> Result<Self> {
        if points < 1 {
            return Err(GeneticError::InvalidPointCount(points));
        }
        Ok(Self { points })
    }

    /// Single-point crossover, equivalent to `NPointCrossover::new(1)`.
    pub fn single_point() -> Self {
        Self { points: 1 }
    }

    /// Number of random break points.
    pub fn points(&self) -> usize {
        self.points
    }
}

impl<E: Clone> Crossover<Vec<E>> for NPointCrossover {
    fn crossover<R: Rng + ?Sized>(
        &self,
        male: Vec<E>,
        female: Vec<E>,
        rng: &mut R,
    ) -> Result<(Vec<E>, Vec<E>)> {
        let len = check_lengths(&male, &female)?;
        if len == 0 {
            return Ok((male, female));
        }

        let mut bounds = Vec::with_capacity(self.points + 2);
        bounds.push(0);
        bounds.extend((0..self.points).map(|_| rng.random_range(0..len)));
        bounds.push(len);
        bounds.sort_unstable();

        let mut offspring1 = Vec::with_capacity(len);
        let mut offspring2 = Vec::with_capacity(len);
        for (segment, window) in bounds.windows(2).enumerate() {
            let (from, to) = (window[0], window[1]);
            // Segments are 1-based in the alternation rule: odd ones swap.
            if segment % 2 == 0 {
                offspring1.extend_from_slice(&female[from..to]);
                offspring2.extend_from_slice(&male[from..to]);
            } else {
                offspring1.extend_from_slice(&male[from..to]);
                offspring2.extend_from_slice(&female[from..to]);
            }
        }

        Ok((offspring1, offspring2))
    }
}

/// Uniform crossover.
///
/// For each position a fair coin decides whether offspring1 takes the male
/// allele and offspring2 the female one, or the exact opposite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UniformCrossover;

impl<E> Crossover<Vec<E>> for UniformCrossover {
    fn crossover<R: Rng + ?Sized>(
        &self,
        male: Vec<E>,
        female: Vec<E>,
        rng: &mut R,
    ) -> Result<(Vec<E>, Vec<E>)> {
        let len = check_lengths(&male, &female)?;

        let mut offspring1 = Vec::with_capacity(len);
        let mut offspring2 = Vec::with_capacity(len);
        for (m, f) in male.into_iter().zip(female) {
            if rng.random_bool(0.5) {
                offspring1.push(m);
                offspring2.push(f);
            } else {
                offspring1.push(f);
                offspring2.push(m);
            }
        }

        Ok((offspring1, offspring2))
    }
}

/// Passes both parents through unchanged.
///
/// Works for any genome type. Variation then comes from mutation alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AsexualCrossover;

impl<G> Crossover<G> for AsexualCrossover {
    fn crossover<R: Rng + ?Sized>(&self, male: G, female: G, _rng: &mut R) -> Result<(G, G)> {
        Ok((male, female))
    }
}

fn check_lengths<E>(male: &[E], female: &[E]) -> Result<usize> {
    if male.len() != female.len() {
        return Err(GeneticError::LengthMismatch {
            left: male.len(),
            right: female.len(),
        });
    }
    Ok(male.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;
    use rand::Rng;

    /// Every position carries one allele from each parent across the pair.
    fn is_complementary(male: &[u8], female: &[u8], c1: &[u8], c2: &[u8]) -> bool {
        c1.len() == male.len()
            && c2.len() == male.len()
            && (0..male.len()).all(|i| {
                (c1[i] == male[i] && c2[i] == female[i])
                    || (c1[i] == female[i] && c2[i] == male[i])
            })
    }

    fn random_bytes(rng: &mut impl Rng, n: usize) -> Vec<u8> {
        (0..n).map(|_| rng.random()).collect()
    }

    // ---- N-point ----

    #[test]
    fn test_npoint_complementary_for_many_point_counts() {
        let mut rng = create_rng(42);
        for points in [1, 2, 3, 4, 5, 10] {
            let crossover = NPointCrossover::new(points).unwrap();
            for _ in 0..50 {
                let male = random_bytes(&mut rng, 32);
                let female = random_bytes(&mut rng, 32);
                let (c1, c2) = crossover
                    .crossover(male.clone(), female.clone(), &mut rng)
                    .unwrap();
                assert!(
                    is_complementary(&male, &female, &c1, &c2),
                    "{points}-point crossover broke complementarity"
                );
            }
        }
    }

    #[test]
    fn test_npoint_rejects_zero_points() {
        assert_eq!(
            NPointCrossover::new(0),
            Err(GeneticError::InvalidPointCount(0))
        );
    }

    #[test]
    fn test_single_point_is_one_point() {
        assert_eq!(NPointCrossover::single_point().points(), 1);
        assert_eq!(NPointCrossover::single_point(), NPointCrossover::new(1).unwrap());
    }

    #[test]
    fn test_single_point_splices_two_segments() {
        let mut rng = create_rng(7);
        let male = vec![0u8; 16];
        let female = vec![1u8; 16];
        for _ in 0..100 {
            let (c1, c2) = NPointCrossover::single_point()
                .crossover(male.clone(), female.clone(), &mut rng)
                .unwrap();
            // offspring1 = female prefix then male suffix.
            let split = c1.iter().position(|&b| b == 0).unwrap_or(16);
            assert!(c1[..split].iter().all(|&b| b == 1));
            assert!(c1[split..].iter().all(|&b| b == 0));
            assert!(c2[..split].iter().all(|&b| b == 0));
            assert!(c2[split..].iter().all(|&b| b == 1));
        }
    }

    #[test]
    fn test_npoint_mismatched_lengths_fail() {
        let mut rng = create_rng(42);
        let err = NPointCrossover::new(2)
            .unwrap()
            .crossover(vec![1, 2, 3], vec![1, 2], &mut rng)
            .unwrap_err();
        assert_eq!(err, GeneticError::LengthMismatch { left: 3, right: 2 });
    }

    #[test]
    fn test_npoint_empty_genomes() {
        let mut rng = create_rng(42);
        let (c1, c2) = NPointCrossover::single_point()
            .crossover(Vec::<u8>::new(), Vec::new(), &mut rng)
            .unwrap();
        assert!(c1.is_empty() && c2.is_empty());
    }

    // ---- Uniform ----

    #[test]
    fn test_uniform_complementary() {
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let male = random_bytes(&mut rng, 32);
            let female = random_bytes(&mut rng, 32);
            let (c1, c2) = UniformCrossover
                .crossover(male.clone(), female.clone(), &mut rng)
                .unwrap();
            assert!(is_complementary(&male, &female, &c1, &c2));
        }
    }

    #[test]
    fn test_uniform_mixes_both_parents() {
        let mut rng = create_rng(42);
        let (c1, _) = UniformCrossover
            .crossover(vec![0u8; 64], vec![1u8; 64], &mut rng)
            .unwrap();
        let from_female = c1.iter().filter(|&&b| b == 1).count();
        assert!(
            (16..=48).contains(&from_female),
            "expected roughly half female alleles, got {from_female}/64"
        );
    }

    #[test]
    fn test_uniform_mismatched_lengths_fail() {
        let mut rng = create_rng(42);
        let err = UniformCrossover
            .crossover(vec![true], vec![true, false], &mut rng)
            .unwrap_err();
        assert_eq!(err, GeneticError::LengthMismatch { left: 1, right: 2 });
    }

    // ---- Asexual ----

    #[test]
    fn test_asexual_passthrough() {
        let mut rng = create_rng(42);
        let male = vec![1u8, 2, 3];
        let female = vec![4u8, 5, 6];
        let (c1, c2) = AsexualCrossover
            .crossover(male.clone(), female.clone(), &mut rng)
            .unwrap();
        assert_eq!(c1, male);
        assert_eq!(c2, female);
        assert!(is_complementary(&male, &female, &c1, &c2));
    }

    #[test]
    fn test_asexual_any_genome_type() {
        let mut rng = create_rng(42);
        let (a, b) = AsexualCrossover.crossover("left", "right", &mut rng).unwrap();
        assert_eq!((a, b), ("left", "right"));
    }

    proptest! {
        #[test]
        fn prop_npoint_preserves_length_and_alleles(
            pair in (0usize..48).prop_flat_map(|n| (
                proptest::collection::vec(any::<u8>(), n),
                proptest::collection::vec(any::<u8>(), n),
            )),
            points in 1usize..8,
            seed in any::<u64>(),
        ) {
            let (male, female) = pair;
            let mut rng = create_rng(seed);
            let (c1, c2) = NPointCrossover::new(points)
                .unwrap()
                .crossover(male.clone(), female.clone(), &mut rng)
                .unwrap();
            prop_assert!(is_complementary(&male, &female, &c1, &c2));
        }

        #[test]
        fn prop_uniform_preserves_length_and_alleles(
            pair in (0usize..48).prop_flat_map(|n| (
                proptest::collection::vec(any::<u8>(), n),
                proptest::collection::vec(any::<u8>(), n),
            )),
            seed in any::<u64>(),
        ) {
            let (male, female) = pair;
            let mut rng = create_rng(seed);
            let (c1, c2) = UniformCrossover
                .crossover(male.clone(), female.clone(), &mut rng)
                .unwrap();
            prop_assert!(is_complementary(&male, &female, &c1, &c2));
        }

        #[test]
        fn prop_mismatched_lengths_always_fail(
            male in proptest::collection::vec(any::<u8>(), 0..16),
            extra in 1usize..8,
        ) {
            let mut rng = create_rng(0);
            let female = vec![0u8; male.len() + extra];
            prop_assert!(UniformCrossover.crossover(male.clone(), female.clone(), &mut rng).is_err());
            prop_assert!(NPointCrossover::single_point().crossover(male, female, &mut rng).is_err());
        }
    }
}
