//! Mutation operators.
//!
//! Mutation is always in place: the operator perturbs the genome it is given
//! and returns nothing.

use super::types::Mutation;
use crate::error::{GeneticError, Result};
use rand::Rng;

/// Flips each allele of a binary genome independently with probability `rate`.
///
/// ```
/// use u_genetic::ga::{Mutation, RandomizedBinaryMutation};
/// use u_genetic::random::create_rng;
///
/// let mutation = RandomizedBinaryMutation::new(0.5).unwrap();
/// let mut genome = vec![false; 64];
/// mutation.mutate(&mut genome, &mut create_rng(1));
/// assert!(genome.iter().any(|&b| b));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomizedBinaryMutation {
    rate: f64,
}

impl RandomizedBinaryMutation {
    /// Creates a binary mutation with the given per-allele flip rate.
    ///
    /// # Errors
    /// [`GeneticError::InvalidMutationRate`] unless `0 < rate < 1`.
    pub fn new(rate: f64) -> Result<Self> {
        // Written so that NaN is rejected too.
        if !(rate > 0.0 && rate < 1.0) {
            return Err(GeneticError::InvalidMutationRate(rate));
        }
        Ok(Self { rate })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl Mutation<Vec<bool>> for RandomizedBinaryMutation {
    fn mutate<R: Rng + ?Sized>(&self, genome: &mut Vec<bool>, rng: &mut R) {
        for allele in genome.iter_mut() {
            if rng.random::<f64>() < self.rate {
                *allele = !*allele;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_rejects_out_of_range_rates() {
        for rate in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            assert!(
                RandomizedBinaryMutation::new(rate).is_err(),
                "rate {rate} should be rejected"
            );
        }
        assert_eq!(
            RandomizedBinaryMutation::new(0.0),
            Err(GeneticError::InvalidMutationRate(0.0))
        );
    }

    #[test]
    fn test_accepts_open_interval() {
        for rate in [1e-9, 0.05, 0.5, 0.999] {
            assert!(RandomizedBinaryMutation::new(rate).is_ok());
        }
    }

    #[test]
    fn test_flip_rate_is_respected() {
        let mutation = RandomizedBinaryMutation::new(0.1).unwrap();
        let mut rng = create_rng(42);
        let mut genome = vec![false; 10_000];
        mutation.mutate(&mut genome, &mut rng);

        let flipped = genome.iter().filter(|&&b| b).count();
        assert!(
            (800..=1200).contains(&flipped),
            "expected ~1000 flips at rate 0.1, got {flipped}"
        );
    }

    #[test]
    fn test_mutation_only_flips() {
        let mutation = RandomizedBinaryMutation::new(0.3).unwrap();
        let mut rng = create_rng(7);
        let original: Vec<bool> = (0..200).map(|i| i % 3 == 0).collect();
        let mut genome = original.clone();
        mutation.mutate(&mut genome, &mut rng);

        assert_eq!(genome.len(), original.len());
        assert_ne!(genome, original);
    }

    #[test]
    fn test_empty_genome() {
        let mutation = RandomizedBinaryMutation::new(0.5).unwrap();
        let mut genome: Vec<bool> = vec![];
        mutation.mutate(&mut genome, &mut create_rng(1));
        assert!(genome.is_empty());
    }
}
