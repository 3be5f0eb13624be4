//! Selection strategies for the GA.
//!
//! Selection receives the current population sorted by fitness (descending)
//! and returns mating pairs. Both strategies here:
//!
//! - return `ceil(n / 2)` pairs, enough to refill the population
//! - never pair a genome with itself
//! - leave their inputs untouched
//!
//! Self-mating is avoided by redrawing. Redraws are bounded by
//! `max_retries`; once exhausted, the second mate is drawn from the rest of
//! the population with the first mate excluded, so selection always
//! terminates, even for degenerate populations.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::{Fitness, Selection};
use crate::error::{GeneticError, Result};
use crate::random::unique_indices;
use log::warn;
use rand::Rng;

/// Redraw budget used by the selectors unless overridden.
pub const DEFAULT_MAX_RETRIES: usize = 64;

/// Tournament selection.
///
/// Each parent is the fittest of `pool_size` distinct, randomly drawn
/// genomes. Larger pools mean stronger selection pressure:
/// - 2: light pressure (good for diversity)
/// - 3-5: moderate pressure (typical)
/// - more: strong pressure (risk of premature convergence)
///
/// `pool_size` equal to the population size is allowed. Every tournament
/// then returns the overall best, so the second mate always comes from the
/// exclusion fallback and is the runner-up.
///
/// # Complexity
/// O(k) per tournament
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TournamentSelection {
    pool_size: usize,
    max_retries: usize,
}

impl TournamentSelection {
    /// Creates a tournament selection with the given pool size.
    ///
    /// # Errors
    /// [`GeneticError::InvalidPoolSize`] if `pool_size < 2`.
    pub fn new(pool_size: usize) -> Result<Self> {
        if pool_size < 2 {
            return Err(GeneticError::InvalidPoolSize(pool_size));
        }
        Ok(Self {
            pool_size,
            max_retries: DEFAULT_MAX_RETRIES,
        })
    }

    /// Sets how many colliding draws are retried before falling back.
    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    /// Holds one tournament, optionally with one index barred from entry.
    fn random_winner<R: Rng + ?Sized>(
        &self,
        fitnesses: &[Fitness],
        excluded: Option<usize>,
        rng: &mut R,
    ) -> usize {
        let n = fitnesses.len();
        match excluded {
            None => tournament_winner(&unique_indices(rng, n, self.pool_size), fitnesses),
            Some(skip) => {
                let pool = self.pool_size.min(n - 1);
                let contestants: Vec<usize> = unique_indices(rng, n - 1, pool)
                    .into_iter()
                    .map(|i| if i >= skip { i + 1 } else { i })
                    .collect();
                tournament_winner(&contestants, fitnesses)
            }
        }
    }
}

impl<G: Clone> Selection<G> for TournamentSelection {
    fn select<R: Rng + ?Sized>(
        &self,
        genomes: &[G],
        fitnesses: &[Fitness],
        rng: &mut R,
    ) -> Result<Vec<(G, G)>> {
        let n = check_population(genomes, fitnesses)?;
        if self.pool_size > n {
            return Err(GeneticError::PoolExceedsPopulation {
                pool_size: self.pool_size,
                population_size: n,
            });
        }

        let target = n.div_ceil(2);
        let mut pairs = Vec::with_capacity(target);
        let mut fallbacks = 0usize;

        while pairs.len() < target {
            let mut first = self.random_winner(fitnesses, None, rng);
            let mut second = self.random_winner(fitnesses, None, rng);
            let mut collisions = 0usize;

            while first == second {
                if collisions >= self.max_retries {
                    second = self.random_winner(fitnesses, Some(first), rng);
                    fallbacks += 1;
                    break;
                }
                collisions += 1;
                first = self.random_winner(fitnesses, None, rng);
                second = self.random_winner(fitnesses, None, rng);
            }

            pairs.push((genomes[first].clone(), genomes[second].clone()));
        }

        if fallbacks > 0 {
            warn!(
                "tournament selection (pool {}): {fallbacks}/{target} pairs needed the exclusion fallback",
                self.pool_size
            );
        }
        Ok(pairs)
    }
}

/// Returns the contestant with the highest fitness.
///
/// Ties go to the contestant listed first.
///
/// # Panics
/// Panics if `contestants` is empty.
pub fn tournament_winner(contestants: &[usize], fitnesses: &[Fitness]) -> usize {
    let (&first, rest) = contestants
        .split_first()
        .expect("tournament needs at least one contestant");
    rest.iter().fold(first, |best, &c| {
        if fitnesses[c] > fitnesses[best] {
            c
        } else {
            best
        }
    })
}

/// Fitness-proportionate (roulette wheel) selection.
///
/// Each genome's slice of the wheel is its fitness floored at zero, divided
/// by the total. Negative fitness therefore never wins a spin. When the
/// whole population has zero mass the wheel is uniform.
///
/// **Warning**: susceptible to super-individual dominance when fitness
/// variance is high.
///
/// # Complexity
/// O(n) per spin (linear scan)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouletteSelection {
    max_retries: usize,
}

impl Default for RouletteSelection {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl RouletteSelection {
    /// Sets how many colliding spins are retried before falling back.
    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }
}

impl<G: Clone> Selection<G> for RouletteSelection {
    fn select<R: Rng + ?Sized>(
        &self,
        genomes: &[G],
        fitnesses: &[Fitness],
        rng: &mut R,
    ) -> Result<Vec<(G, G)>> {
        let n = check_population(genomes, fitnesses)?;
        let wheel = Wheel::new(fitnesses);

        let target = n.div_ceil(2);
        let mut pairs = Vec::with_capacity(target);
        let mut fallbacks = 0usize;

        while pairs.len() < target {
            let first = wheel.spin(rng);
            let mut second = wheel.spin(rng);
            let mut collisions = 0usize;

            while second == first {
                if collisions >= self.max_retries {
                    second = wheel.spin_excluding(first, rng);
                    fallbacks += 1;
                    break;
                }
                collisions += 1;
                second = wheel.spin(rng);
            }

            pairs.push((genomes[first].clone(), genomes[second].clone()));
        }

        if fallbacks > 0 {
            warn!("roulette selection: {fallbacks}/{target} pairs needed the exclusion fallback");
        }
        Ok(pairs)
    }
}

/// A roulette wheel built from fitness values.
#[derive(Debug, Clone, PartialEq)]
pub struct Wheel {
    proportions: Vec<f64>,
}

impl Wheel {
    /// Builds the wheel. Negative fitness is floored at zero; an all-zero
    /// population gets equal slices.
    pub fn new(fitnesses: &[Fitness]) -> Self {
        let weights: Vec<f64> = fitnesses.iter().map(|&f| f.max(0) as f64).collect();
        let total: f64 = weights.iter().sum();

        let proportions = if total > 0.0 {
            weights.iter().map(|w| w / total).collect()
        } else {
            let n = fitnesses.len().max(1) as f64;
            vec![1.0 / n; fitnesses.len()]
        };
        Self { proportions }
    }

    /// Each slot's share of the wheel. Sums to 1.
    pub fn proportions(&self) -> &[f64] {
        &self.proportions
    }

    /// Draws a value in `[0, 1)` and walks the slots, subtracting each share,
    /// until the remainder is no longer positive.
    ///
    /// # Panics
    /// Panics if the wheel has no slots.
    pub fn spin<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        assert!(!self.proportions.is_empty(), "cannot spin an empty wheel");
        let mut remaining: f64 = rng.random();
        for (i, &p) in self.proportions.iter().enumerate() {
            remaining -= p;
            if p > 0.0 && remaining <= 0.0 {
                return i;
            }
        }
        self.last_with_mass(None)
    }

    /// Spins the wheel with one slot removed and the rest rescaled.
    ///
    /// Falls back to a uniform pick among the other slots when they carry
    /// no mass.
    ///
    /// # Panics
    /// Panics if the wheel has fewer than two slots or `excluded` is not
    /// one of them.
    pub fn spin_excluding<R: Rng + ?Sized>(&self, excluded: usize, rng: &mut R) -> usize {
        let n = self.proportions.len();
        assert!(n >= 2, "spin_excluding needs at least two slots, wheel has {n}");
        assert!(excluded < n, "excluded slot {excluded} out of range for {n} slots");
        let mass: f64 = self
            .proportions
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != excluded)
            .map(|(_, p)| p)
            .sum();

        if mass <= 0.0 {
            let pick = rng.random_range(0..n - 1);
            return if pick >= excluded { pick + 1 } else { pick };
        }

        let mut remaining = rng.random::<f64>() * mass;
        for (i, &p) in self.proportions.iter().enumerate() {
            if i == excluded {
                continue;
            }
            remaining -= p;
            if p > 0.0 && remaining <= 0.0 {
                return i;
            }
        }
        self.last_with_mass(Some(excluded))
    }

    // Floating-point residue can leave a sliver past the final slot.
    fn last_with_mass(&self, excluded: Option<usize>) -> usize {
        self.proportions
            .iter()
            .enumerate()
            .rev()
            .find(|&(i, &p)| p > 0.0 && Some(i) != excluded)
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}

fn check_population<G>(genomes: &[G], fitnesses: &[Fitness]) -> Result<usize> {
    if genomes.len() != fitnesses.len() {
        return Err(GeneticError::LengthMismatch {
            left: genomes.len(),
            right: fitnesses.len(),
        });
    }
    // Self-mating cannot be avoided with fewer than two genomes.
    if genomes.len() < 2 {
        return Err(GeneticError::PopulationTooSmall {
            size: genomes.len(),
            minimum: 2,
        });
    }
    Ok(genomes.len())
}
