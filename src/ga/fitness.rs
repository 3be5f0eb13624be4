//! Per-genome fitness scoring.
//!
//! Most problems score each genome on its own, without looking at the rest
//! of the population. [`StaticFitness`] lifts such a scoring function into a
//! population-wide [`Evaluate`] that only scores slots whose fitness is still
//! unknown, so carried-over elites are never rescored.

use super::types::{Evaluate, Fitness};

/// Wraps `Fn(&G) -> Fitness` into a population evaluator.
///
/// # Parallel scoring
///
/// With the `parallel` feature enabled and [`with_parallel(true)`](Self::with_parallel),
/// unknown slots are scored with rayon. Without the feature the flag is
/// ignored and scoring is sequential.
///
/// The `parallel` feature requires the genome type and the scoring function
/// to be `Sync`. Without it any genome type can be scored, `Rc` included.
#[derive(Debug, Clone)]
pub struct StaticFitness<F> {
    score: F,
    parallel: bool,
}

impl<F> StaticFitness<F> {
    pub fn new(score: F) -> Self {
        Self {
            score,
            parallel: false,
        }
    }

    /// Enables or disables parallel scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }
}

#[cfg(not(feature = "parallel"))]
impl<G, F> Evaluate<G> for StaticFitness<F>
where
    F: Fn(&G) -> Fitness,
{
    fn evaluate(&self, genomes: &[G], fitnesses: &mut [Option<Fitness>]) {
        self.score_unknown(genomes, fitnesses);
    }
}

// rayon needs shared access to genomes and the scorer across threads.
#[cfg(feature = "parallel")]
impl<G, F> Evaluate<G> for StaticFitness<F>
where
    G: Sync,
    F: Fn(&G) -> Fitness + Sync,
{
    fn evaluate(&self, genomes: &[G], fitnesses: &mut [Option<Fitness>]) {
        use rayon::prelude::*;

        if !self.parallel {
            self.score_unknown(genomes, fitnesses);
            return;
        }
        fitnesses
            .par_iter_mut()
            .zip(genomes.par_iter())
            .filter(|(slot, _)| slot.is_none())
            .for_each(|(slot, genome)| *slot = Some((self.score)(genome)));
    }
}

impl<F> StaticFitness<F> {
    fn score_unknown<G>(&self, genomes: &[G], fitnesses: &mut [Option<Fitness>])
    where
        F: Fn(&G) -> Fitness,
    {
        for (slot, genome) in fitnesses.iter_mut().zip(genomes) {
            if slot.is_none() {
                *slot = Some((self.score)(genome));
            }
        }
    }
}
