//! Population engine.
//!
//! [`Population`] owns the genomes, their fitnesses and the random
//! generator, and drives the generational loop:
//! selection → crossover → mutation → fitness → sort → truncate.
//!
//! Between generations the population upholds three invariants:
//!
//! - `genomes().len() == fitnesses().len() == len()`, fixed at construction
//! - fitnesses are sorted descending, so index 0 is always the best
//! - a generation either completes or leaves the population untouched

use super::config::{PopulationConfig, POPULATION_SIZE_MINIMUM};
use super::sort::{sort_with_values, SortOrder};
use super::types::{Crossover, Evaluate, Fitness, Mutation, Operators, Selection};
use crate::error::{GeneticError, Result};
use crate::random::create_rng;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Summary of an [`evolve`](Population::evolve) call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvolveOutcome {
    /// Generations evolved by this call.
    pub generations: usize,

    /// Best fitness when the call returned.
    pub best_fitness: Fitness,

    /// Whether the best fitness met the threshold.
    pub reached_threshold: bool,

    /// Best fitness before the first generation and after each one.
    pub fitness_history: Vec<Fitness>,
}

/// A population of genomes evolved by genetic operators.
///
/// # Usage
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::Rng;
/// use u_genetic::ga::{
///     NPointCrossover, Operators, Population, RandomizedBinaryMutation, StaticFitness,
///     TournamentSelection,
/// };
/// use u_genetic::random::create_rng;
///
/// let operators = Operators::new(
///     TournamentSelection::new(3)?,
///     NPointCrossover::single_point(),
///     StaticFitness::new(|g: &Vec<bool>| g.iter().filter(|&&b| b).count() as i64),
/// )
/// .with_mutation(RandomizedBinaryMutation::new(0.02)?);
///
/// let mut population = Population::new(
///     40,
///     |rng: &mut StdRng| (0..16).map(|_| rng.random_bool(0.5)).collect::<Vec<bool>>(),
///     operators,
///     create_rng(42),
/// )?;
///
/// let outcome = population.evolve(16, 500, 2)?;
/// assert!(outcome.reached_threshold);
/// assert_eq!(population.best().1, 16);
/// # Ok::<(), u_genetic::GeneticError>(())
/// ```
#[derive(Clone)]
pub struct Population<G, S, C, E, M, R> {
    genomes: Vec<G>,
    fitnesses: Vec<Fitness>,
    operators: Operators<S, C, E, M>,
    rng: R,
    generation: usize,
}

// Operators are often closures, so only the evolving state is shown.
impl<G: fmt::Debug, S, C, E, M, R> fmt::Debug for Population<G, S, C, E, M, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Population")
            .field("generation", &self.generation)
            .field("genomes", &self.genomes)
            .field("fitnesses", &self.fitnesses)
            .finish_non_exhaustive()
    }
}

impl<G, S, C, E, M> Population<G, S, C, E, M, StdRng>
where
    G: Clone,
    S: Selection<G>,
    C: Crossover<G>,
    E: Evaluate<G>,
    M: Mutation<G>,
{
    /// Creates a population sized and seeded from `config`.
    ///
    /// Without a seed the generator is seeded randomly.
    pub fn from_config<F>(
        config: &PopulationConfig,
        genesis: F,
        operators: Operators<S, C, E, M>,
    ) -> Result<Self>
    where
        F: FnMut(&mut StdRng) -> G,
    {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::new(config.population_size, genesis, operators, rng)
    }
}

impl<G, S, C, E, M, R> Population<G, S, C, E, M, R>
where
    G: Clone,
    S: Selection<G>,
    C: Crossover<G>,
    E: Evaluate<G>,
    M: Mutation<G>,
    R: Rng,
{
    /// Creates a population of `size` genomes.
    ///
    /// Calls `genesis` exactly `size` times, evaluates every genome once and
    /// sorts the population by fitness, descending.
    ///
    /// # Errors
    /// - [`GeneticError::PopulationTooSmall`] if `size < 2`
    /// - [`GeneticError::UnevaluatedFitness`] if the fitness operator skips a genome
    pub fn new<F>(
        size: usize,
        mut genesis: F,
        operators: Operators<S, C, E, M>,
        mut rng: R,
    ) -> Result<Self>
    where
        F: FnMut(&mut R) -> G,
    {
        if size < POPULATION_SIZE_MINIMUM {
            return Err(GeneticError::PopulationTooSmall {
                size,
                minimum: POPULATION_SIZE_MINIMUM,
            });
        }

        let mut genomes: Vec<G> = (0..size).map(|_| genesis(&mut rng)).collect();
        let mut slots = vec![None; size];
        operators.fitness.evaluate(&genomes, &mut slots);
        let mut fitnesses = resolve_fitnesses(slots)?;
        sort_with_values(SortOrder::Descending, &mut genomes, &mut fitnesses)?;

        info!(
            "population created: {size} genomes, best fitness {}",
            fitnesses[0]
        );

        Ok(Self {
            genomes,
            fitnesses,
            operators,
            rng,
            generation: 0,
        })
    }

    /// Advances the population by exactly one generation.
    ///
    /// The top `elitism` genomes survive unchanged, keeping their known
    /// fitness so the fitness operator need not rescore them. Elitism above
    /// the population size is clamped.
    ///
    /// # Errors
    /// - [`GeneticError::InsufficientMatingPairs`] if selection returns fewer
    ///   than `(len() - elitism) / 2` pairs (rounded up)
    /// - any error raised by selection or crossover
    /// - [`GeneticError::UnevaluatedFitness`] if the fitness operator leaves
    ///   an offspring unscored
    ///
    /// On error the population is left as it was.
    pub fn evolve_once(&mut self, elitism: usize) -> Result<()> {
        let size = self.genomes.len();
        let elitism = elitism.min(size);

        let pairs = self
            .operators
            .selection
            .select(&self.genomes, &self.fitnesses, &mut self.rng)?;
        if 2 * pairs.len() + elitism < size {
            return Err(GeneticError::InsufficientMatingPairs {
                pairs: pairs.len(),
                elitism,
                population_size: size,
            });
        }

        let mut next_genomes = Vec::with_capacity(elitism + 2 * pairs.len());
        next_genomes.extend_from_slice(&self.genomes[..elitism]);
        for (male, female) in pairs {
            let (mut offspring1, mut offspring2) =
                self.operators
                    .crossover
                    .crossover(male, female, &mut self.rng)?;
            if let Some(mutation) = &self.operators.mutation {
                mutation.mutate(&mut offspring1, &mut self.rng);
                mutation.mutate(&mut offspring2, &mut self.rng);
            }
            next_genomes.push(offspring1);
            next_genomes.push(offspring2);
        }

        // Elites keep their score; offspring start unknown.
        let mut slots: Vec<Option<Fitness>> =
            self.fitnesses[..elitism].iter().copied().map(Some).collect();
        slots.resize(next_genomes.len(), None);
        self.operators.fitness.evaluate(&next_genomes, &mut slots);
        let mut next_fitnesses = resolve_fitnesses(slots)?;

        sort_with_values(SortOrder::Descending, &mut next_genomes, &mut next_fitnesses)?;
        next_genomes.truncate(size);
        next_fitnesses.truncate(size);

        self.genomes = next_genomes;
        self.fitnesses = next_fitnesses;
        self.generation += 1;

        debug!(
            "generation {}: best fitness {}",
            self.generation, self.fitnesses[0]
        );
        Ok(())
    }

    /// Evolves until the best fitness reaches `fitness_threshold` or
    /// `max_generations` generations have run, whichever comes first.
    ///
    /// The threshold is checked before each generation, so a population
    /// that already meets it is not evolved at all.
    pub fn evolve(
        &mut self,
        fitness_threshold: Fitness,
        max_generations: usize,
        elitism: usize,
    ) -> Result<EvolveOutcome> {
        let mut fitness_history = vec![self.fitnesses[0]];

        let mut generations = 0usize;
        while generations < max_generations && self.fitnesses[0] < fitness_threshold {
            self.evolve_once(elitism)?;
            generations += 1;
            fitness_history.push(self.fitnesses[0]);
        }

        let best_fitness = self.fitnesses[0];
        let reached_threshold = best_fitness >= fitness_threshold;
        info!(
            "evolution stopped after {generations} generations: best fitness {best_fitness}, threshold {}",
            if reached_threshold { "reached" } else { "not reached" }
        );

        Ok(EvolveOutcome {
            generations,
            best_fitness,
            reached_threshold,
            fitness_history,
        })
    }

    /// Evolves with the threshold, generation cap and elitism of `config`.
    ///
    /// `config.population_size` and `config.seed` only matter at
    /// construction and are ignored here.
    pub fn run(&mut self, config: &PopulationConfig) -> Result<EvolveOutcome> {
        self.evolve(
            config.fitness_threshold,
            config.max_generations,
            config.elitism,
        )
    }
}

impl<G, S, C, E, M, R> Population<G, S, C, E, M, R> {
    /// The fittest genome and its fitness.
    pub fn best(&self) -> (&G, Fitness) {
        (&self.genomes[0], self.fitnesses[0])
    }

    /// Genomes, fittest first.
    pub fn genomes(&self) -> &[G] {
        &self.genomes
    }

    /// Fitnesses, aligned with [`genomes`](Self::genomes), descending.
    pub fn fitnesses(&self) -> &[Fitness] {
        &self.fitnesses
    }

    /// Population size. Never changes after construction.
    pub fn len(&self) -> usize {
        self.genomes.len()
    }

    /// Always `false`: a population holds at least two genomes.
    pub fn is_empty(&self) -> bool {
        self.genomes.is_empty()
    }

    /// Generations evolved since construction.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Consumes the population, returning its genomes, fittest first.
    pub fn into_genomes(self) -> Vec<G> {
        self.genomes
    }

    /// Fraction of genome pairs that are not identical, in `[0, 1]`.
    ///
    /// Compares every pair, `n * (n - 1) / 2` comparisons. Meant for
    /// debugging convergence, not for use inside the loop.
    pub fn diversity(&self) -> f64
    where
        G: PartialEq,
    {
        let n = self.genomes.len();
        let mut same = 0usize;
        for (i, a) in self.genomes.iter().enumerate() {
            same += self.genomes[i + 1..].iter().filter(|b| a == *b).count();
        }
        let comparisons = n * (n - 1) / 2;
        1.0 - same as f64 / comparisons as f64
    }
}

fn resolve_fitnesses(slots: Vec<Option<Fitness>>) -> Result<Vec<Fitness>> {
    slots
        .into_iter()
        .enumerate()
        .map(|(index, slot)| slot.ok_or(GeneticError::UnevaluatedFitness { index }))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
