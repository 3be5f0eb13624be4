//! Core trait definitions for the GA engine.
//!
//! The engine never looks inside a genome. It only clones, moves and
//! indexes genomes, and hands them to four kinds of operators:
//!
//! 1. [`Selection`]: picks mating pairs from the ranked population
//! 2. [`Crossover`]: recombines two parents into two offspring
//! 3. [`Mutation`]: perturbs an offspring in place (optional)
//! 4. [`Evaluate`]: fills in unknown fitness values
//!
//! A fifth collaborator, genesis, is a plain `FnMut(&mut R) -> G` passed to
//! [`Population::new`](super::Population::new).

use crate::error::Result;
use rand::Rng;

/// Integer fitness score. Higher is fitter.
pub type Fitness = i64;

/// Chooses mating pairs from a population sorted by fitness, descending.
///
/// `genomes[i]` has fitness `fitnesses[i]`. Implementations must not pair a
/// genome with itself and must return at least `genomes.len() / 2` pairs
/// (rounded up), i.e. `2 * pairs >= genomes.len()`.
pub trait Selection<G> {
    fn select<R: Rng + ?Sized>(
        &self,
        genomes: &[G],
        fitnesses: &[Fitness],
        rng: &mut R,
    ) -> Result<Vec<(G, G)>>;
}

/// Recombines two parent genomes into two offspring.
///
/// Crossover must not handle mutation; the engine applies that separately.
pub trait Crossover<G> {
    fn crossover<R: Rng + ?Sized>(&self, male: G, female: G, rng: &mut R) -> Result<(G, G)>;
}

/// Randomly alters a genome in place.
pub trait Mutation<G> {
    fn mutate<R: Rng + ?Sized>(&self, genome: &mut G, rng: &mut R);
}

/// Computes fitness values for a whole generation.
///
/// Slots holding `Some` are carried-over elite scores and may be trusted.
/// Every `None` slot must be filled; a slot left empty aborts the run with
/// [`GeneticError::UnevaluatedFitness`](crate::GeneticError::UnevaluatedFitness).
pub trait Evaluate<G> {
    fn evaluate(&self, genomes: &[G], fitnesses: &mut [Option<Fitness>]);
}

impl<G, F> Evaluate<G> for F
where
    F: Fn(&[G], &mut [Option<Fitness>]),
{
    fn evaluate(&self, genomes: &[G], fitnesses: &mut [Option<Fitness>]) {
        self(genomes, fitnesses)
    }
}

/// Mutation that leaves every genome untouched.
///
/// Used as the placeholder type of an [`Operators`] bundle without mutation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoMutation;

impl<G> Mutation<G> for NoMutation {
    fn mutate<R: Rng + ?Sized>(&self, _genome: &mut G, _rng: &mut R) {}
}

/// The operator set driving a [`Population`](super::Population).
///
/// Selection, crossover and fitness are required and can only be supplied
/// together through [`Operators::new`]; mutation is optional.
///
/// ```
/// use u_genetic::ga::{Operators, RouletteSelection, UniformCrossover, RandomizedBinaryMutation, StaticFitness};
///
/// let ops = Operators::new(
///     RouletteSelection::default(),
///     UniformCrossover,
///     StaticFitness::new(|g: &Vec<bool>| g.iter().filter(|&&b| b).count() as i64),
/// )
/// .with_mutation(RandomizedBinaryMutation::new(0.01).unwrap());
/// assert!(ops.mutation.is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Operators<S, C, E, M = NoMutation> {
    pub selection: S,
    pub crossover: C,
    pub fitness: E,
    pub mutation: Option<M>,
}

impl<S, C, E> Operators<S, C, E, NoMutation> {
    /// Bundles the required operators, without mutation.
    pub fn new(selection: S, crossover: C, fitness: E) -> Self {
        Self {
            selection,
            crossover,
            fitness,
            mutation: None,
        }
    }
}

impl<S, C, E, M> Operators<S, C, E, M> {
    /// Adds (or replaces) the mutation operator.
    pub fn with_mutation<M2>(self, mutation: M2) -> Operators<S, C, E, M2> {
        Operators {
            selection: self.selection,
            crossover: self.crossover,
            fitness: self.fitness,
            mutation: Some(mutation),
        }
    }
}
