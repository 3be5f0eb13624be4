//! Error types for the genetic algorithm engine.
//!
//! Two families of errors exist:
//!
//! - **Configuration errors** are returned by constructors before any
//!   generation runs (population too small, bad mutation rate, ...).
//! - **Contract violations** are returned when a plugged-in operator
//!   misbehaves during evolution (too few mating pairs, mismatched genome
//!   lengths, unevaluated fitness slots).
//!
//! Neither family is recoverable: the run stops at the first error.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneticError {
    #[error("population size minimum is {minimum}; got {size}")]
    PopulationTooSmall { size: usize, minimum: usize },

    #[error("invalid mutation rate {0}: must be strictly between 0 and 1")]
    InvalidMutationRate(f64),

    #[error("invalid crossover point count {0}: must be at least 1")]
    InvalidPointCount(usize),

    #[error("invalid tournament pool size {0}: must be at least 2")]
    InvalidPoolSize(usize),

    #[error("tournament pool size {pool_size} exceeds population size {population_size}")]
    PoolExceedsPopulation {
        pool_size: usize,
        population_size: usize,
    },

    #[error(
        "insufficient mating pairs: {pairs} pairs with elitism {elitism} cannot refill a population of {population_size}"
    )]
    InsufficientMatingPairs {
        pairs: usize,
        elitism: usize,
        population_size: usize,
    },

    #[error("mismatched sequence lengths ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },

    #[error("fitness operator left slot {index} unevaluated")]
    UnevaluatedFitness { index: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, GeneticError>;
