//! Genetic Algorithm engine.
//!
//! A generic, domain-agnostic GA built on trait-based operators. The
//! engine never inspects a genome; problems plug in by choosing or
//! implementing operators:
//!
//! # Core Traits
//!
//! - [`Selection`]: picks mating pairs from the ranked population
//! - [`Crossover`]: recombines two parents into two offspring
//! - [`Mutation`]: perturbs an offspring in place
//! - [`Evaluate`]: computes fitness for genomes whose score is unknown
//!
//! # Key Types
//!
//! - [`Population`]: owns genomes and fitnesses, runs the generational loop
//! - [`Operators`]: the operator bundle a population is built from
//! - [`PopulationConfig`]: size, elitism, stopping criteria, seed
//! - [`EvolveOutcome`]: summary of an evolution run
//!
//! # Built-in Operators
//!
//! - Selection: [`TournamentSelection`], [`RouletteSelection`]
//! - Crossover: [`NPointCrossover`], [`UniformCrossover`], [`AsexualCrossover`]
//! - Mutation: [`RandomizedBinaryMutation`], [`NoMutation`]
//! - Fitness: [`StaticFitness`]
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod crossover;
mod fitness;
mod mutation;
mod population;
mod selection;
pub mod sort;
mod types;

pub use config::{PopulationConfig, POPULATION_SIZE_MINIMUM};
pub use crossover::{AsexualCrossover, NPointCrossover, UniformCrossover};
pub use fitness::StaticFitness;
pub use mutation::RandomizedBinaryMutation;
pub use population::{EvolveOutcome, Population};
pub use selection::{
    tournament_winner, RouletteSelection, TournamentSelection, Wheel, DEFAULT_MAX_RETRIES,
};
pub use types::{Crossover, Evaluate, Fitness, Mutation, NoMutation, Operators, Selection};
