//! Generic genetic algorithm engine.
//!
//! Evolves a population of candidate solutions ("genomes") of any type
//! through selection, crossover and mutation, guided by an integer fitness
//! score. Useful for search spaces too large to enumerate, such as
//! combinatorial optimization or string approximation.
//!
//! - [`ga`]: population engine, operator traits and built-in operators
//! - [`random`]: seeded and thread-shared random sources
//! - [`error`]: configuration and contract-violation errors
//!
//! # Architecture
//!
//! The generational loop is single-threaded and synchronous. Randomness is
//! injected: each population owns its generator, and a [`random::SharedRng`]
//! lets independent populations on separate threads draw from one stream.
//! Nothing persists across runs.

pub mod error;
pub mod ga;
pub mod random;

pub use error::{GeneticError, Result};
