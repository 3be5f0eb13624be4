//! Population configuration.
//!
//! [`PopulationConfig`] holds the parameters of a complete run: how large the
//! population is, how many elites survive each generation, and when to stop.

use super::types::Fitness;
use crate::error::{GeneticError, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The smallest population that can mate without self-pairing.
pub const POPULATION_SIZE_MINIMUM: usize = 2;

/// Configuration for a GA run.
///
/// # Defaults
///
/// ```
/// use u_genetic::ga::PopulationConfig;
///
/// let config = PopulationConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.elitism, 2);
/// assert_eq!(config.max_generations, 1000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_genetic::ga::PopulationConfig;
///
/// let config = PopulationConfig::default()
///     .with_population_size(50)
///     .with_elitism(1)
///     .with_fitness_threshold(122)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PopulationConfig {
    /// Number of genomes kept after every generation. At least 2.
    pub population_size: usize,

    /// Number of top genomes copied unchanged into the next generation.
    ///
    /// Values above `population_size` behave like `population_size`.
    pub elitism: usize,

    /// Evolution stops once the best fitness reaches this value.
    ///
    /// `Fitness::MAX` effectively disables the threshold.
    pub fitness_threshold: Fitness,

    /// Maximum number of generations per run.
    pub max_generations: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            elitism: 2,
            fitness_threshold: Fitness::MAX,
            max_generations: 1000,
            seed: None,
        }
    }
}

impl PopulationConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of elites carried over each generation.
    pub fn with_elitism(mut self, elitism: usize) -> Self {
        self.elitism = elitism;
        self
    }

    /// Sets the fitness at which evolution stops early.
    pub fn with_fitness_threshold(mut self, threshold: Fitness) -> Self {
        self.fitness_threshold = threshold;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < POPULATION_SIZE_MINIMUM {
            return Err(GeneticError::PopulationTooSmall {
                size: self.population_size,
                minimum: POPULATION_SIZE_MINIMUM,
            });
        }
        if self.max_generations == 0 {
            return Err(GeneticError::InvalidConfig(
                "max_generations must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
