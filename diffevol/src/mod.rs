//! Differential Evolution optimization library.
//!
//! This crate provides the classic DE/rand/1/bin scheme of Storn & Price with
//! forced crossing: a population-based stochastic optimizer that minimizes a
//! scalar objective over a bounded box.
//!
//! # Features
//!
//! - One strategy, DE/rand/1 mutation with binomial crossover
//! - Reproducible runs: one engine-owned random stream per optimizer
//! - Per-generation progress callback that may stop the run
//! - Cooperative cancellation through a shared flag
//!
//! # Example
//!
//! ```rust
//! use diffevol::{differential_evolution, DiffEvolConfigBuilder};
//!
//! // Minimize the sphere function: f(x) = sum(x_i^2)
//! let bounds = vec![(-5.0, 5.0), (-5.0, 5.0)];
//! let config = DiffEvolConfigBuilder::new()
//!     .n_pop(20)
//!     .n_gen(100)
//!     .seed(42)
//!     .verbose(false)
//!     .build()
//!     .expect("invalid config");
//!
//! let result = differential_evolution(
//!     &|x| x.iter().map(|&xi| xi * xi).sum(),
//!     &bounds,
//!     config,
//! ).expect("optimization should succeed");
//!
//! assert!(result.best_fitness().unwrap() < 1e-4);
//! ```
#![doc = include_str!("../README.md")]
#![doc = include_str!("../REFERENCES.md")]
#![warn(missing_docs)]

pub mod error;
pub use error::{DEError, Result};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use ndarray::Array1;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Lowest-fitness lookup over the fitness vector.
mod argmin;
/// Bound splitting and validation.
mod bounds;
/// Binomial crossover with forced crossing.
mod crossover_binomial;
/// Utilities for selecting distinct random indices from a population.
mod distinct_indices;
/// Random uniform initialization strategy.
mod init_random;
/// Rand/1 mutation strategy: random individual plus one difference vector.
mod mutant_rand1;

/// One-call entry point.
pub mod differential_evolution;
/// Population store returned by a run.
pub mod result;
pub use differential_evolution::differential_evolution;
pub use result::DiffEvolResult;

/// Smallest population for rand/1 mutation: the target plus three donors.
pub const MIN_POPULATION: usize = 4;

/// Callback function type
pub type CallbackFn = Box<dyn FnMut(&DiffEvolProgress) -> CallbackAction>;

/// Configuration for the Differential Evolution optimizer.
///
/// Defaults: `n_pop = 50`, `n_gen = 100`, `f = 0.5`, `c = 0.5`, `seed = 0`,
/// `verbose = true`.
pub struct DiffEvolConfig {
    /// Number of individuals (>= 4).
    pub n_pop: usize,
    /// Number of generations to run (>= 1).
    pub n_gen: usize,
    /// Differential weight F (> 0). Values of 0.5-0.8 work in most cases.
    pub f: f64,
    /// Crossover probability C in [0, 1]. High values converge fast, low
    /// values search more thoroughly.
    pub c: f64,
    /// Seed of the engine's random stream.
    pub seed: u64,
    /// Log the best fitness after each generation.
    pub verbose: bool,
    /// Optional per-generation callback (may stop early).
    pub callback: Option<CallbackFn>,
    /// Optional cancellation flag, checked before every trial.
    pub cancel: Option<Arc<AtomicBool>>,
}

impl Default for DiffEvolConfig {
    fn default() -> Self {
        Self {
            n_pop: 50,
            n_gen: 100,
            f: 0.5,
            c: 0.5,
            seed: 0,
            verbose: true,
            callback: None,
            cancel: None,
        }
    }
}

impl DiffEvolConfig {
    /// Checks population size, generation count and coefficients.
    ///
    /// # Errors
    ///
    /// Returns `DEError::PopulationTooSmall`, `DEError::InvalidGenerationCount`,
    /// `DEError::InvalidDifferentialWeight` or
    /// `DEError::InvalidCrossoverProbability`.
    pub fn validate(&self) -> Result<()> {
        if self.n_pop < MIN_POPULATION {
            return Err(DEError::PopulationTooSmall {
                pop_size: self.n_pop,
            });
        }
        if self.n_gen < 1 {
            return Err(DEError::InvalidGenerationCount { n_gen: self.n_gen });
        }
        if !(self.f.is_finite() && self.f > 0.0) {
            return Err(DEError::InvalidDifferentialWeight { factor: self.f });
        }
        if !(0.0..=1.0).contains(&self.c) {
            return Err(DEError::InvalidCrossoverProbability { rate: self.c });
        }
        Ok(())
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

/// Fluent builder for `DiffEvolConfig`.
///
/// # Example
///
/// ```rust
/// use diffevol::DiffEvolConfigBuilder;
///
/// let config = DiffEvolConfigBuilder::new()
///     .n_pop(40)
///     .n_gen(500)
///     .f(0.8)
///     .c(0.9)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
/// assert_eq!(config.n_pop, 40);
/// ```
pub struct DiffEvolConfigBuilder {
    cfg: DiffEvolConfig,
}

impl Default for DiffEvolConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffEvolConfigBuilder {
    /// Creates a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            cfg: DiffEvolConfig::default(),
        }
    }
    /// Sets the population size.
    pub fn n_pop(mut self, v: usize) -> Self {
        self.cfg.n_pop = v;
        self
    }
    /// Sets the number of generations.
    pub fn n_gen(mut self, v: usize) -> Self {
        self.cfg.n_gen = v;
        self
    }
    /// Sets the differential weight F.
    pub fn f(mut self, v: f64) -> Self {
        self.cfg.f = v;
        self
    }
    /// Sets the crossover probability C.
    pub fn c(mut self, v: f64) -> Self {
        self.cfg.c = v;
        self
    }
    /// Sets the random seed.
    pub fn seed(mut self, v: u64) -> Self {
        self.cfg.seed = v;
        self
    }
    /// Enables/disables per-generation progress logging.
    pub fn verbose(mut self, v: bool) -> Self {
        self.cfg.verbose = v;
        self
    }
    /// Sets a per-generation callback function.
    pub fn callback(mut self, cb: CallbackFn) -> Self {
        self.cfg.callback = Some(cb);
        self
    }
    /// Sets a flag that cancels the run once it becomes `true`.
    pub fn cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cfg.cancel = Some(flag);
        self
    }
    /// Builds and returns the configuration.
    ///
    /// # Errors
    ///
    /// See [`DiffEvolConfig::validate`].
    pub fn build(self) -> Result<DiffEvolConfig> {
        self.cfg.validate()?;
        Ok(self.cfg)
    }
}

/// Information passed to the callback after each generation.
#[derive(Debug, Clone, Copy)]
pub struct DiffEvolProgress {
    /// Generation just completed, starting at 1.
    pub generation: usize,
    /// Total number of generations configured.
    pub n_gen: usize,
    /// Best fitness in the population so far.
    pub best_fitness: f64,
    /// Standard deviation of the population fitness.
    pub convergence: f64,
}

/// Action returned by callback to control optimization flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    /// Continue optimization.
    Continue,
    /// Stop optimization early.
    Stop,
}

/// Differential Evolution optimizer (DE/rand/1/bin).
///
/// The population is sampled when the optimizer is created; [`run`](Self::run)
/// consumes the optimizer, so each instance runs exactly once.
///
/// All randomness comes from one `StdRng` seeded with `config.seed`, drawn in
/// a fixed order: the initial population row by row, then for every trial the
/// donor indices, one crossover draw per parameter, and the forced-crossing
/// index. Equal inputs therefore give bit-identical runs.
pub struct DiffEvol<'a, F>
where
    F: Fn(&Array1<f64>) -> f64,
{
    func: &'a F,
    config: DiffEvolConfig,
    rng: StdRng,
    result: DiffEvolResult,
}

impl<'a, F> DiffEvol<'a, F>
where
    F: Fn(&Array1<f64>) -> f64,
{
    /// Creates an optimizer for `func` over `bounds` and samples the initial
    /// population. The objective is not evaluated yet.
    ///
    /// # Errors
    ///
    /// Returns the configuration errors of [`DiffEvolConfig::validate`] and the
    /// bounds errors of [`DiffEvolResult::initialize`].
    pub fn new(func: &'a F, bounds: &[(f64, f64)], config: DiffEvolConfig) -> Result<Self> {
        config.validate()?;
        let (lower, upper) = bounds::split_bounds(bounds);
        let mut rng = StdRng::seed_from_u64(config.seed);
        let result = DiffEvolResult::initialize(&lower, &upper, config.n_pop, &mut rng)?;
        Ok(Self {
            func,
            config,
            rng,
            result,
        })
    }

    /// Configuration in use.
    pub fn config(&self) -> &DiffEvolConfig {
        &self.config
    }

    /// The not-yet-optimized population store.
    pub fn result(&self) -> &DiffEvolResult {
        &self.result
    }

    /// Runs the optimization and returns the final population store.
    ///
    /// Each generation sweeps the targets in index order and replaces them in
    /// place, so later trials of a generation may use donors already improved
    /// earlier in the same sweep.
    pub fn run(self) -> DiffEvolResult {
        use crossover_binomial::binomial_crossover;
        use mutant_rand1::mutant_rand1;

        let DiffEvol {
            func,
            mut config,
            mut rng,
            mut result,
        } = self;
        let mut callback = config.callback.take();
        let n_pop = config.n_pop;
        let n_gen = config.n_gen;

        if config.verbose {
            log::info!(
                "DE init: {} parameters, population={}, generations={}, F={:.3}, C={:.3}, seed={}",
                result.n_parm(),
                n_pop,
                n_gen,
                config.f,
                config.c,
                config.seed
            );
        }

        let mut nfev = result.evaluate_initial(func);
        let mut nit = 0;
        let mut stop: Option<String> = None;

        log::debug!(
            "DE initial best_f={:.6e}",
            argmin::argmin(result.fitness()).1
        );

        'generations: for generation in 1..=n_gen {
            for i in 0..n_pop {
                if config.is_cancelled() {
                    stop = Some(format!("Cancelled during generation {}", generation));
                    break 'generations;
                }

                let mutant = mutant_rand1(i, result.population(), config.f, &mut rng);
                let trial =
                    binomial_crossover(result.population().row(i), &mutant, config.c, &mut rng);
                let trial_fitness = func(&trial);
                nfev += 1;
                result.commit(i, &trial, trial_fitness);
            }
            nit = generation;

            let best_fitness = argmin::argmin(result.fitness()).1;
            if config.verbose {
                log::info!(
                    "DE generation {:4}/{:4}  best_f={:.6e}",
                    generation,
                    n_gen,
                    best_fitness
                );
            }

            if let Some(ref mut cb) = callback {
                let progress = DiffEvolProgress {
                    generation,
                    n_gen,
                    best_fitness,
                    convergence: result.fitness().std(0.0),
                };
                if cb(&progress) == CallbackAction::Stop {
                    stop = Some(format!("Stopped by callback after generation {}", generation));
                    break;
                }
            }
        }

        if let Some(reason) = &stop {
            log::debug!("DE {}", reason);
        }
        result.finish(nit, nfev, stop);
        result
    }
}
