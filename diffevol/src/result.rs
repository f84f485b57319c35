//! Population store returned by a DE run.

use std::fmt;

use ndarray::{Array1, Array2};
use rand::Rng;

use crate::argmin::argmin;
use crate::bounds::validate_bounds;
use crate::init_random::init_random;
use crate::{DEError, MIN_POPULATION, Result};

/// Population, fitness values and best individual of a DE run.
///
/// The store is created by [`DiffEvol::new`](crate::DiffEvol::new) and handed
/// back by [`DiffEvol::run`](crate::DiffEvol::run). Rows of the population are
/// only ever replaced through [`commit`](Self::commit), together with their
/// fitness, so `fitness()[i]` is always the objective value of
/// `population().row(i)` once the initial evaluation pass has run.
#[derive(Clone)]
pub struct DiffEvolResult {
    population: Array2<f64>,
    fitness: Array1<f64>,
    best: Option<usize>,
    nit: usize,
    nfev: usize,
    stopped_early: bool,
    message: String,
}

impl DiffEvolResult {
    /// Samples `n_pop` individuals uniformly in `[lower, upper)` and zero-fills
    /// the fitness vector.
    ///
    /// `n_pop * n_parm` values are drawn from `rng` in row-major order.
    ///
    /// # Errors
    ///
    /// Returns a bounds error ([`DEError::is_bounds_error`]) if the bounds are
    /// empty, of different lengths, non-finite, or have `lower >= upper`, and
    /// [`DEError::PopulationTooSmall`] if `n_pop < 4`.
    pub fn initialize<R: Rng + ?Sized>(
        lower: &Array1<f64>,
        upper: &Array1<f64>,
        n_pop: usize,
        rng: &mut R,
    ) -> Result<Self> {
        validate_bounds(lower, upper)?;
        if n_pop < MIN_POPULATION {
            return Err(DEError::PopulationTooSmall { pop_size: n_pop });
        }
        Ok(Self {
            population: init_random(n_pop, lower, upper, rng),
            fitness: Array1::zeros(n_pop),
            best: None,
            nit: 0,
            nfev: 0,
            stopped_early: false,
            message: "Not evaluated".into(),
        })
    }

    /// Objective value of the best individual.
    ///
    /// # Errors
    ///
    /// Returns [`DEError::NotEvaluated`] before a run has completed.
    pub fn best_fitness(&self) -> Result<f64> {
        self.best
            .map(|i| self.fitness[i])
            .ok_or(DEError::NotEvaluated)
    }

    /// Parameter vector of the best individual.
    ///
    /// # Errors
    ///
    /// Returns [`DEError::NotEvaluated`] before a run has completed.
    pub fn best_parameters(&self) -> Result<Array1<f64>> {
        self.best
            .map(|i| self.population.row(i).to_owned())
            .ok_or(DEError::NotEvaluated)
    }

    /// Replaces individual `i` with `candidate` if `candidate_fitness` is
    /// strictly lower than the current fitness of that slot. Row and fitness
    /// change together or not at all. A NaN candidate is never accepted.
    ///
    /// Returns whether the candidate was committed.
    ///
    /// # Panics
    ///
    /// Panics if `i >= n_pop()`. A candidate whose length differs from
    /// `n_parm()` panics in debug builds.
    pub fn commit(&mut self, i: usize, candidate: &Array1<f64>, candidate_fitness: f64) -> bool {
        debug_assert_eq!(candidate.len(), self.n_parm(), "candidate length");
        if candidate_fitness < self.fitness[i] {
            self.population.row_mut(i).assign(candidate);
            self.fitness[i] = candidate_fitness;
            true
        } else {
            false
        }
    }

    /// Index of the best individual, `None` before a run has completed.
    pub fn best_index(&self) -> Option<usize> {
        self.best
    }

    /// Population matrix (`n_pop x n_parm`).
    pub fn population(&self) -> &Array2<f64> {
        &self.population
    }

    /// Fitness of each individual.
    pub fn fitness(&self) -> &Array1<f64> {
        &self.fitness
    }

    /// Number of individuals.
    pub fn n_pop(&self) -> usize {
        self.population.nrows()
    }

    /// Number of free parameters.
    pub fn n_parm(&self) -> usize {
        self.population.ncols()
    }

    /// Number of completed generations.
    pub fn nit(&self) -> usize {
        self.nit
    }

    /// Number of objective evaluations.
    pub fn nfev(&self) -> usize {
        self.nfev
    }

    /// Whether the run ended before all generations were done.
    pub fn stopped_early(&self) -> bool {
        self.stopped_early
    }

    /// Human-readable status message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Evaluates every row once, in row order. Returns the evaluation count.
    pub(crate) fn evaluate_initial<F>(&mut self, func: &F) -> usize
    where
        F: Fn(&Array1<f64>) -> f64,
    {
        for (i, row) in self.population.rows().into_iter().enumerate() {
            self.fitness[i] = func(&row.to_owned());
        }
        self.fitness.len()
    }

    /// Fixes the best index and run statistics. `stop` carries the reason
    /// when the run did not go through all generations.
    pub(crate) fn finish(&mut self, nit: usize, nfev: usize, stop: Option<String>) {
        let (best_idx, _) = argmin(&self.fitness);
        self.best = Some(best_idx);
        self.nit = nit;
        self.nfev = nfev;
        self.stopped_early = stop.is_some();
        self.message = stop.unwrap_or_else(|| format!("Completed {} generations", nit));
    }
}

impl fmt::Debug for DiffEvolResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiffEvolResult")
            .field(
                "population",
                &format!("{}x{}", self.population.nrows(), self.population.ncols()),
            )
            .field("fitness", &format!("len={}", self.fitness.len()))
            .field("best", &self.best)
            .field("nit", &self.nit)
            .field("nfev", &self.nfev)
            .field("stopped_early", &self.stopped_early)
            .field("message", &self.message)
            .finish()
    }
}
