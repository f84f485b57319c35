use crate::{DiffEvol, DiffEvolConfig, DiffEvolResult, Result};
use ndarray::Array1;

/// Runs Differential Evolution optimization on a function.
///
/// Creates a [`DiffEvol`] optimizer with the given bounds and configuration,
/// then runs it to completion.
///
/// # Arguments
///
/// * `func` - The objective function to minimize, mapping `&Array1<f64>` to `f64`
/// * `bounds` - Vector of (lower, upper) bound pairs for each dimension
/// * `config` - DE configuration (use `DiffEvolConfigBuilder` to construct)
///
/// # Returns
///
/// Returns `Ok(DiffEvolResult)` holding the final population on success.
///
/// # Errors
///
/// Returns a bounds error if any pair has `lower >= upper`, and a
/// configuration error if the population, generation count, F or C are out
/// of range. Nothing is evaluated in either case.
///
/// # Example
///
/// ```rust
/// use diffevol::{differential_evolution, DiffEvolConfigBuilder};
///
/// let result = differential_evolution(
///     &|x| (x[0] - 3.0).powi(2),
///     &[(-10.0, 10.0)],
///     DiffEvolConfigBuilder::new().n_pop(10).n_gen(50).verbose(false).build().unwrap(),
/// ).expect("optimization failed");
///
/// assert!((result.best_parameters().unwrap()[0] - 3.0).abs() < 1e-2);
/// ```
pub fn differential_evolution<F>(
    func: &F,
    bounds: &[(f64, f64)],
    config: DiffEvolConfig,
) -> Result<DiffEvolResult>
where
    F: Fn(&Array1<f64>) -> f64,
{
    let de = DiffEvol::new(func, bounds, config)?;
    Ok(de.run())
}
