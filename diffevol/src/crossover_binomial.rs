use ndarray::{Array1, ArrayView1};
use rand::Rng;

/// Binomial crossover with forced crossing.
///
/// One uniform draw per component decides whether the mutant value is taken
/// (`r <= cr`); afterwards a single uniformly drawn component is always taken
/// from the mutant.
pub(crate) fn binomial_crossover<R: Rng + ?Sized>(
    target: ArrayView1<f64>,
    mutant: &Array1<f64>,
    cr: f64,
    rng: &mut R,
) -> Array1<f64> {
    let n = target.len();
    let mut trial = target.to_owned();
    for j in 0..n {
        if rng.random::<f64>() <= cr {
            trial[j] = mutant[j];
        }
    }
    let jrand = rng.random_range(0..n);
    trial[jrand] = mutant[jrand];
    trial
}
