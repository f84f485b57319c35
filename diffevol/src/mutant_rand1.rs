use ndarray::{Array1, Array2, Zip};
use rand::Rng;

use crate::distinct_indices::distinct_indices;

/// DE/rand/1 donor `pop[a] + f * (pop[b] - pop[c])` with `a`, `b`, `c` and `i`
/// pairwise distinct. The mutant is not clipped to the bounds.
pub(crate) fn mutant_rand1<R: Rng + ?Sized>(
    i: usize,
    pop: &Array2<f64>,
    f: f64,
    rng: &mut R,
) -> Array1<f64> {
    let [a, b, c] = distinct_indices::<3, _>(i, pop.nrows(), rng);

    Zip::from(pop.row(a))
        .and(pop.row(b))
        .and(pop.row(c))
        .map_collect(|&base, &plus, &minus| base + f * (plus - minus))
}
