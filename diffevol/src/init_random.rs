use ndarray::{Array1, Array2};
use rand::Rng;

/// Uniform population in `[lower, upper)`, filled row by row.
pub(crate) fn init_random<R: Rng + ?Sized>(
    npop: usize,
    lower: &Array1<f64>,
    upper: &Array1<f64>,
    rng: &mut R,
) -> Array2<f64> {
    let n = lower.len();
    let mut pop = Array2::<f64>::zeros((npop, n));
    for i in 0..npop {
        for j in 0..n {
            let u: f64 = rng.random::<f64>();
            pop[(i, j)] = lower[j] + u * (upper[j] - lower[j]);
        }
    }
    pop
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_initialization_dimensions() {
        let lower = array![0.0, 0.0, -1.0];
        let upper = array![10.0, 10.0, 1.0];
        let mut rng = StdRng::seed_from_u64(42);

        let pop = init_random(20, &lower, &upper, &mut rng);

        assert_eq!(pop.nrows(), 20);
        assert_eq!(pop.ncols(), 3);
    }

    #[test]
    fn test_random_initialization_bounds() {
        let lower = array![-5.0, 100.0];
        let upper = array![5.0, 100.5];
        let mut rng = StdRng::seed_from_u64(3);

        let pop = init_random(200, &lower, &upper, &mut rng);

        for row in pop.rows() {
            assert!(row[0] >= -5.0 && row[0] < 5.0);
            assert!(row[1] >= 100.0 && row[1] < 100.5);
        }
    }
}
