use ndarray::Array1;

use crate::{DEError, Result};

/// Splits `(lower, upper)` pairs into two vectors.
pub(crate) fn split_bounds(bounds: &[(f64, f64)]) -> (Array1<f64>, Array1<f64>) {
    let lower = bounds.iter().map(|&(lo, _)| lo).collect();
    let upper = bounds.iter().map(|&(_, hi)| hi).collect();
    (lower, upper)
}

/// Checks that the search box is non-empty, finite, and has `lower < upper`
/// in every dimension.
pub(crate) fn validate_bounds(lower: &Array1<f64>, upper: &Array1<f64>) -> Result<()> {
    if lower.len() != upper.len() {
        return Err(DEError::BoundsMismatch {
            lower_len: lower.len(),
            upper_len: upper.len(),
        });
    }
    if lower.is_empty() {
        return Err(DEError::EmptyBounds);
    }
    for (index, (&lo, &hi)) in lower.iter().zip(upper.iter()).enumerate() {
        // Also rejects NaN on either side.
        if !(lo.is_finite() && hi.is_finite() && lo < hi) {
            return Err(DEError::InvalidBounds {
                index,
                lower: lo,
                upper: hi,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_split_bounds() {
        let (lower, upper) = split_bounds(&[(-1.0, 1.0), (0.0, 5.0)]);
        assert_eq!(lower, array![-1.0, 0.0]);
        assert_eq!(upper, array![1.0, 5.0]);
    }

    #[test]
    fn test_rejects_degenerate_and_inverted_pairs() {
        let err = validate_bounds(&array![0.0, 2.0], &array![1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            DEError::InvalidBounds {
                index: 1,
                lower: 2.0,
                upper: 2.0
            }
        );
        let err = validate_bounds(&array![3.0], &array![1.0]).unwrap_err();
        assert!(err.is_bounds_error());
    }

    #[test]
    fn test_rejects_non_finite_and_empty() {
        assert!(validate_bounds(&array![f64::NEG_INFINITY], &array![0.0]).is_err());
        assert!(validate_bounds(&array![f64::NAN], &array![0.0]).is_err());
        assert_eq!(
            validate_bounds(&Array1::zeros(0), &Array1::zeros(0)),
            Err(DEError::EmptyBounds)
        );
        assert_eq!(
            validate_bounds(&array![0.0], &array![1.0, 2.0]),
            Err(DEError::BoundsMismatch {
                lower_len: 1,
                upper_len: 2
            })
        );
    }
}
