use rand::Rng;

/// Draws `K` pairwise-distinct indices from `0..pool_size`, none equal to
/// `exclude`. Each slot is redrawn until it is distinct from `exclude` and from
/// the slots already filled, so the number of draws taken from `rng` varies.
pub(crate) fn distinct_indices<const K: usize, R: Rng + ?Sized>(
    exclude: usize,
    pool_size: usize,
    rng: &mut R,
) -> [usize; K] {
    assert!(
        K < pool_size,
        "cannot draw {K} distinct indices excluding one from a pool of {pool_size}"
    );
    let mut out = [exclude; K];
    for slot in 0..K {
        let mut idx = exclude;
        while idx == exclude || out[..slot].contains(&idx) {
            idx = rng.random_range(0..pool_size);
        }
        out[slot] = idx;
    }
    out
}
