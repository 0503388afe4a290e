use crate::error::{Error, Result};
use crate::mask::Tracker;

/// Collects the alternating prime/star chain that starts at `seed` into `path`.
///
/// The chain is `Z0, Z1, Z2, ...` where `Z0` is the seed prime, every odd
/// entry is the star in the previous prime's column and every even entry is
/// the prime in the previous star's row. It ends on a prime whose column
/// holds no star.
pub(crate) fn build(
    tracker: &Tracker,
    seed: (usize, usize),
    path: &mut Vec<(usize, usize)>,
    n: usize,
) -> Result<()> {
    path.clear();
    path.push(seed);

    let mut col = seed.1;
    while let Some(row) = tracker.find_star_in_col(col) {
        path.push((row, col));

        col = tracker.find_prime_in_row(row).ok_or_else(|| {
            Error::AlgorithmFault(format!("star at ({row}, {col}) has no prime in its row"))
        })?;
        path.push((row, col));

        if path.len() > 2 * n + 1 {
            return Err(Error::AlgorithmFault(format!(
                "augmenting path from {seed:?} exceeds {} cells",
                2 * n + 1
            )));
        }
    }

    Ok(())
}
