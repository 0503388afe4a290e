//! Exact solver for the linear assignment problem using the Munkres
//! (Hungarian) algorithm.
//!
//! Rectangular matrices are padded with zero-cost dummy rows or columns, so
//! the surplus rows (or columns) simply stay unassigned.
//!
//! ```
//! let costs = nalgebra::DMatrix::from_row_slice(2, 3, &[2., 1., 3., 6., 5., 4.]);
//! let solver = munkres::solve(&costs).unwrap();
//! assert_eq!(solver.links(), &[1, 2]);
//! assert_eq!(solver.cost(), 5.);
//! ```

mod error;
mod mask;
mod path;
mod solver;
mod step;

pub use error::{Error, Result};
pub use solver::Munkres;

use nalgebra::{Dim, Matrix, RawStorage, Scalar};
use num_traits::Float;

/// Sizes a solver to `costs`, loads it and runs it to completion.
pub fn solve<T, R, C, S>(costs: &Matrix<T, R, C, S>) -> Result<Munkres<T>>
where
    T: Scalar + Float,
    R: Dim,
    C: Dim,
    S: RawStorage<T, R, C>,
{
    let (rows, cols) = costs.shape();
    let mut solver = Munkres::new(rows, cols)?;
    solver.set_cost_matrix(costs)?;
    solver.run()?;
    Ok(solver)
}
