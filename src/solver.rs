use log::{debug, trace};
use nalgebra::{DMatrix, Dim, Matrix, RawStorage, Scalar};
use num_traits::{Float, NumCast};

use crate::error::{Error, Result};
use crate::step::{SolverState, Step};

/// Reusable Munkres solver for a fixed `rows x cols` problem size.
///
/// All buffers are allocated once in [`Munkres::new`], padded to a square of
/// side `max(rows, cols)`. Load costs with [`Munkres::set_cost_matrix`], then
/// call [`Munkres::run`] and read [`Munkres::links`] and [`Munkres::cost`].
/// Loading new costs into the same instance re-solves without reallocating.
#[derive(Debug, Clone)]
pub struct Munkres<T: Scalar = f64> {
    rows: usize,
    cols: usize,
    original: DMatrix<T>,
    state: SolverState<T>,
    links: Vec<i64>,
    cost: T,
    step_limit: usize,
}

impl<T> Munkres<T>
where
    T: Scalar + Float,
{
    /// Allocates a solver for `rows x cols` cost matrices.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimension { rows, cols });
        }

        let n = rows.max(cols);
        Ok(Self {
            rows,
            cols,
            original: DMatrix::from_element(rows, cols, T::zero()),
            state: SolverState::new(n),
            links: vec![-1; rows],
            cost: T::zero(),
            step_limit: 4 * (n + 1) * (n + 1),
        })
    }

    /// Replaces the bound on step transitions a single [`Munkres::run`] may take.
    pub fn with_step_limit(mut self, limit: usize) -> Self {
        self.step_limit = limit;
        self
    }

    /// Row count of the cost matrices this solver accepts.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column count of the cost matrices this solver accepts.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Loads a new cost matrix and clears the previous result.
    ///
    /// The matrix is rejected as a whole, leaving the solver untouched, if its
    /// shape differs from the one given to [`Munkres::new`] or if any entry
    /// is NaN or infinite. Matrices whose `max - min` spread, scaled by
    /// `2 * max(rows, cols) + 1`, overflows `T` are rejected with
    /// [`Error::CostSpreadOverflow`], since the row reductions and
    /// adjustments could not stay finite.
    pub fn set_cost_matrix<R, C, S>(&mut self, costs: &Matrix<T, R, C, S>) -> Result<()>
    where
        R: Dim,
        C: Dim,
        S: RawStorage<T, R, C>,
    {
        let expected = (self.rows, self.cols);
        let got = costs.shape();
        if got != expected {
            debug!("rejecting {got:?} cost matrix, solver is {expected:?}");
            return Err(Error::DimensionMismatch { expected, got });
        }

        let (mut min, mut max) = (T::infinity(), T::neg_infinity());
        for row in 0..self.rows {
            for col in 0..self.cols {
                let c = costs[(row, col)];
                if !c.is_finite() {
                    debug!("rejecting cost matrix, non-finite entry at ({row}, {col})");
                    return Err(Error::NonFiniteCost { row, col });
                }
                min = min.min(c);
                max = max.max(c);
            }
        }

        // reduced costs must stay finite through every adjustment
        let lines = <T as NumCast>::from(2 * self.rows.max(self.cols) + 1)
            .unwrap_or_else(T::infinity);
        if !((max - min) * lines).is_finite() {
            debug!("rejecting cost matrix, spread {:?} overflows", max - min);
            return Err(Error::CostSpreadOverflow);
        }

        for row in 0..self.rows {
            for col in 0..self.cols {
                self.original[(row, col)] = costs[(row, col)];
            }
        }
        self.state.load(&self.original);
        self.links.fill(-1);
        self.cost = T::zero();
        Ok(())
    }

    /// Solves the loaded problem, filling [`Munkres::links`] and [`Munkres::cost`].
    ///
    /// Every call starts again from the loaded costs, so repeated runs give
    /// the same answer.
    pub fn run(&mut self) -> Result<()> {
        self.links.fill(-1);
        self.cost = T::zero();
        self.state.load(&self.original);

        if self.rows == 1 || self.cols == 1 {
            self.select_single();
            return Ok(());
        }

        let mut step = Step::ReduceRows;
        let mut taken = 0;
        while step != Step::Done {
            if taken >= self.step_limit {
                return Err(Error::AlgorithmFault(format!(
                    "no assignment after {taken} steps on a {}x{} problem",
                    self.rows, self.cols
                )));
            }
            trace!("step {taken}: {step:?}");
            step = self.state.advance(step)?;
            taken += 1;
        }

        self.extract();
        debug!(
            "solved {}x{} assignment in {taken} steps",
            self.rows, self.cols
        );
        Ok(())
    }

    /// `links()[i]` is the column assigned to row `i`, or `-1` if the row is unassigned.
    pub fn links(&self) -> &[i64] {
        &self.links
    }

    /// Total original cost of the assignment.
    pub fn cost(&self) -> T {
        self.cost
    }

    /// Assigned `(row, col)` pairs in row order.
    pub fn assignments(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.links
            .iter()
            .enumerate()
            .filter_map(|(row, &col)| usize::try_from(col).ok().map(|col| (row, col)))
    }

    // One row or one column: the cheapest cell is the whole answer.
    fn select_single(&mut self) {
        if self.rows == 1 {
            if let Some(col) = first_min(self.original.row(0).iter().copied()) {
                self.links[0] = col as i64;
                self.cost = self.original[(0, col)];
            }
        } else if let Some(row) = first_min(self.original.column(0).iter().copied()) {
            self.links[row] = 0;
            self.cost = self.original[(row, 0)];
        }
        debug!(
            "solved {}x{} assignment directly, cost {:?}",
            self.rows, self.cols, self.cost
        );
    }

    fn extract(&mut self) {
        for row in 0..self.rows {
            let star = self
                .state
                .tracker
                .find_star_in_row(row)
                .filter(|&col| col < self.cols);
            if let Some(col) = star {
                self.links[row] = col as i64;
                self.cost = self.cost + self.original[(row, col)];
            }
        }
    }
}

fn first_min<T: Float>(values: impl Iterator<Item = T>) -> Option<usize> {
    values
        .enumerate()
        .fold(None, |best: Option<(usize, T)>, (i, v)| match best {
            Some((_, b)) if b <= v => best,
            _ => Some((i, v)),
        })
        .map(|(i, _)| i)
}
