use nalgebra::{DMatrix, Scalar};
use num_traits::Float;

use crate::error::{Error, Result};
use crate::mask::{Mask, Tracker};
use crate::path;

/// States of the Munkres iteration, in the classical 1..7 numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// 1: subtract each row's minimum from the row
    ReduceRows,
    /// 2: star independent zeros
    StarZeros,
    /// 3: cover starred columns, finish once every column is covered
    CoverStarredColumns,
    /// 4: prime uncovered zeros until one has no star in its row
    PrimeZeros,
    /// 5: flip the augmenting path that starts at this prime
    Augment { row: usize, col: usize },
    /// 6: shift the smallest uncovered value onto the covered lines
    AdjustCosts,
    /// 7
    Done,
}

/// Square working set of one solver: reduced costs, mask/covers and the path buffer.
#[derive(Debug, Clone)]
pub(crate) struct SolverState<T: Scalar> {
    costs: DMatrix<T>,
    pub(crate) tracker: Tracker,
    path: Vec<(usize, usize)>,
}

impl<T> SolverState<T>
where
    T: Scalar + Float,
{
    pub(crate) fn new(n: usize) -> Self {
        Self {
            costs: DMatrix::from_element(n, n, T::zero()),
            tracker: Tracker::new(n),
            path: Vec::with_capacity(2 * n + 1),
        }
    }

    pub(crate) fn dim(&self) -> usize {
        self.costs.nrows()
    }

    /// Copies `costs` into the top-left block and zero-fills the padding.
    pub(crate) fn load(&mut self, costs: &DMatrix<T>) {
        let (rows, cols) = costs.shape();
        self.costs.fill(T::zero());
        self.costs.view_mut((0, 0), (rows, cols)).copy_from(costs);
        self.tracker.reset();
        self.path.clear();
    }

    pub(crate) fn advance(&mut self, step: Step) -> Result<Step> {
        Ok(match step {
            Step::ReduceRows => self.reduce_rows(),
            Step::StarZeros => self.star_zeros(),
            Step::CoverStarredColumns => self.cover_starred_columns(),
            Step::PrimeZeros => self.prime_zeros(),
            Step::Augment { row, col } => self.augment(row, col)?,
            Step::AdjustCosts => self.adjust_costs()?,
            Step::Done => Step::Done,
        })
    }

    fn reduce_rows(&mut self) -> Step {
        self.costs.row_iter_mut().for_each(|mut r| {
            let min = r.iter().fold(T::infinity(), |acc, &c| acc.min(c));
            r.iter_mut().for_each(|c| *c = *c - min);
        });
        Step::StarZeros
    }

    fn star_zeros(&mut self) -> Step {
        let n = self.dim();
        for row in 0..n {
            for col in 0..n {
                if self.costs[(row, col)].is_zero()
                    && !self.tracker.is_row_covered(row)
                    && !self.tracker.is_col_covered(col)
                {
                    self.tracker.set(row, col, Mask::Star);
                    self.tracker.cover_row(row);
                    self.tracker.cover_col(col);
                }
            }
        }
        self.tracker.clear_covers();
        Step::CoverStarredColumns
    }

    fn cover_starred_columns(&mut self) -> Step {
        let n = self.dim();
        for col in 0..n {
            if self.tracker.find_star_in_col(col).is_some() {
                self.tracker.cover_col(col);
            }
        }

        if self.tracker.covered_col_count() >= n {
            Step::Done
        } else {
            Step::PrimeZeros
        }
    }

    fn prime_zeros(&mut self) -> Step {
        while let Some((row, col)) = self.tracker.find_uncovered_zero(&self.costs) {
            self.tracker.set(row, col, Mask::Prime);
            match self.tracker.find_star_in_row(row) {
                Some(star_col) => {
                    self.tracker.cover_row(row);
                    self.tracker.uncover_col(star_col);
                }
                None => return Step::Augment { row, col },
            }
        }
        Step::AdjustCosts
    }

    fn augment(&mut self, row: usize, col: usize) -> Result<Step> {
        let n = self.dim();
        path::build(&self.tracker, (row, col), &mut self.path, n)?;
        self.tracker.flip_path(&self.path);
        self.tracker.clear_covers();
        self.tracker.clear_primes();
        Ok(Step::CoverStarredColumns)
    }

    fn adjust_costs(&mut self) -> Result<Step> {
        let min = self
            .tracker
            .min_uncovered(&self.costs)
            .ok_or_else(|| Error::AlgorithmFault("no uncovered cell left to adjust".into()))?;

        let tracker = &self.tracker;
        // add min to all covered rows
        self.costs
            .row_iter_mut()
            .enumerate()
            .filter(|(i, _)| tracker.is_row_covered(*i))
            .for_each(|(_, mut r)| r.iter_mut().for_each(|c| *c = *c + min));

        // subtract min from all uncovered columns
        self.costs
            .column_iter_mut()
            .enumerate()
            .filter(|(i, _)| !tracker.is_col_covered(*i))
            .for_each(|(_, mut c)| c.iter_mut().for_each(|v| *v = *v - min));

        Ok(Step::PrimeZeros)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn state_from(rows: usize, cols: usize, data: &[f64]) -> SolverState<f64> {
        let mut state = SolverState::new(rows.max(cols));
        state.load(&DMatrix::from_row_slice(rows, cols, data));
        state
    }

    #[test]
    fn load_pads_with_zeros() {
        let state = state_from(1, 2, &[3., 4.]);
        assert_eq!(state.costs, DMatrix::from_row_slice(2, 2, &[3., 4., 0., 0.]));
    }

    #[test]
    fn row_reduction_leaves_a_zero_per_row() {
        #[rustfmt::skip]
        let mut state = state_from(2, 3, &[
            2., 1., 3.,
            6., 5., 4.,
        ]);
        assert_eq!(state.advance(Step::ReduceRows), Ok(Step::StarZeros));
        #[rustfmt::skip]
        let expected = DMatrix::from_row_slice(3, 3, &[
            1., 0., 2.,
            2., 1., 0.,
            0., 0., 0.,
        ]);
        assert_eq!(state.costs, expected);
    }

    #[test]
    fn initial_starring_is_row_major_and_clears_covers() {
        #[rustfmt::skip]
        let mut state = state_from(3, 3, &[
            0., 0., 1.,
            0., 2., 0.,
            3., 0., 4.,
        ]);
        assert_eq!(state.advance(Step::StarZeros), Ok(Step::CoverStarredColumns));
        assert_eq!(state.tracker.find_star_in_row(0), Some(0));
        assert_eq!(state.tracker.find_star_in_row(1), Some(2));
        assert_eq!(state.tracker.find_star_in_row(2), Some(1));
        assert_eq!(state.tracker.covered_col_count(), 0);

        assert_eq!(state.advance(Step::CoverStarredColumns), Ok(Step::Done));
    }

    #[test]
    fn prime_without_star_seeds_augment() {
        #[rustfmt::skip]
        let mut state = state_from(2, 2, &[
            0., 0.,
            0., 1.,
        ]);
        state.tracker.set(0, 0, Mask::Star);
        assert_eq!(state.advance(Step::CoverStarredColumns), Ok(Step::PrimeZeros));
        // (0, 1) is primed and covers row 0, then (1, 0) is uncovered
        assert_eq!(state.advance(Step::PrimeZeros), Ok(Step::Augment { row: 1, col: 0 }));
        assert_eq!(
            state.advance(Step::Augment { row: 1, col: 0 }),
            Ok(Step::CoverStarredColumns)
        );
        assert_eq!(state.tracker.find_star_in_row(0), Some(1));
        assert_eq!(state.tracker.find_star_in_row(1), Some(0));
        assert_eq!(state.tracker.find_prime_in_row(0), None);
    }

    #[test]
    fn adjustment_creates_an_uncovered_zero() {
        #[rustfmt::skip]
        let mut state = state_from(2, 2, &[
            0., 2.,
            0., 3.,
        ]);
        state.tracker.set(0, 0, Mask::Star);
        assert_eq!(state.advance(Step::CoverStarredColumns), Ok(Step::PrimeZeros));
        assert_eq!(state.advance(Step::PrimeZeros), Ok(Step::AdjustCosts));
        assert_eq!(state.advance(Step::AdjustCosts), Ok(Step::PrimeZeros));
        assert_eq!(state.costs, DMatrix::from_row_slice(2, 2, &[0., 0., 0., 1.]));
    }
}
