use nalgebra::{DMatrix, Scalar};
use num_traits::Float;

/// Per-cell tag of the working matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Mask {
    #[default]
    None,
    Star,
    Prime,
}

/// Mask matrix plus the row and column covers that steer the zero search.
#[derive(Debug, Clone)]
pub(crate) struct Tracker {
    mask: DMatrix<Mask>,
    covered_rows: Vec<bool>,
    covered_cols: Vec<bool>,
}

impl Tracker {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            mask: DMatrix::from_element(n, n, Mask::None),
            covered_rows: vec![false; n],
            covered_cols: vec![false; n],
        }
    }

    fn dim(&self) -> usize {
        self.covered_rows.len()
    }

    pub(crate) fn reset(&mut self) {
        self.mask.fill(Mask::None);
        self.clear_covers();
    }

    pub(crate) fn clear_covers(&mut self) {
        self.covered_rows.fill(false);
        self.covered_cols.fill(false);
    }

    pub(crate) fn clear_primes(&mut self) {
        self.mask
            .iter_mut()
            .filter(|m| **m == Mask::Prime)
            .for_each(|m| *m = Mask::None);
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, mask: Mask) {
        self.mask[(row, col)] = mask;
    }

    pub(crate) fn is_row_covered(&self, row: usize) -> bool {
        self.covered_rows[row]
    }

    pub(crate) fn is_col_covered(&self, col: usize) -> bool {
        self.covered_cols[col]
    }

    pub(crate) fn cover_row(&mut self, row: usize) {
        self.covered_rows[row] = true;
    }

    pub(crate) fn cover_col(&mut self, col: usize) {
        self.covered_cols[col] = true;
    }

    pub(crate) fn uncover_col(&mut self, col: usize) {
        self.covered_cols[col] = false;
    }

    pub(crate) fn covered_col_count(&self) -> usize {
        self.covered_cols.iter().filter(|&&c| c).count()
    }

    /// First zero in row-major order whose row and column are both uncovered.
    ///
    /// The scan order decides which optimum is returned when several exist,
    /// so it must stay row-major.
    pub(crate) fn find_uncovered_zero<T>(&self, costs: &DMatrix<T>) -> Option<(usize, usize)>
    where
        T: Scalar + Float,
    {
        let n = self.dim();
        (0..n)
            .filter(|&row| !self.covered_rows[row])
            .flat_map(|row| (0..n).map(move |col| (row, col)))
            .find(|&(row, col)| !self.covered_cols[col] && costs[(row, col)].is_zero())
    }

    pub(crate) fn find_star_in_row(&self, row: usize) -> Option<usize> {
        (0..self.dim()).find(|&col| self.mask[(row, col)] == Mask::Star)
    }

    pub(crate) fn find_star_in_col(&self, col: usize) -> Option<usize> {
        (0..self.dim()).find(|&row| self.mask[(row, col)] == Mask::Star)
    }

    pub(crate) fn find_prime_in_row(&self, row: usize) -> Option<usize> {
        (0..self.dim()).find(|&col| self.mask[(row, col)] == Mask::Prime)
    }

    /// Smallest cost among cells whose row and column are both uncovered.
    pub(crate) fn min_uncovered<T>(&self, costs: &DMatrix<T>) -> Option<T>
    where
        T: Scalar + Float,
    {
        let n = self.dim();
        let mut min = None;
        for row in (0..n).filter(|&row| !self.covered_rows[row]) {
            for col in (0..n).filter(|&col| !self.covered_cols[col]) {
                let curr = costs[(row, col)];
                match min {
                    Some(m) if m <= curr => {}
                    _ => min = Some(curr),
                }
            }
        }
        min
    }

    /// Un-star every starred cell on the path and star every primed one.
    pub(crate) fn flip_path(&mut self, path: &[(usize, usize)]) {
        for &(row, col) in path {
            let flipped = match self.mask[(row, col)] {
                Mask::Star => Mask::None,
                _ => Mask::Star,
            };
            self.mask[(row, col)] = flipped;
        }
    }
}
