//! Square matrices with cofactor-expansion inversion.
//!
//! Only 4x4 matrices are used for transforms; the smaller sizes appear as
//! submatrices while computing determinants.

use std::ops::{Index, IndexMut, Mul};

use crate::approx_eq;
use crate::error::{Result, TraceError};
use crate::tuple::Tuple;

/// Row-major N x N matrix owning its storage.
#[derive(Debug, Clone)]
pub struct Matrix {
    size: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Zero-filled `size` x `size` matrix.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            data: vec![0.0; size * size],
        }
    }

    /// 4x4 identity.
    pub fn identity() -> Self {
        let mut m = Self::new(4);
        for i in 0..4 {
            m[(i, i)] = 1.0;
        }
        m
    }

    /// Build an `N` x `N` matrix from its rows.
    pub fn from_rows<const N: usize>(rows: [[f64; N]; N]) -> Self {
        Self {
            size: N,
            data: rows.iter().flatten().copied().collect(),
        }
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Swap rows and columns.
    pub fn transpose(&self) -> Self {
        let mut t = Self::new(self.size);
        for row in 0..self.size {
            for col in 0..self.size {
                t[(col, row)] = self[(row, col)];
            }
        }
        t
    }

    /// Determinant by cofactor expansion along row 0.
    pub fn determinant(&self) -> f64 {
        match self.size {
            0 => 1.0,
            1 => self.data[0],
            2 => self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)],
            n => (0..n).map(|col| self[(0, col)] * self.cofactor(0, col)).sum(),
        }
    }

    /// Copy with `row` and `col` removed.
    ///
    /// # Panics
    ///
    /// If `row` or `col` is out of range, which includes every call on a 0x0 matrix.
    pub fn submatrix(&self, row: usize, col: usize) -> Self {
        assert!(
            row < self.size && col < self.size,
            "submatrix index ({row}, {col}) out of range for {0}x{0} matrix",
            self.size
        );
        let size = self.size - 1;
        let data = (0..self.size)
            .filter(|&r| r != row)
            .flat_map(|r| {
                (0..self.size)
                    .filter(move |&c| c != col)
                    .map(move |c| (r, c))
            })
            .map(|(r, c)| self[(r, c)])
            .collect();
        Self { size, data }
    }

    /// Determinant of the submatrix at (`row`, `col`).
    pub fn minor(&self, row: usize, col: usize) -> f64 {
        self.submatrix(row, col).determinant()
    }

    /// Minor with sign `(-1)^(row + col)`.
    pub fn cofactor(&self, row: usize, col: usize) -> f64 {
        let minor = self.minor(row, col);
        if (row + col) % 2 == 0 { minor } else { -minor }
    }

    /// Whether the determinant is non-zero and finite.
    pub fn is_invertible(&self) -> bool {
        invertible_determinant(self.determinant())
    }

    /// Inverse via the adjugate divided by the determinant.
    ///
    /// # Errors
    ///
    /// [`TraceError::NonInvertible`] when the determinant is zero (or not finite).
    pub fn inverse(&self) -> Result<Self> {
        let determinant = self.determinant();
        if !invertible_determinant(determinant) {
            return Err(TraceError::NonInvertible { determinant });
        }

        let mut inverse = Self::new(self.size);
        for row in 0..self.size {
            for col in 0..self.size {
                // Transposed store: cofactor (row, col) lands at (col, row).
                inverse[(col, row)] = self.cofactor(row, col) / determinant;
            }
        }
        Ok(inverse)
    }
}

fn invertible_determinant(determinant: f64) -> bool {
    determinant != 0.0 && determinant.is_finite()
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| approx_eq(*a, *b))
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[row * self.size + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.data[row * self.size + col]
    }
}

/// Matrix product.
///
/// # Panics
///
/// If the two matrices differ in size.
impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        assert_eq!(self.size, rhs.size, "matrix sizes differ");
        let n = self.size;
        let mut product = Matrix::new(n);
        for row in 0..n {
            for col in 0..n {
                product[(row, col)] = (0..n).map(|k| self[(row, k)] * rhs[(k, col)]).sum();
            }
        }
        product
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        &self * &rhs
    }
}

impl Mul<&Matrix> for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        &self * rhs
    }
}

impl Mul<Tuple> for &Matrix {
    type Output = Tuple;

    /// The tuple is treated as a 4-element column.
    ///
    /// # Panics
    ///
    /// If the matrix is not 4x4.
    fn mul(self, rhs: Tuple) -> Tuple {
        assert_eq!(self.size, 4, "tuples multiply only with 4x4 matrices");
        let mut out = [0.0; 4];
        for (row, slot) in out.iter_mut().enumerate() {
            *slot = (0..4).map(|k| self[(row, k)] * rhs[k]).sum();
        }
        Tuple::from(out)
    }
}

impl Mul<Tuple> for Matrix {
    type Output = Tuple;

    fn mul(self, rhs: Tuple) -> Tuple {
        &self * rhs
    }
}
