//! Fixed-size matrices
//!
//! `Matrix<T, W, H>` stores `H` rows of `W` columns, row after row.
//! Vectors multiply from the left as row vectors: `v * M`.

use std::fmt;
use std::ops::{Index, IndexMut, Mul};

use crate::scalar::{Float, Scalar};
use crate::vector::Vector;
use crate::{MathError, MathResult};

/// A matrix of `H` rows by `W` columns
#[derive(Clone, Copy, PartialEq)]
pub struct Matrix<T, const W: usize, const H: usize> {
    rows: [[T; W]; H],
}

pub type Mat2<T> = Matrix<T, 2, 2>;
pub type Mat3<T> = Matrix<T, 3, 3>;
pub type Mat4<T> = Matrix<T, 4, 4>;

pub type Mat2f = Mat2<f32>;
pub type Mat3f = Mat3<f32>;
pub type Mat4f = Mat4<f32>;
pub type Mat3d = Mat3<f64>;
pub type Mat4d = Mat4<f64>;

impl<T, const W: usize, const H: usize> Matrix<T, W, H> {
    /// Create a matrix from its rows
    pub const fn from_rows(rows: [[T; W]; H]) -> Self {
        Self { rows }
    }

    pub const fn width(&self) -> usize {
        W
    }

    pub const fn height(&self) -> usize {
        H
    }

    pub const fn rows(&self) -> &[[T; W]; H] {
        &self.rows
    }

    /// Elements in row-major order
    pub fn as_flat(&self) -> &[T] {
        self.rows.as_flattened()
    }

    pub fn as_flat_mut(&mut self) -> &mut [T] {
        self.rows.as_flattened_mut()
    }
}

impl<T: Scalar, const W: usize, const H: usize> Matrix<T, W, H> {
    /// The zero matrix
    pub const ZERO: Self = Self { rows: [[T::ZERO; W]; H] };

    /// Create a matrix from a per-(row, column) generator
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        Self {
            rows: std::array::from_fn(|row| std::array::from_fn(|col| f(row, col))),
        }
    }

    pub fn row(&self, index: usize) -> Vector<T, W> {
        Vector::new(self.rows[index])
    }

    pub fn column(&self, index: usize) -> Vector<T, H> {
        Vector::from_fn(|row| self.rows[row][index])
    }

    pub fn transpose(&self) -> Matrix<T, H, W> {
        Matrix::from_fn(|row, col| self.rows[col][row])
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    pub fn identity() -> Self {
        Self::from_fn(|row, col| if row == col { T::ONE } else { T::ZERO })
    }
}

impl<T: Float, const N: usize> Matrix<T, N, N> {
    /// Determinant, by Gaussian elimination with partial pivoting
    pub fn determinant(&self) -> T {
        let mut rows = self.rows;
        let mut det = T::ONE;

        for col in 0..N {
            let pivot = Self::pivot_row(&rows, col);
            if rows[pivot][col].abs() <= T::EPSILON {
                return T::ZERO;
            }
            if pivot != col {
                rows.swap(pivot, col);
                det = -det;
            }

            det *= rows[col][col];
            for row in col + 1..N {
                let factor = rows[row][col] / rows[col][col];
                for k in col..N {
                    let sub = factor * rows[col][k];
                    rows[row][k] -= sub;
                }
            }
        }

        det
    }

    /// Inverse, by Gauss-Jordan elimination.
    ///
    /// Returns `None` if the matrix is singular.
    pub fn inverse(&self) -> Option<Self> {
        let mut rows = self.rows;
        let mut inv = Self::identity().rows;

        for col in 0..N {
            let pivot = Self::pivot_row(&rows, col);
            if rows[pivot][col].abs() <= T::EPSILON {
                return None;
            }
            rows.swap(pivot, col);
            inv.swap(pivot, col);

            let scale = rows[col][col];
            for k in 0..N {
                rows[col][k] /= scale;
                inv[col][k] /= scale;
            }

            for row in 0..N {
                if row == col {
                    continue;
                }
                let factor = rows[row][col];
                if factor == T::ZERO {
                    continue;
                }
                for k in 0..N {
                    let sub = factor * rows[col][k];
                    rows[row][k] -= sub;
                    let sub = factor * inv[col][k];
                    inv[row][k] -= sub;
                }
            }
        }

        Some(Self { rows: inv })
    }

    fn pivot_row(rows: &[[T; N]; N], col: usize) -> usize {
        (col..N)
            .max_by(|&a, &b| {
                rows[a][col]
                    .abs()
                    .partial_cmp(&rows[b][col].abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .unwrap_or(col)
    }
}

impl<T: Scalar, const W: usize, const H: usize> Default for Matrix<T, W, H> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T: Scalar, const W: usize, const H: usize> TryFrom<&[T]> for Matrix<T, W, H> {
    type Error = MathError;

    /// Build from row-major elements
    fn try_from(values: &[T]) -> MathResult<Self> {
        if values.len() != W * H {
            return Err(MathError::DimensionMismatch {
                expected: W * H,
                found: values.len(),
            });
        }
        Ok(Self::from_fn(|row, col| values[row * W + col]))
    }
}

/// Flat, row-major indexing
impl<T, const W: usize, const H: usize> Index<usize> for Matrix<T, W, H> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_flat()[index]
    }
}

impl<T, const W: usize, const H: usize> IndexMut<usize> for Matrix<T, W, H> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_flat_mut()[index]
    }
}

/// `(row, column)` indexing
impl<T, const W: usize, const H: usize> Index<(usize, usize)> for Matrix<T, W, H> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.rows[row][col]
    }
}

impl<T, const W: usize, const H: usize> IndexMut<(usize, usize)> for Matrix<T, W, H> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.rows[row][col]
    }
}

/// `(H×W) · (W×K) = (H×K)`
impl<T: Scalar, const W: usize, const H: usize, const K: usize> Mul<Matrix<T, K, W>>
    for Matrix<T, W, H>
{
    type Output = Matrix<T, K, H>;

    fn mul(self, rhs: Matrix<T, K, W>) -> Matrix<T, K, H> {
        Matrix::from_fn(|row, col| {
            (0..W).fold(T::ZERO, |acc, i| acc + self.rows[row][i] * rhs.rows[i][col])
        })
    }
}

impl<T: Scalar, const W: usize, const H: usize> Mul<T> for Matrix<T, W, H> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::from_fn(|row, col| self.rows[row][col] * rhs)
    }
}

/// Row vector times matrix: `res[w] = Σ_h v[h] · m[h][w]`
impl<T: Scalar, const W: usize, const H: usize> Mul<Matrix<T, W, H>> for Vector<T, H> {
    type Output = Vector<T, W>;

    fn mul(self, rhs: Matrix<T, W, H>) -> Vector<T, W> {
        Vector::from_fn(|col| {
            (0..H).fold(T::ZERO, |acc, row| acc + self[row] * rhs.rows[row][col])
        })
    }
}

impl<T: fmt::Debug, const W: usize, const H: usize> fmt::Debug for Matrix<T, W, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mat{W}x{H}")?;
        f.debug_list().entries(self.rows.iter()).finish()
    }
}

impl<T: fmt::Display, const W: usize, const H: usize> fmt::Display for Matrix<T, W, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (j, elt) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{elt:>10.4}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
