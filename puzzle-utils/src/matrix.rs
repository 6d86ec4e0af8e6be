//! Small dense matrix and vector math.
//!
//! Enough for linear recurrences (repeated products of a transition matrix) and
//! the occasional linear transform; no decomposition or inversion.

use std::ops::{Add, Mul};

use crate::error::MatrixError;

/// A row-major, rectangular, non-empty matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    values: Vec<T>,
}

/// A column vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vector<T> {
    values: Vec<T>,
}

impl<T> Vector<T> {
    pub fn new(values: Vec<T>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(values: Vec<T>) -> Self {
        Self::new(values)
    }
}

impl<T> Matrix<T> {
    /// Builds a matrix from its rows.
    ///
    /// # Errors
    ///
    /// - [`MatrixError::Empty`] without rows or columns
    /// - [`MatrixError::Ragged`] when a row length differs from the first row's
    pub fn new(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(MatrixError::Empty);
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(MatrixError::Ragged {
                row,
                expected: cols,
                found,
            });
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            values: rows.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.values.get(row * self.cols + col)
        } else {
            None
        }
    }

    fn row(&self, row: usize) -> &[T] {
        &self.values[row * self.cols..(row + 1) * self.cols]
    }
}

impl<T> Matrix<T>
where
    T: Copy + Default + Add<Output = T> + Mul<Output = T>,
{
    /// The `n`×`n` identity; `n` is raised to 1 for an empty request.
    pub fn identity(n: usize) -> Self
    where
        T: From<u8>,
    {
        let n = n.max(1);
        let values = (0..n * n)
            .map(|i| if i / n == i % n { T::from(1) } else { T::from(0) })
            .collect();
        Self {
            rows: n,
            cols: n,
            values,
        }
    }

    /// Matrix product `self × other`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::DimensionMismatch`] unless `self.cols() == other.rows()`.
    pub fn mul(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        if self.cols != other.rows {
            return Err(MatrixError::DimensionMismatch {
                left: self.cols,
                right: other.rows,
            });
        }

        let mut values = Vec::with_capacity(self.rows * other.cols);
        for r in 0..self.rows {
            let row = self.row(r);
            for c in 0..other.cols {
                let cell = row
                    .iter()
                    .enumerate()
                    .fold(T::default(), |sum, (k, &a)| sum + a * other.values[k * other.cols + c]);
                values.push(cell);
            }
        }

        Ok(Matrix {
            rows: self.rows,
            cols: other.cols,
            values,
        })
    }

    /// Matrix-vector product `self × vector`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::DimensionMismatch`] unless `self.cols() == vector.len()`.
    pub fn mul_vector(&self, vector: &Vector<T>) -> Result<Vector<T>, MatrixError> {
        if self.cols != vector.len() {
            return Err(MatrixError::DimensionMismatch {
                left: self.cols,
                right: vector.len(),
            });
        }

        let values = (0..self.rows)
            .map(|r| {
                self.row(r)
                    .iter()
                    .zip(vector.values())
                    .fold(T::default(), |sum, (&a, &b)| sum + a * b)
            })
            .collect();
        Ok(Vector::new(values))
    }

    /// `self` raised to `exponent` by repeated squaring.
    ///
    /// # Errors
    ///
    /// [`MatrixError::DimensionMismatch`] for a non-square matrix.
    pub fn pow(&self, mut exponent: u64) -> Result<Matrix<T>, MatrixError>
    where
        T: From<u8>,
    {
        if self.rows != self.cols {
            return Err(MatrixError::DimensionMismatch {
                left: self.cols,
                right: self.rows,
            });
        }

        let mut result = Matrix::identity(self.rows);
        let mut base = self.clone();
        while exponent > 0 {
            if exponent & 1 == 1 {
                result = result.mul(&base)?;
            }
            exponent >>= 1;
            if exponent > 0 {
                base = base.mul(&base)?;
            }
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_and_ragged() {
        assert_eq!(Matrix::<i32>::new(vec![]), Err(MatrixError::Empty));
        assert_eq!(Matrix::<i32>::new(vec![vec![]]), Err(MatrixError::Empty));
        assert_eq!(
            Matrix::new(vec![vec![1, 2], vec![3]]),
            Err(MatrixError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_identity_product() {
        let m = Matrix::new(vec![vec![1i64, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(Matrix::identity(2).mul(&m).unwrap(), m);
        assert_eq!(m.mul(&Matrix::identity(3)).unwrap(), m);
    }

    #[test]
    fn test_product_shape_and_values() {
        let a = Matrix::new(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
        let b = Matrix::new(vec![vec![7, 8, 9], vec![10, 11, 12]]).unwrap();
        let product = a.mul(&b).unwrap();

        assert_eq!((product.rows(), product.cols()), (3, 3));
        assert_eq!(product.get(0, 0), Some(&27));
        assert_eq!(product.get(2, 2), Some(&117));
        assert_eq!(product.get(3, 0), None);
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = Matrix::new(vec![vec![1, 2, 3]]).unwrap();
        assert_eq!(
            a.mul(&a),
            Err(MatrixError::DimensionMismatch { left: 3, right: 1 })
        );
        assert_eq!(
            a.mul_vector(&Vector::new(vec![1, 2])),
            Err(MatrixError::DimensionMismatch { left: 3, right: 2 })
        );
    }

    #[test]
    fn test_mul_vector() {
        let rotate = Matrix::new(vec![vec![0, -1], vec![1, 0]]).unwrap();
        let turned = rotate.mul_vector(&Vector::from(vec![3, 1])).unwrap();
        assert_eq!(turned.values(), &[-1, 3]);
    }

    #[test]
    fn test_pow_fibonacci() {
        let step = Matrix::new(vec![vec![1u64, 1], vec![1, 0]]).unwrap();
        assert_eq!(step.pow(10).unwrap().get(0, 1), Some(&55));
        assert_eq!(step.pow(0).unwrap(), Matrix::identity(2));
    }
}
