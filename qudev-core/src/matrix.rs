//! Dense complex matrices for gate representations

use crate::error::DeviceError;
use crate::Result;
use num_complex::Complex64;
use std::fmt;

/// A dense square complex matrix in row-major order
///
/// Used for dense-matrix gate representations and observables. The matrix
/// is square by construction; gate usage additionally requires the
/// dimension to be a power of two, which is checked where the matrix is
/// bound to wires.
#[derive(Clone, PartialEq)]
pub struct SquareMatrix {
    dim: usize,
    data: Vec<Complex64>,
}

impl SquareMatrix {
    /// Create a matrix from nested rows
    ///
    /// # Errors
    /// Returns [`DeviceError::Validation`] if the rows are empty or not all
    /// of length equal to the row count.
    pub fn from_rows(rows: &[Vec<Complex64>]) -> Result<Self> {
        let dim = rows.len();
        if dim == 0 {
            return Err(DeviceError::Validation("matrix must be non-empty".into()));
        }
        if rows.iter().any(|row| row.len() != dim) {
            return Err(DeviceError::Validation(
                "matrix must be square".into(),
            ));
        }

        Ok(Self {
            dim,
            data: rows.iter().flatten().copied().collect(),
        })
    }

    /// Create a matrix from a flattened row-major buffer
    ///
    /// # Errors
    /// Returns [`DeviceError::Validation`] if `data` is not `dim * dim`
    /// elements long.
    pub fn from_flat(dim: usize, data: Vec<Complex64>) -> Result<Self> {
        if dim == 0 || data.len() != dim * dim {
            return Err(DeviceError::Validation(format!(
                "matrix buffer of {} elements does not form a {dim}x{dim} matrix",
                data.len()
            )));
        }
        Ok(Self { dim, data })
    }

    /// The identity matrix of the given dimension
    pub fn identity(dim: usize) -> Self {
        let mut data = vec![Complex64::new(0.0, 0.0); dim * dim];
        for i in 0..dim {
            data[i * dim + i] = Complex64::new(1.0, 0.0);
        }
        Self { dim, data }
    }

    /// Matrix dimension (number of rows)
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Element at `(row, col)`
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.data[row * self.dim + col]
    }

    /// The flattened row-major elements
    #[inline]
    pub fn as_slice(&self) -> &[Complex64] {
        &self.data
    }

    /// Number of wires a gate with this matrix acts on, if the dimension
    /// is a power of two
    pub fn wire_span(&self) -> Option<usize> {
        if self.dim.is_power_of_two() {
            Some(self.dim.trailing_zeros() as usize)
        } else {
            None
        }
    }

    /// The conjugate transpose
    pub fn dagger(&self) -> Self {
        let mut data = vec![Complex64::new(0.0, 0.0); self.dim * self.dim];
        for row in 0..self.dim {
            for col in 0..self.dim {
                data[col * self.dim + row] = self.get(row, col).conj();
            }
        }
        Self {
            dim: self.dim,
            data,
        }
    }

    /// Whether the matrix equals its own conjugate transpose within
    /// `tolerance`
    pub fn is_hermitian(&self, tolerance: f64) -> bool {
        for row in 0..self.dim {
            for col in 0..self.dim {
                let diff = self.get(row, col) - self.get(col, row).conj();
                if diff.norm() > tolerance {
                    return false;
                }
            }
        }
        true
    }
}

impl fmt::Debug for SquareMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SquareMatrix({}x{})", self.dim, self.dim)
    }
}

macro_rules! impl_from_array {
    ($n:expr) => {
        impl From<[[Complex64; $n]; $n]> for SquareMatrix {
            fn from(rows: [[Complex64; $n]; $n]) -> Self {
                Self {
                    dim: $n,
                    data: rows.iter().flatten().copied().collect(),
                }
            }
        }

        impl From<&[[Complex64; $n]; $n]> for SquareMatrix {
            fn from(rows: &[[Complex64; $n]; $n]) -> Self {
                Self {
                    dim: $n,
                    data: rows.iter().flatten().copied().collect(),
                }
            }
        }
    };
}

impl_from_array!(2);
impl_from_array!(4);
impl_from_array!(8);

#[cfg(test)]
mod tests {
    use super::*;

    fn re(x: f64) -> Complex64 {
        Complex64::new(x, 0.0)
    }

    #[test]
    fn test_from_rows() {
        let m = SquareMatrix::from_rows(&[vec![re(1.0), re(2.0)], vec![re(3.0), re(4.0)]]).unwrap();
        assert_eq!(m.dim(), 2);
        assert_eq!(m.get(1, 0), re(3.0));
        assert_eq!(m.wire_span(), Some(1));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let result = SquareMatrix::from_rows(&[vec![re(1.0), re(2.0)], vec![re(3.0)]]);
        assert!(result.is_err());
    }

    #[test]
    fn test_identity() {
        let m = SquareMatrix::identity(4);
        for row in 0..4 {
            for col in 0..4 {
                let expected = if row == col { 1.0 } else { 0.0 };
                assert_eq!(m.get(row, col), re(expected));
            }
        }
    }

    #[test]
    fn test_wire_span_non_power_of_two() {
        let m = SquareMatrix::identity(3);
        assert_eq!(m.wire_span(), None);
    }

    #[test]
    fn test_dagger() {
        let m = SquareMatrix::from_rows(&[
            vec![re(1.0), Complex64::new(0.0, 1.0)],
            vec![re(0.0), re(2.0)],
        ])
        .unwrap();
        let d = m.dagger();
        assert_eq!(d.get(1, 0), Complex64::new(0.0, -1.0));
        assert_eq!(d.get(0, 1), re(0.0));
    }

    #[test]
    fn test_is_hermitian() {
        // Pauli-Y is Hermitian
        let y = SquareMatrix::from_rows(&[
            vec![re(0.0), Complex64::new(0.0, -1.0)],
            vec![Complex64::new(0.0, 1.0), re(0.0)],
        ])
        .unwrap();
        assert!(y.is_hermitian(1e-10));

        let not_hermitian = SquareMatrix::from_rows(&[
            vec![re(0.0), re(1.0)],
            vec![re(2.0), re(0.0)],
        ])
        .unwrap();
        assert!(!not_hermitian.is_hermitian(1e-10));
    }
}
