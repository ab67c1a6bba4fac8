//! Supported observables and Hermitian validation

use crate::matrices;
use num_complex::Complex64;
use qudev_core::{DeviceError, Result, SquareMatrix, TOLERANCE};

/// The observables the device can measure expectation values against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservableKind {
    PauliX,
    PauliY,
    PauliZ,
    Hadamard,
    Identity,
    /// An arbitrary caller-supplied Hermitian matrix
    Hermitian,
}

impl ObservableKind {
    /// All supported observable names
    pub const NAMES: [&'static str; 6] = [
        "PauliX",
        "PauliY",
        "PauliZ",
        "Hadamard",
        "Identity",
        "Hermitian",
    ];

    /// Look up an observable by name
    ///
    /// # Errors
    /// Returns [`DeviceError::UnsupportedOperation`] for unknown names.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "PauliX" => Ok(Self::PauliX),
            "PauliY" => Ok(Self::PauliY),
            "PauliZ" => Ok(Self::PauliZ),
            "Hadamard" => Ok(Self::Hadamard),
            "Identity" => Ok(Self::Identity),
            "Hermitian" => Ok(Self::Hermitian),
            _ => Err(DeviceError::UnsupportedOperation(name.to_string())),
        }
    }

    /// The fixed matrix of this observable, or `None` for the
    /// caller-supplied Hermitian case
    pub fn fixed_matrix(&self) -> Option<SquareMatrix> {
        match self {
            Self::PauliX => Some(SquareMatrix::from(&matrices::PAULI_X)),
            Self::PauliY => Some(SquareMatrix::from(&matrices::PAULI_Y)),
            Self::PauliZ => Some(SquareMatrix::from(&matrices::PAULI_Z)),
            Self::Hadamard => Some(SquareMatrix::from(&matrices::HADAMARD)),
            Self::Identity => Some(SquareMatrix::from(&matrices::IDENTITY)),
            Self::Hermitian => None,
        }
    }

    /// Resolve this observable to a concrete matrix
    ///
    /// For [`ObservableKind::Hermitian`] the caller-supplied rows are
    /// validated with [`hermitian`]; the fixed observables ignore
    /// `supplied`.
    pub fn resolve(&self, supplied: Option<&[Vec<Complex64>]>) -> Result<SquareMatrix> {
        match self.fixed_matrix() {
            Some(matrix) => Ok(matrix),
            None => {
                let rows = supplied.ok_or_else(|| {
                    DeviceError::Validation("Hermitian observable requires a matrix".into())
                })?;
                hermitian(rows)
            }
        }
    }
}

/// Validate an arbitrary Hermitian expectation matrix
///
/// # Errors
/// Returns [`DeviceError::Validation`] if the rows do not form a square
/// matrix or the matrix is not equal to its own conjugate transpose within
/// numerical tolerance. A valid matrix is returned unchanged.
///
/// # Example
/// ```
/// use num_complex::Complex64;
/// use qudev_gates::hermitian;
///
/// let z = vec![
///     vec![Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
///     vec![Complex64::new(0.0, 0.0), Complex64::new(-1.0, 0.0)],
/// ];
/// assert!(hermitian(&z).is_ok());
/// ```
pub fn hermitian(rows: &[Vec<Complex64>]) -> Result<SquareMatrix> {
    let dim = rows.len();
    if dim == 0 || rows.iter().any(|row| row.len() != dim) {
        return Err(DeviceError::Validation(
            "expectation must be a square matrix".into(),
        ));
    }

    let matrix = SquareMatrix::from_rows(rows)?;
    if !matrix.is_hermitian(TOLERANCE) {
        return Err(DeviceError::Validation(
            "expectation must be Hermitian".into(),
        ));
    }

    Ok(matrix)
}
