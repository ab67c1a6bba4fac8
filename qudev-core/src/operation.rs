//! Operations supplied by the calling framework

use crate::matrix::SquareMatrix;
use crate::wires::CallerWires;
use crate::Result;
use num_complex::Complex64;
use std::fmt;

/// Parameter payload of an [`Operation`]
///
/// Most gates carry a (possibly empty) list of real parameters; the two
/// state-loading operations carry an amplitude vector, and the arbitrary
/// unitary carries an explicit matrix.
#[derive(Debug, Clone, PartialEq)]
pub enum Parameters {
    /// Rotation angles or basis-state bits
    Values(Vec<f64>),
    /// Amplitude vector for a state-vector load
    Amplitudes(Vec<Complex64>),
    /// Explicit unitary matrix
    Matrix(SquareMatrix),
}

impl Parameters {
    /// The real-valued parameter list, if this payload carries one
    pub fn values(&self) -> Option<&[f64]> {
        match self {
            Parameters::Values(values) => Some(values),
            _ => None,
        }
    }

    /// The amplitude vector, if this payload carries one
    pub fn amplitudes(&self) -> Option<&[Complex64]> {
        match self {
            Parameters::Amplitudes(amplitudes) => Some(amplitudes),
            _ => None,
        }
    }

    /// The matrix, if this payload carries one
    pub fn matrix(&self) -> Option<&SquareMatrix> {
        match self {
            Parameters::Matrix(matrix) => Some(matrix),
            _ => None,
        }
    }
}

/// A single operation in an apply sequence
///
/// Immutable once constructed. Wires are given in the caller's convention
/// and must be unique; the operation name is resolved against the
/// supported-operation set at translation time, not here.
///
/// # Example
/// ```
/// use qudev_core::Operation;
///
/// let h = Operation::gate("Hadamard", [0], vec![]).unwrap();
/// let cnot = Operation::gate("CNOT", [0, 1], vec![]).unwrap();
/// assert_eq!(cnot.wires().len(), 2);
/// assert_eq!(h.params().values(), Some(&[][..]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    name: String,
    wires: CallerWires,
    params: Parameters,
}

impl Operation {
    /// Create a gate operation with real-valued parameters
    ///
    /// # Errors
    /// Returns an error if the wire list contains duplicates.
    pub fn gate(
        name: impl Into<String>,
        wires: impl IntoIterator<Item = usize>,
        params: Vec<f64>,
    ) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            wires: CallerWires::new(wires)?,
            params: Parameters::Values(params),
        })
    }

    /// Create a `QubitStateVector` state-loading operation
    pub fn state_vector(
        wires: impl IntoIterator<Item = usize>,
        amplitudes: Vec<Complex64>,
    ) -> Result<Self> {
        Ok(Self {
            name: "QubitStateVector".into(),
            wires: CallerWires::new(wires)?,
            params: Parameters::Amplitudes(amplitudes),
        })
    }

    /// Create a `BasisState` state-loading operation
    pub fn basis_state(wires: impl IntoIterator<Item = usize>, bits: Vec<f64>) -> Result<Self> {
        Ok(Self {
            name: "BasisState".into(),
            wires: CallerWires::new(wires)?,
            params: Parameters::Values(bits),
        })
    }

    /// Create a `QubitUnitary` operation with an explicit matrix
    pub fn unitary(wires: impl IntoIterator<Item = usize>, matrix: SquareMatrix) -> Result<Self> {
        Ok(Self {
            name: "QubitUnitary".into(),
            wires: CallerWires::new(wires)?,
            params: Parameters::Matrix(matrix),
        })
    }

    /// The operation name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The target wires in caller convention
    #[inline]
    pub fn wires(&self) -> &CallerWires {
        &self.wires
    }

    /// The parameter payload
    #[inline]
    pub fn params(&self) -> &Parameters {
        &self.params
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, wire) in self.wires.as_slice().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "q{}", wire)?;
        }
        write!(f, ")")
    }
}
