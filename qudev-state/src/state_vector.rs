//! Dense amplitude buffer in the engine's basis ordering

use num_complex::Complex64;
use qudev_core::{DeviceError, Result};

/// Wire counts beyond this would need more than 16 GiB of amplitudes
const MAX_WIRES: usize = 30;

/// A dense quantum state vector
///
/// Holds the 2^N complex amplitudes of an N-wire state in the engine's
/// basis ordering (wire 0 is the least significant bit of the index). The
/// wire count is fixed at construction; no operation changes it.
///
/// # Example
/// ```
/// use qudev_state::StateVector;
///
/// let state = StateVector::new(2).unwrap();
/// assert_eq!(state.dimension(), 4);
/// assert_eq!(state.amplitudes()[0].re, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    num_wires: usize,
    amplitudes: Vec<Complex64>,
}

impl StateVector {
    /// Create a state vector initialized to |0...0>
    ///
    /// # Errors
    /// Returns [`DeviceError::Configuration`] if `num_wires` exceeds the
    /// supported maximum.
    pub fn new(num_wires: usize) -> Result<Self> {
        if num_wires > MAX_WIRES {
            return Err(DeviceError::Configuration(format!(
                "a state vector for {num_wires} wires exceeds the supported maximum of {MAX_WIRES}"
            )));
        }

        let mut state = Self {
            num_wires,
            amplitudes: vec![Complex64::new(0.0, 0.0); 1 << num_wires],
        };
        state.set_zero_state();
        Ok(state)
    }

    /// Number of wires
    #[inline]
    pub fn num_wires(&self) -> usize {
        self.num_wires
    }

    /// State dimension, 2^num_wires
    #[inline]
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// The amplitudes in engine ordering
    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Mutable access to the amplitudes
    #[inline]
    pub fn amplitudes_mut(&mut self) -> &mut [Complex64] {
        &mut self.amplitudes
    }

    /// Reset to the |0...0> state
    pub fn set_zero_state(&mut self) {
        self.amplitudes.fill(Complex64::new(0.0, 0.0));
        self.amplitudes[0] = Complex64::new(1.0, 0.0);
    }

    /// Load the computational basis state with the given index
    ///
    /// # Errors
    /// Returns [`DeviceError::BasisIndexOutOfRange`] if `index` is not a
    /// valid basis index for this dimension.
    pub fn set_basis_index(&mut self, index: usize) -> Result<()> {
        if index >= self.dimension() {
            return Err(DeviceError::BasisIndexOutOfRange {
                index,
                dimension: self.dimension(),
            });
        }

        self.amplitudes.fill(Complex64::new(0.0, 0.0));
        self.amplitudes[index] = Complex64::new(1.0, 0.0);
        Ok(())
    }

    /// Replace the amplitudes with the supplied vector
    ///
    /// # Errors
    /// Returns [`DeviceError::Length`] if the vector does not have exactly
    /// 2^num_wires entries.
    pub fn load(&mut self, amplitudes: &[Complex64]) -> Result<()> {
        if amplitudes.len() != self.dimension() {
            return Err(DeviceError::Length {
                expected: self.dimension(),
                actual: amplitudes.len(),
            });
        }

        self.amplitudes.copy_from_slice(amplitudes);
        Ok(())
    }

    /// Sum of squared amplitude magnitudes
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Whether the squared norm is within `epsilon` of one
    pub fn is_normalized(&self, epsilon: f64) -> bool {
        (self.norm_sqr() - 1.0).abs() < epsilon
    }
}
