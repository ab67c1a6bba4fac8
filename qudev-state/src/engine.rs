//! The simulation engine contract and the bundled dense implementation

use crate::gate::PrimitiveGate;
use crate::kernels;
use crate::state_vector::StateVector;
use num_complex::Complex64;
use qudev_core::{DeviceError, Result, SquareMatrix};
use qudev_gates::matrices;
use std::fmt;

/// Contract the underlying amplitude engine must satisfy
///
/// An engine owns the amplitude buffer of a fixed number of wires and
/// mutates it in place. Basis indices and amplitude vectors use the
/// engine's ordering (wire 0 = least significant bit). For
/// [`apply_dense`](StateEngine::apply_dense), the first wire of the
/// supplied list binds to the least significant bit of the matrix basis
/// index; arbitrary, non-contiguous wire orders must be supported.
pub trait StateEngine: fmt::Debug + Send {
    /// Number of wires, fixed at construction
    fn num_wires(&self) -> usize;

    /// Reset to |0...0>
    fn set_zero_state(&mut self);

    /// Replace the state with the supplied engine-order amplitudes
    fn load_amplitudes(&mut self, amplitudes: &[Complex64]) -> Result<()>;

    /// Load a computational basis state by engine-order index
    fn load_basis_index(&mut self, index: usize) -> Result<()>;

    /// Apply a native primitive gate
    fn apply_primitive(&mut self, gate: &PrimitiveGate) -> Result<()>;

    /// Apply a dense matrix over an ordered wire subset
    fn apply_dense(&mut self, wires: &[usize], matrix: &SquareMatrix) -> Result<()>;

    /// The full amplitude vector in engine ordering
    fn vector(&self) -> Vec<Complex64>;
}

/// The bundled dense state-vector engine
///
/// # Example
/// ```
/// use qudev_state::{DenseEngine, PrimitiveGate, StateEngine};
///
/// let mut engine = DenseEngine::new(1).unwrap();
/// engine
///     .apply_primitive(&PrimitiveGate::Hadamard { target: 0 })
///     .unwrap();
/// assert!((engine.vector()[0].re - engine.vector()[1].re).abs() < 1e-10);
/// ```
#[derive(Debug)]
pub struct DenseEngine {
    state: StateVector,
}

impl DenseEngine {
    /// Create an engine of `num_wires` wires in the zero state
    pub fn new(num_wires: usize) -> Result<Self> {
        Ok(Self {
            state: StateVector::new(num_wires)?,
        })
    }

    fn check_wire(&self, wire: usize) -> Result<()> {
        if wire >= self.state.num_wires() {
            return Err(DeviceError::InvalidWire {
                wire,
                num_wires: self.state.num_wires(),
            });
        }
        Ok(())
    }

    fn check_wires(&self, wires: &[usize]) -> Result<()> {
        for (i, &wire) in wires.iter().enumerate() {
            self.check_wire(wire)?;
            if wires[..i].contains(&wire) {
                return Err(DeviceError::DuplicateWire(wire));
            }
        }
        Ok(())
    }

    fn apply_one_wire(&mut self, matrix: &[[Complex64; 2]; 2], target: usize) -> Result<()> {
        self.check_wire(target)?;
        let num_wires = self.state.num_wires();
        kernels::apply_single_qubit(self.state.amplitudes_mut(), matrix, target, num_wires);
        Ok(())
    }
}

impl StateEngine for DenseEngine {
    fn num_wires(&self) -> usize {
        self.state.num_wires()
    }

    fn set_zero_state(&mut self) {
        self.state.set_zero_state();
    }

    fn load_amplitudes(&mut self, amplitudes: &[Complex64]) -> Result<()> {
        self.state.load(amplitudes)
    }

    fn load_basis_index(&mut self, index: usize) -> Result<()> {
        self.state.set_basis_index(index)
    }

    fn apply_primitive(&mut self, gate: &PrimitiveGate) -> Result<()> {
        match *gate {
            PrimitiveGate::PauliX { target } => self.apply_one_wire(&matrices::PAULI_X, target),
            PrimitiveGate::PauliY { target } => self.apply_one_wire(&matrices::PAULI_Y, target),
            PrimitiveGate::PauliZ { target } => self.apply_one_wire(&matrices::PAULI_Z, target),
            PrimitiveGate::Hadamard { target } => self.apply_one_wire(&matrices::HADAMARD, target),
            PrimitiveGate::SGate { target } => self.apply_one_wire(&matrices::S_GATE, target),
            PrimitiveGate::SGateDagger { target } => {
                self.apply_one_wire(&matrices::S_GATE_DAGGER, target)
            }
            PrimitiveGate::TGate { target } => self.apply_one_wire(&matrices::T_GATE, target),
            PrimitiveGate::TGateDagger { target } => {
                self.apply_one_wire(&matrices::T_GATE_DAGGER, target)
            }
            // The engine's rotation convention is exp(+i·angle/2 · P);
            // the library generators are exp(-i·theta/2 · P)
            PrimitiveGate::RotationX { target, angle } => {
                self.apply_one_wire(&matrices::rotation_x(-angle), target)
            }
            PrimitiveGate::RotationY { target, angle } => {
                self.apply_one_wire(&matrices::rotation_y(-angle), target)
            }
            PrimitiveGate::RotationZ { target, angle } => {
                self.apply_one_wire(&matrices::rotation_z(-angle), target)
            }
            PrimitiveGate::ControlledNot { control, target } => {
                self.check_wires(&[control, target])?;
                let num_wires = self.state.num_wires();
                kernels::apply_controlled_not(
                    self.state.amplitudes_mut(),
                    control,
                    target,
                    num_wires,
                );
                Ok(())
            }
            PrimitiveGate::ControlledZ { a, b } => {
                self.check_wires(&[a, b])?;
                let num_wires = self.state.num_wires();
                kernels::apply_controlled_z(self.state.amplitudes_mut(), a, b, num_wires);
                Ok(())
            }
            PrimitiveGate::Swap { a, b } => {
                self.check_wires(&[a, b])?;
                let num_wires = self.state.num_wires();
                kernels::apply_swap(self.state.amplitudes_mut(), a, b, num_wires);
                Ok(())
            }
        }
    }

    fn apply_dense(&mut self, wires: &[usize], matrix: &SquareMatrix) -> Result<()> {
        self.check_wires(wires)?;

        let expected = 1usize << wires.len();
        if matrix.dim() != expected {
            return Err(DeviceError::Shape {
                expected,
                actual: matrix.dim(),
            });
        }

        let num_wires = self.state.num_wires();
        kernels::apply_dense(self.state.amplitudes_mut(), wires, matrix, num_wires);
        Ok(())
    }

    fn vector(&self) -> Vec<Complex64> {
        self.state.amplitudes().to_vec()
    }
}
