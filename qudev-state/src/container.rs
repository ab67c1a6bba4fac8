//! Ownership of the state vector and the circuit log

use crate::engine::{DenseEngine, StateEngine};
use crate::gate::{GateRepresentation, PrimitiveGate};
use num_complex::Complex64;
use qudev_core::{DeviceError, Result, SquareMatrix};

/// Append-only record of the gates actually applied to the state
///
/// A composite gate appears as its individual primitives, mirroring the
/// applications that really happened. The log is for inspection and
/// debugging; simulation results do not depend on it.
#[derive(Debug, Default)]
pub struct CircuitLog {
    gates: Vec<GateRepresentation>,
}

impl CircuitLog {
    fn push(&mut self, gate: GateRepresentation) {
        self.gates.push(gate);
    }

    fn clear(&mut self) {
        self.gates.clear();
    }

    /// The applied gates, in application order
    pub fn as_slice(&self) -> &[GateRepresentation] {
        &self.gates
    }

    /// Number of applied gates
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Whether no gate has been applied
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }
}

/// Exclusive owner of one simulation session's state
///
/// Wraps the engine behind its contract and keeps the [`CircuitLog`] in
/// sync with the state vector: every gate application is recorded, and
/// reset clears both together. The wire count is fixed at construction.
#[derive(Debug)]
pub struct StateContainer {
    engine: Box<dyn StateEngine>,
    log: CircuitLog,
    pristine: bool,
}

impl StateContainer {
    /// Create a container backed by the bundled [`DenseEngine`]
    pub fn new(num_wires: usize) -> Result<Self> {
        Ok(Self::with_engine(Box::new(DenseEngine::new(num_wires)?)))
    }

    /// Create a container backed by a caller-supplied engine
    pub fn with_engine(engine: Box<dyn StateEngine>) -> Self {
        Self {
            engine,
            log: CircuitLog::default(),
            pristine: true,
        }
    }

    /// Number of wires
    pub fn num_wires(&self) -> usize {
        self.engine.num_wires()
    }

    /// Whether nothing has been loaded or applied since construction or
    /// the last reset
    pub fn is_pristine(&self) -> bool {
        self.pristine
    }

    /// Restore the zero state and clear the circuit log
    pub fn reset(&mut self) {
        self.engine.set_zero_state();
        self.log.clear();
        self.pristine = true;
    }

    /// Replace the state with the supplied engine-order amplitudes
    pub fn load_amplitudes(&mut self, amplitudes: &[Complex64]) -> Result<()> {
        self.engine.load_amplitudes(amplitudes)?;
        self.pristine = false;
        Ok(())
    }

    /// Load a computational basis state by engine-order index
    pub fn load_basis_index(&mut self, index: usize) -> Result<()> {
        self.engine.load_basis_index(index)?;
        self.pristine = false;
        Ok(())
    }

    /// Apply a resolved gate representation and record it
    ///
    /// A `Composite` is applied primitive by primitive, each logged
    /// individually.
    ///
    /// # Errors
    /// A `Dense` representation whose matrix dimension is not
    /// 2^(number of wires) fails with [`DeviceError::Shape`].
    pub fn apply(&mut self, gate: GateRepresentation) -> Result<()> {
        match gate {
            GateRepresentation::Primitive(primitive) => self.apply_primitive(primitive),
            GateRepresentation::Dense { wires, matrix } => {
                let expected = 1usize << wires.len();
                if matrix.dim() != expected {
                    return Err(DeviceError::Shape {
                        expected,
                        actual: matrix.dim(),
                    });
                }
                self.apply_dense(wires, matrix)
            }
            GateRepresentation::Composite(primitives) => {
                for primitive in primitives {
                    self.apply_primitive(primitive)?;
                }
                Ok(())
            }
        }
    }

    fn apply_primitive(&mut self, primitive: PrimitiveGate) -> Result<()> {
        self.engine.apply_primitive(&primitive)?;
        self.pristine = false;
        self.log.push(GateRepresentation::Primitive(primitive));
        Ok(())
    }

    fn apply_dense(&mut self, wires: qudev_core::EngineWires, matrix: SquareMatrix) -> Result<()> {
        self.engine.apply_dense(wires.as_slice(), &matrix)?;
        self.pristine = false;
        self.log.push(GateRepresentation::Dense { wires, matrix });
        Ok(())
    }

    /// The full amplitude vector in engine ordering
    pub fn vector(&self) -> Vec<Complex64> {
        self.engine.vector()
    }

    /// The gates applied since construction or the last reset
    pub fn applied_gates(&self) -> &[GateRepresentation] {
        self.log.as_slice()
    }
}
