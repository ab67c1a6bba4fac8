//! The supported operation set and its dispatch table

use qudev_core::{DeviceError, Result, SquareMatrix};
use qudev_gates::matrices;

/// A supported operation name
///
/// The full, fixed set of operations the translator accepts. Resolving a
/// kind to its [`GateDispatch`] is an exhaustive match, so adding a new
/// name here without wiring up its translation fails to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    QubitStateVector,
    BasisState,
    QubitUnitary,
    Toffoli,
    CSwap,
    CRz,
    Swap,
    CNot,
    CZ,
    SGate,
    SInverse,
    TGate,
    TInverse,
    RotationX,
    RotationY,
    RotationZ,
    Rot,
    PauliX,
    PauliY,
    PauliZ,
    Hadamard,
}

/// How an operation kind translates to a gate application
#[derive(Debug, Clone, Copy)]
pub(crate) enum GateDispatch {
    /// Load a caller-supplied amplitude vector
    StateVector,
    /// Load a computational basis state from bits
    BasisState,
    /// Apply a caller-supplied unitary matrix
    ArbitraryUnitary,
    /// Expand into an ordered sequence of primitive rotations
    CompositeRotation,
    /// Apply a fixed matrix
    StaticMatrix(fn() -> SquareMatrix),
    /// Apply a matrix generated from one angle parameter
    ParametricMatrix(fn(f64) -> SquareMatrix),
    /// Construct a native primitive
    Native(NativeGate),
}

/// Native primitive constructors the engine supports directly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NativeGate {
    PauliX,
    PauliY,
    PauliZ,
    Hadamard,
    SGate,
    SGateDagger,
    TGate,
    TGateDagger,
    RotationX,
    RotationY,
    RotationZ,
    ControlledNot,
    ControlledZ,
    Swap,
}

fn toffoli_matrix() -> SquareMatrix {
    SquareMatrix::from(&matrices::TOFFOLI)
}

fn cswap_matrix() -> SquareMatrix {
    SquareMatrix::from(&matrices::CSWAP)
}

fn crz_matrix(theta: f64) -> SquareMatrix {
    SquareMatrix::from(&matrices::controlled_rz(theta))
}

impl OperationKind {
    /// Every supported operation kind
    pub const ALL: [OperationKind; 21] = [
        Self::QubitStateVector,
        Self::BasisState,
        Self::QubitUnitary,
        Self::Toffoli,
        Self::CSwap,
        Self::CRz,
        Self::Swap,
        Self::CNot,
        Self::CZ,
        Self::SGate,
        Self::SInverse,
        Self::TGate,
        Self::TInverse,
        Self::RotationX,
        Self::RotationY,
        Self::RotationZ,
        Self::Rot,
        Self::PauliX,
        Self::PauliY,
        Self::PauliZ,
        Self::Hadamard,
    ];

    /// Look up an operation by its wire-format name
    ///
    /// # Errors
    /// Returns [`DeviceError::UnsupportedOperation`] for names outside the
    /// supported set; an unknown operation never silently no-ops.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "QubitStateVector" => Ok(Self::QubitStateVector),
            "BasisState" => Ok(Self::BasisState),
            "QubitUnitary" => Ok(Self::QubitUnitary),
            "Toffoli" => Ok(Self::Toffoli),
            "CSWAP" => Ok(Self::CSwap),
            "CRZ" => Ok(Self::CRz),
            "SWAP" => Ok(Self::Swap),
            "CNOT" => Ok(Self::CNot),
            "CZ" => Ok(Self::CZ),
            "S" => Ok(Self::SGate),
            "S.inv" => Ok(Self::SInverse),
            "T" => Ok(Self::TGate),
            "T.inv" => Ok(Self::TInverse),
            "RX" => Ok(Self::RotationX),
            "RY" => Ok(Self::RotationY),
            "RZ" => Ok(Self::RotationZ),
            "Rot" => Ok(Self::Rot),
            "PauliX" => Ok(Self::PauliX),
            "PauliY" => Ok(Self::PauliY),
            "PauliZ" => Ok(Self::PauliZ),
            "Hadamard" => Ok(Self::Hadamard),
            _ => Err(DeviceError::UnsupportedOperation(name.to_string())),
        }
    }

    /// The wire-format name
    pub fn name(&self) -> &'static str {
        match self {
            Self::QubitStateVector => "QubitStateVector",
            Self::BasisState => "BasisState",
            Self::QubitUnitary => "QubitUnitary",
            Self::Toffoli => "Toffoli",
            Self::CSwap => "CSWAP",
            Self::CRz => "CRZ",
            Self::Swap => "SWAP",
            Self::CNot => "CNOT",
            Self::CZ => "CZ",
            Self::SGate => "S",
            Self::SInverse => "S.inv",
            Self::TGate => "T",
            Self::TInverse => "T.inv",
            Self::RotationX => "RX",
            Self::RotationY => "RY",
            Self::RotationZ => "RZ",
            Self::Rot => "Rot",
            Self::PauliX => "PauliX",
            Self::PauliY => "PauliY",
            Self::PauliZ => "PauliZ",
            Self::Hadamard => "Hadamard",
        }
    }

    /// Resolve the translation branch for this kind
    pub(crate) fn dispatch(&self) -> GateDispatch {
        match self {
            Self::QubitStateVector => GateDispatch::StateVector,
            Self::BasisState => GateDispatch::BasisState,
            Self::QubitUnitary => GateDispatch::ArbitraryUnitary,
            Self::Rot => GateDispatch::CompositeRotation,
            Self::Toffoli => GateDispatch::StaticMatrix(toffoli_matrix),
            Self::CSwap => GateDispatch::StaticMatrix(cswap_matrix),
            Self::CRz => GateDispatch::ParametricMatrix(crz_matrix),
            Self::PauliX => GateDispatch::Native(NativeGate::PauliX),
            Self::PauliY => GateDispatch::Native(NativeGate::PauliY),
            Self::PauliZ => GateDispatch::Native(NativeGate::PauliZ),
            Self::Hadamard => GateDispatch::Native(NativeGate::Hadamard),
            Self::SGate => GateDispatch::Native(NativeGate::SGate),
            Self::SInverse => GateDispatch::Native(NativeGate::SGateDagger),
            Self::TGate => GateDispatch::Native(NativeGate::TGate),
            Self::TInverse => GateDispatch::Native(NativeGate::TGateDagger),
            Self::RotationX => GateDispatch::Native(NativeGate::RotationX),
            Self::RotationY => GateDispatch::Native(NativeGate::RotationY),
            Self::RotationZ => GateDispatch::Native(NativeGate::RotationZ),
            Self::CNot => GateDispatch::Native(NativeGate::ControlledNot),
            Self::CZ => GateDispatch::Native(NativeGate::ControlledZ),
            Self::Swap => GateDispatch::Native(NativeGate::Swap),
        }
    }

    /// Required wire count, or `None` when the operation sizes itself to
    /// its wire list (state loading, arbitrary unitary)
    pub(crate) fn wire_arity(&self) -> Option<usize> {
        match self {
            Self::QubitStateVector | Self::BasisState | Self::QubitUnitary => None,
            Self::Toffoli | Self::CSwap => Some(3),
            Self::CRz | Self::Swap | Self::CNot | Self::CZ => Some(2),
            _ => Some(1),
        }
    }

    /// Required number of real parameters for value-parameterized kinds
    pub(crate) fn parameter_arity(&self) -> usize {
        match self {
            Self::CRz | Self::RotationX | Self::RotationY | Self::RotationZ => 1,
            Self::Rot => 3,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for kind in OperationKind::ALL {
            assert_eq!(OperationKind::from_name(kind.name()).unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_name_rejected() {
        let err = OperationKind::from_name("PhaseShift").unwrap_err();
        assert_eq!(
            err,
            DeviceError::UnsupportedOperation("PhaseShift".to_string())
        );
    }

    #[test]
    fn test_arities() {
        assert_eq!(OperationKind::Toffoli.wire_arity(), Some(3));
        assert_eq!(OperationKind::CNot.wire_arity(), Some(2));
        assert_eq!(OperationKind::Hadamard.wire_arity(), Some(1));
        assert_eq!(OperationKind::QubitUnitary.wire_arity(), None);

        assert_eq!(OperationKind::Rot.parameter_arity(), 3);
        assert_eq!(OperationKind::CRz.parameter_arity(), 1);
        assert_eq!(OperationKind::PauliZ.parameter_arity(), 0);
    }
}
