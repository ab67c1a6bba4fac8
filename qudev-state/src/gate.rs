//! Gate vocabulary at the engine boundary

use qudev_core::{EngineWires, SquareMatrix};
use smallvec::SmallVec;

/// A native primitive gate the engine applies directly
///
/// Wire fields are engine wire indices. Rotation angles follow the
/// engine's sign convention, `exp(+i·angle/2 · P)`; the operation
/// translator converts from the caller's convention at the boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveGate {
    PauliX { target: usize },
    PauliY { target: usize },
    PauliZ { target: usize },
    Hadamard { target: usize },
    SGate { target: usize },
    SGateDagger { target: usize },
    TGate { target: usize },
    TGateDagger { target: usize },
    RotationX { target: usize, angle: f64 },
    RotationY { target: usize, angle: f64 },
    RotationZ { target: usize, angle: f64 },
    ControlledNot { control: usize, target: usize },
    ControlledZ { a: usize, b: usize },
    Swap { a: usize, b: usize },
}

impl PrimitiveGate {
    /// The gate name
    pub fn name(&self) -> &'static str {
        match self {
            Self::PauliX { .. } => "X",
            Self::PauliY { .. } => "Y",
            Self::PauliZ { .. } => "Z",
            Self::Hadamard { .. } => "H",
            Self::SGate { .. } => "S",
            Self::SGateDagger { .. } => "Sdag",
            Self::TGate { .. } => "T",
            Self::TGateDagger { .. } => "Tdag",
            Self::RotationX { .. } => "RX",
            Self::RotationY { .. } => "RY",
            Self::RotationZ { .. } => "RZ",
            Self::ControlledNot { .. } => "CNOT",
            Self::ControlledZ { .. } => "CZ",
            Self::Swap { .. } => "SWAP",
        }
    }

    /// The engine wires this gate touches
    pub fn wires(&self) -> SmallVec<[usize; 2]> {
        match *self {
            Self::PauliX { target }
            | Self::PauliY { target }
            | Self::PauliZ { target }
            | Self::Hadamard { target }
            | Self::SGate { target }
            | Self::SGateDagger { target }
            | Self::TGate { target }
            | Self::TGateDagger { target }
            | Self::RotationX { target, .. }
            | Self::RotationY { target, .. }
            | Self::RotationZ { target, .. } => SmallVec::from_slice(&[target]),
            Self::ControlledNot { control, target } => SmallVec::from_slice(&[control, target]),
            Self::ControlledZ { a, b } | Self::Swap { a, b } => SmallVec::from_slice(&[a, b]),
        }
    }
}

/// A gate resolved by the operation translator
///
/// The container applies a `Primitive` or `Dense` representation as one
/// gate; a `Composite` is an ordered sequence of primitives, applied and
/// logged individually.
#[derive(Debug, Clone, PartialEq)]
pub enum GateRepresentation {
    /// A single native primitive
    Primitive(PrimitiveGate),
    /// An explicit matrix over an ordered engine wire subset
    Dense {
        wires: EngineWires,
        matrix: SquareMatrix,
    },
    /// An ordered sequence of primitive applications
    Composite(Vec<PrimitiveGate>),
}
