//! Translation of caller operations into engine gate applications
//!
//! Each operation is processed strictly in order: its wire list is
//! converted to the engine convention, its name is resolved against the
//! dispatch table, its parameters are validated, and the resulting gate
//! representation is applied against the state container (which records
//! it in the circuit log). A failure aborts the remaining sequence;
//! operations already applied stay applied.

use crate::dispatch::{GateDispatch, NativeGate, OperationKind};
use qudev_core::{
    reverse_amplitudes, DeviceError, EngineWires, Operation, Result, TOLERANCE,
};
use qudev_state::{GateRepresentation, PrimitiveGate, StateContainer};

/// Convert a caller rotation angle to the engine's sign convention
///
/// The caller's rotations are exp(-i·theta/2 · P) while the engine's
/// native rotations are exp(+i·angle/2 · P); negating once at this
/// boundary keeps both sides internally consistent.
#[inline]
pub(crate) fn to_engine_rotation_sign(angle: f64) -> f64 {
    -angle
}

/// Translate and apply one operation
pub(crate) fn apply_operation(container: &mut StateContainer, operation: &Operation) -> Result<()> {
    let kind = OperationKind::from_name(operation.name())?;
    check_arity(kind, operation)?;

    let wires = operation.wires().to_engine();

    match kind.dispatch() {
        GateDispatch::StateVector => load_state_vector(container, operation),
        GateDispatch::BasisState => load_basis_state(container, operation),
        GateDispatch::ArbitraryUnitary => apply_arbitrary_unitary(container, operation, wires),
        GateDispatch::CompositeRotation => apply_composite_rotation(container, operation, wires),
        GateDispatch::StaticMatrix(matrix) => container.apply(GateRepresentation::Dense {
            wires,
            matrix: matrix(),
        }),
        GateDispatch::ParametricMatrix(generator) => {
            // The generator takes the caller's angle unchanged; only
            // native rotations go through the sign conversion
            let theta = value_params(kind, operation)?[0];
            container.apply(GateRepresentation::Dense {
                wires,
                matrix: generator(theta),
            })
        }
        GateDispatch::Native(native) => apply_native(container, kind, operation, native, wires),
    }
}

fn check_arity(kind: OperationKind, operation: &Operation) -> Result<()> {
    if let Some(expected) = kind.wire_arity() {
        let actual = operation.wires().len();
        if actual != expected {
            return Err(DeviceError::wire_count(kind.name(), expected, actual));
        }
    }
    Ok(())
}

/// The real-valued parameters of a gate, with their count validated
fn value_params<'a>(kind: OperationKind, operation: &'a Operation) -> Result<&'a [f64]> {
    let values = operation
        .params()
        .values()
        .ok_or_else(|| DeviceError::parameter_kind(kind.name(), "a list of real parameters"))?;

    let expected = kind.parameter_arity();
    if values.len() != expected {
        return Err(DeviceError::parameter_count(
            kind.name(),
            expected,
            values.len(),
        ));
    }
    Ok(values)
}

/// Reject a state-loading operation once anything has been applied
fn check_first(container: &StateContainer, operation: &Operation) -> Result<()> {
    if !container.is_pristine() {
        return Err(DeviceError::sequencing(operation.name()));
    }
    Ok(())
}

/// State loading addresses the whole register
fn check_full_register(container: &StateContainer, operation: &Operation) -> Result<()> {
    let actual = operation.wires().len();
    let expected = container.num_wires();
    if actual != expected {
        return Err(DeviceError::wire_count(operation.name(), expected, actual));
    }
    Ok(())
}

fn load_state_vector(container: &mut StateContainer, operation: &Operation) -> Result<()> {
    check_first(container, operation)?;
    check_full_register(container, operation)?;

    let amplitudes = operation
        .params()
        .amplitudes()
        .ok_or_else(|| DeviceError::parameter_kind(operation.name(), "an amplitude vector"))?;

    let expected = 1usize << operation.wires().len();
    if amplitudes.len() != expected {
        return Err(DeviceError::Length {
            expected,
            actual: amplitudes.len(),
        });
    }

    let norm_sqr: f64 = amplitudes.iter().map(|a| a.norm_sqr()).sum();
    if (norm_sqr - 1.0).abs() > TOLERANCE {
        return Err(DeviceError::Normalization { norm_sqr });
    }

    // Translate the amplitude ordering from caller to engine convention
    let reordered = reverse_amplitudes(amplitudes)?;
    container.load_amplitudes(&reordered)
}

fn load_basis_state(container: &mut StateContainer, operation: &Operation) -> Result<()> {
    check_first(container, operation)?;
    check_full_register(container, operation)?;

    let bits = operation
        .params()
        .values()
        .ok_or_else(|| DeviceError::parameter_kind(operation.name(), "a list of basis bits"))?;

    for &bit in bits {
        if bit != 0.0 && bit != 1.0 {
            return Err(DeviceError::Domain { value: bit });
        }
    }
    if bits.len() != operation.wires().len() {
        return Err(DeviceError::Length {
            expected: operation.wires().len(),
            actual: bits.len(),
        });
    }

    // Reverse the bit order, then pack big-endian into the engine index
    let mut index = 0usize;
    for &bit in bits.iter().rev() {
        index = (index << 1) | (bit as usize);
    }
    container.load_basis_index(index)
}

fn apply_arbitrary_unitary(
    container: &mut StateContainer,
    operation: &Operation,
    wires: EngineWires,
) -> Result<()> {
    let matrix = operation
        .params()
        .matrix()
        .ok_or_else(|| DeviceError::parameter_kind(operation.name(), "a unitary matrix"))?;

    let expected = 1usize << wires.len();
    if matrix.dim() != expected {
        return Err(DeviceError::Shape {
            expected,
            actual: matrix.dim(),
        });
    }

    container.apply(GateRepresentation::Dense {
        wires,
        matrix: matrix.clone(),
    })
}

/// Expand a ZYZ rotation into three primitive applications
fn apply_composite_rotation(
    container: &mut StateContainer,
    operation: &Operation,
    wires: EngineWires,
) -> Result<()> {
    let params = value_params(OperationKind::Rot, operation)?;
    let target = wires.as_slice()[0];

    let phi = to_engine_rotation_sign(params[0]);
    let theta = to_engine_rotation_sign(params[1]);
    let omega = to_engine_rotation_sign(params[2]);

    container.apply(GateRepresentation::Composite(vec![
        PrimitiveGate::RotationZ { target, angle: phi },
        PrimitiveGate::RotationY {
            target,
            angle: theta,
        },
        PrimitiveGate::RotationZ {
            target,
            angle: omega,
        },
    ]))
}

fn apply_native(
    container: &mut StateContainer,
    kind: OperationKind,
    operation: &Operation,
    native: NativeGate,
    wires: EngineWires,
) -> Result<()> {
    let params = value_params(kind, operation)?;
    let w = wires.as_slice();

    let gate = match native {
        NativeGate::PauliX => PrimitiveGate::PauliX { target: w[0] },
        NativeGate::PauliY => PrimitiveGate::PauliY { target: w[0] },
        NativeGate::PauliZ => PrimitiveGate::PauliZ { target: w[0] },
        NativeGate::Hadamard => PrimitiveGate::Hadamard { target: w[0] },
        NativeGate::SGate => PrimitiveGate::SGate { target: w[0] },
        NativeGate::SGateDagger => PrimitiveGate::SGateDagger { target: w[0] },
        NativeGate::TGate => PrimitiveGate::TGate { target: w[0] },
        NativeGate::TGateDagger => PrimitiveGate::TGateDagger { target: w[0] },
        NativeGate::RotationX => PrimitiveGate::RotationX {
            target: w[0],
            angle: to_engine_rotation_sign(params[0]),
        },
        NativeGate::RotationY => PrimitiveGate::RotationY {
            target: w[0],
            angle: to_engine_rotation_sign(params[0]),
        },
        NativeGate::RotationZ => PrimitiveGate::RotationZ {
            target: w[0],
            angle: to_engine_rotation_sign(params[0]),
        },
        // The reversed wire list puts the caller's target first
        NativeGate::ControlledNot => PrimitiveGate::ControlledNot {
            target: w[0],
            control: w[1],
        },
        NativeGate::ControlledZ => PrimitiveGate::ControlledZ { a: w[0], b: w[1] },
        NativeGate::Swap => PrimitiveGate::Swap { a: w[0], b: w[1] },
    };

    container.apply(GateRepresentation::Primitive(gate))
}
