//! Fixed gate matrices and parametric generators
//!
//! The constant tables are computed at compile time and treated as
//! process-wide immutable data. Matrix entries follow the caller's basis
//! convention (first wire = most significant bit); the operation
//! translator reverses gate wire lists before binding, and the engine
//! binds the first supplied wire to the least significant matrix bit, so
//! these tables apply with caller semantics without further permutation.

use num_complex::Complex64;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);
const NEG_I: Complex64 = Complex64::new(0.0, -1.0);
const NEG_ONE: Complex64 = Complex64::new(-1.0, 0.0);

const INV_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;

// ============================================================================
// Single-qubit constants
// ============================================================================

/// Identity
pub const IDENTITY: [[Complex64; 2]; 2] = [[ONE, ZERO], [ZERO, ONE]];

/// Pauli-X (bit flip)
pub const PAULI_X: [[Complex64; 2]; 2] = [[ZERO, ONE], [ONE, ZERO]];

/// Pauli-Y
pub const PAULI_Y: [[Complex64; 2]; 2] = [[ZERO, NEG_I], [I, ZERO]];

/// Pauli-Z (phase flip)
pub const PAULI_Z: [[Complex64; 2]; 2] = [[ONE, ZERO], [ZERO, NEG_ONE]];

/// Hadamard
pub const HADAMARD: [[Complex64; 2]; 2] = [
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(INV_SQRT2, 0.0),
    ],
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(-INV_SQRT2, 0.0),
    ],
];

/// S gate (phase gate)
pub const S_GATE: [[Complex64; 2]; 2] = [[ONE, ZERO], [ZERO, I]];

/// S† gate
pub const S_GATE_DAGGER: [[Complex64; 2]; 2] = [[ONE, ZERO], [ZERO, NEG_I]];

/// T gate, phase e^(i*pi/4) on |1>
pub const T_GATE: [[Complex64; 2]; 2] = [
    [ONE, ZERO],
    [ZERO, Complex64::new(INV_SQRT2, INV_SQRT2)],
];

/// T† gate
pub const T_GATE_DAGGER: [[Complex64; 2]; 2] = [
    [ONE, ZERO],
    [ZERO, Complex64::new(INV_SQRT2, -INV_SQRT2)],
];

// ============================================================================
// Multi-qubit constants
// ============================================================================

/// SWAP gate
pub const SWAP: [[Complex64; 4]; 4] = [
    [ONE, ZERO, ZERO, ZERO],
    [ZERO, ZERO, ONE, ZERO],
    [ZERO, ONE, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ONE],
];

/// Toffoli gate, the 8x8 permutation flipping the third wire when the
/// first two are |1>
pub const TOFFOLI: [[Complex64; 8]; 8] = [
    [ONE, ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, ZERO],
    [ZERO, ONE, ZERO, ZERO, ZERO, ZERO, ZERO, ZERO],
    [ZERO, ZERO, ONE, ZERO, ZERO, ZERO, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ONE, ZERO, ZERO, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ZERO, ONE, ZERO, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ZERO, ZERO, ONE, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, ONE],
    [ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, ONE, ZERO],
];

/// CSWAP gate, swapping the last two wires when the first is |1>
pub const CSWAP: [[Complex64; 8]; 8] = [
    [ONE, ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, ZERO],
    [ZERO, ONE, ZERO, ZERO, ZERO, ZERO, ZERO, ZERO],
    [ZERO, ZERO, ONE, ZERO, ZERO, ZERO, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ONE, ZERO, ZERO, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ZERO, ONE, ZERO, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, ONE, ZERO],
    [ZERO, ZERO, ZERO, ZERO, ZERO, ONE, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, ONE],
];

// ============================================================================
// Parametric generators
// ============================================================================

/// Rotation about the X axis
///
/// RX(θ) = cos(θ/2)·I − i·sin(θ/2)·X
#[inline]
pub fn rotation_x(theta: f64) -> [[Complex64; 2]; 2] {
    let half = theta / 2.0;
    let cos = Complex64::new(half.cos(), 0.0);
    let sin = Complex64::new(0.0, -half.sin());

    [[cos, sin], [sin, cos]]
}

/// Rotation about the Y axis
///
/// RY(θ) = cos(θ/2)·I − i·sin(θ/2)·Y
#[inline]
pub fn rotation_y(theta: f64) -> [[Complex64; 2]; 2] {
    let half = theta / 2.0;
    let cos = Complex64::new(half.cos(), 0.0);
    let sin = Complex64::new(half.sin(), 0.0);

    [[cos, -sin], [sin, cos]]
}

/// Rotation about the Z axis
///
/// RZ(θ) = cos(θ/2)·I − i·sin(θ/2)·Z
#[inline]
pub fn rotation_z(theta: f64) -> [[Complex64; 2]; 2] {
    let half = theta / 2.0;

    [
        [Complex64::new(half.cos(), -half.sin()), ZERO],
        [ZERO, Complex64::new(half.cos(), half.sin())],
    ]
}

/// Controlled rotation about the Z axis
///
/// Diagonal with phases e^(∓iθ/2) on the two highest basis states, the
/// states where the control wire is |1>.
#[inline]
pub fn controlled_rz(theta: f64) -> [[Complex64; 4]; 4] {
    let half = theta / 2.0;
    let lower = Complex64::new(half.cos(), -half.sin());
    let raise = Complex64::new(half.cos(), half.sin());

    [
        [ONE, ZERO, ZERO, ZERO],
        [ZERO, ONE, ZERO, ZERO],
        [ZERO, ZERO, lower, ZERO],
        [ZERO, ZERO, ZERO, raise],
    ]
}
