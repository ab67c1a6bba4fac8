//! Gate matrix library for the qudev quantum device
//!
//! Pure, stateless matrix definitions used by the operation translator and
//! the bundled dense engine:
//!
//! - Fixed gate constants (Pauli family, Hadamard, phase family, SWAP, and
//!   the three-wire Toffoli and CSWAP permutations), available at compile
//!   time
//! - Parametric generators for the single-qubit rotation family and the
//!   controlled-phase rotation
//! - Observable lookup with validation of caller-supplied Hermitian
//!   matrices
//!
//! All matrices are written in the caller's basis convention: the first
//! wire of a gate's wire list is the most significant bit of the matrix
//! basis index.
//!
//! # Example
//! ```
//! use qudev_gates::matrices;
//!
//! let rx = matrices::rotation_x(std::f64::consts::PI);
//! // RX(pi) maps |0> to -i|1>
//! assert!((rx[1][0].im + 1.0).abs() < 1e-10);
//! let x = &matrices::PAULI_X;
//! assert_eq!(x[0][1].re, 1.0);
//! ```

pub mod matrices;
pub mod observable;

pub use observable::{hermitian, ObservableKind};
