//! Core types for the qudev quantum device
//!
//! This crate provides the foundational types shared by the rest of the
//! workspace:
//! - [`Operation`]: a named gate application with wires and parameters
//! - [`CallerWires`] / [`EngineWires`]: the two wire-ordering conventions,
//!   convertible only through list reversal
//! - [`SquareMatrix`]: a dense complex matrix used for gate representations
//! - [`DeviceError`]: the error surface of the whole device
//!
//! # Example
//! ```
//! use qudev_core::Operation;
//!
//! let op = Operation::gate("RX", [0], vec![0.5]).unwrap();
//! assert_eq!(op.name(), "RX");
//! assert_eq!(op.wires().as_slice(), &[0]);
//! ```

pub mod error;
pub mod matrix;
pub mod operation;
pub mod wires;

// Re-exports for convenience
pub use error::DeviceError;
pub use matrix::SquareMatrix;
pub use num_complex::Complex64;
pub use operation::{Operation, Parameters};
pub use wires::{reverse_amplitudes, CallerWires, EngineWires};

/// Type alias for results across the workspace
pub type Result<T> = std::result::Result<T, DeviceError>;

/// Tolerance for numerical errors
pub const TOLERANCE: f64 = 1e-10;
