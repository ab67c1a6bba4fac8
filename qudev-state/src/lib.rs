//! State container and engine contract for the qudev quantum device
//!
//! This crate owns the mutable side of a simulation session:
//!
//! - [`StateEngine`]: the contract the underlying amplitude engine must
//!   satisfy (zero-state reset, amplitude and basis-state loading, native
//!   primitive application, dense-matrix application over arbitrary wire
//!   subsets, full-vector read-back)
//! - [`DenseEngine`]: the bundled dense state-vector implementation of
//!   that contract
//! - [`StateContainer`]: owns one engine plus the [`CircuitLog`] of
//!   actually-applied gates; both are cleared together on reset
//! - [`PrimitiveGate`] and [`GateRepresentation`]: the gate vocabulary at
//!   the engine boundary
//!
//! # Example
//! ```
//! use qudev_state::{GateRepresentation, PrimitiveGate, StateContainer};
//!
//! let mut container = StateContainer::new(2).unwrap();
//! container
//!     .apply(GateRepresentation::Primitive(PrimitiveGate::PauliX { target: 0 }))
//!     .unwrap();
//! assert_eq!(container.applied_gates().len(), 1);
//! assert_eq!(container.vector()[1].re, 1.0);
//! ```

pub mod container;
pub mod engine;
pub mod gate;
pub mod kernels;
pub mod state_vector;

pub use container::{CircuitLog, StateContainer};
pub use engine::{DenseEngine, StateEngine};
pub use gate::{GateRepresentation, PrimitiveGate};
pub use state_vector::StateVector;
