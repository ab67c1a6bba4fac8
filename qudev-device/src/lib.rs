//! Operation translator and device facade for the qudev quantum device
//!
//! This crate ties the workspace together into a usable device:
//!
//! - [`QubitDevice`]: applies framework operation sequences to a state
//!   container and answers state, probability, and sample queries in the
//!   caller's wire-ordering convention
//! - [`OperationKind`]: the fixed supported-operation set and its
//!   dispatch table
//! - [`probability`]: squared-magnitude probabilities and marginalization
//!   over arbitrary wire subsets
//! - [`DeviceConfig`] / [`Accelerator`]: shots, analytic mode, sampling
//!   seed, and backend selection
//!
//! # Example
//! ```
//! use qudev_core::Operation;
//! use qudev_device::QubitDevice;
//!
//! let mut device = QubitDevice::new(2).unwrap();
//! device
//!     .apply(&[Operation::basis_state([0, 1], vec![1.0, 0.0]).unwrap()])
//!     .unwrap();
//!
//! let state = device.state().unwrap();
//! assert!((state[2].re - 1.0).abs() < 1e-10);
//! ```

pub mod config;
pub mod device;
pub mod dispatch;
pub mod probability;
pub mod sampling;
mod translator;

pub use config::{Accelerator, DeviceConfig};
pub use device::QubitDevice;
pub use dispatch::OperationKind;

// Re-exports so callers can depend on this crate alone
pub use qudev_core::{DeviceError, Operation, Parameters, Result, SquareMatrix};
pub use qudev_state::{GateRepresentation, PrimitiveGate, StateEngine};
