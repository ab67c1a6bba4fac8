//! Error types for qudev

use thiserror::Error;

/// Errors that can occur while translating and applying operations
///
/// Every failure is reported synchronously to the caller of the device
/// surface (`apply`, `state`, `analytic_probability`); there is no local
/// recovery and no retry.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DeviceError {
    /// State-loading operation used after other operations were applied
    #[error("operation '{name}' cannot be used after other operations have already been applied")]
    Sequencing { name: String },

    /// Amplitude or basis-state parameter length mismatch
    #[error("state parameter must be of length {expected}, got {actual}")]
    Length { expected: usize, actual: usize },

    /// Supplied amplitude vector is not unit-norm
    #[error("sum of amplitudes-squared does not equal one (got {norm_sqr})")]
    Normalization { norm_sqr: f64 },

    /// Basis-state bit outside {0, 1}
    #[error("basis state parameter must consist of 0 or 1 values, got {value}")]
    Domain { value: f64 },

    /// Arbitrary-unitary matrix dimension mismatch
    #[error("unitary matrix must be of shape ({expected}, {expected}), got ({actual}, {actual})")]
    Shape { expected: usize, actual: usize },

    /// Supplied observable failed validation
    #[error("observable validation failed: {0}")]
    Validation(String),

    /// Operation name not in the supported set
    #[error("operation '{0}' is not supported")]
    UnsupportedOperation(String),

    /// Requested runtime configuration is unavailable
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Amplitude vector length is not a power of two
    #[error("amplitude vector length {0} is not a power of two")]
    InvalidStateLength(usize),

    /// No state vector is available yet
    #[error("no state vector is available")]
    EmptyState,

    /// Wire index out of range for the device
    #[error("invalid wire {wire} for a {num_wires}-wire device")]
    InvalidWire { wire: usize, num_wires: usize },

    /// Duplicate wire in a wire list
    #[error("duplicate wire {0} in wire list")]
    DuplicateWire(usize),

    /// Basis index out of range for the state dimension
    #[error("basis index {index} out of range for dimension {dimension}")]
    BasisIndexOutOfRange { index: usize, dimension: usize },

    /// Gate applied to the wrong number of wires
    #[error("gate '{gate}' acts on {expected} wires, but {actual} were given")]
    WireCount {
        gate: String,
        expected: usize,
        actual: usize,
    },

    /// Gate given the wrong number of parameters
    #[error("gate '{gate}' takes {expected} parameters, but {actual} were given")]
    ParameterCount {
        gate: String,
        expected: usize,
        actual: usize,
    },

    /// Gate given the wrong kind of parameter payload
    #[error("gate '{gate}' expects {expected}")]
    ParameterKind {
        gate: String,
        expected: &'static str,
    },
}

impl DeviceError {
    /// Create a sequencing error for the given operation name
    pub fn sequencing(name: impl Into<String>) -> Self {
        Self::Sequencing { name: name.into() }
    }

    /// Create a wire-count error
    pub fn wire_count(gate: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::WireCount {
            gate: gate.into(),
            expected,
            actual,
        }
    }

    /// Create a parameter-count error
    pub fn parameter_count(gate: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::ParameterCount {
            gate: gate.into(),
            expected,
            actual,
        }
    }

    /// Create a parameter-kind error
    pub fn parameter_kind(gate: impl Into<String>, expected: &'static str) -> Self {
        Self::ParameterKind {
            gate: gate.into(),
            expected,
        }
    }
}
