//! The device facade

use crate::config::{Accelerator, DeviceConfig};
use crate::dispatch::OperationKind;
use crate::probability::{basis_probabilities, marginal_probabilities};
use crate::sampling::{estimate_probabilities, sample_basis_states};
use crate::translator;
use num_complex::Complex64;
use qudev_core::{reverse_amplitudes, DeviceError, Operation, Result};
use qudev_state::{GateRepresentation, StateContainer, StateEngine};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A qubit simulation device
///
/// Translates framework operation sequences into state-vector mutations
/// and answers state, probability, and sample queries in the caller's
/// wire-ordering convention.
///
/// # Example
/// ```
/// use qudev_device::QubitDevice;
/// use qudev_core::Operation;
///
/// let mut device = QubitDevice::new(2).unwrap();
/// device
///     .apply(&[
///         Operation::gate("Hadamard", [0], vec![]).unwrap(),
///         Operation::gate("CNOT", [0, 1], vec![]).unwrap(),
///     ])
///     .unwrap();
///
/// let probs = device.analytic_probability(None).unwrap();
/// assert!((probs[0] - 0.5).abs() < 1e-10);
/// assert!((probs[3] - 0.5).abs() < 1e-10);
/// ```
#[derive(Debug)]
pub struct QubitDevice {
    num_wires: usize,
    config: DeviceConfig,
    container: StateContainer,
}

impl QubitDevice {
    /// Create a device with the default configuration
    pub fn new(num_wires: usize) -> Result<Self> {
        Self::with_config(num_wires, DeviceConfig::default())
    }

    /// Create a device with an explicit configuration
    ///
    /// # Errors
    /// Returns [`DeviceError::Configuration`] if the device has no wires
    /// or the requested accelerator is unavailable in this build.
    pub fn with_config(num_wires: usize, config: DeviceConfig) -> Result<Self> {
        if num_wires == 0 {
            return Err(DeviceError::Configuration(
                "a device must have at least one wire".into(),
            ));
        }
        if config.accelerator == Accelerator::Gpu {
            return Err(DeviceError::Configuration(
                "GPU state vectors are not available in this build; use the CPU engine".into(),
            ));
        }

        Ok(Self {
            num_wires,
            config,
            container: StateContainer::new(num_wires)?,
        })
    }

    /// Create a device over a caller-supplied engine
    ///
    /// The engine defines the wire count; the accelerator setting in
    /// `config` is ignored since the engine is already constructed.
    pub fn with_engine(engine: Box<dyn StateEngine>, config: DeviceConfig) -> Self {
        let container = StateContainer::with_engine(engine);
        Self {
            num_wires: container.num_wires(),
            config,
            container,
        }
    }

    /// Number of wires
    pub fn num_wires(&self) -> usize {
        self.num_wires
    }

    /// The device configuration
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// The names of all supported operations
    pub fn supported_operations() -> impl Iterator<Item = &'static str> {
        OperationKind::ALL.into_iter().map(|kind| kind.name())
    }

    /// Apply an ordered operation sequence
    ///
    /// Operations are translated and applied strictly in order. On error
    /// the remaining sequence is abandoned; operations already applied
    /// stay applied, and the caller decides whether to reset.
    pub fn apply(&mut self, operations: &[Operation]) -> Result<()> {
        for operation in operations {
            translator::apply_operation(&mut self.container, operation)?;
        }
        Ok(())
    }

    /// The full amplitude vector in caller convention
    pub fn state(&self) -> Result<Vec<Complex64>> {
        reverse_amplitudes(&self.container.vector())
    }

    /// Exact marginal probability of each computational basis state
    ///
    /// `wires` defaults to the full register in order; the result is
    /// indexed by the restricted basis pattern over the requested wires,
    /// in the requested order.
    pub fn analytic_probability(&self, wires: Option<&[usize]>) -> Result<Vec<f64>> {
        let probabilities = basis_probabilities(&self.state()?)?;
        self.marginalize(&probabilities, wires)
    }

    /// Marginal probabilities, exact or shot-estimated per configuration
    pub fn probability(&self, wires: Option<&[usize]>) -> Result<Vec<f64>> {
        if self.config.analytic {
            return self.analytic_probability(wires);
        }

        let samples = self.generate_samples()?;
        let estimated = estimate_probabilities(&samples, 1 << self.num_wires);
        self.marginalize(&estimated, wires)
    }

    /// Draw `shots` basis-state indices (caller convention) from the
    /// current probability distribution
    pub fn generate_samples(&self) -> Result<Vec<usize>> {
        let probabilities = basis_probabilities(&self.state()?)?;
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(sample_basis_states(
            &probabilities,
            self.config.shots,
            &mut rng,
        ))
    }

    /// Restore the zero state and clear the circuit log
    pub fn reset(&mut self) {
        self.container.reset();
    }

    /// The gates applied since construction or the last reset
    pub fn applied_gates(&self) -> &[GateRepresentation] {
        self.container.applied_gates()
    }

    fn marginalize(&self, probabilities: &[f64], wires: Option<&[usize]>) -> Result<Vec<f64>> {
        match wires {
            Some(target) => marginal_probabilities(probabilities, self.num_wires, target),
            None => {
                let all: Vec<usize> = (0..self.num_wires).collect();
                marginal_probabilities(probabilities, self.num_wires, &all)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_wires_rejected() {
        assert!(matches!(
            QubitDevice::new(0),
            Err(DeviceError::Configuration(_))
        ));
    }

    #[test]
    fn test_gpu_unavailable() {
        let config = DeviceConfig {
            accelerator: Accelerator::Gpu,
            ..DeviceConfig::default()
        };
        let err = QubitDevice::with_config(1, config).unwrap_err();
        assert!(matches!(err, DeviceError::Configuration(_)));
    }

    #[test]
    fn test_initial_state_is_zero_state() {
        let device = QubitDevice::new(2).unwrap();
        let state = device.state().unwrap();
        assert_relative_eq!(state[0].re, 1.0, epsilon = 1e-10);
        for amplitude in &state[1..] {
            assert_relative_eq!(amplitude.norm(), 0.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_supported_operations_listing() {
        let names: Vec<&str> = QubitDevice::supported_operations().collect();
        assert!(names.contains(&"QubitStateVector"));
        assert!(names.contains(&"Toffoli"));
        assert!(names.contains(&"S.inv"));
        assert_eq!(names.len(), 21);
    }

    #[test]
    fn test_reset_restores_zero_state() {
        let mut device = QubitDevice::new(2).unwrap();
        device
            .apply(&[Operation::gate("PauliX", [0], vec![]).unwrap()])
            .unwrap();
        assert_eq!(device.applied_gates().len(), 1);

        device.reset();

        assert!(device.applied_gates().is_empty());
        assert_relative_eq!(device.state().unwrap()[0].re, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_seeded_samples_deterministic() {
        let mut device =
            QubitDevice::with_config(2, DeviceConfig::default().with_seed(99)).unwrap();
        device
            .apply(&[Operation::gate("PauliX", [0], vec![]).unwrap()])
            .unwrap();

        let samples = device.generate_samples().unwrap();
        assert_eq!(samples.len(), 1000);
        // |10> in caller convention is basis index 2
        assert!(samples.iter().all(|&s| s == 2));
    }

    #[test]
    fn test_sampled_probability_estimate() {
        let config = DeviceConfig::sampled(500).with_seed(3);
        let mut device = QubitDevice::with_config(1, config).unwrap();
        device
            .apply(&[Operation::gate("PauliX", [0], vec![]).unwrap()])
            .unwrap();

        let probs = device.probability(None).unwrap();
        assert_relative_eq!(probs[0], 0.0, epsilon = 1e-10);
        assert_relative_eq!(probs[1], 1.0, epsilon = 1e-10);
    }
}
