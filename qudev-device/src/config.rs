//! Device configuration

/// Backend used for amplitude storage and gate application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accelerator {
    /// The bundled CPU dense engine
    Cpu,
    /// GPU state vectors; not available in this build
    Gpu,
}

/// Configuration for a [`QubitDevice`](crate::QubitDevice)
#[derive(Debug, Clone)]
pub struct DeviceConfig {
    /// Number of measurement shots drawn when sampling
    ///
    /// Default: 1000
    pub shots: usize,

    /// Whether probabilities are computed exactly from the amplitudes
    ///
    /// When false, `probability` estimates them from `shots` samples.
    ///
    /// Default: true
    pub analytic: bool,

    /// Requested backend
    ///
    /// Default: [`Accelerator::Cpu`]
    pub accelerator: Accelerator,

    /// Seed for the sampling random number generator
    ///
    /// If None, a fresh entropy-seeded generator is used per call.
    ///
    /// Default: None
    pub seed: Option<u64>,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            shots: 1000,
            analytic: true,
            accelerator: Accelerator::Cpu,
            seed: None,
        }
    }
}

impl DeviceConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration that estimates probabilities from samples
    pub fn sampled(shots: usize) -> Self {
        Self {
            shots,
            analytic: false,
            ..Self::default()
        }
    }

    /// Set the sampling seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DeviceConfig::default();
        assert_eq!(config.shots, 1000);
        assert!(config.analytic);
        assert_eq!(config.accelerator, Accelerator::Cpu);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_sampled_preset() {
        let config = DeviceConfig::sampled(200).with_seed(7);
        assert_eq!(config.shots, 200);
        assert!(!config.analytic);
        assert_eq!(config.seed, Some(7));
    }
}
