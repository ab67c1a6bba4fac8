//! Basis-state probabilities and marginalization

use num_complex::Complex64;
use qudev_core::{DeviceError, Result};

/// Squared-magnitude probability of every basis state
///
/// The input must already be in caller convention; the output is indexed
/// the same way.
///
/// # Errors
/// Returns [`DeviceError::EmptyState`] if no state vector is available
/// (an empty slice) — distinct from a zero state, which has length 2^N.
pub fn basis_probabilities(state: &[Complex64]) -> Result<Vec<f64>> {
    if state.is_empty() {
        return Err(DeviceError::EmptyState);
    }
    Ok(state.iter().map(|a| a.norm_sqr()).collect())
}

/// Marginalize basis-state probabilities over a wire subset
///
/// Sums all basis indices that agree on the bits of `target_wires` and
/// differ elsewhere. The result has length 2^(target count) and is
/// indexed by the restricted bit pattern in caller convention, with the
/// target wires ordered as given (the first target wire is the most
/// significant result bit). Any subset in any order is supported.
///
/// # Errors
/// - [`DeviceError::Length`] if `probabilities` is not 2^num_wires long
/// - [`DeviceError::InvalidWire`] for a target outside the register
/// - [`DeviceError::DuplicateWire`] for a repeated target
pub fn marginal_probabilities(
    probabilities: &[f64],
    num_wires: usize,
    target_wires: &[usize],
) -> Result<Vec<f64>> {
    let dimension = 1usize << num_wires;
    if probabilities.len() != dimension {
        return Err(DeviceError::Length {
            expected: dimension,
            actual: probabilities.len(),
        });
    }

    for (i, &wire) in target_wires.iter().enumerate() {
        if wire >= num_wires {
            return Err(DeviceError::InvalidWire { wire, num_wires });
        }
        if target_wires[..i].contains(&wire) {
            return Err(DeviceError::DuplicateWire(wire));
        }
    }

    let k = target_wires.len();
    let mut marginal = vec![0.0; 1 << k];

    for (index, &probability) in probabilities.iter().enumerate() {
        let mut restricted = 0usize;
        for (t, &wire) in target_wires.iter().enumerate() {
            // Caller convention: wire w is bit (num_wires - 1 - w)
            let bit = (index >> (num_wires - 1 - wire)) & 1;
            restricted |= bit << (k - 1 - t);
        }
        marginal[restricted] += probability;
    }

    Ok(marginal)
}
