//! Wire index lists in the two ordering conventions
//!
//! The calling framework and the state engine number basis states in
//! opposite wire orders. The caller treats the first wire of a gate's wire
//! list as the most significant bit of a basis index; the engine treats
//! wire 0 as the least significant bit of its state-vector index. Wire
//! lists in the two conventions are distinct types so they cannot be mixed
//! up by accident, and the only conversion between them is list reversal.
//!
//! Full amplitude vectors are converted between the conventions with
//! [`reverse_amplitudes`], the index-bit-reversal permutation. Both
//! conversions are involutions.

use crate::error::DeviceError;
use crate::Result;
use num_complex::Complex64;
use smallvec::SmallVec;

// Most gates act on one or two wires
type WireVec = SmallVec<[usize; 2]>;

fn check_unique(wires: &[usize]) -> Result<()> {
    for i in 0..wires.len() {
        for j in (i + 1)..wires.len() {
            if wires[i] == wires[j] {
                return Err(DeviceError::DuplicateWire(wires[i]));
            }
        }
    }
    Ok(())
}

/// An ordered wire list in the caller's convention
///
/// The first wire in the list is the most significant bit of the caller's
/// basis-index encoding.
///
/// # Example
/// ```
/// use qudev_core::CallerWires;
///
/// let wires = CallerWires::new([0, 2]).unwrap();
/// let engine = wires.to_engine();
/// assert_eq!(engine.as_slice(), &[2, 0]);
/// assert_eq!(engine.to_caller(), wires);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerWires(WireVec);

impl CallerWires {
    /// Create a caller-order wire list
    ///
    /// # Errors
    /// Returns [`DeviceError::DuplicateWire`] if a wire appears twice.
    pub fn new(wires: impl IntoIterator<Item = usize>) -> Result<Self> {
        let wires: WireVec = wires.into_iter().collect();
        check_unique(&wires)?;
        Ok(Self(wires))
    }

    /// Number of wires in the list
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The wire indices in caller order
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Convert to the engine's convention by reversing the list
    pub fn to_engine(&self) -> EngineWires {
        EngineWires(self.0.iter().rev().copied().collect())
    }
}

/// An ordered wire list in the engine's convention
///
/// Produced by reversing a [`CallerWires`] list; reversing again restores
/// the caller ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineWires(WireVec);

impl EngineWires {
    /// Number of wires in the list
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The wire indices in engine order
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Convert back to the caller's convention by reversing the list
    pub fn to_caller(&self) -> CallerWires {
        CallerWires(self.0.iter().rev().copied().collect())
    }
}

/// Reverse the wire order of a full amplitude vector
///
/// Reinterprets a length-2^N vector as an N-dimensional tensor of shape
/// (2, ..., 2), transposes all axes, and flattens back — equivalently, the
/// N-bit index-reversal permutation. Converts amplitude vectors between
/// the caller and engine conventions in either direction; the function is
/// its own inverse.
///
/// # Errors
/// Returns [`DeviceError::InvalidStateLength`] if the input length is not
/// a power of two.
///
/// # Example
/// ```
/// use num_complex::Complex64;
/// use qudev_core::reverse_amplitudes;
///
/// let v: Vec<Complex64> = (0..4).map(|i| Complex64::new(i as f64, 0.0)).collect();
/// let r = reverse_amplitudes(&v).unwrap();
/// assert_eq!(r[1].re, 2.0);
/// assert_eq!(r[2].re, 1.0);
/// ```
pub fn reverse_amplitudes(vector: &[Complex64]) -> Result<Vec<Complex64>> {
    let len = vector.len();
    if !len.is_power_of_two() {
        return Err(DeviceError::InvalidStateLength(len));
    }

    let bits = len.trailing_zeros();
    let mut reversed = vec![Complex64::new(0.0, 0.0); len];
    for (index, amplitude) in vector.iter().enumerate() {
        reversed[reverse_index(index, bits)] = *amplitude;
    }
    Ok(reversed)
}

/// Reverse the lowest `bits` bits of an index
fn reverse_index(index: usize, bits: u32) -> usize {
    let mut reversed = 0;
    for bit in 0..bits {
        reversed |= ((index >> bit) & 1) << (bits - 1 - bit);
    }
    reversed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_reversal_involution() {
        let wires = CallerWires::new([3, 0, 2]).unwrap();
        assert_eq!(wires.to_engine().to_caller(), wires);
    }

    #[test]
    fn test_single_wire_reversal_is_identity() {
        let wires = CallerWires::new([5]).unwrap();
        assert_eq!(wires.to_engine().as_slice(), &[5]);
    }

    #[test]
    fn test_duplicate_wire_rejected() {
        let result = CallerWires::new([0, 1, 0]);
        assert_eq!(result, Err(DeviceError::DuplicateWire(0)));
    }

    #[test]
    fn test_reverse_amplitudes_two_wires() {
        let v: Vec<Complex64> = (0..4).map(|i| Complex64::new(i as f64, 0.0)).collect();
        let r = reverse_amplitudes(&v).unwrap();

        // Index 01 <-> 10; endpoints stay put
        assert_eq!(r[0].re, 0.0);
        assert_eq!(r[1].re, 2.0);
        assert_eq!(r[2].re, 1.0);
        assert_eq!(r[3].re, 3.0);
    }

    #[test]
    fn test_reverse_amplitudes_involution() {
        let v: Vec<Complex64> = (0..16)
            .map(|i| Complex64::new(i as f64, -(i as f64)))
            .collect();
        let round_trip = reverse_amplitudes(&reverse_amplitudes(&v).unwrap()).unwrap();
        assert_eq!(round_trip, v);
    }

    #[test]
    fn test_reverse_amplitudes_trivial_lengths() {
        let v = vec![Complex64::new(1.0, 0.0)];
        assert_eq!(reverse_amplitudes(&v).unwrap(), v);

        let v = vec![Complex64::new(0.6, 0.0), Complex64::new(0.8, 0.0)];
        assert_eq!(reverse_amplitudes(&v).unwrap(), v);
    }

    #[test]
    fn test_reverse_amplitudes_bad_length() {
        let v = vec![Complex64::new(1.0, 0.0); 3];
        assert_eq!(
            reverse_amplitudes(&v),
            Err(DeviceError::InvalidStateLength(3))
        );

        let empty: Vec<Complex64> = Vec::new();
        assert_eq!(
            reverse_amplitudes(&empty),
            Err(DeviceError::InvalidStateLength(0))
        );
    }
}
