//! Scalar gate application kernels
//!
//! These functions mutate a state vector in place. Single-qubit gates pair
//! up the amplitudes that differ only in the target bit; the controlled
//! and swap gates manipulate amplitudes directly instead of going through
//! a full matrix product; the general dense kernel gathers and scatters
//! the 2^k amplitudes addressed by each configuration of the remaining
//! wires.
//!
//! Callers must ensure `state.len() == 2^num_wires` and that all wire
//! indices are in range and distinct.

use num_complex::Complex64;
use qudev_core::SquareMatrix;

/// Apply a 2x2 matrix to one wire
pub fn apply_single_qubit(
    state: &mut [Complex64],
    matrix: &[[Complex64; 2]; 2],
    wire: usize,
    num_wires: usize,
) {
    let dimension = 1usize << num_wires;
    let wire_mask = 1usize << wire;

    let m00 = matrix[0][0];
    let m01 = matrix[0][1];
    let m10 = matrix[1][0];
    let m11 = matrix[1][1];

    for low in 0..dimension {
        // Visit each pair once, from its low member
        if low & wire_mask != 0 {
            continue;
        }
        let high = low | wire_mask;

        let amp0 = state[low];
        let amp1 = state[high];

        state[low] = m00 * amp0 + m01 * amp1;
        state[high] = m10 * amp0 + m11 * amp1;
    }
}

/// Flip the target bit wherever the control bit is set
pub fn apply_controlled_not(
    state: &mut [Complex64],
    control: usize,
    target: usize,
    num_wires: usize,
) {
    let dimension = 1usize << num_wires;
    let control_mask = 1usize << control;
    let target_mask = 1usize << target;

    for index in 0..dimension {
        if index & control_mask != 0 && index & target_mask == 0 {
            state.swap(index, index | target_mask);
        }
    }
}

/// Negate the amplitude wherever both bits are set
pub fn apply_controlled_z(state: &mut [Complex64], a: usize, b: usize, num_wires: usize) {
    let dimension = 1usize << num_wires;
    let joint_mask = (1usize << a) | (1usize << b);

    for (index, amplitude) in state.iter_mut().enumerate().take(dimension) {
        if index & joint_mask == joint_mask {
            *amplitude = -*amplitude;
        }
    }
}

/// Exchange the two wires' bits
pub fn apply_swap(state: &mut [Complex64], a: usize, b: usize, num_wires: usize) {
    let dimension = 1usize << num_wires;
    let a_mask = 1usize << a;
    let b_mask = 1usize << b;

    for index in 0..dimension {
        // Visit each (10, 01) pair once
        if index & a_mask != 0 && index & b_mask == 0 {
            state.swap(index, index ^ a_mask ^ b_mask);
        }
    }
}

/// Apply a 2^k x 2^k matrix over an ordered wire subset
///
/// The first wire in `wires` binds to the least significant bit of the
/// matrix basis index. The wires may be non-contiguous and in any order;
/// the matrix dimension must equal `1 << wires.len()`.
pub fn apply_dense(
    state: &mut [Complex64],
    wires: &[usize],
    matrix: &SquareMatrix,
    num_wires: usize,
) {
    let k = wires.len();
    let block = 1usize << k;
    let dimension = 1usize << num_wires;
    let joint_mask = wires.iter().fold(0usize, |mask, &wire| mask | (1 << wire));

    let mut positions = vec![0usize; block];
    let mut gathered = vec![Complex64::new(0.0, 0.0); block];

    for base in 0..dimension {
        // One pass per configuration of the untouched wires
        if base & joint_mask != 0 {
            continue;
        }

        for sub in 0..block {
            let mut position = base;
            for (bit, &wire) in wires.iter().enumerate() {
                if (sub >> bit) & 1 == 1 {
                    position |= 1 << wire;
                }
            }
            positions[sub] = position;
            gathered[sub] = state[position];
        }

        for row in 0..block {
            let mut acc = Complex64::new(0.0, 0.0);
            for (col, amplitude) in gathered.iter().enumerate() {
                acc += matrix.get(row, col) * amplitude;
            }
            state[positions[row]] = acc;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use qudev_gates::matrices;

    fn zero_state(num_wires: usize) -> Vec<Complex64> {
        let mut state = vec![Complex64::new(0.0, 0.0); 1 << num_wires];
        state[0] = Complex64::new(1.0, 0.0);
        state
    }

    #[test]
    fn test_single_qubit_flip() {
        let mut state = zero_state(2);
        apply_single_qubit(&mut state, &matrices::PAULI_X, 1, 2);

        assert_relative_eq!(state[2].re, 1.0, epsilon = 1e-10);
        assert_relative_eq!(state[0].norm(), 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_hadamard_then_cnot_makes_bell_pair() {
        let mut state = zero_state(2);
        apply_single_qubit(&mut state, &matrices::HADAMARD, 0, 2);
        apply_controlled_not(&mut state, 0, 1, 2);

        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(state[0].re, h, epsilon = 1e-10);
        assert_relative_eq!(state[3].re, h, epsilon = 1e-10);
        assert_relative_eq!(state[1].norm(), 0.0, epsilon = 1e-10);
        assert_relative_eq!(state[2].norm(), 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_controlled_z_phase() {
        let mut state = vec![Complex64::new(0.5, 0.0); 4];
        apply_controlled_z(&mut state, 0, 1, 2);

        assert_relative_eq!(state[3].re, -0.5, epsilon = 1e-10);
        assert_relative_eq!(state[1].re, 0.5, epsilon = 1e-10);
    }

    #[test]
    fn test_swap_moves_excitation() {
        let mut state = zero_state(2);
        apply_single_qubit(&mut state, &matrices::PAULI_X, 0, 2);
        apply_swap(&mut state, 0, 1, 2);

        assert_relative_eq!(state[2].re, 1.0, epsilon = 1e-10);
        assert_relative_eq!(state[1].norm(), 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_dense_matches_specialized_cnot() {
        // CNOT as a dense matrix over (target, control): with the first
        // wire as the least significant matrix bit, binding the standard
        // matrix to the reversed wire pair reproduces the native kernel.
        let h = std::f64::consts::FRAC_1_SQRT_2;
        let mut reference = zero_state(3);
        apply_single_qubit(&mut reference, &matrices::HADAMARD, 2, 3);
        apply_controlled_not(&mut reference, 2, 0, 3);

        let mut dense = zero_state(3);
        apply_single_qubit(&mut dense, &matrices::HADAMARD, 2, 3);
        let cnot = SquareMatrix::from_rows(&[
            vec![
                Complex64::new(1.0, 0.0),
                Complex64::new(0.0, 0.0),
                Complex64::new(0.0, 0.0),
                Complex64::new(0.0, 0.0),
            ],
            vec![
                Complex64::new(0.0, 0.0),
                Complex64::new(1.0, 0.0),
                Complex64::new(0.0, 0.0),
                Complex64::new(0.0, 0.0),
            ],
            vec![
                Complex64::new(0.0, 0.0),
                Complex64::new(0.0, 0.0),
                Complex64::new(0.0, 0.0),
                Complex64::new(1.0, 0.0),
            ],
            vec![
                Complex64::new(0.0, 0.0),
                Complex64::new(0.0, 0.0),
                Complex64::new(1.0, 0.0),
                Complex64::new(0.0, 0.0),
            ],
        ])
        .unwrap();
        apply_dense(&mut dense, &[0, 2], &cnot, 3);

        for (d, r) in dense.iter().zip(reference.iter()) {
            assert_relative_eq!(d.re, r.re, epsilon = 1e-10);
            assert_relative_eq!(d.im, r.im, epsilon = 1e-10);
        }
        assert_relative_eq!(reference[0].re, h, epsilon = 1e-10);
    }

    #[test]
    fn test_dense_single_wire_matches_pair_kernel() {
        let mut a = zero_state(2);
        let mut b = zero_state(2);

        apply_single_qubit(&mut a, &matrices::HADAMARD, 1, 2);
        apply_dense(&mut b, &[1], &SquareMatrix::from(&matrices::HADAMARD), 2);

        for (x, y) in a.iter().zip(b.iter()) {
            assert_relative_eq!(x.re, y.re, epsilon = 1e-10);
            assert_relative_eq!(x.im, y.im, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_dense_preserves_norm() {
        let mut state = zero_state(3);
        apply_single_qubit(&mut state, &matrices::HADAMARD, 0, 3);
        apply_single_qubit(&mut state, &matrices::HADAMARD, 1, 3);
        apply_dense(
            &mut state,
            &[2, 0, 1],
            &SquareMatrix::from(&matrices::TOFFOLI),
            3,
        );

        let norm_sqr: f64 = state.iter().map(|a| a.norm_sqr()).sum();
        assert_relative_eq!(norm_sqr, 1.0, epsilon = 1e-10);
    }
}
