//! Core transform: recursive DFT over complex samples, forward and inverse.

use std::f64::consts::PI;

use num_complex::Complex64;
use num_traits::One;

/// In-place DFT of `p` with respect to the root of unity `w`.
///
/// `p.len()` must be a power of two and `w` a primitive `p.len()`-th root
/// of unity. With `w = e^(2πi/n)` this computes the forward transform
/// `out[k] = Σ_j p[j]·w^(jk)`; the conjugate root yields the unscaled
/// inverse (see [`inverse`] for the 1/n scaling).
pub fn fft(p: &mut [Complex64], w: Complex64) {
    let n = p.len();
    debug_assert!(n.is_power_of_two(), "transform length must be a power of two");
    if n <= 1 {
        return;
    }

    let half = n / 2;
    let mut even = Vec::with_capacity(half);
    let mut odd = Vec::with_capacity(half);
    for pair in p.chunks_exact(2) {
        even.push(pair[0]);
        odd.push(pair[1]);
    }

    // w² is a primitive (n/2)-th root of unity.
    fft(&mut even, w * w);
    fft(&mut odd, w * w);

    // Butterfly: w^(i + n/2) = -w^i, so each (even, odd) pair produces the
    // output samples at i and i + n/2. The twiddle is accumulated by
    // repeated multiplication instead of recomputed from the angle.
    let (lo, hi) = p.split_at_mut(half);
    let mut twiddle = Complex64::one();
    for (((l, h), e), o) in lo.iter_mut().zip(hi.iter_mut()).zip(&even).zip(&odd) {
        let t = twiddle * *o;
        *l = *e + t;
        *h = *e - t;
        twiddle *= w;
    }
}

/// Forward transform: DFT with `w = e^(2πi/n)`.
#[allow(clippy::cast_precision_loss)]
pub fn forward(p: &mut [Complex64]) {
    let n = p.len();
    if n <= 1 {
        return;
    }
    let w = Complex64::from_polar(1.0, 2.0 * PI / n as f64);
    fft(p, w);
}

/// Inverse transform: DFT with the conjugate root, then divide by n.
#[allow(clippy::cast_precision_loss)]
pub fn inverse(p: &mut [Complex64]) {
    let n = p.len();
    if n <= 1 {
        return;
    }
    let w = Complex64::from_polar(1.0, -2.0 * PI / n as f64);
    fft(p, w);

    let scale = 1.0 / n as f64;
    for sample in p.iter_mut() {
        *sample *= scale;
    }
}

/// Minimal power of two at least `2·max(a_len, b_len)`: the transform
/// length at which the cyclic convolution computed by the FFT coincides
/// with the linear convolution of the inputs.
#[must_use]
pub fn padded_len(a_len: usize, b_len: usize) -> usize {
    (2 * a_len.max(b_len)).next_power_of_two()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-9
    }

    #[test]
    fn roundtrip_recovers_input() {
        let original: Vec<Complex64> = [1.0, 2.0, 3.0, 4.0, -5.0, 0.5, 7.0, -8.0]
            .iter()
            .map(|&re| Complex64::new(re, 0.0))
            .collect();
        let mut data = original.clone();

        forward(&mut data);
        inverse(&mut data);

        for (i, (got, expected)) in data.iter().zip(&original).enumerate() {
            assert!(close(*got, *expected), "mismatch at index {i}: {got}");
        }
    }

    #[test]
    fn single_sample_is_its_own_transform() {
        let mut data = vec![Complex64::new(42.0, 0.0)];
        forward(&mut data);
        assert!(close(data[0], Complex64::new(42.0, 0.0)));
    }

    #[test]
    fn constant_sequence_concentrates_in_bin_zero() {
        let mut data = vec![Complex64::new(1.0, 0.0); 4];
        forward(&mut data);
        assert!(close(data[0], Complex64::new(4.0, 0.0)));
        for sample in &data[1..] {
            assert!(close(*sample, Complex64::new(0.0, 0.0)));
        }
    }

    #[test]
    fn impulse_transforms_to_all_ones() {
        let mut data = vec![Complex64::new(0.0, 0.0); 8];
        data[0] = Complex64::new(1.0, 0.0);
        forward(&mut data);
        for sample in &data {
            assert!(close(*sample, Complex64::new(1.0, 0.0)));
        }
    }

    #[test]
    fn padded_len_examples() {
        assert_eq!(padded_len(1, 1), 2);
        assert_eq!(padded_len(3, 2), 8);
        assert_eq!(padded_len(4, 4), 8);
        assert_eq!(padded_len(5, 1), 16);
    }

    #[test]
    fn padded_len_is_minimal_power_of_two() {
        for la in 1..100 {
            for lb in 1..100 {
                let n = padded_len(la, lb);
                let need = 2 * la.max(lb);
                assert!(n.is_power_of_two(), "la={la} lb={lb}");
                assert!(n >= need, "la={la} lb={lb}");
                assert!(n / 2 < need, "not minimal: la={la} lb={lb} n={n}");
            }
        }
    }
}
