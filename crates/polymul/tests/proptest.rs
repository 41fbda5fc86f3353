//! Property-based tests for polynomial multiplication.

use proptest::prelude::*;

use polymul_core::multiply::multiply;
use polymul_core::options::{Algorithm, Options};

fn opts(algorithm: Algorithm) -> Options {
    Options {
        algorithm,
        naive_threshold: 0,
    }
    .normalize()
}

fn coeff_seq() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-100i64..=100, 1..=64)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The FFT pipeline and schoolbook convolution agree everywhere.
    #[test]
    fn fft_equals_naive(a in coeff_seq(), b in coeff_seq()) {
        let via_fft = multiply(&a, &b, &opts(Algorithm::Fft)).unwrap();
        let via_naive = multiply(&a, &b, &opts(Algorithm::Naive)).unwrap();
        prop_assert_eq!(via_fft, via_naive);
    }

    /// Output length is always len(A) + len(B) - 1.
    #[test]
    fn length_invariant(a in coeff_seq(), b in coeff_seq()) {
        let product = multiply(&a, &b, &opts(Algorithm::Fft)).unwrap();
        prop_assert_eq!(product.len(), a.len() + b.len() - 1);
    }

    /// A·B == B·A elementwise.
    #[test]
    fn commutative(a in coeff_seq(), b in coeff_seq()) {
        let ab = multiply(&a, &b, &opts(Algorithm::Fft)).unwrap();
        let ba = multiply(&b, &a, &opts(Algorithm::Fft)).unwrap();
        prop_assert_eq!(ab, ba);
    }

    /// Multiplying by the constant polynomial 1 returns A unchanged.
    #[test]
    fn one_is_the_identity(a in coeff_seq()) {
        let product = multiply(&a, &[1], &opts(Algorithm::Fft)).unwrap();
        prop_assert_eq!(product, a);
    }

    /// Multiplying by the zero polynomial yields all zeros of length len(A).
    #[test]
    fn zero_annihilates(a in coeff_seq()) {
        let product = multiply(&a, &[0], &opts(Algorithm::Fft)).unwrap();
        prop_assert_eq!(product.len(), a.len());
        prop_assert!(product.iter().all(|&c| c == 0));
    }

    /// Cross-check mode never reports a mismatch on in-budget inputs.
    #[test]
    fn cross_check_agrees(a in coeff_seq(), b in coeff_seq()) {
        prop_assert!(multiply(&a, &b, &opts(Algorithm::Both)).is_ok());
    }
}
