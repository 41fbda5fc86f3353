#![no_main]

use libfuzzer_sys::fuzz_target;

use polymul_core::multiply::multiply;
use polymul_core::options::{Algorithm, Options};

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    // First byte splits the remainder into the two coefficient sequences.
    // Coefficients are i8 and lengths capped at 256, keeping every product
    // far inside the f64 precision budget.
    let rest = &data[1..];
    let split = (data[0] as usize % (rest.len() - 1)) + 1;
    let (raw_a, raw_b) = rest.split_at(split);

    let a: Vec<i64> = raw_a.iter().take(256).map(|&x| i64::from(x as i8)).collect();
    let b: Vec<i64> = raw_b.iter().take(256).map(|&x| i64::from(x as i8)).collect();

    let fft_opts = Options {
        algorithm: Algorithm::Fft,
        naive_threshold: 0,
    }
    .normalize();
    let naive_opts = Options {
        algorithm: Algorithm::Naive,
        ..fft_opts.clone()
    };

    let via_fft = multiply(&a, &b, &fft_opts).unwrap();
    let via_naive = multiply(&a, &b, &naive_opts).unwrap();
    assert_eq!(via_fft, via_naive, "fft and schoolbook disagree");
});
