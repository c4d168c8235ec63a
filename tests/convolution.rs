//! Consumer-side checks: convolution theorem, correlation lag convention,
//! known tones.

use radix2_fft::{Complex64, Fft, Radix2Dit, half_spectrum, rfft};

fn direct_circular_convolution(a: &[f64], b: &[f64]) -> Vec<f64> {
    let n = a.len();
    (0..n)
        .map(|k| (0..n).map(|i| a[i] * b[(k + n - i) % n]).sum())
        .collect()
}

fn direct_circular_correlation(a: &[f64], b: &[f64]) -> Vec<f64> {
    let n = a.len();
    (0..n)
        .map(|k| (0..n).map(|i| a[(i + k) % n] * b[i]).sum())
        .collect()
}

fn assert_all_close(actual: &[f64], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len());
    for (k, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!((a - e).abs() < tolerance, "index {}: {} vs {}", k, a, e);
    }
}

#[test]
fn test_convolution_theorem() {
    let n = 64;
    let a: Vec<f64> = (0..n).map(|i| ((i * 5) % 9) as f64 - 4.0).collect();
    let b: Vec<f64> = (0..n).map(|i| (i as f64 * 0.37).cos()).collect();

    let fft = Fft::<f64>::new(n).unwrap();
    let fa = fft.forward(&promote(&a)).unwrap();
    let fb = fft.forward(&promote(&b)).unwrap();
    let product: Vec<Complex64> = fa.iter().zip(&fb).map(|(x, y)| x * y).collect();
    let via_spectrum = fft.inverse_real(&product).unwrap();

    let expected = direct_circular_convolution(&a, &b);
    assert_all_close(&via_spectrum, &expected, 1e-9);
    assert_all_close(&fft.circular_convolve(&a, &b).unwrap(), &expected, 1e-9);
}

#[test]
fn test_correlation_lag_convention() {
    let n = 32;
    // `a` is `b` delayed by three samples, so the correlation peaks at lag 3.
    let b: Vec<f64> = (0..n).map(|i| if i < 4 { (i + 1) as f64 } else { 0.0 }).collect();
    let a: Vec<f64> = (0..n).map(|i| b[(i + n - 3) % n]).collect();

    let fft = Fft::<f64>::with_strategy(n, Radix2Dit).unwrap();
    let correlation = fft.circular_correlate(&a, &b).unwrap();
    assert_all_close(&correlation, &direct_circular_correlation(&a, &b), 1e-9);

    let peak = correlation
        .iter()
        .enumerate()
        .max_by(|x, y| x.1.partial_cmp(y.1).unwrap())
        .map(|(k, _)| k)
        .unwrap();
    assert_eq!(peak, 3);
}

#[test]
fn test_convolution_zero_pads_short_operands() {
    let fft = Fft::<f64>::new(8).unwrap();
    let result = fft.circular_convolve(&[1.0, 1.0], &[1.0, 2.0, 3.0]).unwrap();
    assert_all_close(&result, &[1.0, 3.0, 5.0, 3.0, 0.0, 0.0, 0.0, 0.0], 1e-12);
}

#[test]
fn test_known_tone_through_one_shot_path() {
    let n = 128;
    let signal: Vec<f64> = (0..n)
        .map(|i| 0.5 + 2.0 * (2.0 * std::f64::consts::PI * 9.0 * i as f64 / n as f64).cos())
        .collect();

    let magnitudes = half_spectrum(&signal).unwrap();
    assert_eq!(magnitudes.len(), n / 2 + 1);
    // DC is scaled by 2/N like every other bin.
    assert!((magnitudes[0] - 1.0).abs() < 1e-9);
    assert!((magnitudes[9] - 2.0).abs() < 1e-9);
    for (k, m) in magnitudes.iter().enumerate() {
        if k != 0 && k != 9 {
            assert!(*m < 1e-9, "bin {} leaked {}", k, m);
        }
    }
}

#[test]
fn test_dc_spectrum() {
    let spectrum = rfft(&[3.0f64; 16]).unwrap();
    assert!((spectrum[0] - Complex64::new(48.0, 0.0)).norm() < 1e-12);
    assert!(spectrum[1..].iter().all(|bin| bin.norm() < 1e-12));
}

#[test]
fn test_facade_shared_across_threads() {
    let fft = Fft::<f32>::new(256).unwrap();
    let signal: Vec<f32> = (0..256).map(|i| (i as f32 * 0.1).sin()).collect();
    let expected = fft.real_spectrum(&signal).unwrap();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let spectrum = fft.real_spectrum(&signal).unwrap();
                assert_eq!(spectrum, expected);
            });
        }
    });
}

fn promote(samples: &[f64]) -> Vec<Complex64> {
    samples.iter().map(|&x| Complex64::new(x, 0.0)).collect()
}
