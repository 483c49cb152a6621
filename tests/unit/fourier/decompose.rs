use super::*;

fn unit_circle(m: usize) -> Vec<Complex> {
    (0..m)
        .map(|n| Complex::cis(TAU * n as f64 / m as f64))
        .collect()
}

fn coeff(index: i32, magnitude: f64) -> FrequencyCoefficient {
    FrequencyCoefficient::from_polar(index, magnitude, 0.3).unwrap()
}

#[test]
fn frequency_indices_alternate_around_zero() {
    let ks: Vec<i32> = frequency_indices(7).collect();
    assert_eq!(ks, vec![0, 1, -1, 2, -2, 3, -3]);
    assert_eq!(frequency_indices(0).count(), 0);
}

#[test]
fn rejects_bad_counts() {
    let s = unit_circle(8);
    assert!(matches!(
        decompose(&s, 0),
        Err(EpicycleError::InvalidArgument(_))
    ));
    assert!(matches!(
        decompose(&s, 9),
        Err(EpicycleError::InsufficientSamples {
            requested: 9,
            available: 8
        })
    ));
    assert_eq!(decompose(&s, 8).unwrap().len(), 8);
}

#[test]
fn rejects_non_finite_samples() {
    let mut s = unit_circle(8);
    s[3] = Complex::new(f64::NAN, 0.0);
    assert!(matches!(
        decompose(&s, 3),
        Err(EpicycleError::InvalidArgument(_))
    ));
}

#[test]
fn unit_circle_has_single_dominant_term_at_index_one() {
    let coeffs = decompose(&unit_circle(256), 9).unwrap();
    assert_eq!(coeffs.len(), 9);
    assert_eq!(coeffs[0].index, 1);
    assert!((coeffs[0].magnitude() - 1.0).abs() < 1e-9);
    assert!(coeffs[0].phase().abs() < 1e-9);
    for c in &coeffs[1..] {
        assert!(c.magnitude() < 1e-9, "k={} |c|={}", c.index, c.magnitude());
    }
}

#[test]
fn reverse_circle_lands_on_negative_index() {
    let s: Vec<Complex> = unit_circle(64).into_iter().map(|c| c.conj() * 3.0).collect();
    let coeffs = decompose(&s, 5).unwrap();
    assert_eq!(coeffs[0].index, -1);
    assert!((coeffs[0].magnitude() - 3.0).abs() < 1e-9);
}

#[test]
fn constant_signal_only_has_dc_term() {
    let s = vec![Complex::new(4.0, -2.0); 32];
    let coeffs = decompose(&s, 5).unwrap();
    assert_eq!(coeffs[0].index, 0);
    assert!((coeffs[0].coefficient - Complex::new(4.0, -2.0)).norm() < 1e-12);
    // Zero terms are retained, ordered by |k| then sign.
    let rest: Vec<i32> = coeffs[1..].iter().map(|c| c.index).collect();
    assert_eq!(rest.len(), 4);
    assert!(coeffs[1..].iter().all(|c| c.magnitude() < 1e-12));
}

#[test]
fn ordering_breaks_ties_by_abs_index_then_sign() {
    let mut cs = vec![coeff(-1, 2.0), coeff(1, 5.0), coeff(0, 5.0)];
    order_coefficients(&mut cs);
    let ks: Vec<i32> = cs.iter().map(|c| c.index).collect();
    assert_eq!(ks, vec![0, 1, -1]);

    let mut cs = vec![coeff(-2, 3.0), coeff(2, 3.0), coeff(-1, 3.0), coeff(1, 3.0)];
    order_coefficients(&mut cs);
    let ks: Vec<i32> = cs.iter().map(|c| c.index).collect();
    assert_eq!(ks, vec![1, -1, 2, -2]);
}

#[test]
fn decomposition_is_sorted_by_non_increasing_magnitude() {
    let s: Vec<Complex> = (0..200)
        .map(|n| {
            let t = n as f64 / 200.0;
            Complex::cis(TAU * t) * 2.0 + Complex::cis(-TAU * 3.0 * t) * 0.5 + 1.0
        })
        .collect();
    let coeffs = decompose(&s, 11).unwrap();
    assert!(
        coeffs
            .windows(2)
            .all(|w| w[0].magnitude() >= w[1].magnitude())
    );
    assert_eq!(coeffs[0].index, 1);
    assert_eq!(coeffs[1].index, 0);
    assert_eq!(coeffs[2].index, -3);
}

#[test]
fn parallel_and_serial_paths_agree() {
    // 1024 * 65 terms crosses the parallel threshold; 1024 * 3 does not.
    let s: Vec<Complex> = (0..1024)
        .map(|n| Complex::new((n as f64 * 0.37).sin(), (n as f64 * 0.11).cos()))
        .collect();
    let big = decompose(&s, 65).unwrap();
    let small = decompose(&s, 3).unwrap();
    for c in &small {
        let twin = big.iter().find(|b| b.index == c.index).unwrap();
        assert_eq!(twin.coefficient, c.coefficient);
    }
    assert_eq!(decompose(&s, 65).unwrap(), big);
}

#[test]
fn reconstruction_passes_through_samples() {
    let s: Vec<Complex> = (0..16)
        .map(|n| Complex::new(n as f64, (n * n) as f64 * 0.25))
        .collect();
    let coeffs = decompose(&s, 16).unwrap();
    for (n, sample) in s.iter().enumerate() {
        let t = n as f64 / 16.0;
        assert!((reconstruct(&coeffs, t) - sample).norm() < 1e-9);
    }
}

#[test]
fn non_finite_coefficients_are_rejected() {
    assert!(FrequencyCoefficient::new(1, Complex::new(f64::NAN, 0.0)).is_err());
    assert!(FrequencyCoefficient::from_polar(1, f64::INFINITY, 0.0).is_err());
}
