use irs_cosmo::{integrate, Rk4Stepper};

fn exponential(_x: f64, y: &[f64; 1]) -> [f64; 1] {
    [y[0]]
}

fn global_error(steps: usize) -> f64 {
    let h = 1.0 / steps as f64;
    let traj = integrate(&exponential, 0.0, [1.0], h, steps).expect("integrate");
    (traj.last().expect("state")[0] - 1f64.exp()).abs()
}

fn local_error(h: f64) -> f64 {
    let next = Rk4Stepper.step(&exponential, 0.0, &[1.0], h);
    (next[0] - h.exp()).abs()
}

#[test]
fn halving_step_divides_global_error_by_sixteen() {
    let ratio = global_error(10) / global_error(20);
    assert!(ratio > 14.0 && ratio < 18.0, "ratio {ratio}");
}

#[test]
fn halving_step_divides_local_error_by_thirty_two() {
    let ratio = local_error(0.1) / local_error(0.05);
    assert!(ratio > 30.0 && ratio < 34.0, "ratio {ratio}");
}

#[test]
fn harmonic_oscillator_returns_after_one_period() {
    let oscillator = |_x: f64, y: &[f64; 2]| [y[1], -y[0]];
    let steps = 1000;
    let h = 2.0 * std::f64::consts::PI / steps as f64;
    let traj = integrate(&oscillator, 0.0, [1.0, 0.0], h, steps).expect("integrate");
    let last = traj.last().expect("state");
    assert!((last[0] - 1.0).abs() < 1e-9);
    assert!(last[1].abs() < 1e-9);
}

#[test]
fn stepping_is_deterministic() {
    let first = Rk4Stepper.step(&exponential, 0.3, &[2.0], 0.01);
    let second = Rk4Stepper.step(&exponential, 0.3, &[2.0], 0.01);
    assert_eq!(first, second);
}
