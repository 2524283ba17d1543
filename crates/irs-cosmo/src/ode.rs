//! Fixed-step classical Runge-Kutta integration.
//!
//! The stepper has no internal state and never adapts `h`; guarding against
//! singular or runaway states is the right-hand side's job.

use irs_core::errors::{ErrorInfo, IrsError};
use irs_core::require_finite;

/// Right-hand side `dy/dx = f(x, y)` of an `N`-dimensional first-order system.
///
/// Closures `Fn(f64, &[f64; N]) -> [f64; N]` implement this directly; models
/// with parameters implement it on a struct that owns them.
pub trait RightHandSide<const N: usize> {
    /// Evaluates the derivative at `(x, y)`.
    fn derivative(&self, x: f64, y: &[f64; N]) -> [f64; N];
}

impl<F, const N: usize> RightHandSide<N> for F
where
    F: Fn(f64, &[f64; N]) -> [f64; N],
{
    fn derivative(&self, x: f64, y: &[f64; N]) -> [f64; N] {
        self(x, y)
    }
}

fn offset<const N: usize>(y: &[f64; N], scale: f64, k: &[f64; N]) -> [f64; N] {
    std::array::from_fn(|idx| y[idx] + scale * k[idx])
}

/// Classical four-stage, fourth-order Runge-Kutta stepper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rk4Stepper;

impl Rk4Stepper {
    /// Advances `y` from `x` to `x + h`.
    pub fn step<R, const N: usize>(&self, rhs: &R, x: f64, y: &[f64; N], h: f64) -> [f64; N]
    where
        R: RightHandSide<N> + ?Sized,
    {
        let half = 0.5 * h;
        let k1 = rhs.derivative(x, y);
        let k2 = rhs.derivative(x + half, &offset(y, half, &k1));
        let k3 = rhs.derivative(x + half, &offset(y, half, &k2));
        let k4 = rhs.derivative(x + h, &offset(y, h, &k3));
        std::array::from_fn(|idx| {
            y[idx] + (h / 6.0) * (k1[idx] + 2.0 * k2[idx] + 2.0 * k3[idx] + k4[idx])
        })
    }
}

/// States visited by a fixed-step integration, including the initial one.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory<const N: usize> {
    /// Abscissae `x0 + i h`.
    pub xs: Vec<f64>,
    /// State at each abscissa.
    pub states: Vec<[f64; N]>,
}

impl<const N: usize> Trajectory<N> {
    /// Final state of the run.
    pub fn last(&self) -> Option<&[f64; N]> {
        self.states.last()
    }

    /// Values of one state component across the run.
    pub fn component(&self, idx: usize) -> Vec<f64> {
        self.states.iter().map(|state| state[idx]).collect()
    }

    /// Number of recorded states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns true when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// Takes `steps` uniform RK4 steps of size `h` from `(x0, y0)`.
///
/// The returned trajectory holds `steps + 1` states.
pub fn integrate<R, const N: usize>(
    rhs: &R,
    x0: f64,
    y0: [f64; N],
    h: f64,
    steps: usize,
) -> Result<Trajectory<N>, IrsError>
where
    R: RightHandSide<N> + ?Sized,
{
    require_finite("x0", x0)?;
    require_finite("h", h)?;
    if y0.iter().any(|value| !value.is_finite()) {
        return Err(IrsError::Config(ErrorInfo::new(
            "non-finite-state",
            "initial state must be finite",
        )));
    }
    let stepper = Rk4Stepper;
    let mut xs = Vec::with_capacity(steps + 1);
    let mut states = Vec::with_capacity(steps + 1);
    let mut y = y0;
    xs.push(x0);
    states.push(y);
    for idx in 0..steps {
        let x = x0 + idx as f64 * h;
        y = stepper.step(rhs, x, &y, h);
        xs.push(x0 + (idx + 1) as f64 * h);
        states.push(y);
    }
    Ok(Trajectory { xs, states })
}
