//! Schematic "IRS-FLRW" scale-factor toy.
//!
//! This is a relaxation of `A'` toward a target rate built from the density
//! parameters. It is not derived from any field equations and should be read
//! as an opaque toy transform.

use irs_core::errors::{ErrorInfo, IrsError};
use irs_core::{require_finite, require_non_negative, require_positive};
use serde::{Deserialize, Serialize};

use crate::grid::linspace;
use crate::ode::{integrate, RightHandSide};

fn default_omega_b() -> f64 {
    0.049
}

fn default_omega_i0() -> f64 {
    0.25
}

fn default_omega_phi0() -> f64 {
    0.70
}

fn default_h0() -> f64 {
    67.4
}

/// Density parameters of the toy model.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct IrsFlrwParams {
    /// Baryon density parameter.
    #[serde(default = "default_omega_b")]
    pub omega_b: f64,
    /// Informational component today.
    #[serde(default = "default_omega_i0")]
    pub omega_i0: f64,
    /// Phase component today.
    #[serde(default = "default_omega_phi0")]
    pub omega_phi0: f64,
    /// Hubble constant, carried as a scale only.
    #[serde(default = "default_h0")]
    pub h0: f64,
}

impl Default for IrsFlrwParams {
    fn default() -> Self {
        Self {
            omega_b: default_omega_b(),
            omega_i0: default_omega_i0(),
            omega_phi0: default_omega_phi0(),
            h0: default_h0(),
        }
    }
}

impl IrsFlrwParams {
    /// `omega_b` in `[0, 1]`, finite non-baryonic terms and `h0 > 0`.
    ///
    /// The non-baryonic terms may be negative; the right-hand side clamps
    /// the resulting radicand.
    pub fn validate(&self) -> Result<(), IrsError> {
        require_non_negative("omega_b", self.omega_b)?;
        if self.omega_b > 1.0 {
            return Err(IrsError::Config(
                ErrorInfo::new("omega-out-of-range", "omega_b must lie in [0, 1]")
                    .with_context("omega_b", self.omega_b.to_string()),
            ));
        }
        require_finite("omega_i0", self.omega_i0)?;
        require_finite("omega_phi0", self.omega_phi0)?;
        require_positive("h0", self.h0)?;
        Ok(())
    }

    /// `omega_b + omega_i0 + omega_phi0`.
    pub fn omega_total(&self) -> f64 {
        self.omega_b + self.omega_i0 + self.omega_phi0
    }
}

/// Intermediate quantities behind one evaluation of the right-hand side.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RateTarget {
    /// `omega_b / A^3 + (omega_total - omega_b)`.
    pub effective_e2: f64,
    /// `A^2 * effective_e2` before clamping.
    pub radicand: f64,
    /// True when the radicand was negative and clamped to zero.
    pub clamped: bool,
    /// `sign(A') * sqrt(max(radicand, 0))`.
    pub target_rate: f64,
}

/// Right-hand side for the state `(A, dA/dlambda)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IrsFlrwModel {
    params: IrsFlrwParams,
}

impl IrsFlrwModel {
    /// Wraps validated parameters.
    pub fn new(params: IrsFlrwParams) -> Result<Self, IrsError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Parameters driving the model.
    pub fn params(&self) -> &IrsFlrwParams {
        &self.params
    }

    /// Target rate for a state, or `None` when `A <= 0` (degenerate, frozen).
    pub fn rate_target(&self, a: f64, adot: f64) -> Option<RateTarget> {
        if a <= 0.0 {
            return None;
        }
        let p = &self.params;
        let effective_e2 = p.omega_b / a.powi(3) + (p.omega_total() - p.omega_b);
        let radicand = a * a * effective_e2;
        let clamped = radicand < 0.0;
        // sign(0) is +1 so a state at rest starts expanding.
        let sign = if adot >= 0.0 { 1.0 } else { -1.0 };
        Some(RateTarget {
            effective_e2,
            radicand,
            clamped,
            target_rate: sign * radicand.max(0.0).sqrt(),
        })
    }
}

impl RightHandSide<2> for IrsFlrwModel {
    fn derivative(&self, _lambda: f64, y: &[f64; 2]) -> [f64; 2] {
        let [a, adot] = *y;
        match self.rate_target(a, adot) {
            Some(target) => [adot, target.target_rate - adot],
            None => {
                tracing::trace!(a, "degenerate scale factor, freezing acceleration");
                [adot, 0.0]
            }
        }
    }
}

fn default_lambda_end() -> f64 {
    5.0
}

fn default_points() -> usize {
    1000
}

fn default_a0() -> f64 {
    0.1
}

fn default_adot0() -> f64 {
    0.01
}

/// Grid and initial conditions for [`integrate_irs_flrw`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FlrwRun {
    /// First grid value of lambda.
    #[serde(default)]
    pub lambda_start: f64,
    /// Last grid value of lambda.
    #[serde(default = "default_lambda_end")]
    pub lambda_end: f64,
    /// Number of grid points, at least two.
    #[serde(default = "default_points")]
    pub n_points: usize,
    /// Initial scale factor.
    #[serde(default = "default_a0")]
    pub a0: f64,
    /// Initial rate `dA/dlambda`.
    #[serde(default = "default_adot0")]
    pub adot0: f64,
}

impl Default for FlrwRun {
    fn default() -> Self {
        Self {
            lambda_start: 0.0,
            lambda_end: default_lambda_end(),
            n_points: default_points(),
            a0: default_a0(),
            adot0: default_adot0(),
        }
    }
}

impl FlrwRun {
    /// Requires an increasing lambda range, at least two points and a finite initial state.
    pub fn validate(&self) -> Result<(), IrsError> {
        require_finite("lambda_start", self.lambda_start)?;
        require_finite("lambda_end", self.lambda_end)?;
        require_finite("a0", self.a0)?;
        require_finite("adot0", self.adot0)?;
        if self.n_points < 2 {
            return Err(IrsError::Config(
                ErrorInfo::new("grid-too-small", "the lambda grid needs at least two points")
                    .with_context("n_points", self.n_points.to_string()),
            ));
        }
        if self.lambda_end <= self.lambda_start {
            return Err(IrsError::Config(
                ErrorInfo::new("empty-range", "lambda_end must exceed lambda_start")
                    .with_context("lambda_start", self.lambda_start.to_string())
                    .with_context("lambda_end", self.lambda_end.to_string()),
            ));
        }
        Ok(())
    }
}

/// Scale factor history on the lambda grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlrwTrajectory {
    /// Grid values.
    pub lambda: Vec<f64>,
    /// Scale factor at each grid value.
    pub a: Vec<f64>,
    /// Rate `dA/dlambda` at each grid value.
    pub adot: Vec<f64>,
    /// Number of recorded states with `A <= 0`.
    pub degenerate_points: usize,
}

/// Integrates the toy model over `run`'s grid with RK4.
///
/// The step is the grid spacing; the state is recorded at every grid point,
/// starting with the initial conditions.
pub fn integrate_irs_flrw(
    params: &IrsFlrwParams,
    run: &FlrwRun,
) -> Result<FlrwTrajectory, IrsError> {
    run.validate()?;
    let model = IrsFlrwModel::new(*params)?;
    let lambda = linspace(run.lambda_start, run.lambda_end, run.n_points)?;
    let h = lambda[1] - lambda[0];
    let trajectory = integrate(
        &model,
        run.lambda_start,
        [run.a0, run.adot0],
        h,
        run.n_points - 1,
    )?;
    let a = trajectory.component(0);
    let adot = trajectory.component(1);
    let degenerate_points = a.iter().filter(|value| **value <= 0.0).count();
    tracing::debug!(
        points = run.n_points,
        h,
        degenerate_points,
        "integrated toy scale factor"
    );
    Ok(FlrwTrajectory {
        lambda,
        a,
        adot,
        degenerate_points,
    })
}
