use std::f64::consts::PI;

use irs_core::errors::IrsError;
use serde::{Deserialize, Serialize};

use crate::rotation::{check_radius, evaluate_curve, GalaxyParamsPhysical, RotationCurve};

const PC3_PER_KPC3: f64 = 1e9;

/// A physical galaxy paired with the alpha that reproduces its target velocity.
///
/// Only [`calibrate_alpha`] can build one, so `alpha` always matches `params`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct CalibratedGalaxy {
    params: GalaxyParamsPhysical,
    alpha: f64,
}

/// Extra-term density at one radius.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DensityReading {
    /// Radius in kpc.
    pub r: f64,
    /// Density in M_sun / kpc^3.
    pub per_kpc3: f64,
    /// Density in M_sun / pc^3.
    pub per_pc3: f64,
}

/// Solves `v_target^2 = G (M_b(r0) + alpha r0) / r0` for alpha.
///
/// The solution `alpha = (v_target^2 r0 / G - M_b(r0)) / r0` is exact. A
/// negative alpha is returned as-is when baryons alone exceed the target.
pub fn calibrate_alpha(params: &GalaxyParamsPhysical) -> Result<CalibratedGalaxy, IrsError> {
    params.validate()?;
    let r0 = params.r0;
    let mb_r0 = params.baryonic_mass(r0);
    let alpha = (params.v_target * params.v_target * r0 / params.g - mb_r0) / r0;
    tracing::debug!(alpha, r0, mb_r0, "calibrated extra-mass strength");
    Ok(CalibratedGalaxy {
        params: *params,
        alpha,
    })
}

/// `rho(r) = alpha / (4 pi r^2)`, defined for `r > 0` only.
pub fn informational_density(radius: f64, alpha: f64) -> Result<f64, IrsError> {
    let r = check_radius(radius)?;
    Ok(alpha / (4.0 * PI * r * r))
}

impl CalibratedGalaxy {
    /// Calibrated extra-mass strength in M_sun / kpc.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Parameters the calibration was solved for.
    pub fn params(&self) -> &GalaxyParamsPhysical {
        &self.params
    }

    /// Rotation curve with the calibrated extra-mass term.
    pub fn rotation_curve(&self, radii: &[f64]) -> Result<RotationCurve, IrsError> {
        let p = &self.params;
        evaluate_curve(radii, p.g, p.m0, p.r_d, self.alpha)
    }

    /// Total circular velocity at a single radius.
    pub fn velocity_at(&self, radius: f64) -> Result<f64, IrsError> {
        let curve = self.rotation_curve(&[radius])?;
        Ok(curve.v_total[0])
    }

    /// Extra-term density at `radius` in both kpc and pc volume units.
    pub fn extra_density(&self, radius: f64) -> Result<DensityReading, IrsError> {
        let per_kpc3 = informational_density(radius, self.alpha)?;
        Ok(DensityReading {
            r: radius,
            per_kpc3,
            per_pc3: per_kpc3 / PC3_PER_KPC3,
        })
    }
}
