use irs_core::errors::{ErrorInfo, IrsError};
use irs_core::{require_non_negative, require_positive};
use serde::{Deserialize, Serialize};

pub(crate) fn domain_error(code: &str, message: impl Into<String>, radius: f64) -> IrsError {
    IrsError::Domain(ErrorInfo::new(code, message).with_context("r", radius.to_string()))
}

/// Rejects radii where `1 / r` is undefined.
pub(crate) fn check_radius(radius: f64) -> Result<f64, IrsError> {
    if radius.is_finite() && radius > 0.0 {
        Ok(radius)
    } else {
        Err(domain_error(
            "non-positive-radius",
            "radius must be finite and strictly positive",
            radius,
        ))
    }
}

/// Enclosed mass of an exponential disk, `M0 (1 - exp(-r / r_d))`.
pub fn baryonic_mass(radius: f64, m0: f64, r_d: f64) -> f64 {
    m0 * (1.0 - (-radius / r_d).exp())
}

fn default_dimless_g() -> f64 {
    1.0
}

fn default_dimless_m0() -> f64 {
    1.0
}

fn default_r_d() -> f64 {
    3.0
}

fn default_dimless_alpha() -> f64 {
    0.15
}

/// Dimensionless galaxy: toy units with `G = M0 = 1` by default.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GalaxyParamsDimless {
    /// Gravitational constant.
    #[serde(default = "default_dimless_g")]
    pub g: f64,
    /// Baryonic mass scale.
    #[serde(default = "default_dimless_m0")]
    pub m0: f64,
    /// Disk scale length.
    #[serde(default = "default_r_d")]
    pub r_d: f64,
    /// Strength of the extra mass term `M_extra = alpha * r`.
    #[serde(default = "default_dimless_alpha")]
    pub alpha: f64,
}

impl Default for GalaxyParamsDimless {
    fn default() -> Self {
        Self {
            g: default_dimless_g(),
            m0: default_dimless_m0(),
            r_d: default_r_d(),
            alpha: default_dimless_alpha(),
        }
    }
}

impl GalaxyParamsDimless {
    /// Requires `g > 0`, `r_d > 0`, `m0 >= 0` and `alpha >= 0`.
    pub fn validate(&self) -> Result<(), IrsError> {
        require_positive("g", self.g)?;
        require_non_negative("m0", self.m0)?;
        require_positive("r_d", self.r_d)?;
        require_non_negative("alpha", self.alpha)?;
        Ok(())
    }
}

fn default_physical_g() -> f64 {
    4.302e-6
}

fn default_physical_m0() -> f64 {
    5e10
}

fn default_r0() -> f64 {
    10.0
}

fn default_v_target() -> f64 {
    220.0
}

/// Milky-Way-like galaxy in kpc, solar masses and km/s.
///
/// There is deliberately no `alpha` field: the extra-mass strength comes only
/// from [`crate::calibrate_alpha`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GalaxyParamsPhysical {
    /// Gravitational constant in kpc (km/s)^2 / M_sun.
    #[serde(default = "default_physical_g")]
    pub g: f64,
    /// Baryonic mass scale in M_sun.
    #[serde(default = "default_physical_m0")]
    pub m0: f64,
    /// Disk scale length in kpc.
    #[serde(default = "default_r_d")]
    pub r_d: f64,
    /// Calibration radius in kpc.
    #[serde(default = "default_r0")]
    pub r0: f64,
    /// Circular velocity to match at `r0`, in km/s.
    #[serde(default = "default_v_target")]
    pub v_target: f64,
}

impl Default for GalaxyParamsPhysical {
    fn default() -> Self {
        Self {
            g: default_physical_g(),
            m0: default_physical_m0(),
            r_d: default_r_d(),
            r0: default_r0(),
            v_target: default_v_target(),
        }
    }
}

impl GalaxyParamsPhysical {
    /// Requires `g`, `r_d`, `r0` strictly positive and `m0`, `v_target` non-negative.
    pub fn validate(&self) -> Result<(), IrsError> {
        require_positive("g", self.g)?;
        require_non_negative("m0", self.m0)?;
        require_positive("r_d", self.r_d)?;
        require_positive("r0", self.r0)?;
        require_non_negative("v_target", self.v_target)?;
        Ok(())
    }

    /// Baryonic enclosed mass at `radius`.
    pub fn baryonic_mass(&self, radius: f64) -> f64 {
        baryonic_mass(radius, self.m0, self.r_d)
    }
}

/// One radius of a [`RotationCurve`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RotationSample {
    /// Radius.
    pub r: f64,
    /// Baryonic enclosed mass.
    pub m_baryon: f64,
    /// Extra enclosed mass.
    pub m_extra: f64,
    /// Circular velocity from baryons alone.
    pub v_baryon: f64,
    /// Circular velocity from baryons plus the extra term.
    pub v_total: f64,
}

/// Mass profiles and circular velocities over a set of radii.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RotationCurve {
    /// Sample radii, all strictly positive.
    pub radii: Vec<f64>,
    /// Baryonic enclosed mass per radius.
    pub m_baryon: Vec<f64>,
    /// Extra enclosed mass per radius.
    pub m_extra: Vec<f64>,
    /// Baryon-only circular velocity per radius.
    pub v_baryon: Vec<f64>,
    /// Total circular velocity per radius.
    pub v_total: Vec<f64>,
}

impl RotationCurve {
    /// Row view of the parallel sequences.
    pub fn samples(&self) -> impl Iterator<Item = RotationSample> + '_ {
        (0..self.radii.len()).map(move |idx| RotationSample {
            r: self.radii[idx],
            m_baryon: self.m_baryon[idx],
            m_extra: self.m_extra[idx],
            v_baryon: self.v_baryon[idx],
            v_total: self.v_total[idx],
        })
    }

    /// Number of radii.
    pub fn len(&self) -> usize {
        self.radii.len()
    }

    /// Returns true when the curve has no radii.
    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }

    fn push(&mut self, sample: RotationSample) {
        self.radii.push(sample.r);
        self.m_baryon.push(sample.m_baryon);
        self.m_extra.push(sample.m_extra);
        self.v_baryon.push(sample.v_baryon);
        self.v_total.push(sample.v_total);
    }
}

/// Shared evaluation for both galaxy variants.
pub(crate) fn evaluate_curve(
    radii: &[f64],
    g: f64,
    m0: f64,
    r_d: f64,
    alpha: f64,
) -> Result<RotationCurve, IrsError> {
    let mut curve = RotationCurve::default();
    for &r in radii {
        let r = check_radius(r)?;
        let m_baryon = baryonic_mass(r, m0, r_d);
        let m_extra = alpha * r;
        let m_total = m_baryon + m_extra;
        if m_total < 0.0 {
            return Err(IrsError::Domain(
                ErrorInfo::new(
                    "negative-enclosed-mass",
                    "total enclosed mass is negative at this radius",
                )
                .with_context("r", r.to_string())
                .with_context("alpha", alpha.to_string())
                .with_hint("a negative alpha only supports radii close to the calibration radius"),
            ));
        }
        curve.push(RotationSample {
            r,
            m_baryon,
            m_extra,
            v_baryon: (g * m_baryon / r).sqrt(),
            v_total: (g * m_total / r).sqrt(),
        });
    }
    Ok(curve)
}

/// Rotation curve of the dimensionless model.
pub fn rotation_curve_dimless(
    radii: &[f64],
    params: &GalaxyParamsDimless,
) -> Result<RotationCurve, IrsError> {
    params.validate()?;
    evaluate_curve(radii, params.g, params.m0, params.r_d, params.alpha)
}
