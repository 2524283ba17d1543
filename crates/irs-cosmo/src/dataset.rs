use irs_core::errors::{ErrorInfo, IrsError};
use irs_core::{require_non_negative, require_positive};
use serde::{Deserialize, Serialize};

/// Cosmic-chronometer H(z) points as `(z, H [km/s/Mpc], sigma_H)`.
const COSMIC_CHRONOMETERS: [(f64, f64, f64); 10] = [
    (0.07, 69.0, 19.6),
    (0.12, 68.6, 26.2),
    (0.17, 83.0, 8.0),
    (0.20, 72.9, 29.6),
    (0.27, 77.0, 14.0),
    (0.28, 88.8, 36.6),
    (0.40, 95.0, 17.0),
    (0.43, 86.5, 3.7),
    (0.48, 97.0, 62.0),
    (0.88, 90.0, 40.0),
];

fn default_h0() -> f64 {
    67.4
}

fn default_omega_b() -> f64 {
    0.049
}

/// Background cosmology used to normalise H(z).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CosmologyParams {
    /// Hubble constant in km/s/Mpc.
    #[serde(default = "default_h0")]
    pub h0: f64,
    /// Baryon density parameter today.
    #[serde(default = "default_omega_b")]
    pub omega_b: f64,
}

impl Default for CosmologyParams {
    fn default() -> Self {
        Self {
            h0: default_h0(),
            omega_b: default_omega_b(),
        }
    }
}

impl CosmologyParams {
    /// Creates validated parameters.
    pub fn new(h0: f64, omega_b: f64) -> Result<Self, IrsError> {
        let params = Self { h0, omega_b };
        params.validate()?;
        Ok(params)
    }

    /// Requires `h0 > 0` and `omega_b` in `[0, 1]`.
    pub fn validate(&self) -> Result<(), IrsError> {
        require_positive("h0", self.h0)?;
        require_non_negative("omega_b", self.omega_b)?;
        if self.omega_b > 1.0 {
            return Err(IrsError::Config(
                ErrorInfo::new("omega-out-of-range", "omega_b must lie in [0, 1]")
                    .with_context("omega_b", self.omega_b.to_string()),
            ));
        }
        Ok(())
    }
}

/// A single H(z) measurement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ObservationPoint {
    /// Redshift.
    pub z: f64,
    /// Observed expansion rate in km/s/Mpc.
    #[serde(rename = "H")]
    pub h: f64,
    /// One-sigma uncertainty on `h`.
    #[serde(rename = "sigma_H")]
    pub sigma_h: f64,
}

impl ObservationPoint {
    /// Requires `z >= 0`, `h > 0` and `sigma_h >= 0`.
    pub fn validate(&self) -> Result<(), IrsError> {
        require_non_negative("z", self.z)?;
        require_positive("H", self.h)?;
        require_non_negative("sigma_H", self.sigma_h)?;
        Ok(())
    }
}

/// Validated observations ordered by ascending redshift.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ObservationSet {
    points: Vec<ObservationPoint>,
}

impl ObservationSet {
    /// The built-in ten-point cosmic-chronometer dataset.
    pub fn cosmic_chronometers() -> Self {
        let mut points: Vec<ObservationPoint> = COSMIC_CHRONOMETERS
            .iter()
            .map(|&(z, h, sigma_h)| ObservationPoint { z, h, sigma_h })
            .collect();
        points.sort_by(|a, b| a.z.total_cmp(&b.z));
        Self { points }
    }

    /// Validates every point and sorts by redshift. Equal redshifts keep input order.
    pub fn from_points(mut points: Vec<ObservationPoint>) -> Result<Self, IrsError> {
        if points.is_empty() {
            return Err(IrsError::Config(ErrorInfo::new(
                "empty-dataset",
                "an observation set needs at least one point",
            )));
        }
        for (idx, point) in points.iter().enumerate() {
            point.validate().map_err(|err| match err {
                IrsError::Config(info) => {
                    IrsError::Config(info.with_context("row", idx.to_string()))
                }
                other => other,
            })?;
        }
        points.sort_by(|a, b| a.z.total_cmp(&b.z));
        Ok(Self { points })
    }

    /// Points in ascending redshift order.
    pub fn points(&self) -> &[ObservationPoint] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Default for ObservationSet {
    fn default() -> Self {
        Self::cosmic_chronometers()
    }
}
