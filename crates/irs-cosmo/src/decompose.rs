use irs_core::errors::IrsError;
use serde::{Deserialize, Serialize};

use crate::dataset::{CosmologyParams, ObservationSet};

/// Dimensionless split of one H(z) point into baryonic and extra terms.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DecomposedPoint {
    /// Redshift.
    pub z: f64,
    /// Observed expansion rate.
    #[serde(rename = "H")]
    pub h: f64,
    /// Uncertainty on the observed rate.
    #[serde(rename = "sigma_H")]
    pub sigma_h: f64,
    /// `H / H0`.
    #[serde(rename = "E_z")]
    pub e_z: f64,
    /// `E_z^2`.
    #[serde(rename = "E_z2")]
    pub e_z2: f64,
    /// `Omega_b (1 + z)^3`.
    #[serde(rename = "Omega_b_term")]
    pub omega_b_term: f64,
    /// `E_z2 - Omega_b_term`, exactly.
    #[serde(rename = "Omega_extra")]
    pub omega_extra: f64,
}

/// Decomposes every observation, preserving dataset order.
pub fn decompose(
    observations: &ObservationSet,
    cosmo: &CosmologyParams,
) -> Result<Vec<DecomposedPoint>, IrsError> {
    cosmo.validate()?;
    Ok(observations
        .points()
        .iter()
        .map(|point| {
            let e_z = point.h / cosmo.h0;
            let e_z2 = e_z * e_z;
            let omega_b_term = cosmo.omega_b * (1.0 + point.z).powi(3);
            DecomposedPoint {
                z: point.z,
                h: point.h,
                sigma_h: point.sigma_h,
                e_z,
                e_z2,
                omega_b_term,
                omega_extra: e_z2 - omega_b_term,
            }
        })
        .collect())
}
