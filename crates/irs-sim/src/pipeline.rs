//! Explicit wiring of the numerical components into runnable pipelines.

use irs_core::errors::IrsError;
use irs_core::rng::RngHandle;
use irs_cosmo::{
    calibrate_alpha, decompose, integrate_irs_flrw, linspace, rotation_curve_dimless,
    DecomposedPoint, DensityReading, FlrwTrajectory, ObservationSet, RotationCurve,
};
use irs_signal::{
    band_average, coherence, synthesize, CoherenceArtifact, CoherenceMetric, SpectralCoherence,
};
use serde::Serialize;

use crate::config::{CoherenceConfig, DimlessGalaxyConfig, FlrwConfig, PhysicalGalaxyConfig};
use crate::PipelineConfig;

/// Substream of the master seed reserved for signal noise.
pub const COHERENCE_SUBSTREAM: u64 = 1;

/// Result of the synthesizer to coherence pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct CoherenceOutcome {
    /// Full one-sided coherence spectrum.
    pub spectrum: SpectralCoherence,
    /// Band-averaged metric.
    pub metric: CoherenceMetric,
    /// Persistable summary.
    pub artifact: CoherenceArtifact,
}

/// Synthesizes the channel pair from `seed`'s coherence substream and reduces it to a band metric.
pub fn run_coherence(
    config: &CoherenceConfig,
    seed: u64,
    date: &str,
) -> Result<CoherenceOutcome, IrsError> {
    let mut rng = RngHandle::substream(seed, COHERENCE_SUBSTREAM);
    let pair = synthesize(&config.synth, &mut rng)?;
    let spectrum = coherence(&pair.a, &pair.b, &config.welch)?;
    let metric = band_average(&spectrum, &config.band);
    let artifact = CoherenceArtifact::new(
        date,
        &metric,
        pair.a.sample_rate(),
        config.synth.duration,
        config.note.clone(),
    );
    tracing::info!(
        value = ?metric.defined_value(),
        bins = metric.bins,
        lo = metric.band.lo,
        hi = metric.band.hi,
        "coherence pipeline finished"
    );
    Ok(CoherenceOutcome {
        spectrum,
        metric,
        artifact,
    })
}

/// Decomposes an observation set under the configured cosmology.
pub fn run_hz(
    observations: &ObservationSet,
    config: &PipelineConfig,
) -> Result<Vec<DecomposedPoint>, IrsError> {
    let rows = decompose(observations, &config.cosmology)?;
    tracing::info!(points = rows.len(), h0 = config.cosmology.h0, "decomposed H(z) dataset");
    Ok(rows)
}

/// Evaluates the dimensionless rotation curve on its configured grid.
pub fn run_galaxy_dimless(config: &DimlessGalaxyConfig) -> Result<RotationCurve, IrsError> {
    let grid = &config.grid;
    let radii = linspace(grid.r_min, grid.r_max, grid.n_points)?;
    rotation_curve_dimless(&radii, &config.params)
}

/// Calibrated physical galaxy and its tabulated curve.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PhysicalGalaxyOutcome {
    /// Calibrated extra-mass strength in M_sun / kpc.
    pub alpha: f64,
    /// Calibration radius in kpc.
    pub r0: f64,
    /// Target velocity in km/s.
    pub v_target: f64,
    /// Extra-term density at `r0`.
    pub density_at_r0: DensityReading,
    /// Tabulated curve.
    pub curve: RotationCurve,
}

/// Calibrates alpha and evaluates the physical rotation curve.
pub fn run_galaxy_physical(
    config: &PhysicalGalaxyConfig,
) -> Result<PhysicalGalaxyOutcome, IrsError> {
    let galaxy = calibrate_alpha(&config.params)?;
    let grid = &config.grid;
    let radii = linspace(grid.r_min, grid.r_max, grid.n_points)?;
    let curve = galaxy.rotation_curve(&radii)?;
    let density_at_r0 = galaxy.extra_density(config.params.r0)?;
    tracing::info!(
        alpha = galaxy.alpha(),
        rho_kpc3 = density_at_r0.per_kpc3,
        "calibrated physical galaxy"
    );
    Ok(PhysicalGalaxyOutcome {
        alpha: galaxy.alpha(),
        r0: config.params.r0,
        v_target: config.params.v_target,
        density_at_r0,
        curve,
    })
}

/// Integrates the toy scale-factor model.
pub fn run_flrw(config: &FlrwConfig) -> Result<FlrwTrajectory, IrsError> {
    let trajectory = integrate_irs_flrw(&config.params, &config.run)?;
    if trajectory.degenerate_points > 0 {
        tracing::warn!(
            points = trajectory.degenerate_points,
            "scale factor reached the degenerate regime"
        );
    }
    Ok(trajectory)
}
