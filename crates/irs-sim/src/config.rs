use std::fs;
use std::path::Path;

use irs_core::errors::{ErrorInfo, IrsError};
use irs_core::{require_positive, stable_hash_string};
use irs_cosmo::{
    CosmologyParams, FlrwRun, GalaxyParamsDimless, GalaxyParamsPhysical, IrsFlrwParams,
};
use irs_signal::{Band, SynthSpec, WelchSpec};
use serde::{Deserialize, Serialize};

fn default_seed() -> u64 {
    2024
}

fn default_note() -> String {
    "two-tone synthetic pair, Welch magnitude-squared coherence".to_string()
}

fn default_plot_max_hz() -> f64 {
    60.0
}

/// Coherence pipeline settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoherenceConfig {
    /// Signal generator parameters.
    #[serde(default)]
    pub synth: SynthSpec,
    /// Welch segmentation.
    #[serde(default)]
    pub welch: WelchSpec,
    /// Band the metric is averaged over.
    #[serde(default)]
    pub band: Band,
    /// Note stored in the artefact.
    #[serde(default = "default_note")]
    pub note: String,
    /// Upper frequency of the exported spectrum.
    #[serde(default = "default_plot_max_hz")]
    pub plot_max_hz: f64,
}

impl Default for CoherenceConfig {
    fn default() -> Self {
        Self {
            synth: SynthSpec::default(),
            welch: WelchSpec::default(),
            band: Band::default(),
            note: default_note(),
            plot_max_hz: default_plot_max_hz(),
        }
    }
}

/// A radius grid `linspace(r_min, r_max, n_points)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RadiusGrid {
    /// Innermost radius.
    pub r_min: f64,
    /// Outermost radius.
    pub r_max: f64,
    /// Number of radii.
    pub n_points: usize,
}

impl RadiusGrid {
    fn validate(&self) -> Result<(), IrsError> {
        require_positive("r_min", self.r_min)?;
        require_positive("r_max", self.r_max)?;
        if self.r_min > self.r_max || self.n_points == 0 {
            return Err(IrsError::Config(
                ErrorInfo::new("bad-radius-grid", "radius grid must be non-empty and increasing")
                    .with_context("r_min", self.r_min.to_string())
                    .with_context("r_max", self.r_max.to_string())
                    .with_context("n_points", self.n_points.to_string()),
            ));
        }
        Ok(())
    }
}

fn dimless_grid() -> RadiusGrid {
    RadiusGrid {
        r_min: 0.5,
        r_max: 25.0,
        n_points: 200,
    }
}

fn physical_grid() -> RadiusGrid {
    RadiusGrid {
        r_min: 1.0,
        r_max: 30.0,
        n_points: 15,
    }
}

/// Dimensionless galaxy pipeline settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DimlessGalaxyConfig {
    /// Model parameters.
    #[serde(default)]
    pub params: GalaxyParamsDimless,
    /// Radii to evaluate.
    #[serde(default = "dimless_grid")]
    pub grid: RadiusGrid,
}

impl Default for DimlessGalaxyConfig {
    fn default() -> Self {
        Self {
            params: GalaxyParamsDimless::default(),
            grid: dimless_grid(),
        }
    }
}

/// Physical galaxy pipeline settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhysicalGalaxyConfig {
    /// Model parameters; alpha is calibrated, never configured.
    #[serde(default)]
    pub params: GalaxyParamsPhysical,
    /// Radii to tabulate.
    #[serde(default = "physical_grid")]
    pub grid: RadiusGrid,
}

impl Default for PhysicalGalaxyConfig {
    fn default() -> Self {
        Self {
            params: GalaxyParamsPhysical::default(),
            grid: physical_grid(),
        }
    }
}

/// Toy FLRW pipeline settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FlrwConfig {
    /// Density parameters.
    #[serde(default)]
    pub params: IrsFlrwParams,
    /// Grid and initial conditions.
    #[serde(default)]
    pub run: FlrwRun,
}

/// Settings for every pipeline, loadable from YAML. Missing sections take defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipelineConfig {
    /// Master seed; pipelines derive their own substreams from it.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Coherence pipeline.
    #[serde(default)]
    pub coherence: CoherenceConfig,
    /// H(z) decomposition cosmology.
    #[serde(default)]
    pub cosmology: CosmologyParams,
    /// Dimensionless rotation curves.
    #[serde(default)]
    pub galaxy_dimless: DimlessGalaxyConfig,
    /// Physical rotation curves.
    #[serde(default)]
    pub galaxy_physical: PhysicalGalaxyConfig,
    /// Toy scale-factor integration.
    #[serde(default)]
    pub flrw: FlrwConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            coherence: CoherenceConfig::default(),
            cosmology: CosmologyParams::default(),
            galaxy_dimless: DimlessGalaxyConfig::default(),
            galaxy_physical: PhysicalGalaxyConfig::default(),
            flrw: FlrwConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Parses YAML text and validates every section.
    pub fn from_yaml_str(text: &str) -> Result<Self, IrsError> {
        let config: PipelineConfig = serde_yaml::from_str(text)
            .map_err(|err| IrsError::Serde(ErrorInfo::new("yaml-read", err.to_string())))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a YAML file.
    pub fn load(path: &Path) -> Result<Self, IrsError> {
        let text = fs::read_to_string(path).map_err(|err| {
            IrsError::Io(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        Self::from_yaml_str(&text)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, IrsError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Checks every section without running anything.
    pub fn validate(&self) -> Result<(), IrsError> {
        let coherence = &self.coherence;
        coherence.synth.validate()?;
        coherence.welch.validate(coherence.synth.sample_count())?;
        coherence.band.validate()?;
        require_positive("plot_max_hz", coherence.plot_max_hz)?;
        self.cosmology.validate()?;
        self.galaxy_dimless.params.validate()?;
        self.galaxy_dimless.grid.validate()?;
        self.galaxy_physical.params.validate()?;
        self.galaxy_physical.grid.validate()?;
        self.flrw.params.validate()?;
        self.flrw.run.validate()?;
        Ok(())
    }

    /// Stable hash recorded in artefact provenance.
    pub fn input_hash(&self) -> Result<String, IrsError> {
        stable_hash_string(self)
    }
}
