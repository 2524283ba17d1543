//! Cosmology and galaxy-dynamics toy models.
//!
//! Every function here is pure: parameters come in as validated value
//! structs and results go out as new values.

pub mod calibrate;
pub mod dataset;
pub mod decompose;
pub mod flrw;
pub mod grid;
pub mod ode;
pub mod rotation;

pub use calibrate::{calibrate_alpha, informational_density, CalibratedGalaxy, DensityReading};
pub use dataset::{CosmologyParams, ObservationPoint, ObservationSet};
pub use decompose::{decompose, DecomposedPoint};
pub use flrw::{integrate_irs_flrw, FlrwRun, FlrwTrajectory, IrsFlrwModel, IrsFlrwParams, RateTarget};
pub use grid::linspace;
pub use ode::{integrate, RightHandSide, Rk4Stepper, Trajectory};
pub use rotation::{
    baryonic_mass, rotation_curve_dimless, GalaxyParamsDimless, GalaxyParamsPhysical,
    RotationCurve, RotationSample,
};
