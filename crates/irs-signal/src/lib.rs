//! Two-channel signal synthesis and Welch coherence estimation.

pub mod metric;
pub mod report;
pub mod synth;
pub mod welch;
pub mod window;

pub use metric::{band_average, Band, CoherenceMetric};
pub use report::{CoherenceArtifact, DEFAULT_METRIC_NAME};
pub use synth::{synthesize, SignalPair, SynthSpec, TimeSeries};
pub use welch::{coherence, welch_densities, SpectralCoherence, SpectralDensities, WelchSpec};
pub use window::{detrend_constant, hann_periodic};
