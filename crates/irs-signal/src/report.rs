use serde::{Deserialize, Serialize};

use crate::metric::CoherenceMetric;

/// Metric name recorded in coherence artefacts.
pub const DEFAULT_METRIC_NAME: &str = "phi_coherence";

/// Persistable summary of a coherence run.
///
/// The serialized object carries exactly the keys `date`, `metric`,
/// `band_hz`, `value`, `fs`, `duration_s` and `note`. `value` is rounded to
/// three decimals and is `null` when the band average is undefined.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoherenceArtifact {
    /// Calendar date of the run (`YYYY-MM-DD`).
    pub date: String,
    /// Metric name.
    pub metric: String,
    /// Inclusive band edges in Hz.
    pub band_hz: [f64; 2],
    /// Rounded band-averaged coherence.
    pub value: Option<f64>,
    /// Sample rate in Hz.
    pub fs: f64,
    /// Series duration in seconds.
    pub duration_s: f64,
    /// Free-text note.
    pub note: String,
}

impl CoherenceArtifact {
    /// Builds the record for a band metric computed on a series of the given shape.
    pub fn new(
        date: impl Into<String>,
        metric: &CoherenceMetric,
        fs: f64,
        duration_s: f64,
        note: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            metric: DEFAULT_METRIC_NAME.to_string(),
            band_hz: [metric.band.lo, metric.band.hi],
            value: metric.rounded(3),
            fs,
            duration_s,
            note: note.into(),
        }
    }

    /// Title line used by renderers, e.g. `phi_coherence (5-15 Hz): 0.873`.
    pub fn title(&self) -> String {
        let value = self
            .value
            .map(|value| format!("{value:.3}"))
            .unwrap_or_else(|| "nan".to_string());
        format!(
            "{} ({}-{} Hz): {}",
            self.metric, self.band_hz[0], self.band_hz[1], value
        )
    }
}
