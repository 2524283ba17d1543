use irs_core::errors::{ErrorInfo, IrsError};
use irs_core::require_finite;
use serde::{Deserialize, Serialize};

use crate::welch::SpectralCoherence;

fn default_lo() -> f64 {
    5.0
}

fn default_hi() -> f64 {
    15.0
}

/// Inclusive frequency band in Hz.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Band {
    /// Lower edge in Hz.
    #[serde(default = "default_lo")]
    pub lo: f64,
    /// Upper edge in Hz.
    #[serde(default = "default_hi")]
    pub hi: f64,
}

impl Default for Band {
    fn default() -> Self {
        Self {
            lo: default_lo(),
            hi: default_hi(),
        }
    }
}

impl Band {
    /// Creates a validated band.
    pub fn new(lo: f64, hi: f64) -> Result<Self, IrsError> {
        let band = Self { lo, hi };
        band.validate()?;
        Ok(band)
    }

    /// Rejects non-finite or inverted edges.
    pub fn validate(&self) -> Result<(), IrsError> {
        require_finite("band.lo", self.lo)?;
        require_finite("band.hi", self.hi)?;
        if self.lo > self.hi {
            return Err(IrsError::Config(
                ErrorInfo::new("inverted-band", "band lower edge exceeds upper edge")
                    .with_context("lo", self.lo.to_string())
                    .with_context("hi", self.hi.to_string()),
            ));
        }
        Ok(())
    }

    /// Returns true when `freq` lies within the band, edges included.
    pub fn contains(&self, freq: f64) -> bool {
        freq >= self.lo && freq <= self.hi
    }
}

/// Band-averaged coherence.
///
/// `value` is NaN when the band selected no bins; check [`CoherenceMetric::is_defined`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CoherenceMetric {
    /// Band the average was taken over.
    pub band: Band,
    /// Mean coherence over the selected bins.
    pub value: f64,
    /// Number of bins that fell inside the band.
    pub bins: usize,
}

impl CoherenceMetric {
    /// Returns false when no bins fell in the band.
    pub fn is_defined(&self) -> bool {
        self.bins > 0 && self.value.is_finite()
    }

    /// The value as an option, `None` when undefined.
    pub fn defined_value(&self) -> Option<f64> {
        self.is_defined().then_some(self.value)
    }

    /// Value rounded to `decimals` places; `None` when undefined.
    pub fn rounded(&self, decimals: i32) -> Option<f64> {
        let scale = 10f64.powi(decimals);
        self.defined_value().map(|value| (value * scale).round() / scale)
    }
}

/// Arithmetic mean of the coherence bins whose frequency lies in `band`.
pub fn band_average(spectrum: &SpectralCoherence, band: &Band) -> CoherenceMetric {
    let (sum, bins) = spectrum
        .iter()
        .filter(|(freq, _)| band.contains(*freq))
        .fold((0.0, 0usize), |(sum, count), (_, value)| (sum + value, count + 1));
    let value = if bins == 0 {
        tracing::warn!(lo = band.lo, hi = band.hi, "band selected no coherence bins");
        f64::NAN
    } else {
        sum / bins as f64
    };
    CoherenceMetric {
        band: *band,
        value,
        bins,
    }
}
