use irs_core::errors::{ErrorInfo, IrsError};
use num_complex::Complex64;
use rustfft::FftPlanner;
use serde::{Deserialize, Serialize};

use crate::synth::TimeSeries;
use crate::window::{detrend_constant, hann_periodic};

fn welch_error(code: &str, message: impl Into<String>) -> IrsError {
    IrsError::Config(ErrorInfo::new(code, message))
}

fn default_nperseg() -> usize {
    1000
}

/// Segmentation options for the Welch estimator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WelchSpec {
    /// Samples per segment.
    #[serde(default = "default_nperseg")]
    pub nperseg: usize,
    /// Samples shared by consecutive segments; `None` means half a segment.
    #[serde(default)]
    pub noverlap: Option<usize>,
}

impl Default for WelchSpec {
    fn default() -> Self {
        Self {
            nperseg: default_nperseg(),
            noverlap: None,
        }
    }
}

impl WelchSpec {
    /// Creates a spec with the default half-segment overlap.
    pub fn with_nperseg(nperseg: usize) -> Self {
        Self {
            nperseg,
            noverlap: None,
        }
    }

    /// Effective overlap in samples.
    pub fn overlap(&self) -> usize {
        self.noverlap.unwrap_or(self.nperseg / 2)
    }

    /// Number of segments that fit in `len` samples.
    pub fn segment_count(&self, len: usize) -> usize {
        let step = self.nperseg.saturating_sub(self.overlap());
        if step == 0 || len < self.nperseg {
            return 0;
        }
        (len - self.overlap()) / step
    }

    /// Validates the segmentation against a series length.
    pub fn validate(&self, len: usize) -> Result<(), IrsError> {
        if self.nperseg == 0 {
            return Err(welch_error(
                "empty-segment",
                "nperseg must be at least one sample",
            ));
        }
        if self.nperseg > len {
            return Err(IrsError::Config(
                ErrorInfo::new(
                    "segment-too-long",
                    "nperseg exceeds the number of samples in the series",
                )
                .with_context("nperseg", self.nperseg.to_string())
                .with_context("len", len.to_string())
                .with_hint("shorten the segment or lengthen the series"),
            ));
        }
        if self.overlap() >= self.nperseg {
            return Err(IrsError::Config(
                ErrorInfo::new("overlap-too-large", "noverlap must be less than nperseg")
                    .with_context("noverlap", self.overlap().to_string())
                    .with_context("nperseg", self.nperseg.to_string()),
            ));
        }
        Ok(())
    }
}

/// One-sided Welch auto and cross spectral densities of a channel pair.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralDensities {
    /// Bin centre frequencies in Hz.
    pub frequencies: Vec<f64>,
    /// Power spectral density of the first channel.
    pub pxx: Vec<f64>,
    /// Power spectral density of the second channel.
    pub pyy: Vec<f64>,
    /// Cross spectral density `conj(X) * Y`.
    pub pxy: Vec<Complex64>,
    /// Number of averaged segments.
    pub segments: usize,
}

/// Magnitude-squared coherence per frequency bin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpectralCoherence {
    /// Bin centre frequencies in Hz, `k * fs / nperseg`.
    pub frequencies: Vec<f64>,
    /// Coherence in `[0, 1]` for each bin.
    pub coherence: Vec<f64>,
}

impl SpectralCoherence {
    /// Iterates over `(frequency, coherence)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.frequencies
            .iter()
            .copied()
            .zip(self.coherence.iter().copied())
    }

    /// Number of frequency bins.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Returns true when no bins were produced.
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Bins with frequency at most `max_hz`, e.g. for a 0-60 Hz plot range.
    pub fn clipped(&self, max_hz: f64) -> SpectralCoherence {
        let (frequencies, coherence) = self.iter().filter(|(freq, _)| *freq <= max_hz).unzip();
        SpectralCoherence {
            frequencies,
            coherence,
        }
    }
}

fn check_pair(a: &TimeSeries, b: &TimeSeries) -> Result<(), IrsError> {
    if a.len() != b.len() {
        return Err(IrsError::Config(
            ErrorInfo::new("length-mismatch", "series must have equal length")
                .with_context("len_a", a.len().to_string())
                .with_context("len_b", b.len().to_string()),
        ));
    }
    if a.sample_rate() != b.sample_rate() {
        return Err(IrsError::Config(
            ErrorInfo::new("rate-mismatch", "series must share a sample rate")
                .with_context("fs_a", a.sample_rate().to_string())
                .with_context("fs_b", b.sample_rate().to_string()),
        ));
    }
    Ok(())
}

/// Computes averaged one-sided spectral densities with a periodic Hann window.
///
/// Each segment is mean-detrended and windowed before the FFT. Densities use
/// `1 / (fs * sum(w^2))` scaling with non-DC, non-Nyquist bins doubled.
pub fn welch_densities(
    a: &TimeSeries,
    b: &TimeSeries,
    spec: &WelchSpec,
) -> Result<SpectralDensities, IrsError> {
    check_pair(a, b)?;
    spec.validate(a.len())?;

    let nperseg = spec.nperseg;
    let step = nperseg - spec.overlap();
    let segments = spec.segment_count(a.len());
    let bins = nperseg / 2 + 1;
    let fs = a.sample_rate();

    let window = hann_periodic(nperseg);
    let window_power: f64 = window.iter().map(|w| w * w).sum();
    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(nperseg);

    let transform = |samples: &[f64]| -> Vec<Complex64> {
        let mut detrended = samples.to_vec();
        detrend_constant(&mut detrended);
        let mut buf: Vec<Complex64> = detrended
            .iter()
            .zip(window.iter())
            .map(|(x, w)| Complex64::new(x * w, 0.0))
            .collect();
        fft.process(&mut buf);
        buf.truncate(bins);
        buf
    };

    let mut pxx = vec![0.0; bins];
    let mut pyy = vec![0.0; bins];
    let mut pxy = vec![Complex64::new(0.0, 0.0); bins];
    for seg in 0..segments {
        let start = seg * step;
        let xa = transform(&a.values()[start..start + nperseg]);
        let xb = transform(&b.values()[start..start + nperseg]);
        for k in 0..bins {
            pxx[k] += (xa[k].conj() * xa[k]).re;
            pyy[k] += (xb[k].conj() * xb[k]).re;
            pxy[k] += xa[k].conj() * xb[k];
        }
    }

    let base_scale = 1.0 / (fs * window_power * segments as f64);
    let has_nyquist = nperseg % 2 == 0;
    for k in 0..bins {
        let one_sided = if k == 0 || (has_nyquist && k == bins - 1) {
            1.0
        } else {
            2.0
        };
        let scale = base_scale * one_sided;
        pxx[k] *= scale;
        pyy[k] *= scale;
        pxy[k] *= scale;
    }

    let frequencies = (0..bins)
        .map(|k| k as f64 * fs / nperseg as f64)
        .collect();
    tracing::debug!(nperseg, segments, bins, "welch densities computed");
    Ok(SpectralDensities {
        frequencies,
        pxx,
        pyy,
        pxy,
        segments,
    })
}

/// Magnitude-squared coherence `|Pxy|^2 / (Pxx * Pyy)` of two channels.
///
/// Bins where either channel carries no power report zero coherence. Values
/// are clamped to `[0, 1]` to absorb rounding.
pub fn coherence(
    a: &TimeSeries,
    b: &TimeSeries,
    spec: &WelchSpec,
) -> Result<SpectralCoherence, IrsError> {
    let densities = welch_densities(a, b, spec)?;
    let coherence = densities
        .pxy
        .iter()
        .zip(densities.pxx.iter().zip(densities.pyy.iter()))
        .map(|(cross, (pxx, pyy))| {
            let denom = pxx * pyy;
            if denom > 0.0 {
                (cross.norm_sqr() / denom).clamp(0.0, 1.0)
            } else {
                0.0
            }
        })
        .collect();
    Ok(SpectralCoherence {
        frequencies: densities.frequencies,
        coherence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_count_matches_half_overlap_layout() {
        let spec = WelchSpec::default();
        assert_eq!(spec.overlap(), 500);
        assert_eq!(spec.segment_count(5000), 9);
        let no_overlap = WelchSpec {
            nperseg: 1000,
            noverlap: Some(0),
        };
        assert_eq!(no_overlap.segment_count(5000), 5);
        assert_eq!(no_overlap.segment_count(1000), 1);
    }

    #[test]
    fn pure_tone_power_lands_in_its_bin() {
        let fs = 64.0;
        let values: Vec<f64> = (0..256)
            .map(|n| (2.0 * std::f64::consts::PI * 8.0 * n as f64 / fs).sin())
            .collect();
        let series = TimeSeries::new(fs, values).expect("series");
        let densities =
            welch_densities(&series, &series, &WelchSpec::with_nperseg(64)).expect("welch");
        let peak = densities
            .pxx
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(idx, _)| idx)
            .expect("bins");
        assert_eq!(densities.frequencies[peak], 8.0);
        assert_eq!(densities.frequencies.len(), 33);
        assert_eq!(densities.segments, 7);
    }
}
