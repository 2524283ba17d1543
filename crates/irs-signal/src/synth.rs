use std::f64::consts::PI;

use irs_core::errors::{ErrorInfo, IrsError};
use irs_core::rng::RngHandle;
use irs_core::{require_finite, require_non_negative, require_positive};
use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

const LOW_TONE_AMPLITUDE: f64 = 0.9;
const HIGH_TONE_AMPLITUDE: f64 = 0.6;

fn synth_error(info: ErrorInfo) -> IrsError {
    IrsError::Config(info)
}

fn default_sample_rate() -> f64 {
    1000.0
}

fn default_duration() -> f64 {
    5.0
}

fn default_f_low() -> f64 {
    7.0
}

fn default_f_high() -> f64 {
    13.0
}

fn default_phase_shift() -> f64 {
    PI / 6.0
}

fn default_noise_amplitude() -> f64 {
    0.3
}

/// Parameters for the two-channel multi-tone generator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SynthSpec {
    /// Sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: f64,
    /// Duration in seconds.
    #[serde(default = "default_duration")]
    pub duration: f64,
    /// Low tone frequency in Hz.
    #[serde(default = "default_f_low")]
    pub f_low: f64,
    /// High tone frequency in Hz.
    #[serde(default = "default_f_high")]
    pub f_high: f64,
    /// Phase offset (radians) applied to channel B's low tone; half of it goes to the high tone.
    #[serde(default = "default_phase_shift")]
    pub phase_shift: f64,
    /// Standard deviation of the additive Gaussian noise on each channel.
    #[serde(default = "default_noise_amplitude")]
    pub noise_amplitude: f64,
}

impl Default for SynthSpec {
    fn default() -> Self {
        Self {
            sample_rate: default_sample_rate(),
            duration: default_duration(),
            f_low: default_f_low(),
            f_high: default_f_high(),
            phase_shift: default_phase_shift(),
            noise_amplitude: default_noise_amplitude(),
        }
    }
}

impl SynthSpec {
    /// Number of samples produced per channel, `floor(sample_rate * duration)`.
    pub fn sample_count(&self) -> usize {
        (self.sample_rate * self.duration).floor() as usize
    }

    /// Checks every field and the derived sample count.
    pub fn validate(&self) -> Result<(), IrsError> {
        require_positive("sample_rate", self.sample_rate)?;
        require_positive("duration", self.duration)?;
        require_positive("f_low", self.f_low)?;
        require_positive("f_high", self.f_high)?;
        require_finite("phase_shift", self.phase_shift)?;
        require_non_negative("noise_amplitude", self.noise_amplitude)?;
        if self.f_low >= self.f_high {
            return Err(synth_error(
                ErrorInfo::new(
                    "tone-order",
                    "low tone frequency must be below the high tone frequency",
                )
                .with_context("f_low", self.f_low.to_string())
                .with_context("f_high", self.f_high.to_string()),
            ));
        }
        if self.sample_count() == 0 {
            return Err(synth_error(ErrorInfo::new(
                "empty-series",
                "sample_rate * duration must yield at least one sample",
            )));
        }
        Ok(())
    }
}

/// Uniformly sampled real-valued series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeSeries {
    sample_rate: f64,
    values: Vec<f64>,
}

impl TimeSeries {
    /// Wraps samples taken at `sample_rate` Hz.
    pub fn new(sample_rate: f64, values: Vec<f64>) -> Result<Self, IrsError> {
        require_positive("sample_rate", sample_rate)?;
        Ok(Self {
            sample_rate,
            values,
        })
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Duration in seconds covered by the samples.
    pub fn duration(&self) -> f64 {
        self.values.len() as f64 / self.sample_rate
    }

    /// Sample values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true when the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The two correlated channels produced by [`synthesize`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignalPair {
    /// Reference channel.
    pub a: TimeSeries,
    /// Phase-drifted channel.
    pub b: TimeSeries,
}

/// Generates the reference and phase-drifted channels.
///
/// Channel A is `0.9 sin(2π f_low t) + 0.6 sin(2π f_high t)` plus noise;
/// channel B shifts the low tone by `phase_shift` and the high tone by half of
/// it. All of A's noise is drawn from `rng` before any of B's, so a given seed
/// always yields the same pair.
pub fn synthesize(spec: &SynthSpec, rng: &mut RngHandle) -> Result<SignalPair, IrsError> {
    spec.validate()?;
    let count = spec.sample_count();
    let w_low = 2.0 * PI * spec.f_low;
    let w_high = 2.0 * PI * spec.f_high;

    let mut a = Vec::with_capacity(count);
    for idx in 0..count {
        let t = idx as f64 / spec.sample_rate;
        let noise: f64 = rng.sample(StandardNormal);
        a.push(
            LOW_TONE_AMPLITUDE * (w_low * t).sin()
                + HIGH_TONE_AMPLITUDE * (w_high * t).sin()
                + spec.noise_amplitude * noise,
        );
    }

    let mut b = Vec::with_capacity(count);
    for idx in 0..count {
        let t = idx as f64 / spec.sample_rate;
        let noise: f64 = rng.sample(StandardNormal);
        b.push(
            LOW_TONE_AMPLITUDE * (w_low * t + spec.phase_shift).sin()
                + HIGH_TONE_AMPLITUDE * (w_high * t + spec.phase_shift / 2.0).sin()
                + spec.noise_amplitude * noise,
        );
    }

    tracing::debug!(samples = count, fs = spec.sample_rate, "synthesized signal pair");
    Ok(SignalPair {
        a: TimeSeries::new(spec.sample_rate, a)?,
        b: TimeSeries::new(spec.sample_rate, b)?,
    })
}
