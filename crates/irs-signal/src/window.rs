use std::f64::consts::PI;

/// Periodic Hann window of length `len` (the DFT-even form used for spectral estimation).
///
/// A single-sample window is `[1.0]`.
pub fn hann_periodic(len: usize) -> Vec<f64> {
    if len == 1 {
        return vec![1.0];
    }
    let denom = len as f64;
    (0..len)
        .map(|idx| 0.5 - 0.5 * (2.0 * PI * idx as f64 / denom).cos())
        .collect()
}

/// Removes the arithmetic mean from a segment in place.
pub fn detrend_constant(segment: &mut [f64]) {
    if segment.is_empty() {
        return;
    }
    let mean = segment.iter().sum::<f64>() / segment.len() as f64;
    for value in segment.iter_mut() {
        *value -= mean;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hann_starts_at_zero_and_peaks_mid_window() {
        let window = hann_periodic(8);
        assert_eq!(window.len(), 8);
        assert!(window[0].abs() < 1e-15);
        assert!((window[4] - 1.0).abs() < 1e-15);
        assert!((window[2] - window[6]).abs() < 1e-15);
    }

    #[test]
    fn detrend_zeroes_the_mean() {
        let mut segment = vec![1.0, 2.0, 3.0, 6.0];
        detrend_constant(&mut segment);
        let mean: f64 = segment.iter().sum::<f64>() / 4.0;
        assert!(mean.abs() < 1e-15);
        assert_eq!(segment[0], -2.0);
    }
}
