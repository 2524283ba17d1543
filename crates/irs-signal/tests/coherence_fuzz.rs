use irs_core::rng::RngHandle;
use irs_signal::{band_average, coherence, synthesize, Band, SynthSpec, WelchSpec};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn coherence_values_lie_in_unit_interval(
        seed in any::<u64>(),
        noise in 0.0f64..2.0,
        phase in -3.0f64..3.0,
        nperseg in 32usize..512,
    ) {
        let spec = SynthSpec {
            sample_rate: 500.0,
            duration: 2.0,
            phase_shift: phase,
            noise_amplitude: noise,
            ..SynthSpec::default()
        };
        let mut rng = RngHandle::from_seed(seed);
        let pair = synthesize(&spec, &mut rng).unwrap();
        let spectrum = coherence(&pair.a, &pair.b, &WelchSpec::with_nperseg(nperseg)).unwrap();
        prop_assert_eq!(spectrum.len(), nperseg / 2 + 1);
        for value in &spectrum.coherence {
            prop_assert!(*value >= -1e-9 && *value <= 1.0 + 1e-9);
        }
        let metric = band_average(&spectrum, &Band::new(0.0, 250.0).unwrap());
        prop_assert!(metric.is_defined());
        prop_assert!(metric.value >= 0.0 && metric.value <= 1.0);
    }
}
