use criterion::{criterion_group, criterion_main, Criterion};
use irs_core::rng::RngHandle;
use irs_signal::{band_average, coherence, synthesize, Band, SynthSpec, WelchSpec};

fn bench_coherence(c: &mut Criterion) {
    let mut rng = RngHandle::from_seed(12001);
    let pair = synthesize(&SynthSpec::default(), &mut rng).expect("synth");
    let welch = WelchSpec::default();
    let band = Band::default();
    c.bench_function("coherence_throughput", |b| {
        b.iter(|| {
            let spectrum = coherence(&pair.a, &pair.b, &welch).expect("coherence");
            let _ = band_average(&spectrum, &band);
        });
    });
}

criterion_group!(benches, bench_coherence);
criterion_main!(benches);
