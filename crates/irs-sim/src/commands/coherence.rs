use std::error::Error;
use std::path::{Path, PathBuf};

use clap::Args;
use irs_core::errors::IrsError;
use irs_signal::Band;
use irs_sim::output::{write_json, write_spectrum_csv};
use irs_sim::pipeline::run_coherence;
use irs_sim::PipelineConfig;

use super::{artefact, report_written, today, CommonArgs};

#[derive(Args, Debug)]
pub struct CoherenceArgs {
    #[command(flatten)]
    pub common: CommonArgs,
    /// Master seed overriding the configuration.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Segment length overriding the configuration.
    #[arg(long)]
    pub nperseg: Option<usize>,
    /// Band lower edge in Hz.
    #[arg(long)]
    pub band_lo: Option<f64>,
    /// Band upper edge in Hz.
    #[arg(long)]
    pub band_hi: Option<f64>,
}

pub fn run(args: &CoherenceArgs) -> Result<(), Box<dyn Error>> {
    let mut config = args.common.prepare()?;
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(nperseg) = args.nperseg {
        config.coherence.welch.nperseg = nperseg;
    }
    let (lo, hi) = (config.coherence.band.lo, config.coherence.band.hi);
    config.coherence.band = Band::new(args.band_lo.unwrap_or(lo), args.band_hi.unwrap_or(hi))?;
    config.validate()?;
    let written = emit(&config, &args.common.out)?;
    report_written(&written);
    Ok(())
}

pub fn emit(config: &PipelineConfig, out: &Path) -> Result<Vec<PathBuf>, IrsError> {
    let outcome = run_coherence(&config.coherence, config.seed, &today())?;
    let json_path = artefact(out, "coherence.json");
    write_json(&json_path, &outcome.artifact)?;
    let csv_path = artefact(out, "coherence_spectrum.csv");
    write_spectrum_csv(&csv_path, &outcome.spectrum.clipped(config.coherence.plot_max_hz))?;
    println!("{}", outcome.artifact.title());
    Ok(vec![json_path, csv_path])
}
