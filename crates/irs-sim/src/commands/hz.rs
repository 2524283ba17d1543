use std::error::Error;
use std::path::{Path, PathBuf};

use clap::Args;
use irs_core::errors::IrsError;
use irs_cosmo::ObservationSet;
use irs_sim::output::{load_observations_csv, write_csv, write_json};
use irs_sim::pipeline::run_hz;
use irs_sim::PipelineConfig;

use super::{artefact, report_written, CommonArgs};

#[derive(Args, Debug)]
pub struct HzArgs {
    #[command(flatten)]
    pub common: CommonArgs,
    /// CSV file with `z,H,sigma_H` columns replacing the built-in dataset.
    #[arg(long)]
    pub data: Option<PathBuf>,
}

pub fn run(args: &HzArgs) -> Result<(), Box<dyn Error>> {
    let config = args.common.prepare()?;
    let observations = match &args.data {
        Some(path) => load_observations_csv(path)?,
        None => ObservationSet::cosmic_chronometers(),
    };
    let written = emit(&config, &observations, &args.common.out)?;
    report_written(&written);
    Ok(())
}

pub fn emit(
    config: &PipelineConfig,
    observations: &ObservationSet,
    out: &Path,
) -> Result<Vec<PathBuf>, IrsError> {
    let rows = run_hz(observations, config)?;
    for row in rows.iter().take(5) {
        println!(
            "z={:.2} E_z2={:.4} Omega_b_term={:.4} Omega_extra={:.4}",
            row.z, row.e_z2, row.omega_b_term, row.omega_extra
        );
    }
    let csv_path = artefact(out, "hz_decomposition.csv");
    write_csv(&csv_path, rows.iter())?;
    let json_path = artefact(out, "hz_decomposition.json");
    write_json(&json_path, &rows)?;
    Ok(vec![csv_path, json_path])
}
