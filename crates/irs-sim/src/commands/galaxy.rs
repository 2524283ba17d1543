use std::error::Error;
use std::path::{Path, PathBuf};

use clap::Args;
use irs_core::errors::IrsError;
use irs_sim::output::{write_curve_csv, write_json};
use irs_sim::pipeline::{run_galaxy_dimless, run_galaxy_physical};
use irs_sim::PipelineConfig;

use super::{artefact, report_written, CommonArgs};

#[derive(Args, Debug)]
pub struct GalaxyArgs {
    #[command(flatten)]
    pub common: CommonArgs,
    /// Target velocity at r0 in km/s, overriding the configuration.
    #[arg(long)]
    pub v_target: Option<f64>,
}

pub fn run(args: &GalaxyArgs) -> Result<(), Box<dyn Error>> {
    let mut config = args.common.prepare()?;
    if let Some(v_target) = args.v_target {
        config.galaxy_physical.params.v_target = v_target;
    }
    config.validate()?;
    let written = emit(&config, &args.common.out)?;
    report_written(&written);
    Ok(())
}

pub fn emit(config: &PipelineConfig, out: &Path) -> Result<Vec<PathBuf>, IrsError> {
    let dimless = run_galaxy_dimless(&config.galaxy_dimless)?;
    let dimless_path = artefact(out, "galaxy_dimless.csv");
    write_curve_csv(&dimless_path, &dimless)?;

    let physical = run_galaxy_physical(&config.galaxy_physical)?;
    let params = &config.galaxy_physical.params;
    println!(
        "M0 = {:.2e} Msun, r_d = {:.1} kpc, alpha = {:.3e} Msun/kpc",
        params.m0, params.r_d, physical.alpha
    );
    println!(" r [kpc] | v_baryons [km/s] | v_total [km/s]");
    for sample in physical.curve.samples() {
        println!(
            "{:8.2} | {:16.2} | {:14.2}",
            sample.r, sample.v_baryon, sample.v_total
        );
    }
    println!(
        "rho_I(r0) = {:.3e} Msun/kpc^3 = {:.3e} Msun/pc^3",
        physical.density_at_r0.per_kpc3, physical.density_at_r0.per_pc3
    );
    let physical_csv = artefact(out, "galaxy_physical.csv");
    write_curve_csv(&physical_csv, &physical.curve)?;
    let physical_json = artefact(out, "galaxy_physical.json");
    write_json(&physical_json, &physical)?;
    Ok(vec![dimless_path, physical_csv, physical_json])
}
