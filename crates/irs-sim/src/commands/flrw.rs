use std::error::Error;
use std::path::{Path, PathBuf};

use clap::Args;
use irs_core::errors::IrsError;
use irs_sim::output::write_flrw_csv;
use irs_sim::pipeline::run_flrw;
use irs_sim::PipelineConfig;

use super::{artefact, report_written, CommonArgs};

#[derive(Args, Debug)]
pub struct FlrwArgs {
    #[command(flatten)]
    pub common: CommonArgs,
    /// Number of lambda grid points, overriding the configuration.
    #[arg(long)]
    pub points: Option<usize>,
}

pub fn run(args: &FlrwArgs) -> Result<(), Box<dyn Error>> {
    let mut config = args.common.prepare()?;
    if let Some(points) = args.points {
        config.flrw.run.n_points = points;
    }
    config.validate()?;
    let written = emit(&config, &args.common.out)?;
    report_written(&written);
    Ok(())
}

pub fn emit(config: &PipelineConfig, out: &Path) -> Result<Vec<PathBuf>, IrsError> {
    let trajectory = run_flrw(&config.flrw)?;
    if let (Some(lambda), Some(a)) = (trajectory.lambda.last(), trajectory.a.last()) {
        println!("A({lambda:.2}) = {a:.4}");
    }
    let path = artefact(out, "irs_flrw.csv");
    write_flrw_csv(&path, &trajectory)?;
    Ok(vec![path])
}
