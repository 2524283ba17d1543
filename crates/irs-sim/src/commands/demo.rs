use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use irs_core::provenance::RunProvenance;
use irs_cosmo::ObservationSet;
use irs_sim::output::write_json;
use serde::Serialize;

use super::{artefact, coherence, flrw, galaxy, hz, report_written, CommonArgs};

#[derive(Args, Debug)]
pub struct DemoArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Serialize)]
struct DemoManifest {
    provenance: RunProvenance,
    artefacts: Vec<String>,
}

pub fn run(args: &DemoArgs) -> Result<(), Box<dyn Error>> {
    let config = args.common.prepare()?;
    let out = &args.common.out;

    let mut written: Vec<PathBuf> = Vec::new();
    tracing::info!(out = %out.display(), "running all pipelines");
    written.extend(hz::emit(&config, &ObservationSet::cosmic_chronometers(), out)?);
    written.extend(galaxy::emit(&config, out)?);
    written.extend(flrw::emit(&config, out)?);
    written.extend(coherence::emit(&config, out)?);

    let provenance = RunProvenance {
        input_hash: config.input_hash()?,
        seed: config.seed,
        created_at: chrono::Utc::now().to_rfc3339(),
        ..RunProvenance::default()
    }
    .with_tool("irs-sim", env!("CARGO_PKG_VERSION"));
    let manifest = DemoManifest {
        provenance,
        artefacts: written
            .iter()
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect(),
    };
    let manifest_path = artefact(out, "manifest.json");
    write_json(&manifest_path, &manifest)?;
    written.push(manifest_path);
    report_written(&written);
    Ok(())
}
