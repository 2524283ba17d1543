use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use irs_sim::PipelineConfig;

pub mod coherence;
pub mod demo;
pub mod flrw;
pub mod galaxy;
pub mod hz;

/// Flags shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Optional YAML configuration; omitted sections use built-in defaults.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Output directory for artefacts.
    #[arg(long, default_value = "out/IRS")]
    pub out: PathBuf,
}

impl CommonArgs {
    pub fn prepare(&self) -> Result<PipelineConfig, Box<dyn Error>> {
        let config = PipelineConfig::load_or_default(self.config.as_deref())?;
        fs::create_dir_all(&self.out)?;
        Ok(config)
    }
}

pub fn report_written(paths: &[PathBuf]) {
    for path in paths {
        println!("[OK] wrote {}", path.display());
    }
}

pub fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

pub fn artefact(out: &Path, name: &str) -> PathBuf {
    out.join(name)
}
