use std::error::Error;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    coherence::{self, CoherenceArgs},
    demo::{self, DemoArgs},
    flrw::{self, FlrwArgs},
    galaxy::{self, GalaxyArgs},
    hz::{self, HzArgs},
};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "irs-sim", about = "IRS MathFlow pipeline runner")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Synthesize a channel pair and compute band-averaged coherence.
    Coherence(CoherenceArgs),
    /// Decompose H(z) observations into baryonic and extra terms.
    Hz(HzArgs),
    /// Evaluate dimensionless and calibrated physical rotation curves.
    Galaxy(GalaxyArgs),
    /// Integrate the toy scale-factor model.
    Flrw(FlrwArgs),
    /// Run every pipeline into one output directory.
    Demo(DemoArgs),
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Command::Coherence(args) => coherence::run(&args),
        Command::Hz(args) => hz::run(&args),
        Command::Galaxy(args) => galaxy::run(&args),
        Command::Flrw(args) => flrw::run(&args),
        Command::Demo(args) => demo::run(&args),
    }
}
