use std::path::PathBuf;

/// Redivide a map into regions and re-score elections under the new regions
#[derive(clap::Parser, Debug)]
#[command(name = "statemaker", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Run Monte Carlo redivisions, one JSON summary line per election on stdout
    Simulate(SimulateArgs),

    /// Redivide the map once and write the unit assignment as JSON
    Divide(DivideArgs),

    /// Apportion seats among weights with the Huntington-Hill method
    Apportion(ApportionArgs),
}

/// Map, data and config shared by the commands that redivide a map.
#[derive(clap::Args, Debug)]
pub struct MapArgs {
    /// Map file (JSON with units and neighbor lists)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub map: PathBuf,

    /// CSV file with per-unit series (votes, populations)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub data: Option<PathBuf>,

    /// Column of the data file holding unit ids
    #[arg(long, default_value = "GEOID")]
    pub id_column: String,

    /// Simulation config (JSON), defaults apply to missing fields
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Number of grown regions, overrides the config
    #[arg(short, long)]
    pub regions: Option<usize>,

    /// Base random seed, overrides the config
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(clap::Args, Debug)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub map: MapArgs,

    /// Number of runs, overrides the config
    #[arg(short, long)]
    pub sims: Option<usize>,

    /// House size, overrides the config
    #[arg(long)]
    pub reps: Option<u32>,

    /// Write each run's raw result instead of the per-election summary
    #[arg(long)]
    pub raw: bool,
}

#[derive(clap::Args, Debug)]
pub struct DivideArgs {
    #[command(flatten)]
    pub map: MapArgs,

    /// Output assignment file, defaults to stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct ApportionArgs {
    /// Number of seats to hand out
    pub seats: u32,

    /// Weight of each region, e.g. populations
    #[arg(required = true, num_args = 1..)]
    pub weights: Vec<f64>,

    /// Add two seats per region (electoral votes)
    #[arg(long)]
    pub electoral: bool,
}
