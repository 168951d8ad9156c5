pub mod apportion;
pub mod divide;
pub mod simulate;

use anyhow::Result;
use statemaker::{io, Simulation, SimulationConfig};
use tracing::info;

use crate::cli::MapArgs;

/// Load the map, attach its data and build a simulation from the config and flag overrides.
pub fn prepare(args: &MapArgs, configure: impl FnOnce(&mut SimulationConfig)) -> Result<Simulation> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_json_file(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(regions) = args.regions { config.regions = regions }
    if let Some(seed) = args.seed { config.seed = Some(seed) }
    configure(&mut config);

    info!(path = %args.map.display(), "loading map");
    let mut map = io::json::read_map(&args.map)?;
    if let Some(path) = &args.data {
        let matched = io::csv::read_data(&mut map, path, &args.id_column)?;
        info!(path = %path.display(), rows = matched, "attached data");
    }

    Simulation::new(map, config)
}
