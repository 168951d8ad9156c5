//! Monte Carlo redivision of a map and re-aggregation of election results.

mod config;
mod run;
mod seeds;
mod summary;

use std::{sync::Arc, time::Instant};

use anyhow::{Context, Result, ensure};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{info, warn};

use crate::map::Map;

pub use config::{census_year, SimulationConfig};
pub use run::{ElectionOutcome, RunResult};
pub use seeds::SeedStrategy;
pub use summary::{summarize, ElectionSummary};

/// A prepared batch of independent redivisions over one shared map.
#[derive(Clone, Debug)]
pub struct Simulation {
    map: Arc<Map>,
    config: SimulationConfig,
    frozen_groups: Vec<Vec<usize>>,
    frozen_mask: Vec<bool>, // units belonging to a frozen group
    strategy: SeedStrategy,
    base_seed: u64,
}

impl Simulation {
    /// Prepare a simulation: connect forced neighbors, resolve unit ids and check
    /// that every series the configured elections need is present.
    pub fn new(mut map: Map, config: SimulationConfig) -> Result<Self> {
        config.validate()?;

        map.connect(&config.force_neighbors).context("[simulation] Failed to force neighbors")?;

        let frozen_groups = config.frozen.iter()
            .map(|group| group.iter().map(|id| map.require_index(id)).collect::<Result<Vec<_>, _>>())
            .collect::<Result<Vec<_>, _>>()
            .context("[simulation] Unknown unit in frozen group")?;
        let mut frozen_mask = vec![false; map.len()];
        frozen_groups.iter().flatten().for_each(|&unit| frozen_mask[unit] = true);

        let strategy = match &config.seeds {
            Some(ids) => SeedStrategy::Explicit(ids.iter().filter_map(|id| {
                let index = map.index_of(id);
                if index.is_none() { warn!(id = id.as_str(), "couldn't find seed unit") }
                index
            }).collect()),
            None if config.one_per_group => SeedStrategy::OnePerGroup { prefix_len: config.group_prefix_len },
            None => SeedStrategy::Random { count: config.regions },
        };

        for year in &config.elections {
            for party in [&config.parties.0, &config.parties.1] {
                let series = config.vote_series(party, year);
                ensure!(map.has_series(&series), "[simulation] Missing vote series '{series}'");
            }
            let population = config.population_series(year)?;
            ensure!(
                map.has_series(&population) || population == config.population,
                "[simulation] Missing population series '{population}'"
            );
        }

        let base_seed = config.seed.unwrap_or_else(|| rand::rng().random());

        Ok(Self { map: Arc::new(map), config, frozen_groups, frozen_mask, strategy, base_seed })
    }

    #[inline] pub fn map(&self) -> &Map { &self.map }

    #[inline] pub(crate) fn map_handle(&self) -> Arc<Map> { Arc::clone(&self.map) }

    #[inline] pub fn config(&self) -> &SimulationConfig { &self.config }

    #[inline] pub fn strategy(&self) -> &SeedStrategy { &self.strategy }

    #[inline] pub fn frozen_groups(&self) -> &[Vec<usize>] { &self.frozen_groups }

    #[inline] pub(crate) fn frozen_mask(&self) -> &[bool] { &self.frozen_mask }

    /// Seed of run 0; run `i` is seeded with `base_seed + i`.
    #[inline] pub fn base_seed(&self) -> u64 { self.base_seed }

    /// Run every simulation in parallel. Results are in run order and depend only on the base seed.
    pub fn run(&self) -> Result<Vec<RunResult>> {
        let start = Instant::now();
        info!(sims = self.config.sims, regions = self.config.regions, seed = self.base_seed, "starting simulations");

        let runs = (0..self.config.sims as u64)
            .into_par_iter()
            .map(|i| {
                let mut rng = StdRng::seed_from_u64(self.base_seed.wrapping_add(i));
                self.run_once(&mut rng).with_context(|| format!("[simulation] Run {i} failed"))
            })
            .collect::<Result<Vec<_>>>()?;

        let orphaned = runs.iter().filter(|run| run.orphans > 0).count();
        if orphaned > 0 { warn!(runs = orphaned, "some runs left orphaned units") }
        info!(sims = runs.len(), elapsed_ms = start.elapsed().as_millis() as u64, "simulations finished");
        Ok(runs)
    }

    /// Run every simulation and summarize each election.
    pub fn run_and_summarize(&self) -> Result<Vec<ElectionSummary>> {
        Ok(summarize(&self.run()?))
    }
}
