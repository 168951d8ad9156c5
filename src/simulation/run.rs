use std::collections::BTreeMap;

use anyhow::{Context, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    apportion::{apportion, electoral_votes},
    partition::{DivideOptions, RegionPartitioner, ScaledAcceptance},
    simulation::Simulation,
};

/// Electoral outcome of one election under one redivision.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElectionOutcome {
    pub year: String,
    /// Electoral votes won by the first and second party.
    pub votes: [u32; 2],
    /// Regions carried by the first and second party.
    pub regions_won: [usize; 2],
}

/// Result of one redivision of the map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Units in each region, frozen regions first.
    pub region_sizes: Vec<usize>,
    /// Units left without a region.
    pub orphans: usize,
    pub elections: Vec<ElectionOutcome>,
}

/// Award each region's electoral votes to the party with strictly more votes there.
pub(crate) fn award(year: &str, electoral: &[u32], first: &[f64], second: &[f64]) -> ElectionOutcome {
    let mut outcome = ElectionOutcome { year: year.to_string(), votes: [0, 0], regions_won: [0, 0] };
    for ((&ev, &a), &b) in electoral.iter().zip(first).zip(second) {
        let winner = if a > b { 0 } else if b > a { 1 } else { continue };
        outcome.votes[winner] += ev;
        outcome.regions_won[winner] += 1;
    }
    outcome
}

impl Simulation {
    /// Redivide the map once: frozen groups first, then regions grown from fresh seeds.
    pub fn divide_once(&self, rng: &mut impl Rng) -> Result<RegionPartitioner<ScaledAcceptance>> {
        let config = self.config();
        let seeds = self.strategy().choose(self.map(), self.frozen_mask(), rng);

        let mut partitioner = RegionPartitioner::new(self.map_handle(), config.acceptance.clone());
        if self.map().has_series(&config.population) {
            partitioner = partitioner.with_weight_series(&config.population)?;
        }
        for group in self.frozen_groups() {
            let region = partitioner.create_region(group)?;
            partitioner.freeze(region)?;
        }
        partitioner.divide(&seeds, DivideOptions { resolve_orphans: config.assign_orphans }, rng)?;
        Ok(partitioner)
    }

    /// Redivide the map once and score every configured election under the new regions.
    pub fn run_once(&self, rng: &mut impl Rng) -> Result<RunResult> {
        let config = self.config();
        let partitioner = self.divide_once(rng)?;

        // Electoral votes per population series, shared by elections of the same census.
        let mut electoral = BTreeMap::<String, Vec<u32>>::new();
        let mut elections = Vec::with_capacity(config.elections.len());
        for year in &config.elections {
            let series = config.population_series(year)?;
            if !electoral.contains_key(&series) {
                let votes = self.electoral_votes(&partitioner, &series)
                    .with_context(|| format!("[simulation::run] Failed to apportion seats for {year}"))?;
                electoral.insert(series.clone(), votes);
            }

            let first = partitioner.totals(&config.vote_series(&config.parties.0, year))?;
            let second = partitioner.totals(&config.vote_series(&config.parties.1, year))?;
            elections.push(award(year, &electoral[&series], &first, &second));
        }

        Ok(RunResult {
            region_sizes: partitioner.regions().map(<[usize]>::len).collect(),
            orphans: partitioner.unassigned().len(),
            elections,
        })
    }

    /// Electoral votes of every region, apportioned on a population series.
    fn electoral_votes(&self, partitioner: &RegionPartitioner<ScaledAcceptance>, series: &str) -> Result<Vec<u32>> {
        let config = self.config();
        let population = if self.map().has_series(series) { partitioner.totals(series)? } else {
            (0..partitioner.num_regions())
                .map(|region| partitioner.aggregate(region, |unit| self.map().weight(unit)))
                .collect::<Result<Vec<_>, _>>()?
        };

        let reps = if config.expand_house {
            let provisional = apportion(&population, config.reps)?;
            config.reps + provisional.iter().copied().min().unwrap_or(0)
        } else {
            config.reps
        };
        Ok(electoral_votes(&population, reps)?)
    }
}
