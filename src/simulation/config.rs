use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use crate::partition::ScaledAcceptance;

/// Settings for a batch of Monte Carlo redivisions.
///
/// Every field has a default, so a config file only needs the fields it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of seeded, growing regions (frozen regions not included).
    pub regions: usize,
    /// House size to apportion, used exactly: no extra `+ 1` seat is added on top.
    pub reps: u32,
    /// Grow the house by the smallest delegation of a provisional apportionment.
    pub expand_house: bool,
    /// Number of independent runs.
    pub sims: usize,
    /// Base seed; run `i` uses `seed + i`. Drawn at random when absent.
    pub seed: Option<u64>,
    /// Explicit seed unit ids, shuffled for every run.
    pub seeds: Option<Vec<String>>,
    /// Seed one random unit per id-prefix group instead of `regions` random units.
    pub one_per_group: bool,
    pub group_prefix_len: usize,
    /// Unit id groups that each become one frozen region.
    pub frozen: Vec<Vec<String>>,
    /// Unit id pairs made adjacent before simulating.
    pub force_neighbors: Vec<(String, String)>,
    /// Election years; vote series are named `{party}{year}`.
    pub elections: Vec<String>,
    pub parties: (String, String),
    /// Population series used for apportionment.
    pub population: String,
    /// Use `{population}{census}` where `census` is the decade preceding each election.
    pub census_populations: bool,
    pub acceptance: ScaledAcceptance,
    pub assign_orphans: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            regions: 48,
            reps: 435,
            expand_house: false,
            sims: 100,
            seed: None,
            seeds: None,
            one_per_group: false,
            group_prefix_len: 2,
            frozen: Vec::new(),
            force_neighbors: Vec::new(),
            elections: ["2000", "2004", "2008", "2012", "2016"].map(String::from).to_vec(),
            parties: ("d".into(), "r".into()),
            population: "pop".into(),
            census_populations: false,
            acceptance: ScaledAcceptance::default(),
            assign_orphans: true,
        }
    }
}

impl SimulationConfig {
    /// Reads a config from a JSON file at `path`.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("[simulation::config] Failed to open config file: {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("[simulation::config] Failed to parse config file: {}", path.display()))
    }

    /// Reads a config from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("[simulation::config] Failed to parse config JSON")
    }

    /// Check settings that do not depend on the map.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.sims > 0, "[simulation::config] sims must be at least 1");
        ensure!(self.group_prefix_len > 0 || !self.one_per_group,
            "[simulation::config] group_prefix_len must be at least 1");
        ensure!(self.parties.0 != self.parties.1, "[simulation::config] parties must differ");
        if self.census_populations {
            for year in &self.elections { census_year(year)?; }
        }
        Ok(())
    }

    /// Name of the vote series for a party in an election year.
    pub fn vote_series(&self, party: &str, year: &str) -> String { format!("{party}{year}") }

    /// Name of the population series used to apportion seats for an election year.
    pub fn population_series(&self, year: &str) -> Result<String> {
        if self.census_populations { Ok(format!("{}{}", self.population, census_year(year)?)) }
        else { Ok(self.population.clone()) }
    }
}

/// Two-digit decade of the census in force for an election year, e.g. `"2016"` -> `"10"`.
pub fn census_year(year: &str) -> Result<String> {
    let year = year.trim().parse::<i64>()
        .with_context(|| format!("[simulation::config] Invalid election year '{year}'"))?;
    let decade = (year - 1).div_euclid(10) * 10;
    Ok(format!("{:02}", decade.rem_euclid(100)))
}
