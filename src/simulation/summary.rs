use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::simulation::RunResult;

/// Distribution of one election's outcome across many redivisions,
/// seen from the first party.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElectionSummary {
    pub year: String,
    pub runs: usize,
    /// Runs in which the first party won more electoral votes.
    pub wins: usize,
    pub ties: usize,
    /// Mean number of regions carried.
    pub mean_regions: f64,
    /// Mean number of electoral votes won.
    pub mean_votes: f64,
    /// Number of runs per electoral vote total.
    pub histogram: BTreeMap<u32, usize>,
}

/// Summarize every election year across runs, in the order years first appear.
pub fn summarize(runs: &[RunResult]) -> Vec<ElectionSummary> {
    let mut years = Vec::<&str>::new();
    for outcome in runs.iter().flat_map(|run| &run.elections) {
        if !years.contains(&outcome.year.as_str()) { years.push(&outcome.year) }
    }

    years.into_iter().map(|year| {
        let rows = runs.iter()
            .flat_map(|run| &run.elections)
            .filter(|outcome| outcome.year == year)
            .collect::<Vec<_>>();
        let count = rows.len().max(1) as f64;

        let mut histogram = BTreeMap::new();
        for row in &rows { *histogram.entry(row.votes[0]).or_insert(0) += 1 }

        ElectionSummary {
            year: year.to_string(),
            runs: rows.len(),
            wins: rows.iter().filter(|row| row.votes[0] > row.votes[1]).count(),
            ties: rows.iter().filter(|row| row.votes[0] == row.votes[1]).count(),
            mean_regions: rows.iter().map(|row| row.regions_won[0] as f64).sum::<f64>() / count,
            mean_votes: rows.iter().map(|row| row.votes[0] as f64).sum::<f64>() / count,
            histogram,
        }
    }).collect()
}
