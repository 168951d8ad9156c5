use std::collections::BTreeMap;

use rand::{seq::{IndexedRandom, SliceRandom}, Rng};

use crate::map::Map;

/// How seed units are picked for each run.
#[derive(Clone, Debug, PartialEq)]
pub enum SeedStrategy {
    /// The given units, in a fresh random order every run.
    Explicit(Vec<usize>),
    /// One random unit from every group of units sharing an id prefix.
    OnePerGroup { prefix_len: usize },
    /// `count` distinct random units.
    Random { count: usize },
}

impl SeedStrategy {
    /// Pick seed units, never choosing a unit flagged in `excluded`.
    pub fn choose(&self, map: &Map, excluded: &[bool], rng: &mut impl Rng) -> Vec<usize> {
        match self {
            Self::Explicit(units) => {
                let mut seeds = units.iter()
                    .copied()
                    .filter(|&unit| !excluded[unit])
                    .collect::<Vec<_>>();
                seeds.shuffle(rng);
                seeds
            }
            Self::OnePerGroup { prefix_len } => {
                let mut groups = BTreeMap::<&str, Vec<usize>>::new();
                for (unit, record) in map.units().iter().enumerate() {
                    if excluded[unit] { continue }
                    groups.entry(record.group_key(*prefix_len)).or_default().push(unit);
                }
                groups.values()
                    .filter_map(|units| units.choose(rng).copied())
                    .collect()
            }
            Self::Random { count } => {
                let candidates = (0..map.len())
                    .filter(|&unit| !excluded[unit])
                    .collect::<Vec<_>>();
                candidates.choose_multiple(rng, *count).copied().collect()
            }
        }
    }
}
