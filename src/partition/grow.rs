use rand::{seq::IndexedRandom, Rng};
use tracing::{debug, warn};

use crate::{error::Result, partition::{Acceptance, RegionPartitioner}};

/// Options for [`RegionPartitioner::divide`].
#[derive(Clone, Copy, Debug)]
pub struct DivideOptions {
    /// Hand units left over after growth to a neighboring region.
    pub resolve_orphans: bool,
}

impl Default for DivideOptions {
    fn default() -> Self { Self { resolve_orphans: true } }
}

impl<A: Acceptance> RegionPartitioner<A> {
    /// Try to add one unassigned neighboring unit to a region.
    ///
    /// The region first stops with probability `accept(size, weight)`. Otherwise a unit is
    /// drawn uniformly from the unassigned neighbors of all members, where a unit appears
    /// once per edge into the region, so well-surrounded units are preferred.
    /// Returns whether the region grew. Frozen regions never grow.
    pub fn grow_once(&mut self, region: u32, rng: &mut impl Rng) -> Result<bool> {
        let set = self.set_of(region)?;
        if self.frozen[region as usize] { return Ok(false) }

        let probability = self.accept.stop_probability(
            self.parts.get(set).len(),
            self.totals[region as usize],
        );
        if rng.random::<f64>() < probability { return Ok(false) }

        let Some(&unit) = self.candidates(set).choose(rng) else { return Ok(false) };
        self.assign(unit, region);
        Ok(true)
    }

    /// Unassigned neighbors of every unit in a set, with multiplicity.
    fn candidates(&self, set: usize) -> Vec<usize> {
        self.parts.get(set).iter()
            .flat_map(|&unit| self.map().neighbors(unit))
            .filter(|&neighbor| self.parts.find(neighbor) == 0)
            .collect()
    }

    /// Create one region per seed, then grow every non-frozen region round-robin
    /// until a full round adds nothing. Returns the ids of the regions created.
    ///
    /// Seeds already owned by a region (or repeated) are skipped.
    pub fn grow_all(&mut self, seeds: &[usize], rng: &mut impl Rng) -> Result<Vec<u32>> {
        for &seed in seeds { self.map().check_unit(seed)?; }

        let mut created = Vec::with_capacity(seeds.len());
        for &seed in seeds {
            if self.owner(seed).is_some() {
                debug!(seed, "seed already owned, skipping");
                continue
            }
            created.push(self.create_region(&[seed])?);
        }

        let active = (0..self.num_regions())
            .filter(|&region| !self.frozen[region as usize])
            .collect::<Vec<_>>();

        let mut rounds = 0usize;
        loop {
            let mut grew = false;
            for &region in &active {
                grew |= self.grow_once(region, rng)?;
            }
            rounds += 1;
            if !grew { break }
        }

        debug!(rounds, regions = active.len(), unassigned = self.unassigned().len(), "growth finished");
        Ok(created)
    }

    /// Assign every unassigned unit that borders a non-frozen region to one such region,
    /// chosen at random (weighted by shared edges), until a full pass assigns nothing.
    /// Returns the number of units assigned. Units that border no open region stay orphaned.
    pub fn resolve_orphans(&mut self, rng: &mut impl Rng) -> usize {
        let mut resolved = 0;
        loop {
            let before = resolved;
            for unit in self.unassigned().to_vec() {
                if let Some(&region) = self.open_neighbor_regions(unit).choose(rng) {
                    self.assign(unit, region);
                    resolved += 1;
                }
            }
            if resolved == before { break }
        }

        if !self.unassigned().is_empty() {
            warn!(orphans = self.unassigned().len(), "units left without a region");
        }
        resolved
    }

    /// Grow regions from seeds and, unless disabled, resolve orphans.
    pub fn divide(&mut self, seeds: &[usize], options: DivideOptions, rng: &mut impl Rng) -> Result<Vec<u32>> {
        let created = self.grow_all(seeds, rng)?;
        if options.resolve_orphans {
            let resolved = self.resolve_orphans(rng);
            debug!(resolved, "orphans resolved");
        } else {
            debug!("not assigning orphans");
        }
        Ok(created)
    }
}
