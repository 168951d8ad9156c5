use std::sync::Arc;

use smallvec::SmallVec;

use crate::{error::{Error, Result}, map::Map, partition::PartitionSet};

/// Grows contiguous regions over a shared unit map.
///
/// Region ids are assigned in creation order starting at 0. Internally region `r`
/// lives in set `r + 1` of the partition set; set 0 holds the unassigned units.
#[derive(Clone, Debug)]
pub struct RegionPartitioner<A> {
    map: Arc<Map>,
    pub(super) parts: PartitionSet,
    pub(super) frozen: Vec<bool>,      // per region
    pub(super) totals: Vec<f64>,       // running weight total per region
    weight_series: Option<String>,     // weight used for acceptance (primary weight if None)
    pub(super) accept: A,
}

impl<A> RegionPartitioner<A> {
    /// Create a partitioner with every unit unassigned.
    pub fn new(map: impl Into<Arc<Map>>, accept: A) -> Self {
        let map: Arc<Map> = map.into();
        Self {
            parts: PartitionSet::new(map.len()),
            frozen: Vec::new(),
            totals: Vec::new(),
            weight_series: None,
            accept,
            map,
        }
    }

    /// Use a named data series instead of the primary unit weight as region weight.
    pub fn with_weight_series(mut self, series: &str) -> Result<Self> {
        if !self.map.has_series(series) {
            return Err(Error::UnknownSeries(series.to_string()))
        }
        self.weight_series = Some(series.to_string());
        let totals = (0..self.num_regions())
            .map(|region| self.aggregate(region, |unit| self.unit_weight(unit)))
            .collect::<Result<Vec<_>>>()?;
        self.totals = totals;
        Ok(self)
    }

    /// Get a reference to the underlying map.
    #[inline] pub fn map(&self) -> &Map { &self.map }

    /// Number of regions created so far (frozen included).
    #[inline] pub fn num_regions(&self) -> u32 { self.parts.num_sets() as u32 - 1 }

    /// Weight of a single unit, as used for region totals.
    pub(super) fn unit_weight(&self, unit: usize) -> f64 {
        match &self.weight_series {
            Some(series) => self.map.value(series, unit).unwrap_or(0.0),
            None => self.map.weight(unit),
        }
    }

    /// Get the partition set index of a region, failing on unknown ids.
    #[inline]
    pub(super) fn set_of(&self, region: u32) -> Result<usize> {
        if region < self.num_regions() { Ok(region as usize + 1) }
        else { Err(Error::UnknownRegion(region)) }
    }

    /// Create a region from seed units. Units already owned by a region are skipped.
    pub fn create_region(&mut self, units: &[usize]) -> Result<u32> {
        for &unit in units { self.map.check_unit(unit)?; }

        let region = self.num_regions();
        self.parts.add_set();
        self.frozen.push(false);
        self.totals.push(0.0);

        units.iter().for_each(|&unit| { self.assign(unit, region); });
        Ok(region)
    }

    /// Assign an unassigned unit to a region. Returns false if the unit was already owned.
    pub(super) fn assign(&mut self, unit: usize, region: u32) -> bool {
        if self.parts.find(unit) != 0 { return false }
        self.parts.move_to(unit, region as usize + 1);
        self.totals[region as usize] += self.unit_weight(unit);
        true
    }

    /// Exclude a region from further growth and from orphan resolution.
    pub fn freeze(&mut self, region: u32) -> Result<&mut Self> {
        self.set_of(region)?;
        self.frozen[region as usize] = true;
        Ok(self)
    }

    pub fn is_frozen(&self, region: u32) -> Result<bool> {
        self.set_of(region)?;
        Ok(self.frozen[region as usize])
    }

    /// Units of every region, in creation order.
    pub fn regions(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.parts.iter_sets().skip(1)
    }

    /// Units of a single region.
    pub fn region(&self, region: u32) -> Result<&[usize]> {
        Ok(self.parts.get(self.set_of(region)?))
    }

    /// Region currently owning a unit, if any.
    pub fn region_of(&self, unit: usize) -> Result<Option<u32>> {
        self.map.check_unit(unit)?;
        Ok(self.owner(unit))
    }

    /// Region currently owning the unit with the given external id, if any.
    pub fn region_of_id(&self, id: &str) -> Result<Option<u32>> {
        Ok(self.owner(self.map.require_index(id)?))
    }

    #[inline]
    pub(super) fn owner(&self, unit: usize) -> Option<u32> {
        match self.parts.find(unit) {
            0 => None,
            set => Some(set as u32 - 1),
        }
    }

    /// Units not owned by any region.
    #[inline] pub fn unassigned(&self) -> &[usize] { self.parts.get(0) }

    /// Owning region of every unit, index-parallel to the map.
    pub fn assignments(&self) -> Vec<Option<u32>> {
        (0..self.map.len()).map(|unit| self.owner(unit)).collect()
    }

    /// Regions owning the neighbors of a unit, frozen regions excluded.
    /// A region appears once per edge into it.
    pub fn neighbor_regions(&self, unit: usize) -> Result<SmallVec<[u32; 8]>> {
        self.map.check_unit(unit)?;
        Ok(self.open_neighbor_regions(unit))
    }

    pub(super) fn open_neighbor_regions(&self, unit: usize) -> SmallVec<[u32; 8]> {
        self.map.neighbors(unit)
            .filter_map(|v| self.owner(v))
            .filter(|&region| !self.frozen[region as usize])
            .collect()
    }

    /// Total weight of a region.
    pub fn weight_of(&self, region: u32) -> Result<f64> {
        self.set_of(region)?;
        Ok(self.totals[region as usize])
    }

    /// Total weight of every region, in creation order.
    #[inline] pub fn weights(&self) -> &[f64] { &self.totals }

    /// Sum an arbitrary per-unit quantity over a region.
    pub fn aggregate(&self, region: u32, accessor: impl Fn(usize) -> f64) -> Result<f64> {
        Ok(self.region(region)?.iter().map(|&unit| accessor(unit)).sum())
    }

    /// Sum a named data series over a region.
    pub fn total(&self, region: u32, series: &str) -> Result<f64> {
        self.map.data().sum_of(series, self.region(region)?)
    }

    /// Sum a named data series over every region, in creation order.
    pub fn totals(&self, series: &str) -> Result<Vec<f64>> {
        (0..self.num_regions())
            .map(|region| self.total(region, series))
            .collect()
    }
}
