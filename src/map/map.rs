use ahash::AHashMap;

use crate::{error::{Error, Result}, graph::{Graph, WeightMatrix}};
use super::unit::Unit;

/// The atomic units of a country, their adjacency graph and per-unit data series.
///
/// A map is built once and then shared read-only between partitioners.
#[derive(Clone, Debug)]
pub struct Map {
    units: Vec<Unit>,
    index: AHashMap<String, usize>, // Map between unit ids and indices.
    graph: Graph,
    data: WeightMatrix, // Extra per-unit series (census populations, votes).
}

impl Map {
    /// Build a map from units and index-parallel neighbor lists.
    pub fn new(units: Vec<Unit>, neighbors: &[Vec<usize>]) -> Result<Self> {
        if neighbors.len() != units.len() {
            return Err(Error::AdjacencyLength { expected: units.len(), found: neighbors.len() })
        }

        let mut index = AHashMap::with_capacity(units.len());
        for (i, unit) in units.iter().enumerate() {
            if index.insert(unit.id.to_string(), i).is_some() {
                return Err(Error::DuplicateUnitId(unit.id.to_string()))
            }
        }

        Ok(Self {
            data: WeightMatrix::new(units.len()),
            graph: Graph::new(neighbors)?,
            units,
            index,
        })
    }

    /// Number of units in the map.
    #[inline] pub fn len(&self) -> usize { self.units.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.units.is_empty() }

    #[inline] pub fn units(&self) -> &[Unit] { &self.units }

    #[inline] pub fn unit(&self, unit: usize) -> Option<&Unit> { self.units.get(unit) }

    /// Look up a unit index by its external id.
    #[inline] pub fn index_of(&self, id: &str) -> Option<usize> { self.index.get(id).copied() }

    /// Look up a unit index by its external id, failing on unknown ids.
    pub fn require_index(&self, id: &str) -> Result<usize> {
        self.index_of(id).ok_or_else(|| Error::UnknownUnitId(id.to_string()))
    }

    /// Fail with `InvalidUnit` unless `unit` is a valid index.
    pub fn check_unit(&self, unit: usize) -> Result<usize> {
        if unit < self.len() { Ok(unit) }
        else { Err(Error::InvalidUnit { index: unit as i64, count: self.len() }) }
    }

    /// Primary weight (population) of a unit.
    ///
    /// Panics if `unit` is out of range; see [`Map::check_unit`].
    #[inline] pub fn weight(&self, unit: usize) -> f64 { self.units[unit].weight }

    /// Neighbor entries of a unit, duplicates included.
    ///
    /// Panics if `unit` is out of range; see [`Map::check_unit`].
    #[inline]
    pub fn neighbors(&self, unit: usize) -> impl Iterator<Item = usize> + '_ {
        self.graph.edges(unit)
    }

    /// Panics if `unit` is out of range.
    #[inline] pub fn degree(&self, unit: usize) -> usize { self.graph.degree(unit) }

    /// Copy of the adjacency lists.
    pub fn neighbor_lists(&self) -> Vec<Vec<usize>> { self.graph.to_adjacency() }

    /// Force adjacency between pairs of units given by id (e.g. across a strait).
    pub fn connect<S: AsRef<str>>(&mut self, pairs: &[(S, S)]) -> Result<()> {
        let pairs = pairs.iter()
            .map(|(a, b)| Ok((self.require_index(a.as_ref())?, self.require_index(b.as_ref())?)))
            .collect::<Result<Vec<_>>>()?;
        self.graph = self.graph.with_extra_edges(&pairs)?;
        Ok(())
    }

    /// Attach a named per-unit data series, index-parallel to the units.
    pub fn insert_series(&mut self, name: &str, values: Vec<f64>) -> Result<()> {
        self.data.insert(name, values)
    }

    #[inline] pub fn has_series(&self, name: &str) -> bool { self.data.contains(name) }

    /// Names of all attached data series, sorted.
    #[inline] pub fn series(&self) -> Vec<&str> { self.data.series() }

    /// Value of a data series at one unit.
    #[inline]
    pub fn value(&self, series: &str, unit: usize) -> Result<f64> {
        self.check_unit(unit)?;
        self.data.get(series, unit)
    }

    #[inline] pub(crate) fn data(&self) -> &WeightMatrix { &self.data }
}
