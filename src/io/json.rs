//! JSON map reading.
//!
//! ```json
//! {
//!   "units": [{"id": "01001", "weight": 54571, "data": {"pop10": 54571}}],
//!   "neighbors": [[1, 2]]
//! }
//! ```

use std::{collections::BTreeMap, fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::{error::Error, map::{Map, Unit}};

#[derive(Debug, Deserialize)]
struct MapFile {
    units: Vec<UnitRecord>,
    neighbors: Vec<Vec<i64>>, // signed so negative indices can be reported
}

#[derive(Debug, Deserialize)]
struct UnitRecord {
    id: String,
    #[serde(default)]
    weight: f64,
    #[serde(default)]
    data: BTreeMap<String, f64>,
}

/// Reads a map from a JSON file at `path`.
pub fn read_map(path: &Path) -> Result<Map> {
    let file = File::open(path)
        .with_context(|| format!("[io::json] Failed to open map file: {}", path.display()))?;
    let parsed: MapFile = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("[io::json] Failed to parse map file: {}", path.display()))?;
    build_map(parsed)
}

/// Reads a map from a JSON string.
pub fn read_map_str(json: &str) -> Result<Map> {
    let parsed: MapFile = serde_json::from_str(json)
        .context("[io::json] Failed to parse map JSON")?;
    build_map(parsed)
}

fn build_map(file: MapFile) -> Result<Map> {
    let count = file.units.len();
    let neighbors = file.neighbors.iter()
        .map(|list| list.iter()
            .map(|&index| usize::try_from(index).map_err(|_| Error::InvalidUnit { index, count }))
            .collect::<Result<Vec<_>, _>>())
        .collect::<Result<Vec<_>, _>>()
        .context("[io::json] Invalid neighbor index")?;

    // Union of data series across units; units without a value get 0.
    let mut series = BTreeMap::<String, Vec<f64>>::new();
    for (i, unit) in file.units.iter().enumerate() {
        for (name, &value) in &unit.data {
            series.entry(name.clone()).or_insert_with(|| vec![0.0; count])[i] = value;
        }
    }

    let units = file.units.into_iter().map(|record| Unit::new(record.id, record.weight)).collect();
    let mut map = Map::new(units, &neighbors).context("[io::json] Invalid map")?;
    for (name, values) in series {
        map.insert_series(&name, values)?;
    }
    Ok(map)
}
