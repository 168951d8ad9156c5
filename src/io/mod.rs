//! Reading unit maps and per-unit data.
//!
//! - `json` - the unit map: ids, weights, data series and neighbor lists
//! - `csv` - tabular per-unit data joined onto a map by id

pub mod csv;
pub mod json;
