//! CSV reading of per-unit data (census populations, election results).

use std::{fs::File, io::Cursor, path::Path};

use anyhow::{Context, Result, ensure};
use polars::{frame::DataFrame, io::SerReader, prelude::{CsvReadOptions, CsvReader, DataType}};
use tracing::{debug, warn};

use crate::map::Map;

/// Every column is read as a string so ids keep their leading zeros.
fn string_options() -> CsvReadOptions {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
}

/// Reads a CSV file from `path` into a Polars DataFrame.
pub fn read_csv(path: &Path) -> Result<DataFrame> {
    let file = File::open(path)
        .with_context(|| format!("[io::csv] Failed to open CSV file: {}", path.display()))?;
    string_options()
        .into_reader_with_file_handle(file)
        .finish()
        .with_context(|| format!("[io::csv] Failed to read CSV from {:?}", path))
}

/// Reads CSV bytes into a Polars DataFrame.
pub fn read_csv_bytes(bytes: &[u8]) -> Result<DataFrame> {
    CsvReader::new(Cursor::new(bytes))
        .with_options(string_options())
        .finish()
        .context("[io::csv] Failed to read CSV from bytes")
}

/// Attach every non-id column of `df` to the map as a data series, joined on `id_column`.
///
/// Ids and cells are trimmed. Rows with unknown ids are ignored, units without a row get 0,
/// and cells that do not parse as numbers count as 0 (with a warning). Returns the number of rows matched to a unit.
pub fn attach_data(map: &mut Map, df: &DataFrame, id_column: &str) -> Result<usize> {
    let names = df.get_column_names().iter().map(|name| name.to_string()).collect::<Vec<_>>();
    ensure!(names.iter().any(|name| name == id_column), "[io::csv] CSV has no id column '{id_column}'");

    let ids = df.column(id_column)?.cast(&DataType::String)?;
    let rows = ids.str()?.into_iter()
        .map(|id| id.and_then(|id| map.index_of(id.trim())))
        .collect::<Vec<_>>();
    let matched = rows.iter().filter(|row| row.is_some()).count();

    let mut unparsed = 0usize;
    for name in names.iter().filter(|&name| name != id_column) {
        let column = df.column(name)?.cast(&DataType::String)?;
        let mut values = vec![0.0; map.len()];
        for (row, cell) in rows.iter().zip(column.str()?.into_iter()) {
            let Some(cell) = cell.map(str::trim).filter(|cell| !cell.is_empty()) else { continue };
            match cell.parse::<f64>() {
                Ok(value) => if let Some(unit) = row { values[*unit] = value },
                Err(_) => unparsed += 1,
            }
        }
        map.insert_series(name, values)?;
    }

    if unparsed > 0 { warn!(cells = unparsed, "CSV cells are not numbers, counted as 0") }
    debug!(rows = df.height(), matched, columns = names.len() - 1, "attached CSV data");
    Ok(matched)
}

/// Reads a CSV file and attaches its columns to the map.
pub fn read_data(map: &mut Map, path: &Path, id_column: &str) -> Result<usize> {
    attach_data(map, &read_csv(path)?, id_column)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::map::Unit;
    use super::*;

    fn map() -> Map {
        Map::new(
            vec![Unit::new("01001", 1.0), Unit::new("01003", 1.0), Unit::new("01005", 1.0)],
            &[vec![1], vec![0, 2], vec![1]],
        ).unwrap()
    }

    const RESULTS: &str = "GEOID,d2016,r2016\n01001,5,7\n01005,9,x\n99999,1,1\n";

    #[test]
    fn joins_columns_by_id() {
        let mut map = map();
        let df = read_csv_bytes(RESULTS.as_bytes()).unwrap();
        let matched = attach_data(&mut map, &df, "GEOID").unwrap();

        assert_eq!(matched, 2);
        assert_eq!(map.series(), vec!["d2016", "r2016"]);
        assert_eq!(map.value("d2016", 0).unwrap(), 5.0);
        assert_eq!(map.value("d2016", 1).unwrap(), 0.0);
        assert_eq!(map.value("d2016", 2).unwrap(), 9.0);
        assert_eq!(map.value("r2016", 2).unwrap(), 0.0);
    }

    #[test]
    fn padded_cells_are_trimmed_before_parsing() {
        let mut map = Map::new(
            (0..4).map(|i| Unit::new(format!("u{i}"), 1.0)).collect(),
            &vec![vec![]; 4],
        ).unwrap();
        let df = read_csv_bytes(b"GEOID,v\nu0,x\nu1, 5\n u2 ,1e3 \nu3,\n").unwrap();
        assert_eq!(attach_data(&mut map, &df, "GEOID").unwrap(), 4);

        let values = (0..4).map(|unit| map.value("v", unit).unwrap()).collect::<Vec<_>>();
        assert_eq!(values, vec![0.0, 5.0, 1000.0, 0.0]);
    }

    #[test]
    fn ids_keep_leading_zeros() {
        let df = read_csv_bytes(RESULTS.as_bytes()).unwrap();
        let ids = df.column("GEOID").unwrap().str().unwrap().into_no_null_iter().collect::<Vec<_>>();
        assert_eq!(ids, vec!["01001", "01005", "99999"]);
    }

    #[test]
    fn missing_id_column_is_an_error() {
        let mut map = map();
        let df = read_csv_bytes(RESULTS.as_bytes()).unwrap();
        let err = attach_data(&mut map, &df, "FIPS").unwrap_err();
        assert!(err.to_string().contains("no id column 'FIPS'"));
    }

    #[test]
    fn reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(RESULTS.as_bytes()).unwrap();

        let mut map = map();
        assert_eq!(read_data(&mut map, file.path(), "GEOID").unwrap(), 2);
        assert!(read_csv(Path::new("/nonexistent/results.csv")).is_err());
    }
}
