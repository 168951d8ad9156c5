use ahash::AHashMap;
use ndarray::{Array2, ArrayView1, Axis};

use crate::error::{Error, Result};

/// Named per-node f64 series stored column-wise in one matrix.
#[derive(Clone, Debug)]
pub(crate) struct WeightMatrix {
    series: AHashMap<String, usize>, // series name -> column
    values: Array2<f64>,             // (n, k)
}

impl WeightMatrix {
    /// Create an empty matrix for `num_nodes` nodes.
    pub(crate) fn new(num_nodes: usize) -> Self {
        Self { series: AHashMap::new(), values: Array2::zeros((num_nodes, 0)) }
    }

    #[inline] pub(crate) fn num_nodes(&self) -> usize { self.values.nrows() }

    #[inline] pub(crate) fn contains(&self, series: &str) -> bool { self.series.contains_key(series) }

    /// Names of all series, sorted.
    pub(crate) fn series(&self) -> Vec<&str> {
        let mut names = self.series.keys().map(String::as_str).collect::<Vec<_>>();
        names.sort_unstable();
        names
    }

    /// Insert a series, replacing any existing series of the same name.
    pub(crate) fn insert(&mut self, name: &str, values: Vec<f64>) -> Result<()> {
        if values.len() != self.num_nodes() {
            return Err(Error::SeriesLength {
                name: name.to_string(),
                expected: self.num_nodes(),
                found: values.len(),
            })
        }

        match self.series.get(name) {
            Some(&column) => self.values.column_mut(column).assign(&ArrayView1::from(&values)),
            None => {
                self.values.push_column(ArrayView1::from(&values))
                    .expect("column length matches row count");
                self.series.insert(name.to_string(), self.values.ncols() - 1);
            }
        }
        Ok(())
    }

    /// Borrow one series as a column view.
    pub(crate) fn column(&self, series: &str) -> Result<ArrayView1<'_, f64>> {
        self.series.get(series)
            .map(|&column| self.values.index_axis(Axis(1), column))
            .ok_or_else(|| Error::UnknownSeries(series.to_string()))
    }

    /// Value of a series at a single node.
    pub(crate) fn get(&self, series: &str, node: usize) -> Result<f64> {
        Ok(self.column(series)?[node])
    }

    /// Sum of a series over a set of nodes.
    pub(crate) fn sum_of(&self, series: &str, nodes: &[usize]) -> Result<f64> {
        let column = self.column(series)?;
        Ok(nodes.iter().map(|&node| column[node]).sum())
    }
}
