use crate::error::{Error, Result};

/// An unweighted adjacency graph in compressed sparse row format.
///
/// Neighbor lists are kept exactly as supplied: duplicate edges survive and
/// asymmetric edges are not repaired.
#[derive(Clone, Debug, Default)]
pub(crate) struct Graph {
    size: usize,
    offsets: Vec<u32>,
    edges: Vec<u32>,
}

impl Graph {
    /// Construct a graph from adjacency lists, rejecting out-of-range neighbors.
    pub(crate) fn new(edges: &[Vec<usize>]) -> Result<Self> {
        let size = edges.len();
        if let Some(&index) = edges.iter().flatten().find(|&&v| v >= size) {
            return Err(Error::InvalidUnit { index: index as i64, count: size })
        }

        Ok(Self {
            size,
            offsets: std::iter::once(0u32).chain(
                edges.iter()
                    .map(|v| v.len() as u32)
                    .scan(0u32, |acc, len| {*acc += len; Some(*acc)})
            ).collect::<Vec<u32>>(),
            edges: edges.iter().flatten().map(|&v| v as u32).collect(),
        })
    }

    /// Get the number of nodes in the graph.
    #[inline] pub(crate) fn node_count(&self) -> usize { self.size }

    /// Get the range of edges for a given node.
    #[inline]
    fn range(&self, node: usize) -> std::ops::Range<usize> {
        self.offsets[node] as usize .. self.offsets[node + 1] as usize
    }

    /// Get the degree (number of neighbor entries, duplicates included) of a given node.
    #[inline] pub(crate) fn degree(&self, node: usize) -> usize { self.range(node).len() }

    /// Get an iterator over the neighbors of a given node.
    #[inline]
    pub(crate) fn edges(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.range(node).map(move |v| self.edges[v] as usize)
    }

    /// Rebuild the adjacency lists this graph was constructed from.
    pub(crate) fn to_adjacency(&self) -> Vec<Vec<usize>> {
        (0..self.size).map(|node| self.edges(node).collect()).collect()
    }

    /// Return a copy of this graph with each pair connected in both directions.
    pub(crate) fn with_extra_edges(&self, pairs: &[(usize, usize)]) -> Result<Self> {
        let mut adjacency = self.to_adjacency();
        for &(a, b) in pairs {
            for node in [a, b] {
                if node >= self.node_count() {
                    return Err(Error::InvalidUnit { index: node as i64, count: self.node_count() })
                }
            }
            adjacency[a].push(b);
            adjacency[b].push(a);
        }
        Self::new(&adjacency)
    }
}
