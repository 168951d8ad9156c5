mod graph;
mod weights;

pub(crate) use graph::Graph;
pub(crate) use weights::WeightMatrix;
