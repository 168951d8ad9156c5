mod accept;
mod grow;
mod partition_set;
mod partitioner;

pub(self) use partition_set::PartitionSet;
pub use accept::{Acceptance, PowScale, ScaledAcceptance};
pub use grow::DivideOptions;
pub use partitioner::RegionPartitioner;
