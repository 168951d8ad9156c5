//! Error types for the region partitioner, the unit map and the apportioner.

/// Errors raised synchronously at the point of misuse.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A unit index is negative or not below the number of units.
    #[error("unit index {index} is out of range for {count} units")]
    InvalidUnit { index: i64, count: usize },

    /// An operation referenced a region id that was never created.
    #[error("unknown region {0}")]
    UnknownRegion(u32),

    /// The seat total cannot give every region its minimum seat.
    #[error("cannot apportion {seats} seats among {regions} regions")]
    InsufficientSeats { seats: u32, regions: usize },

    /// A region weight is negative, NaN or infinite.
    #[error("invalid weight {weight} at position {index}")]
    InvalidWeight { index: usize, weight: f64 },

    /// The adjacency list does not have one entry per unit.
    #[error("adjacency has {found} neighbor lists for {expected} units")]
    AdjacencyLength { expected: usize, found: usize },

    /// Two units share the same external identifier.
    #[error("duplicate unit id '{0}'")]
    DuplicateUnitId(String),

    /// No unit carries the given external identifier.
    #[error("unknown unit id '{0}'")]
    UnknownUnitId(String),

    /// No per-unit data series carries the given name.
    #[error("unknown series '{0}'")]
    UnknownSeries(String),

    /// A per-unit data series does not have one value per unit.
    #[error("series '{name}' has {found} values for {expected} units")]
    SeriesLength { name: String, expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
