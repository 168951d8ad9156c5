#![doc = "Statemaker public API"]
mod apportion;
mod error;
mod graph;
mod map;
mod partition;

pub mod io;
pub mod simulation;

#[doc(inline)]
pub use apportion::{apportion, electoral_votes};

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use map::{Map, Unit};

#[doc(inline)]
pub use partition::{Acceptance, DivideOptions, PowScale, RegionPartitioner, ScaledAcceptance};

#[doc(inline)]
pub use simulation::{Simulation, SimulationConfig};
