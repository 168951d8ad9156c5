mod map;
mod unit;

pub use map::Map;
pub use unit::Unit;
