mod cache;
mod error;
mod propagation;
mod time_grid;

pub use cache::PositionCache;
pub use error::OrbitError;
pub use propagation::{compute_positions, OrbitSnapshot, PositionSeries, SatelliteTrack};
pub use time_grid::TimeGrid;
