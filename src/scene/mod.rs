mod earth;
mod figure;
mod palette;

pub use earth::{EarthMesh, EARTH_RADIUS_KM};
pub use figure::build_scene;
pub use palette::{color_for, PALETTE};
