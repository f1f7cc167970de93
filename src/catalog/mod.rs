mod document;
mod embedded;
mod error;
mod types;

pub use document::TleDocument;
pub use embedded::{embedded_catalog, NORAD_IDS};
pub use error::CatalogError;
pub use types::{Catalog, SatelliteRecord};
