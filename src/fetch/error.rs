use thiserror::Error;

use crate::catalog::CatalogError;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("NORAD {norad_id}: unexpected status {status}")]
    Status { norad_id: u32, status: u16 },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("persist error: {0}")]
    Persist(#[from] CatalogError),
}
