use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("TLE file I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TLE file parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid NORAD id: {0}")]
    InvalidId(String),
}
