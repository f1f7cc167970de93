use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrbitError {
    #[error("Invalid TLE for NORAD {norad_id}: {message}")]
    InvalidTle { norad_id: u32, message: String },
    #[error("Invalid elements for NORAD {norad_id}: {message}")]
    Elements { norad_id: u32, message: String },
    #[error("Time conversion error: {0}")]
    TimeConversion(String),
}
