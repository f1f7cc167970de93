mod client;
mod error;
mod fetcher;

pub use client::{CelestrakClient, TleSource, CELESTRAK_GP_URL};
pub use error::FetchError;
pub use fetcher::{fetch_all, parse_tle_response, run, run_with};
