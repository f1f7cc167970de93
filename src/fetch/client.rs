use std::time::Duration;

use reqwest::Client;

use super::error::FetchError;

pub const CELESTRAK_GP_URL: &str = "https://celestrak.org/NORAD/elements/gp.php";

/// Anything that can hand back the raw TLE text for a catalog number.
#[allow(async_fn_in_trait)]
pub trait TleSource {
    async fn fetch_tle(&self, norad_id: u32) -> Result<String, FetchError>;
}

pub struct CelestrakClient {
    client: Client,
    base_url: String,
}

impl CelestrakClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url_for(&self, norad_id: u32) -> String {
        format!("{}?CATNR={}&FORMAT=TLE", self.base_url, norad_id)
    }
}

impl TleSource for CelestrakClient {
    async fn fetch_tle(&self, norad_id: u32) -> Result<String, FetchError> {
        let url = self.url_for(norad_id);
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                norad_id,
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
