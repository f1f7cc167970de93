use std::sync::Arc;

use crate::catalog::{embedded_catalog, Catalog, CatalogError, TleDocument};
use crate::config::VisualizerConfig;
use crate::orbit::PositionCache;

pub const EMBEDDED_SOURCE: &str = "pre-saved TLE data";

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub positions: Arc<PositionCache>,
    /// How the page describes where the element sets came from
    pub source: Arc<str>,
}

impl AppState {
    pub fn new(catalog: Catalog, source: &str) -> Self {
        Self {
            catalog: Arc::new(catalog),
            positions: Arc::new(PositionCache::new()),
            source: source.into(),
        }
    }

    /// Built-in element sets unless a fetcher output file is configured
    pub fn from_config(config: &VisualizerConfig) -> Result<Self, CatalogError> {
        match &config.tle_file {
            Some(path) => {
                log::info!("Loading element sets from {}", path.display());
                let catalog = TleDocument::load(path)?.to_catalog();
                let source = format!("TLE data loaded from {}", path.display());
                Ok(Self::new(catalog, &source))
            }
            None => Ok(Self::new(embedded_catalog(), EMBEDDED_SOURCE)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SatelliteRecord;

    #[test]
    fn default_config_uses_built_in_set() {
        let state = AppState::from_config(&VisualizerConfig::default()).unwrap();
        assert_eq!(state.catalog.len(), 10);
        assert_eq!(&*state.source, EMBEDDED_SOURCE);
    }

    #[test]
    fn configured_file_is_named_as_the_source() {
        let path = std::env::temp_dir().join(format!("tle-{}.json", uuid::Uuid::new_v4()));
        let mut document = TleDocument::new();
        let iss = embedded_catalog().records()[1].clone();
        document.insert(iss.norad_id, [iss.name.clone(), iss.line1.clone(), iss.line2.clone()]);
        document.save(&path).unwrap();

        let config = VisualizerConfig {
            tle_file: Some(path.clone()),
        };
        let state = AppState::from_config(&config).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(
            state.catalog.records(),
            &[SatelliteRecord::new(iss.norad_id, &iss.name, &iss.line1, &iss.line2)]
        );
        assert_eq!(&*state.source, format!("TLE data loaded from {}", path.display()));
    }
}
