use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};

use super::error::OrbitError;
use super::propagation::{compute_positions, OrbitSnapshot};
use super::time_grid::TimeGrid;
use crate::catalog::Catalog;

struct Entry {
    catalog: Catalog,
    snapshot: Arc<OrbitSnapshot>,
}

/// Process-lifetime memo table for computed positions, keyed by catalog content.
///
/// The first computation for a catalog fixes its time grid; later requests with
/// an equal catalog get the same snapshot back regardless of `now`.
#[derive(Default)]
pub struct PositionCache {
    entries: Mutex<HashMap<u64, Vec<Entry>>>,
}

impl PositionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute(
        &self,
        catalog: &Catalog,
        now: DateTime<Utc>,
    ) -> Result<Arc<OrbitSnapshot>, OrbitError> {
        let key = catalog.content_hash();
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        let hit = entries
            .get(&key)
            .and_then(|bucket| bucket.iter().find(|e| e.catalog == *catalog));
        if let Some(hit) = hit {
            log::debug!("position cache hit for {} satellites", catalog.len());
            return Ok(hit.snapshot.clone());
        }

        log::info!("Computing positions for {} satellites", catalog.len());
        let snapshot = Arc::new(compute_positions(
            catalog,
            TimeGrid::last_thirty_days(now),
        )?);

        entries.entry(key).or_default().push(Entry {
            catalog: catalog.clone(),
            snapshot: snapshot.clone(),
        });

        Ok(snapshot)
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
