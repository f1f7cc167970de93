use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// A satellite identified by its NORAD catalog number with its element set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SatelliteRecord {
    pub norad_id: u32,
    pub name: String,
    pub line1: String,
    pub line2: String,
}

impl SatelliteRecord {
    pub fn new(norad_id: u32, name: &str, line1: &str, line2: &str) -> Self {
        Self {
            norad_id,
            name: name.to_string(),
            line1: line1.to_string(),
            line2: line2.to_string(),
        }
    }
}

/// Ordered set of satellites. Order drives colour assignment in the scene.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Catalog {
    records: Vec<SatelliteRecord>,
}

impl Catalog {
    pub fn new(records: Vec<SatelliteRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SatelliteRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Inserts a record, replacing any previous one with the same id in place.
    pub fn insert(&mut self, record: SatelliteRecord) {
        match self.records.iter_mut().find(|r| r.norad_id == record.norad_id) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    pub fn content_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl FromIterator<SatelliteRecord> for Catalog {
    fn from_iter<I: IntoIterator<Item = SatelliteRecord>>(iter: I) -> Self {
        let mut catalog = Catalog::default();
        for record in iter {
            catalog.insert(record);
        }
        catalog
    }
}
