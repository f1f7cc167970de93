use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::CatalogError;
use super::types::{Catalog, SatelliteRecord};

/// On-disk TLE mapping: NORAD id -> `[name, line1, line2]`.
///
/// Serialises as a JSON object whose keys keep insertion order, so two runs
/// over identical responses produce identical files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TleDocument {
    entries: Vec<(u32, [String; 3])>,
}

impl TleDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, norad_id: u32, lines: [String; 3]) {
        match self.entries.iter_mut().find(|(id, _)| *id == norad_id) {
            Some((_, existing)) => *existing = lines,
            None => self.entries.push((norad_id, lines)),
        }
    }

    pub fn get(&self, norad_id: u32) -> Option<&[String; 3]> {
        self.entries
            .iter()
            .find(|(id, _)| *id == norad_id)
            .map(|(_, lines)| lines)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }

    pub fn to_json_pretty(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Overwrites `path` with the pretty-printed document
    pub fn save(&self, path: &Path) -> Result<(), CatalogError> {
        fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn to_catalog(&self) -> Catalog {
        self.entries
            .iter()
            .map(|(id, [name, line1, line2])| SatelliteRecord::new(*id, name, line1, line2))
            .collect()
    }
}

impl Serialize for TleDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, lines) in &self.entries {
            map.serialize_entry(&id.to_string(), lines)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TleDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DocumentVisitor)
    }
}

struct DocumentVisitor;

impl<'de> Visitor<'de> for DocumentVisitor {
    type Value = TleDocument;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of NORAD id to [name, line1, line2]")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut document = TleDocument::new();
        while let Some((key, lines)) = access.next_entry::<String, [String; 3]>()? {
            let id = key
                .trim()
                .parse::<u32>()
                .map_err(|_| serde::de::Error::custom(CatalogError::InvalidId(key.clone())))?;
            document.insert(id, lines);
        }
        Ok(document)
    }
}
