// src/regions/mod.rs

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{
    collections::{HashMap, HashSet},
    fmt, fs,
    path::Path,
};
use thiserror::Error;
use tracing::info;

static EMBEDDED_REGIONS: &str = include_str!("../../data/regions.json");

static EMBEDDED: Lazy<Result<RegionLookup, LookupError>> =
    Lazy::new(|| RegionLookup::from_json(EMBEDDED_REGIONS));

/// Census region a state belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    Northeast,
    Midwest,
    South,
    West,
}

impl Region {
    pub const ALL: [Region; 4] = [
        Region::Northeast,
        Region::Midwest,
        Region::South,
        Region::West,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Northeast => "Northeast",
            Region::Midwest => "Midwest",
            Region::South => "South",
            Region::West => "West",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionMeta {
    pub state: String,
    pub state_code: String,
    pub region: Region,
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("parsing region lookup: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("reading region lookup: {0}")]
    Io(#[from] std::io::Error),
    #[error("duplicate {field} `{value}` in region lookup")]
    Duplicate { field: &'static str, value: String },
}

/// State name → (code, region), joined onto fetched rows by name.
#[derive(Debug, Clone)]
pub struct RegionLookup {
    by_name: HashMap<String, RegionMeta>,
}

impl RegionLookup {
    /// The 50 states plus the District of Columbia.
    pub fn embedded() -> Result<&'static RegionLookup, &'static LookupError> {
        Lazy::force(&EMBEDDED).as_ref()
    }

    pub fn from_path(path: &Path) -> Result<Self, LookupError> {
        let text = fs::read_to_string(path)?;
        let lookup = Self::from_json(&text)?;
        info!(path = %path.display(), entries = lookup.len(), "loaded region lookup");
        Ok(lookup)
    }

    pub fn from_json(text: &str) -> Result<Self, LookupError> {
        let entries: Vec<RegionMeta> = serde_json::from_str(text)?;
        Self::from_entries(entries)
    }

    pub fn from_entries(entries: Vec<RegionMeta>) -> Result<Self, LookupError> {
        let mut codes = HashSet::with_capacity(entries.len());
        let mut by_name = HashMap::with_capacity(entries.len());
        for meta in entries {
            if !codes.insert(meta.state_code.clone()) {
                return Err(LookupError::Duplicate {
                    field: "state_code",
                    value: meta.state_code,
                });
            }
            if by_name.contains_key(&meta.state) {
                return Err(LookupError::Duplicate {
                    field: "state",
                    value: meta.state,
                });
            }
            by_name.insert(meta.state.clone(), meta);
        }
        Ok(Self { by_name })
    }

    pub fn get(&self, state: &str) -> Option<&RegionMeta> {
        self.by_name.get(state)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_covers_states_and_dc() {
        let lookup = RegionLookup::embedded().unwrap();
        assert_eq!(lookup.len(), 51);

        let dc = lookup.get("District of Columbia").unwrap();
        assert_eq!(dc.state_code, "DC");
        assert_eq!(dc.region, Region::South);

        let pa = lookup.get("Pennsylvania").unwrap();
        assert_eq!(pa.state_code, "PA");
        assert_eq!(pa.region, Region::Northeast);

        assert!(lookup.get("Puerto Rico").is_none());
    }

    #[test]
    fn embedded_region_counts() {
        let lookup = RegionLookup::embedded().unwrap();
        let count = |r: Region| lookup.by_name.values().filter(|m| m.region == r).count();
        assert_eq!(count(Region::Northeast), 9);
        assert_eq!(count(Region::Midwest), 12);
        assert_eq!(count(Region::South), 17);
        assert_eq!(count(Region::West), 13);
    }

    #[test]
    fn rejects_duplicate_codes() {
        let text = r#"[
            {"state": "A", "state_code": "XX", "region": "West"},
            {"state": "B", "state_code": "XX", "region": "South"}
        ]"#;
        match RegionLookup::from_json(text) {
            Err(LookupError::Duplicate { field, value }) => {
                assert_eq!(field, "state_code");
                assert_eq!(value, "XX");
            }
            other => panic!("expected duplicate error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_region() {
        let text = r#"[{"state": "A", "state_code": "AA", "region": "Pacific"}]"#;
        assert!(matches!(
            RegionLookup::from_json(text),
            Err(LookupError::Parse(_))
        ));
    }
}
