//! Per-country cost table loaded from JSON
//!
//! The document maps a country key to its cost categories:
//!
//! ```json
//! {
//!   "germany": {
//!     "rent": [600, 1200],
//!     "food": [150, 300],
//!     "transport": [70, 100],
//!     "misc": [100, 250],
//!     "average_total": [920, 1850]
//!   }
//! }
//! ```
//!
//! A category may instead hold named options, each with its own range.
//! Option values that are not ranges are ignored. A country whose entry still
//! does not parse is dropped from the table; the other countries stay usable.

use crate::core::error::EstimateError;
use crate::core::models::{CostRange, CountryCosts};
use crate::warn;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Cost data shipped with the binary
const BUNDLED_COST_DATA: &str = include_str!("../../assets/cost_data.json");

/// Key used when a country is missing from the table
pub const FALLBACK_COUNTRY_KEY: &str = "germany";

/// Normalize a country display name into a table key.
///
/// Lower-cases and drops all whitespace: `"United Kingdom"` → `"unitedkingdom"`.
#[must_use]
pub fn country_key(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Read-only per-country cost table
#[derive(Debug, Clone, Default)]
pub struct CostTable {
    entries: HashMap<String, CountryCosts>,
}

impl CostTable {
    /// Parse a cost table from a JSON document.
    ///
    /// Keys are normalized with [`country_key`]. Irregular entries are
    /// skipped with a warning.
    ///
    /// # Errors
    /// Returns `DataUnavailable` if the document is not a JSON object.
    pub fn from_json(json: &str) -> Result<Self, EstimateError> {
        let raw: Map<String, Value> = serde_json::from_str(json)
            .map_err(|e| EstimateError::unavailable(format!("malformed cost data: {e}")))?;
        Ok(raw
            .into_iter()
            .filter_map(|(name, value)| match parse_country(&name, value) {
                Ok(costs) => Some((name, costs)),
                Err(e) => {
                    warn!("Skipping cost data for '{name}': {e}");
                    None
                }
            })
            .collect())
    }

    /// Load a cost table from a JSON file
    ///
    /// # Errors
    /// Returns `DataUnavailable` if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, EstimateError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            EstimateError::unavailable(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json(&content)
    }

    /// The cost table compiled into the binary
    ///
    /// # Errors
    /// Returns `DataUnavailable` if the bundled document is malformed.
    pub fn bundled() -> Result<Self, EstimateError> {
        Self::from_json(BUNDLED_COST_DATA)
    }

    /// Load from `path` when given and non-empty, otherwise use the bundled table
    ///
    /// # Errors
    /// Returns `DataUnavailable` if the selected source cannot be loaded.
    pub fn load_or_bundled(path: Option<&Path>) -> Result<Self, EstimateError> {
        match path {
            Some(p) if !p.as_os_str().is_empty() => Self::load(p),
            _ => Self::bundled(),
        }
    }

    /// Entry for an already-normalized key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CountryCosts> {
        self.entries.get(key)
    }

    /// Insert or replace an entry; the key is normalized
    pub fn insert(&mut self, country: &str, costs: CountryCosts) {
        self.entries.insert(country_key(country), costs);
    }

    /// All country keys, sorted
    #[must_use]
    pub fn countries(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Number of countries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no countries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse one country entry, discarding option values that are not ranges
fn parse_country(name: &str, mut value: Value) -> Result<CountryCosts, String> {
    if let Value::Object(categories) = &mut value {
        for (category, shape) in categories.iter_mut() {
            let Value::Object(options) = shape else {
                continue;
            };
            options.retain(|option, range| {
                let is_range = serde_json::from_value::<CostRange>(range.clone()).is_ok();
                if !is_range {
                    warn!("Ignoring non-range option '{option}' in {name}.{category}");
                }
                is_range
            });
            if options.is_empty() {
                return Err(format!("'{category}' has no usable options"));
            }
        }
    }
    serde_json::from_value(value).map_err(|e| e.to_string())
}

impl FromIterator<(String, CountryCosts)> for CostTable {
    fn from_iter<I: IntoIterator<Item = (String, CountryCosts)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, costs)| (country_key(&name), costs))
                .collect(),
        }
    }
}
