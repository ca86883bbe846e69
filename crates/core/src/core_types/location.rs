//! Location lookup table
//!
//! Maps a location name to the terrain grade and the effective sunshine hours
//! used to derive the solar energy a panel delivers there. The table is plain
//! configuration: callers may replace it, extend it, or load it from TOML
//! without touching the formula chain.
//!
//! # File format
//! ```toml
//! [[location]]
//! name = "Hostouň (Rovina)"
//! slope_percent = 0.5
//! exposure_hours = 3.8
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::scenario::EnergySource;

/// Errors raised when building or querying a [`LocationTable`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LocationError {
    #[error("unknown location '{0}'")]
    UnknownLocation(String),

    #[error("location '{0}' is defined more than once")]
    DuplicateLocation(String),

    #[error("location '{name}': {reason}")]
    InvalidLocation { name: String, reason: String },

    #[error("malformed location table: {0}")]
    Malformed(String),
}

/// Terrain and sunshine of one location.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Typical terrain grade (%)
    pub slope_percent: f64,
    /// Effective full-power sunlight hours per day
    pub exposure_hours: f64,
}

impl Location {
    /// Built-in regions. Exposure is the number of effective full-power hours
    /// for the region. The first entry is the default riding location.
    pub const BUILTIN: [(&'static str, Location); 5] = [
        ("Hostouň (Rovina)", Location::new(0.5, 3.8)),    // flat
        ("Praha (Mírné kopce)", Location::new(1.5, 3.5)), // gentle hills
        ("Brno (Zvlněné)", Location::new(2.5, 3.6)),      // rolling
        ("Šumava (Hory)", Location::new(5.0, 3.0)),       // mountains
        ("Itálie (Jih)", Location::new(1.0, 5.0)),        // southern Italy
    ];

    pub const fn new(slope_percent: f64, exposure_hours: f64) -> Self {
        Location {
            slope_percent,
            exposure_hours,
        }
    }

    /// Energy source for a scenario ridden here
    #[inline]
    pub fn energy_source(&self) -> EnergySource {
        EnergySource::NamedLocation {
            slope_percent: self.slope_percent,
            exposure_hours: self.exposure_hours,
        }
    }

    fn validate(&self, name: &str) -> Result<(), LocationError> {
        let invalid = |reason: &str| LocationError::InvalidLocation {
            name: name.to_string(),
            reason: reason.to_string(),
        };
        if !self.slope_percent.is_finite() {
            return Err(invalid("slope_percent must be finite"));
        }
        if !self.exposure_hours.is_finite() || self.exposure_hours < 0.0 {
            return Err(invalid("exposure_hours must be finite and non-negative"));
        }
        Ok(())
    }
}

/// One `[[location]]` entry of a table file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationEntry {
    name: String,
    slope_percent: f64,
    exposure_hours: f64,
}

/// Serialized form of a [`LocationTable`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationFile {
    #[serde(default)]
    location: Vec<LocationEntry>,
}

/// Named key-value table of locations, iterated in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LocationFile", into = "LocationFile")]
pub struct LocationTable {
    entries: Vec<(String, Location)>,
    index: FxHashMap<String, usize>,
}

impl LocationTable {
    /// Empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Czech and Italian riding regions the calculator ships with, in the
    /// order [`Location::BUILTIN`] lists them.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for (name, location) in Location::BUILTIN {
            table.insert(name, location);
        }
        table
    }

    /// Parse a table from TOML (`[[location]]` array of tables).
    ///
    /// # Errors
    /// Returns [`LocationError::Malformed`] when the text is not valid TOML of
    /// the expected shape, [`LocationError::DuplicateLocation`] when a name
    /// repeats, and [`LocationError::InvalidLocation`] for non-finite values
    /// or negative exposure.
    pub fn from_toml_str(text: &str) -> Result<Self, LocationError> {
        let file: LocationFile = toml::from_str(text)
            .map_err(|e| LocationError::Malformed(e.message().to_string()))?;
        Self::try_from(file)
    }

    /// Insert or replace a location, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, location: Location) -> Option<Location> {
        let name = name.into();
        if let Some(&i) = self.index.get(&name) {
            return Some(std::mem::replace(&mut self.entries[i].1, location));
        }
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, location));
        None
    }

    /// Remove a location, keeping the order of the remaining entries.
    pub fn remove(&mut self, name: &str) -> Option<Location> {
        let i = self.index.remove(name)?;
        let (_, location) = self.entries.remove(i);
        for slot in self.index.values_mut() {
            if *slot > i {
                *slot -= 1;
            }
        }
        Some(location)
    }

    pub fn get(&self, name: &str) -> Option<&Location> {
        self.index.get(name).map(|&i| &self.entries[i].1)
    }

    /// Energy source for the named location.
    ///
    /// # Errors
    /// [`LocationError::UnknownLocation`] when the name is not in the table.
    pub fn energy_source(&self, name: &str) -> Result<EnergySource, LocationError> {
        self.get(name)
            .map(Location::energy_source)
            .ok_or_else(|| LocationError::UnknownLocation(name.to_string()))
    }

    /// Entry at `index` in insertion order
    pub fn get_index(&self, index: usize) -> Option<(&str, &Location)> {
        self.entries.get(index).map(|(name, loc)| (name.as_str(), loc))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Location)> {
        self.entries.iter().map(|(name, loc)| (name.as_str(), loc))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<LocationFile> for LocationTable {
    type Error = LocationError;

    fn try_from(file: LocationFile) -> Result<Self, Self::Error> {
        let mut table = LocationTable::new();
        for entry in file.location {
            let location = Location::new(entry.slope_percent, entry.exposure_hours);
            location.validate(&entry.name)?;
            if table.get(&entry.name).is_some() {
                return Err(LocationError::DuplicateLocation(entry.name));
            }
            table.insert(entry.name, location);
        }
        Ok(table)
    }
}

impl From<LocationTable> for LocationFile {
    fn from(table: LocationTable) -> Self {
        LocationFile {
            location: table
                .entries
                .into_iter()
                .map(|(name, loc)| LocationEntry {
                    name,
                    slope_percent: loc.slope_percent,
                    exposure_hours: loc.exposure_hours,
                })
                .collect(),
        }
    }
}
