//! Energy types and per-attack energy cost maps

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::str::FromStr;

/// The closed set of energy types an attack can cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnergyType {
    Power,
    Fire,
    Toxic,
    Shadow,
    Water,
}

impl EnergyType {
    /// Every energy type, in display order
    pub const ALL: [EnergyType; 5] = [
        EnergyType::Power,
        EnergyType::Fire,
        EnergyType::Toxic,
        EnergyType::Shadow,
        EnergyType::Water,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EnergyType::Power => "Power",
            EnergyType::Fire => "Fire",
            EnergyType::Toxic => "Toxic",
            EnergyType::Shadow => "Shadow",
            EnergyType::Water => "Water",
        }
    }
}

impl fmt::Display for EnergyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnergyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EnergyType::ALL
            .into_iter()
            .find(|energy| energy.as_str() == s)
            .ok_or_else(|| format!("unknown energy type '{s}'"))
    }
}

/// What to do with an energy cost map that is present but empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyCosts {
    /// Replace it with every energy type at zero
    #[default]
    Complete,
    /// Keep it empty
    Preserve,
}

/// Ordered energy-type name → cost map
///
/// Keys are kept as strings so stored data with unknown or missing energy
/// types survives a load/save cycle untouched. Insertion order is kept for
/// stable JSON output; equality ignores order.
#[derive(Debug, Clone, Default)]
pub struct EnergyCosts {
    entries: Vec<(String, i64)>,
}

impl EnergyCosts {
    /// Empty map, not completed
    pub fn new() -> Self {
        Self::default()
    }

    /// Every energy type at zero
    pub fn zeroed() -> Self {
        EnergyType::ALL
            .into_iter()
            .map(|energy| (energy.as_str().to_string(), 0))
            .collect()
    }

    /// Fill with every energy type at zero when nothing was supplied
    pub fn complete_if_empty(self) -> Self {
        if self.is_empty() { Self::zeroed() } else { self }
    }

    pub fn apply_policy(self, policy: EmptyCosts) -> Self {
        match policy {
            EmptyCosts::Complete => self.complete_if_empty(),
            EmptyCosts::Preserve => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, key: &str) -> Option<i64> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| *v)
    }

    pub fn cost(&self, energy: EnergyType) -> Option<i64> {
        self.get(energy.as_str())
    }

    /// Insert or update, keeping the position of an existing key
    pub fn set(&mut self, key: impl Into<String>, value: i64) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl PartialEq for EnergyCosts {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl Eq for EnergyCosts {}

impl<K: Into<String>> FromIterator<(K, i64)> for EnergyCosts {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        let mut costs = EnergyCosts::new();
        for (key, value) in iter {
            costs.set(key, value);
        }
        costs
    }
}

impl Serialize for EnergyCosts {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
