//! Map pool for match setup

use rand::seq::SliceRandom;
use rand::Rng;

/// Maps offered before the user edits the pool
pub const DEFAULT_MAPS: [&str; 7] = [
    "Dust II", "Mirage", "Inferno", "Nuke", "Overpass", "Ancient", "Vertigo",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapPool {
    maps: Vec<String>,
}

impl Default for MapPool {
    fn default() -> Self {
        Self {
            maps: DEFAULT_MAPS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

impl MapPool {
    pub fn maps(&self) -> &[String] {
        &self.maps
    }

    pub fn contains(&self, name: &str) -> bool {
        self.maps.iter().any(|m| m == name)
    }

    /// Adds a trimmed map name. Returns false for blanks and duplicates.
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.maps.push(name.to_string());
        true
    }

    /// Removes a map; the last remaining map is never removed.
    pub fn remove(&mut self, name: &str) -> bool {
        if self.maps.len() <= 1 {
            return false;
        }
        let before = self.maps.len();
        self.maps.retain(|m| m != name);
        before != self.maps.len()
    }

    /// Used when the user did not pick a map.
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.maps.choose(rng).map(String::as_str)
    }
}
