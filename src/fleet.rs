//! Fleet catalog: ship names and remaining lengths, loaded from a text file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::common::FleetError;

/// Conventional fleet source file name, resolved relative to the crate.
pub const DEFAULT_FLEET_FILE: &str = "battleships.txt";

/// Ordered catalog of ships. Order follows the source file and drives the
/// simple placement strategy; entries are never removed, only decremented.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fleet {
    ships: Vec<ShipEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ShipEntry {
    name: String,
    remaining: u32,
}

impl Fleet {
    /// Parse a line-oriented `name:length` source. Blank lines are skipped;
    /// anything else must split into exactly two colon-separated fields with
    /// an integer length. A repeated name overwrites the earlier entry.
    pub fn parse(text: &str) -> Result<Self, FleetError> {
        let mut fleet = Fleet::default();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let bad = || FleetError::Format {
                line_no: idx + 1,
                line: raw.to_owned(),
            };
            let mut fields = line.split(':');
            let (name, length) = match (fields.next(), fields.next(), fields.next()) {
                (Some(name), Some(length), None) => (name.trim(), length.trim()),
                _ => return Err(bad()),
            };
            if name.is_empty() {
                return Err(bad());
            }
            let length: u32 = length.parse().map_err(|_| bad())?;
            fleet.insert(name, length);
        }
        Ok(fleet)
    }

    /// Load a fleet catalog from `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, FleetError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => FleetError::NotFound(path.to_owned()),
            _ => FleetError::Io(err),
        })?;
        Fleet::parse(&text)
    }

    /// Load the conventional `battleships.txt` shipped next to the crate,
    /// independent of the caller's working directory.
    pub fn load_default() -> Result<Self, FleetError> {
        Fleet::load(default_path())
    }

    /// Set `name` to `length` segments, appending if the name is new.
    pub fn insert(&mut self, name: &str, length: u32) {
        match self.ships.iter_mut().find(|s| s.name == name) {
            Some(entry) => entry.remaining = length,
            None => self.ships.push(ShipEntry {
                name: name.to_owned(),
                remaining: length,
            }),
        }
    }

    /// Build a fleet from (name, length) pairs, preserving order.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: AsRef<str>,
    {
        let mut fleet = Fleet::default();
        for (name, length) in pairs {
            fleet.insert(name.as_ref(), length);
        }
        fleet
    }

    /// Number of ships in the catalog.
    pub fn len(&self) -> usize {
        self.ships.len()
    }

    /// `true` when the catalog holds no ships.
    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Remaining segments of `name`, if the ship exists.
    pub fn remaining(&self, name: &str) -> Option<u32> {
        self.ships.iter().find(|s| s.name == name).map(|s| s.remaining)
    }

    /// Record one hit on `name`, flooring the counter at zero. Returns the
    /// new remaining count, or `None` if the ship is not in the catalog.
    pub fn record_hit(&mut self, name: &str) -> Option<u32> {
        let entry = self.ships.iter_mut().find(|s| s.name == name)?;
        entry.remaining = entry.remaining.saturating_sub(1);
        Some(entry.remaining)
    }

    /// Derived sunk state: `true` once a known ship has no segments left.
    /// Unknown names are reported as not sunk.
    pub fn is_sunk(&self, name: &str) -> bool {
        self.remaining(name) == Some(0)
    }

    /// Iterate ships in catalog order as (name, remaining).
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.ships.iter().map(|s| (s.name.as_str(), s.remaining))
    }
}

/// Absolute path of the default fleet file, anchored to the crate rather
/// than the process working directory.
fn default_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_FLEET_FILE)
}
