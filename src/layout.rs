//! Custom placement records produced by an external placement editor.
//!
//! The interchange shape is a JSON object mapping ship name to a 3-element
//! array `[row, column, code]` where `code` is `"v"` (down) or `"h"`
//! (across), e.g. `{"Carrier": [0, 0, "v"]}`.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::common::LayoutError;

/// Conventional placement record file name, resolved relative to the crate.
pub const DEFAULT_LAYOUT_FILE: &str = "placement.json";

/// Direction a ship extends from its origin cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Increasing row index ("down").
    #[serde(rename = "v")]
    Vertical,
    /// Increasing column index ("across").
    #[serde(rename = "h")]
    Horizontal,
}

/// Per-ship origin and orientation, keyed by ship name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layout(HashMap<String, (usize, usize, Orientation)>);

impl Layout {
    /// Record `name` starting at (`row`, `col`) extending in `orientation`.
    pub fn insert(&mut self, name: &str, row: usize, col: usize, orientation: Orientation) {
        self.0.insert(name.to_owned(), (row, col, orientation));
    }

    /// Recorded (row, col, orientation) for `name`, if present.
    pub fn get(&self, name: &str) -> Option<(usize, usize, Orientation)> {
        self.0.get(name).copied()
    }

    /// Iterate entries as (name, row, col, orientation).
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize, usize, Orientation)> {
        self.0
            .iter()
            .map(|(name, &(row, col, orientation))| (name.as_str(), row, col, orientation))
    }

    /// Number of recorded ships.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when no ship has a recorded placement.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Load a placement record from `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LayoutError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => LayoutError::NotFound(path.to_owned()),
            _ => LayoutError::Io(err),
        })?;
        serde_json::from_str(&text).map_err(LayoutError::Parse)
    }

    /// Load the conventional `placement.json` shipped next to the crate,
    /// independent of the caller's working directory.
    pub fn load_default() -> Result<Self, LayoutError> {
        Layout::load(default_path())
    }
}

fn default_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_LAYOUT_FILE)
}
