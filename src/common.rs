//! Common types for the Battleships engine: attack outcomes and error enums.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result of resolving one attack coordinate against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    /// The target cell held a ship segment; it has been cleared.
    Hit,
    /// The target cell was empty or the coordinate was off the board.
    Miss,
}

/// Errors returned by board construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Requested size is outside the accepted [5, 10] range.
    InvalidSize(usize),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidSize(size) => {
                write!(f, "board size must be between 5 and 10, got {}", size)
            }
        }
    }
}

impl Error for BoardError {}

/// Errors returned when loading or parsing a fleet catalog.
#[derive(Debug)]
pub enum FleetError {
    /// The fleet source file does not exist.
    NotFound(PathBuf),
    /// The fleet source exists but could not be read.
    Io(io::Error),
    /// A line did not split into exactly `name:length` with an integer length.
    Format { line_no: usize, line: String },
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetError::NotFound(path) => {
                write!(f, "fleet file '{}' not found", path.display())
            }
            FleetError::Io(err) => write!(f, "failed to read fleet file: {}", err),
            FleetError::Format { line_no, line } => {
                write!(f, "invalid fleet data on line {}: {:?}", line_no, line)
            }
        }
    }
}

impl Error for FleetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FleetError::Io(err) => Some(err),
            _ => None,
        }
    }
}

/// Errors returned when loading a custom placement record.
#[derive(Debug)]
pub enum LayoutError {
    /// The placement record file does not exist.
    NotFound(PathBuf),
    /// The placement record exists but could not be read.
    Io(io::Error),
    /// The placement record is not the expected JSON shape.
    Parse(serde_json::Error),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::NotFound(path) => {
                write!(f, "placement record '{}' not found", path.display())
            }
            LayoutError::Io(err) => write!(f, "failed to read placement record: {}", err),
            LayoutError::Parse(err) => write!(f, "invalid placement record: {}", err),
        }
    }
}

impl Error for LayoutError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LayoutError::Io(err) => Some(err),
            LayoutError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

/// Errors returned by the placement engine.
#[derive(Debug)]
pub enum PlacementError {
    /// Strategy name is not one of `simple`, `random`, `custom`.
    UnknownStrategy(String),
    /// Fleet contains no ships.
    EmptyFleet,
    /// Named ship's length is outside [1, board size].
    ShipLength { name: String, length: u32 },
    /// Simple placement needs one row per ship.
    FleetTooLarge { ships: usize, rows: usize },
    /// Random placement exhausted its attempt budget for the named ship.
    NoSpace(String),
    /// Placement record names a ship absent from the fleet catalog.
    UnknownShip(String),
    /// Named ship's recorded span leaves the board.
    OutOfBounds(String),
    /// Named ship's recorded span crosses an occupied cell.
    Overlap(String),
    /// The custom placement record could not be loaded.
    Layout(LayoutError),
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::UnknownStrategy(name) => {
                write!(f, "unknown placement strategy: {:?}", name)
            }
            PlacementError::EmptyFleet => write!(f, "fleet contains no ships"),
            PlacementError::ShipLength { name, length } => {
                write!(f, "ship {:?} has invalid length {}", name, length)
            }
            PlacementError::FleetTooLarge { ships, rows } => {
                write!(f, "{} ships cannot fit one per row on {} rows", ships, rows)
            }
            PlacementError::NoSpace(name) => {
                write!(f, "no unoccupied placement found for ship {:?}", name)
            }
            PlacementError::UnknownShip(name) => {
                write!(f, "placement record names unknown ship {:?}", name)
            }
            PlacementError::OutOfBounds(name) => {
                write!(f, "recorded placement for ship {:?} leaves the board", name)
            }
            PlacementError::Overlap(name) => {
                write!(
                    f,
                    "recorded placement for ship {:?} overlaps another ship",
                    name
                )
            }
            PlacementError::Layout(err) => write!(f, "{}", err),
        }
    }
}

impl Error for PlacementError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PlacementError::Layout(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LayoutError> for PlacementError {
    fn from(err: LayoutError) -> Self {
        PlacementError::Layout(err)
    }
}
