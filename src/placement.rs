//! Placement engine: three strategies for putting a fleet onto a board.

use core::fmt;
use std::collections::HashSet;
use std::str::FromStr;

use rand::Rng;

use crate::board::Board;
use crate::common::PlacementError;
use crate::fleet::Fleet;
use crate::layout::{Layout, Orientation};

/// Retry budget per ship for the random strategy. A fleet that cannot be
/// placed within this many draws is reported as not fitting instead of
/// stalling the caller.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Placement algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// One ship per row, flush left, in catalog order.
    #[default]
    Simple,
    /// Uniformly random non-overlapping placement.
    Random,
    /// Placement read from an externally produced record.
    Custom,
}

impl FromStr for Strategy {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(Strategy::Simple),
            "random" => Ok(Strategy::Random),
            "custom" => Ok(Strategy::Custom),
            other => Err(PlacementError::UnknownStrategy(other.to_owned())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Simple => "simple",
            Strategy::Random => "random",
            Strategy::Custom => "custom",
        };
        f.write_str(name)
    }
}

/// Place `fleet` onto `board` with the selected strategy.
///
/// The custom strategy loads the conventional `placement.json` record; use
/// [`place_custom`] directly when holding a record from elsewhere. All
/// validation happens before any cell is written.
pub fn place_fleet<R: Rng>(
    board: &mut Board,
    fleet: &Fleet,
    strategy: Strategy,
    rng: &mut R,
) -> Result<(), PlacementError> {
    match strategy {
        Strategy::Simple => place_simple(board, fleet),
        Strategy::Random => place_random(board, fleet, rng),
        Strategy::Custom => {
            let layout = Layout::load_default()?;
            place_custom(board, fleet, &layout)
        }
    }
}

/// Deterministic placement: ship `i` in catalog order fills row `i`,
/// columns `0..length`. Needs at least one row per ship.
pub fn place_simple(board: &mut Board, fleet: &Fleet) -> Result<(), PlacementError> {
    validate_fleet(board, fleet)?;
    if fleet.len() > board.size() {
        return Err(PlacementError::FleetTooLarge {
            ships: fleet.len(),
            rows: board.size(),
        });
    }
    for (row, (name, length)) in fleet.iter().enumerate() {
        write_span(board, name, row, 0, Orientation::Horizontal, length as usize);
    }
    Ok(())
}

/// Randomized placement: per ship, draw an orientation and a uniformly
/// random legal origin, retry while the span is occupied. Ships are placed
/// to completion in catalog order with no backtracking, so later ships are
/// constrained by earlier ones.
pub fn place_random<R: Rng>(
    board: &mut Board,
    fleet: &Fleet,
    rng: &mut R,
) -> Result<(), PlacementError> {
    validate_fleet(board, fleet)?;
    for (name, length) in fleet.iter() {
        let length = length as usize;
        let mut placed = false;
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (row, col) = random_origin(rng, board.size(), orientation, length);
            if !span_occupied(board, row, col, orientation, length) {
                write_span(board, name, row, col, orientation, length);
                placed = true;
                break;
            }
        }
        if !placed {
            return Err(PlacementError::NoSpace(name.to_owned()));
        }
    }
    Ok(())
}

/// Place ships at the origins and orientations recorded in `layout`.
///
/// Every recorded name must exist in the fleet catalog, and every recorded
/// span must lie on the board and avoid occupied cells. The record comes
/// from an external editor, so the whole of it is validated before a single
/// cell is written; a bad entry leaves the board untouched. Ships in the
/// fleet without a recorded placement are simply not placed.
pub fn place_custom(
    board: &mut Board,
    fleet: &Fleet,
    layout: &Layout,
) -> Result<(), PlacementError> {
    validate_fleet(board, fleet)?;
    let mut spans = Vec::with_capacity(layout.len());
    let mut claimed = HashSet::new();
    for (name, row, col, orientation) in layout.iter() {
        let length = fleet
            .remaining(name)
            .ok_or_else(|| PlacementError::UnknownShip(name.to_owned()))?
            as usize;
        if !span_in_bounds(board, row, col, orientation, length) {
            return Err(PlacementError::OutOfBounds(name.to_owned()));
        }
        for cell in span_cells(row, col, orientation, length) {
            if board.cell(cell.0, cell.1).is_some() || !claimed.insert(cell) {
                return Err(PlacementError::Overlap(name.to_owned()));
            }
        }
        spans.push((name, row, col, orientation, length));
    }
    for (name, row, col, orientation, length) in spans {
        write_span(board, name, row, col, orientation, length);
    }
    Ok(())
}

/// Shared precondition: a non-empty fleet whose every length fits the board.
fn validate_fleet(board: &Board, fleet: &Fleet) -> Result<(), PlacementError> {
    if fleet.is_empty() {
        return Err(PlacementError::EmptyFleet);
    }
    for (name, length) in fleet.iter() {
        if length == 0 || length as usize > board.size() {
            return Err(PlacementError::ShipLength {
                name: name.to_owned(),
                length,
            });
        }
    }
    Ok(())
}

/// Cells covered by a span of `length` from (`row`, `col`) in `orientation`.
fn span_cells(
    row: usize,
    col: usize,
    orientation: Orientation,
    length: usize,
) -> impl Iterator<Item = (usize, usize)> {
    (0..length).map(move |i| match orientation {
        Orientation::Vertical => (row + i, col),
        Orientation::Horizontal => (row, col + i),
    })
}

/// Whether the whole span lies on the board. Origins come from untrusted
/// records, so the length check must not overflow for huge values.
fn span_in_bounds(
    board: &Board,
    row: usize,
    col: usize,
    orientation: Orientation,
    length: usize,
) -> bool {
    let size = board.size();
    if row >= size || col >= size {
        return false;
    }
    match orientation {
        Orientation::Vertical => length <= size - row,
        Orientation::Horizontal => length <= size - col,
    }
}

/// Whether any cell of the span already holds a ship segment.
fn span_occupied(
    board: &Board,
    row: usize,
    col: usize,
    orientation: Orientation,
    length: usize,
) -> bool {
    span_cells(row, col, orientation, length).any(|(r, c)| board.cell(r, c).is_some())
}

fn write_span(
    board: &mut Board,
    name: &str,
    row: usize,
    col: usize,
    orientation: Orientation,
    length: usize,
) {
    for (r, c) in span_cells(row, col, orientation, length) {
        board.set(r, c, name);
    }
}

/// Uniformly random origin such that the ship fits entirely on the board.
/// A ship as long as the board has no placement freedom and degenerates to
/// origin (0, 0).
fn random_origin<R: Rng>(
    rng: &mut R,
    size: usize,
    orientation: Orientation,
    length: usize,
) -> (usize, usize) {
    if length == size {
        return (0, 0);
    }
    let max_offset = size - length;
    match orientation {
        Orientation::Vertical => (rng.random_range(0..=max_offset), rng.random_range(0..size)),
        Orientation::Horizontal => (rng.random_range(0..size), rng.random_range(0..=max_offset)),
    }
}
