//! Core rules engine for the game Battleships: board construction, fleet
//! loading, three placement strategies (simple, random, custom) and
//! turn-based attack resolution with game-over detection.
//!
//! The engine is synchronous and holds no state of its own; boards and
//! fleets are plain values owned by the caller and handed in per call.

mod board;
mod combat;
mod common;
mod fleet;
mod layout;
mod logging;
mod placement;
mod session;

pub use board::*;
pub use combat::*;
pub use common::*;
pub use fleet::*;
pub use layout::*;
pub use logging::init_logging;
pub use placement::*;
pub use session::*;
