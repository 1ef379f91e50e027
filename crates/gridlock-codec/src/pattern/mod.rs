//! Pattern model - pad cells, drawn gestures, and their canonical wire form
//!
//! A gesture is an ordered walk over distinct cells of a fixed square grid.
//! This module owns the value types and the strategy-independent byte
//! layout; nothing here knows about keys or tokens.

mod cell;
mod wire;

pub use cell::{Cell, Grid, Pattern};
pub use wire::{pack, unpack};
