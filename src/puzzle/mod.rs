//! Puzzle state for the Tower of Hanoi
//!
//! This module owns the three pegs and the rules for moving disks between them:
//! - [`peg`]: Peg addressing ([`PegId`]), the [`Peg`] sequence, and [`Move`]
//! - [`towers`]: The [`Towers`] aggregate with move validation and application
//! - [`errors`]: [`MoveError`], the only error class the puzzle produces
//!
//! # Stacking Order
//!
//! Each peg stores disk sizes bottom-to-top, so index 0 is the bottom disk and
//! the last element is the top:
//! ```text
//! [3, 2, 1]   →   1 sits on 2, which sits on 3
//! ```
//!
//! Every peg is strictly decreasing at all times, and the disks `1..=N` each
//! appear on exactly one peg.

pub mod errors;
pub mod peg;
pub mod towers;

pub use errors::MoveError;
pub use peg::{Move, Peg, PegId};
pub use towers::Towers;
