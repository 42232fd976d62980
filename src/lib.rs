//! # Introduction
//!
//! hanoi-tty is the Tower of Hanoi in a terminal: three pegs, a stack of sized
//! disks, a move counter, a clock, and a solver that animates the optimal
//! solution one move at a time. The interface is built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Layers
//!
//! ```text
//! Input (keys / mouse) → App → Session → Towers
//!                                  ↘ SessionTimer, Replay
//! ```
//!
//! 1. [`puzzle`]: the pegs and the move rules. Every move is checked before
//!    anything changes, so a rejected move leaves the puzzle untouched.
//! 2. [`solver`]: the recursive move generator and [`solver::Replay`], which
//!    applies a precomputed list one move per interval.
//! 3. [`session`]: [`session::Session`] owns the puzzle, the clock, and the
//!    active replay, and advances both timed activities from one event loop.
//! 4. [`config`]: command-line options and their validation.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.

pub mod config;
pub mod puzzle;
pub mod session;
pub mod solver;
pub mod ui;
