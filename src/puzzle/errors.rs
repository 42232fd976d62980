//! Illegal move errors
//!
//! [`MoveError`] is detected before any mutation, so a rejected move always
//! leaves the puzzle exactly as it was. None of these are fatal; the UI shows
//! the message as a notice and play continues.

use super::peg::PegId;
use thiserror::Error;

/// Reasons a move is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Source peg has no disk to move
    #[error("Invalid move! The {peg} peg is empty.")]
    EmptyPeg { peg: PegId },

    /// Larger disk onto a smaller one
    #[error("Invalid move! Larger disks cannot be placed on smaller disks ({disk} onto {top}).")]
    LargerOnSmaller { disk: u32, top: u32 },

    /// Source and target are the same peg
    #[error("Invalid move! The disk is already on the {peg} peg.")]
    SamePeg { peg: PegId },

    /// The dragged disk is buried under smaller disks
    #[error("Invalid move! Disk {disk} is not on top of the {peg} peg.")]
    NotTopDisk { disk: u32, peg: PegId },

    /// Peg index outside 0..=2
    #[error("Invalid move! There is no peg {index}.")]
    NoSuchPeg { index: usize },

    /// Manual moves are locked while the solver is replaying
    #[error("Wait for the solver to finish, or restart.")]
    SolveInProgress,

    /// The game is over until it is restarted
    #[error("The puzzle is already solved. Restart to play again.")]
    GameComplete,
}
