//! Timed replay of a precomputed move list
//!
//! A [`Replay`] is a cooperative scheduled task: the owner calls
//! [`Replay::poll`] from its event loop and at most one move is applied per
//! poll, and only once the step interval has elapsed since the previous move.
//!
//! Cancellation goes through a [`ReplayToken`]. Once cancelled, `poll` returns
//! [`ReplayStep::Cancelled`] forever and never touches the puzzle again, so a
//! replay left over from an earlier game cannot move disks in a new one.

use crate::puzzle::{Move, MoveError, Towers};
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Default delay between solver moves
pub const DEFAULT_STEP_INTERVAL: Duration = Duration::from_millis(500);

/// Shared cancellation flag for a replay
#[derive(Debug, Clone, Default)]
pub struct ReplayToken {
    cancelled: Rc<Cell<bool>>,
}

impl ReplayToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Outcome of a single [`Replay::poll`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayStep {
    /// A move was applied
    Applied(Move),
    /// Not due yet
    Idle,
    /// All moves have been applied
    Finished,
    /// The token was cancelled
    Cancelled,
    /// A move was rejected by the puzzle; the replay cancels itself
    Failed(MoveError),
}

/// Precomputed moves applied one per interval
#[derive(Debug)]
pub struct Replay {
    moves: Vec<Move>,
    cursor: usize,
    interval: Duration,
    next_due: Instant,
    token: ReplayToken,
}

impl Replay {
    /// Schedule `moves`; the first one is due immediately at `now`
    pub fn new(moves: Vec<Move>, interval: Duration, now: Instant) -> Self {
        Replay {
            moves,
            cursor: 0,
            interval,
            next_due: now,
            token: ReplayToken::new(),
        }
    }

    /// Handle that can cancel this replay
    pub fn token(&self) -> ReplayToken {
        self.token.clone()
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn total(&self) -> usize {
        self.moves.len()
    }

    /// Moves not yet applied
    pub fn remaining(&self) -> usize {
        self.moves.len() - self.cursor
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.moves.len()
    }

    /// Apply the next move if it is due.
    ///
    /// The following move is scheduled one interval after this poll, so a slow
    /// event loop stretches the animation instead of bunching moves together.
    pub fn poll(&mut self, now: Instant, towers: &mut Towers) -> ReplayStep {
        if self.token.is_cancelled() {
            return ReplayStep::Cancelled;
        }
        let Some(&mv) = self.moves.get(self.cursor) else {
            return ReplayStep::Finished;
        };
        if now < self.next_due {
            return ReplayStep::Idle;
        }

        match towers.apply_move(mv.from, mv.to) {
            Ok(applied) => {
                self.cursor += 1;
                self.next_due = now + self.interval;
                debug!(step = self.cursor, total = self.moves.len(), %applied, "replay step");
                ReplayStep::Applied(applied)
            }
            Err(e) => {
                warn!(error = %e, %mv, "replay move rejected, cancelling");
                self.token.cancel();
                ReplayStep::Failed(e)
            }
        }
    }
}
