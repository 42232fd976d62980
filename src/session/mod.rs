//! Game session: puzzle, clock, and solver replay under one owner
//!
//! This module provides:
//! - [`timer`]: [`SessionTimer`], the elapsed-seconds clock, and [`format_time`]
//! - [`Session`]: the aggregate the UI drives
//!
//! # Scheduling
//!
//! Both timed activities (the one-second clock and the solver replay) are
//! deadline-driven and advanced by [`Session::poll`] from a single event loop.
//! Nothing runs on another thread. Starting a new game cancels the replay and
//! resets the clock before the pegs are reinitialized, so no step scheduled
//! for the old game can land on the new one.

pub mod timer;

pub use timer::{format_time, SessionTimer, TICK_INTERVAL};

use crate::puzzle::{Move, MoveError, PegId, Towers};
use crate::solver::{self, Replay, ReplayStep, ReplayToken};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Something that happened while polling the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The clock advanced; carries the new elapsed seconds
    Tick(u64),
    /// The solver applied a move
    Moved(Move),
    /// All disks reached the right peg
    Completed { moves: u64, elapsed_secs: u64 },
    /// The solver hit an illegal move and stopped
    SolveFailed(MoveError),
}

/// One game from setup to completion
#[derive(Debug)]
pub struct Session {
    towers: Towers,
    timer: SessionTimer,
    replay: Option<Replay>,
    step_interval: Duration,
    completed: bool,
}

impl Session {
    /// Start a fresh game with `disks` disks
    pub fn new(disks: u32, step_interval: Duration, now: Instant) -> Self {
        let mut session = Session {
            towers: Towers::new(disks),
            timer: SessionTimer::new(),
            replay: None,
            step_interval,
            completed: false,
        };
        session.new_game(disks, now);
        session
    }

    /// Cancel any replay, reset the clock, and lay out `disks` disks on the left peg
    pub fn new_game(&mut self, disks: u32, now: Instant) {
        self.cancel_solve();
        self.timer.reset();
        self.towers.initialize(disks);
        self.completed = false;
        self.timer.start(now);
        info!(disks, min_moves = self.min_moves(), "new game");
    }

    pub fn towers(&self) -> &Towers {
        &self.towers
    }

    pub fn disk_count(&self) -> u32 {
        self.towers.disk_count()
    }

    pub fn move_count(&self) -> u64 {
        self.towers.move_count()
    }

    pub fn min_moves(&self) -> u64 {
        solver::min_moves(self.towers.disk_count())
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.timer.elapsed_secs()
    }

    pub fn timer(&self) -> &SessionTimer {
        &self.timer
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn is_solving(&self) -> bool {
        self.replay.is_some()
    }

    /// `(applied, total)` for the active replay
    pub fn solve_progress(&self) -> Option<(usize, usize)> {
        self.replay
            .as_ref()
            .map(|r| (r.total() - r.remaining(), r.total()))
    }

    /// Manually move the top disk of `from` onto `to`
    pub fn try_move(&mut self, from: PegId, to: PegId) -> Result<Move, MoveError> {
        self.check_accepting_moves()?;
        let result = self.towers.apply_move(from, to);
        self.after_manual_move(result)
    }

    /// Manually move `disk` from `from` to `to`, rejecting buried disks
    pub fn try_drag(&mut self, from: PegId, disk: u32, to: PegId) -> Result<Move, MoveError> {
        self.check_accepting_moves()?;
        let result = self
            .towers
            .validate_drag(from, disk, to)
            .and_then(|()| self.towers.apply_move(from, to));
        self.after_manual_move(result)
    }

    fn check_accepting_moves(&self) -> Result<(), MoveError> {
        if self.replay.is_some() {
            return Err(MoveError::SolveInProgress);
        }
        if self.completed {
            return Err(MoveError::GameComplete);
        }
        Ok(())
    }

    fn after_manual_move(
        &mut self,
        result: Result<Move, MoveError>,
    ) -> Result<Move, MoveError> {
        match &result {
            Ok(_) => {
                if self.towers.is_complete() {
                    self.finish();
                }
            }
            Err(e) => warn!(error = %e, "rejected move"),
        }
        result
    }

    /// Start replaying the optimal solution from the current layout.
    ///
    /// Returns the replay's cancellation handle, or `None` when the game is
    /// already complete or a replay is already running.
    pub fn solve(&mut self, now: Instant) -> Option<ReplayToken> {
        if self.completed || self.replay.is_some() {
            return None;
        }
        let moves = solver::compute_moves_from(&self.towers, PegId::Right);
        info!(moves = moves.len(), "solving");
        let replay = Replay::new(moves, self.step_interval, now);
        let token = replay.token();
        self.replay = Some(replay);
        Some(token)
    }

    /// Stop the active replay, if any. The pegs stay where the replay left them.
    pub fn cancel_solve(&mut self) {
        if let Some(replay) = self.replay.take() {
            replay.cancel();
            info!(remaining = replay.remaining(), "solve cancelled");
        }
    }

    /// Advance the clock and the replay to `now`
    pub fn poll(&mut self, now: Instant) -> Vec<SessionEvent> {
        let mut events = Vec::new();

        if self.timer.poll(now) > 0 {
            events.push(SessionEvent::Tick(self.timer.elapsed_secs()));
        }

        let Some(replay) = self.replay.as_mut() else {
            return events;
        };
        match replay.poll(now, &mut self.towers) {
            ReplayStep::Idle => {}
            ReplayStep::Applied(mv) => {
                events.push(SessionEvent::Moved(mv));
                if self.towers.is_complete() {
                    self.replay = None;
                    events.push(self.finish());
                }
            }
            ReplayStep::Finished | ReplayStep::Cancelled => {
                self.replay = None;
                if self.towers.is_complete() && !self.completed {
                    events.push(self.finish());
                }
            }
            ReplayStep::Failed(e) => {
                self.replay = None;
                events.push(SessionEvent::SolveFailed(e));
            }
        }

        events
    }

    fn finish(&mut self) -> SessionEvent {
        self.timer.stop();
        self.completed = true;
        info!(
            moves = self.move_count(),
            elapsed = %format_time(self.elapsed_secs()),
            "puzzle complete"
        );
        SessionEvent::Completed {
            moves: self.move_count(),
            elapsed_secs: self.elapsed_secs(),
        }
    }

    /// Message shown once the puzzle is solved
    pub fn completion_message(&self) -> Option<String> {
        self.completed.then(|| {
            format!(
                "Well Done! You completed the game in {} moves and {}.",
                self.move_count(),
                format_time(self.elapsed_secs())
            )
        })
    }
}
