//! Optimal move generation and timed replay
//!
//! This module provides the solver:
//! - [`compute_moves`]: the classic recursive decomposition, `2^n - 1` moves
//! - [`compute_moves_from`]: optimal moves from any legal layout to a target peg
//! - [`min_moves`]: the theoretical minimum for `n` disks
//! - [`replay`]: [`Replay`], which applies a precomputed list one move per interval
//!
//! # Decomposition
//!
//! ```text
//! hanoi(n, from, to, aux) = hanoi(n-1, from, aux, to)
//!                           + (from → to)
//!                           + hanoi(n-1, aux, to, from)
//! ```

pub mod replay;

pub use replay::{Replay, ReplayStep, ReplayToken};

use crate::puzzle::{Move, PegId, Towers};

/// Minimum number of moves to transfer `n` disks: `2^n - 1`
pub fn min_moves(n: u32) -> u64 {
    1u64.checked_shl(n).map_or(u64::MAX, |p| p - 1)
}

/// Moves that transfer a stack of `n` disks from `from` to `to`
pub fn compute_moves(n: u32, from: PegId, to: PegId, aux: PegId) -> Vec<Move> {
    let mut moves = Vec::with_capacity(min_moves(n).min(1 << 20) as usize);
    push_stack_moves(n, from, to, aux, &mut moves);
    moves
}

fn push_stack_moves(n: u32, from: PegId, to: PegId, aux: PegId, moves: &mut Vec<Move>) {
    if n == 0 {
        return;
    }
    push_stack_moves(n - 1, from, aux, to, moves);
    moves.push(Move::new(from, to));
    push_stack_moves(n - 1, aux, to, from, moves);
}

/// Moves that gather every disk onto `target`, starting from the current layout.
///
/// Works largest disk first: a disk already on the right peg stays put, otherwise
/// everything smaller is parked on the third peg, the disk moves, and the parked
/// stack follows it. From the initial layout this is identical to
/// `compute_moves(n, Left, Right, Middle)`.
pub fn compute_moves_from(towers: &Towers, target: PegId) -> Vec<Move> {
    let n = towers.disk_count();
    // positions[d] = peg holding disk d; index 0 unused
    let mut positions = vec![target; n as usize + 1];
    for id in PegId::ALL {
        for &disk in towers.peg(id).disks() {
            positions[disk as usize] = id;
        }
    }

    let mut moves = Vec::new();
    gather(n, target, &mut positions, &mut moves);
    moves
}

fn gather(k: u32, target: PegId, positions: &mut [PegId], moves: &mut Vec<Move>) {
    if k == 0 {
        return;
    }
    let source = positions[k as usize];
    let Some(spare) = source.third(target) else {
        gather(k - 1, target, positions, moves);
        return;
    };

    gather(k - 1, spare, positions, moves);
    moves.push(Move::new(source, target));
    push_stack_moves(k - 1, spare, target, source, moves);
    for position in positions.iter_mut().take(k as usize + 1).skip(1) {
        *position = target;
    }
}
