// Puzzle state: three pegs, a disk count, and a move counter

use super::errors::MoveError;
use super::peg::{Move, Peg, PegId};
use rustc_hash::FxHashSet;
use tracing::debug;

/// The three pegs plus the move counter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Towers {
    pegs: [Peg; 3],
    disk_count: u32,
    move_count: u64,
}

impl Towers {
    /// Create a puzzle with `n` disks stacked on the left peg
    pub fn new(n: u32) -> Self {
        let mut towers = Towers {
            pegs: [Peg::new(), Peg::new(), Peg::new()],
            disk_count: 0,
            move_count: 0,
        };
        towers.initialize(n);
        towers
    }

    /// Reset to `[n, n-1, ..., 1]` on the left peg, other pegs empty, zero moves.
    ///
    /// `n` is expected to be validated by the caller.
    pub fn initialize(&mut self, n: u32) {
        for peg in &mut self.pegs {
            peg.clear();
        }
        self.pegs[PegId::Left.index()] = Peg::full(n);
        self.disk_count = n;
        self.move_count = 0;
    }

    pub fn disk_count(&self) -> u32 {
        self.disk_count
    }

    pub fn move_count(&self) -> u64 {
        self.move_count
    }

    pub fn peg(&self, id: PegId) -> &Peg {
        &self.pegs[id.index()]
    }

    pub fn pegs(&self) -> &[Peg; 3] {
        &self.pegs
    }

    /// Check whether moving the top disk of `from` onto `to` is legal.
    ///
    /// Pure predicate; never mutates.
    pub fn validate_move(&self, from: PegId, to: PegId) -> Result<(), MoveError> {
        if from == to {
            return Err(MoveError::SamePeg { peg: from });
        }
        let disk = self
            .peg(from)
            .top()
            .ok_or(MoveError::EmptyPeg { peg: from })?;
        match self.peg(to).top() {
            Some(top) if top < disk => Err(MoveError::LargerOnSmaller { disk, top }),
            _ => Ok(()),
        }
    }

    /// Like [`validate_move`](Self::validate_move), but also checks that the
    /// disk picked up by the player is the top of its peg
    pub fn validate_drag(&self, from: PegId, disk: u32, to: PegId) -> Result<(), MoveError> {
        match self.peg(from).top() {
            Some(top) if top == disk => self.validate_move(from, to),
            Some(_) => Err(MoveError::NotTopDisk { disk, peg: from }),
            None => Err(MoveError::EmptyPeg { peg: from }),
        }
    }

    /// Move the top disk of `from` onto `to` and count the move.
    ///
    /// The move is validated first; on error the state is untouched.
    pub fn apply_move(&mut self, from: PegId, to: PegId) -> Result<Move, MoveError> {
        self.validate_move(from, to)?;
        let disk = self.pegs[from.index()]
            .pop()
            .ok_or(MoveError::EmptyPeg { peg: from })?;
        self.pegs[to.index()].push(disk);
        self.move_count += 1;

        debug!(disk, %from, %to, moves = self.move_count, "applied move");
        debug_assert!(self.check_invariants().is_ok());

        Ok(Move::new(from, to))
    }

    /// Whether every disk sits on the right peg
    pub fn is_complete(&self) -> bool {
        self.peg(PegId::Right).len() == self.disk_count as usize
    }

    /// Verify stacking order and that each disk `1..=N` appears exactly once
    pub fn check_invariants(&self) -> Result<(), String> {
        let mut seen = FxHashSet::default();
        for id in PegId::ALL {
            let peg = self.peg(id);
            if !peg.is_ordered() {
                return Err(format!("{} peg is out of order: {:?}", id, peg.disks()));
            }
            for &disk in peg.disks() {
                if disk == 0 || disk > self.disk_count {
                    return Err(format!("Disk {} outside 1..={}", disk, self.disk_count));
                }
                if !seen.insert(disk) {
                    return Err(format!("Disk {} appears more than once", disk));
                }
            }
        }
        if seen.len() != self.disk_count as usize {
            return Err(format!(
                "Expected {} disks, found {}",
                self.disk_count,
                seen.len()
            ));
        }
        Ok(())
    }
}
