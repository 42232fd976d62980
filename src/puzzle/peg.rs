//! Pegs, peg addressing, and moves

use super::errors::MoveError;
use std::fmt;

/// One of the three peg positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PegId {
    Left,
    Middle,
    Right,
}

impl PegId {
    pub const ALL: [PegId; 3] = [PegId::Left, PegId::Middle, PegId::Right];

    /// Index of this peg (0, 1, 2 from left to right)
    pub fn index(self) -> usize {
        match self {
            PegId::Left => 0,
            PegId::Middle => 1,
            PegId::Right => 2,
        }
    }

    /// The peg that is neither `self` nor `other`.
    ///
    /// Returns `None` when both are the same peg.
    pub fn third(self, other: PegId) -> Option<PegId> {
        if self == other {
            return None;
        }
        PegId::ALL.into_iter().find(|p| *p != self && *p != other)
    }

    /// Next peg to the right, wrapping around
    pub fn next(self) -> Self {
        match self {
            PegId::Left => PegId::Middle,
            PegId::Middle => PegId::Right,
            PegId::Right => PegId::Left,
        }
    }

    /// Next peg to the left, wrapping around
    pub fn prev(self) -> Self {
        match self {
            PegId::Left => PegId::Right,
            PegId::Middle => PegId::Left,
            PegId::Right => PegId::Middle,
        }
    }
}

impl TryFrom<usize> for PegId {
    type Error = MoveError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(PegId::Left),
            1 => Ok(PegId::Middle),
            2 => Ok(PegId::Right),
            _ => Err(MoveError::NoSuchPeg { index }),
        }
    }
}

impl fmt::Display for PegId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            PegId::Left => "left",
            PegId::Middle => "middle",
            PegId::Right => "right",
        };
        write!(f, "{}", s)
    }
}

/// A single peg: disk sizes from bottom (index 0) to top
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Peg {
    disks: Vec<u32>,
}

impl Peg {
    pub fn new() -> Self {
        Peg { disks: Vec::new() }
    }

    /// A full stack `[n, n-1, ..., 1]`
    pub fn full(n: u32) -> Self {
        Peg {
            disks: (1..=n).rev().collect(),
        }
    }

    /// Size of the top disk, if any
    pub fn top(&self) -> Option<u32> {
        self.disks.last().copied()
    }

    pub fn len(&self) -> usize {
        self.disks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// Disk sizes, bottom first
    pub fn disks(&self) -> &[u32] {
        &self.disks
    }

    /// Whether the sizes strictly decrease from bottom to top
    pub fn is_ordered(&self) -> bool {
        self.disks.windows(2).all(|pair| pair[0] > pair[1])
    }

    pub(crate) fn pop(&mut self) -> Option<u32> {
        self.disks.pop()
    }

    pub(crate) fn push(&mut self, disk: u32) {
        self.disks.push(disk);
    }

    pub(crate) fn clear(&mut self) {
        self.disks.clear();
    }
}

/// Transfer of the top disk from one peg to another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: PegId,
    pub to: PegId,
}

impl Move {
    pub fn new(from: PegId, to: PegId) -> Self {
        Move { from, to }
    }

    /// Build a move from raw peg indices
    pub fn from_indices(from: usize, to: usize) -> Result<Self, MoveError> {
        Ok(Move {
            from: PegId::try_from(from)?,
            to: PegId::try_from(to)?,
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.from, self.to)
    }
}
