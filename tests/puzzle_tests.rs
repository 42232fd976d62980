// Integration tests for the puzzle rules

use hanoi_tty::puzzle::{Move, MoveError, PegId, Towers};
use std::collections::{HashSet, VecDeque};

#[test]
fn test_initialize_stacks_left_peg() {
    for n in 1..=10 {
        let towers = Towers::new(n);
        let expected: Vec<u32> = (1..=n).rev().collect();

        assert_eq!(towers.peg(PegId::Left).disks(), expected.as_slice());
        assert!(towers.peg(PegId::Middle).is_empty());
        assert!(towers.peg(PegId::Right).is_empty());
        assert_eq!(towers.move_count(), 0);
        assert!(!towers.is_complete(), "complete at start for n = {}", n);
    }
}

#[test]
fn test_validate_move_rules() {
    let mut towers = Towers::new(3);

    // Empty source
    assert_eq!(
        towers.validate_move(PegId::Middle, PegId::Right),
        Err(MoveError::EmptyPeg { peg: PegId::Middle })
    );
    // Onto an empty peg
    assert!(towers.validate_move(PegId::Left, PegId::Right).is_ok());

    towers.apply_move(PegId::Left, PegId::Right).unwrap();

    // Disk 2 onto disk 1
    assert_eq!(
        towers.validate_move(PegId::Left, PegId::Right),
        Err(MoveError::LargerOnSmaller { disk: 2, top: 1 })
    );
    // Disk 1 onto disk 2
    assert!(towers.validate_move(PegId::Right, PegId::Left).is_ok());
}

#[test]
fn test_validate_move_is_pure() {
    let towers = Towers::new(4);
    let before = towers.clone();
    let _ = towers.validate_move(PegId::Left, PegId::Middle);
    let _ = towers.validate_move(PegId::Middle, PegId::Left);
    assert_eq!(towers, before);
}

#[test]
fn test_three_disk_walkthrough() {
    let mut towers = Towers::new(3);
    assert_eq!(towers.peg(PegId::Left).disks(), &[3, 2, 1]);

    towers.apply_move(PegId::Left, PegId::Right).unwrap();
    assert_eq!(towers.peg(PegId::Left).disks(), &[3, 2]);
    assert_eq!(towers.peg(PegId::Right).disks(), &[1]);
    assert_eq!(towers.move_count(), 1);

    towers.apply_move(PegId::Left, PegId::Middle).unwrap();
    assert_eq!(towers.peg(PegId::Left).disks(), &[3]);
    assert_eq!(towers.peg(PegId::Middle).disks(), &[2]);

    towers.apply_move(PegId::Right, PegId::Middle).unwrap();
    assert_eq!(towers.peg(PegId::Middle).disks(), &[2, 1]);
    assert!(towers.peg(PegId::Right).is_empty());

    for (from, to) in [(0, 2), (1, 0), (1, 2), (0, 2)] {
        let mv = Move::from_indices(from, to).unwrap();
        towers.apply_move(mv.from, mv.to).unwrap();
    }

    assert!(towers.is_complete());
    assert_eq!(towers.move_count(), 7);
    assert_eq!(towers.peg(PegId::Right).disks(), &[3, 2, 1]);
}

#[test]
fn test_every_reachable_state_conserves_disks() {
    let n = 4;
    let start = Towers::new(n);
    let mut seen: HashSet<Vec<Vec<u32>>> = HashSet::new();
    let mut queue = VecDeque::from([start]);

    while let Some(towers) = queue.pop_front() {
        let key: Vec<Vec<u32>> = towers.pegs().iter().map(|p| p.disks().to_vec()).collect();
        if !seen.insert(key) {
            continue;
        }
        assert!(
            towers.check_invariants().is_ok(),
            "{:?}",
            towers.check_invariants()
        );

        for from in PegId::ALL {
            for to in PegId::ALL {
                if towers.validate_move(from, to).is_ok() {
                    let mut next = towers.clone();
                    next.apply_move(from, to).unwrap();
                    queue.push_back(next);
                }
            }
        }
    }

    // Every assignment of disks to pegs is reachable
    assert_eq!(seen.len(), 3usize.pow(n));
}

#[test]
fn test_completion_requires_all_disks_on_right() {
    let mut towers = Towers::new(2);
    towers.apply_move(PegId::Left, PegId::Middle).unwrap();
    towers.apply_move(PegId::Left, PegId::Right).unwrap();
    assert!(!towers.is_complete());

    towers.apply_move(PegId::Middle, PegId::Right).unwrap();
    assert!(towers.is_complete());
}

#[test]
fn test_move_from_bad_index() {
    assert_eq!(
        Move::from_indices(0, 7),
        Err(MoveError::NoSuchPeg { index: 7 })
    );
}

#[test]
fn test_rejection_messages() {
    assert_eq!(
        MoveError::LargerOnSmaller { disk: 3, top: 1 }.to_string(),
        "Invalid move! Larger disks cannot be placed on smaller disks (3 onto 1)."
    );
    assert_eq!(
        MoveError::EmptyPeg { peg: PegId::Middle }.to_string(),
        "Invalid move! The middle peg is empty."
    );
}
