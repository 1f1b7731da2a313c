//! Alternating mark invariant: turn order follows snapshot parity.

use super::Invariant;
use crate::game::{Player, Timeline};

/// Invariant: snapshot `k` holds exactly `ceil(k / 2)` X marks and
/// `floor(k / 2)` O marks.
///
/// X moves from every even snapshot and O from every odd one, so the mark
/// counts of a well-formed history are fully determined by the snapshot
/// index. Branching preserves this: a branch replays parity from the
/// snapshot it grew out of.
pub struct AlternatingMarkInvariant;

impl Invariant<Timeline> for AlternatingMarkInvariant {
    fn holds(timeline: &Timeline) -> bool {
        (0..timeline.len()).all(|k| {
            timeline.snapshot(k).is_some_and(|board| {
                board.count(Player::X) == k.div_ceil(2) && board.count(Player::O) == k / 2
            })
        })
    }

    fn description() -> &'static str {
        "Snapshot k holds ceil(k/2) X marks and floor(k/2) O marks"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Board, Position, Square};

    #[test]
    fn test_fresh_timeline_holds() {
        assert!(AlternatingMarkInvariant::holds(&Timeline::new()));
    }

    #[test]
    fn test_holds_through_a_full_line() {
        let mut timeline = Timeline::new();
        for index in [0, 3, 1, 4, 2] {
            timeline.apply_index(index).expect("legal move");
        }
        assert!(AlternatingMarkInvariant::holds(&timeline));
    }

    #[test]
    fn test_holds_after_branching() {
        let mut timeline = Timeline::new();
        for index in [0, 3, 1] {
            timeline.apply_index(index).expect("legal move");
        }
        timeline.jump_to(1).expect("in range");
        timeline.apply(Position::BottomLeft).expect("legal move");
        assert!(AlternatingMarkInvariant::holds(&timeline));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let blank = Board::new();
        let mut first = blank.clone();
        first.set(Position::TopLeft, Square::Occupied(Player::X));
        let mut second = first.clone();
        second.set(Position::TopRight, Square::Occupied(Player::X));

        let corrupt = Timeline::from_parts(vec![blank, first, second], 2);
        assert!(!AlternatingMarkInvariant::holds(&corrupt));
    }
}
