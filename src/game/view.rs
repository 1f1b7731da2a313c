//! Read-only projections for a hosting presentation layer.
//!
//! Everything here is recomputed from the timeline on demand. No projection
//! holds state of its own, so a host can simply re-render after every
//! accepted operation.

use super::rules;
use super::timeline::Timeline;
use serde::Serialize;

/// One selectable entry in the jump list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    /// Move index to pass to [`Timeline::jump_to`].
    pub index: usize,
    /// Human-readable label.
    pub label: String,
}

/// Status line for the displayed snapshot.
///
/// `"Winner: <mark>"` once a line is complete there, otherwise
/// `"Next Player: <mark>"`. Follows the display index, so rewinding past a
/// win reports the next player again.
pub fn status(timeline: &Timeline) -> String {
    match rules::check_winner(timeline.board()) {
        Some(winner) => format!("Winner: {winner}"),
        None => format!("Next Player: {}", timeline.to_move()),
    }
}

/// Jump-list entries, one per recorded snapshot.
///
/// Entry 0 reads `"Go to game start"`; entry `m` reads `"Go to move #m"`.
/// Produced lazily from the history length, so it is always in step with
/// the timeline it was called on.
pub fn move_entries(timeline: &Timeline) -> impl Iterator<Item = MoveEntry> {
    let recorded = timeline.len();
    (0..recorded).map(|index| MoveEntry {
        index,
        label: if index == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{index}")
        },
    })
}

#[cfg(test)]
mod tests {
    use super::super::position::Position;
    use super::*;

    #[test]
    fn test_status_reports_next_player() {
        let mut timeline = Timeline::new();
        assert_eq!(status(&timeline), "Next Player: X");
        timeline.apply(Position::Center).expect("legal move");
        assert_eq!(status(&timeline), "Next Player: O");
    }

    #[test]
    fn test_status_reports_winner() {
        let mut timeline = Timeline::new();
        for index in [0, 3, 1, 4, 2] {
            timeline.apply_index(index).expect("legal move");
        }
        assert_eq!(status(&timeline), "Winner: X");
    }

    #[test]
    fn test_status_follows_the_display_index() {
        let mut timeline = Timeline::new();
        for index in [0, 3, 1, 4, 2] {
            timeline.apply_index(index).expect("legal move");
        }
        timeline.jump_to(0).expect("in range");
        assert_eq!(status(&timeline), "Next Player: X");
    }

    #[test]
    fn test_move_entries_labels() {
        let mut timeline = Timeline::new();
        timeline.apply(Position::TopLeft).expect("legal move");
        timeline.apply(Position::Center).expect("legal move");

        let entries: Vec<_> = move_entries(&timeline).collect();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].index, 0);
        assert_eq!(entries[0].label, "Go to game start");
        assert_eq!(entries[1].label, "Go to move #1");
        assert_eq!(entries[2].label, "Go to move #2");
    }

    #[test]
    fn test_move_entries_follow_branching() {
        let mut timeline = Timeline::new();
        for index in [0, 3, 1] {
            timeline.apply_index(index).expect("legal move");
        }
        timeline.jump_to(0).expect("in range");
        timeline.apply(Position::BottomRight).expect("legal move");

        let entries: Vec<_> = move_entries(&timeline).collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].label, "Go to move #1");
    }
}
