//! Tests for the presentation-facing projections.

use strictly_rewind::{Position, Square, Timeline, view};

#[test]
fn test_status_strings_follow_the_reference_wording() {
    let mut timeline = Timeline::new();
    assert_eq!(view::status(&timeline), "Next Player: X");

    timeline.apply(Position::Center).expect("legal move");
    assert_eq!(view::status(&timeline), "Next Player: O");

    let mut winning = Timeline::new();
    for index in [0, 3, 1, 4, 2] {
        winning.apply_index(index).expect("legal move");
    }
    assert_eq!(view::status(&winning), "Winner: X");

    let mut o_wins = Timeline::new();
    for index in [0, 3, 1, 4, 8, 5] {
        o_wins.apply_index(index).expect("legal move");
    }
    assert_eq!(view::status(&o_wins), "Winner: O");
}

#[test]
fn test_status_is_a_projection_of_the_displayed_snapshot() {
    let mut timeline = Timeline::new();
    for index in [0, 3, 1, 4, 2] {
        timeline.apply_index(index).expect("legal move");
    }
    assert_eq!(view::status(&timeline), "Winner: X");

    timeline.jump_to(1).expect("in range");
    assert_eq!(view::status(&timeline), "Next Player: O");
}

#[test]
fn test_jump_list_grows_with_history() {
    let mut timeline = Timeline::new();
    let entries: Vec<_> = view::move_entries(&timeline).collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].label, "Go to game start");

    timeline.apply(Position::TopLeft).expect("legal move");
    timeline.apply(Position::Center).expect("legal move");

    let entries: Vec<_> = view::move_entries(&timeline).collect();
    let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(
        labels,
        ["Go to game start", "Go to move #1", "Go to move #2"]
    );
    assert_eq!(entries[2].index, 2);
}

#[test]
fn test_jump_list_shrinks_after_branching() {
    let mut timeline = Timeline::new();
    for index in [0, 3, 1] {
        timeline.apply_index(index).expect("legal move");
    }
    timeline.jump_to(0).expect("in range");
    timeline.apply(Position::BottomRight).expect("legal move");

    assert_eq!(view::move_entries(&timeline).count(), 2);
}

#[test]
fn test_cell_render_text() {
    let mut timeline = Timeline::new();
    timeline.apply(Position::Center).expect("legal move");
    timeline.apply(Position::TopLeft).expect("legal move");

    let board = timeline.board();
    assert_eq!(board.get(Position::Center).symbol(), "X");
    assert_eq!(board.get(Position::TopLeft).symbol(), "O");
    assert_eq!(board.get(Position::BottomRight).symbol(), "");
    assert_eq!(Square::Empty.symbol(), "");
}
