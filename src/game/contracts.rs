//! Contract-based validation for timeline transitions.
//!
//! Contracts formalize Hoare-style reasoning about a move:
//! preconditions decide whether a request is refused, and postconditions
//! re-check the timeline invariants in debug builds after the state changes.

use super::invariants::{InvariantSet, InvariantViolation, TimelineInvariants};
use super::position::Position;
use super::rules;
use super::timeline::{Rejected, Timeline};
use tracing::instrument;

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Rejected>;

    /// Checks postconditions linking the states before and after.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: no line is complete on the displayed snapshot.
pub struct GameUndecided;

impl GameUndecided {
    /// Refuses a move once a winner exists.
    #[instrument(skip(timeline))]
    pub fn check(timeline: &Timeline) -> Result<(), Rejected> {
        if rules::check_winner(timeline.board()).is_some() {
            Err(Rejected::GameDecided)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target square is vacant.
pub struct SquareVacant;

impl SquareVacant {
    /// Refuses a move onto an occupied square.
    #[instrument(skip(timeline))]
    pub fn check(pos: Position, timeline: &Timeline) -> Result<(), Rejected> {
        if timeline.board().is_empty(pos) {
            Ok(())
        } else {
            Err(Rejected::SquareOccupied(pos))
        }
    }
}

/// Composite precondition: a move is legal while the game is undecided and
/// the target square is vacant.
///
/// The undecided check runs first, so on a finished board an occupied
/// square still reports [`Rejected::GameDecided`].
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(timeline))]
    pub fn check(pos: Position, timeline: &Timeline) -> Result<(), Rejected> {
        GameUndecided::check(timeline)?;
        SquareVacant::check(pos, timeline)?;
        Ok(())
    }
}

/// Contract for placing a mark on the timeline.
///
/// Preconditions: the game is undecided and the square is vacant.
/// Postconditions: the timeline invariants hold, exactly one snapshot was
/// appended after the abandoned future was dropped, and the display index
/// landed on the appended snapshot.
pub struct MoveContract;

impl Contract<Timeline, Position> for MoveContract {
    fn pre(timeline: &Timeline, pos: &Position) -> Result<(), Rejected> {
        LegalMove::check(*pos, timeline)
    }

    fn post(before: &Timeline, after: &Timeline) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match TimelineInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };

        if after.len() != before.current_move() + 2 {
            violations.push(InvariantViolation::new(
                "A move must drop the abandoned future and append one snapshot",
            ));
        }
        if after.current_move() + 1 != after.len() {
            violations.push(InvariantViolation::new(
                "The display index must land on the appended snapshot",
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_empty_square() {
        let timeline = Timeline::new();
        assert!(MoveContract::pre(&timeline, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut timeline = Timeline::new();
        timeline.apply(Position::Center).expect("legal move");

        assert_eq!(
            MoveContract::pre(&timeline, &Position::Center),
            Err(Rejected::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_decided_game() {
        let mut timeline = Timeline::new();
        for index in [0, 3, 1, 4, 2] {
            timeline.apply_index(index).expect("legal move");
        }

        // The decided check wins even when the square is also occupied.
        assert_eq!(
            MoveContract::pre(&timeline, &Position::TopLeft),
            Err(Rejected::GameDecided)
        );
        assert_eq!(
            MoveContract::pre(&timeline, &Position::BottomRight),
            Err(Rejected::GameDecided)
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let mut timeline = Timeline::new();
        timeline.apply(Position::TopLeft).expect("legal move");
        let before = timeline.clone();

        timeline.apply(Position::Center).expect("legal move");
        assert!(MoveContract::post(&before, &timeline).is_ok());
    }

    #[test]
    fn test_postcondition_holds_across_a_branch() {
        let mut timeline = Timeline::new();
        for index in [0, 3, 1] {
            timeline.apply_index(index).expect("legal move");
        }
        timeline.jump_to(1).expect("in range");
        let before = timeline.clone();

        timeline.apply(Position::BottomRight).expect("legal move");
        assert!(MoveContract::post(&before, &timeline).is_ok());
    }

    #[test]
    fn test_postcondition_detects_missing_truncation() {
        let mut before = Timeline::new();
        for index in [0, 3, 1] {
            before.apply_index(index).expect("legal move");
        }
        before.jump_to(0).expect("in range");

        // A fifth snapshot appended without dropping the future.
        let mut after = before.clone();
        after.apply(Position::BottomRight).expect("legal move");
        let mut history: Vec<_> = (0..4)
            .map(|k| before.snapshot(k).expect("snapshot").clone())
            .collect();
        history.push(after.board().clone());
        let corrupt = Timeline::from_parts(history, 4);

        assert!(MoveContract::post(&before, &corrupt).is_err());
    }
}
