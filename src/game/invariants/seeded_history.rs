//! Seeded history invariant: the timeline always starts blank and the
//! display index stays in range.

use super::Invariant;
use crate::game::Timeline;

/// Invariant: history is never empty, snapshot 0 is the blank board, and
/// the display index points at a recorded snapshot.
pub struct SeededHistoryInvariant;

impl Invariant<Timeline> for SeededHistoryInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline.snapshot(0).is_some_and(|board| board.is_blank())
            && timeline.current_move() < timeline.len()
    }

    fn description() -> &'static str {
        "History starts with the blank board and the display index is in range"
    }
}
