//! Single increment invariant: consecutive snapshots differ by one mark.

use super::Invariant;
use crate::game::{Square, Timeline};

/// Invariant: each snapshot extends its predecessor by exactly one square
/// going from empty to occupied, and changes nothing else.
///
/// This is what immutable snapshots look like from the outside: marks are
/// only ever added at the tip, never moved, cleared, or overwritten.
pub struct SingleIncrementInvariant;

impl Invariant<Timeline> for SingleIncrementInvariant {
    fn holds(timeline: &Timeline) -> bool {
        for k in 1..timeline.len() {
            let (Some(prev), Some(next)) = (timeline.snapshot(k - 1), timeline.snapshot(k))
            else {
                return false;
            };

            let mut added = 0;
            for (before, after) in prev.squares().iter().zip(next.squares().iter()) {
                if before == after {
                    continue;
                }
                match (before, after) {
                    (Square::Empty, Square::Occupied(_)) => added += 1,
                    _ => return false,
                }
            }
            if added != 1 {
                return false;
            }
        }
        true
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to its predecessor"
    }
}
