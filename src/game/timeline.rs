//! The rewindable timeline: turn-taking state machine over board snapshots.

use super::contracts::{Contract, MoveContract};
use super::position::Position;
use super::rules;
use super::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Why a request against the timeline was refused.
///
/// Every rejection leaves the timeline untouched. Hosts treat rejections as
/// silent no-ops rather than user-facing failures; a well-behaved front end
/// never offers the input that would produce one, and the checks here keep
/// correctness independent of that discipline.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Rejected {
    /// The square at the position is already occupied.
    #[display("{} is already occupied", _0)]
    SquareOccupied(Position),

    /// A line is already complete; no further marks may be placed.
    #[display("Game is already decided")]
    GameDecided,

    /// Cell index outside 0-8.
    #[display("Cell index {} is out of bounds", _0)]
    OutOfBounds(usize),

    /// Jump target past the end of the recorded history.
    #[display("No move #{} in history", _0)]
    NoSuchMove(usize),
}

impl std::error::Error for Rejected {}

/// Authoritative turn-taking and history state machine.
///
/// Owns the ordered board snapshots and the index of the snapshot currently
/// on display. Snapshot 0 is always the blank board and the history is never
/// empty. Recorded snapshots are immutable: placing a mark clones the
/// displayed snapshot and appends the clone, which is what makes jumping
/// back and forth side-effect free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    history: Vec<Board>,
    current: usize,
}

impl Timeline {
    /// Creates a timeline seeded with the blank board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current: 0,
        }
    }

    /// The snapshot currently on display.
    pub fn board(&self) -> &Board {
        &self.history[self.current]
    }

    /// Index of the snapshot currently on display.
    pub fn current_move(&self) -> usize {
        self.current
    }

    /// Number of recorded snapshots, including the blank seed.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// True when no move has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.history.len() == 1
    }

    /// The snapshot at the given move index, `None` past the end.
    pub fn snapshot(&self, mov: usize) -> Option<&Board> {
        self.history.get(mov)
    }

    /// The player who moves from the current snapshot.
    ///
    /// Derived from parity alone (even index means X), so it stays correct
    /// while viewing the past.
    pub fn to_move(&self) -> Player {
        if self.current % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// The winner on the current snapshot, if any line is complete.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self.board())
    }

    /// Positions still playable from the current snapshot.
    ///
    /// Empty once a line is complete, since no further marks are accepted.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.winner().is_some() {
            return Vec::new();
        }
        Position::valid_moves(self.board())
    }

    /// Places the next mark at `pos`.
    ///
    /// On success the new snapshot becomes the latest history entry and the
    /// display index moves onto it. Any snapshots after the previous display
    /// index are discarded first: moving after a jump into the past branches
    /// the game, abandoning the old future.
    ///
    /// # Errors
    ///
    /// [`Rejected::GameDecided`] when the displayed snapshot already has a
    /// winner, [`Rejected::SquareOccupied`] when `pos` is taken. The
    /// timeline is unchanged in both cases.
    #[instrument(skip(self), fields(current = self.current, player = %self.to_move()))]
    pub fn apply(&mut self, pos: Position) -> Result<(), Rejected> {
        MoveContract::pre(self, &pos)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut next = self.board().clone();
        next.set(pos, Square::Occupied(self.to_move()));

        self.history.truncate(self.current + 1);
        self.history.push(next);
        self.current = self.history.len() - 1;
        debug!(move_number = self.current, "Recorded move");

        #[cfg(debug_assertions)]
        if let Err(violations) = MoveContract::post(&before, self) {
            let summary = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%summary, "Move postcondition failed");
            debug_assert!(false, "move postcondition failed: {summary}");
        }

        Ok(())
    }

    /// Places the next mark at a raw cell index.
    ///
    /// Range-checked front door for hosts that deal in indices rather than
    /// [`Position`] values.
    ///
    /// # Errors
    ///
    /// [`Rejected::OutOfBounds`] when `index` is 9 or greater, otherwise as
    /// [`Timeline::apply`].
    #[instrument(skip(self))]
    pub fn apply_index(&mut self, index: usize) -> Result<(), Rejected> {
        let pos = Position::from_index(index).ok_or(Rejected::OutOfBounds(index))?;
        self.apply(pos)
    }

    /// Moves the display index onto an existing snapshot.
    ///
    /// History is untouched. Jumping is always legal, before and after a
    /// win, and jumping to the index already shown changes nothing.
    ///
    /// # Errors
    ///
    /// [`Rejected::NoSuchMove`] when `mov` is past the end of history; the
    /// timeline is unchanged.
    #[instrument(skip(self), fields(current = self.current))]
    pub fn jump_to(&mut self, mov: usize) -> Result<(), Rejected> {
        if mov >= self.history.len() {
            warn!(mov, len = self.history.len(), "Jump target out of range");
            return Err(Rejected::NoSuchMove(mov));
        }
        self.current = mov;
        debug!(mov, "Jumped to snapshot");
        Ok(())
    }

    /// Builds a timeline from raw parts, bypassing the move contract.
    #[cfg(test)]
    pub(crate) fn from_parts(history: Vec<Board>, current: usize) -> Self {
        Self { history, current }
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}
