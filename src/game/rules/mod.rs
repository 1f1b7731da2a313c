//! Game rules for tic-tac-toe.
//!
//! Pure functions over board snapshots. Rules are separated from board
//! storage so the timeline and the contract system can share them.
//!
//! There is deliberately no draw rule: a full board with no complete line
//! reports no winner, exactly like a game still in progress.

pub mod win;

pub use win::check_winner;
