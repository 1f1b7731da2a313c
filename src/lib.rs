//! Strictly Rewind - tic-tac-toe with a rewindable move history.
//!
//! The game is modeled as a timeline of immutable board snapshots. Placing a
//! mark appends a snapshot; the jump list moves a display index into the past
//! without disturbing anything already recorded. Placing a mark while viewing
//! the past branches: the abandoned future is discarded before the new
//! snapshot is appended.
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Square`], [`Board`] model the 3x3 grid
//! - **Rules**: pure win evaluation over board snapshots
//! - **Timeline**: the authoritative turn-taking and history state machine
//! - **View**: status line and jump-list projections for a hosting UI
//! - **Contracts / Invariants**: first-class correctness properties checked
//!   around every state transition
//!
//! The library performs no I/O. A hosting presentation layer (the bundled
//! terminal front end, or anything else) calls [`Timeline::apply`] and
//! [`Timeline::jump_to`] in response to user input and re-renders from the
//! projections in [`view`].
//!
//! # Example
//!
//! ```
//! use strictly_rewind::{Position, Timeline, view};
//!
//! let mut game = Timeline::new();
//! game.apply(Position::TopLeft)?;
//! game.apply(Position::Center)?;
//! assert_eq!(view::status(&game), "Next Player: X");
//!
//! // Rewind to the start and branch: both recorded moves are discarded.
//! game.jump_to(0)?;
//! game.apply(Position::BottomRight)?;
//! assert_eq!(game.len(), 2);
//! # Ok::<(), strictly_rewind::Rejected>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;

pub use game::{Board, Player, Position, Rejected, Square, Timeline};

pub use game::contracts;
pub use game::invariants;
pub use game::rules;
pub use game::view;
