//! Application state and key handling.

use crossterm::event::KeyCode;
use ratatui::widgets::ListState;
use strictly_rewind::{Position, Timeline};
use tracing::debug;

use super::input;

/// Which pane currently receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    /// The 3x3 grid.
    Board,
    /// The jump list of recorded moves.
    History,
}

/// Main application state.
pub struct App {
    timeline: Timeline,
    cursor: Position,
    pane: Pane,
    history_state: ListState,
}

impl App {
    /// Creates a new application over a fresh timeline.
    pub fn new() -> Self {
        let mut history_state = ListState::default();
        history_state.select(Some(0));
        Self {
            timeline: Timeline::new(),
            cursor: Position::Center,
            pane: Pane::Board,
            history_state,
        }
    }

    /// The timeline being played.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Cell the board cursor is on.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Pane that currently receives navigation keys.
    pub fn pane(&self) -> Pane {
        self.pane
    }

    /// Selection state for the jump list.
    pub fn history_state_mut(&mut self) -> &mut ListState {
        &mut self.history_state
    }

    /// Handles a key press. Returns `false` when the user quits.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Tab => {
                self.pane = match self.pane {
                    Pane::Board => Pane::History,
                    Pane::History => Pane::Board,
                };
            }
            _ => match self.pane {
                Pane::Board => self.board_key(key),
                Pane::History => self.history_key(key),
            },
        }
        true
    }

    fn board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
                let index = c as usize - '1' as usize;
                if let Some(pos) = Position::from_index(index) {
                    self.place(pos);
                }
            }
            _ => {}
        }
    }

    fn history_key(&mut self, key: KeyCode) {
        let last = self.timeline.len() - 1;
        let selected = self.history_state.selected().unwrap_or(0).min(last);
        match key {
            KeyCode::Up => self.history_state.select(Some(selected.saturating_sub(1))),
            KeyCode::Down => self.history_state.select(Some((selected + 1).min(last))),
            KeyCode::Enter | KeyCode::Char(' ') => match self.timeline.jump_to(selected) {
                Ok(()) => debug!(selected, "Jumped via history pane"),
                Err(rejected) => debug!(%rejected, "Jump ignored"),
            },
            _ => {}
        }
    }

    fn place(&mut self, pos: Position) {
        // Rejections are deliberate no-ops: the board simply does not change.
        match self.timeline.apply(pos) {
            Ok(()) => self.sync_selection(),
            Err(rejected) => debug!(%rejected, "Move ignored"),
        }
    }

    fn restart(&mut self) {
        debug!("Restarting game");
        self.timeline = Timeline::new();
        self.cursor = Position::Center;
        self.pane = Pane::Board;
        self.sync_selection();
    }

    fn sync_selection(&mut self) {
        self.history_state
            .select(Some(self.timeline.current_move()));
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_keys_place_marks() {
        let mut app = App::new();
        assert!(app.handle_key(KeyCode::Char('5')));
        assert_eq!(app.timeline().len(), 2);
        assert!(!app.timeline().board().is_empty(Position::Center));
    }

    #[test]
    fn test_rejected_moves_change_nothing() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('5'));
        let before = app.timeline().clone();

        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.timeline(), &before);
    }

    #[test]
    fn test_enter_places_at_cursor() {
        let mut app = App::new();
        app.handle_key(KeyCode::Left);
        app.handle_key(KeyCode::Enter);
        assert!(!app.timeline().board().is_empty(Position::MiddleLeft));
    }

    #[test]
    fn test_history_pane_jumps() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('5'));

        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.timeline().current_move(), 0);
        assert_eq!(app.timeline().len(), 3);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new();
        assert!(!app.handle_key(KeyCode::Char('q')));
        assert!(!App::new().handle_key(KeyCode::Esc));
    }

    #[test]
    fn test_restart_clears_the_timeline() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('r'));
        assert!(app.timeline().is_empty());
    }
}
