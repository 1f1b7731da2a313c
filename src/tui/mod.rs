//! Terminal front end: the hosting presentation layer for the timeline.
//!
//! The front end owns no game logic. It renders whatever the timeline
//! projects and translates key presses into `apply` and `jump_to` requests;
//! rejected requests simply leave the screen unchanged.

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::DefaultTerminal;
use tracing::info;

use app::App;

/// Runs the interactive game until the user quits.
pub fn run() -> Result<()> {
    info!("Starting Strictly Rewind TUI");
    let mut terminal = ratatui::init();
    let mut app = App::new();

    let result = event_loop(&mut terminal, &mut app);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if !app.handle_key(key.code) {
                info!("User quit");
                return Ok(());
            }
        }
    }
}
