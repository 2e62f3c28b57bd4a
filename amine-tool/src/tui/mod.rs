//! Interactive item table.

mod app;
mod input;
mod ui;

use std::io;

use crossterm::{
    event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::info;

use crate::error::ToolError;
use app::App;

pub fn run(icons: bool) -> Result<(), ToolError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut terminal = undo_on_err(setup_terminal(), || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })?;

    let mut app = App::new(icons);
    info!("Item manager started");

    let result = run_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(items = app.manager.items().len(), "Item manager closed");
    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, ToolError> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Runs `undo` before handing back an error, so a half-finished setup never
/// leaves the terminal in raw mode.
fn undo_on_err<T>(result: Result<T, ToolError>, undo: impl FnOnce()) -> Result<T, ToolError> {
    if result.is_err() {
        undo();
    }
    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), ToolError> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if app.should_quit {
            break;
        }

        let event = event::read()?;
        input::handle_event(app, event);
    }

    Ok(())
}
