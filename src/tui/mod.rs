//! Terminal UI for the game.
//!
//! The event loop is synchronous: every user interaction runs one of the
//! game-state operations to completion before the next frame is drawn.

mod app;
mod input;
mod ui;

use anyhow::Result;
use app::App;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::Path;
use tracing::info;

/// Runs the interactive game until the user quits.
pub fn run(ascending: bool, log_file: &Path) -> Result<()> {
    // Logging goes to a file so it never corrupts the alternate screen.
    let log = std::fs::File::create(log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log))
        .with_ansi(false)
        .try_init();

    info!("starting TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game(&mut terminal, App::new(ascending));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_game<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|frame| ui::draw(frame, &mut app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    info!("user quit");
                    return Ok(());
                }
                KeyCode::Char('r') => app.restart(),
                KeyCode::Char('o') => app.toggle_order(),
                KeyCode::Tab => app.switch_focus(),
                KeyCode::Enter => app.confirm(),
                KeyCode::Char(c) if c.is_ascii_digit() => app.place_digit(c),
                code => app.navigate(code),
            }
        }
    }
}
