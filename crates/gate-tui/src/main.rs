//! Gate TUI - Terminal credential gate
//!
//! Shows a login form and moves to the protected dashboard once the
//! configured credential pair is entered.

use std::io;
use std::panic;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use gate_tui::app::{App, GateConfig};
use gate_tui::logging;
use ratatui::prelude::*;
use tracing_appender::non_blocking::WorkerGuard;

/// Application entry point with panic handling for terminal restoration
fn main() -> Result<()> {
    // Set up panic hook to restore terminal on crash
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let _log_guard = init_logging()?;

    let config = GateConfig::load();

    let result = run_app(&config);

    if let Err(e) = &result {
        tracing::error!("Application error: {}", e);
    }

    result
}

/// Route logs to the config directory; without one, logging stays off
fn init_logging() -> Result<Option<WorkerGuard>> {
    let Some(dir) = GateConfig::config_dir() else {
        return Ok(None);
    };

    let (subscriber, guard) = logging::file_subscriber(&dir)?;
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(Some(guard))
}

/// Main application runner
fn run_app(config: &GateConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let result = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
