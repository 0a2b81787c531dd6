//! `Parley` terminal chat client.
//!
//! Launches the TUI with a local, in-memory conversation session.
//! Configuration via CLI flags, environment variables, or config file
//! (`~/.config/parley/config.toml`).
//!
//! ```bash
//! cargo run --bin parley
//!
//! # One history for every contact, 24-hour timestamps
//! cargo run --bin parley -- --shared-history --timestamp-format "%H:%M"
//! ```

use std::io;
use std::path::Path;

use clap::Parser;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_appender::non_blocking::WorkerGuard;

use parley::app::App;
use parley::config::{CliArgs, ClientConfig};
use parley::ui;

#[tokio::main]
async fn main() -> io::Result<()> {
    let cli = CliArgs::parse();

    // Load and resolve configuration (CLI args > config file > env > defaults).
    let config = match ClientConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: failed to load config file: {e}");
            ClientConfig::default()
        }
    };

    // Initialize logging before terminal setup (logs go to file, not stdout).
    let _log_guard = init_logging(&cli.log_level, cli.log_file.as_deref());

    tracing::info!(
        contacts = config.roster.len(),
        scope = ?config.history_scope,
        "parley starting"
    );

    // Set up terminal.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app.
    let result = run_app(&mut terminal, &config).await;

    // Restore terminal.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("parley exiting");
    result
}

/// Initialize file-based logging.
///
/// Logs are written to a file (never stdout, since ratatui owns the terminal).
/// Returns a [`WorkerGuard`] that must be held until shutdown to ensure all
/// buffered log entries are flushed.
fn init_logging(level: &str, file_path: Option<&Path>) -> Option<WorkerGuard> {
    let default_path = std::env::temp_dir().join("parley.log");
    let log_path = file_path.unwrap_or(&default_path);

    let log_dir = log_path.parent()?;
    let file_name = log_path.file_name()?.to_str()?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .init();

    Some(guard)
}

/// Main application loop.
///
/// Waits on whichever comes first: a terminal event or the tick that
/// lets an expired typing debounce fire.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &ClientConfig,
) -> io::Result<()> {
    let mut app = App::new(config);
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(config.tick_rate);

    loop {
        // Step 1: Track the viewport and draw the UI frame.
        app.set_width(terminal.size()?.width);
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Step 2: Wait for input or the next tick.
        tokio::select! {
            biased;

            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    app.handle_key_event(key);
                }
                Some(Ok(Event::Resize(width, _))) => app.set_width(width),
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e),
                None => {
                    tracing::warn!("terminal event stream ended");
                    return Ok(());
                }
            },

            _ = ticker.tick() => {
                if app.tick() {
                    tracing::trace!("typing indicator cleared");
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
