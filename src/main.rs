//! Project Intake - terminal project-submission form
//!
//! A Ratatui-based multi-step form for agency client intake: pick a
//! project type, describe the project, attach files and submit.

mod app;
mod config;
mod events;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::IntakeConfig;
use crossterm::{
    event::{
        DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use events::{CrosstermEventSource, EventSource};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "project_intake=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = IntakeConfig::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "Could not load config, using defaults");
        IntakeConfig::default()
    });

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config, Instant::now());
    app.start_pulse();
    let mut source = CrosstermEventSource::new();
    let result = run_app(&mut terminal, &mut app, &mut source).await;
    app.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B, S>(terminal: &mut Terminal<B>, app: &mut App, source: &mut S) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: EventSource,
{
    loop {
        let size = terminal.size()?;
        app.state.terminal_size = Some((size.width, size.height));
        app.tick(Instant::now());

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        let Some(event) = source.next_event(app.poll_interval()).await? else {
            return Ok(());
        };
        app.handle_event(event, Instant::now());

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
