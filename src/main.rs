mod api;
mod app;
mod config;
mod events;
mod models;
mod submit;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, info};
use ratatui::{backend::Backend, prelude::*};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use api::{Classifier, PredictClient};
use app::App;
use events::AppEvent;

#[derive(Parser)]
#[command(name = "newscheck", about = "Check news articles against a fake news classifier")]
struct Args {
    /// Base URL of the classification service (overrides config.toml)
    #[arg(long)]
    service_url: Option<String>,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    let log_file = File::create(config::get_log_path()?).context("Failed to create log file")?;
    WriteLogger::init(level, log_config, log_file).context("Failed to initialize logger")?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let config = config::apply_overrides(config::load_config()?, args.service_url, args.timeout);
    info!(
        "newscheck starting against {} (timeout: {:?})",
        config.service_url, config.request_timeout
    );

    let classifier: Arc<dyn Classifier> =
        Arc::new(PredictClient::new(config.service_url, config.request_timeout)?);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();

    // Create channel for async events
    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();

    // Run app
    let res = run_app(&mut terminal, &mut app, &classifier, &tx, &mut rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("Exiting after error: {err:?}");
        eprintln!("Error: {err:?}");
    }

    info!("newscheck shutting down");
    Ok(())
}

const fn handle_help_keys(app: &mut App, key: KeyCode, modifiers: KeyModifiers) -> bool {
    if !app.show_help {
        return false;
    }

    match key {
        KeyCode::Char('h') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.toggle_help();
        }
        KeyCode::Esc => {
            app.show_help = false;
        }
        _ => {}
    }
    true
}

fn handle_keyboard_input(
    app: &mut App,
    key: KeyCode,
    modifiers: KeyModifiers,
    classifier: &Arc<dyn Classifier>,
    event_tx: &mpsc::UnboundedSender<AppEvent>,
) {
    match key {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            if app.exit_pending {
                app.quit();
            } else {
                app.exit_pending = true;
            }
            return;
        }
        KeyCode::Esc if app.exit_pending => {
            app.exit_pending = false;
            return;
        }
        _ if app.exit_pending => {
            // Any other key cancels pending exit and is processed normally
            app.exit_pending = false;
        }
        _ => {}
    }

    match key {
        KeyCode::Char('q') if modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('h') if modifiers.contains(KeyModifiers::CONTROL) => app.toggle_help(),
        KeyCode::Char('j') if modifiers.contains(KeyModifiers::CONTROL) => app.push_char('\n'),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Enter => {
            // The request runs detached; its result comes back through `event_tx`
            if submit::submit(app, classifier, event_tx).is_none() {
                debug!("Analyze ignored: draft is blank or a request is in flight");
            }
        }
        KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => app.push_char(c),
        _ => {}
    }
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    classifier: &Arc<dyn Classifier>,
    event_tx: &mpsc::UnboundedSender<AppEvent>,
    event_rx: &mut mpsc::UnboundedReceiver<AppEvent>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Apply finished analyses before reading input
        while let Ok(app_event) = event_rx.try_recv() {
            submit::handle_app_event(app, app_event);
        }

        if event::poll(Duration::from_millis(16))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if !handle_help_keys(app, key.code, key.modifiers) {
                        handle_keyboard_input(app, key.code, key.modifiers, classifier, event_tx);
                    }
                }
                Event::Paste(text) => app.push_str(&text),
                _ => {}
            }
        }

        app.tick();

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
