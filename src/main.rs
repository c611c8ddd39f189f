mod api;
mod app;
mod config;
mod dispatcher;
mod events;
mod models;
mod prompt;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, info, warn};
use ratatui::{backend::Backend, prelude::*};
use std::fs::File;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

use api::GeminiClient;
use app::App;
use dispatcher::Dispatcher;
use events::AppEvent;

/// Route `log` output to a file so it never draws over the terminal UI.
fn init_logging() -> Result<()> {
    let log_path = config::get_log_path()?;
    let file = File::create(&log_path).context("Failed to create log file")?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("Failed to initialize logger")?;

    Ok(())
}

fn build_dispatcher(config: &config::AppConfig) -> Result<Dispatcher> {
    let client = match config::api_key_from_env() {
        Some(key) => Some(GeminiClient::new(
            config.api_url.clone(),
            key,
            config.request_timeout,
        )?),
        None => {
            warn!("{} environment variable not set", config::API_KEY_VAR);
            None
        }
    };

    Ok(Dispatcher::new(client, config.model.clone()))
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(err) = init_logging() {
        eprintln!("Logging disabled: {err:?}");
    }

    let config = config::load_config()?;
    let dispatcher = build_dispatcher(&config)?;
    info!("Starting with model {}", config.model);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.model.clone(), dispatcher.has_credentials());

    // Create channel for async events
    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();

    let res = run_app(&mut terminal, &mut app, &dispatcher, &tx, &mut rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::GenerationFinished { id, text } => {
            if app.finish_generation(id, text) {
                info!("Generation {id} finished");
            } else {
                debug!("Dropped result of abandoned generation {id}");
            }
        }
    }
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
    dispatcher: &Dispatcher,
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
        KeyCode::Esc => {
            if app.exit_pending {
                app.exit_pending = false;
            } else {
                app.dismiss_error();
            }
            return;
        }
        _ if app.exit_pending => {
            // Any other key cancels pending exit, then is processed normally
            app.exit_pending = false;
        }
        _ => {}
    }

    let control = modifiers.contains(KeyModifiers::CONTROL);
    match key {
        KeyCode::Char('q') if control => app.quit(),
        KeyCode::Char('h') if control => app.toggle_help(),
        KeyCode::Char('n') if control => app.new_piece(),

        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        KeyCode::Left => app.cycle_choice(false),
        KeyCode::Right => app.cycle_choice(true),

        KeyCode::PageUp => app.scroll_up(10),
        KeyCode::PageDown => app.scroll_down(10),

        KeyCode::Backspace => app.backspace(),
        KeyCode::Enter => {
            if let Some((id, options)) = app.begin_generation() {
                spawn_generation(id, options, dispatcher, event_tx);
            }
        }
        KeyCode::Char(c) if !control => app.input_char(c),

        _ => {}
    }
}

/// Run the dispatcher on its own task. No handle is kept: the call is never
/// cancelled, and a result for an abandoned submission is dropped on arrival.
fn spawn_generation(
    id: u64,
    options: models::GenerationOptions,
    dispatcher: &Dispatcher,
    event_tx: &mpsc::UnboundedSender<AppEvent>,
) {
    let dispatcher = dispatcher.clone();
    let tx = event_tx.clone();

    info!("Dispatching generation {id}");
    tokio::spawn(async move {
        let text = dispatcher.generate(&options).await;
        let _ = tx.send(AppEvent::GenerationFinished { id, text });
    });
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    dispatcher: &Dispatcher,
    event_tx: &mpsc::UnboundedSender<AppEvent>,
    event_rx: &mut mpsc::UnboundedReceiver<AppEvent>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Check for app events (AI responses) first
        while let Ok(app_event) = event_rx.try_recv() {
            handle_app_event(app, app_event);
        }

        if event::poll(Duration::from_millis(16))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if !handle_help_keys(app, key.code, key.modifiers) {
                        handle_keyboard_input(app, key.code, key.modifiers, dispatcher, event_tx);
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
