//! Coindash terminal dashboard
//!
//! Renders a static cryptocurrency market snapshot as a bar chart, a volume
//! share breakdown, an intraday line chart and a table. The only time-based
//! behaviour is a one-second clock tick; its task is aborted and the
//! terminal restored unconditionally on exit.

use std::{io, sync::Arc, time::Duration};

use chrono::Utc;
use coindash_data::Listing;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::Mutex;

mod app;
mod ui;

use app::{App, Panel};

const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(250);
const CLOCK_TICK_INTERVAL: Duration = Duration::from_secs(1);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging()?;

    let listing = Listing::builtin();
    tracing::info!(assets = listing.len(), "loaded builtin market listing");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = Arc::new(Mutex::new(App::new(listing)));

    // One-second clock tick driving the status bar timestamp
    let tick_handle = tokio::spawn(clock_tick(app.clone()));

    let result = run_app(&mut terminal, app).await;

    // Teardown: cancel the tick and restore the terminal regardless of how
    // the render loop ended
    tick_handle.abort();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    Ok(())
}

fn init_logging() -> io::Result<()> {
    // stdout belongs to the terminal UI, so logs go to a file
    let log_file = std::fs::File::create("coindash-tui.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

async fn clock_tick(app: Arc<Mutex<App>>) {
    let mut interval = tokio::time::interval(CLOCK_TICK_INTERVAL);
    loop {
        interval.tick().await;
        let mut app = app.lock().await;
        app.tick(Utc::now());
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: Arc<Mutex<App>>,
) -> io::Result<()> {
    loop {
        let snapshot = {
            let app = app.lock().await;
            app.clone()
        };

        if !snapshot.running {
            return Ok(());
        }

        terminal.draw(|f| ui::draw(f, &snapshot))?;

        if event::poll(EVENT_POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    let mut app = app.lock().await;
                    handle_key(&mut app, key.code);
                }
            }
        }
    }
}

fn handle_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            tracing::info!("quit requested");
            app.running = false;
        }
        KeyCode::Tab => app.next_panel(),
        KeyCode::Char('1') => app.select_panel(Panel::Overview),
        KeyCode::Char('2') => app.select_panel(Panel::Charts),
        KeyCode::Char('3') => app.select_panel(Panel::Table),
        KeyCode::Char('t') | KeyCode::Char('T') => app.cycle_timeframe(),
        KeyCode::Char('l') | KeyCode::Char('L') => app.toggle_convention(),
        KeyCode::Up => app.select_previous(),
        KeyCode::Down => app.select_next(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Timeframe;
    use coindash_data::UnitConvention;

    fn new_app() -> App {
        App::new(Listing::builtin())
    }

    #[test]
    fn test_handle_key_quit() {
        let mut app = new_app();
        handle_key(&mut app, KeyCode::Char('q'));
        assert!(!app.running);

        let mut app = new_app();
        handle_key(&mut app, KeyCode::Esc);
        assert!(!app.running);
    }

    #[test]
    fn test_handle_key_panel_selection() {
        let mut app = new_app();
        handle_key(&mut app, KeyCode::Char('3'));
        assert_eq!(app.panel, Panel::Table);
        handle_key(&mut app, KeyCode::Tab);
        assert_eq!(app.panel, Panel::Overview);
    }

    #[test]
    fn test_handle_key_timeframe_and_locale() {
        let mut app = new_app();
        handle_key(&mut app, KeyCode::Char('t'));
        assert_eq!(app.timeframe, Timeframe::D7);
        handle_key(&mut app, KeyCode::Char('l'));
        assert_eq!(app.convention, UnitConvention::GermanWords);
    }

    #[test]
    fn test_handle_key_asset_cursor() {
        let mut app = new_app();
        handle_key(&mut app, KeyCode::Down);
        assert_eq!(app.selected, 1);
        handle_key(&mut app, KeyCode::Up);
        assert_eq!(app.selected, 0);
        // Unknown keys leave state untouched
        handle_key(&mut app, KeyCode::Char('x'));
        assert_eq!(app.selected, 0);
        assert!(app.running);
    }
}
