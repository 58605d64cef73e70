use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use bitbar::app::{
    config::{self, Config},
    features::handler::Services,
    logging,
    persistence::{self, HistoryWriter},
    r#loop::run_loop,
    state::AppState,
};
use bitbar::domain::catalog::ProcessorCatalog;
use bitbar::infrastructure::{BuiltinCatalog, FileCatalog};

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();

    // Config and history are read BEFORE terminal setup so a malformed
    // file is reported on a normal screen.
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(config::default_config_path);
    let config = match &config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    match logging::init(&config.log) {
        Ok(path) => info!(log = %path.display(), config = ?config_path, "starting bitbar"),
        Err(e) => eprintln!("bitbar: logging disabled: {e:#}"),
    }

    let catalog: Arc<dyn ProcessorCatalog> = match &config.catalog {
        Some(path) => Arc::new(FileCatalog::new(path)),
        None => Arc::new(BuiltinCatalog),
    };
    let history_path = persistence::get_history_path();
    let history = history_path
        .as_deref()
        .map(persistence::load_history)
        .unwrap_or_default();

    let app_state = AppState::new(&config, history);
    let services = Services {
        catalog,
        history: HistoryWriter::spawn(history_path),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, services).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}
