mod app;
mod config;
mod db;
mod event;
mod model;
mod photos;
mod state;
mod store;
mod ui;

use app::App;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use model::Theme;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;

fn main() -> io::Result<()> {
    // Install panic handler to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));

    // Parse CLI args
    let args = config::CliArgs::parse();

    // Load config file
    let cfg = config::load_config(args.config.as_ref());

    // Resolve settings
    let resolved = config::resolve(&args, &cfg);

    // Open the preferences store and load the wishlist
    let prefs_path = config::prefs_db_path(&resolved.data_dir);
    let prefs =
        db::Prefs::open(&prefs_path).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    let store = store::WishStore::load(prefs);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Build app, restoring saved view state first
    let mut app = App::new();
    let saved_state = state::load_state(&resolved.data_dir);
    app.restore_view_state(&saved_state);

    // CLI/config theme overrides take precedence over saved state
    if let Some(theme) = resolved.theme {
        app.theme_name = theme;
        app.theme = Theme::from_name(theme);
    }

    // Run the app
    let result = event::run_loop(&mut terminal, app, store, resolved.data_dir);

    // Terminal teardown
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}
