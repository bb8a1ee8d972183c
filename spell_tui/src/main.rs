//! spell_tui - Interactive TUI for the spell damage/healing calculator

mod app;
mod input;
mod report;
mod ui;

use app::{App, Tab};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use report::Report;
use spell_core::{
    config::{load_catalog, load_toml},
    default_catalog, CalculatorDefaults, ConfigError, SpellCatalog,
};
use std::io;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Spell and rune damage/healing calculator
#[derive(Debug, Parser)]
#[command(name = "spell_tui", version, about)]
struct Args {
    /// Spell catalog TOML file (defaults to the bundled presets)
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Starting inputs TOML file
    #[arg(long, value_name = "PATH")]
    defaults: Option<PathBuf>,

    /// Directory for spell_tui.log (defaults to the system temp dir)
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    /// Print both results for the starting inputs as JSON and exit
    #[arg(long)]
    json: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let _guard = init_logging(&args)?;

    let (catalog, defaults) = match load_config(&args) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "failed to load configuration");
            eprintln!("spell_tui: {}", err);
            return Err(io::Error::new(io::ErrorKind::InvalidData, err.to_string()));
        }
    };

    let mut app = App::new(catalog, defaults);

    if args.json {
        let json = Report::from_app(&app).to_json().map_err(io::Error::other)?;
        println!("{}", json);
        return Ok(());
    }

    run_tui(&mut app)
}

/// Log to a file; a full-screen TUI owns stdout/stderr
fn init_logging(args: &Args) -> io::Result<WorkerGuard> {
    let log_dir = args.log_dir.clone().unwrap_or_else(std::env::temp_dir);
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "spell_tui.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!(log_dir = %log_dir.display(), "logging initialized");
    Ok(guard)
}

fn load_config(args: &Args) -> Result<(SpellCatalog, CalculatorDefaults), ConfigError> {
    let catalog = match &args.catalog {
        Some(path) => load_catalog(path)?,
        None => default_catalog(),
    };

    let defaults: CalculatorDefaults = match &args.defaults {
        Some(path) => load_toml(path)?,
        None => CalculatorDefaults::default(),
    };
    defaults.validate()?;

    tracing::info!(spells = catalog.len(), "configuration loaded");
    Ok((catalog, defaults))
}

fn run_tui(app: &mut App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match (key.code, key.modifiers) {
                    (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
                    (KeyCode::Tab, _) => app.next_tab(),
                    (KeyCode::BackTab, _) => app.prev_tab(),
                    (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
                    (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
                    (KeyCode::Left, _) => app.on_step(-1),
                    (KeyCode::Right, _) => app.on_step(1),
                    (KeyCode::PageDown, _) => app.on_step(-10),
                    (KeyCode::PageUp, _) => app.on_step(10),
                    (KeyCode::Backspace, _) => app.on_backspace(),
                    (KeyCode::Char('m'), _) if app.current_tab == Tab::BasePower => {
                        app.toggle_calc_mode()
                    }
                    (KeyCode::Char('c'), _) if app.current_tab == Tab::Presets => {
                        app.next_category()
                    }
                    (KeyCode::Char('r'), _) => app.reset(),
                    (KeyCode::Char('?'), _) => app.toggle_help(),
                    (KeyCode::Char(c), _) if c.is_ascii_digit() || c == '-' => app.on_char(c),
                    _ => {}
                }
            }
        }
    }

    Ok(())
}
