mod app;
mod chime;
mod domain;
mod input;
mod logging;
mod persistence;
mod scheduler;
mod settings;
mod ticker;
mod ui;

use anyhow::Result;
use app::AppState;
use chime::TerminalBell;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{ensure_data_dir, init_local_data_dir, store_file, FileStore};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "pomodoro")]
#[command(about = "A calm, terminal-based Pomodoro timer", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .pomodoro directory in the current directory
    Init,
    /// Show the saved durations, or save new ones
    Settings {
        /// Work duration in minutes (0.1-60)
        #[arg(short, long)]
        work: Option<f64>,
        /// Break duration in minutes (0.1-30)
        #[arg(short = 'b', long = "break")]
        break_minutes: Option<f64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let data_dir = init_local_data_dir()?;
            println!("Initialized pomodoro directory: {}", data_dir.display());
            println!();
            println!("Settings in this directory now apply when running from here.");
            Ok(())
        }
        Some(Commands::Settings { work, break_minutes }) => {
            run_settings(cli.verbose, work, break_minutes)
        }
        None => run_tui(cli.verbose),
    }
}

fn run_settings(verbose: bool, work: Option<f64>, break_minutes: Option<f64>) -> Result<()> {
    if let Err(e) = logging::init(verbose) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    let mut store = FileStore::new(store_file()?);
    let current = settings::load_durations(&store);

    if work.is_none() && break_minutes.is_none() {
        println!("Work:  {} min", settings::format_minutes(current.session_secs));
        println!("Break: {} min", settings::format_minutes(current.break_secs));
        return Ok(());
    }

    let work = work.unwrap_or(current.session_secs as f64 / 60.0);
    let break_minutes = break_minutes.unwrap_or(current.break_secs as f64 / 60.0);
    let saved = settings::save_durations(&mut store, work, break_minutes)?;

    println!(
        "Saved: work {} min, break {} min ({})",
        settings::format_minutes(saved.session_secs),
        settings::format_minutes(saved.break_secs),
        store.path().display()
    );
    Ok(())
}

fn run_tui(verbose: bool) -> Result<()> {
    let data_dir = ensure_data_dir()?;
    eprintln!("Using pomodoro directory: {}", data_dir.display());

    if let Err(e) = logging::init(verbose) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    let store = FileStore::new(store_file()?);
    let mut app = AppState::new(Box::new(store), Box::new(TerminalBell));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!("Exited with error: {:#}", err);
    }
    tracing::info!("Pomodoro closed");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    loop {
        let now = Instant::now();
        app.poll(now);

        let view = app.view(now);
        terminal.draw(|f| ui::render(f, app, &view))?;

        let timeout = ticker::poll_timeout(Instant::now(), app.schedule.next_due());
        if event::poll(timeout)? {
            let event = event::read()?;
            if input::handle_event(app, event, Instant::now()) {
                return Ok(());
            }
        }
    }
}
