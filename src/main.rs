mod app;
mod domain;
mod input;
mod persistence;
mod store;
mod ticker;
mod timer;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{ensure_data_dir, get_data_dir, init_local_dir, meta_file, tasks_file};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use store::TaskStore;

#[derive(Parser)]
#[command(name = "taskflow")]
#[command(about = "A terminal-based personal task tracker with a Pomodoro-style focus timer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .taskflow directory in the current directory
    Init,
    /// Print task statistics without entering the TUI
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let data_dir = init_local_dir()?;
            println!("Initialized taskflow directory: {}", data_dir.display());
            println!();
            println!("Taskflow will now use this local directory for task storage.");
            println!("Run 'taskflow' to start tracking tasks.");
            Ok(())
        }
        Some(Commands::Stats) => print_stats(),
        None => run_tui(),
    }
}

fn print_stats() -> Result<()> {
    let store = TaskStore::new(persistence::load_tasks(tasks_file()?));
    let metadata = persistence::load_metadata(meta_file()?);

    let stats = store.stats();
    let today = chrono::Local::now().date_naive();

    println!("Tasks for {}", today);
    println!("  Total:         {}", stats.total);
    println!("  Pending:       {}", stats.pending);
    println!("  Completed:     {}", stats.completed);
    println!("  High priority: {}", stats.high_priority);
    println!(
        "  Daily goal:    {}/{}",
        store.completed_today(today),
        metadata.daily_goal
    );
    Ok(())
}

fn run_tui() -> Result<()> {
    ensure_data_dir()?;

    // Show which directory we're using
    let data_dir = get_data_dir()?;
    eprintln!("Using taskflow directory: {}", data_dir.display());

    // Missing or malformed files degrade to an empty store / defaults
    let tasks = persistence::load_tasks(tasks_file()?);
    let metadata = persistence::load_metadata(meta_file()?);

    let mut app = AppState::new(tasks, metadata);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Leaving the loop stops the tick source; drop the session explicitly
    app.timer.reset();

    // Save on exit
    if let Err(e) = app.save() {
        eprintln!("Error saving tasks: {}", e);
    }
    if let Err(e) = app.save_metadata() {
        eprintln!("Error saving metadata: {}", e);
    }

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let poll_rate = ticker::poll_duration();

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(poll_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    let should_quit = input::handle_key(app, key)?;
                    if should_quit {
                        return Ok(());
                    }
                }
            }
        }

        // Advance the focus timer by elapsed whole seconds
        app.tick();

        // Autosave if needed
        if app.store.needs_save {
            app.save()?;
        }
        if app.meta_needs_save {
            app.save_metadata()?;
        }
    }
}
