// piecetty: puzzle-piece inventory on a circular queue and two bounded stacks

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use piecetty::game::constants::DEFAULT_CAPACITY;
use piecetty::game::engine::Game;
use piecetty::ui::{self, App};

/// Exit status when a container cannot be allocated
const ALLOCATION_FAILURE_EXIT: u8 = 1;

#[derive(Parser)]
#[clap(name = "piecetty", about = "Puzzle-piece inventory on a queue and two stacks", version)]
struct Cli {
    /// Slots in the play queue and in each stack
    #[clap(long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// Read menu numbers line by line instead of starting the TUI
    #[clap(long)]
    plain: bool,

    /// Start with empty containers
    #[clap(long)]
    no_seed: bool,

    /// Write log output to this file
    #[clap(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(cli: &Cli) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match &cli.log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        // The TUI owns the screen, so stderr logging is for plain mode only
        None if cli.plain => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let created = if cli.no_seed {
        Game::new(cli.capacity)
    } else {
        Game::seeded(cli.capacity)
    };
    let mut game = match created {
        Ok(game) => game,
        Err(e) => {
            tracing::error!(%e, "startup failed");
            eprintln!("Error: {}", e);
            return Ok(ExitCode::from(ALLOCATION_FAILURE_EXIT));
        }
    };

    if cli.plain {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        ui::prompt::run_prompt(&mut game, stdin.lock(), &mut stdout)?;
        println!("\n{}", game.finish());
        return Ok(ExitCode::SUCCESS);
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(game);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    println!("{}", app.into_game().finish());
    Ok(ExitCode::SUCCESS)
}
