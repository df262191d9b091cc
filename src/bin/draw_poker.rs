use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use draw_poker::config::SessionConfig;
use draw_poker::tui::{app::AppState, controller};
use ratatui::prelude::*;
use std::fs::File;
use std::io::{self, IsTerminal, Stdout};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(version, about = "Five-card draw video poker in the terminal.")]
struct Cli {
    /// Rounds per session.
    #[arg(long, short, default_value_t = SessionConfig::DEFAULT_ROUNDS)]
    rounds: u32,
    /// Starting bankroll.
    #[arg(long, short, default_value_t = SessionConfig::DEFAULT_BANKROLL)]
    bankroll: u64,
    /// Shuffle seed for a reproducible session.
    #[arg(long, short)]
    seed: Option<u64>,
    /// Write logs to this file (level from RUST_LOG, default info).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .init();
    Ok(())
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let mut config = SessionConfig::new(cli.rounds, cli.bankroll);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    let mut app = match AppState::new(config) {
        Ok(app) => app,
        Err(err) => {
            eprintln!("draw-poker: {err}");
            std::process::exit(2);
        }
    };

    if !io::stdout().is_terminal() {
        println!(
            "draw-poker TUI requires a real terminal (TTY).\nRun in Terminal and press q to quit. Version: {}",
            draw_poker::VERSION
        );
        return Ok(());
    }
    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}
