use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::prelude::*;
use std::error::Error;
use std::io::{self, BufRead, IsTerminal, Stdout, Write};
use std::time::Duration;
use tracing::info;
use war_rs::game::{Game, GameConfig};
use war_rs::report::ConsoleReporter;
use war_rs::tui::{app::AppState, controller};

#[derive(Parser)]
#[command(name = "war-rs", version)]
#[command(about = "The card game War for two players")]
struct Args {
    /// Seed for the shuffle and cut (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Cut the deck at this card instead of a random one in 10..=24 (plain mode)
    #[arg(long)]
    cut: Option<usize>,

    /// First player's name (prompted for in plain mode when omitted)
    #[arg(long)]
    player1: Option<String>,

    /// Second player's name (prompted for in plain mode when omitted)
    #[arg(long)]
    player2: Option<String>,

    /// Play the whole match on the console instead of the TUI
    #[arg(long)]
    plain: bool,

    /// Enable verbose logging (plain mode)
    #[arg(short, long)]
    verbose: bool,

    /// Auto-play tick in milliseconds (TUI)
    #[arg(long, default_value = "250")]
    tick_ms: u64,
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

fn prompt_name(input: &mut impl BufRead, label: &str) -> io::Result<String> {
    println!("Enter {label} name: ");
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn run_plain(args: &Args) -> Result<(), Box<dyn Error>> {
    // RUST_LOG wins over the verbosity flag
    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| if args.verbose { "debug" } else { "warn" }.to_string());
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let mut stdin = io::stdin().lock();
    let first = match &args.player1 {
        Some(name) => name.clone(),
        None => prompt_name(&mut stdin, "player 1")?,
    };
    let second = match &args.player2 {
        Some(name) => name.clone(),
        None => prompt_name(&mut stdin, "player 2")?,
    };

    let mut config = GameConfig::new(first, second);
    config.seed = args.seed;
    config.cut = args.cut;
    info!(seed = ?config.seed, cut = ?config.cut, "starting game");

    println!("\n");
    for name in &config.names {
        println!("Welcome: {name}\n");
    }

    let mut reporter = ConsoleReporter::stdout();
    let mut game = Game::start(&config, &mut reporter)?;
    game.play(&mut reporter)?;
    if let Some(e) = reporter.take_error() {
        return Err(e.into());
    }
    Ok(())
}

fn run_tui(args: &Args) -> io::Result<()> {
    let mut app = AppState::default();
    let [first, second] = app.name_inputs.clone();
    app.name_inputs =
        [args.player1.clone().unwrap_or(first), args.player2.clone().unwrap_or(second)];
    app.seed_input = args.seed.map(|s| s.to_string()).unwrap_or_default();

    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(args.tick_ms.max(10));
    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    if args.plain || !io::stdout().is_terminal() || !io::stdin().is_terminal() {
        return run_plain(&args);
    }
    run_tui(&args)?;
    Ok(())
}
