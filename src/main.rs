//! textnet binary entry point.
//!
//! Parses flags, sets up file logging, loads the sample data, initializes the
//! terminal in raw mode, runs the TUI event loop, and restores the terminal
//! state on exit.
//!
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::{Parser, ValueEnum};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing_subscriber::EnvFilter;

use textnet::app::{self, ActiveTab, AppState, Theme};
use textnet::error::{Context, Result};
use textnet::samples;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum StartTab {
    Text,
    Network,
}

/// Text processing and social network toolkit in the terminal.
#[derive(Parser, Debug)]
#[command(name = "textnet", version, about)]
struct Cli {
    /// Theme configuration file, created with defaults when missing.
    #[arg(long, env = "TEXTNET_THEME", default_value = "theme.conf")]
    theme: String,

    /// Group file (`name:member,member` per line) replacing the built-in groups.
    #[arg(long)]
    groups: Option<PathBuf>,

    /// Connection file (`user:peer,peer` per line) replacing the built-in connections.
    #[arg(long)]
    connections: Option<PathBuf>,

    /// Extra text file added to the samples.
    #[arg(long)]
    text: Option<PathBuf>,

    /// Write logs to this file. Nothing is logged without it.
    #[arg(long, env = "TEXTNET_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `textnet=trace`.
    #[arg(long, env = "TEXTNET_LOG", default_value = "info")]
    log_level: String,

    /// Tab shown on startup.
    #[arg(long, value_enum, default_value_t = StartTab::Text)]
    tab: StartTab,
}

fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let file = File::create(path).with_ctx(|| format!("create log file {}", path.display()))?;
    let filter = EnvFilter::try_new(&cli.log_level)
        .with_ctx(|| format!("invalid log filter '{}'", cli.log_level))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(filter)
        .init();
    Ok(())
}

fn load_state(cli: &Cli) -> Result<AppState> {
    let theme = Theme::load_or_init(&cli.theme);

    let mut texts = samples::text_samples();
    if let Some(path) = &cli.text {
        let key = texts.len() + 1;
        let sample = samples::load_text_sample(path, key)
            .with_ctx(|| format!("read text file {}", path.display()))?;
        texts.push(sample);
    }

    let mut network = samples::sample_network();
    if cli.groups.is_some() || cli.connections.is_some() {
        // Tagged users only make sense for the built-in network
        network.new_users.clear();
        network.influencers.clear();
    }
    if let Some(path) = &cli.groups {
        network.groups = samples::parse_group_file(path)
            .with_ctx(|| format!("read group file {}", path.display()))?;
    }
    if let Some(path) = &cli.connections {
        network.connections = samples::parse_connections_file(path)
            .with_ctx(|| format!("read connection file {}", path.display()))?;
    }

    tracing::info!(
        samples = texts.len(),
        groups = network.groups.len(),
        users = network.all_users().len(),
        "loaded data"
    );

    let mut state = AppState::new(texts, network, theme);
    state.active_tab = match cli.tab {
        StartTab::Text => ActiveTab::Text,
        StartTab::Network => ActiveTab::Network,
    };
    Ok(state)
}

/// Initialize a Crossterm-backed `ratatui` terminal in raw mode.
fn init_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Program entry point: run the TUI and report any top-level error to stderr.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;
    let mut state = load_state(&cli)?;

    let mut terminal = init_terminal().map_err(|e| format!("init terminal: {}", e))?;

    let res = app::run(&mut terminal, &mut state);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    if let Err(err) = res {
        tracing::error!(%err, "application error");
        eprintln!("application error: {err}");
    }
    Ok(())
}
