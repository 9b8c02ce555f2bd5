//! Control panel - user preferences form on flux-dispatch
//!
//! Keys: type to edit the name, Tab = next field, Left/Right or 1..n = pick
//! a font size, Esc = quit

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use control_panel::{logging, script, App};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use flux_dispatch::{process_raw_event, spawn_input_poller, RawEvent};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "control-panel")]
#[command(about = "User preferences control panel")]
struct Args {
    /// JSON array of actions dispatched at start-up
    #[arg(long)]
    script: Option<PathBuf>,

    /// Replay the script without a terminal and print the final preferences
    #[arg(long, requires = "script")]
    headless: bool,

    /// Font size options shown in the form
    #[arg(long, value_delimiter = ',', default_value = "small,large")]
    font_sizes: Vec<String>,

    /// Write logs to this file (falls back to CONTROL_PANEL_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_tracing(args.log_file.clone());

    let mut app = App::new(args.font_sizes.clone());

    if let Some(path) = &args.script {
        let actions = script::load_script(path)?;
        let count = app.replay(actions).context("replaying action script")?;
        info!(count, path = %path.display(), "Replayed action script");
    }

    if args.headless {
        println!("{}", serde_json::to_string_pretty(&app.preferences())?);
        return Ok(());
    }
    if app.should_quit() {
        return Ok(());
    }

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> anyhow::Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
    let cancel_token = CancellationToken::new();
    let _handle = spawn_input_poller(
        event_tx,
        Duration::from_millis(10),
        Duration::from_millis(16),
        cancel_token.clone(),
    );

    loop {
        if app.take_needs_repaint() {
            terminal.draw(|frame| app.draw(frame))?;
        }

        let Some(raw_event) = event_rx.recv().await else {
            warn!("Input channel closed");
            break;
        };
        let Some(event) = process_raw_event(raw_event) else {
            continue;
        };

        for action in app.handle_event(&event) {
            app.dispatch(action)?;
        }
        if app.should_quit() {
            break;
        }
    }

    cancel_token.cancel();
    Ok(())
}
