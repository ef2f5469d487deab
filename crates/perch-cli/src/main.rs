//! Perch - anchor-relative popovers in the terminal
//!
//! Two entry points:
//! - An interactive demo with two anchors and their popovers
//! - `place`, a one-shot placement calculator that prints JSON

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use perch_core::{paths, Settings};

mod place;
mod tui;

use place::PlaceArgs;

/// Perch - popover placement playground
#[derive(Parser)]
#[command(name = "perch")]
#[command(about = "Anchor-relative popovers in the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Settings file (defaults to ~/.perch/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive demo (default)
    Demo {
        /// Arrow half-width in cells
        #[arg(long, default_value_t = tui::DEFAULT_ARROW_CELLS)]
        arrow: f32,
    },

    /// Compute a placement and print it as JSON
    Place(PlaceArgs),
}

/// Restore terminal state - called on panic or unexpected exit
fn restore_terminal() {
    use crossterm::{
        event::DisableMouseCapture,
        execute,
        terminal::{disable_raw_mode, LeaveAlternateScreen},
    };
    let _ = disable_raw_mode();
    let _ = execute!(std::io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

/// Log to a file; stdout belongs to the TUI
fn init_logging() {
    let log_dir = paths::logs_dir();
    std::fs::create_dir_all(&log_dir).ok();

    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    match std::fs::File::create(log_dir.join("perch.log")) {
        Ok(log_file) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::sync::Mutex::new(log_file))
            .with_ansi(false)
            .init(),
        Err(_) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::sink)
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Set up panic hook to restore terminal state
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    init_logging();

    let cli = Cli::parse();
    let settings = Settings::load_or_default(cli.config.as_deref())?;
    tracing::info!(background = %settings.background, "Loaded settings");

    match cli.command {
        Some(Commands::Place(args)) => {
            let placement = place::run(&args, &settings);
            println!("{}", serde_json::to_string_pretty(&placement)?);
        }
        Some(Commands::Demo { arrow }) => {
            let mut app = tui::App::new(settings, arrow)?;
            app.run().await?;
        }
        None => {
            let mut app = tui::App::new(settings, tui::DEFAULT_ARROW_CELLS)?;
            app.run().await?;
        }
    }

    Ok(())
}
