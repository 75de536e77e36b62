use std::io;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::DefaultTerminal;

use nirmala::app::App;
use nirmala::config;
use nirmala::intent::UserIntent;

/// Chat assistant front screen: compose a prompt, pick a model, toggle
/// filters. The composed intent is printed as JSON on submit.
#[derive(Parser)]
#[command(name = "nirmala", version, about)]
struct Cli {
    /// Path to a config file (defaults to ~/.config/nirmala/config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    // Logging is only active in debug builds
    #[cfg(debug_assertions)]
    env_logger::init();

    let cli = Cli::parse();

    // Config errors surface here, before the terminal is touched
    let config = config::load(cli.config.as_deref())?;
    let app = App::new(&config);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    crossterm::execute!(io::stdout(), EnableMouseCapture)?;

    // Run the application
    let result = run(terminal, app);

    // Restore terminal (automatic cleanup)
    let _ = crossterm::execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();

    // Hand the composed intent to whoever is listening on stdout
    if let Some(intent) = result? {
        println!("{}", serde_json::to_string_pretty(&intent)?);
    }

    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<Option<UserIntent>> {
    loop {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Handle events
        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(app.intent())
}
