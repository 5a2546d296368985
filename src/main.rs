use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;

use career_suggester::app::App;
use career_suggester::config::load_config;
use career_suggester::logging;
use career_suggester::suggest::CareerClient;

/// Ask a recommendation service for careers that fit your interests
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Recommendation endpoint URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Path to a config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to the log file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    let mut config = load_config(args.config.as_deref())?;
    if let Some(endpoint) = args.endpoint {
        config.endpoint.url = endpoint;
    }

    // Logging is best-effort; the form works without it
    match logging::init(args.log_file.as_deref()) {
        Ok(Some(path)) => log::info!("Logging to {}", path.display()),
        Ok(None) => {}
        Err(e) => eprintln!("Warning: logging disabled: {}", e),
    }
    log::info!("Using endpoint {}", config.endpoint.url);

    let mut app = App::new(&config);
    app.start_worker(CareerClient::new(config.endpoint.url.clone()))?;

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    let result = run(terminal, &mut app);

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    app.shutdown();

    result
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Handle events and worker responses
        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
