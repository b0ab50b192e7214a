//! FB-Insights: AI-Enhanced Facebook Analytics dashboard.
//!
//! ## Usage
//!
//! ```bash
//! # Start on the dashboard
//! fb-insights
//!
//! # Start on the assistant, without fetching the logo
//! fb-insights --page ai-assistant --no-logo
//!
//! # Load page settings from a file
//! fb-insights --config dashboard.toml
//! ```

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::prelude::*;
use tokio::sync::oneshot;
use tracing::{error, info};

use fb_insights::branding::{self, LogoFetcher, LogoStatus};
use fb_insights::{logging, ui, App, ConfigOverrides, DashboardConfig, Page};

/// FB-Insights: AI-Enhanced Facebook Analytics dashboard
#[derive(Parser, Debug)]
#[command(name = "fb-insights")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file with page settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Account name shown in captions and greetings
    #[arg(short, long)]
    user: Option<String>,

    /// Page to open first (dashboard, ai-assistant, content-generator, performance-insights)
    #[arg(short, long, default_value = "dashboard")]
    page: Page,

    /// Branding logo URL
    #[arg(long)]
    logo_url: Option<String>,

    /// Do not fetch the branding logo
    #[arg(long)]
    no_logo: bool,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            user: self.user.clone(),
            logo_url: self.logo_url.clone(),
            no_logo: self.no_logo,
            log_file: self.log_file.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Configuration is fixed from here on
    let config = DashboardConfig::load(args.config.as_deref(), &args.overrides())
        .context("invalid configuration")?;

    logging::init_tracing(&config.log_file)
        .with_context(|| format!("cannot open log file {}", config.log_file.display()))?;
    info!(user = %config.user, page = %args.page, "starting fb-insights");

    let logo_rx = start_logo_fetch(&config);
    let mut app = App::new(config).with_page(args.page);
    if logo_rx.is_none() && app.config().fetch_logo {
        app.set_logo(LogoStatus::Unavailable("client setup failed".to_string()));
    }

    // Setup terminal with panic hook for cleanup
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle(app.config().window_title())
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, logo_rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    exit_status(result)
}

/// Log how the loop ended. A loop failure becomes a non-zero exit.
fn exit_status(result: io::Result<()>) -> Result<()> {
    if let Err(e) = &result {
        error!("terminal loop failed: {}", e);
    }
    info!("fb-insights exited");

    result.context("terminal loop failed")
}

/// Kick off the background logo fetch if enabled.
fn start_logo_fetch(config: &DashboardConfig) -> Option<oneshot::Receiver<LogoStatus>> {
    if !config.fetch_logo {
        return None;
    }
    match LogoFetcher::new(config.logo_url.clone()) {
        Ok(fetcher) => {
            info!(url = fetcher.url(), "fetching logo");
            Some(branding::spawn_fetch(fetcher))
        }
        Err(e) => {
            error!("cannot build logo HTTP client: {}", e);
            None
        }
    }
}

/// Main application loop: one key press, one render cycle.
fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mut logo_rx: Option<oneshot::Receiver<LogoStatus>>,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        // Pick up the logo result without blocking
        if let Some(rx) = logo_rx.as_mut() {
            match rx.try_recv() {
                Ok(status) => {
                    app.set_logo(status);
                    logo_rx = None;
                }
                Err(oneshot::error::TryRecvError::Empty) => {}
                Err(oneshot::error::TryRecvError::Closed) => {
                    app.set_logo(LogoStatus::Unavailable("fetch task ended".to_string()));
                    logo_rx = None;
                }
            }
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
