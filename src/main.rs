use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::runtime::Runtime;

use apod_gallery::{
    data::{self, DateRange},
    events, gallery, logging, ui, App, Feed, FileFeed, HttpFeed, Settings,
};

#[derive(Parser, Debug)]
#[command(name = "apod-gallery")]
#[command(about = "Terminal gallery viewer for the astronomy picture of the day feed")]
struct Args {
    /// Feed URL (defaults to the public APOD mirror)
    #[arg(short, long, conflicts_with = "file")]
    url: Option<String>,

    /// Read the feed from a local JSON file instead of the network
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Start of the date range, inclusive (YYYY-MM-DD)
    #[arg(short, long)]
    start: Option<String>,

    /// End of the date range, inclusive (YYYY-MM-DD)
    #[arg(short, long)]
    end: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write logs here instead of the temp dir
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Fetch as soon as the gallery opens
    #[arg(long)]
    fetch_on_start: bool,

    /// Fetch, filter, write the matching records as JSON, and exit
    #[arg(short = 'x', long)]
    export: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(url) = args.url {
        settings.url = url;
        settings.file = None;
    }
    if let Some(file) = args.file {
        settings.file = Some(file);
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = Some(log_file);
    }

    logging::init(&settings.log_path())?;

    let feed = build_feed(&settings);
    tracing::info!(source = feed.description(), "feed configured");

    let rt = Runtime::new()?;

    // Handle export mode (non-interactive)
    if let Some(export_path) = args.export {
        let range = DateRange::parse(args.start.as_deref(), args.end.as_deref());
        return export_to_file(&rt, feed.as_ref(), &range, &export_path);
    }

    run_tui(&rt, feed, &settings, args.start, args.end, args.fetch_on_start)
}

/// Pick the feed: a local file if configured, otherwise HTTP.
fn build_feed(settings: &Settings) -> Arc<dyn Feed> {
    match settings.file {
        Some(ref path) => Arc::new(FileFeed::new(path)),
        None => Arc::new(HttpFeed::new(settings.url.clone())),
    }
}

/// Run the TUI until the user quits
fn run_tui(
    rt: &Runtime,
    feed: Arc<dyn Feed>,
    settings: &Settings,
    start: Option<String>,
    end: Option<String>,
    fetch_on_start: bool,
) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        tracing::error!(panic = %panic, "panic");
        original_hook(panic);
    }));

    let mut app = App::new(feed, rt.handle().clone(), settings)
        .with_theme(ui::Theme::auto_detect())
        .with_bounds(start, end);
    if fetch_on_start {
        app.trigger_fetch();
    }

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        // Pick up finished fetches before drawing
        app.poll_fetches();

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll for events with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Mouse(mouse) => events::handle_mouse_event(app, mouse),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }
    }

    Ok(())
}

/// Fetch once, filter, and write the matching records to a JSON file
fn export_to_file(rt: &Runtime, feed: &dyn Feed, range: &DateRange, path: &Path) -> Result<()> {
    let records = rt
        .block_on(feed.fetch_all())
        .context(gallery::ERROR_MESSAGE)?;
    tracing::info!(total = records.len(), "feed fetched");

    let filtered = data::filter(records, range);
    tracing::info!(filtered = filtered.len(), "records after date filter");
    if filtered.is_empty() {
        eprintln!("{}", gallery::EMPTY_MESSAGE);
    }

    let json = serde_json::to_string_pretty(&filtered)?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;

    println!("Exported {} records to: {}", filtered.len(), path.display());
    Ok(())
}
