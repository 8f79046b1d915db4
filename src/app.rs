//! Application state and the fetch → filter → render pipeline.

use std::sync::Arc;

use ratatui::layout::Rect;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::config::Settings;
use crate::data::{self, DateRange};
use crate::gallery::{self, Gallery, TileHit, ERROR_MESSAGE};
use crate::overlay::Overlay;
use crate::source::{Feed, FetchError, Record};
use crate::ui::gallery::GridLayout;
use crate::ui::Theme;

/// Which control receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Keys navigate the gallery.
    Gallery,
    /// Keys edit the start-date input.
    StartInput,
    /// Keys edit the end-date input.
    EndInput,
}

impl Focus {
    /// Cycle to the next control.
    pub fn next(self) -> Self {
        match self {
            Focus::Gallery => Focus::StartInput,
            Focus::StartInput => Focus::EndInput,
            Focus::EndInput => Focus::Gallery,
        }
    }
}

/// A finished fetch, tagged with the request that issued it.
#[derive(Debug)]
pub struct FetchOutcome {
    pub sequence: u64,
    pub result: Result<Vec<Record>, FetchError>,
}

/// Screen regions recorded during the last draw, used for mouse hit-testing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScreenLayout {
    pub screen: Rect,
    pub start_input: Rect,
    pub end_input: Rect,
    pub fetch_button: Rect,
    /// Inner area of the gallery grid.
    pub gallery: Rect,
}

/// Main application state.
pub struct App {
    pub running: bool,
    pub show_help: bool,
    pub focus: Focus,

    // Date bound inputs, as typed
    pub start_input: String,
    pub end_input: String,

    // Feed
    feed: Arc<dyn Feed>,
    runtime: Handle,
    outcome_tx: mpsc::UnboundedSender<FetchOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<FetchOutcome>,
    latest_request: u64,
    /// Bounds captured when the latest request was issued.
    latest_range: DateRange,
    pub loading: bool,
    pub last_fetched: Option<usize>,

    // Gallery and overlay
    pub gallery: Gallery,
    pub overlay: Overlay,
    pub selected_tile: usize,
    pub scroll_row: usize,
    pub tile_width: u16,
    pub tile_height: u16,

    // UI
    pub theme: Theme,
    pub layout: ScreenLayout,

    // Status message (temporary feedback)
    pub status_message: Option<(String, std::time::Instant)>,
}

impl App {
    /// Create a new App that fetches from `feed` on the given runtime.
    pub fn new(feed: Arc<dyn Feed>, runtime: Handle, settings: &Settings) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            running: true,
            show_help: false,
            focus: Focus::Gallery,
            start_input: String::new(),
            end_input: String::new(),
            feed,
            runtime,
            outcome_tx,
            outcome_rx,
            latest_request: 0,
            latest_range: DateRange::default(),
            loading: false,
            last_fetched: None,
            gallery: Gallery::new(),
            overlay: Overlay::new(),
            selected_tile: 0,
            scroll_row: 0,
            tile_width: settings.tile_width,
            tile_height: settings.tile_height,
            theme: Theme::dark(),
            layout: ScreenLayout::default(),
            status_message: None,
        }
    }

    /// Replace the theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Pre-fill the date inputs.
    pub fn with_bounds(mut self, start: Option<String>, end: Option<String>) -> Self {
        self.start_input = start.unwrap_or_default();
        self.end_input = end.unwrap_or_default();
        self
    }

    /// Returns a description of the current feed.
    pub fn source_description(&self) -> &str {
        self.feed.description()
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, std::time::Instant::now()));
    }

    /// Get the current status message if it hasn't expired (3 seconds).
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < std::time::Duration::from_secs(3) {
                return Some(msg);
            }
        }
        None
    }

    /// Sequence number of the most recently issued fetch.
    pub fn latest_request(&self) -> u64 {
        self.latest_request
    }

    /// The trigger action: read the inputs, clear the gallery, start a fetch.
    ///
    /// Returns immediately with the request's sequence number. The result is
    /// picked up by [`App::poll_fetches`].
    pub fn trigger_fetch(&mut self) -> u64 {
        tracing::info!(start = %self.start_input, end = %self.end_input, "fetch triggered");

        self.latest_range =
            DateRange::parse(Some(self.start_input.as_str()), Some(self.end_input.as_str()));
        self.gallery.clear();
        self.selected_tile = 0;
        self.scroll_row = 0;
        self.loading = true;

        self.latest_request += 1;
        let sequence = self.latest_request;

        let feed = Arc::clone(&self.feed);
        let tx = self.outcome_tx.clone();
        self.runtime.spawn(async move {
            let result = feed.fetch_all().await;
            // Receiver gone means the app has exited.
            let _ = tx.send(FetchOutcome { sequence, result });
        });

        sequence
    }

    /// Drain finished fetches without blocking.
    ///
    /// Returns true if the gallery changed.
    pub fn poll_fetches(&mut self) -> bool {
        let mut changed = false;
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            changed |= self.complete_fetch(outcome);
        }
        changed
    }

    /// Apply a finished fetch.
    ///
    /// Only the latest issued request is rendered; anything older is dropped.
    /// Returns true if the gallery was re-rendered.
    pub fn complete_fetch(&mut self, outcome: FetchOutcome) -> bool {
        if outcome.sequence != self.latest_request {
            tracing::debug!(
                sequence = outcome.sequence,
                latest = self.latest_request,
                "discarding stale fetch result"
            );
            return false;
        }

        self.loading = false;

        match outcome.result {
            Ok(records) => {
                tracing::info!(total = records.len(), "feed fetched");
                let sample: Vec<&str> = records.iter().take(5).map(|r| r.date.as_str()).collect();
                tracing::debug!(?sample, "sample dates");

                self.last_fetched = Some(records.len());
                let filtered = data::filter(records, &self.latest_range);
                tracing::info!(filtered = filtered.len(), "records after date filter");

                gallery::render(&mut self.gallery, filtered);
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to fetch feed");
                self.last_fetched = None;
                gallery::render_error(&mut self.gallery, ERROR_MESSAGE);
            }
        }

        self.selected_tile = 0;
        self.scroll_row = 0;
        true
    }

    /// Handle a click on a tile: thumbnails open the overlay.
    pub fn click_tile(&mut self, hit: TileHit) {
        if hit.index < self.gallery.tile_count() {
            self.selected_tile = hit.index;
        }
        let overlay = &mut self.overlay;
        self.gallery.click(hit, |record| overlay.open(record));
    }

    /// Activate the keyboard-selected tile, as if its thumbnail was clicked.
    pub fn activate_selected(&mut self) {
        self.click_tile(TileHit {
            index: self.selected_tile,
            part: gallery::TilePart::Thumbnail,
        });
    }

    /// Escape: close the overlay, wherever focus is.
    pub fn cancel(&mut self) {
        self.overlay.close();
        self.show_help = false;
        self.focus = Focus::Gallery;
    }

    /// Move the tile selection by `delta` positions, clamped to the tile list.
    pub fn move_selection(&mut self, delta: isize) {
        let count = self.gallery.tile_count();
        if count == 0 {
            self.selected_tile = 0;
            return;
        }
        let max = count - 1;
        self.selected_tile = self.selected_tile.saturating_add_signed(delta).min(max);
    }

    pub fn select_first(&mut self) {
        self.selected_tile = 0;
    }

    pub fn select_last(&mut self) {
        self.selected_tile = self.gallery.tile_count().saturating_sub(1);
    }

    /// Number of tile columns for the current gallery area.
    pub fn columns(&self) -> usize {
        GridLayout::new(self.layout.gallery, self.tile_width, self.tile_height).columns()
    }

    /// The input string for the focused control, if an input is focused.
    pub fn focused_input(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Gallery => None,
            Focus::StartInput => Some(&mut self.start_input),
            Focus::EndInput => Some(&mut self.end_input),
        }
    }

    /// Clear both date inputs.
    pub fn clear_bounds(&mut self) {
        self.start_input.clear();
        self.end_input.clear();
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }
}
