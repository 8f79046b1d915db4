//! # apod-gallery
//!
//! A terminal gallery viewer for the astronomy picture of the day feed.
//!
//! On demand the viewer fetches the feed's JSON array, keeps the entries
//! inside a user-chosen date range, lays them out as thumbnail tiles, and
//! opens a detail overlay when a thumbnail is selected.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         Application                          │
//! │  ┌─────────┐   ┌──────────┐   ┌──────────┐   ┌────────────┐  │
//! │  │  app    │──▶│   data   │──▶│ gallery  │──▶│     ui     │  │
//! │  │(control)│   │ (filter) │   │ overlay  │   │ (ratatui)  │  │
//! │  └────┬────┘   └──────────┘   └──────────┘   └────────────┘  │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  ┌─────────┐                                                 │
//! │  │ source  │◀── HttpFeed | FileFeed                          │
//! │  │ (feed)  │                                                 │
//! │  └─────────┘                                                 │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: The controller. Reads the date inputs, issues fetches tagged
//!   with a sequence number, and renders only the latest response
//! - **[`source`]**: The [`Feed`] trait with HTTP and file implementations
//! - **[`data`]**: Inclusive calendar-date range filtering
//! - **[`gallery`]** / **[`overlay`]**: View-models for the tile grid and the
//!   detail overlay
//! - **[`ui`]**: Terminal rendering and hit-testing
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Browse the public feed
//! apod-gallery --start 2023-01-02 --end 2023-01-04 --fetch-on-start
//!
//! # Browse a local copy of the feed
//! apod-gallery --file data.json
//!
//! # Write the filtered records to a file and exit
//! apod-gallery --start 2023-01-01 --end 2023-01-31 --export january.json
//! ```
//!
//! ### As a library
//!
//! ```no_run
//! use apod_gallery::{data, gallery, Feed, FileFeed, Gallery};
//!
//! # tokio_test::block_on(async {
//! let records = FileFeed::new("data.json").fetch_all().await.unwrap();
//! let range = data::DateRange::parse(Some("2023-01-02"), Some("2023-01-04"));
//!
//! let mut container = Gallery::new();
//! gallery::render(&mut container, data::filter(records, &range));
//! println!("{} tiles", container.tile_count());
//! # });
//! ```

pub mod app;
pub mod config;
pub mod data;
pub mod events;
pub mod gallery;
pub mod logging;
pub mod overlay;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use config::Settings;
pub use data::DateRange;
pub use gallery::{Gallery, Tile, TileMedia};
pub use overlay::{Overlay, OverlayState};
pub use source::{
    FetchError, Feed, FileFeed, HttpFeed, MediaType, Record, DEFAULT_FEED_URL,
};
