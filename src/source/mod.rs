//! Feed sources for APOD records.
//!
//! This module provides a trait-based abstraction over where the feed comes
//! from: the public HTTPS resource, or a local JSON file with the same shape.

mod error;
mod file;
mod http;
mod record;

pub use error::FetchError;
pub use file::FileFeed;
pub use http::{HttpFeed, DEFAULT_FEED_URL};
pub use record::{parse_records, MediaType, Record};

use std::fmt::Debug;

use async_trait::async_trait;

/// Trait for fetching the full record sequence.
///
/// Implementations make exactly one attempt per call, with no retry and no
/// caching between calls.
///
/// # Example
///
/// ```no_run
/// use apod_gallery::{Feed, FileFeed};
///
/// # tokio_test::block_on(async {
/// let feed = FileFeed::new("data.json");
/// let records = feed.fetch_all().await.unwrap();
/// println!("Got {} records", records.len());
/// # });
/// ```
#[async_trait]
pub trait Feed: Send + Sync + Debug {
    /// Fetch and parse the whole feed, preserving feed order.
    async fn fetch_all(&self) -> Result<Vec<Record>, FetchError>;

    /// Returns a human-readable description of the source.
    ///
    /// Used for display in the TUI status bar.
    fn description(&self) -> &str;
}
