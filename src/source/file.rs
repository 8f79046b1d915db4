//! File-based feed.
//!
//! Reads the feed's JSON array from a local file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{parse_records, Feed, FetchError, Record};

/// A feed that reads records from a JSON file on disk.
///
/// The file is re-read on every fetch, so edits show up on the next trigger.
#[derive(Debug)]
pub struct FileFeed {
    path: PathBuf,
    description: String,
}

impl FileFeed {
    /// Create a new file feed for the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let description = format!("file: {}", path.display());
        Self { path, description }
    }

    /// Returns the path being read.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl Feed for FileFeed {
    async fn fetch_all(&self) -> Result<Vec<Record>, FetchError> {
        let body = tokio::fs::read(&self.path).await?;
        parse_records(&body)
    }

    fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MediaType;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_json() -> &'static str {
        r#"[
            {"date": "2023-01-02", "title": "B", "explanation": "", "media_type": "video",
             "url": "https://www.youtube.com/embed/b"},
            {"date": "2023-01-01", "title": "A", "explanation": "", "media_type": "image",
             "url": "https://example.com/a.jpg"}
        ]"#
    }

    #[test]
    fn test_file_feed_new() {
        let feed = FileFeed::new("/tmp/apod.json");
        assert_eq!(feed.path(), Path::new("/tmp/apod.json"));
        assert_eq!(feed.description(), "file: /tmp/apod.json");
    }

    #[tokio::test]
    async fn test_file_feed_reads_in_feed_order() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", sample_json()).unwrap();

        let feed = FileFeed::new(file.path());
        let records = feed.fetch_all().await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "B");
        assert_eq!(records[0].media_type, MediaType::Video);
        assert_eq!(records[1].title, "A");
    }

    #[tokio::test]
    async fn test_file_feed_missing_file() {
        let feed = FileFeed::new("/nonexistent/path/apod.json");

        let err = feed.fetch_all().await.unwrap_err();
        assert!(matches!(err, FetchError::Io(_)));
        assert!(err.to_string().contains("failed to read feed file"));
    }

    #[tokio::test]
    async fn test_file_feed_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid json").unwrap();

        let feed = FileFeed::new(file.path());

        let err = feed.fetch_all().await.unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }
}
