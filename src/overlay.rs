//! Detail overlay state machine.
//!
//! There is one overlay per application, owned by [`crate::App`]. It is
//! either [`OverlayState::Closed`] or [`OverlayState::Open`]; opening while
//! already open replaces the content. Closing hides the overlay but keeps the
//! last content around for reuse.

use crate::source::{MediaType, Record};

/// Label of the close control drawn in the overlay's top-right corner.
pub const CLOSE_CONTROL: &str = "[×]";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Open,
}

/// Full-resolution media shown in the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaBlock {
    /// `hdurl` when the feed has one, else `url`.
    Image { src: String, alt: String },
    /// Embedded player frame for the video URL.
    Video { embed_url: String },
    Empty,
}

impl MediaBlock {
    pub fn for_record(record: &Record) -> Self {
        match &record.media_type {
            MediaType::Image => MediaBlock::Image {
                src: record.hd_url.clone().unwrap_or_else(|| record.url.clone()),
                alt: record.title.clone(),
            },
            MediaType::Video => MediaBlock::Video {
                embed_url: record.url.clone(),
            },
            MediaType::Unknown(_) => MediaBlock::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, MediaBlock::Empty)
    }
}

/// Text shown under the media block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    pub title: String,
    pub date: String,
    pub explanation: String,
    pub copyright: Option<String>,
}

/// Everything the overlay displays for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayContent {
    pub media: MediaBlock,
    pub text: TextBlock,
}

impl OverlayContent {
    pub fn for_record(record: &Record) -> Self {
        Self {
            media: MediaBlock::for_record(record),
            text: TextBlock {
                title: record.title.clone(),
                date: record.date.clone(),
                explanation: record.explanation.clone(),
                copyright: record.copyright.clone(),
            },
        }
    }
}

/// The detail overlay.
#[derive(Debug, Clone, Default)]
pub struct Overlay {
    state: OverlayState,
    content: Option<OverlayContent>,
    /// Vertical scroll of the explanation text.
    scroll: u16,
}

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `record`, replacing whatever was shown before.
    pub fn open(&mut self, record: &Record) {
        tracing::debug!(date = %record.date, title = %record.title, "opening detail overlay");
        self.content = Some(OverlayContent::for_record(record));
        self.scroll = 0;
        self.state = OverlayState::Open;
    }

    /// Hide the overlay. Closing a closed overlay is a no-op.
    pub fn close(&mut self) {
        self.state = OverlayState::Closed;
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == OverlayState::Open
    }

    /// Content of the overlay. Still available after closing.
    pub fn content(&self) -> Option<&OverlayContent> {
        self.content.as_ref()
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }
}
