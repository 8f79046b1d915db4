//! Gallery view-model.
//!
//! The gallery is the container the controller renders filtered records into.
//! Each render fully replaces its content: either one placeholder message, or
//! one [`Tile`] per record in feed order. Drawing the gallery to the terminal
//! lives in [`crate::ui::gallery`]; this module only decides what is shown and
//! which part of a tile reacts to a click.

use crate::source::{MediaType, Record};

/// Shown when the filtered record list is empty.
pub const EMPTY_MESSAGE: &str = "No images found for the selected date range.";

/// Shown when the feed could not be fetched or parsed.
pub const ERROR_MESSAGE: &str = "Error loading images. Please try again.";

/// Media content of a tile's thumbnail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileMedia {
    /// A still image thumbnail.
    Image { src: String, alt: String },
    /// A still thumbnail with a centered play indicator.
    Video { thumbnail: String, alt: String },
    /// Media type we don't know how to show. The tile exists but is empty.
    Empty,
}

impl TileMedia {
    /// Build the thumbnail for a record.
    pub fn for_record(record: &Record) -> Self {
        match &record.media_type {
            MediaType::Image => TileMedia::Image {
                src: record.url.clone(),
                alt: record.title.clone(),
            },
            MediaType::Video => TileMedia::Video {
                thumbnail: record.thumbnail_url.clone().unwrap_or_else(|| record.url.clone()),
                alt: record.title.clone(),
            },
            MediaType::Unknown(_) => TileMedia::Empty,
        }
    }

    /// Returns true if the tile has a thumbnail that can be clicked.
    pub fn is_interactive(&self) -> bool {
        !matches!(self, TileMedia::Empty)
    }

    /// Image source shown in the thumbnail, if any.
    pub fn src(&self) -> Option<&str> {
        match self {
            TileMedia::Image { src, .. } => Some(src),
            TileMedia::Video { thumbnail, .. } => Some(thumbnail),
            TileMedia::Empty => None,
        }
    }
}

/// One rendered gallery tile bound to a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub record: Record,
    pub media: TileMedia,
}

impl Tile {
    pub fn new(record: Record) -> Self {
        let media = TileMedia::for_record(&record);
        Self { record, media }
    }
}

/// A child of the gallery container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryItem {
    Placeholder(String),
    Tile(Tile),
}

/// Which part of a tile a pointer landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TilePart {
    /// The thumbnail: the only interactive surface.
    Thumbnail,
    /// Anything else inside the tile wrapper (border, caption).
    Wrapper,
}

/// Result of hit-testing a pointer position against the gallery grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileHit {
    pub index: usize,
    pub part: TilePart,
}

/// The gallery container.
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    items: Vec<GalleryItem>,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove all children.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// All children in display order.
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the tiles, skipping placeholders.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.items.iter().filter_map(|item| match item {
            GalleryItem::Tile(tile) => Some(tile),
            GalleryItem::Placeholder(_) => None,
        })
    }

    pub fn tile_count(&self) -> usize {
        self.tiles().count()
    }

    /// Get a tile by its position in the grid.
    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles().nth(index)
    }

    /// The placeholder message, if the gallery is showing one.
    pub fn placeholder(&self) -> Option<&str> {
        self.items.iter().find_map(|item| match item {
            GalleryItem::Placeholder(msg) => Some(msg.as_str()),
            GalleryItem::Tile(_) => None,
        })
    }

    /// Dispatch a click on a tile.
    ///
    /// Calls `on_select` with the tile's record exactly once when the click
    /// lands on an interactive thumbnail, and returns whether it was called.
    /// Clicks on the wrapper or on an empty tile do nothing.
    pub fn click<F>(&self, hit: TileHit, on_select: F) -> bool
    where
        F: FnOnce(&Record),
    {
        if hit.part != TilePart::Thumbnail {
            return false;
        }
        match self.tile(hit.index) {
            Some(tile) if tile.media.is_interactive() => {
                on_select(&tile.record);
                true
            }
            _ => false,
        }
    }
}

/// Replace the gallery content with tiles for `records`.
///
/// An empty list renders the single "no images" placeholder instead.
pub fn render(container: &mut Gallery, records: Vec<Record>) {
    container.clear();

    if records.is_empty() {
        container.items.push(GalleryItem::Placeholder(EMPTY_MESSAGE.to_string()));
        return;
    }

    let mut unknown = 0usize;
    for record in records {
        if let MediaType::Unknown(kind) = &record.media_type {
            unknown += 1;
            tracing::debug!(date = %record.date, media_type = %kind, "tile left empty");
        }
        container.items.push(GalleryItem::Tile(Tile::new(record)));
    }

    if unknown > 0 {
        tracing::warn!(count = unknown, "records with unrecognized media type rendered empty");
    }
}

/// Replace the gallery content with a single error message.
pub fn render_error(container: &mut Gallery, message: &str) {
    container.clear();
    container.items.push(GalleryItem::Placeholder(message.to_string()));
}
