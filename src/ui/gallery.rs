//! Gallery grid rendering.
//!
//! Tiles are laid out left to right, top to bottom, in fixed-size cells.
//! Each tile is a bordered box: the thumbnail fills the inside and the last
//! inner line is the caption. Only the thumbnail reacts to clicks, so the
//! same [`GridLayout`] drives both drawing and mouse hit-testing.

use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::gallery::{GalleryItem, Tile, TileHit, TileMedia, TilePart};
use crate::ui::Theme;

/// Play indicator drawn over video thumbnails.
const PLAY_INDICATOR: &str = "▶";

/// Fixed-size grid geometry for the gallery area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub area: Rect,
    pub tile_width: u16,
    pub tile_height: u16,
}

impl GridLayout {
    pub fn new(area: Rect, tile_width: u16, tile_height: u16) -> Self {
        Self {
            area,
            tile_width: tile_width.max(1),
            tile_height: tile_height.max(1),
        }
    }

    /// Number of tiles per row. Always at least one.
    pub fn columns(&self) -> usize {
        (self.area.width / self.tile_width).max(1) as usize
    }

    /// Number of tile rows that fit on screen. Always at least one.
    pub fn visible_rows(&self) -> usize {
        (self.area.height / self.tile_height).max(1) as usize
    }

    /// Screen rectangle of tile `index`, or `None` if it is scrolled out.
    pub fn tile_rect(&self, index: usize, scroll_row: usize) -> Option<Rect> {
        let columns = self.columns();
        let row = index / columns;
        let col = index % columns;
        if row < scroll_row || row >= scroll_row + self.visible_rows() {
            return None;
        }

        let x = self.area.x + col as u16 * self.tile_width;
        let y = self.area.y + (row - scroll_row) as u16 * self.tile_height;
        let width = self.tile_width.min(self.area.right().saturating_sub(x));
        let height = self.tile_height.min(self.area.bottom().saturating_sub(y));
        if width == 0 || height == 0 {
            return None;
        }
        Some(Rect::new(x, y, width, height))
    }

    /// Scroll offset that keeps `selected` on screen, moving as little as possible.
    pub fn scroll_to(&self, selected: usize, scroll_row: usize) -> usize {
        let row = selected / self.columns();
        let visible = self.visible_rows();
        if row < scroll_row {
            row
        } else if row >= scroll_row + visible {
            row + 1 - visible
        } else {
            scroll_row
        }
    }

    /// Map a screen position to a tile and the part of it under the pointer.
    pub fn hit_test(
        &self,
        column: u16,
        row: u16,
        scroll_row: usize,
        tile_count: usize,
    ) -> Option<TileHit> {
        let pos = Position::new(column, row);
        if !self.area.contains(pos) {
            return None;
        }

        let col = ((column - self.area.x) / self.tile_width) as usize;
        if col >= self.columns() {
            return None;
        }
        let grid_row = ((row - self.area.y) / self.tile_height) as usize + scroll_row;
        let index = grid_row * self.columns() + col;
        if index >= tile_count {
            return None;
        }

        let tile = self.tile_rect(index, scroll_row)?;
        let part = if thumbnail_rect(tile).contains(pos) {
            TilePart::Thumbnail
        } else {
            TilePart::Wrapper
        };
        Some(TileHit { index, part })
    }
}

/// Area inside the tile border, above the caption line.
pub fn thumbnail_rect(tile: Rect) -> Rect {
    Rect::new(
        tile.x + 1,
        tile.y + 1,
        tile.width.saturating_sub(2),
        tile.height.saturating_sub(3),
    )
}

/// The caption line at the bottom of the tile, inside the border.
pub fn caption_rect(tile: Rect) -> Rect {
    Rect::new(
        tile.x + 1,
        (tile.y + tile.height).saturating_sub(2).max(tile.y),
        tile.width.saturating_sub(2),
        u16::from(tile.height >= 3),
    )
}

/// Render the gallery container: a placeholder message or the tile grid.
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let tile_count = app.gallery.tile_count();
    let title = if tile_count > 0 {
        format!(" Gallery ({}) ", tile_count)
    } else {
        " Gallery ".to_string()
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    app.layout.gallery = inner;

    if app.gallery.is_empty() {
        let hint = if app.loading {
            "Loading images..."
        } else {
            "Pick a date range and press f to fetch images."
        };
        render_message(frame, &app.theme, inner, hint);
        return;
    }

    let grid = GridLayout::new(inner, app.tile_width, app.tile_height);
    app.scroll_row = grid.scroll_to(app.selected_tile, app.scroll_row);

    let mut index = 0;
    for item in app.gallery.items() {
        match item {
            GalleryItem::Placeholder(msg) => render_message(frame, &app.theme, inner, msg),
            GalleryItem::Tile(tile) => {
                if let Some(rect) = grid.tile_rect(index, app.scroll_row) {
                    render_tile(frame, &app.theme, tile, rect, index == app.selected_tile);
                }
                index += 1;
            }
        }
    }
}

fn render_message(frame: &mut Frame, theme: &Theme, area: Rect, msg: &str) {
    let y = area.y + area.height.saturating_sub(1) / 2;
    let line_area = Rect::new(area.x, y, area.width, area.height.min(2));
    let paragraph = Paragraph::new(msg)
        .alignment(Alignment::Center)
        .style(theme.placeholder)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, line_area);
}

fn render_tile(frame: &mut Frame, theme: &Theme, tile: &Tile, rect: Rect, selected: bool) {
    let border_style = if selected {
        theme.selected
    } else {
        Style::default().fg(theme.border)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(border_style);
    frame.render_widget(block, rect);

    let thumb = thumbnail_rect(rect);
    let media_style = theme.media_style(&tile.media);

    match &tile.media {
        TileMedia::Image { src, alt } => {
            frame.render_widget(thumbnail_text(alt, src, media_style), thumb);
        }
        TileMedia::Video { thumbnail, alt } => {
            frame.render_widget(thumbnail_text(alt, thumbnail, media_style), thumb);
            if thumb.width > 0 && thumb.height > 0 {
                let center = Rect::new(
                    thumb.x + thumb.width / 2,
                    thumb.y + thumb.height / 2,
                    1,
                    1,
                );
                let play = Paragraph::new(PLAY_INDICATOR)
                    .style(Style::default().fg(theme.video).add_modifier(Modifier::BOLD));
                frame.render_widget(play, center);
            }
        }
        TileMedia::Empty => {}
    }

    let caption = Paragraph::new(Line::from(Span::styled(
        tile.record.date.clone(),
        Style::default().add_modifier(Modifier::DIM),
    )));
    frame.render_widget(caption, caption_rect(rect));
}

/// Terminal stand-in for an image: the alt text and the image file name.
fn thumbnail_text<'a>(alt: &'a str, src: &'a str, style: Style) -> Paragraph<'a> {
    let file_name = src.rsplit('/').next().unwrap_or(src);
    Paragraph::new(vec![
        Line::from(Span::styled(alt, style.add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(file_name, Style::default().add_modifier(Modifier::DIM))),
    ])
    .wrap(Wrap { trim: true })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> GridLayout {
        // 3 columns of 20, 2 rows of 6
        GridLayout::new(Rect::new(1, 2, 65, 13), 20, 6)
    }

    #[test]
    fn test_columns_and_rows() {
        let g = grid();
        assert_eq!(g.columns(), 3);
        assert_eq!(g.visible_rows(), 2);

        let narrow = GridLayout::new(Rect::new(0, 0, 10, 3), 20, 6);
        assert_eq!(narrow.columns(), 1);
        assert_eq!(narrow.visible_rows(), 1);
    }

    #[test]
    fn test_tile_rect_positions() {
        let g = grid();
        assert_eq!(g.tile_rect(0, 0), Some(Rect::new(1, 2, 20, 6)));
        assert_eq!(g.tile_rect(4, 0), Some(Rect::new(21, 8, 20, 6)));
        // Third row is off screen until scrolled.
        assert_eq!(g.tile_rect(6, 0), None);
        assert_eq!(g.tile_rect(6, 1), Some(Rect::new(1, 8, 20, 6)));
        assert_eq!(g.tile_rect(0, 1), None);
    }

    #[test]
    fn test_scroll_to_keeps_selection_visible() {
        let g = grid();
        assert_eq!(g.scroll_to(0, 0), 0);
        assert_eq!(g.scroll_to(5, 0), 0);
        assert_eq!(g.scroll_to(6, 0), 1);
        assert_eq!(g.scroll_to(11, 0), 2);
        assert_eq!(g.scroll_to(1, 3), 0);
    }

    #[test]
    fn test_hit_test_thumbnail_vs_wrapper() {
        let g = grid();
        // Inside tile 1's thumbnail.
        assert_eq!(
            g.hit_test(25, 4, 0, 5),
            Some(TileHit {
                index: 1,
                part: TilePart::Thumbnail
            })
        );
        // Tile 1's top border.
        assert_eq!(
            g.hit_test(25, 2, 0, 5),
            Some(TileHit {
                index: 1,
                part: TilePart::Wrapper
            })
        );
        // Tile 1's caption line.
        assert_eq!(
            g.hit_test(25, 6, 0, 5),
            Some(TileHit {
                index: 1,
                part: TilePart::Wrapper
            })
        );
    }

    #[test]
    fn test_hit_test_outside_or_past_last_tile() {
        let g = grid();
        assert_eq!(g.hit_test(0, 0, 0, 5), None);
        // Slot for index 5 exists on screen but there are only 5 tiles.
        assert_eq!(g.hit_test(45, 10, 0, 5), None);
        // Leftover columns past the last full tile.
        assert_eq!(g.hit_test(63, 4, 0, 5), None);
    }

    #[test]
    fn test_hit_test_respects_scroll() {
        let g = grid();
        let hit = g.hit_test(5, 4, 1, 9).unwrap();
        assert_eq!(hit.index, 3);
        assert_eq!(hit.part, TilePart::Thumbnail);
    }

    #[test]
    fn test_thumbnail_and_caption_rects() {
        let tile = Rect::new(10, 5, 20, 6);
        assert_eq!(thumbnail_rect(tile), Rect::new(11, 6, 18, 3));
        assert_eq!(caption_rect(tile), Rect::new(11, 9, 18, 1));
    }
}
