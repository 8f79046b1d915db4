//! Terminal UI rendering using ratatui.
//!
//! ## Submodules
//!
//! - [`gallery`]: Tile grid, placeholder messages, and thumbnail hit-testing
//! - [`detail`]: Modal overlay showing one record in full
//! - [`common`]: Shared components (header with date inputs, status bar, help overlay)
//! - [`theme`]: Light/dark theme support with terminal auto-detection
//!
//! ## Rendering Architecture
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Header (common::render_header)       │
//! ├──────────────────────────────────────┤
//! │                                      │
//! │ Gallery (gallery::render)            │
//! │                                      │
//! ├──────────────────────────────────────┤
//! │ Status Bar (common::render_status)   │
//! └──────────────────────────────────────┘
//!         ↑
//!    Overlays rendered on top:
//!    - detail::render_overlay
//!    - common::render_help
//! ```

pub mod common;
pub mod detail;
pub mod gallery;
pub mod theme;

pub use theme::Theme;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Minimum terminal size for usable display.
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 12;

/// Draw one full frame.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.layout.screen = area;

    // Check for minimum terminal size
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        // Hidden modals must not capture input
        app.overlay.close();
        app.show_help = false;

        let msg = format!(
            "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );
        let paragraph = Paragraph::new(msg)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow));
        let centered = Rect::new(
            0,
            (area.height / 2).saturating_sub(2),
            area.width,
            5.min(area.height),
        );
        frame.render_widget(paragraph, centered);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header bar
        Constraint::Min(8),    // Gallery
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    common::render_header(frame, app, chunks[0]);
    gallery::render(frame, app, chunks[1]);
    common::render_status_bar(frame, app, chunks[2]);

    // Render detail overlay if open
    if app.overlay.is_open() {
        detail::render_overlay(frame, app, area);
    }

    // Render help overlay if active
    if app.show_help {
        common::render_help(frame, app, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use ratatui::{backend::TestBackend, Terminal};

    use crate::config::Settings;
    use crate::gallery::{render_error, ERROR_MESSAGE};
    use crate::source::{FileFeed, MediaType, Record};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn app() -> App {
        let feed = Arc::new(FileFeed::new("/nonexistent/apod.json"));
        App::new(feed, tokio::runtime::Handle::current(), &Settings::default())
    }

    fn record(date: &str, media_type: MediaType) -> Record {
        Record {
            date: date.to_string(),
            title: format!("Title {}", date),
            explanation: "A long explanation of the picture.".to_string(),
            media_type,
            url: format!("https://example.com/{}.jpg", date),
            hd_url: None,
            thumbnail_url: None,
            copyright: Some("Photographer".to_string()),
        }
    }

    #[tokio::test]
    async fn test_draw_error_placeholder() {
        let mut app = app();
        render_error(&mut app.gallery, ERROR_MESSAGE);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Error loading images. Please try again."));
        assert!(text.contains("APOD GALLERY"));
    }

    #[tokio::test]
    async fn test_draw_records_layout_for_hit_testing() {
        let mut app = app();
        crate::gallery::render(
            &mut app.gallery,
            vec![
                record("2023-01-01", MediaType::Image),
                record("2023-01-02", MediaType::Video),
            ],
        );
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Gallery (2)"));
        assert!(text.contains("2023-01-02"));
        assert!(text.contains('▶'));
        assert_eq!(app.layout.screen, Rect::new(0, 0, 100, 30));
        assert_eq!(app.layout.gallery, Rect::new(1, 2, 98, 26));
        assert!(app.layout.fetch_button.width > 0);
    }

    #[tokio::test]
    async fn test_draw_overlay() {
        let mut app = app();
        app.overlay.open(&record("2023-01-03", MediaType::Image));
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("[×]"));
        assert!(text.contains("Title 2023-01-03"));
        assert!(text.contains("© Photographer"));
    }

    #[tokio::test]
    async fn test_draw_small_terminal() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();

        terminal.draw(|f| draw(f, &mut app)).unwrap();

        assert!(screen_text(&terminal).contains("Terminal too small"));
    }

    #[tokio::test]
    async fn test_small_terminal_closes_hidden_modals() {
        let mut app = app();
        app.overlay.open(&record("2023-01-03", MediaType::Image));
        app.show_help = true;
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();

        terminal.draw(|f| draw(f, &mut app)).unwrap();

        assert!(!app.overlay.is_open());
        assert!(!app.show_help);
    }
}
