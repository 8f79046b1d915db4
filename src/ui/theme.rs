//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::gallery::TileMedia;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Color for image thumbnails.
    pub image: Color,
    /// Color for video thumbnails and the play indicator.
    pub video: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for the overlay title.
    pub header: Style,
    /// Style for the selected tile border.
    pub selected: Style,
    /// Style for the focused date input.
    pub input_active: Style,
    /// Style for unfocused date inputs.
    pub input_inactive: Style,
    /// Style for placeholder and empty-state messages.
    pub placeholder: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            image: Color::LightBlue,
            video: Color::Magenta,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            selected: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            input_active: Style::default().fg(Color::Black).bg(Color::Cyan),
            input_inactive: Style::default().fg(Color::Gray).bg(Color::DarkGray),
            placeholder: Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            image: Color::Blue,
            video: Color::Magenta,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            selected: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            input_active: Style::default().fg(Color::White).bg(Color::Blue),
            input_inactive: Style::default().fg(Color::Black).bg(Color::Gray),
            placeholder: Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Get style for a tile's thumbnail
    pub fn media_style(&self, media: &TileMedia) -> Style {
        match media {
            TileMedia::Image { .. } => Style::default().fg(self.image),
            TileMedia::Video { .. } => Style::default().fg(self.video),
            TileMedia::Empty => Style::default().add_modifier(Modifier::DIM),
        }
    }
}
