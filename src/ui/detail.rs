//! Detail overlay rendering.
//!
//! Displays a modal panel with the full detail of the selected record. The
//! rest of the screen is the backdrop: clicking it dismisses the overlay, as
//! does the close control in the panel's top-right corner.

use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::overlay::{MediaBlock, OverlayContent, CLOSE_CONTROL};

/// Minimum panel width, when the terminal allows it.
const MIN_OVERLAY_WIDTH: u16 = 40;
/// Minimum panel height, when the terminal allows it.
const MIN_OVERLAY_HEIGHT: u16 = 12;

/// Where the overlay's interactive parts sit on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayLayout {
    pub panel: Rect,
    pub close_control: Rect,
}

/// What a click on the overlay landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayHit {
    CloseControl,
    Panel,
    Backdrop,
}

impl OverlayLayout {
    /// Compute the panel for a screen area.
    pub fn for_area(area: Rect) -> Self {
        // Width: 90% of screen, clamped to [MIN_OVERLAY_WIDTH, 100]
        let width = percent_of(area.width, 90)
            .clamp(MIN_OVERLAY_WIDTH.min(area.width), 100.min(area.width));
        // Height: 85% of screen, clamped to [MIN_OVERLAY_HEIGHT, 40]
        let height = percent_of(area.height, 85)
            .clamp(MIN_OVERLAY_HEIGHT.min(area.height), 40.min(area.height));

        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        let panel = Rect::new(x, y, width, height);

        let label_width = CLOSE_CONTROL.chars().count() as u16;
        let close_control = Rect::new(
            (panel.x + panel.width).saturating_sub(label_width + 1).max(panel.x),
            panel.y,
            label_width.min(panel.width),
            u16::from(panel.height > 0),
        );

        Self {
            panel,
            close_control,
        }
    }

    pub fn hit_test(&self, column: u16, row: u16) -> OverlayHit {
        let pos = Position::new(column, row);
        if self.close_control.contains(pos) {
            OverlayHit::CloseControl
        } else if self.panel.contains(pos) {
            OverlayHit::Panel
        } else {
            OverlayHit::Backdrop
        }
    }
}

/// `pct` percent of `len`, computed wide so large terminals don't overflow.
fn percent_of(len: u16, pct: u32) -> u16 {
    (u32::from(len) * pct / 100) as u16
}

/// Render the detail overlay on top of everything else.
pub fn render_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let Some(content) = app.overlay.content() else {
        return;
    };

    // Dim the backdrop
    frame
        .buffer_mut()
        .set_style(area, Style::default().add_modifier(Modifier::DIM));

    let layout = OverlayLayout::for_area(area);
    frame.render_widget(Clear, layout.panel);

    let block = Block::default()
        .title(format!(" {} ", content.text.date))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));
    let inner = block.inner(layout.panel);
    frame.render_widget(block, layout.panel);

    let close = Paragraph::new(CLOSE_CONTROL)
        .style(Style::default().fg(app.theme.highlight).add_modifier(Modifier::BOLD));
    frame.render_widget(close, layout.close_control);

    let media_height = if content.media.is_empty() { 0 } else { 4 };
    let chunks = Layout::vertical([
        Constraint::Length(media_height), // Media block
        Constraint::Min(3),               // Text block
        Constraint::Length(1),            // Footer
    ])
    .split(inner);

    render_media(frame, app, &content.media, chunks[0]);
    render_text(frame, app, content, chunks[1]);

    let footer = Paragraph::new(Line::from(vec![Span::styled(
        " ↑/↓ scroll | Esc or click outside to close ",
        Style::default().add_modifier(Modifier::DIM),
    )]));
    frame.render_widget(footer, chunks[2]);
}

fn render_media(frame: &mut Frame, app: &App, media: &MediaBlock, area: Rect) {
    let (title, lines, color) = match media {
        MediaBlock::Image { src, alt } => (
            " Image ",
            vec![
                Line::from(Span::styled(alt.as_str(), Style::default().add_modifier(Modifier::BOLD))),
                Line::from(src.as_str()),
            ],
            app.theme.image,
        ),
        MediaBlock::Video { embed_url } => (
            " Video ",
            vec![
                Line::from(Span::styled(
                    "▶ Embedded player",
                    Style::default().fg(app.theme.video).add_modifier(Modifier::BOLD),
                )),
                Line::from(embed_url.as_str()),
            ],
            app.theme.video,
        ),
        MediaBlock::Empty => return,
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(color));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_text(frame: &mut Frame, app: &App, content: &OverlayContent, area: Rect) {
    let text = &content.text;
    let mut lines = vec![
        Line::from(Span::styled(text.title.as_str(), app.theme.header)),
        Line::from(Span::styled(
            text.date.as_str(),
            Style::default().add_modifier(Modifier::DIM),
        )),
        Line::from(""),
        Line::from(text.explanation.as_str()),
    ];
    if let Some(ref copyright) = text.copyright {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("© {}", copyright.trim()),
            Style::default().add_modifier(Modifier::ITALIC),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.overlay.scroll(), 0));
    frame.render_widget(paragraph, area);
}
