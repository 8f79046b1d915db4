//! Common UI components.
//!
//! This module contains the header bar (date inputs and fetch button), the
//! status bar, and the help overlay.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};

/// Label of the trigger control.
pub const FETCH_BUTTON: &str = "[ Fetch ]";

/// Width of a date input, enough for `YYYY-MM-DD` plus a cursor.
const INPUT_WIDTH: u16 = 12;

/// Render the header bar: title, the two date inputs, and the fetch button.
///
/// Records where the inputs and button landed so mouse clicks can reach them.
pub fn render_header(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::horizontal([
        Constraint::Length(15),                        // Title
        Constraint::Length(7),                         // "Start: "
        Constraint::Length(INPUT_WIDTH),               // Start input
        Constraint::Length(6),                         // " End: "
        Constraint::Length(INPUT_WIDTH),               // End input
        Constraint::Length(2),                         // Gap
        Constraint::Length(FETCH_BUTTON.len() as u16), // Button
        Constraint::Min(0),                            // Result info
    ])
    .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            " APOD GALLERY ",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        chunks[0],
    );
    frame.render_widget(Paragraph::new("Start: "), chunks[1]);
    render_input(frame, app, Focus::StartInput, chunks[2]);
    frame.render_widget(Paragraph::new(" End: "), chunks[3]);
    render_input(frame, app, Focus::EndInput, chunks[4]);

    let button_style = if app.loading {
        Style::default().add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(app.theme.highlight).add_modifier(Modifier::BOLD)
    };
    frame.render_widget(Paragraph::new(Span::styled(FETCH_BUTTON, button_style)), chunks[6]);

    let info = if app.loading {
        " │ Fetching...".to_string()
    } else if let Some(total) = app.last_fetched {
        format!(" │ {} of {} shown", app.gallery.tile_count(), total)
    } else {
        String::new()
    };
    frame.render_widget(
        Paragraph::new(info).style(Style::default().add_modifier(Modifier::DIM)),
        chunks[7],
    );

    app.layout.start_input = chunks[2];
    app.layout.end_input = chunks[4];
    app.layout.fetch_button = chunks[6];
}

fn render_input(frame: &mut Frame, app: &App, which: Focus, area: Rect) {
    let value = match which {
        Focus::StartInput => &app.start_input,
        Focus::EndInput => &app.end_input,
        Focus::Gallery => return,
    };
    let focused = app.focus == which;

    let (text, style) = if focused {
        (format!("{}_", value), app.theme.input_active)
    } else if value.is_empty() {
        (
            "YYYY-MM-DD".to_string(),
            app.theme.input_inactive.add_modifier(Modifier::DIM),
        )
    } else {
        (value.clone(), app.theme.input_inactive)
    };

    let width = area.width as usize;
    frame.render_widget(
        Paragraph::new(format!(" {:<w$}", text, w = width.saturating_sub(1))).style(style),
        area,
    );
}

/// Render the status bar at the bottom.
///
/// Shows the feed description and context-sensitive controls, or a
/// temporary status message.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    // Check for temporary status message first
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let controls = if app.overlay.is_open() {
        "↑↓:scroll Esc:close"
    } else {
        match app.focus {
            Focus::StartInput | Focus::EndInput => {
                "Type YYYY-MM-DD | Tab:next Enter:fetch Esc:done"
            }
            Focus::Gallery => "f:fetch s/e:dates c:clear ←↑↓→:move Enter:open ?:help q:quit",
        }
    };

    let status = format!(" {} | {}", app.source_description(), controls);
    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the current view.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Date range",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  s / e       Edit start / end date"),
        Line::from("  Tab         Next input"),
        Line::from("  c           Clear both dates"),
        Line::from("  f, Enter    Fetch images"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Gallery",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ←↑↓→ hjkl   Move selection"),
        Line::from("  Home/End    Jump to first/last"),
        Line::from("  Enter       Open detail"),
        Line::from("  Click       Open detail (thumbnail)"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " General",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  Esc         Close detail"),
        Line::from("  q           Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 42u16.min(area.width.saturating_sub(4));
    let help_height = 23u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(ratatui::widgets::Clear, help_area);
    frame.render_widget(paragraph, help_area);
}
