use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Position;

use crate::app::{App, Focus};
use crate::ui::detail::{OverlayHit, OverlayLayout};
use crate::ui::gallery::GridLayout;

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Ignore key releases on platforms that report them
    if key.kind == KeyEventKind::Release {
        return;
    }

    // Escape closes the overlay from anywhere
    if key.code == KeyCode::Esc {
        app.cancel();
        return;
    }

    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    // If the overlay is open, only scrolling and closing apply
    if app.overlay.is_open() {
        match key.code {
            KeyCode::Char('q') | KeyCode::Backspace => app.overlay.close(),
            KeyCode::Up | KeyCode::Char('k') => app.overlay.scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') => app.overlay.scroll_down(1),
            KeyCode::PageUp => app.overlay.scroll_up(10),
            KeyCode::PageDown => app.overlay.scroll_down(10),
            _ => {}
        }
        return;
    }

    // If a date input is focused, handle text input
    if app.focus != Focus::Gallery {
        handle_input_key(app, key);
        return;
    }

    let columns = app.columns() as isize;
    match key.code {
        // Quit
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),

        // Trigger
        KeyCode::Char('f') => {
            app.trigger_fetch();
        }

        // Date inputs
        KeyCode::Char('s') => app.focus = Focus::StartInput,
        KeyCode::Char('e') => app.focus = Focus::EndInput,
        KeyCode::Tab => app.focus = app.focus.next(),
        KeyCode::Char('c') => {
            app.clear_bounds();
            app.set_status_message("Date range cleared".to_string());
        }

        // Navigation
        KeyCode::Left | KeyCode::Char('h') => app.move_selection(-1),
        KeyCode::Right | KeyCode::Char('l') => app.move_selection(1),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-columns),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(columns),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),

        // Open the selected tile
        KeyCode::Enter => app.activate_selected(),

        // Help
        KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }
}

/// Handle key input while a date input is focused
fn handle_input_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // Submit: fetch with the current bounds
        KeyCode::Enter => {
            app.focus = Focus::Gallery;
            app.trigger_fetch();
        }

        KeyCode::Tab => app.focus = app.focus.next(),

        KeyCode::Backspace => {
            if let Some(input) = app.focused_input() {
                input.pop();
            }
        }

        // Clear the field
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(input) = app.focused_input() {
                input.clear();
            }
        }

        // Date characters only; anything longer than a timestamp is ignored
        KeyCode::Char(c) if c.is_ascii_digit() || matches!(c, '-' | ':' | 'T' | ' ') => {
            if let Some(input) = app.focused_input() {
                if input.len() < 19 {
                    input.push(c);
                }
            }
        }

        _ => {}
    }
}

/// Handle mouse events
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    // While the overlay is open it captures the mouse
    if app.overlay.is_open() {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let layout = OverlayLayout::for_area(app.layout.screen);
                match layout.hit_test(mouse.column, mouse.row) {
                    OverlayHit::CloseControl | OverlayHit::Backdrop => app.overlay.close(),
                    OverlayHit::Panel => {}
                }
            }
            MouseEventKind::ScrollUp => app.overlay.scroll_up(1),
            MouseEventKind::ScrollDown => app.overlay.scroll_down(1),
            _ => {}
        }
        return;
    }

    let columns = app.columns() as isize;
    match mouse.kind {
        // Scroll wheel moves a row at a time
        MouseEventKind::ScrollUp => app.move_selection(-columns),
        MouseEventKind::ScrollDown => app.move_selection(columns),

        MouseEventKind::Down(MouseButton::Left) => {
            let pos = Position::new(mouse.column, mouse.row);

            // Header controls
            if app.layout.start_input.contains(pos) {
                app.focus = Focus::StartInput;
                return;
            }
            if app.layout.end_input.contains(pos) {
                app.focus = Focus::EndInput;
                return;
            }
            if app.layout.fetch_button.contains(pos) {
                app.focus = Focus::Gallery;
                app.trigger_fetch();
                return;
            }

            // Gallery tiles
            app.focus = Focus::Gallery;
            let grid = GridLayout::new(app.layout.gallery, app.tile_width, app.tile_height);
            if let Some(hit) =
                grid.hit_test(mouse.column, mouse.row, app.scroll_row, app.gallery.tile_count())
            {
                app.click_tile(hit);
            }
        }

        _ => {}
    }
}
