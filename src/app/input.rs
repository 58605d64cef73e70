use crate::app::{
    action::Action,
    state::{AppMode, AppState},
    ui,
};
use crate::components::modals::palette_layout;
use crate::palette::PaletteInput;
use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Rect, Size};

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);

    match event {
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }

            // The error modal swallows input until dismissed
            if app_state.last_error.is_some() {
                return match app_state.keymap.get_action(key, AppMode::Editing) {
                    Some(Action::Quit) => Some(Action::Quit),
                    _ if matches!(key.code, KeyCode::Esc | KeyCode::Enter) => {
                        Some(Action::CancelMode)
                    }
                    _ => None,
                };
            }

            match app_state.mode {
                AppMode::Editing => app_state
                    .keymap
                    .get_action(key, AppMode::Editing)
                    .or(Some(Action::EditorInput(key))),
                AppMode::Palette => app_state.keymap.get_action(key, AppMode::Palette),
            }
        }
        Event::Mouse(mouse) => {
            if app_state.last_error.is_some() {
                return None;
            }
            match app_state.mode {
                AppMode::Editing => map_editor_mouse(mouse, area),
                AppMode::Palette => map_palette_mouse(mouse, app_state, area),
            }
        }
        _ => None,
    }
}

fn map_editor_mouse(mouse: MouseEvent, area: Rect) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => ui::get_layout(area)
            .section_at(mouse.column, mouse.row)
            .map(Action::FocusSection),
        _ => None,
    }
}

fn map_palette_mouse(mouse: MouseEvent, app_state: &AppState<'_>, area: Rect) -> Option<Action> {
    let layout = palette_layout(area, &app_state.palette_config);
    let input = match mouse.kind {
        MouseEventKind::ScrollUp => PaletteInput::Up,
        MouseEventKind::ScrollDown => PaletteInput::Down,
        MouseEventKind::Down(MouseButton::Left) => {
            if !layout.contains(mouse.column, mouse.row) {
                PaletteInput::Escape
            } else {
                PaletteInput::MouseDown(layout.list_row(mouse.column, mouse.row)?)
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            PaletteInput::Click(layout.list_row(mouse.column, mouse.row)?)
        }
        _ => return None,
    };
    Some(Action::Palette(input))
}
