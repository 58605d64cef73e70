use crate::app::{
    action::{Action, UpdateResult},
    state::AppState,
};
use crate::theme::Theme;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            UpdateResult::Handled(None)
        }
        Action::Resize(..) => UpdateResult::Handled(None),
        Action::Quit => {
            state.should_quit = true;
            UpdateResult::Handled(None)
        }
        Action::CancelMode => {
            state.last_error = None;
            state.status_message = None;
            UpdateResult::Handled(None)
        }
        Action::SwitchTheme(palette) => {
            state.palette_type = *palette;
            state.theme = Theme::from_palette_type(*palette);
            state.status_message = Some(format!("Theme: {}", palette.label()));
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}
