use crate::app::{
    action::{Action, UpdateResult},
    state::AppState,
};
use tracing::info;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::FocusSection(section) => {
            state.playground.active = *section;
        }
        Action::NextSection => {
            state.playground.active = state.playground.active.next();
        }
        Action::PrevSection => {
            state.playground.active = state.playground.active.prev();
        }
        Action::EditorInput(key) => {
            state.playground.active_editor_mut().input(*key);
        }
        Action::InsertSnippet(key, text) => {
            let editor = state.playground.active_editor_mut();
            if editor.cursor().1 > 0 {
                editor.insert_newline();
            }
            editor.insert_str(text);
            info!(processor = %key, section = state.playground.active.label(), "inserted blueprint");
            state.status_message = Some(format!("Inserted {key}"));
        }
        Action::ClearSection => {
            let section = state.playground.active;
            state.playground.clear(section);
            state.status_message = Some(format!("Cleared {}", section.label()));
        }
        _ => return UpdateResult::NotHandled,
    }
    UpdateResult::Handled(None)
}
