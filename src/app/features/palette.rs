use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    command_palette::processor_items,
    persistence,
    state::{AppMode, AppState, PaletteEffects, COMMANDS_TITLE, PROCESSORS_TITLE},
};
use crate::domain::models::ProcessorKind;
use crate::palette::{Item, Transition};
use tracing::debug;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::OpenPalette => {
            open(state, None, COMMANDS_TITLE);
            UpdateResult::Handled(None)
        }
        Action::OpenProcessorPalette(kind) => UpdateResult::Handled(open_processors(state, *kind)),
        Action::OpenSectionProcessors => {
            let kind = state.playground.active.kind();
            UpdateResult::Handled(open_processors(state, Some(kind)))
        }
        Action::Palette(input) => {
            let transition = state.palette.handle(*input);
            if transition.closed() {
                finish(state);
            }
            match transition {
                Transition::Selected(_) => {
                    let history = persistence::compact(state.history());
                    state.palette.context_mut().selected = Some(history.clone());
                    UpdateResult::Handled(Some(Command::SaveHistory(history)))
                }
                _ => UpdateResult::Handled(None),
            }
        }
        _ => UpdateResult::NotHandled,
    }
}

fn open_processors(state: &mut AppState, kind: Option<ProcessorKind>) -> Option<Command> {
    if let Some(docs) = &state.catalog {
        let items = processor_items(docs, kind);
        open(state, Some(items), PROCESSORS_TITLE);
        return None;
    }

    // Opened once the catalog arrives
    state.pending_processor_palette = Some(kind);
    if state.is_loading_catalog {
        return None;
    }
    state.is_loading_catalog = true;
    state.active_tasks.push("catalog".to_string());
    Some(Command::LoadCatalog)
}

fn open(state: &mut AppState, items: Option<Vec<Item<PaletteEffects>>>, title: &'static str) {
    let mut context = state.palette.take_context();
    context.data = PaletteEffects::default();

    let opened = match items {
        Some(items) => state.palette.show_with(items, "", context),
        None => state.palette.show("", context),
    };

    if opened {
        if state.mode != AppMode::Palette {
            state.return_section = Some(state.playground.active);
        }
        state.mode = AppMode::Palette;
        state.palette_title = title;
        state.status_message = None;
    } else {
        debug!(title, "nothing to show");
        state.status_message = Some("Nothing to show".to_string());
    }
}

/// Leaves palette mode, restoring focus before any requested actions run.
fn finish(state: &mut AppState) {
    state.mode = AppMode::Editing;
    if let Some(section) = state.return_section.take() {
        state.playground.active = section;
    }

    let effects = &mut state.palette.context_mut().data;
    effects.preview = None;
    let queued = std::mem::take(&mut effects.queued);
    state.pending_actions.extend(queued);
}
