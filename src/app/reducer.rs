use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};

type Feature = fn(&mut AppState, &Action) -> UpdateResult;

const FEATURES: [Feature; 4] = [
    features::palette::update,
    features::editor::update,
    features::catalog::update,
    features::ui::update,
];

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    for feature in FEATURES {
        if let UpdateResult::Handled(command) = feature(state, &action) {
            return command;
        }
    }
    tracing::debug!(?action, "unhandled action");
    None
}

/// Applies `action` and every follow-up action it queues.
pub fn dispatch(state: &mut AppState, action: Action) -> Vec<Command> {
    let mut commands = Vec::new();
    let mut next = Some(action);
    while let Some(action) = next {
        commands.extend(update(state, action));
        next = state.pending_actions.pop_front();
    }
    commands
}
