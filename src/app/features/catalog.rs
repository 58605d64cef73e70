use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppState, ErrorSeverity, ErrorState},
};
use tracing::{error, info};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::ReloadCatalog | Action::CatalogChanged => {
            if matches!(action, Action::CatalogChanged) {
                state.status_message = Some("Catalog changed on disk, reloading".to_string());
            }
            if state.is_loading_catalog {
                return UpdateResult::Handled(None);
            }
            state.is_loading_catalog = true;
            state.active_tasks.push("catalog".to_string());
            UpdateResult::Handled(Some(Command::LoadCatalog))
        }
        Action::CatalogLoaded(docs) => {
            info!(count = docs.len(), "processor catalog ready");
            finish_loading(state);
            state.catalog = Some(docs.clone());
            if let Some(kind) = state.pending_processor_palette.take() {
                state
                    .pending_actions
                    .push_back(Action::OpenProcessorPalette(kind));
            }
            UpdateResult::Handled(None)
        }
        Action::ErrorOccurred(message) => {
            error!("{message}");
            finish_loading(state);
            state.pending_processor_palette = None;
            state.last_error = Some(ErrorState::new(message.clone(), ErrorSeverity::Error));
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

fn finish_loading(state: &mut AppState) {
    state.is_loading_catalog = false;
    state.active_tasks.retain(|t| t != "catalog");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{ProcessorDoc, ProcessorKind};

    fn doc(name: &str) -> ProcessorDoc {
        ProcessorDoc {
            name: name.to_string(),
            kind: ProcessorKind::Output,
            doc: String::new(),
            doc_short: String::new(),
            options: vec![],
        }
    }

    #[test]
    fn test_loaded_catalog_reopens_pending_palette() {
        let mut state = AppState::default();
        state.is_loading_catalog = true;
        state.pending_processor_palette = Some(Some(ProcessorKind::Output));

        update(&mut state, &Action::CatalogLoaded(vec![doc("stdout")]));
        assert!(!state.is_loading_catalog);
        assert_eq!(state.catalog.as_ref().map(Vec::len), Some(1));
        assert_eq!(state.pending_processor_palette, None);
        assert_eq!(
            state.pending_actions.pop_front(),
            Some(Action::OpenProcessorPalette(Some(ProcessorKind::Output)))
        );
    }

    #[test]
    fn test_reload_is_not_duplicated() {
        let mut state = AppState::default();
        assert!(matches!(
            update(&mut state, &Action::ReloadCatalog),
            UpdateResult::Handled(Some(Command::LoadCatalog))
        ));
        assert!(matches!(
            update(&mut state, &Action::CatalogChanged),
            UpdateResult::Handled(None)
        ));
        assert_eq!(state.active_tasks, vec!["catalog".to_string()]);
    }

    #[test]
    fn test_error_drops_pending_request() {
        let mut state = AppState::default();
        state.is_loading_catalog = true;
        state.pending_processor_palette = Some(None);
        update(
            &mut state,
            &Action::ErrorOccurred("Invalid catalog /tmp/x.json".to_string()),
        );
        assert_eq!(state.pending_processor_palette, None);
        let err = state.last_error.as_ref().unwrap();
        assert_eq!(err.severity, ErrorSeverity::Error);
        assert!(!err.suggestions.is_empty());
    }
}
