use crate::app::{action::Action, command::Command, persistence::HistoryWriter};
use crate::domain::catalog::ProcessorCatalog;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Collaborators the runtime hands to commands.
#[derive(Clone)]
pub struct Services {
    pub catalog: Arc<dyn ProcessorCatalog>,
    pub history: HistoryWriter,
}

pub fn handle_command(command: Command, services: &Services, tx: mpsc::Sender<Action>) -> Result<()> {
    match command {
        Command::LoadCatalog => {
            let catalog = services.catalog.clone();
            tokio::spawn(async move {
                let action = match catalog.list().await {
                    Ok(docs) => Action::CatalogLoaded(docs),
                    Err(e) => Action::ErrorOccurred(format!("{e:#}")),
                };
                let _ = tx.send(action).await;
            });
        }
        Command::SaveHistory(history) => services.history.save(history),
    }
    Ok(())
}
