use crate::palette::ItemId;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

pub const HISTORY_LIMIT: usize = 50;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SelectionHistory {
    pub selected: Vec<String>,
}

#[must_use]
pub fn get_history_path() -> Option<PathBuf> {
    super::config::config_dir().map(|dir| dir.join("history.toml"))
}

/// Most recent first, without duplicates, at most [`HISTORY_LIMIT`] entries.
#[must_use]
pub fn compact(history: &[ItemId]) -> Vec<ItemId> {
    let mut out: Vec<ItemId> = Vec::new();
    for id in history {
        if !out.contains(id) {
            out.push(id.clone());
        }
        if out.len() == HISTORY_LIMIT {
            break;
        }
    }
    out
}

/// Missing or unreadable history starts empty.
pub fn load_history(path: &Path) -> Vec<ItemId> {
    if !path.exists() {
        return Vec::new();
    }
    let parsed = std::fs::read_to_string(path)
        .map_err(anyhow::Error::from)
        .and_then(|content| Ok(toml::from_str::<SelectionHistory>(&content)?));
    match parsed {
        Ok(history) => {
            let ids: Vec<ItemId> = history.selected.into_iter().map(ItemId).collect();
            compact(&ids)
        }
        Err(e) => {
            warn!(path = %path.display(), "ignoring history: {e:#}");
            Vec::new()
        }
    }
}

pub fn save_history(path: &Path, history: &[ItemId]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let history = SelectionHistory {
        selected: compact(history).into_iter().map(|id| id.0).collect(),
    };
    let content = toml::to_string(&history).context("Failed to encode history")?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, content)
        .with_context(|| format!("Failed to write {}", tmp.display()))?;
    std::fs::rename(&tmp, path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;
    Ok(())
}

enum HistoryRequest {
    Save(Vec<ItemId>),
    Flush(oneshot::Sender<()>),
}

/// Handle to the task that owns the history file.
///
/// Saves are written one at a time in the order they were requested.
#[derive(Clone)]
pub struct HistoryWriter {
    tx: Option<mpsc::UnboundedSender<HistoryRequest>>,
}

impl HistoryWriter {
    /// Starts the writer task. Without a path, saves are dropped.
    pub fn spawn(path: Option<PathBuf>) -> Self {
        let Some(path) = path else {
            return Self { tx: None };
        };

        let (tx, mut rx) = mpsc::unbounded_channel();
        tokio::spawn(async move {
            while let Some(request) = rx.recv().await {
                match request {
                    HistoryRequest::Save(history) => {
                        let path = path.clone();
                        let written =
                            tokio::task::spawn_blocking(move || save_history(&path, &history))
                                .await;
                        match written {
                            Ok(Ok(())) => {}
                            Ok(Err(e)) => warn!("failed to save history: {e:#}"),
                            Err(e) => warn!("history write task failed: {e}"),
                        }
                    }
                    HistoryRequest::Flush(done) => {
                        let _ = done.send(());
                    }
                }
            }
        });
        Self { tx: Some(tx) }
    }

    pub fn save(&self, history: Vec<ItemId>) {
        match &self.tx {
            Some(tx) => {
                if tx.send(HistoryRequest::Save(history)).is_err() {
                    warn!("history writer stopped, selection not persisted");
                }
            }
            None => debug!("no history path, selection not persisted"),
        }
    }

    /// Waits until every save requested so far is on disk.
    pub async fn flush(&self) {
        let Some(tx) = &self.tx else {
            return;
        };
        let (done, wait) = oneshot::channel();
        if tx.send(HistoryRequest::Flush(done)).is_ok() {
            let _ = wait.await;
        }
    }
}
