use crate::domain::catalog::ProcessorCatalog;
use crate::domain::models::ProcessorDoc;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

const BUILTIN_PROCESSORS: &str = include_str!("../../assets/processors.json");

pub fn parse_catalog(json: &str) -> Result<Vec<ProcessorDoc>> {
    let docs: Vec<ProcessorDoc> =
        serde_json::from_str(json).context("Failed to parse processor catalog")?;
    Ok(docs)
}

/// Processor documentation compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinCatalog;

#[async_trait]
impl ProcessorCatalog for BuiltinCatalog {
    async fn list(&self) -> Result<Vec<ProcessorDoc>> {
        parse_catalog(BUILTIN_PROCESSORS)
    }

    fn source_path(&self) -> Option<PathBuf> {
        None
    }
}

/// Processor documentation read from a JSON file on every load.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ProcessorCatalog for FileCatalog {
    async fn list(&self) -> Result<Vec<ProcessorDoc>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read catalog {}", self.path.display()))?;
        let docs = parse_catalog(&content)
            .with_context(|| format!("Invalid catalog {}", self.path.display()))?;
        debug!(path = %self.path.display(), count = docs.len(), "catalog loaded");
        Ok(docs)
    }

    fn source_path(&self) -> Option<PathBuf> {
        Some(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ProcessorKind;

    #[tokio::test]
    async fn test_builtin_catalog_parses() {
        let docs = BuiltinCatalog.list().await.unwrap();
        assert!(docs.len() > 5);
        for kind in ProcessorKind::all() {
            assert!(docs.iter().any(|d| d.kind == *kind));
        }
        let grok = docs.iter().find(|d| d.name == "grok").unwrap();
        assert!(grok.blueprint().contains("match => { \"message\""));
    }

    #[tokio::test]
    async fn test_file_catalog_reads_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("processors.json");
        std::fs::write(
            &path,
            r#"[{"name": "uuid", "kind": "filter", "options": [{"name": "Target", "type": "string"}]}]"#,
        )
        .unwrap();

        let catalog = FileCatalog::new(&path);
        let docs = catalog.list().await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].key(), "filter/uuid");
        assert_eq!(catalog.source_path(), Some(path));
    }

    #[tokio::test]
    async fn test_file_catalog_errors_are_contextual() {
        let dir = tempfile::tempdir().unwrap();
        let missing = FileCatalog::new(dir.path().join("missing.json"));
        let err = missing.list().await.unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read catalog"));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{ not json").unwrap();
        let err = FileCatalog::new(&bad).list().await.unwrap_err();
        assert!(format!("{err:#}").contains("Invalid catalog"));
    }
}
