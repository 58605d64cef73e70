use crate::domain::models::ProcessorDoc;
use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProcessorCatalog: Send + Sync {
    // Every documented processor, in display order
    async fn list(&self) -> Result<Vec<ProcessorDoc>>;

    // File backing the catalog, if any; watched for changes
    fn source_path(&self) -> Option<PathBuf>;
}
