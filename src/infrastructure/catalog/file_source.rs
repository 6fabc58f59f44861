use std::path::PathBuf;

use async_trait::async_trait;

use crate::application::ports::{CatalogError, CatalogSource};
use crate::domain::JobRecord;

/// Reads a JSON array of job records from disk.
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn load(&self) -> Result<Vec<JobRecord>, CatalogError> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
