use async_trait::async_trait;

use crate::application::ports::{CatalogError, CatalogSource};
use crate::domain::JobRecord;

const CURATED_JOBS: &str = include_str!("../../../fixtures/curated_jobs.json");

/// The curated catalog compiled into the binary.
pub struct EmbeddedCatalogSource;

#[async_trait]
impl CatalogSource for EmbeddedCatalogSource {
    async fn load(&self) -> Result<Vec<JobRecord>, CatalogError> {
        Ok(serde_json::from_str(CURATED_JOBS)?)
    }

    fn describe(&self) -> String {
        "embedded curated catalog".to_string()
    }
}
