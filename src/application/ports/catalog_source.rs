use async_trait::async_trait;

use crate::domain::JobRecord;

use super::CatalogError;

/// Supplies the raw job postings the catalog is built from at start-up.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<Vec<JobRecord>, CatalogError>;

    /// Human-readable origin, used in start-up logs.
    fn describe(&self) -> String;
}
