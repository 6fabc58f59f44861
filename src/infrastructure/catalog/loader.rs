use crate::application::ports::{CatalogError, CatalogSource};
use crate::domain::JobCatalog;

/// Loads and validates the catalog. Any error here should abort start-up.
pub async fn load_catalog(source: &dyn CatalogSource) -> Result<JobCatalog, CatalogError> {
    let records = source.load().await.inspect_err(|e| {
        tracing::error!(source = %source.describe(), error = %e, "Failed to load job catalog");
    })?;

    let catalog = JobCatalog::new(records)?;

    tracing::info!(
        source = %source.describe(),
        records = catalog.len(),
        "Job catalog loaded"
    );

    Ok(catalog)
}
