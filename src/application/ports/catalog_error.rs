use crate::domain::InvalidRecord;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed catalog data: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    InvalidRecord(#[from] InvalidRecord),
}
