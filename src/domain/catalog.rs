use std::sync::Arc;

use super::{JobRecord, RecordError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid catalog record at index {index}: {source}")]
pub struct InvalidRecord {
    pub index: usize,
    #[source]
    pub source: RecordError,
}

/// Read-only, ordered set of job postings fixed at start-up.
#[derive(Debug, Clone)]
pub struct JobCatalog {
    records: Arc<[JobRecord]>,
}

impl JobCatalog {
    pub fn new(records: Vec<JobRecord>) -> Result<Self, InvalidRecord> {
        for (index, record) in records.iter().enumerate() {
            record
                .validate()
                .map_err(|source| InvalidRecord { index, source })?;
        }

        Ok(Self {
            records: records.into(),
        })
    }

    pub fn records(&self) -> &[JobRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, JobRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
