use std::sync::Arc;

use crate::domain::{JobCatalog, JobRecord, Profile};

/// Country criteria exactly as a caller submitted them.
///
/// Both lists are required; an absent list is malformed input, an empty one is not.
#[derive(Debug, Clone, Default)]
pub struct ProfileCriteria {
    pub countries: Option<Vec<String>>,
    pub exclude_countries: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    pub jobs: Vec<JobRecord>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub struct MatchService {
    catalog: Arc<JobCatalog>,
}

impl MatchService {
    pub fn new(catalog: Arc<JobCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog_size(&self) -> usize {
        self.catalog.len()
    }

    /// Returns the catalog entries the profile accepts, in catalog order.
    pub fn matches(&self, profile: &Profile) -> Vec<JobRecord> {
        self.catalog
            .iter()
            .filter(|job| profile.accepts(&job.country))
            .cloned()
            .collect()
    }

    pub fn search(&self, criteria: ProfileCriteria) -> Result<MatchOutcome, MatchError> {
        let countries = criteria
            .countries
            .ok_or_else(|| MatchError::InvalidInput("profile.countries is missing".to_string()))?;
        let exclude_countries = criteria.exclude_countries.ok_or_else(|| {
            MatchError::InvalidInput("profile.excludeCountries is missing".to_string())
        })?;

        let profile = Profile::new(countries, exclude_countries);
        let jobs = self.matches(&profile);

        tracing::debug!(
            countries = profile.countries().len(),
            excluded = profile.exclude_countries().len(),
            matched = jobs.len(),
            "Matched catalog against profile"
        );

        let count = jobs.len();
        Ok(MatchOutcome { jobs, count })
    }
}
