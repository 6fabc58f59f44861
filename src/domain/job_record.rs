use serde::{Deserialize, Serialize};
use url::Url;

use super::VisaSponsorship;

/// A single curated job posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub title: String,
    pub company: String,
    pub country: String,
    pub visa_sponsorship: VisaSponsorship,
    pub match_reason: String,
    pub apply_link: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("field `{0}` must not be empty")]
    EmptyField(&'static str),
    #[error("applyLink is not a valid http(s) URL: {0}")]
    InvalidApplyLink(String),
}

impl JobRecord {
    /// Checks the data-integrity rules every catalog entry must satisfy.
    pub fn validate(&self) -> Result<(), RecordError> {
        let required = [
            ("title", &self.title),
            ("company", &self.company),
            ("country", &self.country),
            ("matchReason", &self.match_reason),
            ("source", &self.source),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(RecordError::EmptyField(field));
            }
        }

        match Url::parse(&self.apply_link) {
            Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(()),
            _ => Err(RecordError::InvalidApplyLink(self.apply_link.clone())),
        }
    }
}
