use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Whether an employer is known to sponsor work visas for a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisaSponsorship {
    Yes,
    No,
    Unknown,
}

impl VisaSponsorship {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisaSponsorship::Yes => "yes",
            VisaSponsorship::No => "no",
            VisaSponsorship::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid visa sponsorship value: {0}. Expected: yes, no, or unknown")]
pub struct ParseVisaSponsorshipError(pub String);

impl FromStr for VisaSponsorship {
    type Err = ParseVisaSponsorshipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(VisaSponsorship::Yes),
            "no" => Ok(VisaSponsorship::No),
            "unknown" => Ok(VisaSponsorship::Unknown),
            other => Err(ParseVisaSponsorshipError(other.to_string())),
        }
    }
}

impl fmt::Display for VisaSponsorship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
