mod match_service;

pub use match_service::{MatchError, MatchOutcome, MatchService, ProfileCriteria};
