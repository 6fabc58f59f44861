use job_scout::application::services::{MatchError, ProfileCriteria};
use job_scout::domain::Profile;

use crate::helpers::match_service_for;

fn criteria(countries: &[&str], exclude: &[&str]) -> ProfileCriteria {
    ProfileCriteria {
        countries: Some(countries.iter().map(|c| c.to_string()).collect()),
        exclude_countries: Some(exclude.iter().map(|c| c.to_string()).collect()),
    }
}

#[test]
fn given_target_profile_when_searching_then_returns_all_targets_in_catalog_order() {
    let service = match_service_for(&["UK", "Netherlands", "Italy"]);

    let outcome = service
        .search(criteria(
            &["UK", "Netherlands", "Belgium", "Ireland", "Italy"],
            &["USA", "Germany", "France"],
        ))
        .unwrap();

    let countries: Vec<&str> = outcome.jobs.iter().map(|j| j.country.as_str()).collect();
    assert_eq!(countries, vec!["UK", "Netherlands", "Italy"]);
    assert_eq!(outcome.count, 3);
}

#[test]
fn given_country_in_both_lists_when_searching_then_empty_result() {
    let service = match_service_for(&["UK", "UK", "Ireland"]);

    let outcome = service.search(criteria(&["UK"], &["UK"])).unwrap();

    assert!(outcome.jobs.is_empty());
    assert_eq!(outcome.count, 0);
}

#[test]
fn given_empty_allow_list_when_searching_then_empty_regardless_of_exclusions() {
    let service = match_service_for(&["UK", "Ireland"]);

    assert_eq!(service.search(criteria(&[], &[])).unwrap().count, 0);
    assert_eq!(service.search(criteria(&[], &["UK"])).unwrap().count, 0);
}

#[test]
fn given_mixed_catalog_when_matching_then_sound_and_complete() {
    let catalog = ["UK", "USA", "Belgium", "Germany", "UK", "France", "Ireland"];
    let service = match_service_for(&catalog);
    let profile = Profile::new(["UK", "Germany", "Ireland"], ["Germany"]);

    let jobs = service.matches(&profile);

    assert!(jobs.iter().all(|j| profile.accepts(&j.country)));
    let expected: Vec<String> = catalog
        .iter()
        .enumerate()
        .filter(|(_, c)| profile.accepts(c))
        .map(|(i, _)| format!("Job {}", i))
        .collect();
    let titles: Vec<String> = jobs.iter().map(|j| j.title.clone()).collect();
    assert_eq!(titles, expected);
}

#[test]
fn given_same_profile_when_searching_twice_then_results_identical() {
    let service = match_service_for(&["UK", "Belgium", "Italy", "UK"]);

    let first = service.search(criteria(&["UK", "Italy"], &[])).unwrap();
    let second = service.search(criteria(&["UK", "Italy"], &[])).unwrap();

    assert_eq!(first, second);
}

#[test]
fn given_missing_countries_when_searching_then_invalid_input() {
    let service = match_service_for(&["UK"]);

    let result = service.search(ProfileCriteria {
        countries: None,
        exclude_countries: Some(vec![]),
    });

    assert!(matches!(result, Err(MatchError::InvalidInput(msg)) if msg.contains("countries")));
}

#[test]
fn given_missing_exclusions_when_searching_then_invalid_input() {
    let service = match_service_for(&["UK"]);

    let result = service.search(ProfileCriteria {
        countries: Some(vec!["UK".to_string()]),
        exclude_countries: None,
    });

    assert!(matches!(result, Err(MatchError::InvalidInput(msg)) if msg.contains("excludeCountries")));
}

#[test]
fn given_service_when_asking_catalog_size_then_reports_record_count() {
    assert_eq!(match_service_for(&["UK", "Italy"]).catalog_size(), 2);
}
