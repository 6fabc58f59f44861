use job_scout::domain::Profile;

#[test]
fn given_included_country_when_checking_then_accepted() {
    let profile = Profile::new(["UK", "Italy"], Vec::<String>::new());
    assert!(profile.accepts("UK"));
    assert!(profile.accepts("Italy"));
}

#[test]
fn given_country_not_listed_when_checking_then_rejected() {
    let profile = Profile::new(["UK"], ["USA"]);
    assert!(!profile.accepts("Belgium"));
}

#[test]
fn given_country_in_both_sets_when_checking_then_exclusion_wins() {
    let profile = Profile::new(["UK"], ["UK"]);
    assert!(!profile.accepts("UK"));
}

#[test]
fn given_empty_allow_list_when_checking_then_nothing_accepted() {
    let profile = Profile::new(Vec::<String>::new(), Vec::<String>::new());
    assert!(!profile.accepts("UK"));
}

#[test]
fn given_duplicate_countries_when_building_then_collapsed() {
    let profile = Profile::new(["UK", "UK", "Ireland"], ["USA", "USA"]);
    assert_eq!(profile.countries().len(), 2);
    assert_eq!(profile.exclude_countries().len(), 1);
}

#[test]
fn given_different_case_when_checking_then_match_is_exact() {
    let profile = Profile::new(["UK"], Vec::<String>::new());
    assert!(!profile.accepts("uk"));
}
