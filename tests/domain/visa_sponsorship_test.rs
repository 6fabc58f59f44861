use job_scout::domain::VisaSponsorship;

#[test]
fn given_known_literals_when_parsing_then_maps_to_variants() {
    assert_eq!("yes".parse::<VisaSponsorship>().unwrap(), VisaSponsorship::Yes);
    assert_eq!("no".parse::<VisaSponsorship>().unwrap(), VisaSponsorship::No);
    assert_eq!(
        "unknown".parse::<VisaSponsorship>().unwrap(),
        VisaSponsorship::Unknown
    );
}

#[test]
fn given_other_literal_when_parsing_then_returns_error_naming_value() {
    let err = "maybe".parse::<VisaSponsorship>().unwrap_err();
    assert!(err.to_string().contains("maybe"));
}

#[test]
fn given_uppercase_literal_when_parsing_then_rejected() {
    assert!("YES".parse::<VisaSponsorship>().is_err());
}

#[test]
fn given_variant_when_serialized_then_uses_lowercase_literal() {
    let json = serde_json::to_string(&VisaSponsorship::Unknown).unwrap();
    assert_eq!(json, r#""unknown""#);
}

#[test]
fn given_unexpected_wire_value_when_deserializing_then_fails() {
    let result = serde_json::from_str::<VisaSponsorship>(r#""sometimes""#);
    assert!(result.is_err());
}

#[test]
fn given_variant_when_displayed_then_matches_as_str() {
    assert_eq!(format!("{}", VisaSponsorship::No), VisaSponsorship::No.as_str());
}
