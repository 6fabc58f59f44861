use std::collections::HashSet;

/// Country constraints a caller matches the catalog against.
///
/// A country listed in both sets is excluded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    countries: HashSet<String>,
    exclude_countries: HashSet<String>,
}

impl Profile {
    pub fn new<C, E>(countries: C, exclude_countries: E) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            countries: countries.into_iter().map(Into::into).collect(),
            exclude_countries: exclude_countries.into_iter().map(Into::into).collect(),
        }
    }

    pub fn accepts(&self, country: &str) -> bool {
        self.countries.contains(country) && !self.exclude_countries.contains(country)
    }

    pub fn countries(&self) -> &HashSet<String> {
        &self.countries
    }

    pub fn exclude_countries(&self) -> &HashSet<String> {
        &self.exclude_countries
    }
}
