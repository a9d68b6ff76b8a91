use serde::Serialize;

use crate::constant::{LOCATION, PROJECT_ID};

use super::{error::ConfigError, util::Overrides};

pub const PROJECT_ID_KEY: &str = "PROJECT_ID";
pub const PROJECT_ID_ALIAS: &str = "GOOGLE_CLOUD_PROJECT";
pub const LOCATION_KEY: &str = "LOCATION";
pub const LOCATION_ALIAS: &str = "GOOGLE_CLOUD_LOCATION";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectConfig {
    pub project_id: String,
    pub location: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            project_id: PROJECT_ID.to_owned(),
            location: LOCATION.to_owned(),
        }
    }
}

impl ProjectConfig {
    pub fn from_overrides(overrides: &Overrides) -> Result<Self, ConfigError> {
        Ok(Self {
            project_id: overrides.string(
                PROJECT_ID_KEY,
                Some(PROJECT_ID_ALIAS),
                PROJECT_ID,
                validate_project_id,
            )?,
            location: overrides.string(
                LOCATION_KEY,
                Some(LOCATION_ALIAS),
                LOCATION,
                validate_location,
            )?,
        })
    }

    /// True while the shipped placeholder project id is still in place.
    pub fn is_placeholder(&self) -> bool {
        self.project_id == PROJECT_ID
    }
}

// https://cloud.google.com/resource-manager/docs/creating-managing-projects
pub fn validate_project_id(value: &str) -> Result<(), String> {
    if !(6..=30).contains(&value.len()) {
        return Err("must be 6 to 30 characters long".to_owned());
    }
    if !value.starts_with(|c: char| c.is_ascii_lowercase()) {
        return Err("must start with a lowercase letter".to_owned());
    }
    if value.ends_with('-') {
        return Err("must not end with a hyphen".to_owned());
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err("may only contain lowercase letters, digits and hyphens".to_owned());
    }
    Ok(())
}

pub fn validate_location(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("must not be empty".to_owned());
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err("may only contain lowercase letters, digits and hyphens".to_owned());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("proj-id", true)]
    #[case("my-project-123456", true)]
    #[case("abcdef", true)]
    #[case("short", false)]
    #[case("1project", false)]
    #[case("project-", false)]
    #[case("My-Project", false)]
    #[case("project_id", false)]
    #[case("a-very-long-project-identifier-x", false)]
    fn test_validate_project_id(#[case] input: &str, #[case] valid: bool) {
        assert_eq!(validate_project_id(input).is_ok(), valid, "{input}");
    }

    #[rstest]
    #[case("europe-west3", true)]
    #[case("us-central1", true)]
    #[case("global", true)]
    #[case("Europe-West3", false)]
    #[case("europe west3", false)]
    fn test_validate_location(#[case] input: &str, #[case] valid: bool) {
        assert_eq!(validate_location(input).is_ok(), valid, "{input}");
    }

    #[test]
    fn test_placeholder_detection() {
        assert!(ProjectConfig::default().is_placeholder());
        let overrides = Overrides::from_lookup(|key| {
            (key == PROJECT_ID_ALIAS).then(|| "acme-rag-prod".to_owned())
        });
        let config = ProjectConfig::from_overrides(&overrides).unwrap();
        assert_eq!(config.project_id, "acme-rag-prod");
        assert!(!config.is_placeholder());
    }
}
