use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

use crate::constant::{
    GCS_DEFAULT_CONTENT_TYPE, GCS_DEFAULT_LOCATION, GCS_LIST_BLOBS_MAX_RESULTS,
    GCS_LIST_BUCKETS_MAX_RESULTS,
};

use super::{
    error::ConfigError,
    util::{non_empty_token, Overrides},
};

pub const GCS_DEFAULT_STORAGE_CLASS_KEY: &str = "GCS_DEFAULT_STORAGE_CLASS";
pub const GCS_DEFAULT_LOCATION_KEY: &str = "GCS_DEFAULT_LOCATION";
pub const GCS_LIST_BUCKETS_MAX_RESULTS_KEY: &str = "GCS_LIST_BUCKETS_MAX_RESULTS";
pub const GCS_LIST_BLOBS_MAX_RESULTS_KEY: &str = "GCS_LIST_BLOBS_MAX_RESULTS";
pub const GCS_DEFAULT_CONTENT_TYPE_KEY: &str = "GCS_DEFAULT_CONTENT_TYPE";

/// Bucket storage classes as named by the Cloud Storage JSON API.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum StorageClass {
    #[default]
    Standard,
    Nearline,
    Coldline,
    Archive,
    MultiRegional,
    Regional,
    DurableReducedAvailability,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GcsConfig {
    pub default_storage_class: StorageClass,
    pub default_location: String,
    pub list_buckets_max_results: u32,
    pub list_blobs_max_results: u32,
    pub default_content_type: String,
}

impl Default for GcsConfig {
    fn default() -> Self {
        Self {
            default_storage_class: StorageClass::default(),
            default_location: GCS_DEFAULT_LOCATION.to_owned(),
            list_buckets_max_results: GCS_LIST_BUCKETS_MAX_RESULTS,
            list_blobs_max_results: GCS_LIST_BLOBS_MAX_RESULTS,
            default_content_type: GCS_DEFAULT_CONTENT_TYPE.to_owned(),
        }
    }
}

impl GcsConfig {
    pub fn from_overrides(overrides: &Overrides) -> Result<Self, ConfigError> {
        let default_storage_class = match overrides.get(GCS_DEFAULT_STORAGE_CLASS_KEY, None)? {
            Some((key, value)) => value.parse::<StorageClass>().map_err(|_| {
                ConfigError::invalid(&key, &value, format!("expected one of {}", storage_classes()))
            })?,
            None => StorageClass::default(),
        };
        let default_location = overrides
            .string(
                GCS_DEFAULT_LOCATION_KEY,
                None,
                GCS_DEFAULT_LOCATION,
                validate_bucket_location,
            )?
            .to_ascii_uppercase();

        Ok(Self {
            default_storage_class,
            default_location,
            list_buckets_max_results: overrides
                .positive(GCS_LIST_BUCKETS_MAX_RESULTS_KEY, GCS_LIST_BUCKETS_MAX_RESULTS)?,
            list_blobs_max_results: overrides
                .positive(GCS_LIST_BLOBS_MAX_RESULTS_KEY, GCS_LIST_BLOBS_MAX_RESULTS)?,
            default_content_type: overrides.string(
                GCS_DEFAULT_CONTENT_TYPE_KEY,
                None,
                GCS_DEFAULT_CONTENT_TYPE,
                validate_content_type,
            )?,
        })
    }
}

fn storage_classes() -> String {
    use strum::IntoEnumIterator;
    StorageClass::iter()
        .map(|class| class.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn validate_bucket_location(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("must not be empty".to_owned());
    }
    if !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err("may only contain letters, digits and hyphens".to_owned());
    }
    Ok(())
}

/// Accepts `type/subtype` with optional `; param=value` suffixes.
pub fn validate_content_type(value: &str) -> Result<(), String> {
    let essence = value.split(';').next().unwrap_or_default();
    non_empty_token(essence)?;
    let is_token = |s: &str| {
        !s.is_empty()
            && s.chars()
                .all(|c| c.is_ascii_alphanumeric() || "!#$&-^_.+".contains(c))
    };
    match essence.split_once('/') {
        Some((kind, subtype)) if is_token(kind) && is_token(subtype) => Ok(()),
        _ => Err("must be a MIME type of the form type/subtype".to_owned()),
    }
}
