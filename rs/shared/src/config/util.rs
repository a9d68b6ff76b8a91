use std::env::{var, VarError};
use std::str::FromStr;

use super::error::ConfigError;

pub fn get_env_var(key: &str) -> Result<String, ConfigError> {
    var(key).map_err(|e| ConfigError::EnvVarError(e, key.to_owned()))
}

/// Reads an optional variable from the process environment.
/// Unset is `Ok(None)`, a non-unicode value is an error.
pub fn get_optional_env_var(key: &str) -> Result<Option<String>, ConfigError> {
    match get_env_var(key) {
        Ok(value) => Ok(Some(value)),
        Err(ConfigError::EnvVarError(VarError::NotPresent, _)) => Ok(None),
        Err(e) => Err(e),
    }
}

type Lookup<'a> = dyn Fn(&str) -> Result<Option<String>, ConfigError> + 'a;

/// Source of override values keyed by environment variable name.
pub struct Overrides<'a> {
    lookup: Box<Lookup<'a>>,
}

impl Overrides<'static> {
    pub fn from_env() -> Self {
        Self {
            lookup: Box::new(get_optional_env_var),
        }
    }
}

impl<'a> Overrides<'a> {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + 'a,
    {
        Self {
            lookup: Box::new(move |key| Ok(lookup(key))),
        }
    }

    /// Returns the trimmed override for `key`, trying `alias` when `key` is unset.
    /// Blank values count as unset.
    pub fn get(
        &self,
        key: &str,
        alias: Option<&str>,
    ) -> Result<Option<(String, String)>, ConfigError> {
        for candidate in std::iter::once(key).chain(alias) {
            if let Some(value) = (self.lookup)(candidate)? {
                let value = value.trim();
                if !value.is_empty() {
                    return Ok(Some((candidate.to_owned(), value.to_owned())));
                }
            }
        }
        Ok(None)
    }

    /// Overrides a string value after passing it through `validate`.
    pub fn string<V>(
        &self,
        key: &str,
        alias: Option<&str>,
        default: &str,
        validate: V,
    ) -> Result<String, ConfigError>
    where
        V: Fn(&str) -> Result<(), String>,
    {
        match self.get(key, alias)? {
            Some((key, value)) => {
                validate(&value).map_err(|reason| ConfigError::invalid(&key, &value, reason))?;
                Ok(value)
            }
            None => Ok(default.to_owned()),
        }
    }

    /// Overrides any value implementing `FromStr`.
    pub fn parse<T>(&self, key: &str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(key, None)? {
            Some((key, value)) => value
                .parse::<T>()
                .map_err(|e| ConfigError::invalid(&key, &value, e.to_string())),
            None => Ok(default),
        }
    }

    /// Overrides a count that must be strictly positive.
    pub fn positive(&self, key: &str, default: u32) -> Result<u32, ConfigError> {
        let Some((key, value)) = self.get(key, None)? else {
            return Ok(default);
        };
        let parsed = value
            .parse::<i64>()
            .map_err(|e| ConfigError::invalid(&key, &value, format!("not an integer: {e}")))?;
        if parsed <= 0 {
            return Err(ConfigError::invalid(&key, &value, "must be greater than 0"));
        }
        u32::try_from(parsed).map_err(|_| {
            ConfigError::invalid(&key, &value, format!("must be at most {}", u32::MAX))
        })
    }

    /// Overrides a float that must lie within `[min, max]`.
    pub fn bounded(&self, key: &str, default: f64, min: f64, max: f64) -> Result<f64, ConfigError> {
        let Some((key, value)) = self.get(key, None)? else {
            return Ok(default);
        };
        let parsed = value
            .parse::<f64>()
            .map_err(|e| ConfigError::invalid(&key, &value, format!("not a number: {e}")))?;
        if !parsed.is_finite() || parsed < min || parsed > max {
            return Err(ConfigError::invalid(
                &key,
                &value,
                format!("must be within [{min}, {max}]"),
            ));
        }
        // "-0" parses to negative zero
        Ok(parsed + 0.0)
    }
}

pub fn non_empty_token(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("must not be empty".to_owned());
    }
    if value.chars().any(char::is_whitespace) {
        return Err("must not contain whitespace".to_owned());
    }
    Ok(())
}
