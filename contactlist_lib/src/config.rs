//! Environment-driven configuration for a contact list view.

use contacts_api::DEFAULT_PAGE_SIZE;

use crate::error::ContactListError;
use crate::validation::validate_page_size;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

pub const ENV_BASE_URL: &str = "CONTACTS_API_URL";
pub const ENV_PAGE_SIZE: &str = "CONTACTS_PAGE_SIZE";
pub const ENV_RESPONSE_POLICY: &str = "CONTACTS_RESPONSE_POLICY";

/// Which fetch completions are allowed to update the view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResponsePolicy {
    /// Only the completion of the most recently issued fetch is applied.
    #[default]
    LatestOnly,
    /// Every completion is applied in arrival order, so a slow stale
    /// response can overwrite a newer one.
    LastWriteWins,
}

impl std::str::FromStr for ResponsePolicy {
    type Err = ContactListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "latest-only" | "latest" => Ok(ResponsePolicy::LatestOnly),
            "last-write-wins" | "lww" => Ok(ResponsePolicy::LastWriteWins),
            _ => Err(ContactListError::Config(format!(
                "unknown response policy '{}'. Valid values: latest-only, last-write-wins",
                s
            ))),
        }
    }
}

/// Settings for one list view instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListConfig {
    pub base_url: String,
    /// Fixed page size for the lifetime of the view.
    pub page_size: u32,
    pub response_policy: ResponsePolicy,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            response_policy: ResponsePolicy::default(),
        }
    }
}

impl ListConfig {
    /// Reads the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ContactListError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Unset keys
    /// fall back to defaults; set but unusable values are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ContactListError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(ENV_PAGE_SIZE) {
            let size = raw.trim().parse::<u32>().map_err(|_| {
                ContactListError::Config(format!("{} must be a positive integer", ENV_PAGE_SIZE))
            })?;
            config.page_size = validate_page_size(size)
                .map_err(|e| ContactListError::Config(format!("{}: {}", ENV_PAGE_SIZE, e)))?;
        }

        if let Some(raw) = lookup(ENV_RESPONSE_POLICY) {
            config.response_policy = raw.parse()?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ListConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ListConfig::default());
        assert_eq!(config.page_size, 10);
        assert_eq!(config.response_policy, ResponsePolicy::LatestOnly);
    }

    #[test]
    fn reads_all_keys() {
        let config = ListConfig::from_lookup(lookup_from(&[
            (ENV_BASE_URL, "https://contacts.internal"),
            (ENV_PAGE_SIZE, "25"),
            (ENV_RESPONSE_POLICY, "last-write-wins"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://contacts.internal");
        assert_eq!(config.page_size, 25);
        assert_eq!(config.response_policy, ResponsePolicy::LastWriteWins);
    }

    #[test]
    fn rejects_zero_page_size() {
        let err = ListConfig::from_lookup(lookup_from(&[(ENV_PAGE_SIZE, "0")])).unwrap_err();
        assert!(matches!(err, ContactListError::Config(_)));
    }

    #[test]
    fn rejects_non_numeric_page_size() {
        assert!(ListConfig::from_lookup(lookup_from(&[(ENV_PAGE_SIZE, "ten")])).is_err());
    }

    #[test]
    fn rejects_unknown_policy() {
        assert!(ListConfig::from_lookup(lookup_from(&[(ENV_RESPONSE_POLICY, "random")])).is_err());
    }

    #[test]
    fn blank_base_url_keeps_default() {
        let config = ListConfig::from_lookup(lookup_from(&[(ENV_BASE_URL, "  ")])).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
