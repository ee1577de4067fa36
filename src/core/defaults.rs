use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::messages::Locale;
use crate::paths;
use crate::utils::io;

/// Root configuration structure for schemaform.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SchemaformConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

/// All configurable defaults that can be overridden via schemaform.json
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Defaults {
    #[serde(default)]
    pub locale: Locale,

    /// Property keys whose default falls back to the git user.name.
    #[serde(default = "default_author_keys")]
    pub author_keys: Vec<String>,

    /// Property keys whose default falls back to the git user.email.
    #[serde(default = "default_email_keys")]
    pub email_keys: Vec<String>,

    /// Property keys treated as directory paths relative to the working directory.
    #[serde(default = "default_path_keys")]
    pub path_keys: Vec<String>,

    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            author_keys: default_author_keys(),
            email_keys: default_email_keys(),
            path_keys: default_path_keys(),
            page_size: default_page_size(),
        }
    }
}

impl Defaults {
    pub fn is_author_key(&self, key: &str) -> bool {
        self.author_keys.iter().any(|k| k == key)
    }

    pub fn is_email_key(&self, key: &str) -> bool {
        self.email_keys.iter().any(|k| k == key)
    }

    pub fn is_path_key(&self, key: &str) -> bool {
        self.path_keys.iter().any(|k| k == key)
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_author_keys() -> Vec<String> {
    vec!["author".to_string()]
}

fn default_email_keys() -> Vec<String> {
    vec!["email".to_string()]
}

fn default_path_keys() -> Vec<String> {
    vec!["dirPath".to_string()]
}

fn default_page_size() -> usize {
    1000
}

// =============================================================================
// Loading functions
// =============================================================================

/// Load defaults, merging file config with built-in defaults.
/// If schemaform.json is missing or invalid, silently returns built-in defaults.
pub fn load_defaults() -> Defaults {
    load_config().defaults
}

/// Load the full schemaform.json config, falling back to defaults on any error.
pub fn load_config() -> SchemaformConfig {
    match paths::schemaform_json() {
        Ok(path) if path.exists() => load_config_from(&path).unwrap_or_else(|err| {
            crate::log_status!("config", "Ignoring {}: {}", path.display(), err);
            SchemaformConfig::default()
        }),
        _ => SchemaformConfig::default(),
    }
}

/// Load config from an explicit file.
pub fn load_config_from(path: &Path) -> crate::Result<SchemaformConfig> {
    let content = io::read_file(path, &format!("read {}", path.display()))?;

    serde_json::from_str(&content)
        .map_err(|e| crate::Error::config_invalid_json(path.display().to_string(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn built_in_defaults_match_conventions() {
        let defaults = Defaults::default();
        assert!(defaults.is_author_key("author"));
        assert!(defaults.is_email_key("email"));
        assert!(defaults.is_path_key("dirPath"));
        assert!(!defaults.is_path_key("author"));
        assert_eq!(defaults.page_size, 1000);
        assert_eq!(defaults.locale, Locale::En);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let mut temp = NamedTempFile::new().unwrap();
        write!(
            temp,
            r#"{{"defaults":{{"locale":"zh","pathKeys":["dirPath","outDir"]}}}}"#
        )
        .unwrap();

        let config = load_config_from(temp.path()).unwrap();
        assert_eq!(config.defaults.locale, Locale::Zh);
        assert!(config.defaults.is_path_key("outDir"));
        assert!(config.defaults.is_author_key("author"));
        assert_eq!(config.defaults.page_size, 1000);
    }

    #[test]
    fn invalid_file_reports_config_error() {
        let mut temp = NamedTempFile::new().unwrap();
        write!(temp, "not json").unwrap();

        let err = load_config_from(temp.path()).unwrap_err();
        assert_eq!(err.code.as_str(), "config.invalid_json");
    }
}
