//! Effective default and validator for input-style properties.

use regex::Regex;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::form::FormEnv;
use crate::question::Validator;
use crate::schema::{value_text, PropertyDef};

#[derive(Debug, Clone)]
pub struct Resolved {
    pub default: Option<Value>,
    pub validator: Validator,
}

/// Rules are applied in order and a later validator replaces an earlier one:
/// identity fallback, directory path, then `regExp`.
pub fn resolve(key: &str, def: &PropertyDef, env: &FormEnv) -> Result<Resolved> {
    let mut default = def.default.clone();
    let mut validator = Validator::AcceptAll;
    let invalid_message = def
        .invalidate
        .clone()
        .unwrap_or_else(|| env.defaults.locale.invalid_input().to_string());

    if default.is_none() {
        default = identity_default(key, env).map(Value::String);
    }

    if env.defaults.is_path_key(key) {
        let relative = default.as_ref().map(value_text).unwrap_or_default();
        let resolved = env.files.resolve(&relative);
        default = Some(Value::String(resolved.to_string_lossy().into_owned()));
        validator = Validator::PathExists {
            files: env.files.clone(),
            message: invalid_message.clone(),
        };
    }

    if let Some(pattern) = def.reg_exp.as_deref() {
        let regex = Regex::new(pattern).map_err(|e| Error::schema_invalid_pattern(key, pattern, &e))?;
        validator = Validator::Pattern {
            regex,
            message: invalid_message,
        };
    }

    Ok(Resolved { default, validator })
}

/// Git identity for author/email keys. Only consulted when the schema has
/// no default of its own.
fn identity_default(key: &str, env: &FormEnv) -> Option<String> {
    let defaults = &env.defaults;
    if defaults.is_author_key(key) {
        env.identity.lookup_identity().author
    } else if defaults.is_email_key(key) {
        env.identity.lookup_identity().email
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::Defaults;
    use crate::identity::{Identity, StaticIdentity};
    use crate::local_files::LocalFs;
    use serde_json::json;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn env_with(identity: Identity, cwd: &std::path::Path) -> FormEnv {
        FormEnv::new(
            Box::new(StaticIdentity(identity)),
            Arc::new(LocalFs::with_cwd(cwd)),
            Defaults::default(),
        )
    }

    fn jane() -> Identity {
        Identity {
            author: Some("jane".to_string()),
            email: Some("jane@example.com".to_string()),
        }
    }

    fn def(json: Value) -> PropertyDef {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn baseline_accepts_anything_and_keeps_literal_default() {
        let dir = TempDir::new().unwrap();
        let env = env_with(jane(), dir.path());
        let resolved = resolve("name", &def(json!({"type": "string", "default": "demo"})), &env).unwrap();

        assert_eq!(resolved.default, Some(json!("demo")));
        assert!(resolved.validator.check("").is_ok());
    }

    #[test]
    fn identity_fills_missing_author_default() {
        let dir = TempDir::new().unwrap();
        let env = env_with(jane(), dir.path());

        let author = resolve("author", &def(json!({"type": "string"})), &env).unwrap();
        let email = resolve("email", &def(json!({"type": "string"})), &env).unwrap();

        assert_eq!(author.default, Some(json!("jane")));
        assert_eq!(email.default, Some(json!("jane@example.com")));
    }

    #[test]
    fn schema_default_wins_over_identity() {
        let dir = TempDir::new().unwrap();
        let env = env_with(jane(), dir.path());
        let resolved = resolve("author", &def(json!({"type": "string", "default": "team"})), &env).unwrap();

        assert_eq!(resolved.default, Some(json!("team")));
    }

    #[test]
    fn missing_identity_leaves_default_empty() {
        let dir = TempDir::new().unwrap();
        let env = env_with(Identity::default(), dir.path());
        let resolved = resolve("author", &def(json!({"type": "string"})), &env).unwrap();

        assert!(resolved.default.is_none());
    }

    #[test]
    fn path_key_resolves_default_against_cwd() {
        let dir = TempDir::new().unwrap();
        let env = env_with(Identity::default(), dir.path());

        let resolved = resolve("dirPath", &def(json!({"type": "string", "default": "out"})), &env).unwrap();
        let expected = dir.path().join("out");
        assert_eq!(
            resolved.default,
            Some(Value::String(expected.to_string_lossy().into_owned()))
        );

        let bare = resolve("dirPath", &def(json!({"type": "string"})), &env).unwrap();
        assert_eq!(
            bare.default,
            Some(Value::String(dir.path().to_string_lossy().into_owned()))
        );
    }

    #[test]
    fn path_validator_requires_existing_path() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("present")).unwrap();
        let env = env_with(Identity::default(), dir.path());
        let resolved = resolve("dirPath", &def(json!({"type": "string"})), &env).unwrap();

        assert_eq!(resolved.validator.check("missing"), Err("Invalid input".to_string()));
        assert!(resolved.validator.check("present").is_ok());
        assert!(resolved.validator.check("").is_ok());
    }

    #[test]
    fn pattern_validator_uses_default_message() {
        let dir = TempDir::new().unwrap();
        let env = env_with(Identity::default(), dir.path());
        let resolved = resolve("name", &def(json!({"type": "string", "regExp": "^[a-z]+$"})), &env).unwrap();

        assert!(resolved.validator.check("abc").is_ok());
        assert_eq!(resolved.validator.check("abc1"), Err("Invalid input".to_string()));
    }

    #[test]
    fn pattern_validator_uses_custom_message() {
        let dir = TempDir::new().unwrap();
        let env = env_with(Identity::default(), dir.path());
        let resolved = resolve(
            "name",
            &def(json!({"type": "string", "regExp": "^[a-z]+$", "invalidate": "lowercase letters only"})),
            &env,
        )
        .unwrap();

        assert_eq!(
            resolved.validator.check("abc1"),
            Err("lowercase letters only".to_string())
        );
    }

    #[test]
    fn pattern_overrides_path_validation() {
        let dir = TempDir::new().unwrap();
        let env = env_with(Identity::default(), dir.path());
        let resolved = resolve("dirPath", &def(json!({"type": "string", "regExp": "^src"})), &env).unwrap();

        assert!(matches!(resolved.validator, Validator::Pattern { .. }));
        // Nonexistent, but matches the pattern.
        assert!(resolved.validator.check("src/missing").is_ok());
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let dir = TempDir::new().unwrap();
        let env = env_with(Identity::default(), dir.path());
        let err = resolve("name", &def(json!({"type": "string", "regExp": "("})), &env).unwrap_err();

        assert_eq!(err.code, crate::ErrorCode::SchemaInvalidPattern);
    }
}
