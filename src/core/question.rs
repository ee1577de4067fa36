//! Question descriptors and their synthesis from property definitions.
//!
//! A [`Question`] carries no behavior beyond its [`Validator`]; it is an
//! instruction for a [`PromptExecutor`](crate::prompt::PromptExecutor).

use regex::Regex;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::choices::{self, Choice};
use crate::error::{Error, Result};
use crate::form::{FormEnv, ParamMap};
use crate::local_files::PathProbe;
use crate::resolver;
use crate::schema::{PropertyType, Schema};

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    /// Property key the answer is stored under.
    pub name: String,
    pub message: String,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum QuestionKind {
    Input {
        masked: bool,
        default: Option<Value>,
        validator: Validator,
    },
    Confirm {
        default: bool,
    },
    Select {
        choices: Vec<Choice>,
        default: Option<Value>,
        #[serde(rename = "allowMultiple")]
        allow_multiple: bool,
        #[serde(rename = "pageSize")]
        page_size: usize,
    },
}

/// Answer check attached to input questions. One rule per question.
#[derive(Clone)]
pub enum Validator {
    AcceptAll,
    /// The answer, resolved against the working directory, must exist.
    PathExists {
        files: Arc<dyn PathProbe>,
        message: String,
    },
    /// The answer must match the pattern somewhere.
    Pattern { regex: Regex, message: String },
}

impl Validator {
    /// `Err` carries the message to show before asking again.
    pub fn check(&self, answer: &str) -> std::result::Result<(), String> {
        match self {
            Validator::AcceptAll => Ok(()),
            Validator::PathExists { files, message } => {
                if files.exists(&files.resolve(answer)) {
                    Ok(())
                } else {
                    Err(message.clone())
                }
            }
            Validator::Pattern { regex, message } => {
                if regex.is_match(answer) {
                    Ok(())
                } else {
                    Err(message.clone())
                }
            }
        }
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validator::AcceptAll => f.write_str("AcceptAll"),
            Validator::PathExists { message, .. } => f
                .debug_struct("PathExists")
                .field("message", message)
                .finish_non_exhaustive(),
            Validator::Pattern { regex, message } => f
                .debug_struct("Pattern")
                .field("regex", &regex.as_str())
                .field("message", message)
                .finish(),
        }
    }
}

impl Serialize for Validator {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        match self {
            Validator::AcceptAll => {
                map.serialize_entry("rule", "none")?;
            }
            Validator::PathExists { message, .. } => {
                map.serialize_entry("rule", "pathExists")?;
                map.serialize_entry("message", message)?;
            }
            Validator::Pattern { regex, message } => {
                map.serialize_entry("rule", "pattern")?;
                map.serialize_entry("pattern", regex.as_str())?;
                map.serialize_entry("message", message)?;
            }
        }
        map.end()
    }
}

/// Build the question for `key` given the answers collected so far.
pub fn synthesize(key: &str, schema: &Schema, params: &ParamMap, env: &FormEnv) -> Result<Question> {
    let def = schema.property(key).ok_or_else(|| {
        Error::validation_invalid_argument(key, "Property not found in schema", None, None)
    })?;
    let locale = env.defaults.locale;

    let (message, kind) = match &def.kind {
        PropertyType::String | PropertyType::Number | PropertyType::Password => {
            let resolved = resolver::resolve(key, def, env)?;
            (
                locale.input_message(&def.name),
                QuestionKind::Input {
                    masked: def.kind == PropertyType::Password,
                    default: resolved.default,
                    validator: resolved.validator,
                },
            )
        }
        // The schema default is not consulted for yes/no questions.
        PropertyType::Boolean => (
            locale.confirm_message(&def.name),
            QuestionKind::Confirm { default: false },
        ),
        PropertyType::List => {
            let choices = choices::display_choices(choices::resolve_choices(key, schema, params));
            let default = choices.first().map(|c| c.value.clone());
            (
                locale.select_message(&def.name),
                QuestionKind::Select {
                    choices,
                    default,
                    allow_multiple: def.checkbox,
                    page_size: env.defaults.page_size,
                },
            )
        }
        PropertyType::Other(name) => return Err(Error::schema_unknown_type(key, name.as_str())),
    };

    Ok(Question {
        name: key.to_string(),
        message,
        kind,
    })
}
