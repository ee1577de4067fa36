// Public modules
pub mod choices;
pub mod defaults;
pub mod error;
pub mod form;
pub mod identity;
pub mod local_files;
pub mod messages;
pub mod prompt;
pub mod question;
pub mod resolver;
pub mod schema;

// Internal modules - not part of public API
pub(crate) mod paths;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use form::{FormEnv, ParamMap};
pub use prompt::{PromptEngine, PromptExecutor};
pub use question::{Question, QuestionKind, Validator};
pub use schema::{ChoiceItem, PropertyDef, PropertyType, Schema};
