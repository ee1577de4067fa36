//! Form orchestration: ask every enabled property in declaration order and
//! fold the answers into a parameter map.

use indexmap::IndexMap;
use serde_json::Value;
use std::sync::Arc;

use crate::defaults::{self, Defaults};
use crate::error::Result;
use crate::identity::{GitIdentity, IdentityProbe};
use crate::local_files::{LocalFs, PathProbe};
use crate::prompt::PromptExecutor;
use crate::question;
use crate::schema::Schema;

/// Answers keyed by property key, in the order they were given.
pub type ParamMap = IndexMap<String, Value>;

/// Environment capabilities and settings a form run depends on.
pub struct FormEnv {
    pub identity: Box<dyn IdentityProbe>,
    pub files: Arc<dyn PathProbe>,
    pub defaults: Defaults,
}

impl FormEnv {
    pub fn new(
        identity: Box<dyn IdentityProbe>,
        files: Arc<dyn PathProbe>,
        defaults: Defaults,
    ) -> Self {
        Self {
            identity,
            files,
            defaults,
        }
    }

    /// Git identity, the process working directory and the given defaults.
    pub fn local(defaults: Defaults) -> Self {
        Self::new(Box::new(GitIdentity), Arc::new(LocalFs::new()), defaults)
    }
}

impl Default for FormEnv {
    fn default() -> Self {
        Self::local(defaults::load_defaults())
    }
}

/// Run the whole form.
///
/// Questions are asked one at a time. Each question is synthesized from the
/// answers collected so far, so a cascading list always sees the final
/// answer of the property it depends on. Disabled properties are skipped and
/// never appear in the result.
pub fn run(schema: &Schema, env: &FormEnv, executor: &mut dyn PromptExecutor) -> Result<ParamMap> {
    schema.check_types()?;

    schema
        .enabled()
        .try_fold(ParamMap::new(), |mut params, (key, _)| {
            let question = question::synthesize(key, schema, &params, env)?;
            let answer = executor.ask(&question)?;
            params.insert(key.clone(), answer);
            Ok(params)
        })
}
