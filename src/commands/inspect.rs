use clap::Args;
use serde::Serialize;
use serde_json::Value;

use schemaform::form::{self, FormEnv, ParamMap};
use schemaform::prompt::{self, PromptExecutor};
use schemaform::question::Question;

use super::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct InspectArgs {
    /// Schema JSON (inline, @file, or - for stdin)
    pub schema: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectOutput {
    pub command: &'static str,
    pub questions: Vec<Question>,
    pub params: ParamMap,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<InspectIssue>,
}

#[derive(Debug, Serialize)]
pub struct InspectIssue {
    pub key: String,
    pub message: String,
}

/// Answers every question with its default and keeps a copy of each question.
/// A default that fails validation is reported as an issue and answered with null.
#[derive(Default)]
struct Recorder {
    questions: Vec<Question>,
    issues: Vec<InspectIssue>,
}

impl PromptExecutor for Recorder {
    fn ask(&mut self, question: &Question) -> schemaform::Result<Value> {
        self.questions.push(question.clone());

        match prompt::default_answer(question) {
            Ok(answer) => Ok(answer),
            Err(err) => {
                let message = err.details["problem"]
                    .as_str()
                    .map(str::to_string)
                    .unwrap_or(err.message);
                self.issues.push(InspectIssue {
                    key: question.name.clone(),
                    message,
                });
                Ok(Value::Null)
            }
        }
    }
}

pub fn run(args: InspectArgs, global: &GlobalArgs) -> CmdResult<InspectOutput> {
    let schema = super::load_schema(&args.schema)?;
    let env = FormEnv::local(super::resolve_defaults(global)?);

    let mut recorder = Recorder::default();
    let params = form::run(&schema, &env, &mut recorder)?;

    Ok((
        InspectOutput {
            command: "inspect",
            questions: recorder.questions,
            params,
            issues: recorder.issues,
        },
        0,
    ))
}
